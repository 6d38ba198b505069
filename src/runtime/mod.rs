//! Capability interface over the distributed runtime.
//!
//! A [`Runtime`] value is the process-scoped handle: `initialize` creates it,
//! the queries borrow it and `finalize` consumes it. Which backend the
//! programs use is decided at build time through [`DefaultRuntime`]:
//!
//! | feature        | `DefaultRuntime` |
//! |----------------|------------------|
//! | (none)         | [`StubRuntime`]  |
//! | `mpi-support`  | `MpiRuntime`     |

use crate::mp_error::MpResult;

pub mod stub;
#[cfg(feature = "mpi-support")]
pub mod mpi_backend;

pub use stub::{StubRuntime, STUB_WORLD_SIZE};
#[cfg(feature = "mpi-support")]
pub use mpi_backend::MpiRuntime;

/// Rank / size integer, matching the MPI binding.
pub type Rank = i32;

/// Initialize / query / finalize, and nothing else.
pub trait Runtime: Sized {
    /// Short backend name for logs.
    const NAME: &'static str;

    /// Bring the runtime up, forwarding the process arguments.
    fn initialize(args: &[String]) -> MpResult<Self>;

    /// Rank of this process in the global group.
    fn rank(&self) -> MpResult<Rank>;

    /// Number of processes in the global group.
    fn size(&self) -> MpResult<Rank>;

    /// Shut the runtime down. Consuming `self` makes a second call impossible.
    fn finalize(self) -> MpResult<()>;
}

#[cfg(feature = "mpi-support")]
pub type DefaultRuntime = MpiRuntime;
#[cfg(not(feature = "mpi-support"))]
pub type DefaultRuntime = StubRuntime;
