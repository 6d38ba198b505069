//! # mpwrap
//!
//! A minimal message-passing facade: initialize the distributed runtime, ask
//! for this process's rank and the world size, finalize. The backend is picked
//! at build time:
//!
//! - default build: a single-process stub ([`runtime::StubRuntime`]) that
//!   never fails and reports rank 0;
//! - `mpi-support`: real MPI through the `mpi` crate.
//!
//! Every operation returns an [`MpResult`]; callers decide whether to
//! propagate or explicitly ignore failures (see [`config::StatusPolicy`]).
//!
//! ## Usage
//!
//! ```toml
//! [dependencies]
//! mpwrap = "0.1"
//! # features = ["mpi-support"]
//! ```
//!
//! ```no_run
//! use mpwrap::prelude::*;
//!
//! fn main() -> MpResult<()> {
//!     let args: Vec<String> = std::env::args().collect();
//!     let session = facade::init(&args)?;
//!     let size = facade::comm_size(&session)?;
//!     if facade::comm_rank(&session)? == 0 {
//!         println!("World size: {size}");
//!     }
//!     facade::finalize(session)
//! }
//! ```

pub mod config;
pub mod facade;
pub mod mp_error;
pub mod report;
pub mod runtime;

pub use mp_error::{MpError, MpResult};

/// Commonly used items.
pub mod prelude {
    pub use crate::config::{Config, StatusPolicy};
    pub use crate::facade::{self, Session};
    pub use crate::mp_error::{MpError, MpResult};
    #[cfg(feature = "mpi-support")]
    pub use crate::runtime::MpiRuntime;
    pub use crate::runtime::{DefaultRuntime, Rank, Runtime, StubRuntime};
}
