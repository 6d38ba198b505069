//! Single-process backend used when MPI support is compiled out.

use super::{Rank, Runtime};
use crate::mp_error::MpResult;

/// World size reported by [`StubRuntime`].
///
/// This is `0`, not `1`: it reproduces the wrapper's long-standing behaviour
/// even though a lone rank-0 process would more naturally report a size of 1.
/// Left as-is until the intended single-process semantics are confirmed.
pub const STUB_WORLD_SIZE: Rank = 0;

/// No-op runtime: always rank 0, never fails.
#[derive(Clone, Copy, Debug, Default)]
pub struct StubRuntime;

impl Runtime for StubRuntime {
    const NAME: &'static str = "stub";

    fn initialize(args: &[String]) -> MpResult<Self> {
        log::debug!("stub runtime: initialize with {} argument(s)", args.len());
        Ok(StubRuntime)
    }

    fn rank(&self) -> MpResult<Rank> {
        Ok(0)
    }

    fn size(&self) -> MpResult<Rank> {
        Ok(STUB_WORLD_SIZE)
    }

    fn finalize(self) -> MpResult<()> {
        log::debug!("stub runtime: finalize");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stub_is_rank_zero_size_zero() {
        let rt = StubRuntime::initialize(&[]).unwrap();
        assert_eq!(rt.rank().unwrap(), 0);
        assert_eq!(rt.size().unwrap(), STUB_WORLD_SIZE);
        assert!(rt.finalize().is_ok());
    }

    #[test]
    fn stub_can_be_initialized_repeatedly() {
        let a = StubRuntime::initialize(&[]).unwrap();
        let b = StubRuntime::initialize(&[]).unwrap();
        assert!(a.finalize().is_ok());
        assert!(b.finalize().is_ok());
    }
}
