//! MPI backend (feature = "mpi-support").
//!
//! Thin delegation to the `mpi` crate. `MPI_Finalize` runs when the
//! [`Universe`] is dropped, so `finalize` simply drops it.

use super::{Rank, Runtime};
use crate::mp_error::{MpError, MpResult};
use mpi::environment::Universe;
use mpi::topology::SimpleCommunicator;
use mpi::traits::Communicator;

pub struct MpiRuntime {
    universe: Universe,
    world: SimpleCommunicator,
}

impl Runtime for MpiRuntime {
    const NAME: &'static str = "mpi";

    fn initialize(args: &[String]) -> MpResult<Self> {
        // The binding calls MPI_Init with a null argv, which MPI >= 2 allows.
        log::debug!("mpi runtime: initialize ({} argument(s))", args.len());
        let universe = mpi::initialize().ok_or(MpError::AlreadyInitialized)?;
        let world = universe.world();
        Ok(MpiRuntime { universe, world })
    }

    fn rank(&self) -> MpResult<Rank> {
        let rank = self.world.rank();
        debug_assert!(0 <= rank && rank < self.world.size());
        Ok(rank)
    }

    fn size(&self) -> MpResult<Rank> {
        Ok(self.world.size())
    }

    fn finalize(self) -> MpResult<()> {
        log::debug!("mpi runtime: finalize on rank {}", self.world.rank());
        let MpiRuntime { universe, world } = self;
        drop(world);
        drop(universe);
        Ok(())
    }
}
