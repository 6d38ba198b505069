//! Direct-call world-size program: talks to the `mpi` crate with no facade.
//!
//! cargo mpirun -n 4 --features mpi-support --bin world_size_direct

use mpi::traits::Communicator;

fn main() {
    env_logger::init();

    // Like the wrapped program's default policy, failures are not surfaced
    // through the exit code.
    let Some(universe) = mpi::initialize() else {
        log::warn!("MPI already initialized, nothing to report");
        return;
    };
    let world = universe.world();

    let world_size = world.size();
    let world_rank = world.rank();

    if world_rank == 0 {
        println!("World size: {}", world_size);
    }

    // MPI_Finalize
    drop(world);
    drop(universe);
}
