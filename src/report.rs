//! The world-size program flow: initialize, query size and rank, let the
//! leader print, finalize.

use std::io::Write;

use crate::config::StatusPolicy;
use crate::mp_error::MpResult;
use crate::runtime::{Rank, Runtime};

/// Rank that prints aggregate output.
pub const LEADER: Rank = 0;

/// The four calls the flow is driven through, over handle type `S`.
pub struct Calls<S> {
    pub init: fn(&[String]) -> MpResult<S>,
    pub comm_size: fn(&S) -> MpResult<Rank>,
    pub comm_rank: fn(&S) -> MpResult<Rank>,
    pub finalize: fn(S) -> MpResult<()>,
}

impl<R: Runtime> Calls<R> {
    /// Call backend `R` directly, bypassing the facade.
    pub fn of_runtime() -> Self {
        Calls {
            init: R::initialize,
            comm_size: R::size,
            comm_rank: R::rank,
            finalize: R::finalize,
        }
    }
}

/// The output line for `rank`, or `None` if `rank` is not the leader.
pub fn world_size_line(rank: Rank, size: Rank) -> Option<String> {
    (rank == LEADER).then(|| format!("World size: {size}"))
}

/// Apply `policy` to the outcome of facade call `op`.
///
/// `Ok(None)` means the failure was logged and dropped.
pub fn settle<T>(op: &str, res: MpResult<T>, policy: StatusPolicy) -> MpResult<Option<T>> {
    match res {
        Ok(v) => Ok(Some(v)),
        Err(e) => match policy {
            StatusPolicy::Propagate => Err(e),
            StatusPolicy::Ignore => {
                log::warn!("{op} failed (status {}), ignoring: {e}", e.code());
                Ok(None)
            }
        },
    }
}

/// Run the whole sequence once through `calls`, writing to `out`.
pub fn run<S, W>(
    calls: &Calls<S>,
    args: &[String],
    out: &mut W,
    policy: StatusPolicy,
) -> MpResult<()>
where
    W: Write,
{
    log::debug!("status policy {:?}", policy);

    let Some(session) = settle("initialize", (calls.init)(args), policy)? else {
        return Ok(());
    };

    let size = settle("size", (calls.comm_size)(&session), policy)?;
    let rank = settle("rank", (calls.comm_rank)(&session), policy)?;

    if let (Some(rank), Some(size)) = (rank, size) {
        if let Some(line) = world_size_line(rank, size) {
            writeln!(out, "{line}")?;
            out.flush()?;
        }
    }

    settle("finalize", (calls.finalize)(session), policy)?;
    Ok(())
}
