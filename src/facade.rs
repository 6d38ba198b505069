//! The four wrapped entry points.
//!
//! Client code calls these instead of naming MPI itself; the backend behind
//! [`Session`] is whatever [`DefaultRuntime`] resolves to for this build.
//! Results are passed through untouched.

use crate::mp_error::{status_code, MpResult};
use crate::report::Calls;
use crate::runtime::{DefaultRuntime, Rank, Runtime};

/// Handle returned by [`init`] and consumed by [`finalize`].
pub type Session = DefaultRuntime;

/// Name of the backend compiled into this build.
pub fn backend_name() -> &'static str {
    <Session as Runtime>::NAME
}

/// The facade's four operations, as consumed by [`crate::report::run`].
pub fn calls() -> Calls<Session> {
    Calls {
        init,
        comm_size,
        comm_rank,
        finalize,
    }
}

pub fn init(args: &[String]) -> MpResult<Session> {
    let res = Session::initialize(args);
    log::trace!("init -> {}", status_code(&res));
    res
}

pub fn finalize(session: Session) -> MpResult<()> {
    let res = session.finalize();
    log::trace!("finalize -> {}", status_code(&res));
    res
}

pub fn comm_rank(session: &Session) -> MpResult<Rank> {
    let res = session.rank();
    log::trace!("comm_rank -> {}", status_code(&res));
    res
}

pub fn comm_size(session: &Session) -> MpResult<Rank> {
    let res = session.size();
    log::trace!("comm_size -> {}", status_code(&res));
    res
}
