//! Run-time configuration, read once from the environment.
//!
//! The backend itself is fixed at build time by the `mpi-support` feature;
//! the only run-time knob is how the programs treat failed status codes.

use std::str::FromStr;

/// Environment variable selecting the [`StatusPolicy`].
pub const STATUS_POLICY_VAR: &str = "MPWRAP_STATUS_POLICY";

/// What the programs do with a failed facade call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusPolicy {
    /// Log and discard, keep going, exit 0.
    #[default]
    Ignore,
    /// Stop at the first failure and report it.
    Propagate,
}

impl FromStr for StatusPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ignore" => Ok(StatusPolicy::Ignore),
            "propagate" => Ok(StatusPolicy::Propagate),
            other => Err(format!("unknown status policy `{other}`")),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Config {
    pub status_policy: StatusPolicy,
}

impl Config {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup.
    ///
    /// Unknown values fall back to the default with a warning.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let status_policy = match lookup(STATUS_POLICY_VAR) {
            None => StatusPolicy::default(),
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                log::warn!("{STATUS_POLICY_VAR}: {e}; using `ignore`");
                StatusPolicy::default()
            }),
        };
        Config { status_policy }
    }
}
