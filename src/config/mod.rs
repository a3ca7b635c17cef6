//! Options shared by every counter of a group.


use crate::ffi::bindings as b;

pub(crate) mod attr;
mod target;

pub use target::*;

#[derive(Clone, Debug)]
pub struct Opts {
    /// Exclude events with privilege levels.
    pub exclude: Priv,

    /// New child tasks of the target inherit the counters.
    ///
    /// This applies only to tasks created after the group is opened.
    pub inherit: bool,

    /// Which task and CPU to count on.
    pub target: Target,
}

impl Default for Opts {
    /// Counts the calling process and its future children on any CPU,
    /// user and kernel space, hypervisor excluded.
    fn default() -> Self {
        Self {
            exclude: Priv {
                hv: true,
                ..Default::default()
            },
            inherit: true,
            target: Target::default(),
        }
    }
}

/// Privilege levels.
#[derive(Clone, Debug, Default)]
pub struct Priv {
    /// User space.
    pub user: bool,

    /// Kernel space.
    ///
    /// Counting kernel space requires `perf_event_paranoid < 2`
    /// or `CAP_PERFMON`.
    pub kernel: bool,

    /// Hypervisor.
    pub hv: bool,
}

// Every member reports its value and id through the leader.
pub(crate) const READ_FORMAT: u64 = (b::PERF_FORMAT_GROUP | b::PERF_FORMAT_ID) as _;
