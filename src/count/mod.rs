#[cfg(test)]
mod test;

use std::fs::File;
use std::os::fd::AsRawFd;

use tracing::debug;

use crate::catalog::CounterSpec;
use crate::config::{attr, Opts};
use crate::error::{Error, Result};
use crate::ffi::bindings as b;
use crate::ffi::syscall;

pub mod group;
mod record;

pub use group::*;
pub use record::*;

/// A single opened counter together with the id the kernel assigned to it.
///
/// Counters only exist as part of a [`CounterGroup`], which owns them.
#[derive(Debug)]
pub struct Counter {
    perf: File,
    id: u64,
}

impl Counter {
    /// Opens the counter described by `spec`, as a new group leader when
    /// `leader` is `None`, otherwise as a member of the leader's group.
    ///
    /// The descriptor is closed again if its id cannot be queried.
    pub(crate) fn new(
        spec: &CounterSpec,
        index: usize,
        opts: &Opts,
        leader: Option<&Counter>,
    ) -> Result<Self> {
        let mut attr = attr::from(spec.event(), opts);
        let group_fd = leader.map_or(-1, |it| it.perf.as_raw_fd());
        let flags: u64 = b::PERF_FLAG_FD_CLOEXEC as _;

        let perf: File = syscall!(
            perf_event_open,
            &mut attr,
            opts.target.pid,
            opts.target.cpu,
            group_fd,
            flags,
        )
        .map_err(|source| Error::Open {
            index,
            name: spec.name().to_owned(),
            source,
        })?;

        let id: u64 = syscall!(query_id, &perf).map_err(|source| Error::IdentifierQuery {
            index,
            name: spec.name().to_owned(),
            source,
        })?;

        debug!(index, name = spec.name(), id, fd = perf.as_raw_fd(), "opened counter");

        Ok(Self { perf, id })
    }

    pub fn file(&self) -> &File {
        &self.perf
    }

    /// Kernel-assigned id, unique for the lifetime of the counter.
    pub fn id(&self) -> u64 {
        self.id
    }
}
