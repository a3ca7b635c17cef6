use std::borrow::Borrow;
use std::cell::Cell;
use std::io::{self, Write};

use tracing::{debug, info, trace, warn};

use super::{format, Counter, GroupedReadRecord, ResolvedValues};
use crate::catalog::Catalog;
use crate::config::Opts;
use crate::error::{ControlOp, Error, ReadError, Result};
use crate::ffi::bindings as b;
use crate::ffi::syscall;

/// Group-wide counting state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum State {
    /// Opened, never started.
    Disabled,
    Running,
    Stopped,
}

/// Counter group.
///
/// An event group is scheduled onto the CPU as a unit: it will be put onto
/// the CPU only if all of the events in the group can be put onto the CPU.
/// Reset, start and stop go through the leader and apply to every member
/// at once, so all values of one read cover the same interval.
///
/// The group owns every descriptor it opened. Dropping it closes the
/// members, then the leader.
///
/// # Examples
///
/// ```rust,no_run
/// use perf_counter_group::catalog::{Catalog, CounterSpec};
/// use perf_counter_group::count::group::CounterGroup;
/// use perf_counter_group::event::hw::Hardware;
/// use perf_counter_group::event::sw::Software;
///
/// let catalog = Catalog::new()
///     .with(CounterSpec::new(Hardware::Instr, "instructions"))
///     .with(CounterSpec::new(Software::PageFault, "page-faults"));
///
/// let mut group = CounterGroup::open_default(&catalog).unwrap();
///
/// group.reset().unwrap();
/// group.start().unwrap();
/// let pages = vec![1_u8; 1 << 20];
/// std::hint::black_box(&pages);
/// group.stop().unwrap();
///
/// group.report(std::io::stdout()).unwrap();
/// ```
#[derive(Debug)]
pub struct CounterGroup {
    // The leader comes first, members follow in catalog order.
    counters: Vec<Counter>,
    ids: Vec<u64>,
    names: Vec<String>,
    read_buf: Vec<u8>,
    state: Cell<State>,
}

impl CounterGroup {
    /// Opens one counter per catalog entry, the first one as group leader.
    ///
    /// An empty catalog gives an empty group on which every operation is a no-op.
    ///
    /// On failure every counter opened so far is closed before the error is
    /// returned.
    pub fn open(catalog: &Catalog, opts: impl Borrow<Opts>) -> Result<Self> {
        let opts = opts.borrow();

        let mut counters: Vec<Counter> = Vec::with_capacity(catalog.len());
        for (index, spec) in catalog.iter().enumerate() {
            let counter = Counter::new(spec, index, opts, counters.first()).inspect_err(|e| {
                if !counters.is_empty() {
                    debug!(released = counters.len(), "{}, closing opened counters", e);
                }
            })?;
            counters.push(counter);
        }

        let ids: Vec<_> = counters.iter().map(Counter::id).collect();
        let names = catalog.names().map(str::to_owned).collect();
        let read_buf = vec![0; GroupedReadRecord::buf_size(counters.len())];

        if !counters.is_empty() {
            info!(members = counters.len(), "opened counter group");
        }

        Ok(Self {
            counters,
            ids,
            names,
            read_buf,
            state: Cell::new(State::Disabled),
        })
    }

    /// Same as [`open`][Self::open] with [`Opts::default`].
    pub fn open_default(catalog: &Catalog) -> Result<Self> {
        Self::open(catalog, Opts::default())
    }

    /// Returns a reference to the leader of the counter group.
    pub fn leader(&self) -> Option<&Counter> {
        self.counters.first()
    }

    /// All counters in catalog order, the leader first.
    pub fn counters(&self) -> &[Counter] {
        &self.counters
    }

    /// Kernel-assigned ids in catalog order.
    pub fn ids(&self) -> &[u64] {
        &self.ids
    }

    /// Counter names in catalog order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.counters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counters.is_empty()
    }

    pub fn state(&self) -> State {
        self.state.get()
    }

    /// Clears the counts of all counters in the group.
    ///
    /// Meant to be called while the group is not running, resetting a running
    /// group is allowed but leaves a window where members disagree.
    pub fn reset(&self) -> Result<()> {
        if self.state.get() == State::Running {
            warn!("resetting a running counter group");
        }
        self.control(ControlOp::Reset)
    }

    /// Enables all counters in the group.
    pub fn start(&self) -> Result<()> {
        self.control(ControlOp::Start)?;
        self.state.set(State::Running);
        Ok(())
    }

    /// Disables all counters in the group, freezing their counts.
    pub fn stop(&self) -> Result<()> {
        self.control(ControlOp::Stop)?;
        if self.state.get() == State::Running {
            self.state.set(State::Stopped);
        }
        Ok(())
    }

    fn control(&self, op: ControlOp) -> Result<()> {
        let Some(leader) = self.leader() else {
            return Ok(());
        };

        let file = leader.file();
        let flags: u32 = b::PERF_IOC_FLAG_GROUP as _;
        let result: io::Result<i32> = match op {
            ControlOp::Reset => syscall!(reset, file, flags),
            ControlOp::Start => syscall!(enable, file, flags),
            ControlOp::Stop => syscall!(disable, file, flags),
        };
        result.map_err(|source| Error::Control { op, source })?;

        debug!(%op, "controlled counter group");
        Ok(())
    }

    /// Reads the current values of all counters through the leader.
    ///
    /// Values come back in the order the kernel reports them, each one
    /// attributed to its catalog slot.
    pub fn read(&mut self) -> Result<ResolvedValues> {
        let Some(leader) = self.counters.first() else {
            return Ok(ResolvedValues::default());
        };

        let len: usize =
            syscall!(read, leader.file(), self.read_buf.as_mut_slice()).map_err(ReadError::Io)?;
        let record = GroupedReadRecord::decode(&self.read_buf[..len], self.ids.len())?;
        trace!(entries = record.len(), bytes = len, "decoded grouped read record");

        ResolvedValues::resolve(&record, &self.ids)
    }

    /// Reads the group and writes one `"<value>\t<name>"` line per counter to `sink`.
    pub fn report(&mut self, sink: impl Write) -> Result<()> {
        let resolved = self.read()?;
        format(&resolved, &self.names, sink)
    }

    /// Stops the group, reports it and starts it again.
    ///
    /// Use this to dump intermediate values of a long measurement
    /// without counting the reporting itself.
    pub fn checkpoint(&mut self, sink: impl Write) -> Result<()> {
        self.stop()?;
        self.report(sink)?;
        self.start()
    }

    /// Stops the group, reports it and clears the counts.
    pub fn finish(&mut self, sink: impl Write) -> Result<()> {
        self.stop()?;
        self.report(sink)?;
        self.reset()
    }

    /// Counts the events of `f` from zero and returns its result with the values.
    pub fn measure<R>(&mut self, f: impl FnOnce() -> R) -> Result<(R, ResolvedValues)> {
        self.reset()?;
        self.start()?;
        let result = f();
        self.stop()?;
        let resolved = self.read()?;
        Ok((result, resolved))
    }
}

impl Drop for CounterGroup {
    fn drop(&mut self) {
        if self.counters.is_empty() {
            return;
        }
        debug!(members = self.counters.len(), "closing counter group");
        // Members first, the leader last.
        while self.counters.pop().is_some() {}
    }
}
