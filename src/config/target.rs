/// Any CPU (or any process, depending on position).
#[derive(Clone, Copy, Debug)]
pub struct Any;

#[derive(Clone, Copy, Debug)]
pub struct Cpu(pub u32);

impl Cpu {
    pub const ANY: Any = Any;
}

#[derive(Clone, Copy, Debug)]
pub struct Proc(pub u32);

impl Proc {
    pub const CURRENT: Proc = Proc(0);
}

/// The `pid` / `cpu` pair passed to `perf_event_open`.
///
/// Defaults to the calling process on any CPU. System-wide counting
/// (`pid == -1`) cannot be combined with `inherit` and is not offered.
#[derive(Clone, Debug)]
pub struct Target {
    pub(crate) pid: i32,
    pub(crate) cpu: i32,
}

impl Default for Target {
    fn default() -> Self {
        (Proc::CURRENT, Cpu::ANY).into()
    }
}

impl From<(Proc, Cpu)> for Target {
    fn from((Proc(pid), Cpu(cpu)): (Proc, Cpu)) -> Self {
        Self {
            pid: pid as _,
            cpu: cpu as _,
        }
    }
}

impl From<(Proc, Any)> for Target {
    fn from((Proc(pid), _): (Proc, Any)) -> Self {
        Self {
            pid: pid as _,
            cpu: -1,
        }
    }
}
