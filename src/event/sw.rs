use super::{Domain, Event};
use crate::ffi::bindings as b;

/// Software event maintained by the kernel.
#[derive(Clone, Debug)]
pub enum Software {
    CpuClock,
    TaskClock,

    PageFault,
    MinorPageFault,
    MajorPageFault,

    EmuFault,
    AlignFault,

    CtxSwitch,
    CpuMigration,

    Dummy,
}

super::into_event!(Software, value, {
    let config = match value {
        Software::CpuClock => b::PERF_COUNT_SW_CPU_CLOCK as u64,
        Software::TaskClock => b::PERF_COUNT_SW_TASK_CLOCK as u64,

        Software::PageFault => b::PERF_COUNT_SW_PAGE_FAULTS as u64,
        Software::MinorPageFault => b::PERF_COUNT_SW_PAGE_FAULTS_MIN as u64,
        Software::MajorPageFault => b::PERF_COUNT_SW_PAGE_FAULTS_MAJ as u64,

        Software::EmuFault => b::PERF_COUNT_SW_EMULATION_FAULTS as u64,
        Software::AlignFault => b::PERF_COUNT_SW_ALIGNMENT_FAULTS as u64,

        Software::CtxSwitch => b::PERF_COUNT_SW_CONTEXT_SWITCHES as u64,
        Software::CpuMigration => b::PERF_COUNT_SW_CPU_MIGRATIONS as u64,

        Software::Dummy => b::PERF_COUNT_SW_DUMMY as u64,
    };

    Event::new(Domain::Software, config)
});
