use super::{Domain, Event};
use crate::ffi::bindings as b;

/// Generalized hardware event.
#[derive(Clone, Debug)]
pub enum Hardware {
    CpuCycle,
    BusCycle,
    RefCpuCycle,

    CacheMiss,
    CacheAccess,

    BranchMiss,
    BranchInstr,

    BackendStalledCycle,
    FrontendStalledCycle,

    Instr,
}

super::into_event!(Hardware, value, {
    let config = match value {
        Hardware::CpuCycle => b::PERF_COUNT_HW_CPU_CYCLES as u64,
        Hardware::BusCycle => b::PERF_COUNT_HW_BUS_CYCLES as u64,
        Hardware::RefCpuCycle => b::PERF_COUNT_HW_REF_CPU_CYCLES as u64,

        Hardware::CacheMiss => b::PERF_COUNT_HW_CACHE_MISSES as u64,
        Hardware::CacheAccess => b::PERF_COUNT_HW_CACHE_REFERENCES as u64,

        Hardware::BranchMiss => b::PERF_COUNT_HW_BRANCH_MISSES as u64,
        Hardware::BranchInstr => b::PERF_COUNT_HW_BRANCH_INSTRUCTIONS as u64,

        Hardware::BackendStalledCycle => b::PERF_COUNT_HW_STALLED_CYCLES_BACKEND as u64,
        Hardware::FrontendStalledCycle => b::PERF_COUNT_HW_STALLED_CYCLES_FRONTEND as u64,

        Hardware::Instr => b::PERF_COUNT_HW_INSTRUCTIONS as u64,
    };

    Event::new(Domain::Hardware, config)
});

/// Hardware cache event.
///
/// Packed into the config as `(result << 16) | (op << 8) | cache`.
#[derive(Clone, Debug)]
pub struct Cache(pub Type, pub Op, pub OpResult);

/// Which cache.
#[derive(Clone, Debug)]
pub enum Type {
    L1d,
    L1i,
    Ll,
    Dtlb,
    Itlb,
    Bpu,
    Node,
}

/// Cache operation.
#[derive(Clone, Debug)]
pub enum Op {
    Read,
    Write,
    Prefetch,
}

/// Cache operation result.
#[derive(Clone, Debug)]
pub enum OpResult {
    Miss,
    Access,
}

super::into_event!(Cache, value, {
    let Cache(ty, op, result) = value;
    let id = match ty {
        Type::L1d => b::PERF_COUNT_HW_CACHE_L1D as u64,
        Type::L1i => b::PERF_COUNT_HW_CACHE_L1I as u64,
        Type::Ll => b::PERF_COUNT_HW_CACHE_LL as u64,
        Type::Dtlb => b::PERF_COUNT_HW_CACHE_DTLB as u64,
        Type::Itlb => b::PERF_COUNT_HW_CACHE_ITLB as u64,
        Type::Bpu => b::PERF_COUNT_HW_CACHE_BPU as u64,
        Type::Node => b::PERF_COUNT_HW_CACHE_NODE as u64,
    };
    let op = match op {
        Op::Read => b::PERF_COUNT_HW_CACHE_OP_READ as u64,
        Op::Write => b::PERF_COUNT_HW_CACHE_OP_WRITE as u64,
        Op::Prefetch => b::PERF_COUNT_HW_CACHE_OP_PREFETCH as u64,
    };
    let op_result = match result {
        OpResult::Miss => b::PERF_COUNT_HW_CACHE_RESULT_MISS as u64,
        OpResult::Access => b::PERF_COUNT_HW_CACHE_RESULT_ACCESS as u64,
    };

    Event::new(Domain::HwCache, id | (op << 8) | (op_result << 16))
});
