//! Events a counter can count.


pub mod hw;
pub mod raw;
pub mod sw;

use crate::ffi::bindings as b;

/// Kernel counter domain, the `type` field of `perf_event_attr`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Domain {
    /// Generalized hardware events.
    Hardware,
    /// Cache events, `config` packs cache id, operation and result.
    HwCache,
    /// Kernel software events.
    Software,
    /// Implementation-specific PMU events.
    Raw,
}

impl Domain {
    pub(crate) fn as_type(&self) -> u32 {
        match self {
            Domain::Hardware => b::PERF_TYPE_HARDWARE as _,
            Domain::HwCache => b::PERF_TYPE_HW_CACHE as _,
            Domain::Software => b::PERF_TYPE_SOFTWARE as _,
            Domain::Raw => b::PERF_TYPE_RAW as _,
        }
    }
}

/// Event selector: a domain plus the 64-bit sub-selector within it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Event {
    pub domain: Domain,
    pub config: u64,
}

impl Event {
    pub const fn new(domain: Domain, config: u64) -> Self {
        Self { domain, config }
    }
}

impl From<(Domain, u64)> for Event {
    fn from((domain, config): (Domain, u64)) -> Self {
        Self { domain, config }
    }
}

macro_rules! into_event {
    ($ty:ty, $value:ident, $impl:expr) => {
        impl From<&$ty> for crate::event::Event {
            fn from($value: &$ty) -> Self {
                $impl
            }
        }

        impl From<$ty> for crate::event::Event {
            fn from(value: $ty) -> Self {
                (&value).into()
            }
        }
    };
}
use into_event;
