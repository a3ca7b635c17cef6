//! Which counters to open, in which order.

#[cfg(test)]
mod test;

use std::slice;

use crate::event::hw::{Cache, Hardware, Op, OpResult, Type};
use crate::event::sw::Software;
use crate::event::{Domain, Event};

/// One counter to open: what to count and how to label it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CounterSpec {
    #[cfg_attr(feature = "serde", serde(flatten))]
    event: Event,
    name: String,
}

impl CounterSpec {
    pub fn new(event: impl Into<Event>, name: impl Into<String>) -> Self {
        Self {
            event: event.into(),
            name: name.into(),
        }
    }

    pub fn event(&self) -> &Event {
        &self.event
    }

    pub fn domain(&self) -> Domain {
        self.event.domain
    }

    pub fn config(&self) -> u64 {
        self.event.config
    }

    /// Label written next to the counter value.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Ordered list of counters.
///
/// The first entry becomes the group leader, the catalog index of every
/// entry is the slot its value is reported under.
///
/// # Examples
///
/// ```rust
/// use perf_counter_group::catalog::{Catalog, CounterSpec};
/// use perf_counter_group::event::hw::Hardware;
/// use perf_counter_group::event::sw::Software;
///
/// let catalog = Catalog::new()
///     .with(CounterSpec::new(Hardware::Instr, "instructions"))
///     .with(CounterSpec::new(Software::PageFault, "page-faults"));
///
/// assert_eq!(catalog.len(), 2);
/// assert_eq!(catalog.names().collect::<Vec<_>>(), ["instructions", "page-faults"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Catalog {
    #[cfg_attr(feature = "serde", serde(rename = "counter", default))]
    specs: Vec<CounterSpec>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Retired instructions, data TLB loads / misses and page faults.
    pub fn dtlb() -> Self {
        let dtlb = |op, result| Cache(Type::Dtlb, op, result);
        Self::new()
            .with(CounterSpec::new(Hardware::Instr, "instructions"))
            .with(CounterSpec::new(
                dtlb(Op::Read, OpResult::Miss),
                "dTLB-load-misses",
            ))
            .with(CounterSpec::new(dtlb(Op::Read, OpResult::Access), "dTLB-loads"))
            .with(CounterSpec::new(
                dtlb(Op::Write, OpResult::Miss),
                "dTLB-store-misses",
            ))
            .with(CounterSpec::new(Software::PageFault, "page-faults"))
    }

    pub fn with(mut self, spec: CounterSpec) -> Self {
        self.push(spec);
        self
    }

    pub fn push(&mut self, spec: CounterSpec) {
        self.specs.push(spec);
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&CounterSpec> {
        self.specs.get(index)
    }

    pub fn iter(&self) -> slice::Iter<'_, CounterSpec> {
        self.specs.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.specs.iter().map(CounterSpec::name)
    }
}

impl FromIterator<CounterSpec> for Catalog {
    fn from_iter<T: IntoIterator<Item = CounterSpec>>(iter: T) -> Self {
        Self {
            specs: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a CounterSpec;
    type IntoIter = slice::Iter<'a, CounterSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
