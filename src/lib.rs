//! Open, control and read a group of `perf_event_open` counters as one unit.
//!
//! A [`Catalog`][catalog::Catalog] lists the counters to open. The first one
//! becomes the leader of a [`CounterGroup`][count::group::CounterGroup] and
//! every other one joins its group, so all of them are reset, started and
//! stopped together and read back in a single grouped read record.
//!
//! ## Example
//!
//! Count retired instructions and page faults of touching a fresh buffer.
//!
//! ```rust,no_run
//! use perf_counter_group::catalog::{Catalog, CounterSpec};
//! use perf_counter_group::count::group::CounterGroup;
//! use perf_counter_group::event::hw::Hardware;
//! use perf_counter_group::event::sw::Software;
//!
//! let catalog = Catalog::new()
//!     .with(CounterSpec::new(Hardware::Instr, "instructions"))
//!     .with(CounterSpec::new(Software::PageFault, "page-faults"));
//!
//! let mut group = CounterGroup::open_default(&catalog).unwrap();
//!
//! let (_, values) = group
//!     .measure(|| {
//!         let buf = vec![1_u8; 1 << 20];
//!         std::hint::black_box(buf);
//!     })
//!     .unwrap();
//!
//! let faults = values.value_of(group.names(), "page-faults").unwrap();
//! println!("{} page faults", faults);
//! ```
//!
//! ## Permissions
//!
//! Counting kernel space (the default) needs `/proc/sys/kernel/perf_event_paranoid`
//! below 2 or `CAP_PERFMON`, set [`Priv::kernel`][config::Priv::kernel] in
//! [`Opts::exclude`][config::Opts::exclude] to count user space only.

pub mod catalog;
pub mod config;
pub mod count;
mod error;
pub mod event;
mod ffi;

pub use error::*;
