use super::{Domain, Event};

/// A "raw" implementation-specific event.
///
/// The config layout is defined by the PMU, e.g. `0x1cd` selects
/// load latency sampling on recent Intel cores.
#[derive(Clone, Debug)]
pub struct Raw {
    /// Event config.
    pub config: u64,
}

super::into_event!(Raw, value, Event::new(Domain::Raw, value.config));
