use std::io::Write;
use std::mem;
use std::slice;

use crate::error::{Error, ReadError, Result};

// Callers check the bounds.
fn word(buf: &[u8], at: usize) -> u64 {
    let mut word = [0; size_of::<u64>()];
    word.copy_from_slice(&buf[at..at + size_of::<u64>()]);
    u64::from_ne_bytes(word)
}

/// One `(value, id)` pair of a grouped read record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Entry {
    pub value: u64,
    pub id: u64,
}

/// Decoded payload of reading a group leader with
/// `PERF_FORMAT_GROUP | PERF_FORMAT_ID`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GroupedReadRecord {
    entries: Vec<Entry>,
}

impl GroupedReadRecord {
    pub const HEADER_SIZE: usize = size_of::<u64>();
    pub const ENTRY_SIZE: usize = 2 * size_of::<u64>();

    /// Bytes needed to hold a record of a group with `members` counters,
    /// saturating at `usize::MAX`.
    pub const fn buf_size(members: usize) -> usize {
        Self::HEADER_SIZE.saturating_add(members.saturating_mul(Self::ENTRY_SIZE))
    }

    // https://github.com/torvalds/linux/blob/v6.13/include/uapi/linux/perf_event.h#L344
    // struct read_format {
    //     u64 nr;
    //     struct {
    //         u64 value;
    //         u64 id;
    //     } cntr[nr];
    // };
    /// Decodes a record read from a leader whose group has `members` counters.
    ///
    /// The kernel reports every member of the group, a record with more or
    /// fewer entries is rejected.
    pub(crate) fn decode(buf: &[u8], members: usize) -> Result<Self, ReadError> {
        if buf.len() < Self::HEADER_SIZE {
            return Err(ReadError::Truncated {
                expected: Self::HEADER_SIZE,
                actual: buf.len(),
            });
        }

        let nr = word(buf, 0);
        if nr > members as u64 {
            return Err(ReadError::TooManyEntries {
                reported: nr,
                capacity: members,
            });
        }
        if nr < members as u64 {
            return Err(ReadError::MissingEntries {
                reported: nr as _,
                expected: members,
            });
        }

        let expected = Self::buf_size(members);
        if buf.len() < expected {
            return Err(ReadError::Truncated {
                expected,
                actual: buf.len(),
            });
        }

        let entries = (0..members)
            .map(|i| {
                let at = Self::HEADER_SIZE + i * Self::ENTRY_SIZE;
                Entry {
                    value: word(buf, at),
                    id: word(buf, at + size_of::<u64>()),
                }
            })
            .collect();

        Ok(Self { entries })
    }

    /// Entries in the order the kernel reported them.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A counter value attributed to its catalog slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Resolved {
    /// Index of the counter in the catalog the group was opened from.
    pub index: usize,
    pub value: u64,
}

/// Counter values of one read, kept in the order the kernel reported them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResolvedValues {
    entries: Vec<Resolved>,
}

impl ResolvedValues {
    /// Attributes every entry of `record` to the slot of its id in `ids`.
    pub fn resolve(record: &GroupedReadRecord, ids: &[u64]) -> Result<Self> {
        let mut seen = vec![false; ids.len()];
        let mut entries = Vec::with_capacity(record.len());

        for &Entry { value, id } in record.entries() {
            let index = ids
                .iter()
                .position(|it| *it == id)
                .ok_or(Error::Correlation { id })?;
            if mem::replace(&mut seen[index], true) {
                Err(ReadError::DuplicateEntry { id })?;
            }
            entries.push(Resolved { index, value });
        }

        Ok(Self { entries })
    }

    pub fn iter(&self) -> slice::Iter<'_, Resolved> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Value of the counter at catalog slot `index`.
    pub fn get(&self, index: usize) -> Option<u64> {
        self.entries
            .iter()
            .find(|it| it.index == index)
            .map(|it| it.value)
    }

    /// Value of the counter labeled `name`.
    pub fn value_of<S: AsRef<str>>(&self, names: &[S], name: &str) -> Option<u64> {
        let index = names.iter().position(|it| it.as_ref() == name)?;
        self.get(index)
    }

    /// Entries sorted by catalog slot instead of report order.
    pub fn in_catalog_order(&self) -> Vec<Resolved> {
        let mut entries = self.entries.clone();
        entries.sort_by_key(|it| it.index);
        entries
    }
}

impl<'a> IntoIterator for &'a ResolvedValues {
    type Item = &'a Resolved;
    type IntoIter = slice::Iter<'a, Resolved>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Writes one `"<value>\t<name>\n"` line per entry of `resolved`, in report order.
///
/// `names` is indexed by catalog slot, so every value keeps its own label
/// whatever order the kernel reported it in.
pub fn format<S, W>(resolved: &ResolvedValues, names: &[S], mut sink: W) -> Result<()>
where
    S: AsRef<str>,
    W: Write,
{
    for &Resolved { index, value } in resolved {
        let name = names.get(index).ok_or(Error::MissingName { index })?;
        writeln!(sink, "{}\t{}", value, name.as_ref()).map_err(Error::Write)?;
    }
    sink.flush().map_err(Error::Write)
}
