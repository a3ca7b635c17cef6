use super::{format, Entry, GroupedReadRecord, Resolved, ResolvedValues};
use crate::error::{Error, ReadError};

const NAMES: [&str; 3] = ["instructions", "dTLB-loads", "page-faults"];
const IDS: [u64; 3] = [1021, 1022, 1023];

fn record(entries: &[(u64, u64)]) -> Vec<u8> {
    let mut buf = (entries.len() as u64).to_ne_bytes().to_vec();
    for (value, id) in entries {
        buf.extend(value.to_ne_bytes());
        buf.extend(id.to_ne_bytes());
    }
    buf
}

fn lines(resolved: &ResolvedValues) -> String {
    let mut out = vec![];
    format(resolved, &NAMES, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_decode() {
    let buf = record(&[(7, 1021), (0, 1022)]);
    let record = GroupedReadRecord::decode(&buf, 2).unwrap();

    assert_eq!(
        record.entries(),
        [Entry { value: 7, id: 1021 }, Entry { value: 0, id: 1022 }]
    );
    assert_eq!(GroupedReadRecord::buf_size(3), 56);
    assert_eq!(GroupedReadRecord::buf_size(usize::MAX), usize::MAX);
}

#[test]
fn test_decode_ignores_trailing_bytes() {
    let mut buf = record(&[(7, 1021)]);
    buf.extend([0xff; 16]);
    let record = GroupedReadRecord::decode(&buf, 1).unwrap();
    assert_eq!(record.len(), 1);
}

#[test]
fn test_decode_empty() {
    let buf = record(&[]);
    let record = GroupedReadRecord::decode(&buf, 0).unwrap();
    assert!(record.is_empty());
}

#[test]
fn test_decode_short_header() {
    let err = GroupedReadRecord::decode(&[1, 0, 0], 3).unwrap_err();
    assert!(matches!(
        err,
        ReadError::Truncated {
            expected: 8,
            actual: 3
        }
    ));
}

#[test]
fn test_decode_truncated_entries() {
    let mut buf = record(&[(7, 1021), (9, 1022)]);
    buf.truncate(buf.len() - 1);
    let err = GroupedReadRecord::decode(&buf, 2).unwrap_err();
    assert!(matches!(
        err,
        ReadError::Truncated {
            expected: 40,
            actual: 39
        }
    ));
}

#[test]
fn test_decode_count_exceeds_members() {
    let buf = record(&[(1, 1021), (2, 1022), (3, 1023), (4, 1024)]);
    let err = GroupedReadRecord::decode(&buf, 3).unwrap_err();
    assert!(matches!(
        err,
        ReadError::TooManyEntries {
            reported: 4,
            capacity: 3
        }
    ));

    // A huge count in the header must not be trusted either.
    let mut buf = u64::MAX.to_ne_bytes().to_vec();
    buf.extend([0; 48]);
    let err = GroupedReadRecord::decode(&buf, 3).unwrap_err();
    assert!(matches!(err, ReadError::TooManyEntries { .. }));
}

#[test]
fn test_decode_huge_member_count() {
    let mut buf = u64::MAX.to_ne_bytes().to_vec();
    buf.extend([0; 48]);
    let err = GroupedReadRecord::decode(&buf, usize::MAX).unwrap_err();
    match err {
        ReadError::Truncated { expected, actual } => {
            assert_eq!(expected, usize::MAX);
            assert_eq!(actual, 56);
        }
        // `nr` does not fit a 32-bit `usize`.
        ReadError::TooManyEntries { .. } => assert!(usize::BITS < 64),
        e => panic!("unexpected error: {:?}", e),
    }
}

#[test]
fn test_decode_missing_entries() {
    let buf = record(&[(5, 1023)]);
    let err = GroupedReadRecord::decode(&buf, 3).unwrap_err();
    assert!(matches!(
        err,
        ReadError::MissingEntries {
            reported: 1,
            expected: 3
        }
    ));

    let buf = record(&[]);
    let err = GroupedReadRecord::decode(&buf, 2).unwrap_err();
    assert!(matches!(
        err,
        ReadError::MissingEntries {
            reported: 0,
            expected: 2
        }
    ));
}

#[test]
fn test_resolve_in_catalog_order() {
    let buf = record(&[(100, 1021), (20, 1022), (3, 1023)]);
    let record = GroupedReadRecord::decode(&buf, 3).unwrap();
    let resolved = ResolvedValues::resolve(&record, &IDS).unwrap();

    assert_eq!(resolved.len(), 3);
    assert_eq!(resolved.get(0), Some(100));
    assert_eq!(resolved.get(2), Some(3));
    assert_eq!(
        lines(&resolved),
        "100\tinstructions\n20\tdTLB-loads\n3\tpage-faults\n"
    );
}

#[test]
fn test_resolve_permuted_record() {
    let permutations = [
        [(3, 1023), (100, 1021), (20, 1022)],
        [(20, 1022), (3, 1023), (100, 1021)],
        [(3, 1023), (20, 1022), (100, 1021)],
    ];

    for entries in permutations {
        let buf = record(&entries);
        let record = GroupedReadRecord::decode(&buf, 3).unwrap();
        let resolved = ResolvedValues::resolve(&record, &IDS).unwrap();

        // Report order is kept.
        let order: Vec<_> = resolved.iter().map(|it| it.value).collect();
        let expected: Vec<_> = entries.iter().map(|it| it.0).collect();
        assert_eq!(order, expected);

        // Every value keeps its own name.
        let out = lines(&resolved);
        let mut pairs: Vec<_> = out.lines().collect();
        pairs.sort();
        assert_eq!(pairs, ["100\tinstructions", "20\tdTLB-loads", "3\tpage-faults"]);

        assert_eq!(resolved.value_of(&NAMES, "instructions"), Some(100));
        assert_eq!(resolved.value_of(&NAMES, "dTLB-loads"), Some(20));
        assert_eq!(resolved.value_of(&NAMES, "page-faults"), Some(3));
        assert_eq!(resolved.value_of(&NAMES, "cycles"), None);

        assert_eq!(
            resolved.in_catalog_order(),
            [
                Resolved {
                    index: 0,
                    value: 100
                },
                Resolved {
                    index: 1,
                    value: 20
                },
                Resolved { index: 2, value: 3 },
            ]
        );
    }
}

#[test]
fn test_resolve_unknown_id() {
    let buf = record(&[(1, 1021), (2, 4242), (3, 1023)]);
    let record = GroupedReadRecord::decode(&buf, 3).unwrap();
    let err = ResolvedValues::resolve(&record, &IDS).unwrap_err();
    assert!(matches!(err, Error::Correlation { id: 4242 }));
}

#[test]
fn test_resolve_duplicate_id() {
    let buf = record(&[(1, 1022), (2, 1022), (3, 1023)]);
    let record = GroupedReadRecord::decode(&buf, 3).unwrap();
    let err = ResolvedValues::resolve(&record, &IDS).unwrap_err();
    assert!(matches!(
        err,
        Error::Read(ReadError::DuplicateEntry { id: 1022 })
    ));
}

#[test]
fn test_format_empty() {
    assert_eq!(lines(&ResolvedValues::default()), "");
}

#[test]
fn test_format_missing_name() {
    let buf = record(&[(1, 1021), (2, 1023), (3, 1022)]);
    let record = GroupedReadRecord::decode(&buf, 3).unwrap();
    let resolved = ResolvedValues::resolve(&record, &IDS).unwrap();
    assert_eq!(resolved.get(1), Some(3));

    let mut out = vec![];
    let err = format(&resolved, &NAMES[..1], &mut out).unwrap_err();
    assert!(matches!(err, Error::MissingName { index: 2 }));
    assert_eq!(out, b"1\tinstructions\n");
}
