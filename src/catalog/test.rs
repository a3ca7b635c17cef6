use super::{Catalog, CounterSpec};
use crate::event::hw::Hardware;
use crate::event::sw::Software;
use crate::event::Domain;

#[test]
fn test_builder_keeps_order() {
    let catalog = Catalog::new()
        .with(CounterSpec::new(Software::PageFault, "page-faults"))
        .with(CounterSpec::new(Hardware::Instr, "instructions"));

    assert_eq!(catalog.len(), 2);
    assert!(!catalog.is_empty());
    assert_eq!(catalog.get(0).unwrap().domain(), Domain::Software);
    assert_eq!(catalog.get(1).unwrap().domain(), Domain::Hardware);
    assert!(catalog.get(2).is_none());
    assert_eq!(
        catalog.names().collect::<Vec<_>>(),
        ["page-faults", "instructions"]
    );
}

#[test]
fn test_from_iter() {
    let catalog: Catalog = ["a", "b", "c"]
        .into_iter()
        .map(|name| CounterSpec::new((Domain::Raw, 0x1cd), name))
        .collect();

    assert_eq!(catalog.len(), 3);
    assert!(catalog.iter().all(|it| it.config() == 0x1cd));
}

#[test]
fn test_empty() {
    let catalog = Catalog::new();
    assert!(catalog.is_empty());
    assert_eq!(catalog.names().count(), 0);
}

#[test]
fn test_dtlb_preset() {
    let catalog = Catalog::dtlb();
    let rows: Vec<_> = catalog
        .iter()
        .map(|it| (it.domain(), it.config(), it.name()))
        .collect();

    assert_eq!(
        rows,
        [
            (Domain::Hardware, 1, "instructions"),
            (Domain::HwCache, 0x10003, "dTLB-load-misses"),
            (Domain::HwCache, 0x3, "dTLB-loads"),
            (Domain::HwCache, 0x10103, "dTLB-store-misses"),
            (Domain::Software, 2, "page-faults"),
        ]
    );
}

#[cfg(feature = "serde")]
#[test]
fn test_deserialize_toml() {
    let text = r#"
        [[counter]]
        name = "instructions"
        domain = "hardware"
        config = 1

        [[counter]]
        name = "dTLB-load-misses"
        domain = "hw_cache"
        config = 65539
    "#;
    let catalog: Catalog = toml::from_str(text).unwrap();

    assert_eq!(
        catalog,
        Catalog::new()
            .with(CounterSpec::new(Hardware::Instr, "instructions"))
            .with(CounterSpec::new((Domain::HwCache, 0x10003), "dTLB-load-misses"))
    );
}

#[cfg(feature = "serde")]
#[test]
fn test_deserialize_empty() {
    let catalog: Catalog = toml::from_str("").unwrap();
    assert!(catalog.is_empty());
}
