use slotgrid_core::{Category, SymbolKind};
use slotgrid_data::{
    embedded_catalog, embedded_settings, load_catalog, load_settings, resolve_catalog,
    CatalogRecord,
};
use std::path::Path;

fn assets_dir() -> &'static Path {
    Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/assets"))
}

#[test]
fn shipped_catalog_parses_and_resolves() {
    let catalog = load_catalog(assets_dir()).expect("load catalog");
    assert_eq!(catalog.entries.len(), 35);
    for entry in &catalog.entries {
        assert!(entry.price > 0, "{} has no price", entry.kind.tag());
        assert!(
            (0.0..=1.0).contains(&entry.rarity),
            "{} rarity out of range",
            entry.kind.tag()
        );
        assert!(
            !entry.kind.has_category(Category::Unbuyable),
            "{} should not be purchasable",
            entry.kind.tag()
        );
    }
}

#[test]
fn shipped_catalog_matches_the_builtin() {
    let shipped = load_catalog(assets_dir()).expect("load catalog");
    let builtin = slotgrid_core::Catalog::builtin();
    let mut shipped_tags: Vec<&str> = shipped.entries.iter().map(|e| e.kind.tag()).collect();
    let mut builtin_tags: Vec<&str> = builtin.entries.iter().map(|e| e.kind.tag()).collect();
    shipped_tags.sort_unstable();
    builtin_tags.sort_unstable();
    assert_eq!(shipped_tags, builtin_tags);
}

#[test]
fn shipped_settings_parse() {
    let settings = load_settings(assets_dir()).expect("load settings");
    assert_eq!(settings.board_size, 5);
    assert!(settings.game_length > 0);
    for tag in &settings.starting_set {
        assert!(SymbolKind::from_tag(tag).is_some(), "unknown tag {tag}");
    }
}

#[test]
fn embedded_copies_match_the_files() {
    let embedded = embedded_catalog().expect("embedded catalog");
    let shipped = load_catalog(assets_dir()).expect("load catalog");
    assert_eq!(embedded.entries.len(), shipped.entries.len());
    let embedded_settings = embedded_settings().expect("embedded settings");
    let shipped_settings = load_settings(assets_dir()).expect("load settings");
    assert_eq!(embedded_settings.board_size, shipped_settings.board_size);
    assert_eq!(embedded_settings.game_length, shipped_settings.game_length);
}

#[test]
fn unknown_tags_are_rejected() {
    let records = vec![CatalogRecord {
        tag: "pterodactyl".to_string(),
        rarity: 0.5,
        price: 3,
    }];
    assert!(resolve_catalog(&records).is_err());
}

#[test]
fn unbuyable_kinds_are_rejected() {
    let records = vec![CatalogRecord {
        tag: "bubble".to_string(),
        rarity: 0.5,
        price: 3,
    }];
    assert!(resolve_catalog(&records).is_err());
}

#[test]
fn out_of_range_rarity_is_rejected() {
    let records = vec![CatalogRecord {
        tag: "cherry".to_string(),
        rarity: 1.5,
        price: 3,
    }];
    assert!(resolve_catalog(&records).is_err());
}

#[test]
fn every_tag_round_trips() {
    let catalog = load_catalog(assets_dir()).expect("load catalog");
    for entry in &catalog.entries {
        let tag = entry.kind.tag();
        let back = SymbolKind::from_tag(tag).expect("tag resolves");
        assert_eq!(back.tag(), tag);
    }
}
