use crate::schema::CatalogRecord;
use anyhow::{bail, Context};
use serde::de::DeserializeOwned;
use slotgrid_core::{Catalog, CatalogEntry, Category, GameSettings, SymbolKind};
use std::fs;
use std::path::Path;

const CATALOG_FILE: &str = "catalog.json";
const SETTINGS_FILE: &str = "settings.json";

const EMBEDDED_CATALOG: &str = include_str!("../assets/catalog.json");
const EMBEDDED_SETTINGS: &str = include_str!("../assets/settings.json");

fn load_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> anyhow::Result<T> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parse {}", path.display()))
}

/// Resolves catalog records against the engine's variant set. Unknown tags
/// and unbuyable kinds are data errors, not silently skipped.
pub fn resolve_catalog(records: &[CatalogRecord]) -> anyhow::Result<Catalog> {
    let mut entries = Vec::with_capacity(records.len());
    for record in records {
        let Some(kind) = SymbolKind::from_tag(&record.tag) else {
            bail!("unknown symbol tag {:?}", record.tag);
        };
        if kind.has_category(Category::Unbuyable) {
            bail!("unbuyable symbol {:?} in catalog", record.tag);
        }
        if !(0.0..=1.0).contains(&record.rarity) {
            bail!("rarity out of range for {:?}: {}", record.tag, record.rarity);
        }
        entries.push(CatalogEntry {
            kind,
            rarity: record.rarity,
            price: record.price,
        });
    }
    Ok(Catalog::new(entries))
}

pub fn load_catalog(dir: &Path) -> anyhow::Result<Catalog> {
    let records: Vec<CatalogRecord> = load_json(dir.join(CATALOG_FILE))?;
    resolve_catalog(&records)
}

pub fn load_settings(dir: &Path) -> anyhow::Result<GameSettings> {
    let settings: GameSettings = load_json(dir.join(SETTINGS_FILE))?;
    validate_settings(&settings)?;
    Ok(settings)
}

fn validate_settings(settings: &GameSettings) -> anyhow::Result<()> {
    if settings.board_size == 0 {
        bail!("board_size must be positive");
    }
    if settings.game_length <= 0 {
        bail!("game_length must be positive");
    }
    for tag in &settings.starting_set {
        if SymbolKind::from_tag(tag).is_none() {
            bail!("unknown symbol tag {:?} in starting set", tag);
        }
    }
    Ok(())
}

/// The copies shipped inside the binary, for running without a data
/// directory.
pub fn embedded_catalog() -> anyhow::Result<Catalog> {
    let records: Vec<CatalogRecord> =
        serde_json::from_str(EMBEDDED_CATALOG).context("parse embedded catalog")?;
    resolve_catalog(&records)
}

pub fn embedded_settings() -> anyhow::Result<GameSettings> {
    let settings: GameSettings =
        serde_json::from_str(EMBEDDED_SETTINGS).context("parse embedded settings")?;
    validate_settings(&settings)?;
    Ok(settings)
}

/// Loads settings and catalog from `dir`, or the embedded copies when no
/// directory is given.
pub fn load_game_data(dir: Option<&Path>) -> anyhow::Result<(GameSettings, Catalog)> {
    match dir {
        Some(dir) => Ok((load_settings(dir)?, load_catalog(dir)?)),
        None => Ok((embedded_settings()?, embedded_catalog()?)),
    }
}
