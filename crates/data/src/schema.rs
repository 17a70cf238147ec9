use serde::{Deserialize, Serialize};

/// One catalog row: `(variant tag, rarity weight, money price)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogRecord {
    pub tag: String,
    pub rarity: f64,
    pub price: i64,
}
