use serde::{Deserialize, Serialize};

/// Tunable game rules. Loaded from `settings.json` by the data crate; the
/// defaults here are the reference configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSettings {
    pub board_size: usize,
    /// Total turn budget for a run.
    pub game_length: i64,
    /// Money deducted at the start of every turn.
    pub turn_cost: i64,
    pub starting_money: i64,
    /// Tags of the symbols a run starts with.
    pub starting_set: Vec<String>,
    /// Sampled entries per shop offer.
    pub shop_slots: usize,
    /// Entries at or below this rarity count as rare for rare-only shops.
    pub rare_threshold: f64,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            board_size: 5,
            game_length: 50,
            turn_cost: 1,
            starting_money: 1,
            starting_set: vec![
                "coin".to_string(),
                "cherry".to_string(),
                "cherry".to_string(),
                "cherry".to_string(),
            ],
            shop_slots: 3,
            rare_threshold: 0.2,
        }
    }
}
