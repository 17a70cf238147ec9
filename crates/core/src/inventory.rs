use crate::{ResourceCost, ResourceKind, Symbol};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("not enough {0:?}")]
    Insufficient(ResourceKind),
}

/// The player's collection plus the resource ledger. Money is signed and may
/// dip negative for exactly one turn before play stalls; luck granted during
/// a turn sits in `pending_luck` and only becomes the active value when the
/// turn resolves it.
#[derive(Debug, Clone)]
pub struct Inventory {
    /// Owned symbols currently off the board. Order is display order.
    pub symbols: Vec<Symbol>,
    /// Destroyed symbols, append-only, for the record.
    pub graveyard: Vec<Symbol>,
    money: i64,
    turns_left: i64,
    luck: f64,
    pending_luck: f64,
}

impl Inventory {
    pub fn new(money: i64, turns: i64) -> Self {
        Self {
            symbols: Vec::new(),
            graveyard: Vec::new(),
            money,
            turns_left: turns,
            luck: 0.0,
            pending_luck: 0.0,
        }
    }

    pub fn add(&mut self, symbol: Symbol) {
        self.symbols.push(symbol);
    }

    pub fn bury(&mut self, symbol: Symbol) {
        self.graveyard.push(symbol);
    }

    pub fn money(&self) -> i64 {
        self.money
    }

    pub fn turns_left(&self) -> i64 {
        self.turns_left
    }

    /// The luck in force for chance checks this turn.
    pub fn luck(&self) -> f64 {
        self.luck
    }

    pub fn pending_luck(&self) -> f64 {
        self.pending_luck
    }

    pub fn add_money(&mut self, delta: i64) -> i64 {
        self.money += delta;
        self.money
    }

    pub fn spend_turn(&mut self) {
        self.turns_left -= 1;
    }

    /// Luck granted mid-turn. Takes effect next turn; chance rolls made
    /// later this same turn still see the old value.
    pub fn add_luck(&mut self, bonus: f64) {
        self.pending_luck += bonus;
    }

    /// End-of-turn swap: the accumulated bonus becomes the active luck.
    pub fn resolve_luck(&mut self) {
        self.luck = self.pending_luck;
        self.pending_luck = 0.0;
    }

    pub fn resource(&self, kind: ResourceKind) -> i64 {
        match kind {
            ResourceKind::Money => self.money,
            ResourceKind::Turns => self.turns_left,
            ResourceKind::Luck => self.luck as i64,
        }
    }

    pub fn can_afford(&self, cost: &ResourceCost) -> bool {
        cost.iter().all(|(&kind, &amount)| self.resource(kind) >= amount)
    }

    /// Deducts every resource in `cost`, or deducts nothing.
    pub fn pay_cost(&mut self, cost: &ResourceCost) -> Result<(), InventoryError> {
        for (&kind, &amount) in cost.iter() {
            if self.resource(kind) < amount {
                return Err(InventoryError::Insufficient(kind));
            }
        }
        for (&kind, &amount) in cost.iter() {
            match kind {
                ResourceKind::Money => self.money -= amount,
                ResourceKind::Turns => self.turns_left -= amount,
                ResourceKind::Luck => self.luck -= amount as f64,
            }
        }
        Ok(())
    }
}
