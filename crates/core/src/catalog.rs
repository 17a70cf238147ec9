use crate::{RngState, SymbolKind};

/// One purchasable variant: a prototype kind, the acceptance weight the shop
/// sampler rolls against, and the base money price.
#[derive(Debug, Clone)]
pub struct CatalogEntry {
    pub kind: SymbolKind,
    pub rarity: f64,
    pub price: i64,
}

/// The static registry of purchasable prototypes. Unbuyable kinds (Empty,
/// Bubble, MusicalNote) never appear here.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub entries: Vec<CatalogEntry>,
}

impl Catalog {
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    pub fn entry_by_tag(&self, tag: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|entry| entry.kind.tag() == tag)
    }

    /// The multi-sweep sampler. Each sweep visits the whole catalog and
    /// accepts each entry independently with probability `rarity + luck`;
    /// sweeps repeat until the candidate pool holds at least `n` entries,
    /// then exactly `n` are drawn out by random removal. An entry accepted
    /// in more than one sweep can appear more than once in the offer; that
    /// is intended. `rare_only` sweeps consider only entries at or below the
    /// rarity threshold (rare variants have small weights).
    ///
    /// Returns indices into `entries`.
    pub fn generate_shop(
        &self,
        n: usize,
        luck: f64,
        rare_only: bool,
        rare_threshold: f64,
        rng: &mut RngState,
    ) -> Vec<usize> {
        let eligible: Vec<usize> = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| !rare_only || entry.rarity <= rare_threshold)
            .map(|(idx, _)| idx)
            .collect();
        // A sweep that can never accept anything would spin forever.
        let acceptable = eligible
            .iter()
            .any(|&idx| self.entries[idx].rarity + luck > 0.0);
        if n == 0 || !acceptable {
            return Vec::new();
        }
        let mut pool = Vec::new();
        while pool.len() < n {
            for &idx in &eligible {
                if rng.next_f64() < self.entries[idx].rarity + luck {
                    pool.push(idx);
                }
            }
        }
        let mut offer = Vec::with_capacity(n);
        for _ in 0..n {
            if let Some(idx) = rng.pick_remove(&mut pool) {
                offer.push(idx);
            }
        }
        offer
    }

    /// The stock catalog: every purchasable variant with its reference
    /// rarity and price. The data crate can replace this wholesale from a
    /// JSON file.
    pub fn builtin() -> Self {
        let entries = [
            (SymbolKind::Bank, 0.4, 7),
            (SymbolKind::Bell, 0.4, 8),
            (SymbolKind::Bomb, 0.15, 4),
            (SymbolKind::Briefcase, 0.13, 6),
            (SymbolKind::Champagne, 0.07, 15),
            (SymbolKind::Cherry, 1.0, 1),
            (SymbolKind::Chick { time_to_grow: 3 }, 0.2, 3),
            (SymbolKind::Chicken, 0.15, 6),
            (SymbolKind::Clover, 0.4, 3),
            (SymbolKind::Cocktail { cherry_score: 0 }, 0.27, 8),
            (SymbolKind::Coin, 1.0, 1),
            (SymbolKind::CreditCard { charged: false }, 0.35, 4),
            (SymbolKind::CrystalBall, 0.05, 12),
            (SymbolKind::Dancer, 0.3, 7),
            (SymbolKind::Diamond, 0.14, 6),
            (SymbolKind::Dragon, 0.02, 100),
            (SymbolKind::Drums, 0.25, 6),
            (SymbolKind::Egg { time_to_hatch: 3 }, 0.6, 2),
            (SymbolKind::Firefighter, 0.15, 4),
            (SymbolKind::Fox { eaten_score: 3 }, 0.25, 5),
            (SymbolKind::Hole, 0.21, 3),
            (SymbolKind::MagicWand, 0.1, 10),
            (SymbolKind::MoneyBag { coins: 0 }, 0.5, 5),
            (SymbolKind::Moon, 0.28, 9),
            (SymbolKind::Multiplier, 0.07, 12),
            (SymbolKind::Pineapple, 0.5, 2),
            (SymbolKind::Record { notes: 0 }, 0.12, 8),
            (SymbolKind::Refresh, 0.05, 9),
            (SymbolKind::Rock, 0.5, 1),
            (SymbolKind::Rocket, 0.18, 6),
            (SymbolKind::ShoppingBag, 0.07, 10),
            (SymbolKind::Slots, 0.15, 7),
            (SymbolKind::Snail, 0.12, 6),
            (SymbolKind::Volcano, 0.4, 5),
            (SymbolKind::Worker, 0.45, 4),
        ];
        Self::new(
            entries
                .into_iter()
                .map(|(kind, rarity, price)| CatalogEntry { kind, rarity, price })
                .collect(),
        )
    }
}
