use crate::{
    Board, Catalog, GameSettings, Inventory, InventoryError, RngState, ShopState, Symbol,
    SymbolKind,
};
use std::collections::HashSet;
use thiserror::Error;

mod effects;
mod shop;
mod turn;

pub use turn::TurnOutcome;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("shop is closed")]
    ShopClosed,
    #[error("invalid shop offer index")]
    InvalidOffer,
    #[error("no purchases left in this shop")]
    NoPurchasesLeft,
    #[error("refresh not available")]
    RefreshUnavailable,
    #[error("inventory error: {0}")]
    Inventory(#[from] InventoryError),
}

/// One run of the game: board, collection, shop, and the seeded random
/// stream, driven one turn at a time by [`Game::roll`].
#[derive(Debug)]
pub struct Game {
    pub settings: GameSettings,
    pub catalog: Catalog,
    pub board: Board,
    pub inventory: Inventory,
    pub shop: ShopState,
    pub rng: RngState,
    turn: u32,
    rolling: bool,
    next_symbol_id: u32,
}

impl Game {
    pub fn new(settings: GameSettings, catalog: Catalog, seed: u64) -> Self {
        let mut rng = RngState::from_seed(seed);
        let board = Board::new(settings.board_size);
        let mut inventory = Inventory::new(settings.starting_money, settings.game_length);
        let mut next_symbol_id = 1u32;
        for tag in &settings.starting_set {
            if let Some(kind) = SymbolKind::from_tag(tag) {
                let kind = kind.duplicate(&mut rng);
                inventory.add(Symbol::new(next_symbol_id, kind));
                next_symbol_id = next_symbol_id.saturating_add(1);
            }
        }
        Self {
            settings,
            catalog,
            board,
            inventory,
            shop: ShopState::new(),
            rng,
            turn: 0,
            rolling: false,
            next_symbol_id,
        }
    }

    pub(crate) fn alloc_symbol_id(&mut self) -> u32 {
        let id = self.next_symbol_id;
        self.next_symbol_id = self.next_symbol_id.saturating_add(1);
        id
    }

    /// Turns resolved so far.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn is_over(&self) -> bool {
        self.inventory.turns_left() <= 0
    }

    pub fn rolling(&self) -> bool {
        self.rolling
    }

    /// A front end that plays animations between turns can hold the turn
    /// lock while they run; rolls requested meanwhile are dropped.
    pub fn hold_turn_lock(&mut self) {
        self.rolling = true;
    }

    pub fn release_turn_lock(&mut self) {
        self.rolling = false;
    }

    /// Probability-acceptance test: succeeds when a uniform draw lands under
    /// `p` plus the luck in force this turn.
    pub fn chance(&mut self, p: f64) -> bool {
        self.rng.next_f64() < p + self.inventory.luck()
    }

    /// Everything the player owns: board occupants plus the off-board list.
    pub fn owned_symbols(&self) -> impl Iterator<Item = &Symbol> {
        self.board.occupants().chain(self.inventory.symbols.iter())
    }

    pub fn owned_count(&self) -> usize {
        self.owned_symbols().count()
    }

    pub fn distinct_owned(&self) -> usize {
        self.owned_symbols()
            .map(|s| s.kind.tag())
            .collect::<HashSet<_>>()
            .len()
    }

    /// UI hint number for the occupant at (x, y): turns remaining on a
    /// timer, or an accumulated value. Read-only.
    pub fn counter(&self, x: usize, y: usize) -> Option<i64> {
        let symbol = self.board.get(x, y);
        match &symbol.kind {
            SymbolKind::Bubble | SymbolKind::Champagne | SymbolKind::MusicalNote => {
                Some((3 - symbol.turns) as i64)
            }
            SymbolKind::Chick { time_to_grow } => Some((time_to_grow - symbol.turns) as i64),
            SymbolKind::Drums => Some((3 - symbol.turns % 3) as i64),
            SymbolKind::Egg { time_to_hatch } => Some((time_to_hatch - symbol.turns) as i64),
            SymbolKind::Fox { .. } => Some((5 - symbol.turns) as i64),
            SymbolKind::Moon => Some((31 - symbol.turns) as i64),
            SymbolKind::Cocktail { cherry_score } => Some(*cherry_score),
            SymbolKind::MoneyBag { coins } => Some(*coins),
            SymbolKind::Record { notes } => Some(*notes),
            SymbolKind::Briefcase => Some((self.owned_count() as i64 / 4) * 5),
            SymbolKind::Slots => Some(self.distinct_owned() as i64 * 2),
            _ => None,
        }
    }
}
