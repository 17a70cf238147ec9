use crate::{AutoplayConfig, AutoplayError, BuyPolicy};
use serde::Serialize;
use slotgrid_core::{
    Catalog, EventBus, Game, GameSettings, ResourceKind, RngState, TurnOutcome,
};

/// Drives one game to completion under a buy policy. Policy draws come from
/// a separate stream so they never perturb the engine's own randomness.
#[derive(Debug)]
pub struct Simulator {
    pub game: Game,
    pub events: EventBus,
    policy: BuyPolicy,
    policy_rng: RngState,
    max_symbols: usize,
    purchases: u32,
}

/// Per-game result row, serializable for reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunRecord {
    pub seed: u64,
    pub policy: BuyPolicy,
    pub turns_played: u32,
    pub skipped_turns: u32,
    pub purchases: u32,
    pub final_money: i64,
    pub peak_money: i64,
    pub symbols_owned: usize,
    pub graveyard_size: usize,
    pub money_by_turn: Vec<i64>,
}

impl Simulator {
    pub fn new(game: Game, policy: BuyPolicy, max_symbols: usize) -> Self {
        let policy_rng = RngState::from_seed(game.rng.seed().rotate_left(17));
        Self {
            game,
            events: EventBus::default(),
            policy,
            policy_rng,
            max_symbols,
            purchases: 0,
        }
    }

    /// One turn plus its shop phase.
    pub fn step(&mut self) -> Result<TurnOutcome, AutoplayError> {
        let outcome = self.game.roll(&mut self.events);
        if matches!(outcome, TurnOutcome::Resolved { .. }) {
            self.shop_phase()?;
        }
        Ok(outcome)
    }

    fn shop_phase(&mut self) -> Result<(), AutoplayError> {
        while self.game.shop.is_open && self.game.shop.buy_count > 0 {
            if self.game.owned_count() >= self.max_symbols {
                break;
            }
            let Some(index) = self.pick_offer() else {
                break;
            };
            self.game.buy(index, &mut self.events)?;
            self.purchases += 1;
        }
        Ok(())
    }

    fn pick_offer(&mut self) -> Option<usize> {
        if self.policy == BuyPolicy::Never {
            return None;
        }
        let affordable: Vec<usize> = self
            .game
            .shop
            .offers
            .iter()
            .enumerate()
            .filter(|(_, offer)| self.game.inventory.can_afford(&offer.cost))
            .map(|(idx, _)| idx)
            .collect();
        if affordable.is_empty() {
            return None;
        }
        let price = |idx: usize| {
            self.game.shop.offers[idx]
                .cost
                .get(&ResourceKind::Money)
                .copied()
                .unwrap_or(0)
        };
        match self.policy {
            BuyPolicy::Never => None,
            BuyPolicy::Random => self.policy_rng.pick(&affordable).copied(),
            BuyPolicy::Cheapest => affordable.into_iter().min_by_key(|&idx| price(idx)),
            BuyPolicy::Priciest => affordable.into_iter().max_by_key(|&idx| price(idx)),
        }
    }

    /// Plays until the turn budget runs out and reports the trajectory.
    pub fn run(mut self) -> Result<RunRecord, AutoplayError> {
        let seed = self.game.rng.seed();
        let mut money_by_turn = Vec::new();
        let mut skipped = 0u32;
        let mut peak = self.game.inventory.money();
        while !self.game.is_over() {
            let outcome = self.step()?;
            if outcome == TurnOutcome::Degenerate {
                skipped += 1;
            }
            let money = self.game.inventory.money();
            money_by_turn.push(money);
            peak = peak.max(money);
            self.events.drain().for_each(drop);
        }
        Ok(RunRecord {
            seed,
            policy: self.policy,
            turns_played: self.game.turn(),
            skipped_turns: skipped,
            purchases: self.purchases,
            final_money: self.game.inventory.money(),
            peak_money: peak,
            symbols_owned: self.game.owned_count(),
            graveyard_size: self.game.inventory.graveyard.len(),
            money_by_turn,
        })
    }
}

/// Runs `config.games` games on consecutive seeds.
pub fn run_matrix(
    config: &AutoplayConfig,
    settings: &GameSettings,
    catalog: &Catalog,
) -> Result<Vec<RunRecord>, AutoplayError> {
    let mut records = Vec::with_capacity(config.games as usize);
    for game_index in 0..config.games {
        let seed = config.seed.wrapping_add(game_index as u64);
        let game = Game::new(settings.clone(), catalog.clone(), seed);
        let simulator = Simulator::new(game, config.policy, config.max_symbols);
        records.push(simulator.run()?);
    }
    Ok(records)
}
