use super::Game;
use crate::{Event, EventBus};

/// What a call to [`Game::roll`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// A full turn resolved; `payout` is the score-phase total.
    Resolved { payout: i64 },
    /// The turn counted against the budget but money could not cover the
    /// per-turn cost, so nothing rolled.
    Degenerate,
    /// A turn was already in flight; this request did nothing.
    Dropped,
    /// The turn budget is spent; this request did nothing.
    Exhausted,
}

impl Game {
    /// Resolves one full turn: close shop, roll the board from the
    /// collection, evaluate, score, resolve deferred luck, open the next
    /// shop. At most one turn resolves at a time; requests arriving while
    /// one is in flight are dropped, not queued.
    pub fn roll(&mut self, events: &mut EventBus) -> TurnOutcome {
        if self.rolling {
            return TurnOutcome::Dropped;
        }
        if self.inventory.turns_left() <= 0 {
            return TurnOutcome::Exhausted;
        }
        self.rolling = true;
        self.turn += 1;
        self.inventory.spend_turn();
        events.push(Event::TurnStarted {
            turn: self.turn,
            turns_left: self.inventory.turns_left(),
        });

        if self.inventory.money() < self.settings.turn_cost {
            // The budget is spent either way; the board never rolls.
            events.push(Event::TurnSkipped {
                money: self.inventory.money(),
            });
            if self.inventory.turns_left() == 0 {
                events.push(Event::GameEnded {
                    money: self.inventory.money(),
                });
            }
            self.rolling = false;
            return TurnOutcome::Degenerate;
        }
        self.inventory.add_money(-self.settings.turn_cost);

        self.close_shop(events);
        let placed = self.board.roll(&mut self.inventory, &mut self.rng);
        events.push(Event::BoardRolled { placed });

        self.evaluate(events);
        let mut payout = self.score(events);
        let last_turn = self.inventory.turns_left() == 0;
        if last_turn {
            payout += self.final_score(events);
        }

        self.inventory.resolve_luck();
        events.push(Event::LuckResolved {
            luck: self.inventory.luck(),
        });
        self.board.sweep_into(&mut self.inventory);
        events.push(Event::TurnCompleted {
            payout,
            money: self.inventory.money(),
        });

        if last_turn {
            events.push(Event::GameEnded {
                money: self.inventory.money(),
            });
        } else {
            self.open_shop(events);
        }
        self.rolling = false;
        TurnOutcome::Resolved { payout }
    }
}
