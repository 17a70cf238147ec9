use crate::ResourceKind;
use serde::{Deserialize, Serialize};

/// Animation cue kinds the rendering collaborator understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimKind {
    Bounce,
    Shake,
    Flip,
    Spin,
}

/// Domain events emitted by the turn pipeline. This is the rendering port:
/// the core never touches a display, it narrates state changes and animation
/// cues here and a front end drains them at its own pace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    TurnStarted {
        turn: u32,
        turns_left: i64,
    },
    /// The turn was paid for but could not be played.
    TurnSkipped {
        money: i64,
    },
    BoardRolled {
        placed: usize,
    },
    SymbolAdded {
        tag: String,
        x: usize,
        y: usize,
    },
    SymbolRemoved {
        tag: String,
        x: usize,
        y: usize,
    },
    /// Resource feedback, anchored to a board cell when one is responsible.
    ResourceEarned {
        resource: ResourceKind,
        amount: i64,
        at: Option<(usize, usize)>,
    },
    LuckGained {
        bonus: f64,
        x: usize,
        y: usize,
    },
    LuckResolved {
        luck: f64,
    },
    /// Animation cue for the cell at (x, y).
    Effect {
        x: usize,
        y: usize,
        anim: AnimKind,
        duration_ms: u32,
    },
    ShopOpened {
        offers: usize,
        refresh_cost: Option<i64>,
    },
    ShopRefreshed {
        cost: i64,
        money: i64,
    },
    ShopBought {
        tag: String,
        money: i64,
    },
    ShopClosed,
    TurnCompleted {
        payout: i64,
        money: i64,
    },
    GameEnded {
        money: i64,
    },
}

#[derive(Debug, Default)]
pub struct EventBus {
    queue: Vec<Event>,
}

impl EventBus {
    pub fn push(&mut self, event: Event) {
        self.queue.push(event);
    }

    pub fn drain(&mut self) -> impl Iterator<Item = Event> + '_ {
        self.queue.drain(..)
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
