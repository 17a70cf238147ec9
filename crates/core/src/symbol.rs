use crate::RngState;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Ledger keys. Stable identifiers: anything that ever persists or reports
/// resources must key on these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Money,
    Turns,
    Luck,
}

impl ResourceKind {
    pub fn emoji(self) -> &'static str {
        match self {
            Self::Money => "💵",
            Self::Turns => "⏰",
            Self::Luck => "🍀",
        }
    }
}

/// What a purchase costs, per resource. Almost always a single money price,
/// but the contract allows any combination.
pub type ResourceCost = HashMap<ResourceKind, i64>;

pub fn money_cost(amount: i64) -> ResourceCost {
    ResourceCost::from([(ResourceKind::Money, amount)])
}

/// Tag set other symbols filter neighbor queries by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Animal,
    EmptySpace,
    Unbuyable,
}

/// One case per symbol variant. Variant-specific counters live in the
/// payload; shared per-instance state (turn counter, payout multiplier)
/// lives on [`Symbol`].
#[derive(Debug, Clone, PartialEq)]
pub enum SymbolKind {
    Empty,
    Hole,
    Cherry,
    Coin,
    Pineapple,
    Rock,
    Diamond,
    Dragon,
    Clover,
    Bank,
    Bell,
    Bomb,
    Briefcase,
    Bubble,
    Champagne,
    Chick { time_to_grow: i32 },
    Chicken,
    Cocktail { cherry_score: i64 },
    CreditCard { charged: bool },
    CrystalBall,
    Dancer,
    Drums,
    Egg { time_to_hatch: i32 },
    Firefighter,
    Fox { eaten_score: i64 },
    MagicWand,
    MoneyBag { coins: i64 },
    Moon,
    Multiplier,
    MusicalNote,
    Record { notes: i64 },
    Refresh,
    Rocket,
    ShoppingBag,
    Slots,
    Snail,
    Volcano,
    Worker,
}

impl SymbolKind {
    /// Stable machine tag, used by the catalog files and the event stream.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Hole => "hole",
            Self::Cherry => "cherry",
            Self::Coin => "coin",
            Self::Pineapple => "pineapple",
            Self::Rock => "rock",
            Self::Diamond => "diamond",
            Self::Dragon => "dragon",
            Self::Clover => "clover",
            Self::Bank => "bank",
            Self::Bell => "bell",
            Self::Bomb => "bomb",
            Self::Briefcase => "briefcase",
            Self::Bubble => "bubble",
            Self::Champagne => "champagne",
            Self::Chick { .. } => "chick",
            Self::Chicken => "chicken",
            Self::Cocktail { .. } => "cocktail",
            Self::CreditCard { .. } => "credit_card",
            Self::CrystalBall => "crystal_ball",
            Self::Dancer => "dancer",
            Self::Drums => "drums",
            Self::Egg { .. } => "egg",
            Self::Firefighter => "firefighter",
            Self::Fox { .. } => "fox",
            Self::MagicWand => "magic_wand",
            Self::MoneyBag { .. } => "money_bag",
            Self::Moon => "moon",
            Self::Multiplier => "multiplier",
            Self::MusicalNote => "musical_note",
            Self::Record { .. } => "record",
            Self::Refresh => "refresh",
            Self::Rocket => "rocket",
            Self::ShoppingBag => "shopping_bag",
            Self::Slots => "slots",
            Self::Snail => "snail",
            Self::Volcano => "volcano",
            Self::Worker => "worker",
        }
    }

    /// Inverse of [`SymbolKind::tag`]. Stateful variants come back with
    /// their fresh-instance payloads.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "empty" => Some(Self::Empty),
            "hole" => Some(Self::Hole),
            "cherry" => Some(Self::Cherry),
            "coin" => Some(Self::Coin),
            "pineapple" => Some(Self::Pineapple),
            "rock" => Some(Self::Rock),
            "diamond" => Some(Self::Diamond),
            "dragon" => Some(Self::Dragon),
            "clover" => Some(Self::Clover),
            "bank" => Some(Self::Bank),
            "bell" => Some(Self::Bell),
            "bomb" => Some(Self::Bomb),
            "briefcase" => Some(Self::Briefcase),
            "bubble" => Some(Self::Bubble),
            "champagne" => Some(Self::Champagne),
            "chick" => Some(Self::Chick { time_to_grow: 3 }),
            "chicken" => Some(Self::Chicken),
            "cocktail" => Some(Self::Cocktail { cherry_score: 0 }),
            "credit_card" => Some(Self::CreditCard { charged: false }),
            "crystal_ball" => Some(Self::CrystalBall),
            "dancer" => Some(Self::Dancer),
            "drums" => Some(Self::Drums),
            "egg" => Some(Self::Egg { time_to_hatch: 3 }),
            "firefighter" => Some(Self::Firefighter),
            "fox" => Some(Self::Fox { eaten_score: 3 }),
            "magic_wand" => Some(Self::MagicWand),
            "money_bag" => Some(Self::MoneyBag { coins: 0 }),
            "moon" => Some(Self::Moon),
            "multiplier" => Some(Self::Multiplier),
            "musical_note" => Some(Self::MusicalNote),
            "record" => Some(Self::Record { notes: 0 }),
            "refresh" => Some(Self::Refresh),
            "rocket" => Some(Self::Rocket),
            "shopping_bag" => Some(Self::ShoppingBag),
            "slots" => Some(Self::Slots),
            "snail" => Some(Self::Snail),
            "volcano" => Some(Self::Volcano),
            "worker" => Some(Self::Worker),
            _ => None,
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Empty => "⬜",
            Self::Hole => "🕳️",
            Self::Cherry => "🍒",
            Self::Coin => "🪙",
            Self::Pineapple => "🍍",
            Self::Rock => "🪨",
            Self::Diamond => "💎",
            Self::Dragon => "🐉",
            Self::Clover => "☘️",
            Self::Bank => "🏦",
            Self::Bell => "🔔",
            Self::Bomb => "💣",
            Self::Briefcase => "💼",
            Self::Bubble => "🫧",
            Self::Champagne => "🍾",
            Self::Chick { .. } => "🐣",
            Self::Chicken => "🐔",
            Self::Cocktail { .. } => "🍹",
            Self::CreditCard { .. } => "💳",
            Self::CrystalBall => "🔮",
            Self::Dancer => "💃",
            Self::Drums => "🥁",
            Self::Egg { .. } => "🥚",
            Self::Firefighter => "🧑‍🚒",
            Self::Fox { .. } => "🦊",
            Self::MagicWand => "🪄",
            Self::MoneyBag { .. } => "💰",
            Self::Moon => "🌝",
            Self::Multiplier => "❎",
            Self::MusicalNote => "🎵",
            Self::Record { .. } => "📀",
            Self::Refresh => "🔀",
            Self::Rocket => "🚀",
            Self::ShoppingBag => "🛍️",
            Self::Slots => "🎰",
            Self::Snail => "🐌",
            Self::Volcano => "🌋",
            Self::Worker => "👷",
        }
    }

    pub fn categories(&self) -> &'static [Category] {
        match self {
            Self::Empty => &[Category::EmptySpace, Category::Unbuyable],
            Self::Hole => &[Category::EmptySpace],
            Self::Bubble | Self::MusicalNote => &[Category::Unbuyable],
            Self::Chick { .. } | Self::Chicken | Self::Dragon | Self::Fox { .. } | Self::Snail => {
                &[Category::Animal]
            }
            _ => &[],
        }
    }

    pub fn has_category(&self, category: Category) -> bool {
        self.categories().contains(&category)
    }

    /// Empty cells and holes both accept spawned symbols.
    pub fn is_open_space(&self) -> bool {
        self.has_category(Category::EmptySpace)
    }

    /// Constructor-state copy, the `copy()` of the behavior contract:
    /// accumulators that are constructor arguments carry over, per-instance
    /// randomness re-rolls, transient state resets.
    pub fn duplicate(&self, rng: &mut RngState) -> Self {
        match self {
            Self::Egg { .. } => Self::Egg {
                time_to_hatch: 3 + rng.range(3) as i32,
            },
            Self::CreditCard { .. } => Self::CreditCard { charged: false },
            Self::Fox { .. } => Self::Fox { eaten_score: 3 },
            other => other.clone(),
        }
    }

    /// Short effect summary for shop entries and inventories.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Empty => "empty space",
            Self::Hole => "always empty",
            Self::Cherry => "💵1",
            Self::Coin => "💵1",
            Self::Pineapple => "💵2",
            Self::Rock => "💵1",
            Self::Diamond => "💵5",
            Self::Dragon => "💵42",
            Self::Clover => "+1% luck",
            Self::Bank => "every turn: makes 🪙",
            Self::Bell => "💵11; 20% chance: makes 🎵",
            Self::Bomb => "10% chance: destroys a neighbor",
            Self::Briefcase => "💵5 for every 4 symbols owned",
            Self::Bubble => "disappears after 3 turns",
            Self::Champagne => "💵70; after 3 turns: explodes",
            Self::Chick { .. } => "💵1; after 3 turns: becomes 🐔",
            Self::Chicken => "💵3; 10% chance: lays up to 3 🥚",
            Self::Cocktail { .. } => "💵2 per 🍒, 💵4 per 🍍, x2 per 🍾 removed",
            Self::CreditCard { .. } => "💵1000 now; 💵-1100 on last turn",
            Self::CrystalBall => "+3% luck",
            Self::Dancer => "💵10 for each neighboring 🎵",
            Self::Drums => "every 3 turns: makes 🎵",
            Self::Egg { .. } => "after 3-5 turns: hatches 🐣; 1% chance: hatches 🐉",
            Self::Firefighter => "disarms 💣, then leaves",
            Self::Fox { .. } => "eats 🐔 for 💵20, 🐣 for 💵10; leaves after 5 hungry turns",
            Self::MagicWand => "15% chance: duplicates a neighboring symbol",
            Self::MoneyBag { .. } => "collects neighboring 🪙; 💵2 for each collected",
            Self::Moon => "every 31 turns: 💵555",
            Self::Multiplier => "x2 to all neighbors",
            Self::MusicalNote => "💵4; disappears after 3 turns",
            Self::Record { .. } => "records neighboring 🎵; 💵6 for each recorded",
            Self::Refresh => "always allows refreshing the shop",
            Self::Rocket => "speeds up neighbors by 1 turn",
            Self::ShoppingBag => "allows picking 1 more item",
            Self::Slots => "💵2 per different symbol owned",
            Self::Snail => "slows down neighbors by 1 turn",
            Self::Volcano => "10% chance: replaces a random tile with 🪨",
            Self::Worker => "clears neighboring 🪨; 50% chance: leaves 💎",
        }
    }

    /// Detailed prose for the info panel.
    pub fn description_long(&self) -> &'static str {
        match self {
            Self::Empty => "an empty space on the board.",
            Self::Hole => {
                "this is a hole. it works like an empty space, and symbols created here go straight into your collection."
            }
            Self::Cherry => "this is a cherry. it pays 💵1. cocktails love it.",
            Self::Coin => "this is a coin. it pays 💵1. money bags collect it.",
            Self::Pineapple => "this is a pineapple. it pays 💵2. cocktails love it even more.",
            Self::Rock => "this is a rock. it pays 💵1. workers can break it down.",
            Self::Dragon => "this is a dragon. it pays 💵42. it hatched from a very lucky egg.",
            Self::Diamond => "this is a diamond. it pays 💵5.",
            Self::Clover => {
                "this is a clover. symbols with a chance to do something succeed a little more often."
            }
            Self::Bank => "this is a bank. if there is empty space nearby, it will put 🪙 there.",
            Self::Bell => {
                "this is a bell. it pays 💵11, and it has a 20% chance to create 🎵 on a neighboring empty space."
            }
            Self::Bomb => {
                "this is a bomb. there is a 10% chance it will destroy a neighboring symbol."
            }
            Self::Briefcase => {
                "this is a briefcase. it pays 💵5 for every 4 symbols you own."
            }
            Self::Bubble => {
                "this is a bubble. it doesn't really do anything. it will disappear after 3 turns."
            }
            Self::Champagne => {
                "this is a champagne. it pays 💵70, but explodes after 3 turns, making 🫧 on empty neighboring spaces and itself."
            }
            Self::Chick { .. } => "this is a chick. it pays 💵1 and becomes 🐔 in 3 turns.",
            Self::Chicken => {
                "this is a chicken. it pays 💵3 and has a 10% chance of laying up to 3 🥚 on empty spaces around it."
            }
            Self::Cocktail { .. } => {
                "this is a cocktail. it permanently gives more 💵 by removing neighboring 🍒 (💵2), 🍍 (💵4) and 🍾 (x2)."
            }
            Self::CreditCard { .. } => {
                "this is a credit card. it pays 💵1000, but takes 💵1100 on your last turn. if it's not on the board on your last turn, however ..."
            }
            Self::CrystalBall => {
                "this is a crystal ball. symbols having a chance to do something will succeed more. and you get rarer items to choose from in the shop."
            }
            Self::Dancer => "this is a dancer. it pays 💵10 for each 🎵 it's standing next to.",
            Self::Drums => {
                "these are drums. every third turn, they create 🎵 on a nearby empty space."
            }
            Self::Egg { .. } => {
                "this is an egg. after 3-5 turns, it becomes a 🐣, or with 1% chance it becomes a 🐉."
            }
            Self::Firefighter => {
                "this is a firefighter. if it stands next to a 💣, it will remove the 💣 and leave your collection."
            }
            Self::Fox { .. } => {
                "this is a fox. it will eat 🐣 and 🐔 neighbors and pay 💵10 and 💵20 respectively. it disappears after 5 turns with no food."
            }
            Self::MagicWand => {
                "this is a magic wand. it has a 15% chance to copy a neighboring symbol and place it on nearby empty space."
            }
            Self::MoneyBag { .. } => {
                "this is a money bag. it collects neighboring 🪙 and permanently gives 💵2 more for each 🪙 collected."
            }
            Self::Moon => "this is a moon. every 31 turns, it gives 💵555.",
            Self::Multiplier => {
                "this is a multiplier. it doubles the 💵 gained (or lost) for all neighboring symbols."
            }
            Self::MusicalNote => {
                "this is a musical note. it pays 💵4, and disappears after 3 turns."
            }
            Self::Record { .. } => {
                "this is a record. it removes neighboring 🎵 and permanently pays 💵6 more for each 🎵 removed."
            }
            Self::Refresh => {
                "this is a refresher. it allows refreshing the selection in the shop more than once. careful, the cost of refreshing also increases."
            }
            Self::Rocket => {
                "this is a rocket. all neighboring symbols that have a timer will complete one turn faster."
            }
            Self::ShoppingBag => {
                "these are shopping bags. you can choose one more item to buy from the shop."
            }
            Self::Slots => {
                "this is a slot machine. it pays 💵2 for all the different symbols you own."
            }
            Self::Snail => {
                "this is a snail. all neighboring symbols that have a timer will take one more turn to complete."
            }
            Self::Volcano => {
                "this is a volcano. it has a 10% chance to replace a random tile on the board with 🪨."
            }
            Self::Worker => {
                "this is a worker. it breaks down neighboring 🪨, with a 50% chance to leave 💎 in their place."
            }
        }
    }
}

/// A symbol instance: one owned unit on the board or in the inventory.
/// Instances are identity-bearing; `id` is unique for the whole run and the
/// graveyard keeps destroyed instances for the record.
#[derive(Debug, Clone, PartialEq)]
pub struct Symbol {
    pub id: u32,
    pub kind: SymbolKind,
    /// Turns survived since creation; nudged by Rocket (+1) and Snail (-1).
    pub turns: i32,
    /// Scales this symbol's own payouts, positive and negative alike.
    pub multiplier: i64,
}

impl Symbol {
    pub fn new(id: u32, kind: SymbolKind) -> Self {
        Self {
            id,
            kind,
            turns: 0,
            multiplier: 1,
        }
    }

    /// The board filler. Id 0 is reserved for it.
    pub fn empty() -> Self {
        Self::new(0, SymbolKind::Empty)
    }

    pub fn is_empty(&self) -> bool {
        matches!(self.kind, SymbolKind::Empty)
    }

    /// New independent instance with identical constructor state. The Moon
    /// keeps its phase; everything else starts its timer over.
    pub fn duplicate(&self, id: u32, rng: &mut RngState) -> Self {
        let turns = match self.kind {
            SymbolKind::Moon => self.turns,
            _ => 0,
        };
        Self {
            id,
            kind: self.kind.duplicate(rng),
            turns,
            multiplier: 1,
        }
    }
}
