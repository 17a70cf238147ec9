use super::Game;
use crate::{AnimKind, Event, EventBus, ResourceKind, Symbol, SymbolKind};

impl Game {
    /// The evaluate pass: row-major visit of whoever occupies each cell at
    /// visit time, ticking its turn counter and running produce then
    /// consume. Effects may touch cells the pass has not reached yet; later
    /// visits see those mutations. This ordering is observable and pinned
    /// by tests. [`Game::roll`] drives this; it is public for harnesses
    /// that stage board states directly.
    pub fn evaluate(&mut self, events: &mut EventBus) {
        for (x, y) in self.board.coords() {
            if self.board.get(x, y).is_empty() {
                continue;
            }
            let id = self.board.get(x, y).id;
            self.board.get_mut(x, y).turns += 1;
            self.produce(x, y, events);
            // Produce may have replaced the occupant; the replacement does
            // not get this visit's consume.
            if self.board.get(x, y).id == id {
                self.consume(x, y, events);
            }
        }
    }

    /// The score pass: same order, sums every cell's payout. Money is
    /// applied per cell as it lands.
    pub fn score(&mut self, events: &mut EventBus) -> i64 {
        let mut total = 0;
        for (x, y) in self.board.coords() {
            total += self.score_cell(x, y, events);
        }
        total
    }

    /// Extra pass on the run's last turn only.
    pub fn final_score(&mut self, events: &mut EventBus) -> i64 {
        let mut total = 0;
        for (x, y) in self.board.coords() {
            if let SymbolKind::CreditCard { .. } = self.board.get(x, y).kind {
                total += self.pay_at(x, y, -1100, AnimKind::Flip, 450, events);
            }
        }
        total
    }

    fn produce(&mut self, x: usize, y: usize, events: &mut EventBus) {
        match self.board.get(x, y).kind.clone() {
            SymbolKind::Bank => {
                let open = self.board.neighbors_open(x, y);
                let Some(&(nx, ny)) = self.rng.pick(&open) else {
                    return;
                };
                events.push(Event::Effect {
                    x,
                    y,
                    anim: AnimKind::Bounce,
                    duration_ms: 300,
                });
                let coin = self.spawn(SymbolKind::Coin);
                self.place_spawn(coin, nx, ny, events);
            }
            SymbolKind::Bell => {
                let open = self.board.neighbors_open(x, y);
                if open.is_empty() {
                    return;
                }
                if self.chance(0.2) {
                    let Some(&(nx, ny)) = self.rng.pick(&open) else {
                        return;
                    };
                    events.push(Event::Effect {
                        x,
                        y,
                        anim: AnimKind::Shake,
                        duration_ms: 300,
                    });
                    let note = self.spawn(SymbolKind::MusicalNote);
                    self.place_spawn(note, nx, ny, events);
                }
            }
            SymbolKind::Champagne => {
                if self.board.get(x, y).turns < 3 {
                    return;
                }
                events.push(Event::Effect {
                    x,
                    y,
                    anim: AnimKind::Shake,
                    duration_ms: 300,
                });
                self.destroy_at(x, y, events);
                let bubble = self.spawn(SymbolKind::Bubble);
                self.place_spawn(bubble, x, y, events);
                for (nx, ny) in self.board.neighbors_open(x, y) {
                    let bubble = self.spawn(SymbolKind::Bubble);
                    self.place_spawn(bubble, nx, ny, events);
                }
            }
            SymbolKind::Chicken => {
                let mut open = self.board.neighbors_open(x, y);
                if open.is_empty() {
                    return;
                }
                if self.chance(0.1) {
                    let clutch = (1 + self.rng.range(3)) as usize;
                    for _ in 0..clutch.min(open.len()) {
                        let Some((nx, ny)) = self.rng.pick_remove(&mut open) else {
                            break;
                        };
                        events.push(Event::Effect {
                            x,
                            y,
                            anim: AnimKind::Shake,
                            duration_ms: 300,
                        });
                        let time_to_hatch = 3 + self.rng.range(3) as i32;
                        let egg = self.spawn(SymbolKind::Egg { time_to_hatch });
                        self.place_spawn(egg, nx, ny, events);
                    }
                }
            }
            SymbolKind::Drums => {
                if self.board.get(x, y).turns % 3 != 0 {
                    return;
                }
                let open = self.board.neighbors_open(x, y);
                let Some(&(nx, ny)) = self.rng.pick(&open) else {
                    return;
                };
                events.push(Event::Effect {
                    x,
                    y,
                    anim: AnimKind::Bounce,
                    duration_ms: 450,
                });
                let note = self.spawn(SymbolKind::MusicalNote);
                self.place_spawn(note, nx, ny, events);
            }
            SymbolKind::MagicWand => {
                let open = self.board.neighbors_open(x, y);
                if open.is_empty() {
                    return;
                }
                let occupied = self.board.neighbors_matching(x, y, |s| !s.is_empty());
                if occupied.is_empty() {
                    return;
                }
                if self.chance(0.15) {
                    let Some(&(sx, sy)) = self.rng.pick(&occupied) else {
                        return;
                    };
                    let Some(&(nx, ny)) = self.rng.pick(&open) else {
                        return;
                    };
                    let id = self.alloc_symbol_id();
                    let copy = self.board.get(sx, sy).duplicate(id, &mut self.rng);
                    events.push(Event::Effect {
                        x,
                        y,
                        anim: AnimKind::Shake,
                        duration_ms: 300,
                    });
                    self.place_spawn(copy, nx, ny, events);
                }
            }
            SymbolKind::Multiplier => {
                for (nx, ny) in self.board.neighbors_matching(x, y, |s| !s.is_empty()) {
                    self.board.get_mut(nx, ny).multiplier *= 2;
                }
            }
            SymbolKind::Refresh => {
                self.shop.refreshable = true;
                self.shop.refresh_count = 0;
            }
            SymbolKind::Rocket => {
                for (nx, ny) in self.board.neighbors_all(x, y) {
                    self.board.get_mut(nx, ny).turns += 1;
                }
            }
            SymbolKind::ShoppingBag => {
                self.shop.buy_count += 1;
            }
            SymbolKind::Snail => {
                for (nx, ny) in self.board.neighbors_all(x, y) {
                    self.board.get_mut(nx, ny).turns -= 1;
                }
            }
            SymbolKind::Volcano => {
                if self.chance(0.1) {
                    let size = self.board.size() as u64;
                    let nx = self.rng.range(size) as usize;
                    let ny = self.rng.range(size) as usize;
                    self.destroy_at(nx, ny, events);
                    let rock = self.spawn(SymbolKind::Rock);
                    self.place_spawn(rock, nx, ny, events);
                }
            }
            _ => {}
        }
    }

    fn consume(&mut self, x: usize, y: usize, events: &mut EventBus) {
        match self.board.get(x, y).kind.clone() {
            SymbolKind::Bomb => {
                if self.chance(0.1) {
                    let targets = self.board.neighbors_matching(x, y, |s| {
                        !matches!(s.kind, SymbolKind::Empty | SymbolKind::Firefighter)
                    });
                    let Some(&(nx, ny)) = self.rng.pick(&targets) else {
                        return;
                    };
                    self.destroy_at(nx, ny, events);
                }
            }
            SymbolKind::Bubble | SymbolKind::MusicalNote => {
                if self.board.get(x, y).turns >= 3 {
                    self.destroy_at(x, y, events);
                }
            }
            SymbolKind::Chick { time_to_grow } => {
                if self.board.get(x, y).turns >= time_to_grow {
                    self.destroy_at(x, y, events);
                    let chicken = self.spawn(SymbolKind::Chicken);
                    self.place_spawn(chicken, x, y, events);
                }
            }
            SymbolKind::Cocktail { .. } => {
                let cherries = self
                    .board
                    .neighbors_matching(x, y, |s| matches!(s.kind, SymbolKind::Cherry));
                for (nx, ny) in cherries {
                    self.raise_cocktail(x, y, |score| score + 2);
                    self.destroy_at(nx, ny, events);
                }
                let pineapples = self
                    .board
                    .neighbors_matching(x, y, |s| matches!(s.kind, SymbolKind::Pineapple));
                for (nx, ny) in pineapples {
                    self.raise_cocktail(x, y, |score| score + 4);
                    self.destroy_at(nx, ny, events);
                }
                let bottles = self
                    .board
                    .neighbors_matching(x, y, |s| matches!(s.kind, SymbolKind::Champagne));
                for (nx, ny) in bottles {
                    self.raise_cocktail(x, y, |score| score * 2);
                    self.destroy_at(nx, ny, events);
                }
            }
            SymbolKind::Egg { time_to_hatch } => {
                if self.board.get(x, y).turns >= time_to_hatch {
                    let dragon = self.chance(0.01);
                    self.destroy_at(x, y, events);
                    let kind = if dragon {
                        SymbolKind::Dragon
                    } else {
                        SymbolKind::Chick { time_to_grow: 3 }
                    };
                    let hatched = self.spawn(kind);
                    self.place_spawn(hatched, x, y, events);
                }
            }
            SymbolKind::Firefighter => {
                let bombs = self
                    .board
                    .neighbors_matching(x, y, |s| matches!(s.kind, SymbolKind::Bomb));
                if bombs.is_empty() {
                    return;
                }
                for (nx, ny) in bombs {
                    self.destroy_at(nx, ny, events);
                }
                self.destroy_at(x, y, events);
            }
            SymbolKind::Fox { .. } => {
                let chicks = self
                    .board
                    .neighbors_matching(x, y, |s| matches!(s.kind, SymbolKind::Chick { .. }));
                if !chicks.is_empty() {
                    for (nx, ny) in chicks {
                        self.feed_fox(x, y, 10);
                        self.destroy_at(nx, ny, events);
                    }
                    self.board.get_mut(x, y).turns = 0;
                }
                let chickens = self
                    .board
                    .neighbors_matching(x, y, |s| matches!(s.kind, SymbolKind::Chicken));
                if !chickens.is_empty() {
                    for (nx, ny) in chickens {
                        self.feed_fox(x, y, 20);
                        self.destroy_at(nx, ny, events);
                    }
                    self.board.get_mut(x, y).turns = 0;
                }
                if self.board.get(x, y).turns >= 5 {
                    self.destroy_at(x, y, events);
                }
            }
            SymbolKind::MoneyBag { .. } => {
                let coins = self
                    .board
                    .neighbors_matching(x, y, |s| matches!(s.kind, SymbolKind::Coin));
                for (nx, ny) in coins {
                    if let SymbolKind::MoneyBag { coins } = &mut self.board.get_mut(x, y).kind {
                        *coins += 2;
                    }
                    self.destroy_at(nx, ny, events);
                }
            }
            SymbolKind::Record { .. } => {
                let notes = self
                    .board
                    .neighbors_matching(x, y, |s| matches!(s.kind, SymbolKind::MusicalNote));
                for (nx, ny) in notes {
                    if let SymbolKind::Record { notes } = &mut self.board.get_mut(x, y).kind {
                        *notes += 6;
                    }
                    self.destroy_at(nx, ny, events);
                }
            }
            SymbolKind::Worker => {
                let rocks = self
                    .board
                    .neighbors_matching(x, y, |s| matches!(s.kind, SymbolKind::Rock));
                for (nx, ny) in rocks {
                    self.destroy_at(nx, ny, events);
                    if self.chance(0.5) {
                        let diamond = self.spawn(SymbolKind::Diamond);
                        self.place_spawn(diamond, nx, ny, events);
                    }
                }
            }
            _ => {}
        }
    }

    fn score_cell(&mut self, x: usize, y: usize, events: &mut EventBus) -> i64 {
        match self.board.get(x, y).kind.clone() {
            SymbolKind::Cherry | SymbolKind::Coin | SymbolKind::Rock => {
                self.pay_at(x, y, 1, AnimKind::Bounce, 100, events)
            }
            SymbolKind::Pineapple => self.pay_at(x, y, 2, AnimKind::Bounce, 100, events),
            SymbolKind::Diamond => self.pay_at(x, y, 5, AnimKind::Bounce, 100, events),
            SymbolKind::Dragon => self.pay_at(x, y, 42, AnimKind::Bounce, 100, events),
            SymbolKind::Chick { .. } => self.pay_at(x, y, 1, AnimKind::Bounce, 100, events),
            SymbolKind::Chicken => self.pay_at(x, y, 3, AnimKind::Bounce, 100, events),
            SymbolKind::Bell => self.pay_at(x, y, 11, AnimKind::Bounce, 100, events),
            SymbolKind::Champagne => self.pay_at(x, y, 70, AnimKind::Bounce, 100, events),
            SymbolKind::MusicalNote => self.pay_at(x, y, 4, AnimKind::Bounce, 100, events),
            SymbolKind::Briefcase => {
                let value = (self.owned_count() as i64 / 4) * 5;
                self.pay_at(x, y, value, AnimKind::Bounce, 100, events)
            }
            SymbolKind::Slots => {
                let value = self.distinct_owned() as i64 * 2;
                self.pay_at(x, y, value, AnimKind::Bounce, 100, events)
            }
            SymbolKind::Dancer => {
                let notes = self
                    .board
                    .neighbors_matching(x, y, |s| matches!(s.kind, SymbolKind::MusicalNote));
                self.pay_at(x, y, notes.len() as i64 * 10, AnimKind::Bounce, 100, events)
            }
            SymbolKind::Clover => {
                self.grant_luck(x, y, 0.01, events);
                0
            }
            SymbolKind::CrystalBall => {
                self.grant_luck(x, y, 0.03, events);
                0
            }
            SymbolKind::Cocktail { cherry_score } => {
                self.pay_at(x, y, cherry_score, AnimKind::Bounce, 100, events)
            }
            SymbolKind::MoneyBag { coins } => {
                self.pay_at(x, y, coins, AnimKind::Bounce, 100, events)
            }
            SymbolKind::Record { notes } => {
                self.pay_at(x, y, notes, AnimKind::Bounce, 100, events)
            }
            SymbolKind::Fox { eaten_score } => {
                if eaten_score == 0 {
                    return 0;
                }
                let paid = self.pay_at(x, y, eaten_score, AnimKind::Bounce, 100, events);
                if let SymbolKind::Fox { eaten_score } = &mut self.board.get_mut(x, y).kind {
                    *eaten_score = 0;
                }
                paid
            }
            SymbolKind::Moon => {
                if self.board.get(x, y).turns < 31 {
                    return 0;
                }
                self.board.get_mut(x, y).turns = 0;
                self.pay_at(x, y, 555, AnimKind::Flip, 300, events)
            }
            SymbolKind::CreditCard { charged } => {
                if charged {
                    return 0;
                }
                if let SymbolKind::CreditCard { charged } = &mut self.board.get_mut(x, y).kind {
                    *charged = true;
                }
                self.pay_at(x, y, 1000, AnimKind::Bounce, 100, events)
            }
            SymbolKind::Multiplier => {
                events.push(Event::Effect {
                    x,
                    y,
                    anim: AnimKind::Flip,
                    duration_ms: 150,
                });
                0
            }
            _ => 0,
        }
    }

    /// Applies a payout through the symbol's own multiplier, moving money
    /// and narrating the feedback. Returns the applied amount.
    fn pay_at(
        &mut self,
        x: usize,
        y: usize,
        amount: i64,
        anim: AnimKind,
        duration_ms: u32,
        events: &mut EventBus,
    ) -> i64 {
        let value = amount * self.board.get(x, y).multiplier;
        if value == 0 {
            return 0;
        }
        events.push(Event::Effect {
            x,
            y,
            anim,
            duration_ms,
        });
        self.inventory.add_money(value);
        events.push(Event::ResourceEarned {
            resource: ResourceKind::Money,
            amount: value,
            at: Some((x, y)),
        });
        value
    }

    fn grant_luck(&mut self, x: usize, y: usize, bonus: f64, events: &mut EventBus) {
        self.inventory.add_luck(bonus);
        events.push(Event::Effect {
            x,
            y,
            anim: AnimKind::Shake,
            duration_ms: 200,
        });
        events.push(Event::LuckGained { bonus, x, y });
    }

    fn raise_cocktail(&mut self, x: usize, y: usize, raise: impl Fn(i64) -> i64) {
        if let SymbolKind::Cocktail { cherry_score } = &mut self.board.get_mut(x, y).kind {
            *cherry_score = raise(*cherry_score);
        }
    }

    fn feed_fox(&mut self, x: usize, y: usize, reward: i64) {
        if let SymbolKind::Fox { eaten_score } = &mut self.board.get_mut(x, y).kind {
            *eaten_score += reward;
        }
    }

    pub(crate) fn spawn(&mut self, kind: SymbolKind) -> Symbol {
        let id = self.alloc_symbol_id();
        Symbol::new(id, kind)
    }

    /// Destroys the occupant at (x, y): off the board and into the
    /// graveyard, never back to the collection. No-op on Empty.
    pub(crate) fn destroy_at(&mut self, x: usize, y: usize, events: &mut EventBus) {
        if self.board.get(x, y).is_empty() {
            return;
        }
        let symbol = self.board.take(x, y);
        events.push(Event::SymbolRemoved {
            tag: symbol.kind.tag().to_string(),
            x,
            y,
        });
        self.inventory.bury(symbol);
    }

    /// Puts a newly created symbol into play at (x, y). Spawning onto a
    /// Hole leaves the Hole in place and sends the symbol straight to the
    /// collection.
    pub(crate) fn place_spawn(&mut self, symbol: Symbol, x: usize, y: usize, events: &mut EventBus) {
        events.push(Event::SymbolAdded {
            tag: symbol.kind.tag().to_string(),
            x,
            y,
        });
        let target = self.board.get(x, y);
        if !target.is_empty() && target.kind.is_open_space() {
            self.inventory.add(symbol);
        } else {
            self.board.set(x, y, symbol);
        }
    }
}
