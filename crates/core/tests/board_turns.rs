use slotgrid_core::{
    Board, Catalog, EventBus, Game, GameSettings, Inventory, RngState, Symbol, SymbolKind,
};

fn settings_with_set(starting_set: &[&str]) -> GameSettings {
    GameSettings {
        starting_money: 100,
        starting_set: starting_set.iter().map(|s| s.to_string()).collect(),
        ..GameSettings::default()
    }
}

fn bare_game(seed: u64) -> Game {
    Game::new(settings_with_set(&[]), Catalog::builtin(), seed)
}

#[test]
fn neighbor_scan_order_is_fixed() {
    let mut board = Board::new(5);
    for (x, y) in board.coords() {
        board.set(x, y, Symbol::new((y * 5 + x + 1) as u32, SymbolKind::Cherry));
    }
    // Left, right, up, down, then the four diagonals.
    assert_eq!(
        board.neighbors_matching(2, 2, |_| true),
        vec![
            (1, 2),
            (3, 2),
            (2, 1),
            (2, 3),
            (1, 1),
            (3, 1),
            (1, 3),
            (3, 3)
        ]
    );
}

#[test]
fn neighbor_queries_are_bounds_filtered() {
    let mut board = Board::new(5);
    for (x, y) in board.coords() {
        board.set(x, y, Symbol::new((y * 5 + x + 1) as u32, SymbolKind::Cherry));
    }
    assert_eq!(
        board.neighbors_matching(0, 0, |_| true),
        vec![(1, 0), (0, 1), (1, 1)]
    );
    assert_eq!(
        board.neighbors_matching(4, 4, |_| true),
        vec![(3, 4), (4, 3), (3, 3)]
    );
}

#[test]
fn roll_is_a_bijection_onto_the_grid() {
    let mut board = Board::new(5);
    let mut inventory = Inventory::new(1, 10);
    let mut rng = RngState::from_seed(7);
    for id in 1..=10u32 {
        inventory.add(Symbol::new(id, SymbolKind::Coin));
    }
    let placed = board.roll(&mut inventory, &mut rng);
    assert_eq!(placed, 10);
    assert_eq!(board.occupant_count(), 10);
    assert!(inventory.symbols.is_empty());

    let mut ids: Vec<u32> = board.occupants().map(|s| s.id).collect();
    ids.sort_unstable();
    assert_eq!(ids, (1..=10u32).collect::<Vec<_>>());
}

#[test]
fn roll_overflow_stays_in_inventory() {
    let mut board = Board::new(2);
    let mut inventory = Inventory::new(1, 10);
    let mut rng = RngState::from_seed(7);
    for id in 1..=9u32 {
        inventory.add(Symbol::new(id, SymbolKind::Coin));
    }
    let placed = board.roll(&mut inventory, &mut rng);
    assert_eq!(placed, 4);
    assert_eq!(inventory.symbols.len(), 5);
    assert_eq!(board.occupant_count(), 4);
}

#[test]
fn inert_symbols_are_conserved_across_turns() {
    let mut game = Game::new(
        settings_with_set(&["coin", "cherry", "cherry", "cherry"]),
        Catalog::builtin(),
        11,
    );
    let mut events = EventBus::default();
    assert_eq!(game.owned_count(), 4);
    for _ in 0..5 {
        game.roll(&mut events);
        // Nothing in this set spawns or decays; the roll must neither
        // duplicate nor drop a symbol.
        assert_eq!(game.owned_count(), 4);
        // Post-turn the grid is swept back into the collection.
        assert_eq!(game.board.occupant_count(), 0);
        assert_eq!(game.inventory.symbols.len(), 4);
        assert!(game.inventory.graveyard.is_empty());
    }
}

#[test]
fn note_decays_after_exactly_three_turns() {
    let mut game = Game::new(settings_with_set(&["musical_note"]), Catalog::builtin(), 3);
    let mut events = EventBus::default();

    game.roll(&mut events);
    assert_eq!(game.owned_count(), 1, "alive after turn 1");
    game.roll(&mut events);
    assert_eq!(game.owned_count(), 1, "alive after turn 2");
    game.roll(&mut events);
    assert_eq!(game.owned_count(), 0, "removed the turn its counter hits 0");
    assert_eq!(game.inventory.graveyard.len(), 1);
    // It paid 4 on the two turns it survived evaluation, and the three
    // turns cost 1 each.
    assert_eq!(game.inventory.money(), 100 - 3 + 8);
}

#[test]
fn decay_counter_strictly_decreases_to_the_threshold() {
    let mut game = bare_game(6);
    let mut events = EventBus::default();
    game.board.set(0, 0, Symbol::new(901, SymbolKind::MusicalNote));
    assert_eq!(game.counter(0, 0), Some(3));
    game.evaluate(&mut events);
    assert_eq!(game.counter(0, 0), Some(2));
    game.evaluate(&mut events);
    assert_eq!(game.counter(0, 0), Some(1));
    // The pass that would reach 0 removes the symbol instead.
    game.evaluate(&mut events);
    assert!(game.board.get(0, 0).is_empty());
}

#[test]
fn rocket_advances_neighbor_timers() {
    let mut game = bare_game(5);
    let mut events = EventBus::default();
    game.board.set(1, 2, Symbol::new(901, SymbolKind::MusicalNote));
    game.board.set(2, 2, Symbol::new(902, SymbolKind::Rocket));
    game.evaluate(&mut events);
    // The note ticked once on its own visit, then the rocket pushed it one
    // further.
    assert_eq!(game.board.get(1, 2).turns, 2);
}

#[test]
fn snail_retards_neighbor_timers() {
    let mut game = bare_game(5);
    let mut events = EventBus::default();
    game.board.set(1, 2, Symbol::new(901, SymbolKind::MusicalNote));
    game.board.set(2, 2, Symbol::new(902, SymbolKind::Snail));
    game.evaluate(&mut events);
    assert_eq!(game.board.get(1, 2).turns, 0);
}

#[test]
fn multiplier_doubles_a_neighbor_payout() {
    let mut game = bare_game(5);
    let mut events = EventBus::default();
    game.board.set(1, 1, Symbol::new(901, SymbolKind::Cherry));
    game.board.set(2, 2, Symbol::new(902, SymbolKind::Multiplier));

    game.evaluate(&mut events);
    assert_eq!(game.board.get(1, 1).multiplier, 2);
    let payout = game.score(&mut events);
    assert_eq!(payout, 2);

    // A second pass doubles again: 1 * 4.
    game.evaluate(&mut events);
    let payout = game.score(&mut events);
    assert_eq!(payout, 4);
}

#[test]
fn evaluate_is_live_not_snapshot() {
    // A bank at (0, 0) mints a coin before later cells are visited; if the
    // coin lands on a not-yet-visited cell it ticks and scores this very
    // turn. Stage the deterministic variant: the bank's only open neighbor
    // is ahead of it in scan order.
    let mut game = bare_game(9);
    let mut events = EventBus::default();
    for (x, y) in game.board.coords() {
        if (x, y) != (0, 0) && (x, y) != (1, 0) {
            game.board.set(x, y, Symbol::new((100 + y * 5 + x) as u32, SymbolKind::Rock));
        }
    }
    game.board.set(0, 0, Symbol::new(901, SymbolKind::Bank));
    game.evaluate(&mut events);
    let minted = game.board.get(1, 0);
    assert!(matches!(minted.kind, SymbolKind::Coin));
    assert_eq!(minted.turns, 1, "the freshly minted coin was visited too");
}
