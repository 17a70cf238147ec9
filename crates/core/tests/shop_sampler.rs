use slotgrid_core::{
    Catalog, CatalogEntry, EventBus, Game, GameError, GameSettings, RngState, SymbolKind,
};

fn single_entry_catalog(rarity: f64) -> Catalog {
    Catalog::new(vec![CatalogEntry {
        kind: SymbolKind::Cherry,
        rarity,
        price: 1,
    }])
}

#[test]
fn offer_is_exactly_n_entries() {
    let catalog = Catalog::builtin();
    let mut rng = RngState::from_seed(21);
    for _ in 0..100 {
        let offer = catalog.generate_shop(3, 0.0, false, 0.2, &mut rng);
        assert_eq!(offer.len(), 3);
        assert!(offer.iter().all(|&idx| idx < catalog.entries.len()));
    }
}

#[test]
fn duplicates_are_kept_not_deduplicated() {
    // One always-accepted entry: every sweep contributes it once, so a
    // 3-slot offer is that entry three times.
    let catalog = single_entry_catalog(1.0);
    let mut rng = RngState::from_seed(22);
    let offer = catalog.generate_shop(3, 0.0, false, 0.2, &mut rng);
    assert_eq!(offer, vec![0, 0, 0]);
}

#[test]
fn acceptance_follows_rarity_weights() {
    let catalog = Catalog::new(vec![
        CatalogEntry {
            kind: SymbolKind::Cherry,
            rarity: 0.9,
            price: 1,
        },
        CatalogEntry {
            kind: SymbolKind::Coin,
            rarity: 0.1,
            price: 1,
        },
    ]);
    let mut rng = RngState::from_seed(23);
    let mut counts = [0usize; 2];
    for _ in 0..3000 {
        for idx in catalog.generate_shop(3, 0.0, false, 0.2, &mut rng) {
            counts[idx] += 1;
        }
    }
    let ratio = counts[0] as f64 / counts[1] as f64;
    assert!(
        (7.0..12.0).contains(&ratio),
        "acceptance ratio {ratio} (counts {counts:?}) too far from 9"
    );
}

#[test]
fn empty_and_impossible_catalogs_yield_empty_offers() {
    let mut rng = RngState::from_seed(24);
    let empty = Catalog::new(Vec::new());
    assert!(empty.generate_shop(3, 0.0, false, 0.2, &mut rng).is_empty());

    let dead = single_entry_catalog(0.0);
    assert!(dead.generate_shop(3, 0.0, false, 0.2, &mut rng).is_empty());
    // Luck can revive a zero-rarity entry.
    assert_eq!(dead.generate_shop(3, 1.0, false, 0.2, &mut rng).len(), 3);
}

#[test]
fn rare_only_restricts_to_the_threshold() {
    let catalog = Catalog::builtin();
    let mut rng = RngState::from_seed(25);
    for _ in 0..50 {
        for idx in catalog.generate_shop(3, 0.0, true, 0.2, &mut rng) {
            assert!(
                catalog.entries[idx].rarity <= 0.2,
                "non-rare {} in a rare-only offer",
                catalog.entries[idx].kind.tag()
            );
        }
    }
}

fn rich_game(seed: u64) -> Game {
    let settings = GameSettings {
        starting_money: 1000,
        ..GameSettings::default()
    };
    Game::new(settings, Catalog::builtin(), seed)
}

#[test]
fn buying_moves_the_symbol_and_the_money() {
    let mut game = rich_game(26);
    let mut events = EventBus::default();
    game.roll(&mut events);
    assert!(game.shop.is_open);
    assert_eq!(game.shop.offers.len(), 3);

    let owned_before = game.owned_count();
    let money_before = game.inventory.money();
    let tag = game.shop.offers[0].symbol.kind.tag();
    let price = game.shop.offers[0].cost.values().sum::<i64>();
    game.buy(0, &mut events).expect("buy");

    assert_eq!(game.owned_count(), owned_before + 1);
    assert_eq!(game.inventory.money(), money_before - price);
    assert!(game.owned_symbols().any(|s| s.kind.tag() == tag));
    // The allowance was 1, so the shop closed behind the purchase.
    assert!(!game.shop.is_open);
    assert!(matches!(
        game.buy(0, &mut events),
        Err(GameError::ShopClosed)
    ));
}

#[test]
fn unaffordable_purchase_is_refused_without_mutation() {
    // A catalog that only ever offers something out of reach.
    let catalog = Catalog::new(vec![CatalogEntry {
        kind: SymbolKind::Dragon,
        rarity: 1.0,
        price: 100,
    }]);
    let settings = GameSettings {
        starting_money: 10,
        ..GameSettings::default()
    };
    let mut game = Game::new(settings, catalog, 27);
    let mut events = EventBus::default();
    game.roll(&mut events);
    assert!(game.shop.is_open);

    let owned_before = game.owned_count();
    let money_before = game.inventory.money();
    assert!(game.buy(0, &mut events).is_err());
    assert_eq!(game.owned_count(), owned_before);
    assert_eq!(game.inventory.money(), money_before);
    assert!(game.shop.is_open);
    assert_eq!(game.shop.buy_count, 1);
}

#[test]
fn refresh_cost_doubles_within_a_session() {
    let mut game = rich_game(28);
    let mut events = EventBus::default();
    game.roll(&mut events);
    assert!(game.shop.refresh_offered());

    let first_cost = game.shop.refresh_cost;
    game.refresh_shop(&mut events).expect("first refresh");
    assert_eq!(game.shop.refresh_cost, first_cost * 2);
    assert_eq!(game.shop.offers.len(), 3);

    // Without a Refresh symbol the slot is gone after one use.
    assert!(!game.shop.refresh_offered());
    assert!(matches!(
        game.refresh_shop(&mut events),
        Err(GameError::RefreshUnavailable)
    ));
}

#[test]
fn refresh_cost_rebases_when_the_shop_closes() {
    let mut game = rich_game(29);
    let mut events = EventBus::default();
    game.roll(&mut events);
    game.refresh_shop(&mut events).expect("refresh");
    let inflated = game.shop.refresh_cost;
    assert!(inflated > 1);

    // The next turn closes the shop first, re-basing the refresh price on
    // the money held at close time.
    game.roll(&mut events);
    assert!(game.shop.refresh_cost < inflated || game.inventory.money() / 100 >= inflated);
    assert_eq!(game.shop.refresh_count, 0);
    assert!(!game.shop.refreshable);
    assert!(game.shop.refresh_offered());
}
