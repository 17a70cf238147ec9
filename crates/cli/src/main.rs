use slotgrid_autoplay::{run_matrix, AutoplayConfig, BuyPolicy};
use slotgrid_core::{Event, EventBus, Game, ResourceKind, TurnOutcome};
use slotgrid_data::load_game_data;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

const DEFAULT_SEED: u64 = 0x510_7541;

#[derive(Debug, Clone)]
struct CliOptions {
    seed: u64,
    data_dir: Option<PathBuf>,
    auto_games: Option<u32>,
    policy: BuyPolicy,
    json: bool,
}

fn parse_args() -> Result<CliOptions, String> {
    let mut options = CliOptions {
        seed: DEFAULT_SEED,
        data_dir: None,
        auto_games: None,
        policy: BuyPolicy::Random,
        json: false,
    };
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--seed" => {
                let value = args.next().ok_or("--seed needs a value")?;
                options.seed = value.parse().map_err(|_| format!("bad seed {value:?}"))?;
            }
            "--data" => {
                let value = args.next().ok_or("--data needs a directory")?;
                options.data_dir = Some(PathBuf::from(value));
            }
            "--auto" => {
                let value = args.next().ok_or("--auto needs a game count")?;
                options.auto_games =
                    Some(value.parse().map_err(|_| format!("bad count {value:?}"))?);
            }
            "--policy" => {
                let value = args.next().ok_or("--policy needs a value")?;
                options.policy = match value.as_str() {
                    "never" => BuyPolicy::Never,
                    "random" => BuyPolicy::Random,
                    "cheapest" => BuyPolicy::Cheapest,
                    "priciest" => BuyPolicy::Priciest,
                    other => return Err(format!("unknown policy {other:?}")),
                };
            }
            "--json" => options.json = true,
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            other => return Err(format!("unknown argument {other:?}")),
        }
    }
    Ok(options)
}

fn print_usage() {
    println!("slotgrid [--seed N] [--data DIR] [--auto GAMES [--policy P] [--json]]");
    println!("  interactive by default; --auto runs headless games and prints a summary");
}

fn main() {
    let options = match parse_args() {
        Ok(options) => options,
        Err(message) => {
            eprintln!("error: {message}");
            print_usage();
            std::process::exit(2);
        }
    };
    let (settings, catalog) = match load_game_data(options.data_dir.as_deref()) {
        Ok(data) => data,
        Err(err) => {
            eprintln!("error: {err:#}");
            std::process::exit(1);
        }
    };

    if let Some(games) = options.auto_games {
        let config = AutoplayConfig {
            seed: options.seed,
            games,
            policy: options.policy,
            ..AutoplayConfig::default()
        };
        match run_matrix(&config, &settings, &catalog) {
            Ok(records) => {
                if options.json {
                    match serde_json::to_string_pretty(&records) {
                        Ok(text) => println!("{text}"),
                        Err(err) => eprintln!("error: {err}"),
                    }
                } else {
                    print_matrix_summary(&records);
                }
            }
            Err(err) => {
                eprintln!("error: {err}");
                std::process::exit(1);
            }
        }
        return;
    }

    let game = Game::new(settings, catalog, options.seed);
    repl(game);
}

fn print_matrix_summary(records: &[slotgrid_autoplay::RunRecord]) {
    let Some(first) = records.first() else {
        println!("no games played");
        return;
    };
    println!("{} games, policy {:?}", records.len(), first.policy);
    for record in records {
        println!(
            "  seed {:>10}  turns {:>3} (skipped {:>2})  final 💵{:<6} peak 💵{:<6} owned {:>2}  graveyard {:>3}",
            record.seed,
            record.turns_played,
            record.skipped_turns,
            record.final_money,
            record.peak_money,
            record.symbols_owned,
            record.graveyard_size,
        );
    }
    if !records.is_empty() {
        let total: i64 = records.iter().map(|r| r.final_money).sum();
        println!("  mean final 💵{}", total / records.len() as i64);
    }
}

fn repl(mut game: Game) {
    let mut events = EventBus::default();
    println!("slotgrid — type 'help' for commands");
    print_state(&game);
    let stdin = io::stdin();
    loop {
        print!("> ");
        let _ = io::stdout().flush();
        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(_) => break,
        }
        let mut parts = line.split_whitespace();
        let command = parts.next().unwrap_or("");
        match command {
            "" => {}
            "help" | "?" => print_help(),
            "roll" | "r" | "spin" => {
                match game.roll(&mut events) {
                    TurnOutcome::Resolved { payout } => {
                        drain_events(&mut events);
                        println!("turn {} resolved, payout 💵{}", game.turn(), payout);
                        print_board(&game);
                        print_shop(&game);
                    }
                    TurnOutcome::Degenerate => {
                        drain_events(&mut events);
                        println!("not enough money to play this turn");
                    }
                    TurnOutcome::Dropped => println!("a turn is already resolving"),
                    TurnOutcome::Exhausted => println!("no turns left — game over"),
                }
                if game.is_over() {
                    println!("game over. final money 💵{}", game.inventory.money());
                }
            }
            "board" | "b" => print_board(&game),
            "shop" | "sh" => print_shop(&game),
            "inv" | "inventory" | "i" => print_inventory(&game),
            "state" | "status" | "s" => print_state(&game),
            "buy" => match parts.next().and_then(|p| p.parse::<usize>().ok()) {
                Some(index) => match game.buy(index, &mut events) {
                    Ok(()) => {
                        drain_events(&mut events);
                        print_shop(&game);
                    }
                    Err(err) => println!("cannot buy: {err}"),
                },
                None => println!("usage: buy <offer index>"),
            },
            "refresh" | "ref" => match game.refresh_shop(&mut events) {
                Ok(()) => {
                    drain_events(&mut events);
                    print_shop(&game);
                }
                Err(err) => println!("cannot refresh: {err}"),
            },
            "info" => {
                let x = parts.next().and_then(|p| p.parse::<usize>().ok());
                let y = parts.next().and_then(|p| p.parse::<usize>().ok());
                match (x, y) {
                    (Some(x), Some(y)) if x < game.board.size() && y < game.board.size() => {
                        let symbol = game.board.get(x, y);
                        println!("{} {}", symbol.kind.emoji(), symbol.kind.description_long());
                    }
                    _ => println!("usage: info <x> <y>"),
                }
            }
            "quit" | "exit" | "q" | "x" => break,
            other => println!("unknown command {other:?} — try 'help'"),
        }
    }
}

fn print_help() {
    println!("  roll | r        resolve one turn");
    println!("  board | b       show the board");
    println!("  shop | sh       show the current shop");
    println!("  buy <n>         buy shop offer n");
    println!("  refresh         refresh the shop offers");
    println!("  inv | i         show owned symbols");
    println!("  state | s       show the resource ledger");
    println!("  info <x> <y>    describe the symbol at (x, y)");
    println!("  quit | q        leave");
}

fn print_state(game: &Game) {
    println!(
        "💵 {}  ⏰ {} left  🍀 {:.2}  turn {}  owned {}",
        game.inventory.money(),
        game.inventory.turns_left(),
        game.inventory.luck(),
        game.turn(),
        game.owned_count(),
    );
}

fn print_board(game: &Game) {
    for y in 0..game.board.size() {
        let mut row = String::new();
        for x in 0..game.board.size() {
            let symbol = game.board.get(x, y);
            row.push_str(symbol.kind.emoji());
            match game.counter(x, y) {
                Some(counter) => row.push_str(&format!("{counter:<3}")),
                None => row.push_str("   "),
            }
        }
        println!("  {row}");
    }
    print_state(game);
}

fn print_inventory(game: &Game) {
    let mut counts: Vec<(&str, &str, usize)> = Vec::new();
    for symbol in game.owned_symbols() {
        let tag = symbol.kind.tag();
        match counts.iter_mut().find(|(t, _, _)| *t == tag) {
            Some(entry) => entry.2 += 1,
            None => counts.push((tag, symbol.kind.emoji(), 1)),
        }
    }
    for (tag, emoji, count) in counts {
        println!("  {emoji} {tag} ×{count}");
    }
    println!("  graveyard: {}", game.inventory.graveyard.len());
}

fn print_shop(game: &Game) {
    if !game.shop.is_open {
        println!("shop is closed");
        return;
    }
    println!("shop ({} purchase(s) left):", game.shop.buy_count);
    for (index, offer) in game.shop.offers.iter().enumerate() {
        let price = offer
            .cost
            .get(&ResourceKind::Money)
            .copied()
            .unwrap_or_default();
        println!(
            "  [{index}] {} 💵{}  {}",
            offer.symbol.kind.emoji(),
            price,
            offer.symbol.kind.description(),
        );
    }
    if game.shop.refresh_offered() {
        println!("  [refresh] 💵{}", game.shop.refresh_cost);
    }
}

fn drain_events(events: &mut EventBus) {
    for event in events.drain() {
        match event {
            Event::TurnStarted { turn, turns_left } => {
                println!("— turn {turn} ({turns_left} left)");
            }
            Event::TurnSkipped { money } => println!("  turn skipped, 💵{money}"),
            Event::BoardRolled { placed } => println!("  rolled {placed} symbols onto the board"),
            Event::SymbolAdded { tag, x, y } => println!("  + {tag} at ({x}, {y})"),
            Event::SymbolRemoved { tag, x, y } => println!("  - {tag} at ({x}, {y})"),
            Event::ResourceEarned {
                resource,
                amount,
                at,
            } => match at {
                Some((x, y)) => {
                    println!("  {} {amount:+} at ({x}, {y})", resource.emoji())
                }
                None => println!("  {} {amount:+}", resource.emoji()),
            },
            Event::LuckGained { bonus, x, y } => {
                println!("  🍀 +{bonus:.2} pending at ({x}, {y})")
            }
            Event::LuckResolved { luck } => {
                if luck != 0.0 {
                    println!("  🍀 luck now {luck:.2}");
                }
            }
            Event::Effect { .. } => {}
            Event::ShopOpened {
                offers,
                refresh_cost,
            } => match refresh_cost {
                Some(cost) => println!("  shop opened with {offers} offers (refresh 💵{cost})"),
                None => println!("  shop opened with {offers} offers"),
            },
            Event::ShopRefreshed { cost, money } => {
                println!("  shop refreshed for 💵{cost} (💵{money} left)")
            }
            Event::ShopBought { tag, money } => println!("  bought {tag} (💵{money} left)"),
            Event::ShopClosed => println!("  shop closed"),
            Event::TurnCompleted { payout, money } => {
                println!("  payout 💵{payout}, money 💵{money}")
            }
            Event::GameEnded { money } => println!("  game over — final 💵{money}"),
        }
    }
}
