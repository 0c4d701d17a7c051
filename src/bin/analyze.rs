//! Hand analysis CLI.
//!
//! Estimates the hero's win/tie equity against random opponents, names
//! the best visible hand, and compares fold/call/raise by EV and EU.
//!
//! Example: `analyze "As Kd" --board "Ah Kh Kc" --opponents 2 --pot 120 --to-call 40`

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use oddsmith::cards::card::Card;
use oddsmith::cards::street::Street;
use oddsmith::decision::call::CallDecision;
use oddsmith::decision::comparison::Comparison;
use oddsmith::decision::raise::RaiseDecision;
use oddsmith::equity::simulation::HeroEquity;
use oddsmith::equity::simulation::Simulation;
use oddsmith::evaluation::describe::describe_best_hand;
use serde::Serialize;

#[derive(Parser)]
#[command(name = "analyze")]
#[command(about = "Texas Hold'em equity and EV/EU decision analysis")]
struct Args {
    /// Hero hole cards, e.g. "As Kd"
    hero: String,
    /// Known board cards, e.g. "Ah Kh Kc"
    #[arg(long, default_value = "")]
    board: String,
    /// Number of random opponents
    #[arg(long, default_value_t = 1)]
    opponents: usize,
    /// Monte Carlo trials
    #[arg(long, default_value_t = 20_000)]
    samples: usize,
    /// Seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,
    /// Worker threads; defaults to every core
    #[arg(long)]
    workers: Option<usize>,
    /// Current pot, the opponent's bet included
    #[arg(long, default_value_t = 100.0)]
    pot: f64,
    /// Cost of calling
    #[arg(long, default_value_t = 50.0)]
    to_call: f64,
    /// Our bet or raise size
    #[arg(long, default_value_t = 50.0)]
    bet: f64,
    /// Probability every opponent folds to our bet
    #[arg(long, default_value_t = 0.3)]
    fold_prob: f64,
    /// Risk style: -5 seeking, 0 neutral, 5 cautious
    #[arg(long, default_value_t = 0.0)]
    risk: f64,
    /// Emit the full report as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct Report {
    equity: HeroEquity,
    best_hand: Option<String>,
    comparison: Comparison,
}

fn parse_cards(text: &str) -> Result<Vec<Card>> {
    text.split_whitespace()
        .map(|c| Card::parse(c).map_err(Into::into))
        .collect()
}

fn join(cards: &[Card]) -> String {
    cards
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let hero = parse_cards(&args.hero)?;
    let board = parse_cards(&args.board)?;

    let mut simulation = Simulation::new(args.samples);
    if let Some(seed) = args.seed {
        simulation = simulation.seeded(seed);
    }
    simulation = match args.workers {
        Some(workers) => simulation.workers(workers),
        None => simulation.parallel(),
    };
    let equity = simulation.hero_vs_random(&hero, &board, args.opponents)?;

    let call = CallDecision {
        tie_prob: equity.tie,
        risk_factor: args.risk,
        ..CallDecision::new(args.pot, args.to_call, equity.win)
    };
    let raise = RaiseDecision {
        tie_prob_call: equity.tie,
        risk_factor: args.risk,
        ..RaiseDecision::new(args.pot, args.to_call, args.bet, args.fold_prob, equity.win)
    };
    let comparison = Comparison::new(call, raise);

    let best_hand = if hero.len() + board.len() >= 5 {
        Some(describe_best_hand(&[hero.as_slice(), board.as_slice()].concat())?)
    } else {
        None
    };

    if args.json {
        let report = Report {
            equity,
            best_hand,
            comparison,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("hero:  {}", join(&hero));
    match Street::of(board.len()) {
        Some(street) => println!("board: {} ({})", join(&board), street),
        None => println!("board: {}", join(&board)),
    }
    println!();
    println!(
        "win  {:.3}\ntie  {:.3}\nlose {:.3}   ({} trials, {} opponents)",
        equity.win,
        equity.tie,
        equity.lose(),
        equity.trials,
        args.opponents,
    );
    if let Some(ref description) = best_hand {
        println!("best hand: {}", description);
    }
    println!();
    print!("{}", comparison);
    println!("call vs fold:  {}", call.recommend());
    println!("raise vs wait: {}", raise.recommend());
    let best = comparison.best();
    println!(
        "{}",
        format!("recommended action (by EU): {} ({:.3})", best.action, best.eu)
            .bold()
            .green()
    );
    Ok(())
}
