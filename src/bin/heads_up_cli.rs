// src/bin/heads_up_cli.rs

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use heads_up_engine::ai::{CallingPolicy, EquityPolicy, FoldingPolicy, OpponentPolicy};
use heads_up_engine::api::GameStateDto;
use heads_up_engine::domain::chips::Chips;
use heads_up_engine::domain::config::GameConfig;
use heads_up_engine::engine::{Action, EngineError, GameSession, LegalAction};
use heads_up_engine::infra::{DeterministicRng, SeededDeckProvider, SystemRng};

#[derive(Parser)]
#[command(name = "heads_up_cli")]
#[command(about = "Heads-up матч против бота в терминале")]
struct CliArgs {
    /// JSON с настройками матча
    #[arg(long)]
    config: Option<PathBuf>,

    /// Сид для колод и equity-бота
    #[arg(long)]
    seed: Option<u64>,

    /// Стратегия бота
    #[arg(long, value_enum, default_value = "calling")]
    policy: PolicyKind,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PolicyKind {
    Calling,
    Folding,
    Equity,
}

fn load_config(path: Option<&Path>) -> Result<GameConfig, String> {
    match path {
        Some(p) => {
            let raw = std::fs::read_to_string(p)
                .map_err(|e| format!("cannot read {}: {e}", p.display()))?;
            GameConfig::from_json(&raw)
        }
        None => Ok(GameConfig::default()),
    }
}

fn build_policy(kind: PolicyKind, seed: Option<u64>) -> Box<dyn OpponentPolicy + Send> {
    match (kind, seed) {
        (PolicyKind::Calling, _) => Box::new(CallingPolicy),
        (PolicyKind::Folding, _) => Box::new(FoldingPolicy),
        (PolicyKind::Equity, Some(seed)) => Box::new(EquityPolicy::new(DeterministicRng::from_seed(seed))),
        (PolicyKind::Equity, None) => Box::new(EquityPolicy::new(SystemRng)),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("[CLI] ОШИБКА: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = CliArgs::parse();
    let config = load_config(args.config.as_deref())?;
    let policy = build_policy(args.policy, args.seed);

    let mut session = GameSession::new(config)
        .map_err(|e| e.to_string())?
        .with_policy(policy);
    if let Some(seed) = args.seed {
        session = session.with_decks(Box::new(SeededDeckProvider::new(seed)));
    }

    println!("heads_up_cli: матч против бота ({:?}).", args.policy);
    println!("Команды: f = fold, c = call/check, r N = raise N, n = следующий раунд, q = выход");

    let state = session.start_game().map_err(|e| e.to_string())?;
    print_state(&state);

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        let mut line = String::new();
        let read = stdin.lock().read_line(&mut line).map_err(|e| e.to_string())?;
        if read == 0 {
            break;
        }

        let mut parts = line.split_whitespace();
        let result: Result<GameStateDto, EngineError> = match parts.next() {
            Some("q") => break,
            Some("f") => session.submit_action(Action::Fold),
            Some("c") => session.submit_action(Action::Call),
            Some("r") => match parts.next().and_then(|n| n.parse::<u64>().ok()) {
                Some(n) => session.submit_action(Action::Raise(Chips(n))),
                None => {
                    println!("[CLI] Нужна сумма: r 100");
                    continue;
                }
            },
            Some("n") => session.advance_round(),
            Some(other) => {
                println!("[CLI] Неизвестная команда {other:?}");
                continue;
            }
            None => continue,
        };

        match result {
            Ok(state) => {
                print_state(&state);
                if state.game_finished {
                    break;
                }
            }
            Err(e) => println!("[CLI] Ошибка: {e}"),
        }
    }

    println!("[CLI] Завершение работы.");
    Ok(())
}

fn print_state(s: &GameStateDto) {
    println!();
    println!(
        "================ ROUND {}/{} | {} =================",
        s.round_index, s.max_rounds, s.street
    );
    println!("Банк: {} | Кнопка: {}", s.pot, s.button);
    println!(
        "Вы:  {} (ставка {}) [{}] | {}",
        s.human_stack,
        s.human_bet,
        s.human_cards.join(" "),
        s.last_actions.human
    );
    let ai_cards = if s.ai_cards.is_empty() {
        "?? ??".to_string()
    } else {
        s.ai_cards.join(" ")
    };
    println!(
        "Бот: {} (ставка {}) [{}] | {}",
        s.ai_stack, s.ai_bet, ai_cards, s.last_actions.ai
    );
    println!("Борд: {}", if s.board.is_empty() { "-".to_string() } else { s.board.join(" ") });

    if s.waiting_for_action {
        let options: Vec<String> = s
            .legal_actions
            .iter()
            .map(|a| match a {
                LegalAction::Fold => "fold".to_string(),
                LegalAction::Call { amount } if amount.is_zero() => "check".to_string(),
                LegalAction::Call { amount } => format!("call {amount}"),
                LegalAction::Raise { min, max } => format!("raise {min}..{max}"),
            })
            .collect();
        println!("Ваш ход: {}", options.join(", "));
    }

    if !s.message.is_empty() {
        println!(">> {}", s.message);
    }
    if let Some(over) = &s.game_over {
        println!(
            "[CLI] Матч окончен: {} (вы {}, бот {})",
            over.message, over.human_stack, over.ai_stack
        );
    } else if s.round_result.is_some() {
        println!("[CLI] Раунд закончен, 'n' – следующий.");
    }
}
