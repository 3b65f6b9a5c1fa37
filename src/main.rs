//! Entry point. Wires stdin -> Parser -> Session -> Store, fetching prices
//! on every wallet render.

mod config;
mod market;
mod parser;
mod portfolio;
mod render;
mod session;
mod state;
mod types;
mod utils;

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use dotenvy::dotenv;
use tracing::{error, info};

use crate::market::MarketClient;
use crate::parser::parse_command;
use crate::session::Session;
use crate::state::Repository;
use crate::types::Command;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenv().ok();
    init_logging().unwrap_or_else(|e| eprintln!("warning: logging disabled: {e}"));

    let cfg = config::AppConfig::load_or_default("config.yaml").context("load config.yaml")?;
    let api_key = std::env::var("COINGECKO_API_KEY").ok();

    // A malformed store file is fatal here; the message names the file so the
    // user can fix or remove it.
    let mut repo = Repository::open(&cfg.state.path).context("open wallet store")?;
    let market = MarketClient::new(&cfg.market.base_url, api_key).context("build market client")?;
    let mut session = Session::new();

    info!(store = %cfg.state.path, api = %cfg.market.base_url, "gecko-wallet started");
    println!("{}", render::landing());

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        if line.trim().is_empty() {
            continue;
        }
        let Some(cmd) = parse_command(&line) else {
            println!("unrecognized command; type `help`");
            continue;
        };

        match cmd {
            Command::Quit => break,
            Command::Help => println!("{}", render::help()),
            Command::EnterWallet => {
                session.enter_wallet();
                show_wallet(&repo, &market).await;
            }
            // Everything below only works once the wallet screen is open.
            _ if !session.on_wallet() => {
                println!("you are on the landing screen; type `enter` first");
            }
            Command::Show => show_wallet(&repo, &market).await,
            Command::Search { query } => handle_search(&mut session, &repo, &market, &query).await,
            Command::Pick { index } => match session.pick(index) {
                Ok(chosen) => println!(
                    "selected {} ({}); `confirm <qty> @ <price>` to record it",
                    chosen.name, chosen.symbol
                ),
                Err(e) => println!("{e}"),
            },
            Command::Confirm {
                quantity,
                entry_price,
            } => match session.confirm(quantity, entry_price, &mut repo) {
                Ok(h) => {
                    println!(
                        "recorded {} ({} at {})",
                        h.name,
                        h.quantity,
                        utils::format_usd(h.entry_price)
                    );
                    show_wallet(&repo, &market).await;
                }
                Err(e) => println!("{e}"),
            },
            Command::Goal { label, amount } => {
                match session.set_objective(&label, amount, &mut repo) {
                    Ok(()) => show_wallet(&repo, &market).await,
                    Err(e) => println!("{e}"),
                }
            }
            Command::Lock => match session.lock(&mut repo) {
                Ok(()) => show_wallet(&repo, &market).await,
                Err(e) => println!("{e}"),
            },
        }
    }

    info!("gecko-wallet exiting");
    Ok(())
}

/// Search the market API and stage the results for `pick`. Locked wallets
/// refuse the whole add flow up front.
async fn handle_search(session: &mut Session, repo: &Repository, market: &MarketClient, query: &str) {
    if let Err(e) = session::ensure_unlocked(repo.store()) {
        println!("{e}");
        return;
    }
    match market.search(query).await {
        Ok(results) if results.is_empty() => {
            session.set_candidates(Vec::new());
            println!("no assets matched \"{query}\"");
        }
        Ok(results) => {
            session.set_candidates(results);
            println!("{}", render::candidates(&session.candidates));
        }
        Err(e) => {
            error!("search failed: {e}");
            session.set_candidates(Vec::new());
            println!("search failed ({e}); try again later");
        }
    }
}

/// Full re-render: fetch current prices for every held id, value the wallet,
/// and print the projection. A failed fetch degrades to zero prices with a
/// visible warning instead of blocking the screen.
async fn show_wallet(repo: &Repository, market: &MarketClient) {
    let store = repo.store();
    let ids: Vec<String> = store.coins.iter().map(|c| c.id.clone()).collect();
    let mut warnings = Vec::new();
    let prices = match market.current_prices(&ids).await {
        Ok(p) => p,
        Err(e) => {
            error!("price fetch failed: {e}");
            warnings.push(format!("price lookup failed ({e}); holdings valued at 0"));
            Default::default()
        }
    };
    let valuation = portfolio::evaluate(&store.coins, &prices);
    println!("{}", render::wallet(store, &valuation, &warnings));
}

/// Log to a daily-rotated file under ./logs so the interactive screen stays
/// clean. RUST_LOG overrides the default filter.
fn init_logging() -> Result<()> {
    use tracing_appender::rolling::{RollingFileAppender, Rotation};
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let log_dir = std::path::PathBuf::from("./logs");
    std::fs::create_dir_all(&log_dir).context("create log directory")?;
    let file_appender = RollingFileAppender::new(Rotation::DAILY, log_dir, "gecko-wallet.log");

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "gecko_wallet=info".into()))
        .init();
    Ok(())
}
