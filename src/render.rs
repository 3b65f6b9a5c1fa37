//! Pure projections of wallet state to terminal text. No I/O in here.

use chrono::Local;
use colored::Colorize;

use crate::portfolio::{objective_progress, Valuation};
use crate::state::WalletStore;
use crate::types::CandidateAsset;
use crate::utils::{format_pct, format_usd};

const BAR_WIDTH: usize = 30;

pub fn landing() -> String {
    format!(
        "{}\nTrack your crypto positions and savings goals.\nType `enter` to open the wallet, `help` for commands, `quit` to leave.\n",
        "GECKO WALLET".yellow().bold()
    )
}

pub fn help() -> String {
    [
        "commands:",
        "  enter                     open the wallet screen",
        "  search <query>            look up an asset on the market API",
        "  pick <n>                  select the n-th search result",
        "  confirm <qty> @ <price>   record the selected asset as a holding",
        "  goal <label> <amount>     create or update a savings objective",
        "  lock                      freeze the wallet (one-way)",
        "  show                      refresh prices and redraw the wallet",
        "  quit                      exit",
    ]
    .join("\n")
}

pub fn candidates(results: &[CandidateAsset]) -> String {
    let mut out = String::from("Search results:\n");
    for (i, c) in results.iter().enumerate() {
        out.push_str(&format!("  {}. {} ({})\n", i + 1, c.name, c.symbol));
    }
    out.push_str("Use `pick <n>` to select, then `confirm <qty> @ <price>`.");
    out
}

/// Draw a fixed-width bar. The fill is clamped to [0, 1] for drawing only;
/// the percentage printed next to it keeps its sign.
pub fn progress_bar(progress: f64) -> String {
    let filled = (progress.clamp(0.0, 1.0) * BAR_WIDTH as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}

pub fn wallet(store: &WalletStore, valuation: &Valuation, warnings: &[String]) -> String {
    let mut out = String::new();
    let status = if store.locked {
        "LOCKED".red().bold().to_string()
    } else {
        "open".green().to_string()
    };
    out.push_str(&format!(
        "== Wallet ({}) as of {} ==\n",
        status,
        Local::now().format("%Y-%m-%d %H:%M")
    ));
    for w in warnings {
        out.push_str(&format!("{} {}\n", "warning:".yellow().bold(), w));
    }

    out.push_str("\nHoldings\n");
    if valuation.holdings.is_empty() {
        out.push_str("  (none yet; `search <query>` to add one)\n");
    }
    for line in &valuation.holdings {
        let gl = format_usd(line.gain_loss);
        let gl = if line.gain_loss < 0.0 {
            gl.red().to_string()
        } else {
            gl.green().to_string()
        };
        out.push_str(&format!(
            "  {} at {}: {}\n",
            line.name,
            format_usd(line.current_price),
            gl
        ));
    }
    out.push_str(&format!(
        "Total gain/loss: {}\n",
        format_usd(valuation.total_gain_loss)
    ));

    out.push_str("\nObjectives\n");
    if store.objectives.is_empty() {
        out.push_str("  (none yet; `goal <label> <amount>` to add one)\n");
    }
    for (label, amount) in &store.objectives {
        let progress = objective_progress(valuation.total_gain_loss, *amount);
        out.push_str(&format!(
            "  {} {} {} of {}\n",
            label,
            progress_bar(progress),
            format_pct(progress),
            format_usd(*amount)
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::ValuedHolding;
    use crate::types::Holding;

    fn plain() {
        colored::control::set_override(false);
    }

    fn store_with(objectives: &[(&str, f64)], locked: bool) -> WalletStore {
        let mut store = WalletStore::default();
        store.coins.push(Holding {
            id: "bitcoin".to_string(),
            name: "Bitcoin".to_string(),
            quantity: 2.0,
            entry_price: 10_000.0,
        });
        for (label, amount) in objectives {
            store.objectives.insert(label.to_string(), *amount);
        }
        store.locked = locked;
        store
    }

    fn valuation(total: f64) -> Valuation {
        Valuation {
            holdings: vec![ValuedHolding {
                name: "Bitcoin".to_string(),
                current_price: 15_000.0,
                gain_loss: total,
            }],
            total_gain_loss: total,
        }
    }

    // ---------- Progress bar ----------

    #[test]
    fn bar_fill_levels() {
        assert_eq!(progress_bar(0.0), format!("[{}]", "-".repeat(30)));
        assert_eq!(progress_bar(1.0), format!("[{}]", "#".repeat(30)));
        assert_eq!(progress_bar(0.5), format!("[{}{}]", "#".repeat(15), "-".repeat(15)));
    }

    #[test]
    fn bar_clamps_out_of_range_fills() {
        assert_eq!(progress_bar(-0.5), progress_bar(0.0));
        assert_eq!(progress_bar(2.5), progress_bar(1.0));
    }

    // ---------- Wallet view ----------

    #[test]
    fn wallet_shows_holdings_total_and_progress() {
        plain();
        let s = wallet(&store_with(&[("trip", 5_000.0)], false), &valuation(2_500.0), &[]);
        assert!(s.contains("Bitcoin at $15000.00: $2500.00"));
        assert!(s.contains("Total gain/loss: $2500.00"));
        assert!(s.contains("trip"));
        assert!(s.contains("50.00% of $5000.00"));
        assert!(s.contains("(open)"));
    }

    #[test]
    fn wallet_shows_negative_progress_unclamped() {
        plain();
        let s = wallet(&store_with(&[("trip", 5_000.0)], false), &valuation(-2_500.0), &[]);
        assert!(s.contains("-50.00% of $5000.00"));
        // the bar itself never draws below empty
        assert!(s.contains(&format!("[{}]", "-".repeat(30))));
    }

    #[test]
    fn wallet_flags_lock_and_warnings() {
        plain();
        let warnings = vec!["price lookup failed; holdings valued at 0".to_string()];
        let s = wallet(&store_with(&[], true), &valuation(-20_000.0), &warnings);
        assert!(s.contains("(LOCKED)"));
        assert!(s.contains("warning: price lookup failed"));
    }

    #[test]
    fn zero_target_objective_renders_zero_progress() {
        plain();
        let s = wallet(&store_with(&[("trip", 0.0)], false), &valuation(2_500.0), &[]);
        assert!(s.contains("0.00% of $0.00"));
    }

    #[test]
    fn candidate_listing_is_one_based() {
        let results = vec![
            CandidateAsset {
                id: "bitcoin".to_string(),
                name: "Bitcoin".to_string(),
                symbol: "btc".to_string(),
            },
            CandidateAsset {
                id: "bitcoin-cash".to_string(),
                name: "Bitcoin Cash".to_string(),
                symbol: "bch".to_string(),
            },
        ];
        let s = candidates(&results);
        assert!(s.contains("1. Bitcoin (btc)"));
        assert!(s.contains("2. Bitcoin Cash (bch)"));
    }
}
