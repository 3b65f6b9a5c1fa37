//! Parse wallet commands from input lines.
//! Grammar (v1): enter/wallet, search, pick, confirm, goal, lock, show, help, quit.

use crate::types::Command;
use regex::Regex;

pub fn parse_command(text: &str) -> Option<Command> {
    // Normalize whitespace
    let t = text.trim();

    // Bare verbs: "enter", "wallet", "lock", "show", "help", "quit"/"q"
    let re_bare = Regex::new(r"(?i)^(enter|wallet|lock|show|help|quit|q)$").unwrap();
    if let Some(c) = re_bare.captures(t) {
        return Some(match c[1].to_ascii_lowercase().as_str() {
            "enter" | "wallet" => Command::EnterWallet,
            "lock" => Command::Lock,
            "show" => Command::Show,
            "help" => Command::Help,
            _ => Command::Quit,
        });
    }

    // "search <query>"
    let re_search = Regex::new(r"(?i)^search\s+(\S.*)$").unwrap();
    if let Some(c) = re_search.captures(t) {
        return Some(Command::Search {
            query: c[1].trim().to_string(),
        });
    }

    // "pick <n>" -- 1-based index into the last search results
    let re_pick = Regex::new(r"(?i)^pick\s+(\d+)$").unwrap();
    if let Some(c) = re_pick.captures(t) {
        let index: usize = c[1].parse().ok()?;
        return Some(Command::Pick { index });
    }

    // "confirm <qty> @ <price>", e.g. "confirm 2 @ 10000" or "confirm 0.5 @61000.25"
    let re_confirm = Regex::new(r"(?i)^confirm\s+(\d+(?:\.\d+)?)\s*@\s*(\d+(?:\.\d+)?)$").unwrap();
    if let Some(c) = re_confirm.captures(t) {
        let quantity: f64 = c[1].parse().ok()?;
        let entry_price: f64 = c[2].parse().ok()?;
        return Some(Command::Confirm {
            quantity,
            entry_price,
        });
    }

    // "goal <label...> <amount>"; the label may contain spaces, the last
    // token is the target amount
    let re_goal = Regex::new(r"(?i)^goal\s+(\S.*?)\s+(\d+(?:\.\d+)?)$").unwrap();
    if let Some(c) = re_goal.captures(t) {
        let amount: f64 = c[2].parse().ok()?;
        return Some(Command::Goal {
            label: c[1].trim().to_string(),
            amount,
        });
    }

    None
}
