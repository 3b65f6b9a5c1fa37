//! Core domain types for holdings, objectives, search candidates and commands.

use serde::{Deserialize, Serialize};

/// A recorded asset position. Append-only: once confirmed it is never edited
/// or deleted, only re-read on later renders.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Holding {
    pub id: String,   // market identifier, e.g. "bitcoin"
    pub name: String, // display name, e.g. "Bitcoin"
    pub quantity: f64,
    pub entry_price: f64, // USD paid per unit
}

/// A search hit from the market API; not held until confirmed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CandidateAsset {
    pub id: String,
    pub name: String,
    pub symbol: String,
}

/// Which screen the session is on. Landing is the initial screen; Wallet is
/// terminal for the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Landing,
    Wallet,
}

/// A parsed command line.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    EnterWallet,
    Search { query: String },
    /// 1-based index into the last search results, as printed.
    Pick { index: usize },
    Confirm { quantity: f64, entry_price: f64 },
    /// Creates the objective or re-points an existing one by label.
    Goal { label: String, amount: f64 },
    Lock,
    Show,
    Help,
    Quit,
}
