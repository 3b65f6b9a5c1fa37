//! Session state machine and command handlers: validate -> mutate -> commit.

use anyhow::{bail, Result};
use tracing::info;

use crate::state::{Repository, WalletStore};
use crate::types::{CandidateAsset, Holding, Screen};

/// Refuse additions once the wallet is locked. The lock lives in the store
/// but is enforced here, at the interaction layer.
pub fn ensure_unlocked(store: &WalletStore) -> Result<()> {
    if store.locked {
        bail!("wallet is locked; no further coins or objectives can be added");
    }
    Ok(())
}

/// Per-session, non-persisted state: the active screen, the results of the
/// last search, and the candidate awaiting confirmation.
pub struct Session {
    pub screen: Screen,
    pub candidates: Vec<CandidateAsset>,
    pub pending: Option<CandidateAsset>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            screen: Screen::Landing,
            candidates: Vec::new(),
            pending: None,
        }
    }

    pub fn enter_wallet(&mut self) {
        self.screen = Screen::Wallet;
    }

    pub fn on_wallet(&self) -> bool {
        self.screen == Screen::Wallet
    }

    /// Store the results of a search; any earlier selection is stale now.
    pub fn set_candidates(&mut self, results: Vec<CandidateAsset>) {
        self.candidates = results;
        self.pending = None;
    }

    /// Select the n-th candidate (1-based) from the last search.
    pub fn pick(&mut self, index: usize) -> Result<CandidateAsset> {
        if self.candidates.is_empty() {
            bail!("no search results to pick from; run `search <query>` first");
        }
        if index == 0 || index > self.candidates.len() {
            bail!("pick {} is out of range (1..={})", index, self.candidates.len());
        }
        let chosen = self.candidates[index - 1].clone();
        self.pending = Some(chosen.clone());
        Ok(chosen)
    }

    /// Record the pending candidate as a holding and persist. Refused when
    /// locked, when nothing is pending, or when a number is unusable; in the
    /// refused cases nothing is mutated.
    pub fn confirm(
        &mut self,
        quantity: f64,
        entry_price: f64,
        repo: &mut Repository,
    ) -> Result<Holding> {
        ensure_unlocked(repo.store())?;
        let Some(pending) = self.pending.clone() else {
            bail!("nothing selected; run `search` then `pick <n>` first");
        };
        if !quantity.is_finite() || quantity < 0.0 {
            bail!("quantity must be a non-negative number");
        }
        if !entry_price.is_finite() || entry_price < 0.0 {
            bail!("entry price must be a non-negative number");
        }

        let holding = Holding {
            id: pending.id,
            name: pending.name,
            quantity,
            entry_price,
        };
        repo.mutate(|s| s.coins.push(holding.clone()));
        repo.commit()?;
        self.pending = None;
        info!(id = %holding.id, quantity, entry_price, "holding recorded");
        Ok(holding)
    }

    /// Create or re-point an objective by label, then persist.
    pub fn set_objective(&mut self, label: &str, amount: f64, repo: &mut Repository) -> Result<()> {
        ensure_unlocked(repo.store())?;
        let label = label.trim();
        if label.is_empty() {
            bail!("objective label cannot be empty");
        }
        if !amount.is_finite() || amount < 0.0 {
            bail!("objective amount must be a non-negative number");
        }
        repo.mutate(|s| {
            s.objectives.insert(label.to_string(), amount);
        });
        repo.commit()?;
        info!(label, amount, "objective set");
        Ok(())
    }

    /// One-way lock: once set it is never cleared.
    pub fn lock(&mut self, repo: &mut Repository) -> Result<()> {
        if repo.store().locked {
            bail!("wallet is already locked");
        }
        repo.mutate(|s| s.locked = true);
        repo.commit()?;
        info!("wallet locked");
        Ok(())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
