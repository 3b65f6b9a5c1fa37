//! Valuation: per-holding gain/loss, totals, and objective progress.

use std::collections::HashMap;

use crate::types::Holding;

/// One valued position. `current_price` is 0 when the price was unavailable,
/// indistinguishable from a genuine zero quote.
#[derive(Debug, Clone, PartialEq)]
pub struct ValuedHolding {
    pub name: String,
    pub current_price: f64,
    pub gain_loss: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Valuation {
    pub holdings: Vec<ValuedHolding>,
    pub total_gain_loss: f64,
}

/// Unrealized gain/loss for one holding at `current_price`.
pub fn gain_loss(h: &Holding, current_price: f64) -> f64 {
    h.quantity * (current_price - h.entry_price)
}

/// Value every holding against the fetched price map. A missing price counts
/// as 0, understating gains rather than blocking the view.
pub fn evaluate(holdings: &[Holding], prices: &HashMap<String, f64>) -> Valuation {
    let mut valuation = Valuation::default();
    for h in holdings {
        let price = prices.get(&h.id).copied().unwrap_or(0.0);
        let gl = gain_loss(h, price);
        valuation.total_gain_loss += gl;
        valuation.holdings.push(ValuedHolding {
            name: h.name.clone(),
            current_price: price,
            gain_loss: gl,
        });
    }
    valuation
}

/// Progress of `total` toward `amount`, capped at 1. A non-positive target
/// yields 0. There is no lower cap: a negative total yields negative
/// progress, which the renderer shows as-is.
pub fn objective_progress(total: f64, amount: f64) -> f64 {
    if amount <= 0.0 {
        0.0
    } else {
        (total / amount).min(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn holding(id: &str, quantity: f64, entry_price: f64) -> Holding {
        Holding {
            id: id.to_string(),
            name: id.to_string(),
            quantity,
            entry_price,
        }
    }

    // ---------- Gain/loss ----------

    #[test]
    fn gain_loss_is_quantity_times_price_delta() {
        let h = holding("bitcoin", 2.0, 10_000.0);
        assert_eq!(gain_loss(&h, 15_000.0), 10_000.0);
        assert_eq!(gain_loss(&h, 9_000.0), -2_000.0);
    }

    #[test]
    fn missing_price_defaults_to_zero() {
        let holdings = vec![holding("bitcoin", 2.0, 10_000.0)];
        let valuation = evaluate(&holdings, &HashMap::new());
        assert_eq!(valuation.holdings[0].current_price, 0.0);
        assert_eq!(valuation.total_gain_loss, -20_000.0);
    }

    #[test]
    fn total_is_order_independent() {
        let mut prices = HashMap::new();
        prices.insert("bitcoin".to_string(), 15_000.0);
        prices.insert("ethereum".to_string(), 2_000.0);

        let a = vec![holding("bitcoin", 2.0, 10_000.0), holding("ethereum", 3.0, 2_500.0)];
        let b = vec![holding("ethereum", 3.0, 2_500.0), holding("bitcoin", 2.0, 10_000.0)];
        assert_eq!(
            evaluate(&a, &prices).total_gain_loss,
            evaluate(&b, &prices).total_gain_loss
        );
        assert_eq!(evaluate(&a, &prices).total_gain_loss, 10_000.0 - 1_500.0);
    }

    #[test]
    fn empty_wallet_totals_zero() {
        let valuation = evaluate(&[], &HashMap::new());
        assert!(valuation.holdings.is_empty());
        assert_eq!(valuation.total_gain_loss, 0.0);
    }

    // ---------- Objective progress ----------

    #[test]
    fn halfway_progress() {
        assert_eq!(objective_progress(2_500.0, 5_000.0), 0.5);
    }

    #[test]
    fn progress_caps_at_one() {
        assert_eq!(objective_progress(12_000.0, 5_000.0), 1.0);
    }

    #[test]
    fn zero_target_guards_division() {
        assert_eq!(objective_progress(2_500.0, 0.0), 0.0);
        assert_eq!(objective_progress(2_500.0, -10.0), 0.0);
    }

    #[test]
    fn negative_total_passes_through_uncapped() {
        assert_eq!(objective_progress(-2_500.0, 5_000.0), -0.5);
    }

    #[test]
    fn nonnegative_total_stays_in_unit_range() {
        for total in [0.0, 1.0, 2_500.0, 5_000.0, 1_000_000.0] {
            let p = objective_progress(total, 5_000.0);
            assert!((0.0..=1.0).contains(&p), "progress {} out of range", p);
        }
    }
}
