//! Purchase quantity stepper.
//!
//! Every path that changes a quantity (buttons, the number field, the
//! slider) goes through [`PurchaseBounds::clamp`], so a stored quantity is
//! always inside `[min, min(max, available)]`.

use std::collections::HashMap;

use rwa_query::aggregate::percent;

use crate::error::{DashboardError, Result};
use crate::model::Offering;

/// Inclusive quantity limits for one offering.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PurchaseBounds {
    min: u64,
    upper: u64,
}

impl PurchaseBounds {
    /// Bounds for `id`. Fails with [`DashboardError::SoldOut`] when fewer
    /// than `min` tokens can be bought.
    pub fn new(id: u32, min: u64, max: u64, available: u64) -> Result<Self> {
        let upper = max.min(available);
        if upper < min {
            tracing::debug!(id, min, upper, "offering cannot fill a minimum purchase");
            return Err(DashboardError::SoldOut { id });
        }
        Ok(Self { min, upper })
    }

    pub fn for_offering(offering: &Offering) -> Result<Self> {
        Self::new(
            offering.id,
            offering.min_purchase,
            offering.max_purchase,
            offering.available,
        )
    }

    pub fn min(&self) -> u64 {
        self.min
    }

    pub fn upper(&self) -> u64 {
        self.upper
    }

    /// `max(min, min(quantity, upper))`. Idempotent.
    pub fn clamp(&self, quantity: i64) -> u64 {
        if quantity <= 0 {
            return self.min;
        }
        (quantity as u64).clamp(self.min, self.upper)
    }

    pub fn increment(&self, quantity: u64) -> u64 {
        self.clamp(quantity.saturating_add(1).min(i64::MAX as u64) as i64)
    }

    pub fn decrement(&self, quantity: u64) -> u64 {
        self.clamp(quantity.saturating_sub(1).min(i64::MAX as u64) as i64)
    }

    pub fn can_increment(&self, quantity: u64) -> bool {
        quantity < self.upper
    }

    pub fn can_decrement(&self, quantity: u64) -> bool {
        quantity > self.min
    }

    /// Text typed into the number field. The leading integer is clamped
    /// (`12.7` reads as 12, overflow saturates); no leading digits means `min`.
    pub fn parse_entry(&self, raw: &str) -> u64 {
        match leading_integer(raw) {
            Some(quantity) => self.clamp(quantity),
            None => self.min,
        }
    }

    /// Accept `quantity` only if it is already in range.
    pub fn validate(&self, quantity: u64) -> Result<u64> {
        if (self.min..=self.upper).contains(&quantity) {
            Ok(quantity)
        } else {
            Err(DashboardError::InvalidQuantity {
                quantity,
                min: self.min,
                max: self.upper,
            })
        }
    }
}

/// Optional sign then decimal digits at the start of `raw`, saturating at
/// the `i64` limits. `None` when no digit follows the sign.
fn leading_integer(raw: &str) -> Option<i64> {
    let raw = raw.trim_start();
    let (negative, rest) = match raw.as_bytes().first() {
        Some(b'-') => (true, &raw[1..]),
        Some(b'+') => (false, &raw[1..]),
        _ => (false, raw),
    };
    let digits: Vec<i64> = rest
        .bytes()
        .take_while(u8::is_ascii_digit)
        .map(|d| i64::from(d - b'0'))
        .collect();
    if digits.is_empty() {
        return None;
    }
    let value = digits.iter().fold(0i64, |acc, &d| {
        if negative {
            acc.saturating_mul(10).saturating_sub(d)
        } else {
            acc.saturating_mul(10).saturating_add(d)
        }
    });
    Some(value)
}

/// Cost and ownership of buying `quantity` tokens.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quote {
    pub quantity: u64,
    pub total_cost: f64,
    /// Percent of the total supply.
    pub ownership_pct: f64,
}

impl Quote {
    pub fn new(quantity: u64, unit_price: f64, total_supply: u64) -> Self {
        Self {
            quantity,
            total_cost: quantity as f64 * unit_price,
            ownership_pct: percent(quantity as f64, total_supply as f64),
        }
    }

    pub fn for_offering(offering: &Offering, quantity: u64) -> Self {
        Self::new(quantity, offering.unit_price, offering.total_supply)
    }

    /// Ownership with three decimals, e.g. `1.000`.
    pub fn ownership_display(&self) -> String {
        format!("{:.3}", self.ownership_pct)
    }
}

/// Per-offering quantities chosen on one page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QuantityBook {
    quantities: HashMap<u32, u64>,
}

impl QuantityBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// The stored quantity, or `bounds.min()` if none was chosen yet.
    pub fn get(&self, id: u32, bounds: &PurchaseBounds) -> u64 {
        self.quantities
            .get(&id)
            .map_or(bounds.min(), |&q| bounds.clamp(q as i64))
    }

    /// Clamp `quantity` and store it. Returns the stored value.
    pub fn set(&mut self, id: u32, bounds: &PurchaseBounds, quantity: i64) -> u64 {
        let clamped = bounds.clamp(quantity);
        self.quantities.insert(id, clamped);
        clamped
    }

    /// Start at the minimum unless a quantity was already chosen.
    pub fn ensure(&mut self, id: u32, bounds: &PurchaseBounds) -> u64 {
        *self.quantities.entry(id).or_insert(bounds.min())
    }

    pub fn increment(&mut self, id: u32, bounds: &PurchaseBounds) -> u64 {
        let next = bounds.increment(self.get(id, bounds));
        self.quantities.insert(id, next);
        next
    }

    pub fn decrement(&mut self, id: u32, bounds: &PurchaseBounds) -> u64 {
        let next = bounds.decrement(self.get(id, bounds));
        self.quantities.insert(id, next);
        next
    }

    pub fn enter(&mut self, id: u32, bounds: &PurchaseBounds, raw: &str) -> u64 {
        let next = bounds.parse_entry(raw);
        self.quantities.insert(id, next);
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> PurchaseBounds {
        PurchaseBounds::new(1, 10, 1000, 7500).unwrap()
    }

    #[test]
    fn upper_is_min_of_max_and_available() {
        assert_eq!(bounds().upper(), 1000);
        assert_eq!(PurchaseBounds::new(2, 5, 500, 120).unwrap().upper(), 120);
    }

    #[test]
    fn sold_out_when_upper_below_min() {
        let err = PurchaseBounds::new(4, 8, 800, 0).unwrap_err();
        assert!(matches!(err, DashboardError::SoldOut { id: 4 }));
    }

    #[test]
    fn clamp_pins_to_bounds() {
        let b = bounds();
        assert_eq!(b.clamp(-3), 10);
        assert_eq!(b.clamp(0), 10);
        assert_eq!(b.clamp(9), 10);
        assert_eq!(b.clamp(250), 250);
        assert_eq!(b.clamp(1001), 1000);
        assert_eq!(b.clamp(i64::MAX), 1000);
    }

    #[test]
    fn steps_saturate() {
        let b = bounds();
        assert_eq!(b.decrement(10), 10);
        assert_eq!(b.increment(1000), 1000);
        assert_eq!(b.increment(10), 11);
        assert!(!b.can_decrement(10));
        assert!(!b.can_increment(1000));
    }

    #[test]
    fn unparsable_entry_means_min() {
        let b = bounds();
        assert_eq!(b.parse_entry(""), 10);
        assert_eq!(b.parse_entry("abc"), 10);
        assert_eq!(b.parse_entry(" 42 "), 42);
        assert_eq!(b.parse_entry("99999"), 1000);
    }

    #[test]
    fn entry_reads_the_leading_integer() {
        let b = bounds();
        assert_eq!(b.parse_entry("99999999999999999999"), 1000);
        assert_eq!(b.parse_entry("-99999999999999999999"), 10);
        assert_eq!(b.parse_entry("12.7"), 12);
        assert_eq!(b.parse_entry("  300 tokens"), 300);
        assert_eq!(b.parse_entry("+15"), 15);
        assert_eq!(b.parse_entry("-"), 10);
        assert_eq!(b.parse_entry(".5"), 10);
    }

    #[test]
    fn validate_rejects_out_of_range() {
        let b = bounds();
        assert_eq!(b.validate(10).unwrap(), 10);
        let err = b.validate(5).unwrap_err();
        assert_eq!(err.to_string(), "quantity 5 is outside 10..=1000");
    }

    #[test]
    fn quote_ownership_has_three_decimals() {
        let quote = Quote::new(100, 25.0, 10_000);
        assert_eq!(quote.ownership_display(), "1.000");
        assert_eq!(quote.total_cost, 2500.0);
        assert_eq!(Quote::new(100, 25.0, 0).ownership_pct, 0.0);
    }

    #[test]
    fn book_defaults_to_min_and_clamps_on_set() {
        let b = bounds();
        let mut book = QuantityBook::new();
        assert_eq!(book.get(1, &b), 10);
        assert_eq!(book.set(1, &b, 5000), 1000);
        assert_eq!(book.get(1, &b), 1000);
        assert_eq!(book.ensure(1, &b), 1000);
        assert_eq!(book.ensure(2, &b), 10);
        assert_eq!(book.decrement(1, &b), 999);
        assert_eq!(book.enter(1, &b, "nope"), 10);
    }
}
