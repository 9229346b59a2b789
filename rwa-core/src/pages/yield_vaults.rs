//! Yield vaults: portfolio totals and the stake form.

use rwa_query::aggregate::{ratio, sum_by};

use crate::error::{DashboardError, Result};
use crate::model::YieldVault;

/// cUSD the user can stake; the MAX button fills this in.
pub const AVAILABLE_BALANCE: f64 = 50_000.0;

pub const DEFAULT_LOCK_DAYS: u32 = 30;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct StakePortfolio {
    pub total_staked: f64,
    /// APY weighted by the user's stake in each vault.
    pub weighted_apy: f64,
    pub monthly_yield: f64,
}

impl StakePortfolio {
    pub fn of(vaults: &[YieldVault]) -> Self {
        let rows: Vec<&YieldVault> = vaults.iter().collect();
        let total_staked = sum_by(&rows, |v| v.user_stake);
        let weighted_apy = ratio(sum_by(&rows, |v| v.user_stake * v.apy), total_staked);
        Self {
            total_staked,
            weighted_apy,
            monthly_yield: total_staked * weighted_apy / 100.0 / 12.0,
        }
    }
}

/// Parse a stake amount. It must be positive and within the available
/// balance.
pub fn parse_stake(raw: &str) -> Result<f64> {
    let trimmed = raw.trim();
    let not_a_number = || DashboardError::InvalidStake(format!("'{trimmed}' is not a number"));
    if !well_grouped(trimmed) {
        return Err(not_a_number());
    }
    let amount: f64 = trimmed
        .replace(',', "")
        .parse()
        .map_err(|_| not_a_number())?;
    if !amount.is_finite() || amount <= 0.0 {
        return Err(DashboardError::InvalidStake(
            "amount must be greater than zero".to_string(),
        ));
    }
    if amount > AVAILABLE_BALANCE {
        return Err(DashboardError::InvalidStake(format!(
            "amount exceeds the available {AVAILABLE_BALANCE} cUSD"
        )));
    }
    Ok(amount)
}

/// Thousands separators, when present, split the integer part into a
/// leading group of one to three digits followed by groups of exactly three.
fn well_grouped(raw: &str) -> bool {
    if !raw.contains(',') {
        return true;
    }
    let (int_part, frac_part) = raw.split_once('.').unwrap_or((raw, ""));
    if frac_part.contains(',') {
        return false;
    }
    let digits = int_part.strip_prefix(['+', '-']).unwrap_or(int_part);
    let mut groups = digits.split(',');
    let lead_ok = groups
        .next()
        .is_some_and(|g| (1..=3).contains(&g.len()) && g.bytes().all(|b| b.is_ascii_digit()));
    lead_ok && groups.all(|g| g.len() == 3 && g.bytes().all(|b| b.is_ascii_digit()))
}

/// Yield earned by staking `amount` at `apy` for `days`.
pub fn projected_yield(amount: f64, apy: f64, days: u32) -> f64 {
    amount * apy / 100.0 * f64::from(days) / 365.0
}

/// The expanded vault card and its stake form.
#[derive(Clone, Debug, PartialEq)]
pub struct StakeDraft {
    pub selected: Option<u32>,
    pub amount: String,
    pub lock_days: u32,
}

impl Default for StakeDraft {
    fn default() -> Self {
        Self {
            selected: None,
            amount: String::new(),
            lock_days: DEFAULT_LOCK_DAYS,
        }
    }
}

impl StakeDraft {
    /// Expand `id`, or collapse it if it is already expanded.
    pub fn toggle(&mut self, id: u32) {
        if self.selected == Some(id) {
            self.selected = None;
        } else {
            self.selected = Some(id);
            self.amount.clear();
        }
    }

    pub fn fill_max(&mut self) {
        self.amount = format!("{AVAILABLE_BALANCE}");
    }

    pub fn effective_apy(&self, vault: &YieldVault) -> f64 {
        vault.effective_apy(self.lock_days)
    }

    pub fn projection(&self, vault: &YieldVault) -> Result<f64> {
        let amount = parse_stake(&self.amount)?;
        Ok(projected_yield(amount, self.effective_apy(vault), self.lock_days))
    }

    /// Validate and accept the stake. Nothing is sent anywhere.
    pub fn submit(&mut self, vault: &YieldVault) -> Result<f64> {
        if self.selected != Some(vault.id) {
            return Err(DashboardError::UnknownAsset(vault.id));
        }
        let amount = parse_stake(&self.amount).inspect_err(|err| {
            tracing::debug!(vault = vault.id, %err, "stake rejected");
        })?;
        if vault.lock_period(self.lock_days).is_none() {
            return Err(DashboardError::InvalidStake(format!(
                "{} has no {}-day lock",
                vault.name, self.lock_days
            )));
        }
        tracing::info!(vault = vault.id, amount, lock_days = self.lock_days, "stake submitted");
        self.amount.clear();
        Ok(amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn portfolio_from_fixtures() {
        let catalog = Catalog::load().unwrap();
        let p = StakePortfolio::of(&catalog.yield_vaults);
        assert_eq!(p.total_staked, 45_650.0);
        assert!((p.weighted_apy - 689_765.0 / 45_650.0).abs() < 1e-9);
        assert!((p.monthly_yield - 574.804_166).abs() < 1e-3);
    }

    #[test]
    fn no_stake_means_zero_apy() {
        assert_eq!(StakePortfolio::of(&[]), StakePortfolio::default());
    }

    #[test]
    fn stake_amount_rules() {
        assert_eq!(parse_stake("1,000").unwrap(), 1000.0);
        assert_eq!(parse_stake("50000").unwrap(), 50_000.0);
        assert!(parse_stake("").is_err());
        assert!(parse_stake("0").is_err());
        assert!(parse_stake("-5").is_err());
        assert!(parse_stake("50000.01").is_err());
        assert!(parse_stake("NaN").is_err());
    }

    #[test]
    fn stake_rejects_misplaced_separators() {
        assert!(parse_stake("1,0,0").is_err());
        assert!(parse_stake(",100").is_err());
        assert!(parse_stake("1000,").is_err());
        assert!(parse_stake("1,0000").is_err());
        assert!(parse_stake("1.5,0").is_err());
        assert_eq!(parse_stake("12,345.50").unwrap(), 12_345.5);
        assert_eq!(parse_stake(" 1,000 ").unwrap(), 1000.0);
    }

    #[test]
    fn lock_bonus_and_projection() {
        let catalog = Catalog::load().unwrap();
        let vault = catalog.yield_vault(1).unwrap();
        let mut draft = StakeDraft::default();
        draft.toggle(1);
        draft.lock_days = 365;
        assert_eq!(draft.effective_apy(vault), 12.5);
        draft.amount = "1000".to_string();
        assert!((draft.projection(vault).unwrap() - 125.0).abs() < 1e-9);
        assert_eq!(draft.submit(vault).unwrap(), 1000.0);
        assert!(draft.amount.is_empty());
    }

    #[test]
    fn max_fills_balance_and_toggle_collapses() {
        let mut draft = StakeDraft::default();
        draft.toggle(2);
        draft.fill_max();
        assert_eq!(parse_stake(&draft.amount).unwrap(), AVAILABLE_BALANCE);
        draft.toggle(2);
        assert_eq!(draft.selected, None);
    }
}
