//! Account configuration
//!
//! Holds the limits every newly opened account starts with. Values come from
//! the command line or fall back to the defaults below.

use rust_decimal::Decimal;

/// Default branch code for new accounts
pub const DEFAULT_BRANCH: &str = "0001";

/// Default per-withdrawal ceiling (500.00)
pub const DEFAULT_WITHDRAWAL_LIMIT: Decimal = Decimal::from_parts(50000, 0, 0, false, 2);

/// Default maximum number of withdrawals per period
pub const DEFAULT_MAX_WITHDRAWALS: u32 = 3;

/// Period over which the withdrawal counter accumulates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WithdrawalWindow {
    /// The counter never resets for the account's lifetime
    #[default]
    Lifetime,

    /// The counter resets on the first withdrawal of a new local calendar day
    Daily,
}

/// Limits applied to newly opened accounts
#[derive(Debug, Clone, PartialEq)]
pub struct AccountConfig {
    /// Branch code stamped on the account
    pub branch: String,
    /// Largest amount a single withdrawal may take
    pub withdrawal_limit: Decimal,
    /// Number of withdrawals allowed per window
    pub max_withdrawals: u32,
    /// Window after which the withdrawal counter resets
    pub window: WithdrawalWindow,
}

impl Default for AccountConfig {
    fn default() -> Self {
        Self {
            branch: DEFAULT_BRANCH.to_string(),
            withdrawal_limit: DEFAULT_WITHDRAWAL_LIMIT,
            max_withdrawals: DEFAULT_MAX_WITHDRAWALS,
            window: WithdrawalWindow::default(),
        }
    }
}

impl AccountConfig {
    /// Create a new AccountConfig with custom values
    ///
    /// An empty branch or a non-positive withdrawal limit falls back to the
    /// default with a warning. A `max_withdrawals` of zero is kept as given and
    /// disables withdrawals entirely.
    pub fn new(
        branch: &str,
        withdrawal_limit: Decimal,
        max_withdrawals: u32,
        window: WithdrawalWindow,
    ) -> Self {
        let default = Self::default();

        let branch = if branch.trim().is_empty() {
            tracing::warn!(
                "Invalid branch ({:?}), using default ({})",
                branch,
                default.branch
            );
            default.branch
        } else {
            branch.trim().to_string()
        };

        let withdrawal_limit = if withdrawal_limit <= Decimal::ZERO {
            tracing::warn!(
                "Invalid withdrawal_limit ({}), using default ({})",
                withdrawal_limit,
                default.withdrawal_limit
            );
            default.withdrawal_limit
        } else {
            withdrawal_limit
        };

        Self {
            branch,
            withdrawal_limit,
            max_withdrawals,
            window,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_defaults() {
        let config = AccountConfig::default();
        assert_eq!(config.branch, "0001");
        assert_eq!(config.withdrawal_limit, Decimal::new(500, 0));
        assert_eq!(config.max_withdrawals, 3);
        assert_eq!(config.window, WithdrawalWindow::Lifetime);
    }

    #[rstest]
    #[case::custom("0042", Decimal::new(1000, 0), "0042", Decimal::new(1000, 0))]
    #[case::trimmed_branch(" 0007 ", Decimal::new(250, 0), "0007", Decimal::new(250, 0))]
    #[case::empty_branch("", Decimal::new(250, 0), "0001", Decimal::new(250, 0))]
    #[case::zero_limit("0002", Decimal::ZERO, "0002", Decimal::new(500, 0))]
    #[case::negative_limit("0002", Decimal::new(-1, 0), "0002", Decimal::new(500, 0))]
    fn test_new_falls_back_to_defaults(
        #[case] branch: &str,
        #[case] limit: Decimal,
        #[case] expected_branch: &str,
        #[case] expected_limit: Decimal,
    ) {
        let config = AccountConfig::new(branch, limit, 5, WithdrawalWindow::Daily);
        assert_eq!(config.branch, expected_branch);
        assert_eq!(config.withdrawal_limit, expected_limit);
        assert_eq!(config.max_withdrawals, 5);
        assert_eq!(config.window, WithdrawalWindow::Daily);
    }
}
