use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Minimum provision, in currency units, for a lot to be surfaced.
pub const ACCEPTANCE_THRESHOLD: Decimal = Decimal::from_parts(5000, 0, 0, false, 0);

/// The acceptance rule applied to a lot's two auction values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterPolicy {
    /// Minimum provision (`value_1 - value_2`) for acceptance.
    pub threshold: Decimal,
    /// Reject lots where either auction value is zero or negative. A zero
    /// provision never clears the threshold anyway; this guard exists to
    /// drop blocks whose monetary columns were mis-extracted as zero.
    pub require_positive_values: bool,
}

impl Default for FilterPolicy {
    fn default() -> Self {
        FilterPolicy {
            threshold: ACCEPTANCE_THRESHOLD,
            require_positive_values: true,
        }
    }
}

impl FilterPolicy {
    /// The business metric: `value_1 - value_2`, rounded to 2 decimals.
    pub fn provision(value_1: Decimal, value_2: Decimal) -> Decimal {
        (value_1 - value_2).round_dp(2)
    }

    /// Pure decision: does the lot clear the provision threshold?
    pub fn accepts(&self, value_1: Decimal, value_2: Decimal) -> bool {
        if self.require_positive_values
            && (value_1 <= Decimal::ZERO || value_2 <= Decimal::ZERO)
        {
            return false;
        }
        Self::provision(value_1, value_2) >= self.threshold
    }
}
