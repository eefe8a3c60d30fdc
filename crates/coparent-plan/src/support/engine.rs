use super::domain::{
    CustodySplit, EstimateDetails, EstimateInput, EstimateResult, IncomeSplit, PayingParent,
    SupportRange, NIGHTS_PER_YEAR,
};
use super::factors::{derive_factors, FactorSignals};
use super::schedule::ChildMultiplier;

const BAND_LOWER: f64 = 0.9;
const BAND_UPPER: f64 = 1.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EstimateError {
    #[error("Combined income must be greater than 0.")]
    ZeroCombinedIncome,
}

/// Converts a household snapshot into a monthly support range.
///
/// Pipeline: base support from the child multiplier, allocation by the gap
/// between each parent's income share and custody share, clamp at zero, add
/// expenses, then band around the rounded median.
pub fn estimate(input: &EstimateInput) -> Result<EstimateResult, EstimateError> {
    let combined_income = input.combined_income();
    if combined_income == 0.0 {
        return Err(EstimateError::ZeroCombinedIncome);
    }

    let base_support = ChildMultiplier::for_children(input.num_children).apply(combined_income);

    let a_share = input.income_a / combined_income;
    let b_share = input.income_b / combined_income;
    let nights = f64::from(NIGHTS_PER_YEAR);
    let a_custody_pct = f64::from(input.overnights_a) / nights;
    let b_custody_pct = f64::from(input.overnights_b()) / nights;

    let a_to_b = base_support * (a_share - a_custody_pct);
    let b_to_a = base_support * (b_share - b_custody_pct);

    let net_support = a_to_b.max(b_to_a).max(0.0) + input.extra_expenses;

    let median = round_half_up(net_support);
    let support_range = SupportRange {
        min: round_half_up(median as f64 * BAND_LOWER),
        max: round_half_up(median as f64 * BAND_UPPER),
    };

    // Strict comparison: an exact tie names Parent B.
    let paying_parent = if a_to_b > b_to_a {
        PayingParent::ParentA
    } else {
        PayingParent::ParentB
    };

    let factors = derive_factors(&FactorSignals {
        a_share,
        b_share,
        a_custody_pct,
        num_children: input.num_children,
        extra_expenses: input.extra_expenses,
    });

    Ok(EstimateResult {
        support_range,
        median,
        paying_parent,
        factors,
        details: EstimateDetails {
            base_support: round_half_up(base_support),
            income_split: IncomeSplit {
                a_share: format!("{a_share:.2}"),
                b_share: format!("{b_share:.2}"),
            },
            custody_split: CustodySplit {
                a_custody_pct: format!("{a_custody_pct:.2}"),
                b_custody_pct: format!("{b_custody_pct:.2}"),
            },
        },
    })
}

/// Nearest whole currency unit, halves rounding up.
pub(crate) fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}
