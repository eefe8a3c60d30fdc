use super::domain::PayingParent;

const INCOME_GAP_THRESHOLD: f64 = 0.2;
const EQUAL_TIME_BAND: f64 = 0.1;
const SHARED_CUSTODY_BAND: f64 = 0.3;
const PRIMARY_CUSTODY_SHARE: f64 = 0.6;

/// Ratios computed during allocation that drive the explanatory factors.
pub(crate) struct FactorSignals {
    pub a_share: f64,
    pub b_share: f64,
    pub a_custody_pct: f64,
    pub num_children: u32,
    pub extra_expenses: f64,
}

pub(crate) fn derive_factors(signals: &FactorSignals) -> Vec<String> {
    let mut factors = Vec::new();

    if (signals.a_share - signals.b_share).abs() > INCOME_GAP_THRESHOLD {
        factors.push("Significant income difference between parents".to_string());
    }

    factors.push(custody_factor(signals.a_custody_pct));

    if signals.num_children > 1 {
        factors.push(format!("Multiple children ({})", signals.num_children));
    }

    if signals.extra_expenses > 0.0 {
        factors.push(format!(
            "Additional monthly expenses of ${}",
            signals.extra_expenses
        ));
    }

    factors
}

fn custody_factor(a_custody_pct: f64) -> String {
    let distance_from_even = (a_custody_pct - 0.5).abs();
    if distance_from_even < EQUAL_TIME_BAND {
        "Nearly equal time with both parents".to_string()
    } else if distance_from_even < SHARED_CUSTODY_BAND {
        "Uneven but shared custody arrangement".to_string()
    } else {
        let primary = if a_custody_pct > PRIMARY_CUSTODY_SHARE {
            PayingParent::ParentA
        } else {
            PayingParent::ParentB
        };
        format!("{} has primary custody", primary.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signals(a_share: f64, a_custody_pct: f64) -> FactorSignals {
        FactorSignals {
            a_share,
            b_share: 1.0 - a_share,
            a_custody_pct,
            num_children: 1,
            extra_expenses: 0.0,
        }
    }

    #[test]
    fn custody_buckets_are_mutually_exclusive() {
        assert_eq!(custody_factor(0.55), "Nearly equal time with both parents");
        assert_eq!(custody_factor(0.3), "Uneven but shared custody arrangement");
        assert_eq!(custody_factor(0.75), "Uneven but shared custody arrangement");
        assert_eq!(custody_factor(0.9), "Parent A has primary custody");
        assert_eq!(custody_factor(0.1), "Parent B has primary custody");
        assert_eq!(custody_factor(0.0), "Parent B has primary custody");
    }

    #[test]
    fn band_edges_fall_to_the_wider_bucket() {
        assert_eq!(custody_factor(0.6 + 1e-9), "Uneven but shared custody arrangement");
        assert_eq!(custody_factor(0.85), "Parent A has primary custody");
    }

    #[test]
    fn income_gap_requires_more_than_twenty_points() {
        let balanced = derive_factors(&signals(0.55, 0.5));
        assert!(!balanced
            .iter()
            .any(|factor| factor.starts_with("Significant income difference")));

        let skewed = derive_factors(&signals(0.7, 0.5));
        assert_eq!(skewed[0], "Significant income difference between parents");
    }

    #[test]
    fn expense_amount_renders_without_trailing_zeros() {
        let mut input = signals(0.5, 0.5);
        input.extra_expenses = 500.0;
        let factors = derive_factors(&input);
        assert_eq!(
            factors.last().map(String::as_str),
            Some("Additional monthly expenses of $500")
        );

        input.extra_expenses = 125.5;
        let factors = derive_factors(&input);
        assert_eq!(
            factors.last().map(String::as_str),
            Some("Additional monthly expenses of $125.5")
        );
    }

    #[test]
    fn single_child_without_expenses_yields_only_custody_factor() {
        let factors = derive_factors(&signals(0.5, 0.5));
        assert_eq!(factors, vec!["Nearly equal time with both parents"]);
    }
}
