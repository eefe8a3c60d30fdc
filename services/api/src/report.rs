use clap::Args;
use coparent_plan::error::AppError;
use coparent_plan::support::{
    estimate, BatchEstimator, BatchOutcome, EstimateResult, FormValue, RowOutcome,
    SupportEstimateForm,
};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct EstimateArgs {
    /// Parent A monthly income
    #[arg(long)]
    pub(crate) income_a: String,
    /// Parent B monthly income
    #[arg(long)]
    pub(crate) income_b: String,
    /// Number of children covered by the plan
    #[arg(long)]
    pub(crate) children: String,
    /// Overnights per year with Parent A (0-365)
    #[arg(long)]
    pub(crate) overnights_a: String,
    /// Overnights per year with Parent B (validated; the estimate uses 365 minus Parent A)
    #[arg(long)]
    pub(crate) overnights_b: Option<String>,
    /// Additional monthly child-related expenses (defaults to 0)
    #[arg(long)]
    pub(crate) expenses: Option<String>,
    /// State or jurisdiction of the household (informational only)
    #[arg(long)]
    pub(crate) state: Option<String>,
    /// Print the estimate as JSON instead of a report
    #[arg(long)]
    pub(crate) json: bool,
}

impl EstimateArgs {
    fn to_form(&self) -> SupportEstimateForm {
        SupportEstimateForm {
            parent_a_income: FormValue::from(self.income_a.as_str()),
            parent_b_income: FormValue::from(self.income_b.as_str()),
            number_of_children: FormValue::from(self.children.as_str()),
            overnights_parent_a: FormValue::from(self.overnights_a.as_str()),
            overnights_parent_b: self.overnights_b.as_deref().map(FormValue::from),
            expenses: self.expenses.as_deref().map(FormValue::from),
            state: self.state.clone(),
        }
    }
}

#[derive(Args, Debug)]
pub(crate) struct BatchArgs {
    /// CSV export with parentAIncome, parentBIncome, numberOfChildren,
    /// overnightsParentA and optional overnightsParentB, expenses, state columns
    #[arg(long)]
    pub(crate) csv: PathBuf,
    /// Print all outcomes as a JSON array
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_estimate(args: EstimateArgs) -> Result<(), AppError> {
    let form = args.to_form();
    let input = form.to_input()?;
    let result = estimate(&input)?;

    if args.json {
        print_json(&result);
        return Ok(());
    }

    if form.overnights_mismatch() {
        println!("Note: overnights do not add up to 365; Parent B is assumed to have the remaining nights.");
    }
    for line in estimate_lines(&result) {
        println!("{line}");
    }

    Ok(())
}

pub(crate) fn run_batch(args: BatchArgs) -> Result<(), AppError> {
    let outcomes = BatchEstimator::from_path(&args.csv)?;

    if args.json {
        print_json(&outcomes);
        return Ok(());
    }

    println!("Support estimates for {}", args.csv.display());
    for outcome in &outcomes {
        println!("{}", batch_line(outcome));
    }
    let rejected = outcomes
        .iter()
        .filter(|outcome| outcome.result().is_none())
        .count();
    println!(
        "{} row(s) estimated, {} rejected",
        outcomes.len() - rejected,
        rejected
    );

    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(err) => eprintln!("JSON output unavailable: {err}"),
    }
}

pub(crate) fn estimate_lines(result: &EstimateResult) -> Vec<String> {
    let mut lines = vec![
        "Support estimate (not a legal determination)".to_string(),
        format!(
            "Estimated range: ${} - ${} per month (median ${})",
            result.support_range.min, result.support_range.max, result.median
        ),
        format!("Paying parent: {}", result.paying_parent),
        format!("Base support: ${}", result.details.base_support),
        format!(
            "Income split: A {} / B {}",
            result.details.income_split.a_share, result.details.income_split.b_share
        ),
        format!(
            "Custody split: A {} / B {}",
            result.details.custody_split.a_custody_pct, result.details.custody_split.b_custody_pct
        ),
    ];

    if !result.factors.is_empty() {
        lines.push("Factors".to_string());
        lines.extend(result.factors.iter().map(|factor| format!("- {factor}")));
    }

    lines
}

fn batch_line(outcome: &BatchOutcome) -> String {
    match &outcome.outcome {
        RowOutcome::Estimate(result) => format!(
            "- row {}: ${} - ${} (median ${}), paid by {}",
            outcome.row,
            result.support_range.min,
            result.support_range.max,
            result.median,
            result.paying_parent
        ),
        RowOutcome::Rejected(reason) => format!("- row {}: rejected ({reason})", outcome.row),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> EstimateArgs {
        EstimateArgs {
            income_a: "4000".to_string(),
            income_b: "3500".to_string(),
            children: "2".to_string(),
            overnights_a: "182".to_string(),
            overnights_b: None,
            expenses: Some("500".to_string()),
            state: None,
            json: false,
        }
    }

    #[test]
    fn estimate_report_lists_range_and_factors() {
        let input = args().to_form().to_input().expect("valid args");
        let result = estimate(&input).expect("estimate");
        let lines = estimate_lines(&result);

        assert_eq!(lines[1], "Estimated range: $501 - $613 per month (median $557)");
        assert_eq!(lines[2], "Paying parent: Parent A");
        assert!(lines.contains(&"- Multiple children (2)".to_string()));
        assert_eq!(
            lines.last().map(String::as_str),
            Some("- Additional monthly expenses of $500")
        );
    }

    #[test]
    fn invalid_arguments_surface_as_intake_errors() {
        let mut args = args();
        args.children = "two".to_string();
        assert!(matches!(run_estimate(args), Err(AppError::Intake(_))));
    }

    #[test]
    fn zero_income_surfaces_domain_error() {
        let mut args = args();
        args.income_a = "0".to_string();
        args.income_b = "0".to_string();
        let err = run_estimate(args).expect_err("zero income rejected");
        assert_eq!(err.to_string(), "Combined income must be greater than 0.");
    }

    #[test]
    fn batch_line_reports_rejections() {
        let outcome = BatchOutcome {
            row: 4,
            outcome: RowOutcome::Rejected("parentAIncome is required".to_string()),
        };
        assert_eq!(
            batch_line(&outcome),
            "- row 4: rejected (parentAIncome is required)"
        );
    }
}
