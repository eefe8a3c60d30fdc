use super::domain::EstimateResult;
use super::engine::estimate;
use super::intake::{FormValue, SupportEstimateForm};
use serde::{Deserialize, Deserializer, Serialize};
use std::io::Read;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error("failed to read estimate batch: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid estimate batch CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// Estimate for a single CSV row. Rows are numbered from 1, header excluded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchOutcome {
    pub row: usize,
    #[serde(flatten)]
    pub outcome: RowOutcome,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RowOutcome {
    Estimate(EstimateResult),
    Rejected(String),
}

impl BatchOutcome {
    pub fn result(&self) -> Option<&EstimateResult> {
        match &self.outcome {
            RowOutcome::Estimate(result) => Some(result),
            RowOutcome::Rejected(_) => None,
        }
    }
}

/// Runs the estimator over a CSV export whose headers are the form field
/// names. Row-level problems are reported per row; a malformed file aborts.
pub struct BatchEstimator;

impl BatchEstimator {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<BatchOutcome>, BatchError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<BatchOutcome>, BatchError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut outcomes = Vec::new();

        for (index, record) in csv_reader.deserialize::<BatchRow>().enumerate() {
            let form = record?.into_form();
            let outcome = match form.to_input() {
                Ok(input) => match estimate(&input) {
                    Ok(result) => RowOutcome::Estimate(result),
                    Err(err) => RowOutcome::Rejected(err.to_string()),
                },
                Err(err) => RowOutcome::Rejected(err.to_string()),
            };
            outcomes.push(BatchOutcome {
                row: index + 1,
                outcome,
            });
        }

        Ok(outcomes)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BatchRow {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    parent_a_income: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    parent_b_income: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    number_of_children: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    overnights_parent_a: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    overnights_parent_b: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    expenses: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    state: Option<String>,
}

impl BatchRow {
    fn into_form(self) -> SupportEstimateForm {
        let text = |value: Option<String>| FormValue::Text(value.unwrap_or_default());
        SupportEstimateForm {
            parent_a_income: text(self.parent_a_income),
            parent_b_income: text(self.parent_b_income),
            number_of_children: text(self.number_of_children),
            overnights_parent_a: text(self.overnights_parent_a),
            overnights_parent_b: self.overnights_parent_b.map(FormValue::Text),
            expenses: self.expenses.map(FormValue::Text),
            state: self.state,
        }
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|raw| !raw.trim().is_empty()))
}
