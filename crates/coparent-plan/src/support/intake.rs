use super::domain::{EstimateInput, NIGHTS_PER_YEAR};
use serde::{Deserialize, Deserializer, Serialize};

pub const FIELD_PARENT_A_INCOME: &str = "parentAIncome";
pub const FIELD_PARENT_B_INCOME: &str = "parentBIncome";
pub const FIELD_NUMBER_OF_CHILDREN: &str = "numberOfChildren";
pub const FIELD_OVERNIGHTS_PARENT_A: &str = "overnightsParentA";
pub const FIELD_OVERNIGHTS_PARENT_B: &str = "overnightsParentB";
pub const FIELD_EXPENSES: &str = "expenses";

/// Form fields arrive either as JSON numbers or as the raw strings typed
/// into the inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FormValue {
    Number(f64),
    Text(String),
}

impl Default for FormValue {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl From<f64> for FormValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for FormValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl FormValue {
    /// `Ok(None)` for blank text so optional fields can fall back to defaults.
    fn coerce(&self, field: &'static str) -> Result<Option<f64>, IntakeError> {
        match self {
            FormValue::Number(value) => Ok(Some(*value)),
            FormValue::Text(raw) => {
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    return Ok(None);
                }
                trimmed
                    .parse::<f64>()
                    .map(Some)
                    .map_err(|_| IntakeError::NotNumeric {
                        field,
                        value: raw.clone(),
                    })
            }
        }
    }
}

/// Input validation failures raised before the estimator runs.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum IntakeError {
    #[error("{field} is required")]
    Missing { field: &'static str },
    #[error("{field} must be a number (got '{value}')")]
    NotNumeric { field: &'static str, value: String },
    #[error("{field} must be a finite, non-negative amount")]
    Negative { field: &'static str },
    #[error("{field} must be a whole number")]
    NotWholeNumber { field: &'static str },
    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        min: u32,
        max: u32,
    },
}

impl IntakeError {
    pub fn field(&self) -> &'static str {
        match self {
            IntakeError::Missing { field }
            | IntakeError::NotNumeric { field, .. }
            | IntakeError::Negative { field }
            | IntakeError::NotWholeNumber { field }
            | IntakeError::OutOfRange { field, .. } => field,
        }
    }
}

/// Support estimator form as submitted by the plan builder.
///
/// `state` is jurisdiction metadata the estimator does not use.
/// `overnights_parent_b` is validated but the computation always derives
/// Parent B's nights from Parent A's.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportEstimateForm {
    #[serde(default, deserialize_with = "null_as_blank")]
    pub parent_a_income: FormValue,
    #[serde(default, deserialize_with = "null_as_blank")]
    pub parent_b_income: FormValue,
    #[serde(default, deserialize_with = "null_as_blank")]
    pub number_of_children: FormValue,
    #[serde(default, deserialize_with = "null_as_blank")]
    pub overnights_parent_a: FormValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overnights_parent_b: Option<FormValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expenses: Option<FormValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

impl SupportEstimateForm {
    pub fn to_input(&self) -> Result<EstimateInput, IntakeError> {
        let income_a = amount(&self.parent_a_income, FIELD_PARENT_A_INCOME)?;
        let income_b = amount(&self.parent_b_income, FIELD_PARENT_B_INCOME)?;
        let num_children = children(&self.number_of_children)?;
        let overnights_a = overnights(&self.overnights_parent_a, FIELD_OVERNIGHTS_PARENT_A)?;
        self.declared_overnights_b()?;
        let extra_expenses = match &self.expenses {
            Some(value) => optional_amount(value, FIELD_EXPENSES)?.unwrap_or(0.0),
            None => 0.0,
        };

        Ok(EstimateInput {
            income_a,
            income_b,
            num_children,
            overnights_a,
            extra_expenses,
        })
    }

    /// Parent B's overnights as entered, if the form carried the field.
    pub fn declared_overnights_b(&self) -> Result<Option<u16>, IntakeError> {
        let Some(value) = &self.overnights_parent_b else {
            return Ok(None);
        };
        if value.coerce(FIELD_OVERNIGHTS_PARENT_B)?.is_none() {
            return Ok(None);
        }
        overnights(value, FIELD_OVERNIGHTS_PARENT_B).map(Some)
    }

    /// True when both overnights fields were entered and do not cover the
    /// full year.
    pub fn overnights_mismatch(&self) -> bool {
        let a = overnights(&self.overnights_parent_a, FIELD_OVERNIGHTS_PARENT_A);
        match (a, self.declared_overnights_b()) {
            (Ok(a), Ok(Some(b))) => a + b != NIGHTS_PER_YEAR,
            _ => false,
        }
    }
}

/// Absent and `null` required fields become blank so intake reports them as
/// missing by name.
fn null_as_blank<'de, D>(deserializer: D) -> Result<FormValue, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<FormValue>::deserialize(deserializer)?.unwrap_or_default())
}

fn required(value: &FormValue, field: &'static str) -> Result<f64, IntakeError> {
    value.coerce(field)?.ok_or(IntakeError::Missing { field })
}

fn amount(value: &FormValue, field: &'static str) -> Result<f64, IntakeError> {
    let amount = required(value, field)?;
    check_amount(amount, field)
}

fn optional_amount(value: &FormValue, field: &'static str) -> Result<Option<f64>, IntakeError> {
    value
        .coerce(field)?
        .map(|amount| check_amount(amount, field))
        .transpose()
}

fn check_amount(amount: f64, field: &'static str) -> Result<f64, IntakeError> {
    if amount.is_finite() && amount >= 0.0 {
        Ok(amount)
    } else {
        Err(IntakeError::Negative { field })
    }
}

fn whole_number(
    value: &FormValue,
    field: &'static str,
    min: u32,
    max: u32,
) -> Result<u32, IntakeError> {
    let raw = required(value, field)?;
    if !raw.is_finite() || raw.fract() != 0.0 {
        return Err(IntakeError::NotWholeNumber { field });
    }
    if raw < f64::from(min) || raw > f64::from(max) {
        return Err(IntakeError::OutOfRange { field, min, max });
    }
    Ok(raw as u32)
}

fn children(value: &FormValue) -> Result<u32, IntakeError> {
    whole_number(value, FIELD_NUMBER_OF_CHILDREN, 1, u32::MAX)
}

fn overnights(value: &FormValue, field: &'static str) -> Result<u16, IntakeError> {
    let nights = whole_number(value, field, 0, u32::from(NIGHTS_PER_YEAR))?;
    // Bounded by NIGHTS_PER_YEAR above.
    Ok(nights as u16)
}
