use axum::response::Response;
use serde_json::Value;

use crate::support::domain::EstimateInput;
use crate::support::intake::{FormValue, SupportEstimateForm};

pub(super) fn input(
    income_a: f64,
    income_b: f64,
    num_children: u32,
    overnights_a: u16,
    extra_expenses: f64,
) -> EstimateInput {
    EstimateInput {
        income_a,
        income_b,
        num_children,
        overnights_a,
        extra_expenses,
    }
}

/// Two children, near-even custody, $500 of extra expenses.
pub(super) fn reference_input() -> EstimateInput {
    input(4000.0, 3500.0, 2, 182, 500.0)
}

/// Same household as `reference_input`, entered the way the browser posts it.
pub(super) fn reference_form() -> SupportEstimateForm {
    SupportEstimateForm {
        parent_a_income: FormValue::from("4000"),
        parent_b_income: FormValue::from("3500"),
        number_of_children: FormValue::from("2"),
        overnights_parent_a: FormValue::from("182"),
        overnights_parent_b: Some(FormValue::from("183")),
        expenses: Some(FormValue::from("500")),
        state: Some("IA".to_string()),
    }
}

pub(super) fn zero_income_form() -> SupportEstimateForm {
    SupportEstimateForm {
        parent_a_income: FormValue::from(0.0),
        parent_b_income: FormValue::from(0.0),
        ..reference_form()
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 16 * 1024)
        .await
        .expect("body readable");
    serde_json::from_slice(&body).expect("valid json")
}
