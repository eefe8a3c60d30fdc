//! Support-range estimation for the co-parenting plan builder.
//!
//! The estimator is a pure function over a validated household snapshot. The
//! surrounding modules adapt it to the places it is called from: the web form
//! (`intake`), bulk CSV exports (`batch`), and HTTP (`router`).

pub mod batch;
pub mod domain;
mod engine;
pub(crate) mod factors;
pub mod intake;
pub mod router;
pub mod schedule;

#[cfg(test)]
mod tests;

pub use batch::{BatchError, BatchEstimator, BatchOutcome, RowOutcome};
pub use domain::{
    CustodySplit, EstimateDetails, EstimateInput, EstimateResult, IncomeSplit, PayingParent,
    SupportRange, NIGHTS_PER_YEAR,
};
pub use engine::{estimate, EstimateError};
pub use intake::{FormValue, IntakeError, SupportEstimateForm};
pub use router::support_router;
pub use schedule::ChildMultiplier;
