//! Pure indicator math over newest-first daily series.
//!
//! Insufficient history is never an error here: each indicator returns
//! `None` (or empty series) and the decision layer degrades to hold.

pub mod momentum;
pub mod trend;
pub mod volume;
