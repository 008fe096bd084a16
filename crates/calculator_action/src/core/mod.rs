//! # Calculator Action Core
//!
//! Four-function arithmetic over a single decoded request.
//!
//! ## Modules
//! - `error`: Failure kinds and their exit status
//! - `models`: Request and response documents
//! - `calculator`: Operation table and evaluation

pub mod calculator;
pub mod error;
pub mod models;
