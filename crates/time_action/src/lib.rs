//! # Time Provider Action
//!
//! An in-process action that gives an LLM tool-calling host the current
//! system time.
//!
//! ```no_run
//! use action_time_provider::{ActionConfig, TimeProvider};
//!
//! let provider = TimeProvider::new();
//! let output = provider.run(&ActionConfig::new()).unwrap();
//! assert!(output.text.starts_with("Current time: "));
//! ```

pub mod core;

pub use crate::core::models::{ActionConfig, ActionFields, ActionOutput};
pub use crate::core::provider::TimeProvider;
