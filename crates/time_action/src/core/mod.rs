//! # Time Provider Core
//!
//! ## Modules
//! - `models`: Action input and output shapes shared with the host
//! - `provider`: Timezone detection and the action's entry points
//! - `utils`: Timestamp formatting helpers

pub mod models;
pub mod provider;
pub mod utils;
