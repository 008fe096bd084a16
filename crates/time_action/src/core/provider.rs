use std::collections::BTreeMap;
use std::convert::Infallible;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde_json::{Value, json};

use crate::core::{
    models::{ActionConfig, ActionOutput},
    utils,
};

/// Current time action
#[derive(Debug, Clone)]
pub struct TimeProvider {
    pub(crate) local_timezone: Tz,
}

impl TimeProvider {
    /// Action name registered with the host
    pub const NAME: &'static str = "time_provider";
    pub const DESCRIPTION: &'static str = "Provides current system time in RFC 3339 format";

    pub fn new() -> Self {
        // Try to detect the system's local timezone
        let local_tz = match iana_time_zone::get_timezone() {
            Ok(tz_name) => match tz_name.parse::<Tz>() {
                Ok(tz) => tz,
                Err(_) => {
                    tracing::warn!("Could not parse timezone '{}', defaulting to UTC", tz_name);
                    chrono_tz::UTC
                }
            },
            Err(e) => {
                tracing::warn!("Could not detect system timezone ({}), defaulting to UTC", e);
                chrono_tz::UTC
            }
        };

        Self::for_timezone(local_tz)
    }

    /// Provider reporting times in a fixed timezone
    pub fn for_timezone(local_timezone: Tz) -> Self {
        Self { local_timezone }
    }

    /// Run the action
    ///
    /// The configuration is accepted for host compatibility and otherwise
    /// ignored. This action cannot fail.
    pub fn run(&self, config: &ActionConfig) -> Result<ActionOutput, Infallible> {
        if !config.is_empty() {
            tracing::debug!(keys = config.len(), "ignoring time provider configuration");
        }
        Ok(self.run_at(Utc::now()))
    }

    /// Run the action for a given instant
    pub fn run_at(&self, now: DateTime<Utc>) -> ActionOutput {
        let local = now.with_timezone(&self.local_timezone);
        ActionOutput::new(utils::display_text(&local))
    }

    /// Parameter definitions; this action takes none
    pub fn definition() -> BTreeMap<String, Vec<String>> {
        BTreeMap::new()
    }

    /// Required parameters; none
    pub fn required_fields() -> Vec<String> {
        Vec::new()
    }

    /// JSON schema of the action's parameters
    pub fn schema() -> Value {
        let properties: serde_json::Map<String, Value> = Self::definition()
            .into_iter()
            .map(|(name, types)| (name, json!({ "type": types })))
            .collect();

        json!({
            "type": "object",
            "properties": properties,
            "required": Self::required_fields(),
        })
    }
}

impl Default for TimeProvider {
    fn default() -> Self {
        Self::new()
    }
}
