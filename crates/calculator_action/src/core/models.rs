use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize, Serializer, ser::Error as _};

/// Magnitude from which integral values switch to exponent notation
const PLAIN_INTEGER_LIMIT: f64 = 1e21;

/// Helper function to deserialize a value, treating `null` as its default
fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Helper function to deserialize operands, treating `null` values as zero
fn deserialize_operands<'de, D>(deserializer: D) -> Result<HashMap<String, f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let operands: Option<HashMap<String, Option<f64>>> = Option::deserialize(deserializer)?;
    Ok(operands
        .unwrap_or_default()
        .into_iter()
        .map(|(name, value)| (name, value.unwrap_or_default()))
        .collect())
}

/// Helper function to serialize a result as the shortest JSON number
///
/// Integral values below 1e21 are written in plain decimal notation
/// (`5`, not `5.0`). Non-finite values have no JSON representation and are
/// rejected.
fn serialize_json_number<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let value = *value;
    if !value.is_finite() {
        return Err(S::Error::custom(format!("unsupported value: {value}")));
    }

    let negative_zero = value == 0.0 && value.is_sign_negative();
    if value.fract() == 0.0 && value.abs() < PLAIN_INTEGER_LIMIT && !negative_zero {
        // Exact: every integral f64 below 1e21 fits in an i128
        serializer.serialize_i128(value as i128)
    } else {
        serializer.serialize_f64(value)
    }
}

/// Request read from standard input
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CalculatorRequest {
    /// Operation name: add, subtract, multiply or divide
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub action: String,
    /// Named operands, conventionally `a` and `b`
    #[serde(default, deserialize_with = "deserialize_operands")]
    pub params: HashMap<String, f64>,
}

impl CalculatorRequest {
    /// Look up a named operand, treating a missing key as zero
    pub fn operand(&self, name: &str) -> f64 {
        self.params.get(name).copied().unwrap_or_default()
    }
}

/// Response written to standard output
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CalculatorResponse {
    #[serde(serialize_with = "serialize_json_number")]
    pub result: f64,
}
