use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

use crate::models::MetricCounters;

/// Request payload replacing all three counters of a participant.
///
/// Deserialization is lenient the way the dashboard forms expect: missing
/// fields, `null`, empty or non-numeric strings count as 0, numeric strings
/// are read up to the first non-digit and fractions are truncated. Negative
/// values survive deserialization so that validation can reject them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MetricsInput {
    #[serde(default, deserialize_with = "lenient_count")]
    #[validate(range(
        min = 0,
        max = 4_294_967_295i64,
        message = "agendamentos must be a non-negative integer"
    ))]
    #[schema(minimum = 0)]
    pub agendamentos: i64,

    #[serde(default, deserialize_with = "lenient_count")]
    #[validate(range(
        min = 0,
        max = 4_294_967_295i64,
        message = "visitasRealizadas must be a non-negative integer"
    ))]
    #[schema(minimum = 0)]
    pub visitas_realizadas: i64,

    #[serde(default, deserialize_with = "lenient_count")]
    #[validate(range(
        min = 0,
        max = 4_294_967_295i64,
        message = "contratosAssinados must be a non-negative integer"
    ))]
    #[schema(minimum = 0)]
    pub contratos_assinados: i64,
}

impl MetricsInput {
    pub fn new(agendamentos: i64, visitas_realizadas: i64, contratos_assinados: i64) -> Self {
        Self {
            agendamentos,
            visitas_realizadas,
            contratos_assinados,
        }
    }

    /// Validates the payload and converts it into stored counters.
    pub fn counters(&self) -> Result<MetricCounters, ValidationErrors> {
        self.validate()?;

        // Range checked by `validate` above.
        Ok(MetricCounters {
            agendamentos: self.agendamentos as u32,
            visitas_realizadas: self.visitas_realizadas as u32,
            contratos_assinados: self.contratos_assinados as u32,
        })
    }
}

fn lenient_count<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_count(&value))
}

/// Reads a counter out of arbitrary JSON; anything unreadable is 0.
pub fn coerce_count(value: &Value) -> i64 {
    match value {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().map(|f| f.trunc() as i64))
            .unwrap_or(0),
        Value::String(raw) => parse_leading_integer(raw),
        _ => 0,
    }
}

fn parse_leading_integer(raw: &str) -> i64 {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..end];
    if digits.is_empty() {
        return 0;
    }

    match digits.parse::<i64>() {
        Ok(n) if negative => -n,
        Ok(n) => n,
        // Overflow: saturate so validation still sees the sign.
        Err(_) if negative => i64::MIN,
        Err(_) => i64::MAX,
    }
}
