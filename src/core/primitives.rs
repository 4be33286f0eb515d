use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{ChartError, ChartResult};

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> ChartResult<f64> {
    value.to_f64().ok_or_else(|| {
        ChartError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

pub fn ensure_finite(value: f64, field_name: &str) -> ChartResult<f64> {
    if !value.is_finite() {
        return Err(ChartError::InvalidData(format!("{field_name} must be finite")));
    }
    Ok(value)
}
