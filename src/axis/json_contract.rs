use serde::{Deserialize, Serialize};

use crate::axis::AxisConfig;
use crate::error::{ChartError, ChartResult};

pub const AXIS_CONFIG_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisConfigJsonContractV1 {
    pub schema_version: u32,
    pub config: AxisConfig,
}

impl AxisConfig {
    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = AxisConfigJsonContractV1 {
            schema_version: AXIS_CONFIG_JSON_SCHEMA_V1,
            config: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize axis config contract v1: {e}"))
        })
    }

    /// Parses either a versioned contract payload or a bare config object,
    /// then validates the result.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        let config = parse_compat(input)?;
        config.validate()?;
        Ok(config)
    }
}

fn parse_compat(input: &str) -> ChartResult<AxisConfig> {
    let value: serde_json::Value = serde_json::from_str(input)
        .map_err(|e| ChartError::InvalidData(format!("failed to parse axis config json: {e}")))?;

    if value.get("schema_version").is_none() {
        return serde_json::from_value(value).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse axis config json: {e}"))
        });
    }

    let payload: AxisConfigJsonContractV1 = serde_json::from_value(value).map_err(|e| {
        ChartError::InvalidData(format!("failed to parse axis config json payload: {e}"))
    })?;
    if payload.schema_version != AXIS_CONFIG_JSON_SCHEMA_V1 {
        return Err(ChartError::InvalidData(format!(
            "unsupported axis config schema version: {}",
            payload.schema_version
        )));
    }
    Ok(payload.config)
}

#[cfg(test)]
mod tests {
    use crate::axis::{AxisConfig, AxisDependency, LimitLabelPosition, LimitLine};
    use crate::error::ChartError;
    use crate::render::Color;

    #[test]
    fn contract_round_trip_preserves_limit_lines() {
        let mut config = AxisConfig::for_dependency(AxisDependency::Right);
        config.zero_line.color = Some(Color::rgb(0.2, 0.2, 0.2));
        config.limit_lines.push(
            LimitLine::new(50.0, "Target").with_label_position(LimitLabelPosition::RightBox),
        );

        let json = config.to_json_contract_v1_pretty().expect("serialize");
        let parsed = AxisConfig::from_json_compat_str(&json).expect("parse");

        assert_eq!(parsed, config);
    }

    #[test]
    fn bare_partial_config_fills_defaults() {
        let parsed = AxisConfig::from_json_compat_str(
            r#"{ "axis_dependency": "Right", "draw_top_y_label_entry": false }"#,
        )
        .expect("parse");

        assert_eq!(parsed.axis_dependency, AxisDependency::Right);
        assert!(!parsed.draw_top_y_label_entry);
        assert!(parsed.draw_bottom_y_label_entry);
        assert_eq!(parsed.label_count, 6);
    }

    #[test]
    fn unknown_schema_version_is_rejected() {
        let err = AxisConfig::from_json_compat_str(r#"{ "schema_version": 9, "config": {} }"#)
            .expect_err("unsupported version");
        assert!(matches!(err, ChartError::InvalidData(_)));
    }

    #[test]
    fn invalid_values_fail_validation() {
        let err = AxisConfig::from_json_compat_str(r#"{ "label_count": 99 }"#)
            .expect_err("label count out of range");
        assert!(matches!(err, ChartError::InvalidConfig(_)));
    }
}
