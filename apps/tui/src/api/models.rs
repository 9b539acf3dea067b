use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::error::ApiError;

/// One point of the `/api/yield-trend` series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    #[serde(rename = "Year")]
    pub year: i32,
    #[serde(rename = "Yield (tonnes/ha)")]
    pub yield_tonnes_ha: f64,
}

/// One row of the `/api/yield-by-region` response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneYield {
    #[serde(rename = "Agro-Climatic Zone")]
    pub zone: String,
    #[serde(rename = "Yield (tonnes/ha)")]
    pub yield_tonnes_ha: f64,
}

/// Factor name mapped to its impact on yield, in percent. A `BTreeMap`
/// keeps iteration (and therefore rendering) deterministic.
pub type FactorImpact = BTreeMap<String, f64>;

/// Success body of `/api/regional-insights`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionalInsights {
    pub region: String,
    pub average_yield: f64,
    pub yield_trend: String,
    #[serde(default)]
    pub top_crops: Vec<String>,
    #[serde(default)]
    pub factor_impact: FactorImpact,
}

/// Success body of `/api/crop-insights`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropInsights {
    pub crop: String,
    pub average_yield: f64,
    pub yield_trend: String,
    #[serde(default)]
    pub top_regions: Vec<String>,
    #[serde(default)]
    pub factor_impact: FactorImpact,
}

/// One entry of the `/api/improvement-strategies` response. `impact` and
/// `current_value` arrive pre-formatted by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Strategy {
    pub factor: String,
    pub impact: String,
    pub current_value: String,
    pub recommendation: String,
}

/// JSON body submitted to `/api/predict-yield`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionInput {
    pub region: String,
    pub crop: String,
    pub rainfall: f64,
    pub irrigation: f64,
    pub fertilizer: f64,
}

/// Success body of `/api/predict-yield`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub predicted_yield: f64,
    pub unit: String,
}

/// Wire envelope for endpoints that may answer with `{"error": "..."}`
/// instead of their success shape. The error variant is tried first, so an
/// explicit error field always takes precedence over the payload.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Payload<T> {
    Err { error: String },
    Ok(T),
}

impl<T> Payload<T> {
    pub fn into_result(self) -> Result<T, ApiError> {
        match self {
            Self::Err { error } => Err(ApiError::Domain(error)),
            Self::Ok(value) => Ok(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trend_point_reads_renamed_fields() {
        let point: TrendPoint =
            serde_json::from_str(r#"{"Year": 2020, "Yield (tonnes/ha)": 2.1}"#).unwrap();
        assert_eq!(point.year, 2020);
        assert!((point.yield_tonnes_ha - 2.1).abs() < f64::EPSILON);
    }

    #[test]
    fn payload_error_field_takes_precedence() {
        let payload: Payload<RegionalInsights> =
            serde_json::from_str(r#"{"error": "No data available for Unknown Zone"}"#).unwrap();
        let error = payload.into_result().unwrap_err();
        assert_eq!(error.to_string(), "No data available for Unknown Zone");
        assert!(error.is_domain());
    }

    #[test]
    fn payload_success_decodes_insights_with_defaults() {
        let payload: Payload<RegionalInsights> = serde_json::from_str(
            r#"{"region": "Punjab", "average_yield": 3.4, "yield_trend": "increasing"}"#,
        )
        .unwrap();
        let insights = payload.into_result().unwrap();
        assert_eq!(insights.region, "Punjab");
        assert!(insights.top_crops.is_empty());
        assert!(insights.factor_impact.is_empty());
    }

    #[test]
    fn missing_required_field_is_a_decode_failure() {
        let result = serde_json::from_str::<Prediction>(r#"{"unit": "tonnes/ha"}"#);
        assert!(result.is_err());
    }
}
