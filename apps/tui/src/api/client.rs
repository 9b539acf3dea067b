use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::error::ApiError;
use super::models::{
    CropInsights, FactorImpact, Payload, Prediction, PredictionInput, RegionalInsights, Strategy,
    TrendPoint, ZoneYield,
};
use super::request::{self, ApiRequest};

/// Synchronous client for the yield-analytics API.
///
/// One instance is built at startup from the resolved config and shared
/// behind an `Arc`; calls run inside `spawn_blocking` tasks so the UI loop
/// never waits on the network. Query values are percent-encoded by the
/// underlying agent when the URL is assembled.
pub struct ApiClient {
    base_url: String,
    timeout: Duration,
    agent: ureq::Agent,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout,
            agent: ureq::AgentBuilder::new().build(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn regions(&self) -> Result<Vec<String>, ApiError> {
        self.get(&request::regions())
    }

    pub fn crops(&self) -> Result<Vec<String>, ApiError> {
        self.get(&request::crops())
    }

    pub fn yield_trend(
        &self,
        region: &str,
        crop: Option<&str>,
    ) -> Result<Vec<TrendPoint>, ApiError> {
        self.get(&request::yield_trend(region, crop))
    }

    pub fn yield_by_region(&self, crop: &str) -> Result<Vec<ZoneYield>, ApiError> {
        self.get(&request::yield_by_region(crop))
    }

    pub fn factor_impact(
        &self,
        region: Option<&str>,
        crop: Option<&str>,
    ) -> Result<FactorImpact, ApiError> {
        self.get(&request::factor_impact(region, crop))
    }

    pub fn regional_insights(
        &self,
        region: &str,
        crop: Option<&str>,
    ) -> Result<RegionalInsights, ApiError> {
        self.get::<Payload<RegionalInsights>>(&request::regional_insights(region, crop))?
            .into_result()
    }

    pub fn crop_insights(
        &self,
        crop: &str,
        region: Option<&str>,
    ) -> Result<CropInsights, ApiError> {
        self.get::<Payload<CropInsights>>(&request::crop_insights(crop, region))?
            .into_result()
    }

    pub fn improvement_strategies(
        &self,
        region: &str,
        crop: &str,
    ) -> Result<Vec<Strategy>, ApiError> {
        self.get(&request::improvement_strategies(region, crop))
    }

    pub fn predict_yield(&self, input: &PredictionInput) -> Result<Prediction, ApiError> {
        self.post::<_, Payload<Prediction>>(&request::predict_yield(), input)?
            .into_result()
    }

    fn get<T: DeserializeOwned>(&self, request: &ApiRequest) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, request.path);
        let mut call = self.agent.get(&url).timeout(self.timeout);
        for (key, value) in &request.query {
            call = call.query(key, value);
        }
        decode(call.call().map_err(map_ureq_error)?)
    }

    fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        request: &ApiRequest,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, request.path);
        let response = self
            .agent
            .post(&url)
            .timeout(self.timeout)
            .send_json(body)
            .map_err(map_ureq_error)?;
        decode(response)
    }
}

fn decode<T: DeserializeOwned>(response: ureq::Response) -> Result<T, ApiError> {
    response
        .into_json()
        .map_err(|error| ApiError::Decode(error.to_string()))
}

/// Error statuses may still carry a JSON body with a domain-level message;
/// prefer that over a bare status code.
fn map_ureq_error(error: ureq::Error) -> ApiError {
    match error {
        ureq::Error::Status(code, response) => {
            if let Ok(body) = response.into_json::<serde_json::Value>() {
                if let Some(message) = body.get("error").and_then(serde_json::Value::as_str) {
                    return ApiError::Domain(message.to_string());
                }
            }
            ApiError::Transport(format!("HTTP status {code}"))
        }
        other => ApiError::Transport(other.to_string()),
    }
}
