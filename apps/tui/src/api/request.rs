//! Pure request construction for the analytics API.
//!
//! Each builder captures the required/optional parameter rules of one
//! endpoint and produces an [`ApiRequest`] without touching the network, so
//! the rules can be unit-tested in isolation. Percent-encoding of values
//! happens at send time in the HTTP client.

/// A fully-described request: path plus query pairs in emit order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub path: &'static str,
    pub query: Vec<(&'static str, String)>,
}

impl ApiRequest {
    fn new(path: &'static str) -> Self {
        Self {
            path,
            query: Vec::new(),
        }
    }

    fn with(mut self, key: &'static str, value: &str) -> Self {
        self.query.push((key, value.to_string()));
        self
    }

    /// Append the pair only when a non-empty value is present.
    fn with_opt(mut self, key: &'static str, value: Option<&str>) -> Self {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            self.query.push((key, value.to_string()));
        }
        self
    }
}

pub fn regions() -> ApiRequest {
    ApiRequest::new("/api/regions")
}

pub fn crops() -> ApiRequest {
    ApiRequest::new("/api/crops")
}

pub fn yield_trend(region: &str, crop: Option<&str>) -> ApiRequest {
    ApiRequest::new("/api/yield-trend")
        .with("region", region)
        .with_opt("crop", crop)
}

pub fn yield_by_region(crop: &str) -> ApiRequest {
    ApiRequest::new("/api/yield-by-region").with("crop", crop)
}

pub fn factor_impact(region: Option<&str>, crop: Option<&str>) -> ApiRequest {
    ApiRequest::new("/api/factor-impact")
        .with_opt("region", region)
        .with_opt("crop", crop)
}

pub fn regional_insights(region: &str, crop: Option<&str>) -> ApiRequest {
    ApiRequest::new("/api/regional-insights")
        .with("region", region)
        .with_opt("crop", crop)
}

pub fn crop_insights(crop: &str, region: Option<&str>) -> ApiRequest {
    ApiRequest::new("/api/crop-insights")
        .with("crop", crop)
        .with_opt("region", region)
}

pub fn improvement_strategies(region: &str, crop: &str) -> ApiRequest {
    ApiRequest::new("/api/improvement-strategies")
        .with("region", region)
        .with("crop", crop)
}

pub fn predict_yield() -> ApiRequest {
    ApiRequest::new("/api/predict-yield")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(request: &ApiRequest) -> Vec<&'static str> {
        request.query.iter().map(|(key, _)| *key).collect()
    }

    #[test]
    fn yield_trend_requires_region_and_skips_empty_crop() {
        let request = yield_trend("Punjab", None);
        assert_eq!(request.path, "/api/yield-trend");
        assert_eq!(request.query, vec![("region", "Punjab".to_string())]);

        let request = yield_trend("Punjab", Some(""));
        assert_eq!(keys(&request), vec!["region"]);

        let request = yield_trend("Punjab", Some("Wheat"));
        assert_eq!(keys(&request), vec!["region", "crop"]);
    }

    #[test]
    fn factor_impact_takes_any_non_empty_subset() {
        assert!(factor_impact(None, None).query.is_empty());
        assert_eq!(keys(&factor_impact(Some("Punjab"), None)), vec!["region"]);
        assert_eq!(keys(&factor_impact(None, Some("Wheat"))), vec!["crop"]);
        assert_eq!(
            keys(&factor_impact(Some("Punjab"), Some("Wheat"))),
            vec!["region", "crop"]
        );
    }

    #[test]
    fn insights_builders_put_the_required_parameter_first() {
        let regional = regional_insights("Punjab", Some("Wheat"));
        assert_eq!(keys(&regional), vec!["region", "crop"]);

        let crop = crop_insights("Wheat", Some("Punjab"));
        assert_eq!(keys(&crop), vec!["crop", "region"]);
    }

    #[test]
    fn strategies_require_both_parameters() {
        let request = improvement_strategies("Punjab", "Wheat");
        assert_eq!(
            request.query,
            vec![
                ("region", "Punjab".to_string()),
                ("crop", "Wheat".to_string())
            ]
        );
    }
}
