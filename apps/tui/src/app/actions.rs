use std::sync::Arc;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::api::models::{
    CropInsights, FactorImpact, Prediction, PredictionInput, RegionalInsights, Strategy,
    TrendPoint, ZoneYield,
};
use crate::api::{ApiClient, ApiError};
use crate::app::state::{PredictionEcho, PredictionView, StrategiesView, TrendView, ZonesView};
use crate::domain::{Notice, PanelId};

/// Messages posted back to the UI loop by fetch tasks.
#[derive(Debug)]
pub enum ApiEvent {
    Regions(Result<Vec<String>, ApiError>),
    Crops(Result<Vec<String>, ApiError>),
    Panel {
        panel: PanelId,
        generation: u64,
        outcome: Result<PanelPayload, Notice>,
    },
}

/// Typed content of a completed panel fetch.
#[derive(Debug)]
pub enum PanelPayload {
    Trend(TrendView),
    Zones(ZonesView),
    Factors(FactorImpact),
    RegionInsights(RegionalInsights),
    CropInsights(CropInsights),
    Strategies(StrategiesView),
    Prediction(PredictionView),
}

/// Spawns API calls on the blocking pool and posts their outcomes back to
/// the UI loop over the event channel. Requests issued together are fully
/// independent; each completion updates only its own panel.
#[derive(Debug, Clone)]
pub struct AppActions {
    client: Arc<ApiClient>,
    tx: UnboundedSender<ApiEvent>,
}

impl AppActions {
    pub fn new(client: Arc<ApiClient>) -> (Self, UnboundedReceiver<ApiEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { client, tx }, rx)
    }

    /// Fetch both reference lists concurrently. There is no ordering
    /// dependency between them.
    pub fn load_reference_lists(&self) {
        let client = self.client.clone();
        let tx = self.tx.clone();
        tokio::task::spawn_blocking(move || {
            let _ = tx.send(ApiEvent::Regions(client.regions()));
        });

        let client = self.client.clone();
        let tx = self.tx.clone();
        tokio::task::spawn_blocking(move || {
            let _ = tx.send(ApiEvent::Crops(client.crops()));
        });
    }

    pub fn fetch_yield_trend(
        &self,
        panel: PanelId,
        generation: u64,
        region: String,
        crop: Option<String>,
    ) {
        self.spawn(panel, generation, move |client| {
            trend_outcome(client.yield_trend(&region, crop.as_deref()), region, crop)
        });
    }

    pub fn fetch_yield_by_region(&self, generation: u64, crop: String) {
        self.spawn(PanelId::CropZones, generation, move |client| {
            zones_outcome(client.yield_by_region(&crop), crop)
        });
    }

    pub fn fetch_factor_impact(
        &self,
        panel: PanelId,
        generation: u64,
        region: Option<String>,
        crop: Option<String>,
    ) {
        self.spawn(panel, generation, move |client| {
            factors_outcome(
                client.factor_impact(region.as_deref(), crop.as_deref()),
                panel,
            )
        });
    }

    pub fn fetch_regional_insights(&self, generation: u64, region: String, crop: Option<String>) {
        self.spawn(PanelId::RegionInsights, generation, move |client| {
            regional_insights_outcome(client.regional_insights(&region, crop.as_deref()))
        });
    }

    pub fn fetch_crop_insights(&self, generation: u64, crop: String, region: Option<String>) {
        self.spawn(PanelId::CropInsights, generation, move |client| {
            crop_insights_outcome(client.crop_insights(&crop, region.as_deref()))
        });
    }

    pub fn fetch_strategies(&self, generation: u64, region: String, crop: String) {
        self.spawn(PanelId::Strategies, generation, move |client| {
            strategies_outcome(client.improvement_strategies(&region, &crop), region, crop)
        });
    }

    pub fn fetch_prediction(&self, generation: u64, input: PredictionInput, echo: PredictionEcho) {
        self.spawn(PanelId::Prediction, generation, move |client| {
            prediction_outcome(client.predict_yield(&input), echo)
        });
    }

    fn spawn(
        &self,
        panel: PanelId,
        generation: u64,
        call: impl FnOnce(&ApiClient) -> Result<PanelPayload, Notice> + Send + 'static,
    ) {
        let client = self.client.clone();
        let tx = self.tx.clone();
        tokio::task::spawn_blocking(move || {
            let outcome = call(&client);
            let _ = tx.send(ApiEvent::Panel {
                panel,
                generation,
                outcome,
            });
        });
    }
}

// Outcome mapping is pure: a response (or failure) in, panel content (or a
// notice) out. Nothing here touches the network or the terminal.

fn trend_outcome(
    result: Result<Vec<TrendPoint>, ApiError>,
    region: String,
    crop: Option<String>,
) -> Result<PanelPayload, Notice> {
    match result {
        Ok(points) if points.is_empty() => Err(Notice::info(
            "No yield trend data available for the selected parameters.",
        )),
        Ok(points) => Ok(PanelPayload::Trend(TrendView {
            region,
            crop,
            points,
        })),
        Err(error) => Err(failure_notice(PanelId::RegionTrend, &error)),
    }
}

fn zones_outcome(
    result: Result<Vec<ZoneYield>, ApiError>,
    crop: String,
) -> Result<PanelPayload, Notice> {
    match result {
        Ok(zones) if zones.is_empty() => Err(Notice::info(
            "No yield data available for the selected crop.",
        )),
        Ok(zones) => Ok(PanelPayload::Zones(ZonesView { crop, zones })),
        Err(error) => Err(failure_notice(PanelId::CropZones, &error)),
    }
}

fn factors_outcome(
    result: Result<FactorImpact, ApiError>,
    panel: PanelId,
) -> Result<PanelPayload, Notice> {
    match result {
        Ok(factors) if factors.is_empty() => Err(Notice::info(
            "No factor impact data available for the selected parameters.",
        )),
        Ok(factors) => Ok(PanelPayload::Factors(factors)),
        Err(error) => Err(failure_notice(panel, &error)),
    }
}

fn regional_insights_outcome(
    result: Result<RegionalInsights, ApiError>,
) -> Result<PanelPayload, Notice> {
    match result {
        Ok(insights) => Ok(PanelPayload::RegionInsights(insights)),
        Err(ApiError::Domain(message)) => Err(Notice::warning(message)),
        Err(error) => Err(failure_notice(PanelId::RegionInsights, &error)),
    }
}

fn crop_insights_outcome(result: Result<CropInsights, ApiError>) -> Result<PanelPayload, Notice> {
    match result {
        Ok(insights) => Ok(PanelPayload::CropInsights(insights)),
        Err(ApiError::Domain(message)) => Err(Notice::warning(message)),
        Err(error) => Err(failure_notice(PanelId::CropInsights, &error)),
    }
}

fn strategies_outcome(
    result: Result<Vec<Strategy>, ApiError>,
    region: String,
    crop: String,
) -> Result<PanelPayload, Notice> {
    match result {
        Ok(strategies) if strategies.is_empty() => Err(Notice::info(format!(
            "No improvement strategies available for {crop} in {region}."
        ))),
        Ok(strategies) => Ok(PanelPayload::Strategies(StrategiesView {
            region,
            crop,
            strategies,
        })),
        Err(error) => Err(failure_notice(PanelId::Strategies, &error)),
    }
}

fn prediction_outcome(
    result: Result<Prediction, ApiError>,
    echo: PredictionEcho,
) -> Result<PanelPayload, Notice> {
    match result {
        Ok(prediction) => Ok(PanelPayload::Prediction(PredictionView {
            prediction,
            echo,
        })),
        Err(ApiError::Domain(message)) => Err(Notice::danger(message)),
        Err(error) => {
            log_failure(PanelId::Prediction, &error);
            Err(Notice::danger(
                "An error occurred while predicting yield. Please try again.",
            ))
        }
    }
}

/// Domain errors carry the server's message verbatim; anything else is
/// logged and replaced with a generic in-panel failure text that does not
/// leak transport details.
fn failure_notice(panel: PanelId, error: &ApiError) -> Notice {
    if let ApiError::Domain(message) = error {
        return Notice::warning(message.clone());
    }
    log_failure(panel, error);
    Notice::danger(format!(
        "An error occurred while {}. Please try again.",
        panel.operation()
    ))
}

fn log_failure(panel: PanelId, error: &ApiError) {
    eprintln!("Error {}: {error}", panel.operation());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NoticeKind;

    fn echo() -> PredictionEcho {
        PredictionEcho {
            region: "Punjab".to_string(),
            crop: "Wheat".to_string(),
            rainfall: "600".to_string(),
            irrigation: "80".to_string(),
            fertilizer: "120".to_string(),
        }
    }

    #[test]
    fn empty_trend_becomes_info_notice() {
        let notice = trend_outcome(Ok(Vec::new()), "Punjab".to_string(), None).unwrap_err();
        assert_eq!(notice.kind, NoticeKind::Info);
        assert_eq!(
            notice.message,
            "No yield trend data available for the selected parameters."
        );
    }

    #[test]
    fn trend_keeps_the_selection_it_was_fetched_with() {
        let points = vec![TrendPoint {
            year: 2020,
            yield_tonnes_ha: 2.1,
        }];
        let payload = trend_outcome(
            Ok(points),
            "Punjab".to_string(),
            Some("Wheat".to_string()),
        )
        .unwrap();
        match payload {
            PanelPayload::Trend(view) => {
                assert_eq!(view.region, "Punjab");
                assert_eq!(view.crop.as_deref(), Some("Wheat"));
                assert_eq!(view.points.len(), 1);
            }
            other => panic!("unexpected payload: {other:?}"),
        }
    }

    #[test]
    fn empty_strategies_notice_names_the_selection() {
        let notice = strategies_outcome(
            Ok(Vec::new()),
            "Punjab".to_string(),
            "Wheat".to_string(),
        )
        .unwrap_err();
        assert_eq!(notice.kind, NoticeKind::Info);
        assert_eq!(
            notice.message,
            "No improvement strategies available for Wheat in Punjab."
        );
    }

    #[test]
    fn transport_failure_becomes_generic_danger_notice() {
        let error = ApiError::Transport("connection refused".to_string());
        let notice = trend_outcome(Err(error), "Punjab".to_string(), None).unwrap_err();
        assert_eq!(notice.kind, NoticeKind::Danger);
        assert_eq!(
            notice.message,
            "An error occurred while fetching yield trend. Please try again."
        );
        assert!(!notice.message.contains("connection refused"));
    }

    #[test]
    fn insight_domain_error_is_rendered_verbatim_as_warning() {
        let error = ApiError::Domain("No data available for Unknown Zone".to_string());
        let notice = regional_insights_outcome(Err(error)).unwrap_err();
        assert_eq!(notice.kind, NoticeKind::Warning);
        assert_eq!(notice.message, "No data available for Unknown Zone");
    }

    #[test]
    fn prediction_domain_error_is_rendered_verbatim_as_danger() {
        let error = ApiError::Domain("Insufficient data to make prediction".to_string());
        let notice = prediction_outcome(Err(error), echo()).unwrap_err();
        assert_eq!(notice.kind, NoticeKind::Danger);
        assert_eq!(notice.message, "Insufficient data to make prediction");
    }

    #[test]
    fn prediction_transport_failure_uses_generic_text() {
        let error = ApiError::Transport("timeout".to_string());
        let notice = prediction_outcome(Err(error), echo()).unwrap_err();
        assert_eq!(
            notice.message,
            "An error occurred while predicting yield. Please try again."
        );
    }

    #[test]
    fn decode_failure_is_not_leaked_into_the_panel() {
        let error = ApiError::Decode("missing field `Year`".to_string());
        let notice = factors_outcome(Err(error), PanelId::RegionFactors).unwrap_err();
        assert_eq!(notice.kind, NoticeKind::Danger);
        assert_eq!(
            notice.message,
            "An error occurred while fetching factor impact. Please try again."
        );
    }

    #[test]
    fn empty_factor_map_becomes_info_notice() {
        let notice = factors_outcome(Ok(FactorImpact::new()), PanelId::CropFactors).unwrap_err();
        assert_eq!(notice.kind, NoticeKind::Info);
    }
}
