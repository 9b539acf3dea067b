use crate::api::models::{
    CropInsights, FactorImpact, Prediction, PredictionInput, RegionalInsights, Strategy,
    TrendPoint, ZoneYield,
};
use crate::app::actions::{ApiEvent, AppActions, PanelPayload};
use crate::domain::{Notice, Panel, PanelId};
use throbber_widgets_tui::ThrobberState;

/// Tab screens of the dashboard, one per user-triggered action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppScreen {
    RegionAnalysis,
    CropAnalysis,
    Prediction,
    Strategies,
}

impl AppScreen {
    pub const ALL: [Self; 4] = [
        Self::RegionAnalysis,
        Self::CropAnalysis,
        Self::Prediction,
        Self::Strategies,
    ];

    pub const fn title(self) -> &'static str {
        match self {
            Self::RegionAnalysis => "Region Analysis",
            Self::CropAnalysis => "Crop Analysis",
            Self::Prediction => "Yield Prediction",
            Self::Strategies => "Strategies",
        }
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|screen| *screen == self).unwrap_or(0)
    }

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::RegionAnalysis),
            1 => Some(Self::CropAnalysis),
            2 => Some(Self::Prediction),
            3 => Some(Self::Strategies),
            _ => None,
        }
    }
}

/// A select control: a sentinel placeholder (empty selection) followed by
/// the options of a reference list, cycled with left/right.
#[derive(Debug, Clone)]
pub struct Selector {
    pub label: &'static str,
    pub sentinel: &'static str,
    options: Vec<String>,
    index: usize,
}

impl Selector {
    pub const fn new(label: &'static str, sentinel: &'static str) -> Self {
        Self {
            label,
            sentinel,
            options: Vec::new(),
            index: 0,
        }
    }

    /// Replace the option list wholesale and reset to the sentinel.
    pub fn set_options(&mut self, options: Vec<String>) {
        self.options = options;
        self.index = 0;
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Total entries including the sentinel.
    pub fn option_count(&self) -> usize {
        self.options.len() + 1
    }

    /// The active selection; `None` while the sentinel is shown.
    pub fn selected(&self) -> Option<&str> {
        if self.index == 0 {
            None
        } else {
            self.options.get(self.index - 1).map(String::as_str)
        }
    }

    /// Text shown in the control.
    pub fn display(&self) -> &str {
        self.selected().unwrap_or(self.sentinel)
    }

    pub fn next(&mut self) {
        self.index = (self.index + 1) % self.option_count();
    }

    pub fn prev(&mut self) {
        self.index = (self.index + self.option_count() - 1) % self.option_count();
    }
}

/// A free-form numeric input field.
#[derive(Debug, Clone)]
pub struct NumericField {
    pub label: &'static str,
    pub unit: &'static str,
    pub buffer: String,
}

impl NumericField {
    pub const fn new(label: &'static str, unit: &'static str) -> Self {
        Self {
            label,
            unit,
            buffer: String::new(),
        }
    }

    pub fn value(&self) -> Option<f64> {
        if self.buffer.is_empty() {
            None
        } else {
            self.buffer.parse().ok()
        }
    }

    pub fn push(&mut self, c: char) {
        if c.is_ascii_digit() || (c == '.' && !self.buffer.contains('.')) {
            self.buffer.push(c);
        }
    }

    pub fn pop(&mut self) {
        self.buffer.pop();
    }
}

/// Reference lists loaded at startup and replaced wholesale on reload,
/// never mutated in place.
#[derive(Debug, Clone, Default)]
pub struct ReferenceData {
    pub regions: Vec<String>,
    pub crops: Vec<String>,
}

/// Trend data together with the selection it was fetched for, so the chart
/// title reflects the request rather than whatever the controls show now.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendView {
    pub region: String,
    pub crop: Option<String>,
    pub points: Vec<TrendPoint>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ZonesView {
    pub crop: String,
    pub zones: Vec<ZoneYield>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StrategiesView {
    pub region: String,
    pub crop: String,
    pub strategies: Vec<Strategy>,
}

/// Raw input strings echoed back alongside a prediction result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictionEcho {
    pub region: String,
    pub crop: String,
    pub rainfall: String,
    pub irrigation: String,
    pub fertilizer: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PredictionView {
    pub prediction: Prediction,
    pub echo: PredictionEcho,
}

/// Region analysis screen: required region, optional crop filter, three
/// independent output panels.
#[derive(Debug)]
pub struct RegionAnalysis {
    pub region: Selector,
    pub crop_filter: Selector,
    pub focus: usize,
    pub trend: Panel<TrendView>,
    pub factors: Panel<FactorImpact>,
    pub insights: Panel<RegionalInsights>,
}

impl RegionAnalysis {
    fn new() -> Self {
        Self {
            region: Selector::new("Region", "Select Region"),
            crop_filter: Selector::new("Crop", "All Crops"),
            focus: 0,
            trend: Panel::new(),
            factors: Panel::new(),
            insights: Panel::new(),
        }
    }
}

/// Crop analysis screen: required crop, optional region filter.
#[derive(Debug)]
pub struct CropAnalysis {
    pub crop: Selector,
    pub region_filter: Selector,
    pub focus: usize,
    pub zones: Panel<ZonesView>,
    pub factors: Panel<FactorImpact>,
    pub insights: Panel<CropInsights>,
}

impl CropAnalysis {
    fn new() -> Self {
        Self {
            crop: Selector::new("Crop", "Select Crop"),
            region_filter: Selector::new("Region", "Select Region"),
            focus: 0,
            zones: Panel::new(),
            factors: Panel::new(),
            insights: Panel::new(),
        }
    }
}

/// Yield prediction form: two selectors plus three numeric fields.
#[derive(Debug)]
pub struct PredictionForm {
    pub region: Selector,
    pub crop: Selector,
    pub rainfall: NumericField,
    pub irrigation: NumericField,
    pub fertilizer: NumericField,
    pub focus: usize,
    pub result: Panel<PredictionView>,
}

impl PredictionForm {
    /// Focus slots 0-1 are the selectors, 2-4 the numeric fields.
    pub const FIELD_COUNT: usize = 5;

    fn new() -> Self {
        Self {
            region: Selector::new("Region", "Select Region"),
            crop: Selector::new("Crop", "Select Crop"),
            rainfall: NumericField::new("Rainfall", "mm"),
            irrigation: NumericField::new("Irrigation", "%"),
            fertilizer: NumericField::new("Fertilizer", "kg/ha"),
            focus: 0,
            result: Panel::new(),
        }
    }

    pub const fn focus_is_numeric(&self) -> bool {
        self.focus >= 2
    }

    pub fn numeric_field_mut(&mut self) -> Option<&mut NumericField> {
        match self.focus {
            2 => Some(&mut self.rainfall),
            3 => Some(&mut self.irrigation),
            4 => Some(&mut self.fertilizer),
            _ => None,
        }
    }
}

/// Improvement strategies screen: both selectors required, one panel.
#[derive(Debug)]
pub struct StrategyFinder {
    pub region: Selector,
    pub crop: Selector,
    pub focus: usize,
    pub strategies: Panel<StrategiesView>,
}

impl StrategyFinder {
    fn new() -> Self {
        Self {
            region: Selector::new("Region", "Select Region"),
            crop: Selector::new("Crop", "Select Crop"),
            focus: 0,
            strategies: Panel::new(),
        }
    }
}

#[derive(Debug)]
pub struct App {
    pub running: bool,
    pub screen: AppScreen,
    pub show_help: bool,
    pub status_message: String,
    /// Blocking validation notice; input is swallowed until dismissed.
    pub modal: Option<String>,
    pub throbber: ThrobberState,
    pub reference: ReferenceData,
    pub region_analysis: RegionAnalysis,
    pub crop_analysis: CropAnalysis,
    pub prediction: PredictionForm,
    pub strategy: StrategyFinder,
    pub actions: AppActions,
}

impl App {
    pub fn new(actions: AppActions) -> Self {
        Self {
            running: true,
            screen: AppScreen::RegionAnalysis,
            show_help: false,
            status_message: String::new(),
            modal: None,
            throbber: ThrobberState::default(),
            reference: ReferenceData::default(),
            region_analysis: RegionAnalysis::new(),
            crop_analysis: CropAnalysis::new(),
            prediction: PredictionForm::new(),
            strategy: StrategyFinder::new(),
            actions,
        }
    }

    pub fn reload_reference_lists(&mut self) {
        self.actions.load_reference_lists();
    }

    /// Advance the loading spinner one frame.
    pub fn update(&mut self) {
        self.throbber.calc_next();
    }

    /// Apply a completed fetch to the state it belongs to.
    pub fn apply_api_event(&mut self, event: ApiEvent) {
        match event {
            ApiEvent::Regions(Ok(regions)) => self.apply_regions(regions),
            ApiEvent::Regions(Err(error)) => {
                eprintln!("Error fetching regions: {error}");
            }
            ApiEvent::Crops(Ok(crops)) => self.apply_crops(crops),
            ApiEvent::Crops(Err(error)) => {
                eprintln!("Error fetching crops: {error}");
            }
            ApiEvent::Panel {
                panel,
                generation,
                outcome,
            } => self.apply_panel(panel, generation, outcome),
        }
    }

    fn apply_regions(&mut self, regions: Vec<String>) {
        self.reference.regions = regions;
        let options = &self.reference.regions;
        self.region_analysis.region.set_options(options.clone());
        self.crop_analysis.region_filter.set_options(options.clone());
        self.prediction.region.set_options(options.clone());
        self.strategy.region.set_options(options.clone());
    }

    fn apply_crops(&mut self, crops: Vec<String>) {
        self.reference.crops = crops;
        let options = &self.reference.crops;
        self.region_analysis.crop_filter.set_options(options.clone());
        self.crop_analysis.crop.set_options(options.clone());
        self.prediction.crop.set_options(options.clone());
        self.strategy.crop.set_options(options.clone());
    }

    fn apply_panel(
        &mut self,
        panel: PanelId,
        generation: u64,
        outcome: Result<PanelPayload, Notice>,
    ) {
        match panel {
            PanelId::RegionTrend => {
                self.region_analysis.trend.apply(
                    generation,
                    payload(outcome, |p| match p {
                        PanelPayload::Trend(view) => Some(view),
                        _ => None,
                    }),
                );
            }
            PanelId::RegionFactors => {
                self.region_analysis.factors.apply(
                    generation,
                    payload(outcome, |p| match p {
                        PanelPayload::Factors(factors) => Some(factors),
                        _ => None,
                    }),
                );
            }
            PanelId::RegionInsights => {
                self.region_analysis.insights.apply(
                    generation,
                    payload(outcome, |p| match p {
                        PanelPayload::RegionInsights(insights) => Some(insights),
                        _ => None,
                    }),
                );
            }
            PanelId::CropZones => {
                self.crop_analysis.zones.apply(
                    generation,
                    payload(outcome, |p| match p {
                        PanelPayload::Zones(view) => Some(view),
                        _ => None,
                    }),
                );
            }
            PanelId::CropFactors => {
                self.crop_analysis.factors.apply(
                    generation,
                    payload(outcome, |p| match p {
                        PanelPayload::Factors(factors) => Some(factors),
                        _ => None,
                    }),
                );
            }
            PanelId::CropInsights => {
                self.crop_analysis.insights.apply(
                    generation,
                    payload(outcome, |p| match p {
                        PanelPayload::CropInsights(insights) => Some(insights),
                        _ => None,
                    }),
                );
            }
            PanelId::Strategies => {
                self.strategy.strategies.apply(
                    generation,
                    payload(outcome, |p| match p {
                        PanelPayload::Strategies(view) => Some(view),
                        _ => None,
                    }),
                );
            }
            PanelId::Prediction => {
                self.prediction.result.apply(
                    generation,
                    payload(outcome, |p| match p {
                        PanelPayload::Prediction(view) => Some(view),
                        _ => None,
                    }),
                );
            }
        }
    }

    /// Region analysis: region required, crop filter optional. Three
    /// panels fetch concurrently; each renders independently.
    pub fn trigger_region_analysis(&mut self) {
        let Some(region) = self.region_analysis.region.selected().map(str::to_string) else {
            self.modal = Some("Please select a region".to_string());
            return;
        };
        let crop = self
            .region_analysis
            .crop_filter
            .selected()
            .map(str::to_string);

        let generation = self.region_analysis.trend.begin();
        self.actions.fetch_yield_trend(
            PanelId::RegionTrend,
            generation,
            region.clone(),
            crop.clone(),
        );

        let generation = self.region_analysis.factors.begin();
        self.actions.fetch_factor_impact(
            PanelId::RegionFactors,
            generation,
            Some(region.clone()),
            crop.clone(),
        );

        let generation = self.region_analysis.insights.begin();
        self.actions.fetch_regional_insights(generation, region, crop);
    }

    /// Crop analysis: crop required, region filter optional.
    pub fn trigger_crop_analysis(&mut self) {
        let Some(crop) = self.crop_analysis.crop.selected().map(str::to_string) else {
            self.modal = Some("Please select a crop".to_string());
            return;
        };
        let region = self
            .crop_analysis
            .region_filter
            .selected()
            .map(str::to_string);

        let generation = self.crop_analysis.zones.begin();
        self.actions.fetch_yield_by_region(generation, crop.clone());

        let generation = self.crop_analysis.factors.begin();
        self.actions.fetch_factor_impact(
            PanelId::CropFactors,
            generation,
            region.clone(),
            Some(crop.clone()),
        );

        let generation = self.crop_analysis.insights.begin();
        self.actions.fetch_crop_insights(generation, crop, region);
    }

    /// Prediction: all five fields required before any request is issued.
    pub fn trigger_prediction(&mut self) {
        let form = &self.prediction;
        let region = form.region.selected();
        let crop = form.crop.selected();
        let rainfall = form.rainfall.value();
        let irrigation = form.irrigation.value();
        let fertilizer = form.fertilizer.value();

        let (Some(region), Some(crop), Some(rainfall), Some(irrigation), Some(fertilizer)) =
            (region, crop, rainfall, irrigation, fertilizer)
        else {
            self.modal = Some("Please fill all fields".to_string());
            return;
        };

        let input = PredictionInput {
            region: region.to_string(),
            crop: crop.to_string(),
            rainfall,
            irrigation,
            fertilizer,
        };
        let echo = PredictionEcho {
            region: region.to_string(),
            crop: crop.to_string(),
            rainfall: form.rainfall.buffer.clone(),
            irrigation: form.irrigation.buffer.clone(),
            fertilizer: form.fertilizer.buffer.clone(),
        };

        let generation = self.prediction.result.begin();
        self.actions.fetch_prediction(generation, input, echo);
    }

    /// Strategies: both selectors required.
    pub fn trigger_strategies(&mut self) {
        let region = self.strategy.region.selected().map(str::to_string);
        let crop = self.strategy.crop.selected().map(str::to_string);

        let (Some(region), Some(crop)) = (region, crop) else {
            self.modal = Some("Please select both region and crop".to_string());
            return;
        };

        let generation = self.strategy.strategies.begin();
        self.actions.fetch_strategies(generation, region, crop);
    }
}

fn payload<T>(
    outcome: Result<PanelPayload, Notice>,
    pick: impl FnOnce(PanelPayload) -> Option<T>,
) -> Result<T, Notice> {
    match outcome {
        Ok(data) => {
            pick(data).ok_or_else(|| Notice::danger("Unexpected response payload".to_string()))
        }
        Err(notice) => Err(notice),
    }
}
