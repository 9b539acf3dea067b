use crate::api::models::{CropInsights, FactorImpact, RegionalInsights, TrendPoint, ZoneYield};
use crate::app::state::{PredictionView, TrendView, ZonesView};

/// Bars are integer-valued in the terminal, so yields keep two decimals by
/// scaling; the original figure travels alongside for the value text.
const BAR_SCALE: f64 = 100.0;

/// One bar of a horizontal bar chart, pre-scaled for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarRow {
    pub label: String,
    pub value: u64,
    pub text: String,
}

pub fn trend_title(view: &TrendView) -> String {
    let crop = view.crop.as_deref().unwrap_or("All Crops");
    format!("Yield Trend for {crop} in {}", view.region)
}

pub fn zones_title(view: &ZonesView) -> String {
    format!("Yield by Agro-Climatic Zone for {}", view.crop)
}

/// Chart dataset for the yield trend, in year order.
pub fn trend_series(points: &[TrendPoint]) -> Vec<(f64, f64)> {
    points
        .iter()
        .map(|point| (f64::from(point.year), point.yield_tonnes_ha))
        .collect()
}

/// Axis bounds with a little headroom so the line never hugs the frame.
/// The y axis starts at zero; yields are never negative.
pub fn trend_bounds(points: &[TrendPoint]) -> ([f64; 2], [f64; 2]) {
    let mut min_year = f64::MAX;
    let mut max_year = f64::MIN;
    let mut max_yield = 0.0_f64;

    for point in points {
        let year = f64::from(point.year);
        min_year = min_year.min(year);
        max_year = max_year.max(year);
        max_yield = max_yield.max(point.yield_tonnes_ha);
    }

    if points.is_empty() {
        return ([0.0, 1.0], [0.0, 1.0]);
    }

    let x = [min_year - 1.0, max_year + 1.0];
    let y = [0.0, (max_yield * 1.1).max(1.0)];
    (x, y)
}

pub fn year_labels(bounds: [f64; 2]) -> Vec<String> {
    let mid = (bounds[0] + bounds[1]) / 2.0;
    vec![
        format!("{:.0}", bounds[0]),
        format!("{mid:.0}"),
        format!("{:.0}", bounds[1]),
    ]
}

pub fn yield_labels(bounds: [f64; 2]) -> Vec<String> {
    let mid = (bounds[0] + bounds[1]) / 2.0;
    vec![
        format!("{:.1}", bounds[0]),
        format!("{mid:.1}"),
        format!("{:.1}", bounds[1]),
    ]
}

/// Zone bars sorted by yield, highest first.
pub fn zone_bars(zones: &[ZoneYield]) -> Vec<BarRow> {
    let mut sorted: Vec<&ZoneYield> = zones.iter().collect();
    sorted.sort_by(|a, b| {
        b.yield_tonnes_ha
            .partial_cmp(&a.yield_tonnes_ha)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    sorted
        .into_iter()
        .map(|zone| BarRow {
            label: zone.zone.clone(),
            value: to_bar_value(zone.yield_tonnes_ha),
            text: format!("{:.2}", zone.yield_tonnes_ha),
        })
        .collect()
}

/// Factor bars in the map's deterministic key order. Impacts can be
/// negative, so bars show magnitude and the text keeps the sign.
pub fn factor_bars(factors: &FactorImpact) -> Vec<BarRow> {
    factors
        .iter()
        .map(|(factor, impact)| BarRow {
            label: factor.clone(),
            value: to_bar_value(impact.abs()),
            text: format!("{impact:+.3}"),
        })
        .collect()
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_bar_value(value: f64) -> u64 {
    let scaled = (value * BAR_SCALE).round();
    if scaled.is_sign_negative() {
        0
    } else {
        scaled as u64
    }
}

pub fn regional_insight_lines(insights: &RegionalInsights) -> Vec<String> {
    let mut lines = vec![
        format!("Region: {}", insights.region),
        format!("Average yield: {:.2} tonnes/ha", insights.average_yield),
        format!("Yield trend: {}", insights.yield_trend),
    ];
    if !insights.top_crops.is_empty() {
        lines.push(format!("Top crops: {}", insights.top_crops.join(", ")));
    }
    lines.extend(factor_impact_lines(&insights.factor_impact));
    lines
}

pub fn crop_insight_lines(insights: &CropInsights) -> Vec<String> {
    let mut lines = vec![
        format!("Crop: {}", insights.crop),
        format!("Average yield: {:.2} tonnes/ha", insights.average_yield),
        format!("Yield trend: {}", insights.yield_trend),
    ];
    if !insights.top_regions.is_empty() {
        lines.push(format!("Top regions: {}", insights.top_regions.join(", ")));
    }
    lines.extend(factor_impact_lines(&insights.factor_impact));
    lines
}

/// Factor impact entries as indented lines under a heading, two decimals
/// per entry; empty map contributes nothing.
pub fn factor_impact_lines(factors: &FactorImpact) -> Vec<String> {
    if factors.is_empty() {
        return Vec::new();
    }
    let mut lines = vec!["Factor Impact:".to_string()];
    lines.extend(
        factors
            .iter()
            .map(|(factor, impact)| format!("  {factor}: {impact:.2}")),
    );
    lines
}

pub fn prediction_lines(view: &PredictionView) -> Vec<String> {
    vec![
        format!(
            "Predicted yield: {:.2} {}",
            view.prediction.predicted_yield, view.prediction.unit
        ),
        String::new(),
        format!("For {} in {} with:", view.echo.crop, view.echo.region),
        format!("Rainfall: {} mm", view.echo.rainfall),
        format!("Irrigation: {}%", view.echo.irrigation),
        format!("Fertilizer: {} kg/ha", view.echo.fertilizer),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::Prediction;
    use crate::app::state::PredictionEcho;

    fn points() -> Vec<TrendPoint> {
        vec![
            TrendPoint {
                year: 2018,
                yield_tonnes_ha: 2.0,
            },
            TrendPoint {
                year: 2019,
                yield_tonnes_ha: 2.6,
            },
            TrendPoint {
                year: 2020,
                yield_tonnes_ha: 2.3,
            },
        ]
    }

    #[test]
    fn trend_series_keeps_year_order() {
        let series = trend_series(&points());
        assert_eq!(series, vec![(2018.0, 2.0), (2019.0, 2.6), (2020.0, 2.3)]);
    }

    #[test]
    fn trend_bounds_pad_years_and_anchor_yield_at_zero() {
        let (x, y) = trend_bounds(&points());
        assert_eq!(x, [2017.0, 2021.0]);
        assert!((y[0]).abs() < f64::EPSILON);
        assert!(y[1] > 2.6);
    }

    #[test]
    fn zone_bars_sort_highest_yield_first() {
        let zones = vec![
            ZoneYield {
                zone: "Western Himalayas".to_string(),
                yield_tonnes_ha: 1.8,
            },
            ZoneYield {
                zone: "Trans Gangetic Plains".to_string(),
                yield_tonnes_ha: 4.2,
            },
            ZoneYield {
                zone: "Central Plateau".to_string(),
                yield_tonnes_ha: 2.5,
            },
        ];

        let bars = zone_bars(&zones);
        let labels: Vec<&str> = bars.iter().map(|bar| bar.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "Trans Gangetic Plains",
                "Central Plateau",
                "Western Himalayas"
            ]
        );
        assert_eq!(bars[0].value, 420);
        assert_eq!(bars[0].text, "4.20");
    }

    #[test]
    fn factor_bars_keep_sign_in_text_and_magnitude_in_value() {
        let mut factors = FactorImpact::new();
        factors.insert("Rainfall".to_string(), 0.42);
        factors.insert("Pest Pressure".to_string(), -0.15);

        let bars = factor_bars(&factors);
        // BTreeMap order: Pest Pressure, Rainfall
        assert_eq!(bars[0].label, "Pest Pressure");
        assert_eq!(bars[0].value, 15);
        assert_eq!(bars[0].text, "-0.150");
        assert_eq!(bars[1].text, "+0.420");
    }

    #[test]
    fn prediction_lines_echo_the_submitted_inputs() {
        let view = PredictionView {
            prediction: Prediction {
                predicted_yield: 3.14,
                unit: "tonnes/ha".to_string(),
            },
            echo: PredictionEcho {
                region: "Punjab".to_string(),
                crop: "Wheat".to_string(),
                rainfall: "600".to_string(),
                irrigation: "80".to_string(),
                fertilizer: "120".to_string(),
            },
        };

        let lines = prediction_lines(&view);
        assert_eq!(lines[0], "Predicted yield: 3.14 tonnes/ha");
        assert_eq!(lines[2], "For Wheat in Punjab with:");
        assert!(lines.contains(&"Rainfall: 600 mm".to_string()));
        assert!(lines.contains(&"Irrigation: 80%".to_string()));
    }

    #[test]
    fn insight_lines_include_factor_impact_entries_when_present() {
        let mut factor_impact = FactorImpact::new();
        factor_impact.insert("Rainfall".to_string(), 0.426);
        factor_impact.insert("Fertilizer".to_string(), 0.311);

        let regional = RegionalInsights {
            region: "Punjab".to_string(),
            average_yield: 3.4,
            yield_trend: "increasing".to_string(),
            top_crops: vec!["Wheat".to_string()],
            factor_impact: factor_impact.clone(),
        };
        let lines = regional_insight_lines(&regional);
        assert!(lines.contains(&"Factor Impact:".to_string()));
        assert!(lines.contains(&"  Rainfall: 0.43".to_string()));
        assert!(lines.contains(&"  Fertilizer: 0.31".to_string()));

        let crop = CropInsights {
            crop: "Wheat".to_string(),
            average_yield: 3.1,
            yield_trend: "stable".to_string(),
            top_regions: Vec::new(),
            factor_impact,
        };
        let lines = crop_insight_lines(&crop);
        assert!(lines.contains(&"Factor Impact:".to_string()));

        let empty = CropInsights {
            factor_impact: FactorImpact::new(),
            ..crop
        };
        let lines = crop_insight_lines(&empty);
        assert!(!lines.iter().any(|line| line.starts_with("Factor Impact")));
    }

    #[test]
    fn trend_title_names_the_fetched_selection() {
        let view = TrendView {
            region: "Punjab".to_string(),
            crop: Some("Wheat".to_string()),
            points: points(),
        };
        assert_eq!(trend_title(&view), "Yield Trend for Wheat in Punjab");

        let all_crops = TrendView {
            region: "Punjab".to_string(),
            crop: None,
            points: points(),
        };
        assert_eq!(trend_title(&all_crops), "Yield Trend for All Crops in Punjab");
    }
}
