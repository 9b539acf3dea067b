use std::collections::BTreeMap;
use std::io::Stdout;
use std::sync::Arc;
use std::time::Duration;

use color_eyre::eyre::eyre;
use color_eyre::Result;
use crossterm::event::{self, Event};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::api::models::{CropInsights, RegionalInsights, Strategy};
use crate::api::ApiClient;
use crate::app::{handle_input, ApiEvent, App};
use crate::ui;

/// Run the main application event loop.
pub async fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    rx: &mut UnboundedReceiver<ApiEvent>,
) -> Result<()> {
    // Event poll timeout (ms)
    const EVENT_POLL_TIMEOUT: u64 = 50;

    loop {
        // Update animations
        app.update();

        // Apply whatever fetches completed since the last frame
        while let Ok(api_event) = rx.try_recv() {
            app.apply_api_event(api_event);
        }

        if let Err(e) = terminal.draw(|f| ui::ui(app, f)) {
            return Err(eyre!("Terminal draw error: {e}"));
        }

        if matches!(
            event::poll(Duration::from_millis(EVENT_POLL_TIMEOUT)),
            Ok(true)
        ) {
            match event::read() {
                Ok(Event::Key(key)) => {
                    handle_input(app, key.code);
                    if !app.running {
                        break;
                    }
                }
                Ok(Event::Resize(_, _)) => {
                    // Force a redraw after resize
                    if terminal.draw(|f| ui::ui(app, f)).is_err() {
                        // Non-fatal redraw error
                    }
                }
                Ok(Event::Mouse(_) | Event::FocusGained | Event::FocusLost | Event::Paste(_))
                | Err(_) => {
                    // Ignore non-key events
                }
            }
        }
    }
    Ok(())
}

/// Run without a UI: fetch everything the given selection allows and print
/// a report to stdout.
pub async fn run_headless(
    client: Arc<ApiClient>,
    region: Option<String>,
    crop: Option<String>,
    json: bool,
) -> Result<()> {
    let report = tokio::task::spawn_blocking(move || {
        build_headless_report(&client, region.as_deref(), crop.as_deref())
    })
    .await??;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        render_headless_text(&report);
    }

    Ok(())
}

fn build_headless_report(
    client: &ApiClient,
    region: Option<&str>,
    crop: Option<&str>,
) -> Result<HeadlessReport> {
    let regions = client.regions()?;
    let crops = client.crops()?;

    let trend = match region {
        Some(region) => Some(
            client
                .yield_trend(region, crop)?
                .into_iter()
                .map(|point| (point.year, point.yield_tonnes_ha))
                .collect(),
        ),
        None => None,
    };

    let zones = match crop {
        Some(crop) => Some(
            client
                .yield_by_region(crop)?
                .into_iter()
                .map(|zone| (zone.zone, zone.yield_tonnes_ha))
                .collect(),
        ),
        None => None,
    };

    let factor_impact = if region.is_some() || crop.is_some() {
        Some(client.factor_impact(region, crop)?)
    } else {
        None
    };

    let regional_insights = match region {
        Some(region) => Some(client.regional_insights(region, crop)?),
        None => None,
    };

    let crop_insights = match crop {
        Some(crop) => Some(client.crop_insights(crop, region)?),
        None => None,
    };

    let strategies = match (region, crop) {
        (Some(region), Some(crop)) => Some(client.improvement_strategies(region, crop)?),
        _ => None,
    };

    Ok(HeadlessReport {
        region: region.map(str::to_string),
        crop: crop.map(str::to_string),
        regions,
        crops,
        trend,
        zones,
        factor_impact,
        regional_insights,
        crop_insights,
        strategies,
    })
}

fn render_headless_text(report: &HeadlessReport) {
    println!("\nAgro Dash Report");
    println!("================");
    println!("Regions known: {}", report.regions.len());
    println!("Crops known: {}", report.crops.len());

    if let Some(trend) = &report.trend {
        let region = report.region.as_deref().unwrap_or_default();
        println!("\nYield Trend ({region}):");
        for (year, yield_tonnes_ha) in trend {
            println!("- {year}: {yield_tonnes_ha:.2} t/ha");
        }
    }

    if let Some(zones) = &report.zones {
        let crop = report.crop.as_deref().unwrap_or_default();
        println!("\nYield by Agro-Climatic Zone ({crop}):");
        for (zone, yield_tonnes_ha) in zones {
            println!("- {zone}: {yield_tonnes_ha:.2} t/ha");
        }
    }

    if let Some(factors) = &report.factor_impact {
        println!("\nFactor Impact on Yield:");
        for (factor, impact) in factors {
            println!("- {factor}: {impact:.3}");
        }
    }

    if let Some(insights) = &report.regional_insights {
        println!("\nRegional Insights:");
        println!("- Average yield: {:.2} tonnes/ha", insights.average_yield);
        println!("- Yield trend: {}", insights.yield_trend);
        if !insights.top_crops.is_empty() {
            println!("- Top crops: {}", insights.top_crops.join(", "));
        }
        print_factor_impact(&insights.factor_impact);
    }

    if let Some(insights) = &report.crop_insights {
        println!("\nCrop Insights:");
        println!("- Average yield: {:.2} tonnes/ha", insights.average_yield);
        println!("- Yield trend: {}", insights.yield_trend);
        if !insights.top_regions.is_empty() {
            println!("- Top regions: {}", insights.top_regions.join(", "));
        }
        print_factor_impact(&insights.factor_impact);
    }

    if let Some(strategies) = &report.strategies {
        println!("\nImprovement Strategies:");
        for strategy in strategies {
            println!(
                "- {} [{}] current {}: {}",
                strategy.factor, strategy.impact, strategy.current_value, strategy.recommendation
            );
        }
    }
}

fn print_factor_impact(factors: &BTreeMap<String, f64>) {
    if factors.is_empty() {
        return;
    }
    println!("- Factor impact:");
    for (factor, impact) in factors {
        println!("  - {factor}: {impact:.2}");
    }
}

#[derive(serde::Serialize)]
struct HeadlessReport {
    region: Option<String>,
    crop: Option<String>,
    regions: Vec<String>,
    crops: Vec<String>,
    trend: Option<Vec<(i32, f64)>>,
    zones: Option<Vec<(String, f64)>>,
    factor_impact: Option<BTreeMap<String, f64>>,
    regional_insights: Option<RegionalInsights>,
    crop_insights: Option<CropInsights>,
    strategies: Option<Vec<Strategy>>,
}
