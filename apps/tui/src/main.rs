use std::sync::Arc;

use clap::Parser;
use color_eyre::Result;

use agro_dash::api::ApiClient;
use agro_dash::app::{App, AppActions};
use agro_dash::cli::CliArgs;
use agro_dash::config::init_app_config;
use agro_dash::{event, terminal};

#[tokio::main]
async fn main() -> Result<()> {
    // Setup error handling
    color_eyre::install()?;

    let args = CliArgs::parse();
    args.apply_env_overrides();

    let config = init_app_config();
    let client = Arc::new(ApiClient::new(config.api_base_url, config.request_timeout));
    if config.debug {
        eprintln!("API base URL: {}", client.base_url());
    }

    // Without a terminal there is nothing interactive to run.
    if args.headless || !is_terminal() {
        return event::run_headless(client, args.region, args.crop, args.json).await;
    }

    let (actions, mut rx) = AppActions::new(client);
    let mut app = App::new(actions);
    app.reload_reference_lists();

    let mut terminal = terminal::setup()?;

    let result = event::run(&mut terminal, &mut app, &mut rx).await;

    terminal::cleanup(true, true);

    result
}

// Check if we're running in a terminal
fn is_terminal() -> bool {
    atty::is(atty::Stream::Stdout)
}
