use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "agro-dash", version, about = "Agricultural yield dashboard")]
pub struct CliArgs {
    /// Print an insights report and exit
    #[arg(long)]
    pub headless: bool,

    /// Print the headless report as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Override the analytics API base URL
    #[arg(long = "api-url", value_name = "URL")]
    pub api_url: Option<String>,

    /// Region for the headless report
    #[arg(long, value_name = "NAME")]
    pub region: Option<String>,

    /// Crop for the headless report
    #[arg(long, value_name = "NAME")]
    pub crop: Option<String>,
}

impl CliArgs {
    pub fn apply_env_overrides(&self) {
        if let Some(url) = &self.api_url {
            std::env::set_var("API_BASE_URL", url);
        }
        if self.debug {
            std::env::set_var("DEBUG", "1");
        }
    }
}
