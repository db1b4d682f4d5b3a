use anyhow::{bail, Result};
use clap::Args;

use crate::config::{ApiConfig, ClientConfig, Config, DisplayConfig};
use crate::data::week::WeekStart;
use crate::ui;

#[derive(Args)]
pub struct InitArgs {
    #[arg(long, help = "Zesty client id to store")]
    pub client_id: Option<String>,

    #[arg(long, help = "API endpoint to store")]
    pub endpoint: Option<String>,

    #[arg(long, help = "First day of the week: sunday or monday")]
    pub week_start: Option<WeekStart>,

    #[arg(long, help = "Run without interactive prompts")]
    pub non_interactive: bool,
}

pub fn run(args: InitArgs) -> Result<()> {
    let config_path = Config::config_path();
    if config_path.exists() {
        bail!(
            "Already initialized. Config exists at {}",
            config_path.display()
        );
    }

    let client_id = if args.non_interactive {
        args.client_id
            .ok_or_else(|| anyhow::anyhow!("--client-id is required in non-interactive mode"))?
    } else {
        match args.client_id {
            Some(id) => id,
            None => ui::input_text("Zesty client id")?
                .ok_or_else(|| anyhow::anyhow!("Cancelled"))?,
        }
    };
    if client_id.trim().is_empty() {
        bail!("Client id must not be empty");
    }

    let mut api = ApiConfig::default();
    if let Some(endpoint) = args.endpoint {
        api.endpoint = endpoint;
    }

    let config = Config {
        client: ClientConfig {
            id: Some(client_id.trim().to_string()),
        },
        api,
        display: DisplayConfig {
            week_starts_on: args.week_start.unwrap_or_default(),
        },
    };

    config.save(&config_path)?;
    println!("Config saved to {}", config_path.display());
    Ok(())
}
