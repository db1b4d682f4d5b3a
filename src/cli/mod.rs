mod browse;
mod init;
mod week;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use crate::clock::{self, Clock, FixedClock, SystemClock};
use crate::config::{self, Config};
use crate::source::{FixtureFile, MealSource, ZestyApi};

#[derive(Parser)]
#[command(
    name = "zesty",
    about = "Browse your scheduled Zesty meals week by week"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub global: GlobalArgs,
}

#[derive(Args)]
pub struct GlobalArgs {
    #[arg(long, global = true, help = "Zesty client id (overrides ZESTY_ID)")]
    pub client_id: Option<String>,

    #[arg(
        long,
        global = true,
        help = "Read meals from a JSON file instead of the Zesty API"
    )]
    pub meals_file: Option<String>,

    #[arg(
        long,
        global = true,
        help = "Pretend today is this date (YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS)"
    )]
    pub today: Option<String>,

    #[arg(long, short, global = true, help = "Log debug output to stderr")]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Page through weeks interactively (default)
    Browse(browse::BrowseArgs),
    /// Print a single week
    Week(week::WeekArgs),
    /// Write a config file
    Init(init::InitArgs),
}

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Command::Browse(args)) => browse::run(args, &cli.global),
        Some(Command::Week(args)) => week::run(args, &cli.global),
        Some(Command::Init(args)) => init::run(args),
        None => browse::run(browse::BrowseArgs::default(), &cli.global),
    }
}

impl GlobalArgs {
    pub fn clock(&self) -> Result<Box<dyn Clock>> {
        match &self.today {
            Some(s) => Ok(Box::new(FixedClock(clock::parse_today(s)?))),
            None => Ok(Box::new(SystemClock)),
        }
    }

    /// The fixture file when one is given, the Zesty API otherwise. Only the
    /// API needs a client id.
    pub fn source(&self, config: &Config) -> Result<Box<dyn MealSource>> {
        if let Some(path) = &self.meals_file {
            let path = config::expand_tilde(path);
            tracing::debug!(%path, "reading meals from file");
            return Ok(Box::new(FixtureFile::open(path)?));
        }

        let client_id = match &self.client_id {
            Some(id) => id.as_str(),
            None => config.client_id()?,
        };
        let api = ZestyApi::new(&config.api.endpoint, client_id, config.timeout())?;
        Ok(Box::new(api))
    }
}
