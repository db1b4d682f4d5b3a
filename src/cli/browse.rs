use anyhow::Result;
use clap::Args;

use super::GlobalArgs;
use crate::config::Config;
use crate::data::navigator::{NavigatorState, WeekNavigator};
use crate::data::week::WeekStart;
use crate::source;
use crate::ui;

#[derive(Args, Default)]
#[command(after_help = "\
Keys:
  ←/h         Previous week
  →/l         Next week
  t           Back to this week
  q/Esc       Quit
  Ctrl+C      Quit")]
pub struct BrowseArgs {
    #[arg(
        long,
        allow_hyphen_values = true,
        value_parser = clap::value_parser!(i64).range(-5200..=5200),
        help = "Start this many weeks away from the current one"
    )]
    pub offset: Option<i64>,

    #[arg(long, help = "First day of the week: sunday or monday")]
    pub week_start: Option<WeekStart>,
}

pub fn run(args: BrowseArgs, global: &GlobalArgs) -> Result<()> {
    let config = Config::load()?;
    let clock = global.clock()?;
    let source = global.source(&config)?;

    println!("Loading meals...");
    let schedule = source::load_schedule(source.as_ref())?;
    if schedule.index.is_empty() {
        tracing::warn!(client = %schedule.client.name, "no meals scheduled");
    }

    let week_start = args.week_start.unwrap_or(config.display.week_starts_on);
    let state = NavigatorState::at_offset(args.offset.unwrap_or(0));
    let mut navigator = WeekNavigator::new(schedule.index, week_start, state);

    ui::browse(&schedule.client, &mut navigator, clock.as_ref())
}
