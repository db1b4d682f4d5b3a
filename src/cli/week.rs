use anyhow::Result;
use clap::Args;
use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, ContentArrangement, Table};

use super::GlobalArgs;
use crate::config::Config;
use crate::data::model::Client;
use crate::data::navigator::{self, NavigatorState, WeekView};
use crate::data::week::WeekStart;
use crate::source;
use crate::ui::format;

#[derive(Args)]
pub struct WeekArgs {
    #[arg(
        long,
        default_value_t = 0,
        allow_hyphen_values = true,
        value_parser = clap::value_parser!(i64).range(-5200..=5200),
        help = "Weeks away from the current one (negative for the past)"
    )]
    pub offset: i64,

    #[arg(long, help = "First day of the week: sunday or monday")]
    pub week_start: Option<WeekStart>,

    #[arg(long, help = "Output as JSON")]
    pub json: bool,
}

pub fn run(args: WeekArgs, global: &GlobalArgs) -> Result<()> {
    let config = Config::load()?;
    let clock = global.clock()?;
    let source = global.source(&config)?;
    let schedule = source::load_schedule(source.as_ref())?;

    let week_start = args.week_start.unwrap_or(config.display.week_starts_on);
    let view = navigator::view(
        &schedule.index,
        NavigatorState::at_offset(args.offset),
        clock.now(),
        week_start,
    );

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&week_json(&schedule.client, &view))?
        );
    } else {
        print!("{}", week_text(&schedule.client, &view));
    }

    Ok(())
}

fn week_json(client: &Client, view: &WeekView<'_>) -> serde_json::Value {
    let window = view.window();
    let days: Vec<serde_json::Value> = view
        .week
        .days
        .iter()
        .map(|day| {
            serde_json::json!({
                "date": day.date.format("%Y-%m-%d").to_string(),
                "meals": day.meals,
            })
        })
        .collect();

    serde_json::json!({
        "client": client.name,
        "week_offset": view.week_offset,
        "week_start": window.start.format("%Y-%m-%d").to_string(),
        "week_end": window.last_day().format("%Y-%m-%d").to_string(),
        "days": days,
        "can_go_prev": view.nav.can_go_prev,
        "can_go_next": view.nav.can_go_next,
    })
}

fn week_text(client: &Client, view: &WeekView<'_>) -> String {
    let mut out = String::new();
    out.push_str(&client.name);
    out.push('\n');
    out.push_str(&format!(
        "{}  ({})\n\n",
        format::week_range(&view.window()),
        format::offset_label(view.week_offset)
    ));

    if view.week.is_empty() {
        out.push_str(format::EMPTY_WEEK);
        out.push('\n');
    } else {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec!["Day", "Date", "Time", "Restaurant", "Cuisine"]);

        for day in &view.week.days {
            let (weekday, full_date) = format::day_label(day.date);
            for meal in &day.meals {
                table.add_row(vec![
                    Cell::new(&weekday),
                    Cell::new(&full_date),
                    Cell::new(format::meal_time(meal).trim()).set_alignment(CellAlignment::Right),
                    Cell::new(&meal.restaurant_name),
                    Cell::new(&meal.cuisine),
                ]);
            }
        }
        out.push_str(&table.to_string());
        out.push('\n');
    }

    out.push('\n');
    out.push_str(&format!(
        "Meals this week: {}\n",
        view.week.meal_count()
    ));
    out.push_str(&format!(
        "Earlier weeks: {}   Later weeks: {}\n",
        yes_no(view.nav.can_go_prev),
        yes_no(view.nav.can_go_next)
    ));
    out
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}
