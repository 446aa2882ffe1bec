use crate::cli::parser::EventCmd;
use crate::config::Config;
use crate::core::coach_events::CoachEventLogic;
use crate::errors::AppResult;
use crate::models::CoachEvent;
use crate::store::TableStore;
use crate::ui::messages::{info, success};
use crate::utils::colors::colorize_optional;
use crate::utils::date::{parse_period, require_date};
use crate::utils::table::Table;
use crate::utils::time::parse_optional_time;
use std::collections::BTreeSet;

pub fn handle(cmd: &EventCmd, cfg: &Config) -> AppResult<()> {
    let store = TableStore::open(cfg.layout())?;

    match cmd {
        EventCmd::Add {
            date,
            subject,
            time,
            kind,
            note,
        } => {
            let day = require_date(date)?;
            let time = parse_optional_time(time.as_ref())?;
            let event = CoachEventLogic::add(&store, day, time, subject, *kind, note)?;
            success(format!(
                "Added {} '{}' on {} ({}).",
                event.kind.as_str(),
                event.subject,
                event.date,
                event.time
            ));
        }

        EventCmd::List { period } => {
            let bounds = period.as_deref().map(parse_period).transpose()?;
            let events: Vec<CoachEvent> = store.load();

            let days: BTreeSet<_> = events
                .iter()
                .filter_map(|e| e.date.date())
                .filter(|d| bounds.is_none_or(|(from, to)| *d >= from && *d <= to))
                .collect();

            let mut table = Table::new(["Date", "#", "Time", "Kind", "Subject", "Note"]);
            for day in days {
                for (i, (_, e)) in CoachEventLogic::on_day(day, &events).iter().enumerate() {
                    table.add_row(vec![
                        day.to_string(),
                        (i + 1).to_string(),
                        e.time.clone(),
                        e.kind.as_str().to_string(),
                        e.subject.clone(),
                        colorize_optional(&e.note),
                    ]);
                }
            }

            if table.is_empty() {
                info("No coach events found.");
                return Ok(());
            }
            print!("{}", table.render());
        }

        EventCmd::Del { date, index } => {
            let day = require_date(date)?;
            let removed = CoachEventLogic::delete(&store, day, *index)?;
            success(format!("Deleted '{}' on {}.", removed.subject, removed.date));
        }
    }

    Ok(())
}
