use crate::calendar::agenda::{describe_span, source_label, within};
use crate::calendar::projector::project;
use crate::calendar::{CalendarEntry, EntrySource};
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::TableStore;
use crate::ui::messages::{header, info, success};
use crate::utils::colors::paint_hex;
use crate::utils::date::{month_bounds, parse_period, today};
use crate::utils::path::expand_tilde;
use std::fs;

pub fn handle(period: Option<&str>, json: bool, file: Option<&str>, cfg: &Config) -> AppResult<()> {
    let store = TableStore::open(cfg.layout())?;
    let tables = store.load_all();
    let entries = project(&tables.lessons, &tables.coach_events, &cfg.holidays);

    if json {
        // The widget gets every entry unless a period was asked for.
        let selected: Vec<&CalendarEntry> = match period {
            Some(p) => {
                let (from, to) = parse_period(p)?;
                within(&entries, from, to)
            }
            None => entries.iter().collect(),
        };
        let out = serde_json::to_string_pretty(&selected)?;

        match file {
            Some(f) => {
                let dest = expand_tilde(f);
                if let Some(parent) = dest.parent() {
                    fs::create_dir_all(parent)?;
                }
                fs::write(&dest, out)?;
                success(format!(
                    "{} calendar entries written to {}",
                    selected.len(),
                    dest.display()
                ));
            }
            None => println!("{out}"),
        }
        return Ok(());
    }

    let (from, to) = match period {
        Some(p) => parse_period(p)?,
        None => month_bounds(today()),
    };
    let selected = within(&entries, from, to);

    header(format!("Calendar {from} → {to}"));
    if selected.is_empty() {
        info("Nothing scheduled in this period.");
        return Ok(());
    }

    let mut current = None;
    for e in selected {
        let day = e.span.start_date();
        if current != Some(day) {
            println!("\n{} ({})", day, day.format("%a"));
            current = Some(day);
        }
        let marker = match e.source {
            EntrySource::Lesson => e.colors.border,
            _ => e.colors.background,
        };
        println!(
            "  {:<24} {} [{}]",
            describe_span(&e.span),
            paint_hex(&e.title, marker),
            source_label(e.source)
        );
    }

    Ok(())
}
