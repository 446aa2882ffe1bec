use crate::config::Config;
use crate::core::schedule::{monthly_report, report_columns};
use crate::errors::AppResult;
use crate::models::Lesson;
use crate::store::TableStore;
use crate::ui::messages::{header, info};
use crate::utils::table::Table;

/// Lessons per month and category.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let store = TableStore::open(cfg.layout())?;
    let lessons: Vec<Lesson> = store.load();
    let report = monthly_report(&lessons);

    if report.is_empty() {
        info("No dated lessons to report.");
        return Ok(());
    }

    let columns = report_columns(&report);
    let mut table = Table::new(
        std::iter::once("Month".to_string())
            .chain(columns.iter().cloned())
            .chain(std::iter::once("Total".to_string())),
    );

    for (month, per_category) in &report {
        let mut row = vec![month.clone()];
        row.extend(
            columns
                .iter()
                .map(|c| per_category.get(c).copied().unwrap_or(0).to_string()),
        );
        row.push(per_category.values().sum::<usize>().to_string());
        table.add_row(row);
    }

    header("Monthly lesson report");
    print!("{}", table.render());
    Ok(())
}
