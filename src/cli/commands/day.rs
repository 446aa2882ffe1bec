use crate::config::Config;
use crate::core::color::color_for;
use crate::core::schedule::{free_slots, lessons_on};
use crate::errors::AppResult;
use crate::models::Lesson;
use crate::store::TableStore;
use crate::ui::messages::{header, info};
use crate::utils::colors::{colorize_optional, paint_hex};
use crate::utils::date::{require_date, today};
use crate::utils::table::Table;

/// Student-facing day view: booked lessons plus the hourly slots still free.
pub fn handle(date: Option<&str>, cfg: &Config) -> AppResult<()> {
    let day = match date {
        Some(d) => require_date(d)?,
        None => today(),
    };

    let store = TableStore::open(cfg.layout())?;
    let lessons: Vec<Lesson> = store.load();
    let entries = lessons_on(day, &lessons);

    header(format!("Lessons on {} ({})", day, day.format("%A")));

    if entries.is_empty() {
        info("No lessons booked for this day.");
    } else {
        let mut table = Table::new(["#", "Time", "Student", "Category", "Note"]);
        for (i, e) in entries.iter().enumerate() {
            table.add_row(vec![
                (i + 1).to_string(),
                e.lesson.time.clone(),
                e.lesson.student.clone(),
                paint_hex(&e.lesson.category, color_for(&e.lesson.category)),
                colorize_optional(&e.lesson.note),
            ]);
        }
        print!("{}", table.render());
    }

    let free = free_slots(day, &lessons);
    if free.is_empty() {
        info("No free hourly slots left.");
    } else {
        println!("\nFree slots: {}", free.join(" "));
    }

    Ok(())
}
