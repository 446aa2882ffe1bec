use crate::cli::parser::LessonCmd;
use crate::config::Config;
use crate::core::color::color_for;
use crate::core::lessons::{LessonLogic, LessonPatch, NewLesson};
use crate::errors::AppResult;
use crate::models::Lesson;
use crate::store::TableStore;
use crate::ui::messages::{confirm, info, success};
use crate::utils::colors::{colorize_optional, paint_hex};
use crate::utils::date::{parse_period, require_date};
use crate::utils::table::Table;
use crate::utils::time::{normalize_time, parse_optional_time};

pub fn handle(cmd: &LessonCmd, cfg: &Config) -> AppResult<()> {
    let store = TableStore::open(cfg.layout())?;

    match cmd {
        LessonCmd::Add {
            date,
            time,
            student,
            category,
            note,
        } => {
            let input = NewLesson {
                date: require_date(date)?,
                time: normalize_time(time)?,
                student: student.clone(),
                category: category.clone(),
                note: note.clone(),
            };
            let lesson = LessonLogic::add(&store, input)?;
            success(format!(
                "Booked {} on {} at {} ({}).",
                lesson.student, lesson.date, lesson.time, lesson.category
            ));
        }

        LessonCmd::List { period, student } => {
            let bounds = period.as_deref().map(parse_period).transpose()?;
            let lessons: Vec<Lesson> = store.load();

            let mut rows: Vec<&Lesson> = lessons
                .iter()
                .filter(|l| student.as_ref().is_none_or(|s| &l.student == s))
                .filter(|l| match bounds {
                    Some((from, to)) => l.date.date().is_some_and(|d| d >= from && d <= to),
                    None => true,
                })
                .collect();
            rows.sort_by(|a, b| {
                (a.date.date(), &a.time).cmp(&(b.date.date(), &b.time))
            });

            if rows.is_empty() {
                info("No lessons found.");
                return Ok(());
            }

            let mut table = Table::new(["Date", "Time", "Student", "Category", "Note"]);
            for l in &rows {
                table.add_row(vec![
                    l.date.to_string(),
                    l.time.clone(),
                    l.student.clone(),
                    paint_hex(&l.category, color_for(&l.category)),
                    colorize_optional(&l.note),
                ]);
            }
            print!("{}", table.render());
            println!("{} lesson(s)", rows.len());
        }

        LessonCmd::Edit {
            date,
            index,
            new_date,
            time,
            student,
            category,
            note,
        } => {
            let day = require_date(date)?;
            let patch = LessonPatch {
                date: new_date.as_deref().map(require_date).transpose()?,
                time: parse_optional_time(time.as_ref())?,
                student: student.clone(),
                category: category.clone(),
                note: note.clone(),
            };
            let lesson = LessonLogic::edit(&store, day, *index, patch)?;
            success(format!(
                "✏️ Lesson updated: {} on {} at {} ({}).",
                lesson.student, lesson.date, lesson.time, lesson.category
            ));
        }

        LessonCmd::Del { date, index, yes } => {
            let day = require_date(date)?;
            let prompt = match index {
                Some(i) => format!("Delete lesson #{i} of {day}? This action is irreversible."),
                None => format!("Delete ALL lessons of {day}? This action is irreversible."),
            };
            if !confirm(&prompt, *yes) {
                info("Operation cancelled.");
                return Ok(());
            }

            let removed = LessonLogic::delete(&store, day, *index)?;
            if removed.is_empty() {
                info(format!("No lessons on {day}."));
            } else {
                for l in &removed {
                    success(format!("Deleted {} at {} on {}.", l.student, l.time, l.date));
                }
            }
        }
    }

    Ok(())
}
