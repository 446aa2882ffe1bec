use crate::cli::parser::StudentCmd;
use crate::config::Config;
use crate::core::balance::balance;
use crate::core::color::color_for;
use crate::core::students::{StudentLogic, StudentPatch};
use crate::errors::{AppError, AppResult};
use crate::models::student::find_student;
use crate::models::{Lesson, Student};
use crate::store::TableStore;
use crate::ui::messages::{confirm, info, success, warning};
use crate::utils::colors::{RESET, color_for_balance, colorize_optional, paint_hex};
use crate::utils::table::Table;

pub fn handle(cmd: &StudentCmd, cfg: &Config) -> AppResult<()> {
    let store = TableStore::open(cfg.layout())?;

    match cmd {
        StudentCmd::Add {
            name,
            purchased,
            category,
            note,
        } => {
            let student = Student {
                name: name.trim().to_string(),
                purchased: i64::from(*purchased),
                bound_category: category.clone(),
                note: note.clone(),
            };
            let duplicate = StudentLogic::add(&store, student)?;
            if duplicate {
                warning(format!(
                    "A student named '{}' already exists; lookups will keep using the first one.",
                    name.trim()
                ));
            }
            success(format!("Added student {} ({} credits).", name.trim(), purchased));
        }

        StudentCmd::List => {
            let students: Vec<Student> = store.load();
            let lessons: Vec<Lesson> = store.load();

            if students.is_empty() {
                info("No students yet. Add one with `student add`.");
                return Ok(());
            }

            let mut table = Table::new([
                "Name",
                "Purchased",
                "Used",
                "Remaining",
                "Category",
                "Note",
            ]);
            for s in &students {
                let b = balance(&s.name, &students, &lessons);
                table.add_row(vec![
                    s.name.clone(),
                    b.purchased.to_string(),
                    b.used.to_string(),
                    format!("{}{}{}", color_for_balance(b.remaining), b.remaining, RESET),
                    paint_hex(&s.bound_category, color_for(&s.bound_category)),
                    colorize_optional(&s.note),
                ]);
            }
            print!("{}", table.render());
        }

        StudentCmd::Update {
            name,
            new_name,
            purchased,
            category,
            note,
        } => {
            let patch = StudentPatch {
                name: new_name.clone(),
                purchased: purchased.map(i64::from),
                bound_category: category.clone(),
                note: note.clone(),
            };
            let s = StudentLogic::update(&store, name, patch)?;
            success(format!(
                "Updated {}: {} credits, category '{}'.",
                s.name, s.purchased, s.bound_category
            ));
        }

        StudentCmd::Del { name, yes } => {
            if !confirm(
                &format!("Remove student '{name}'? Their lessons stay booked."),
                *yes,
            ) {
                info("Operation cancelled.");
                return Ok(());
            }
            let removed = StudentLogic::delete(&store, name)?;
            success(format!("Removed student {}.", removed.name));
        }
    }

    Ok(())
}

/// Student-facing balance lookup.
pub fn handle_balance(name: &str, cfg: &Config) -> AppResult<()> {
    let store = TableStore::open(cfg.layout())?;
    let students: Vec<Student> = store.load();
    let lessons: Vec<Lesson> = store.load();

    if find_student(&students, name).is_none() {
        return Err(AppError::UnknownStudent(name.to_string()));
    }

    let b = balance(name, &students, &lessons);
    println!(
        "{}: purchased {} | used {} | remaining {}{}{}",
        name,
        b.purchased,
        b.used,
        color_for_balance(b.remaining),
        b.remaining,
        RESET
    );
    if b.remaining < 0 {
        warning(format!(
            "{} lesson(s) booked beyond the purchased credits.",
            -b.remaining
        ));
    }

    Ok(())
}
