use crate::core::categories::{self, PLACEHOLDER};
use crate::core::schedule::{lessons_on, position_on};
use crate::errors::{AppError, AppResult};
use crate::models::student::find_student;
use crate::models::{Category, Lesson, Student};
use crate::store::TableStore;
use chrono::NaiveDate;

/// Input of `lesson add`. `time` is already normalised to `HH:MM`.
#[derive(Debug, Clone)]
pub struct NewLesson {
    pub date: NaiveDate,
    pub time: String,
    pub student: String,
    pub category: Option<String>,
    pub note: String,
}

/// Fields to change on an existing lesson; `None` keeps the current value.
#[derive(Debug, Clone, Default)]
pub struct LessonPatch {
    pub date: Option<NaiveDate>,
    pub time: Option<String>,
    pub student: Option<String>,
    pub category: Option<String>,
    pub note: Option<String>,
}

/// High-level business logic for the `lesson` commands.
pub struct LessonLogic;

impl LessonLogic {
    pub fn add(store: &TableStore, input: NewLesson) -> AppResult<Lesson> {
        let student_name = input.student.trim();
        if student_name.is_empty() {
            return Err(AppError::InvalidInput(
                "Select a student before booking.".into(),
            ));
        }

        let mut lessons: Vec<Lesson> = store.load();
        let students: Vec<Student> = store.load();
        let cats: Vec<Category> = store.load();

        let student = find_student(&students, student_name)
            .ok_or_else(|| AppError::UnknownStudent(student_name.to_string()))?;

        let vocabulary = categories::resolve(&cats, &lessons, &students);
        let category = match &input.category {
            Some(c) => c.clone(),
            None => categories::default_for(Some(student), &vocabulary)
                .ok_or_else(|| {
                    AppError::InvalidInput(format!(
                        "No category configured {PLACEHOLDER}: add one with `category add`."
                    ))
                })?
                .to_string(),
        };
        ensure_bookable(&category, &vocabulary)?;

        let lesson = Lesson::new(input.date, input.time, student.name.clone(), category)
            .with_note(input.note);
        lessons.push(lesson.clone());
        store.save(&lessons)?;

        Ok(lesson)
    }

    /// Edit the `index`-th (1-based) lesson of `date` in the day view.
    pub fn edit(
        store: &TableStore,
        date: NaiveDate,
        index: usize,
        patch: LessonPatch,
    ) -> AppResult<Lesson> {
        let mut lessons: Vec<Lesson> = store.load();
        let pos = position_on(date, index, &lessons).ok_or_else(|| AppError::RowNotFound {
            date: date.to_string(),
            index,
        })?;

        if let Some(c) = &patch.category {
            let students: Vec<Student> = store.load();
            let cats: Vec<Category> = store.load();
            let vocabulary = categories::resolve(&cats, &lessons, &students);
            ensure_bookable(c, &vocabulary)?;
        }
        if let Some(s) = &patch.student
            && s.trim().is_empty()
        {
            return Err(AppError::InvalidInput("Student name cannot be empty.".into()));
        }

        let lesson = &mut lessons[pos];
        if let Some(d) = patch.date {
            lesson.date = d.into();
        }
        if let Some(t) = patch.time {
            lesson.time = t;
        }
        if let Some(s) = patch.student {
            lesson.student = s.trim().to_string();
        }
        if let Some(c) = patch.category {
            lesson.category = c;
        }
        if let Some(n) = patch.note {
            lesson.note = n;
        }
        let updated = lesson.clone();

        store.save(&lessons)?;
        Ok(updated)
    }

    /// Delete one lesson of `date` (by day-view index) or all of them.
    /// Returns the removed rows.
    pub fn delete(
        store: &TableStore,
        date: NaiveDate,
        index: Option<usize>,
    ) -> AppResult<Vec<Lesson>> {
        let lessons: Vec<Lesson> = store.load();

        let doomed: Vec<usize> = match index {
            Some(i) => vec![position_on(date, i, &lessons).ok_or_else(|| {
                AppError::RowNotFound {
                    date: date.to_string(),
                    index: i,
                }
            })?],
            None => lessons_on(date, &lessons)
                .iter()
                .map(|e| e.position)
                .collect(),
        };

        if doomed.is_empty() {
            return Ok(Vec::new());
        }

        let (removed, kept): (Vec<_>, Vec<_>) = lessons
            .into_iter()
            .enumerate()
            .partition(|(i, _)| doomed.contains(i));

        let kept: Vec<Lesson> = kept.into_iter().map(|(_, l)| l).collect();
        store.save(&kept)?;

        Ok(removed.into_iter().map(|(_, l)| l).collect())
    }
}

fn ensure_bookable(category: &str, vocabulary: &[String]) -> AppResult<()> {
    if categories::is_bookable(category, vocabulary) {
        Ok(())
    } else {
        Err(AppError::InvalidInput(format!(
            "Unknown category '{category}'. Available: {}",
            vocabulary.join(", ")
        )))
    }
}
