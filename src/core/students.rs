use crate::errors::{AppError, AppResult};
use crate::models::Student;
use crate::models::student::find_student;
use crate::store::TableStore;

#[derive(Debug, Clone, Default)]
pub struct StudentPatch {
    pub name: Option<String>,
    pub purchased: Option<i64>,
    pub bound_category: Option<String>,
    pub note: Option<String>,
}

pub struct StudentLogic;

impl StudentLogic {
    /// Append a student. Returns `true` when the name was already taken;
    /// duplicates are stored anyway and lookups keep using the first one.
    pub fn add(store: &TableStore, mut student: Student) -> AppResult<bool> {
        student.name = student.name.trim().to_string();
        if student.name.is_empty() {
            return Err(AppError::InvalidInput("Student name cannot be empty.".into()));
        }

        let mut students: Vec<Student> = store.load();
        let duplicate = find_student(&students, &student.name).is_some();
        students.push(student);
        store.save(&students)?;

        Ok(duplicate)
    }

    /// Update the first student called `name`.
    pub fn update(store: &TableStore, name: &str, patch: StudentPatch) -> AppResult<Student> {
        let mut students: Vec<Student> = store.load();
        let student = students
            .iter_mut()
            .find(|s| s.name == name)
            .ok_or_else(|| AppError::UnknownStudent(name.to_string()))?;

        if let Some(n) = patch.name {
            let n = n.trim();
            if n.is_empty() {
                return Err(AppError::InvalidInput("Student name cannot be empty.".into()));
            }
            student.name = n.to_string();
        }
        if let Some(p) = patch.purchased {
            student.purchased = p;
        }
        if let Some(c) = patch.bound_category {
            student.bound_category = c;
        }
        if let Some(n) = patch.note {
            student.note = n;
        }
        let updated = student.clone();

        store.save(&students)?;
        Ok(updated)
    }

    /// Remove the first student called `name`. Their lessons are kept.
    pub fn delete(store: &TableStore, name: &str) -> AppResult<Student> {
        let mut students: Vec<Student> = store.load();
        let pos = students
            .iter()
            .position(|s| s.name == name)
            .ok_or_else(|| AppError::UnknownStudent(name.to_string()))?;

        let removed = students.remove(pos);
        store.save(&students)?;
        Ok(removed)
    }
}
