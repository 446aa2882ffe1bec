pub mod backup;
pub mod balance;
pub mod categories;
pub mod coach_events;
pub mod color;
pub mod lessons;
pub mod requests;
pub mod schedule;
pub mod students;
