pub mod category;
pub mod coach_event;
pub mod lesson;
pub mod request;
pub mod row_date;
pub mod student;

pub use category::Category;
pub use coach_event::{CoachEvent, EventKind};
pub use lesson::Lesson;
pub use request::Request;
pub use row_date::RowDate;
pub use student::Student;
