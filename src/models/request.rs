use super::row_date::RowDate;

/// Booking request or comment left by a student.
///
/// Requests are advisory: the coach reads them and books lessons by hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub date: RowDate,
    pub time: String,
    pub name: String,
    pub message: String,
}
