pub mod backup;
pub mod calendar;
pub mod category;
pub mod config;
pub mod day;
pub mod event;
pub mod init;
pub mod lesson;
pub mod report;
pub mod request;
pub mod reset;
pub mod student;
