pub mod colors;
pub mod date;
pub mod lenient;
pub mod path;
pub mod table;
pub mod time;
