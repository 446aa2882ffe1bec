pub mod commands;
pub mod gate;
pub mod parser;
