pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod prompt;
pub mod screen;
pub mod sections;
pub mod session;
pub mod shell;

#[cfg(test)]
pub mod testing;
