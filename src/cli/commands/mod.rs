pub mod auth;
pub mod manage;
pub mod site;
