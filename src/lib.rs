pub mod app;
pub mod config;
pub mod deck;
pub mod errors;
pub mod handlers;
pub mod markdown;
pub mod presentation;
pub mod templates_structs;
