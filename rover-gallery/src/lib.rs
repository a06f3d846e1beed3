pub mod api;
pub mod command;
pub mod config;
pub mod feed;
pub mod filter;
pub mod logging;
pub mod render;
pub mod repl;
