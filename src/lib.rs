//! Botgrid - Batch Match Runner for Bot-vs-Bot Grid Skirmishes

pub mod bots;
pub mod config;
pub mod core;
pub mod engine;
pub mod map;
pub mod output;
pub mod render;
pub mod report;
pub mod runner;
pub mod viz;
