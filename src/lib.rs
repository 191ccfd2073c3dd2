//! Artisan Hub - AI marketplace assistant for local artisans
//!
//! The reusable step wizard lives in [`wizard`]; the product listing flow
//! built on it, plus the dashboard data, lives in [`listing`].

pub mod app;
pub mod config;
pub mod listing;
pub mod logging;
pub mod profile;
pub mod ui;
pub mod wizard;
