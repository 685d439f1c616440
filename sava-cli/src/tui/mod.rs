//! Terminal host for the reservation countdown
//!
//! A single full-screen card:
//! - Headline and availability tagline
//! - Ship date for the delivery milestone
//! - MONTHS / DAYS / HOURS counters, refreshed by the countdown ticker

pub mod app;
pub mod event;
pub mod terminal;
pub mod ui;

pub use app::ReservationView;
pub use terminal::run;
