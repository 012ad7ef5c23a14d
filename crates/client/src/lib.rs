//! # HealthPoint Client
//!
//! Talks to the appointments REST API on behalf of the booking front end.
//!
//! - **Api**: the [`api::AppointmentsApi`] trait and its `reqwest` implementation
//! - **Availability**: fail-open loading of a doctor's booked times
//! - **Session**: [`session::BookingSession`], which drives the selection reducer
//! - **Config**: environment-based client configuration
//! - **Mock**: a `mockall` double of the API for tests

pub mod api;
pub mod availability;
pub mod config;
pub mod mock;
pub mod session;

pub use api::{AppointmentsApi, HttpApi};
pub use config::ClientConfig;
pub use session::BookingSession;
