//! # HealthPoint Core
//!
//! Domain types and pure logic for the HealthPoint appointment booking client.
//! Nothing in this crate performs I/O; every operation is a function over
//! values fetched by the client crate.
//!
//! - **Models**: wire entities exchanged with the appointments API
//! - **Slots**: the daily slot grid and the availability filter
//! - **Selection**: the department → doctor → date → time reducer
//! - **Booking**: client-side validation of a booking before submission
//! - **Store**: patients and appointments held by the front end
//! - **Directory**: department and doctor lookups

pub mod booking;
pub mod directory;
pub mod errors;
pub mod models;
pub mod selection;
pub mod slots;
pub mod store;
