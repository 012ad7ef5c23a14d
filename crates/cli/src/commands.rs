//! Command line surface of the booking client.
//!
//! Each subcommand maps onto one screen of the clinic front desk: browsing
//! the directory, registering patients, checking free slots and booking or
//! cancelling appointments.

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use healthpoint_core::models::TimeSlot;

#[derive(Debug, Parser)]
#[command(name = "healthpoint", version, about = "Book and manage clinic appointments")]
pub struct Cli {
    /// Base URL of the appointments API, overrides HEALTHPOINT_API_URL
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// List departments that have at least one doctor
    Departments,

    /// List doctors, optionally only those of one department
    Doctors {
        #[arg(long)]
        department: Option<String>,
    },

    /// List registered patients
    Patients {
        /// Case-insensitive match on the patient name
        #[arg(long)]
        search: Option<String>,
    },

    /// Register a new patient
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: String,
    },

    /// Show the free slots of a doctor on a date
    Slots {
        #[arg(long)]
        doctor: i64,
        /// Date as YYYY-MM-DD
        #[arg(long)]
        date: NaiveDate,
    },

    /// Book an appointment
    Book {
        #[arg(long)]
        patient: i64,
        #[arg(long)]
        doctor: i64,
        /// Date as YYYY-MM-DD
        #[arg(long)]
        date: NaiveDate,
        /// Slot start as HH:MM
        #[arg(long)]
        time: TimeSlot,
        #[arg(long, default_value = "")]
        reason: String,
    },

    /// Show a doctor's booked appointments for one day
    Schedule {
        #[arg(long)]
        doctor: i64,
        /// Date as YYYY-MM-DD
        #[arg(long)]
        date: NaiveDate,
    },

    /// List all appointments
    Appointments,

    /// Cancel an appointment
    Cancel {
        id: i64,
        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },
}
