use std::sync::Arc;

use healthpoint_client::{AppointmentsApi, BookingSession, ClientConfig};
use healthpoint_core::errors::ClinicResult;
use tracing::debug;

use crate::commands::Command;

pub mod booking;
pub mod directory;

/// What every command handler gets to work with.
#[derive(Clone)]
pub struct HandlerContext {
    pub api: Arc<dyn AppointmentsApi>,
    pub config: ClientConfig,
}

impl HandlerContext {
    pub fn new(api: Arc<dyn AppointmentsApi>, config: ClientConfig) -> Self {
        Self { api, config }
    }

    /// A fresh booking session over this context's API.
    pub fn session(&self) -> BookingSession {
        BookingSession::new(self.api.clone(), self.config.window)
    }
}

/// Run one command and return the text to print.
pub async fn handle(ctx: &HandlerContext, command: Command) -> ClinicResult<String> {
    debug!("Handling {:?}", command);
    match command {
        Command::Departments => directory::handle_departments(ctx).await,
        Command::Doctors { department } => directory::handle_doctors(ctx, department).await,
        Command::Patients { search } => directory::handle_patients(ctx, search).await,
        Command::Register { name, email, phone } => {
            directory::handle_register(ctx, name, email, phone).await
        }
        Command::Appointments => directory::handle_appointments(ctx).await,
        Command::Slots { doctor, date } => booking::handle_slots(ctx, doctor, date).await,
        Command::Book {
            patient,
            doctor,
            date,
            time,
            reason,
        } => booking::handle_book(ctx, patient, doctor, date, time, reason).await,
        Command::Schedule { doctor, date } => booking::handle_schedule(ctx, doctor, date).await,
        Command::Cancel { id, .. } => booking::handle_cancel(ctx, id).await,
    }
}
