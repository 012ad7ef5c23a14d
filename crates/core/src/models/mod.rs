pub mod appointment;
pub mod doctor;
pub mod patient;
pub mod time_slot;

pub use appointment::{Appointment, AppointmentStatus, NewAppointment};
pub use doctor::Doctor;
pub use patient::{NewPatient, Patient};
pub use time_slot::TimeSlot;
