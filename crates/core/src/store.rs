//! # Store
//!
//! The patients and appointments the front end has loaded. Updates never
//! mutate in place: each returns a new [`Store`], leaving the previous value
//! usable for comparison or rollback.

use chrono::NaiveDate;

use crate::models::{Appointment, Patient};

/// Name shown for appointments whose patient is not loaded.
pub const UNKNOWN_PATIENT: &str = "Unknown";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Store {
    patients: Vec<Patient>,
    appointments: Vec<Appointment>,
}

impl Store {
    pub fn new(patients: Vec<Patient>, appointments: Vec<Appointment>) -> Self {
        Self {
            patients,
            appointments,
        }
    }

    pub fn patients(&self) -> &[Patient] {
        &self.patients
    }

    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    pub fn with_patient(&self, patient: Patient) -> Self {
        let mut patients = self.patients.clone();
        patients.push(patient);
        Self {
            patients,
            appointments: self.appointments.clone(),
        }
    }

    pub fn with_appointment(&self, appointment: Appointment) -> Self {
        let mut appointments = self.appointments.clone();
        appointments.push(appointment);
        Self {
            patients: self.patients.clone(),
            appointments,
        }
    }

    pub fn without_appointment(&self, appointment_id: i64) -> Self {
        Self {
            patients: self.patients.clone(),
            appointments: self
                .appointments
                .iter()
                .filter(|appointment| appointment.id != appointment_id)
                .cloned()
                .collect(),
        }
    }

    /// Patients whose name contains `term`, ignoring case. A blank term
    /// matches everyone.
    pub fn search_patients(&self, term: &str) -> Vec<&Patient> {
        let term = term.trim().to_lowercase();
        self.patients
            .iter()
            .filter(|patient| patient.name.to_lowercase().contains(&term))
            .collect()
    }

    pub fn patient_name(&self, patient_id: i64) -> &str {
        self.patients
            .iter()
            .find(|patient| patient.id == patient_id)
            .map_or(UNKNOWN_PATIENT, |patient| patient.name.as_str())
    }

    /// One doctor's active appointments on `date`, earliest first.
    pub fn daily_schedule(&self, doctor_id: i64, date: NaiveDate) -> Vec<&Appointment> {
        let mut daily: Vec<&Appointment> = self
            .appointments
            .iter()
            .filter(|appointment| {
                appointment.doctor_id == doctor_id && appointment.date == date && appointment.is_active()
            })
            .collect();
        daily.sort_by(|a, b| a.time.cmp(&b.time));
        daily
    }
}
