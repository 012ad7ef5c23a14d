//! # Booking Session
//!
//! A [`BookingSession`] is the state behind one booking screen: the doctor
//! directory, the loaded [`Store`] and the [`BookingForm`] being filled in.
//! Every selection change goes through [`BookingSession::dispatch`], which
//! runs the reducer and performs the availability fetch it asks for.
//!
//! Failed calls return the error and leave the session as it was, except
//! for booked-time fetches, which fall back to an empty set.

use std::sync::Arc;

use chrono::NaiveDate;
use healthpoint_core::{
    booking::BookingForm,
    directory,
    errors::ClinicResult,
    models::{Appointment, Doctor, NewPatient, Patient, TimeSlot},
    selection::{Effect, Selection, SelectionChange, SelectionStage},
    slots::{BookedTimeSet, OperatingWindow},
    store::Store,
};
use tracing::{info, warn};

use crate::api::AppointmentsApi;
use crate::availability::load_booked_times;

pub struct BookingSession {
    api: Arc<dyn AppointmentsApi>,
    doctors: Vec<Doctor>,
    store: Store,
    form: BookingForm,
}

impl BookingSession {
    pub fn new(api: Arc<dyn AppointmentsApi>, window: OperatingWindow) -> Self {
        Self {
            api,
            doctors: Doctor::default_roster(),
            store: Store::default(),
            form: BookingForm::new(Selection::new(window)),
        }
    }

    /// Load the doctor directory, falling back to the standing roster when
    /// the API fails or lists nobody.
    pub async fn load_doctors(&mut self) {
        self.doctors = match self.api.list_doctors().await {
            Ok(doctors) if !doctors.is_empty() => doctors,
            Ok(_) => {
                warn!("API returned no doctors, using the standing roster");
                Doctor::default_roster()
            }
            Err(e) => {
                warn!("Could not load doctors, using the standing roster: {}", e);
                Doctor::default_roster()
            }
        };
    }

    /// Load doctors, patients and appointments from the API.
    ///
    /// Patients fall back to an empty list when their endpoint fails. A
    /// failed appointments fetch is an error and leaves the store unchanged.
    pub async fn load(&mut self) -> ClinicResult<()> {
        self.load_doctors().await;

        let patients = self.api.list_patients().await.unwrap_or_else(|e| {
            warn!("Could not load patients: {}", e);
            Vec::new()
        });

        let appointments = self.api.list_appointments().await?;

        info!(
            "Loaded {} doctors, {} patients and {} appointments",
            self.doctors.len(),
            patients.len(),
            appointments.len()
        );
        self.store = Store::new(patients, appointments);
        Ok(())
    }

    pub fn doctors(&self) -> &[Doctor] {
        &self.doctors
    }

    pub fn departments(&self) -> Vec<&str> {
        directory::departments(&self.doctors)
    }

    /// Doctors of the selected department.
    pub fn available_doctors(&self) -> Vec<&Doctor> {
        match self.selection().department() {
            Some(department) => directory::doctors_in(&self.doctors, department),
            None => Vec::new(),
        }
    }

    pub fn find_doctor(&self, doctor_id: i64) -> Option<&Doctor> {
        directory::find_doctor(&self.doctors, doctor_id)
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn form(&self) -> &BookingForm {
        &self.form
    }

    pub fn selection(&self) -> &Selection {
        &self.form.selection
    }

    pub fn stage(&self) -> SelectionStage {
        self.form.selection.stage()
    }

    pub fn free_slots(&self) -> Vec<TimeSlot> {
        self.form.selection.free_slots()
    }

    pub fn search_patients(&self, term: &str) -> Vec<&Patient> {
        self.store.search_patients(term)
    }

    pub fn daily_schedule(&self, doctor_id: i64, date: NaiveDate) -> Vec<&Appointment> {
        self.store.daily_schedule(doctor_id, date)
    }

    /// Apply a selection change and run whatever it triggers.
    pub async fn dispatch(&mut self, change: SelectionChange) {
        let mut pending = Some(change);
        while let Some(change) = pending.take() {
            let selection = std::mem::take(&mut self.form.selection);
            let transition = selection.apply(change);
            self.form.selection = transition.selection;

            if let Some(Effect::FetchBookedTimes(key)) = transition.effect {
                pending = Some(load_booked_times(self.api.as_ref(), key).await);
            }
        }
    }

    pub async fn select_department(&mut self, department: Option<String>) {
        self.dispatch(SelectionChange::Department(department)).await;
    }

    pub async fn select_doctor(&mut self, doctor_id: Option<i64>) {
        self.dispatch(SelectionChange::Doctor(doctor_id)).await;
    }

    pub async fn select_date(&mut self, date: Option<NaiveDate>) {
        self.dispatch(SelectionChange::Date(date)).await;
    }

    pub async fn select_time(&mut self, time: Option<TimeSlot>) {
        self.dispatch(SelectionChange::Time(time)).await;
    }

    pub fn select_patient(&mut self, patient_id: Option<i64>) {
        self.form.patient_id = patient_id;
    }

    pub fn set_reason(&mut self, reason: impl Into<String>) {
        self.form.reason = reason.into();
    }

    /// Validate the form and book the selected slot.
    ///
    /// On success the appointment joins the store and its time is marked
    /// booked for the current doctor and date.
    pub async fn submit(&mut self) -> ClinicResult<Appointment> {
        let request = self.form.to_request()?;
        let appointment = self.api.book_appointment(request).await?;
        info!(
            "Booked appointment {} with doctor {} on {} at {}",
            appointment.id, appointment.doctor_id, appointment.date, appointment.time
        );

        self.store = self.store.with_appointment(appointment.clone());
        if let Some(key) = self.form.selection.key() {
            let booked: BookedTimeSet = self
                .form
                .selection
                .booked()
                .iter()
                .chain(std::iter::once(appointment.time.as_str()))
                .collect();
            self.dispatch(SelectionChange::BookedTimesLoaded { key, booked })
                .await;
        }

        Ok(appointment)
    }

    pub async fn register_patient(&mut self, patient: NewPatient) -> ClinicResult<Patient> {
        patient.validate()?;
        let patient = self.api.register_patient(patient).await?;
        info!("Registered patient {} ({})", patient.id, patient.name);

        self.store = self.store.with_patient(patient.clone());
        Ok(patient)
    }

    /// Cancel an appointment and drop it from the store.
    ///
    /// If it belonged to the doctor and date being booked, the booked times
    /// are fetched again so the slot reappears.
    pub async fn cancel(&mut self, appointment_id: i64) -> ClinicResult<()> {
        self.api.cancel_appointment(appointment_id).await?;
        info!("Cancelled appointment {}", appointment_id);

        let affected_key = self
            .store
            .appointments()
            .iter()
            .find(|appointment| appointment.id == appointment_id)
            .map(|appointment| (appointment.doctor_id, appointment.date));
        self.store = self.store.without_appointment(appointment_id);

        if let Some(key) = self.form.selection.key() {
            if affected_key == Some((key.doctor_id, key.date)) {
                let change = load_booked_times(self.api.as_ref(), key).await;
                self.dispatch(change).await;
            }
        }
        Ok(())
    }
}
