use async_trait::async_trait;
use healthpoint_core::{
    errors::ClinicResult,
    models::{Appointment, Doctor, NewAppointment, NewPatient, Patient},
    selection::SelectionKey,
};
use mockall::mock;

use crate::api::AppointmentsApi;

// Mock appointments API for testing sessions without a server
mock! {
    pub Api {}

    #[async_trait]
    impl AppointmentsApi for Api {
        async fn list_doctors(&self) -> ClinicResult<Vec<Doctor>>;
        async fn list_patients(&self) -> ClinicResult<Vec<Patient>>;
        async fn get_patient(&self, patient_id: i64) -> ClinicResult<Patient>;
        async fn register_patient(&self, patient: NewPatient) -> ClinicResult<Patient>;
        async fn list_appointments(&self) -> ClinicResult<Vec<Appointment>>;
        async fn get_appointment(&self, appointment_id: i64) -> ClinicResult<Appointment>;
        async fn appointments_for(&self, key: SelectionKey) -> ClinicResult<Vec<Appointment>>;
        async fn book_appointment(&self, appointment: NewAppointment) -> ClinicResult<Appointment>;
        async fn cancel_appointment(&self, appointment_id: i64) -> ClinicResult<()>;
    }
}
