//! # Appointments API
//!
//! [`AppointmentsApi`] is the seam between the booking session and the
//! remote REST service that owns patients, doctors and appointments.
//! [`HttpApi`] is the production implementation over `reqwest`; tests use
//! the mock in [`crate::mock`].
//!
//! ## Error mapping
//!
//! | Response | Error |
//! |---|---|
//! | transport failure, undecodable body | `ClinicError::Network` |
//! | 404 | `ClinicError::NotFound` |
//! | 400, 409, 422 | `ClinicError::Conflict` |
//! | any other non-2xx | `ClinicError::Network` |
//!
//! The message is the server's `detail` field when present, otherwise the
//! JSON body, otherwise the raw text, otherwise a per-call fallback.

use async_trait::async_trait;
use eyre::{Result, WrapErr};
use healthpoint_core::{
    errors::{ClinicError, ClinicResult},
    models::{Appointment, Doctor, NewAppointment, NewPatient, Patient},
    selection::SelectionKey,
};
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::config::ClientConfig;

#[async_trait]
pub trait AppointmentsApi: Send + Sync {
    /// `GET /doctors/`
    async fn list_doctors(&self) -> ClinicResult<Vec<Doctor>>;

    /// `GET /patients/`
    async fn list_patients(&self) -> ClinicResult<Vec<Patient>>;

    /// `GET /patients/{id}`
    async fn get_patient(&self, patient_id: i64) -> ClinicResult<Patient>;

    /// `POST /patients/`
    async fn register_patient(&self, patient: NewPatient) -> ClinicResult<Patient>;

    /// `GET /appointments/`
    async fn list_appointments(&self) -> ClinicResult<Vec<Appointment>>;

    /// `GET /appointments/{id}`
    async fn get_appointment(&self, appointment_id: i64) -> ClinicResult<Appointment>;

    /// `GET /appointments/doctor/{doctor_id}/date/{date}`
    async fn appointments_for(&self, key: SelectionKey) -> ClinicResult<Vec<Appointment>>;

    /// `POST /appointments/`
    async fn book_appointment(&self, appointment: NewAppointment) -> ClinicResult<Appointment>;

    /// `DELETE /appointments/{id}`
    async fn cancel_appointment(&self, appointment_id: i64) -> ClinicResult<()>;
}

/// `reqwest` implementation of [`AppointmentsApi`].
#[derive(Debug, Clone)]
pub struct HttpApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpApi {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .wrap_err("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: config.api_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, fallback: &str) -> ClinicResult<T> {
        debug!("GET {}", path);
        let response = self
            .client
            .get(self.url(path))
            .send()
            .await
            .map_err(transport_error)?;
        decode(check(response, fallback).await?).await
    }

    async fn post_json<B, T>(&self, path: &str, body: &B, fallback: &str) -> ClinicResult<T>
    where
        B: serde::Serialize + Sync,
        T: DeserializeOwned,
    {
        debug!("POST {}", path);
        let response = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(transport_error)?;
        decode(check(response, fallback).await?).await
    }
}

#[async_trait]
impl AppointmentsApi for HttpApi {
    async fn list_doctors(&self) -> ClinicResult<Vec<Doctor>> {
        self.get_json("/doctors/", "Failed to fetch doctors").await
    }

    async fn list_patients(&self) -> ClinicResult<Vec<Patient>> {
        self.get_json("/patients/", "Failed to fetch patients").await
    }

    async fn get_patient(&self, patient_id: i64) -> ClinicResult<Patient> {
        self.get_json(&format!("/patients/{patient_id}"), "Patient not found")
            .await
    }

    async fn register_patient(&self, patient: NewPatient) -> ClinicResult<Patient> {
        self.post_json("/patients/", &patient, "Failed to register patient")
            .await
    }

    async fn list_appointments(&self) -> ClinicResult<Vec<Appointment>> {
        self.get_json(
            "/appointments/",
            "Failed to fetch appointments. Make sure the backend server is running and accessible.",
        )
        .await
    }

    async fn get_appointment(&self, appointment_id: i64) -> ClinicResult<Appointment> {
        self.get_json(
            &format!("/appointments/{appointment_id}"),
            "Appointment not found",
        )
        .await
    }

    async fn appointments_for(&self, key: SelectionKey) -> ClinicResult<Vec<Appointment>> {
        self.get_json(
            &format!("/appointments/doctor/{}/date/{}", key.doctor_id, key.date),
            "Failed to fetch booked times",
        )
        .await
    }

    async fn book_appointment(&self, appointment: NewAppointment) -> ClinicResult<Appointment> {
        self.post_json("/appointments/", &appointment, "Failed to book appointment")
            .await
    }

    async fn cancel_appointment(&self, appointment_id: i64) -> ClinicResult<()> {
        let path = format!("/appointments/{appointment_id}");
        debug!("DELETE {}", path);
        let response = self
            .client
            .delete(self.url(&path))
            .send()
            .await
            .map_err(transport_error)?;
        check(response, "Failed to cancel appointment").await?;
        Ok(())
    }
}

fn transport_error(err: reqwest::Error) -> ClinicError {
    ClinicError::Network(err.to_string())
}

async fn decode<T: DeserializeOwned>(response: Response) -> ClinicResult<T> {
    response
        .json::<T>()
        .await
        .map_err(|e| ClinicError::Network(format!("Unexpected response from API: {e}")))
}

/// Pass successful responses through and turn the rest into a [`ClinicError`].
async fn check(response: Response, fallback: &str) -> ClinicResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = error_detail(&body).unwrap_or_else(|| fallback.to_string());
    debug!("API responded {}: {}", status, message);

    Err(match status {
        StatusCode::NOT_FOUND => ClinicError::NotFound(message),
        StatusCode::BAD_REQUEST | StatusCode::CONFLICT | StatusCode::UNPROCESSABLE_ENTITY => {
            ClinicError::Conflict(message)
        }
        _ => ClinicError::Network(format!("{message} (HTTP {})", status.as_u16())),
    })
}

/// Extract a human readable message from an error body.
pub fn error_detail(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }

    let message = match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(map)) => match map.get("detail") {
            Some(Value::String(detail)) => detail.clone(),
            // FastAPI validation errors carry a list of problems.
            Some(detail) => detail.to_string(),
            None => serde_json::to_string(&map).unwrap_or_default(),
        },
        Ok(Value::String(text)) => text,
        Ok(other) => other.to_string(),
        Err(_) => body.to_string(),
    };
    Some(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_field_wins() {
        assert_eq!(
            error_detail(r#"{"detail": "A patient with this email already exists."}"#).as_deref(),
            Some("A patient with this email already exists.")
        );
    }

    #[test]
    fn json_without_detail_is_stringified() {
        assert_eq!(
            error_detail(r#"{"error":"slot taken"}"#).as_deref(),
            Some(r#"{"error":"slot taken"}"#)
        );
    }

    #[test]
    fn plain_text_is_kept() {
        assert_eq!(
            error_detail("Internal Server Error").as_deref(),
            Some("Internal Server Error")
        );
    }

    #[test]
    fn empty_body_has_no_detail() {
        assert_eq!(error_detail("  "), None);
    }
}
