use healthpoint_core::{
    directory,
    errors::ClinicResult,
    models::{Appointment, AppointmentStatus, Doctor, NewPatient, Patient},
    store::Store,
};
use tracing::warn;

use crate::handlers::HandlerContext;

/// Handle `departments`.
pub async fn handle_departments(ctx: &HandlerContext) -> ClinicResult<String> {
    let mut session = ctx.session();
    session.load_doctors().await;

    let departments = session.departments();
    if departments.is_empty() {
        return Ok("No departments found.".to_string());
    }
    Ok(departments.join("\n"))
}

/// Handle `doctors`, optionally narrowed to one department.
pub async fn handle_doctors(ctx: &HandlerContext, department: Option<String>) -> ClinicResult<String> {
    let mut session = ctx.session();
    session.load_doctors().await;

    let doctors: Vec<&Doctor> = match department.as_deref() {
        Some(department) => directory::doctors_in(session.doctors(), department),
        None => session.doctors().iter().collect(),
    };
    Ok(format_doctors(&doctors))
}

/// Handle `patients`, optionally filtered by name. An unavailable patient
/// list is shown as empty.
pub async fn handle_patients(ctx: &HandlerContext, search: Option<String>) -> ClinicResult<String> {
    let patients = ctx.api.list_patients().await.unwrap_or_else(|e| {
        warn!("Could not load patients: {}", e);
        Vec::new()
    });
    let store = Store::new(patients, Vec::new());
    let matches = store.search_patients(search.as_deref().unwrap_or_default());

    Ok(format_patients(&matches))
}

/// Handle `register`.
pub async fn handle_register(
    ctx: &HandlerContext,
    name: String,
    email: String,
    phone: String,
) -> ClinicResult<String> {
    let patient = ctx
        .session()
        .register_patient(NewPatient { name, email, phone })
        .await?;

    Ok(format!(
        "Patient registered: #{} {} <{}>",
        patient.id, patient.name, patient.email
    ))
}

/// Handle `appointments`: every appointment, soonest first.
pub async fn handle_appointments(ctx: &HandlerContext) -> ClinicResult<String> {
    let mut session = ctx.session();
    session.load().await?;

    let mut appointments: Vec<&Appointment> = session.store().appointments().iter().collect();
    if appointments.is_empty() {
        return Ok("No appointments found.".to_string());
    }
    appointments.sort_by(|a, b| (a.date, &a.time).cmp(&(b.date, &b.time)));

    let lines: Vec<String> = appointments
        .iter()
        .map(|appointment| {
            let doctor = session
                .find_doctor(appointment.doctor_id)
                .map_or("Unknown doctor", |doctor| doctor.name.as_str());
            format!(
                "#{}  {} {}  {}  {}  [{}]",
                appointment.id,
                appointment.date,
                appointment.time,
                session.store().patient_name(appointment.patient_id),
                doctor,
                status_label(appointment.status)
            )
        })
        .collect();
    Ok(lines.join("\n"))
}

fn status_label(status: AppointmentStatus) -> &'static str {
    match status {
        AppointmentStatus::Booked => "booked",
        AppointmentStatus::Cancelled => "cancelled",
        AppointmentStatus::Other => "unknown",
    }
}

pub fn format_doctors(doctors: &[&Doctor]) -> String {
    if doctors.is_empty() {
        return "No doctors found.".to_string();
    }

    doctors
        .iter()
        .map(|doctor| {
            if doctor.department.is_empty() {
                format!("#{}  {}", doctor.id, doctor.name)
            } else {
                format!("#{}  {} ({})", doctor.id, doctor.name, doctor.department)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_patients(patients: &[&Patient]) -> String {
    if patients.is_empty() {
        return "No patients found.".to_string();
    }

    patients
        .iter()
        .map(|patient| {
            if patient.phone.is_empty() {
                format!("#{}  {} <{}>", patient.id, patient.name, patient.email)
            } else {
                format!(
                    "#{}  {} <{}>  {}",
                    patient.id, patient.name, patient.email, patient.phone
                )
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
