use chrono::NaiveDate;
use healthpoint_client::BookingSession;
use healthpoint_core::{
    errors::{ClinicError, ClinicResult},
    models::{Appointment, Doctor, TimeSlot},
    store::Store,
};
use crate::handlers::HandlerContext;

/// Handle `slots`: free times of one doctor on one date.
pub async fn handle_slots(ctx: &HandlerContext, doctor_id: i64, date: NaiveDate) -> ClinicResult<String> {
    let mut session = ctx.session();
    session.load_doctors().await;
    let doctor = select_doctor_and_date(&mut session, doctor_id, date).await?;

    Ok(format_slots(&doctor, date, &session.free_slots()))
}

/// Handle `book`: validate the form, book it and show the updated day.
pub async fn handle_book(
    ctx: &HandlerContext,
    patient_id: i64,
    doctor_id: i64,
    date: NaiveDate,
    time: TimeSlot,
    reason: String,
) -> ClinicResult<String> {
    let mut session = ctx.session();
    session.load().await?;
    let doctor = select_doctor_and_date(&mut session, doctor_id, date).await?;

    session.select_time(Some(time)).await;
    session.select_patient(Some(patient_id));
    session.set_reason(reason);
    let appointment = session.submit().await?;

    Ok(format!(
        "Appointment #{} booked for {} with {} on {} at {}.\n\n{}",
        appointment.id,
        session.store().patient_name(appointment.patient_id),
        doctor.name,
        appointment.date,
        appointment.time,
        format_schedule(&doctor, date, session.store())
    ))
}

/// Handle `schedule`: one doctor's active appointments for a day.
pub async fn handle_schedule(ctx: &HandlerContext, doctor_id: i64, date: NaiveDate) -> ClinicResult<String> {
    let mut session = ctx.session();
    session.load().await?;
    let doctor = session
        .find_doctor(doctor_id)
        .cloned()
        .ok_or_else(|| doctor_not_found(doctor_id))?;

    Ok(format_schedule(&doctor, date, session.store()))
}

/// Handle `cancel`. Confirmation happens before this is called.
pub async fn handle_cancel(ctx: &HandlerContext, appointment_id: i64) -> ClinicResult<String> {
    ctx.session().cancel(appointment_id).await?;
    Ok(format!("Appointment #{appointment_id} cancelled."))
}

/// Walk the selection down to a doctor and date, which fetches booked times.
async fn select_doctor_and_date(
    session: &mut BookingSession,
    doctor_id: i64,
    date: NaiveDate,
) -> ClinicResult<Doctor> {
    let doctor = session
        .find_doctor(doctor_id)
        .cloned()
        .ok_or_else(|| doctor_not_found(doctor_id))?;

    session.select_department(Some(doctor.department.clone())).await;
    session.select_doctor(Some(doctor.id)).await;
    session.select_date(Some(date)).await;
    Ok(doctor)
}

fn doctor_not_found(doctor_id: i64) -> ClinicError {
    ClinicError::NotFound(format!("Doctor {doctor_id} not found"))
}

pub fn format_slots(doctor: &Doctor, date: NaiveDate, free: &[TimeSlot]) -> String {
    if free.is_empty() {
        return format!("No free slots for {} on {}.", doctor.name, date);
    }

    let times: Vec<&str> = free.iter().map(TimeSlot::as_str).collect();
    format!(
        "Free slots for {} on {} ({}):\n{}",
        doctor.name,
        date,
        free.len(),
        times.join(" ")
    )
}

pub fn format_schedule(doctor: &Doctor, date: NaiveDate, store: &Store) -> String {
    let daily = store.daily_schedule(doctor.id, date);
    if daily.is_empty() {
        return format!(
            "{} on {}:\nNo appointments scheduled for this day.",
            doctor.name, date
        );
    }

    let lines: Vec<String> = daily
        .iter()
        .map(|appointment| format_schedule_line(appointment, store))
        .collect();
    format!("{} on {}:\n{}", doctor.name, date, lines.join("\n"))
}

fn format_schedule_line(appointment: &Appointment, store: &Store) -> String {
    let patient = store.patient_name(appointment.patient_id);
    if appointment.reason.trim().is_empty() {
        format!("  {}  {}", appointment.time, patient)
    } else {
        format!("  {}  {} ({})", appointment.time, patient, appointment.reason)
    }
}
