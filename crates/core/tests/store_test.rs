use chrono::NaiveDate;
use fake::{Fake, faker::internet::en::SafeEmail, faker::name::en::Name, faker::phone_number::en::PhoneNumber};
use pretty_assertions::assert_eq;
use healthpoint_core::{
    models::{Appointment, AppointmentStatus, Patient},
    store::{Store, UNKNOWN_PATIENT},
};

fn fake_patient(id: i64) -> Patient {
    Patient {
        id,
        name: Name().fake(),
        email: SafeEmail().fake(),
        phone: PhoneNumber().fake(),
    }
}

fn patient(id: i64, name: &str) -> Patient {
    Patient {
        name: name.to_string(),
        ..fake_patient(id)
    }
}

fn appointment(id: i64, doctor_id: i64, day: u32, time: &str) -> Appointment {
    Appointment {
        id,
        patient_id: 1,
        doctor_id,
        date: NaiveDate::from_ymd_opt(2026, 10, day).unwrap(),
        time: time.to_string(),
        reason: String::new(),
        status: AppointmentStatus::Booked,
    }
}

#[test]
fn test_with_patient_leaves_original_untouched() {
    let store = Store::default();
    let updated = store.with_patient(fake_patient(1));

    assert!(store.patients().is_empty());
    assert_eq!(updated.patients().len(), 1);
}

#[test]
fn test_with_and_without_appointment() {
    let store = Store::default()
        .with_appointment(appointment(1, 1, 20, "09:00"))
        .with_appointment(appointment(2, 1, 20, "09:15"));

    let cancelled = store.without_appointment(1);

    assert_eq!(store.appointments().len(), 2);
    assert_eq!(cancelled.appointments().len(), 1);
    assert_eq!(cancelled.appointments()[0].id, 2);
}

#[test]
fn test_without_unknown_appointment_is_unchanged() {
    let store = Store::default().with_appointment(appointment(1, 1, 20, "09:00"));

    assert_eq!(store.without_appointment(99), store);
}

#[test]
fn test_search_patients_ignores_case() {
    let store = Store::new(
        vec![
            patient(1, "Ada Lovelace"),
            patient(2, "Grace Hopper"),
            patient(3, "Alan Turing"),
        ],
        Vec::new(),
    );

    let names: Vec<&str> = store
        .search_patients("LOVE")
        .into_iter()
        .map(|p| p.name.as_str())
        .collect();
    assert_eq!(names, vec!["Ada Lovelace"]);

    assert_eq!(store.search_patients("a").len(), 3);
    assert_eq!(store.search_patients("").len(), 3);
    assert!(store.search_patients("zzz").is_empty());
}

#[test]
fn test_patient_name_falls_back_to_unknown() {
    let store = Store::new(vec![patient(1, "Ada Lovelace")], Vec::new());

    assert_eq!(store.patient_name(1), "Ada Lovelace");
    assert_eq!(store.patient_name(2), UNKNOWN_PATIENT);
}

#[test]
fn test_daily_schedule_filters_and_sorts() {
    let mut cancelled = appointment(5, 1, 20, "08:00");
    cancelled.status = AppointmentStatus::Cancelled;

    let store = Store::new(
        Vec::new(),
        vec![
            appointment(1, 1, 20, "14:00"),
            appointment(2, 1, 20, "09:30"),
            appointment(3, 2, 20, "10:00"),
            appointment(4, 1, 21, "09:00"),
            cancelled,
        ],
    );

    let day = NaiveDate::from_ymd_opt(2026, 10, 20).unwrap();
    let ids: Vec<i64> = store.daily_schedule(1, day).into_iter().map(|a| a.id).collect();

    assert_eq!(ids, vec![2, 1]);
}
