use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use healthpoint_core::{
    models::TimeSlot,
    selection::{Effect, Selection, SelectionChange, SelectionKey, SelectionStage},
};

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, day).unwrap()
}

fn slot(s: &str) -> TimeSlot {
    TimeSlot::parse(s).unwrap()
}

fn apply_all(selection: Selection, changes: Vec<SelectionChange>) -> Selection {
    changes
        .into_iter()
        .fold(selection, |selection, change| selection.apply(change).selection)
}

/// Cardiology, doctor 1, the 20th, with 09:00 booked and 10:00 chosen.
fn ready_selection() -> Selection {
    let key = SelectionKey {
        doctor_id: 1,
        date: date(20),
    };
    apply_all(
        Selection::default(),
        vec![
            SelectionChange::Department(Some("Cardiology".to_string())),
            SelectionChange::Doctor(Some(1)),
            SelectionChange::Date(Some(date(20))),
            SelectionChange::BookedTimesLoaded {
                key,
                booked: ["09:00"].into_iter().collect(),
            },
            SelectionChange::Time(Some(slot("10:00"))),
        ],
    )
}

#[test]
fn test_stages_progress_in_order() {
    let mut selection = Selection::default();
    assert_eq!(selection.stage(), SelectionStage::NoDepartment);

    selection = selection
        .apply(SelectionChange::Department(Some("Neurology".to_string())))
        .selection;
    assert_eq!(selection.stage(), SelectionStage::NoDoctor);

    selection = selection.apply(SelectionChange::Doctor(Some(3))).selection;
    assert_eq!(selection.stage(), SelectionStage::NoDate);

    selection = selection.apply(SelectionChange::Date(Some(date(21)))).selection;
    assert_eq!(selection.stage(), SelectionStage::NoTime);

    selection = selection.apply(SelectionChange::Time(Some(slot("11:30")))).selection;
    assert_eq!(selection.stage(), SelectionStage::Ready);
}

#[test]
fn test_ready_selection_fixture() {
    let selection = ready_selection();

    assert_eq!(selection.stage(), SelectionStage::Ready);
    assert_eq!(selection.free_slots().len(), 32);
}

#[test]
fn test_department_change_resets_everything_below() {
    let selection = ready_selection()
        .apply(SelectionChange::Department(Some("Neurology".to_string())))
        .selection;

    assert_eq!(selection.department(), Some("Neurology"));
    assert_eq!(selection.doctor_id(), None);
    assert_eq!(selection.date(), None);
    assert_eq!(selection.time(), None);
    assert!(selection.booked().is_empty());
}

#[test]
fn test_doctor_change_resets_date_time_and_bookings() {
    let selection = ready_selection().apply(SelectionChange::Doctor(Some(2))).selection;

    assert_eq!(selection.department(), Some("Cardiology"));
    assert_eq!(selection.doctor_id(), Some(2));
    assert_eq!(selection.date(), None);
    assert_eq!(selection.time(), None);
    assert!(selection.booked().is_empty());
}

#[test]
fn test_date_change_requests_booked_times() {
    let transition = ready_selection().apply(SelectionChange::Date(Some(date(22))));

    assert_eq!(
        transition.effect,
        Some(Effect::FetchBookedTimes(SelectionKey {
            doctor_id: 1,
            date: date(22),
        }))
    );
    assert_eq!(transition.selection.time(), None);
    assert!(transition.selection.booked().is_empty());
}

#[test]
fn test_clearing_date_requests_nothing() {
    let transition = ready_selection().apply(SelectionChange::Date(None));

    assert_eq!(transition.effect, None);
    assert_eq!(transition.selection.stage(), SelectionStage::NoDate);
}

#[test]
fn test_reselecting_same_value_is_a_no_op() {
    let before = ready_selection();

    let after = before
        .clone()
        .apply(SelectionChange::Department(Some("Cardiology".to_string())));
    assert_eq!(after.selection, before);

    let after = before.clone().apply(SelectionChange::Date(Some(date(20))));
    assert_eq!(after.selection, before);
    assert_eq!(after.effect, None);
}

#[test]
fn test_downstream_fields_need_upstream_choice() {
    let selection = apply_all(
        Selection::default(),
        vec![
            SelectionChange::Doctor(Some(1)),
            SelectionChange::Date(Some(date(20))),
            SelectionChange::Time(Some(slot("09:00"))),
        ],
    );

    assert_eq!(selection, Selection::default());
}

#[test]
fn test_stale_booked_times_are_discarded() {
    // A fetch for the 20th resolves after the user has moved on to the 22nd.
    let selection = ready_selection().apply(SelectionChange::Date(Some(date(22)))).selection;

    let selection = selection
        .apply(SelectionChange::BookedTimesLoaded {
            key: SelectionKey {
                doctor_id: 1,
                date: date(20),
            },
            booked: ["10:00", "10:15"].into_iter().collect(),
        })
        .selection;

    assert!(selection.booked().is_empty());
    assert_eq!(selection.free_slots().len(), 33);
}

#[test]
fn test_loaded_bookings_clear_a_conflicting_time() {
    let key = SelectionKey {
        doctor_id: 1,
        date: date(20),
    };
    let selection = ready_selection()
        .apply(SelectionChange::BookedTimesLoaded {
            key,
            booked: ["10:00"].into_iter().collect(),
        })
        .selection;

    assert_eq!(selection.time(), None);
    assert_eq!(selection.stage(), SelectionStage::NoTime);
}

#[test]
fn test_booked_time_is_never_ready() {
    let selection = ready_selection()
        .apply(SelectionChange::Time(Some(slot("09:00"))))
        .selection;

    assert_eq!(selection.stage(), SelectionStage::NoTime);
    assert!(!selection.is_free(&slot("09:00")));
}

#[test]
fn test_off_grid_time_is_never_ready() {
    let selection = ready_selection()
        .apply(SelectionChange::Time(Some(slot("09:05"))))
        .selection;

    assert_eq!(selection.stage(), SelectionStage::NoTime);
}

#[test]
fn test_free_slots_follow_the_booked_set() {
    let selection = ready_selection();
    let free = selection.free_slots();

    assert!(!free.contains(&slot("09:00")));
    assert_eq!(free.first(), Some(&slot("09:15")));
}
