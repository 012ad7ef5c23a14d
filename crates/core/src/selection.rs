//! # Booking selection
//!
//! The booking form narrows a choice in four steps: department, doctor,
//! date and time. Changing an upstream field invalidates everything below
//! it, so the form is modelled as a reducer: [`Selection::apply`] takes the
//! current selection and one [`SelectionChange`] and returns the next
//! selection together with any side effect the caller must run.
//!
//! The only side effect is fetching the booked times for a
//! [`SelectionKey`]. The fetched set comes back as another change,
//! [`SelectionChange::BookedTimesLoaded`], tagged with the key it was issued
//! for. A set whose key no longer matches the selection is dropped, so a
//! slow response can never overwrite the slots of a newer doctor or date.

use chrono::NaiveDate;

use crate::models::TimeSlot;
use crate::slots::{BookedTimeSet, OperatingWindow, free_slots};

/// The doctor and date a booked-time set belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SelectionKey {
    pub doctor_id: i64,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionStage {
    NoDepartment,
    NoDoctor,
    NoDate,
    NoTime,
    Ready,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SelectionChange {
    Department(Option<String>),
    Doctor(Option<i64>),
    Date(Option<NaiveDate>),
    Time(Option<TimeSlot>),
    BookedTimesLoaded {
        key: SelectionKey,
        booked: BookedTimeSet,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    FetchBookedTimes(SelectionKey),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub selection: Selection,
    pub effect: Option<Effect>,
}

impl Transition {
    fn settled(selection: Selection) -> Self {
        Self {
            selection,
            effect: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    window: OperatingWindow,
    department: Option<String>,
    doctor_id: Option<i64>,
    date: Option<NaiveDate>,
    time: Option<TimeSlot>,
    booked: BookedTimeSet,
}

impl Selection {
    pub fn new(window: OperatingWindow) -> Self {
        Self {
            window,
            ..Self::default()
        }
    }

    pub fn window(&self) -> &OperatingWindow {
        &self.window
    }

    pub fn department(&self) -> Option<&str> {
        self.department.as_deref()
    }

    pub fn doctor_id(&self) -> Option<i64> {
        self.doctor_id
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    pub fn time(&self) -> Option<&TimeSlot> {
        self.time.as_ref()
    }

    pub fn booked(&self) -> &BookedTimeSet {
        &self.booked
    }

    /// The pair the current booked set must belong to, once both are chosen.
    pub fn key(&self) -> Option<SelectionKey> {
        Some(SelectionKey {
            doctor_id: self.doctor_id?,
            date: self.date?,
        })
    }

    /// Slots of the window not taken by the current booked set.
    pub fn free_slots(&self) -> Vec<TimeSlot> {
        free_slots(&self.window.grid(), &self.booked)
    }

    /// Whether `slot` can be booked for the current doctor and date.
    pub fn is_free(&self, slot: &TimeSlot) -> bool {
        self.window.contains(slot) && !self.booked.contains(slot.as_str())
    }

    pub fn stage(&self) -> SelectionStage {
        if self.department.is_none() {
            SelectionStage::NoDepartment
        } else if self.doctor_id.is_none() {
            SelectionStage::NoDoctor
        } else if self.date.is_none() {
            SelectionStage::NoDate
        } else {
            match &self.time {
                Some(time) if self.is_free(time) => SelectionStage::Ready,
                _ => SelectionStage::NoTime,
            }
        }
    }

    /// Apply one change and return the resulting selection.
    ///
    /// Re-selecting the current value is a no-op. A downstream field cannot be
    /// set before the field above it; such changes are ignored.
    pub fn apply(self, change: SelectionChange) -> Transition {
        match change {
            SelectionChange::Department(department) => {
                if department == self.department {
                    return Transition::settled(self);
                }
                Transition::settled(Self {
                    department,
                    doctor_id: None,
                    date: None,
                    time: None,
                    booked: BookedTimeSet::new(),
                    ..self
                })
            }
            SelectionChange::Doctor(doctor_id) => {
                if doctor_id == self.doctor_id || (doctor_id.is_some() && self.department.is_none()) {
                    return Transition::settled(self);
                }
                Transition::settled(Self {
                    doctor_id,
                    date: None,
                    time: None,
                    booked: BookedTimeSet::new(),
                    ..self
                })
            }
            SelectionChange::Date(date) => {
                if date == self.date || (date.is_some() && self.doctor_id.is_none()) {
                    return Transition::settled(self);
                }
                let selection = Self {
                    date,
                    time: None,
                    booked: BookedTimeSet::new(),
                    ..self
                };
                let effect = selection.key().map(Effect::FetchBookedTimes);
                Transition { selection, effect }
            }
            SelectionChange::Time(time) => {
                if time.is_some() && self.date.is_none() {
                    return Transition::settled(self);
                }
                Transition::settled(Self { time, ..self })
            }
            SelectionChange::BookedTimesLoaded { key, booked } => {
                if self.key() != Some(key) {
                    return Transition::settled(self);
                }
                let time = self.time.filter(|time| !booked.contains(time.as_str()));
                Transition::settled(Self {
                    time,
                    booked,
                    ..self
                })
            }
        }
    }
}
