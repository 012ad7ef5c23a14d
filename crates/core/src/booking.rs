use crate::errors::{ClinicError, ClinicResult};
use crate::models::NewAppointment;
use crate::selection::Selection;

/// Everything the booking form collects before submission.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingForm {
    pub patient_id: Option<i64>,
    pub selection: Selection,
    pub reason: String,
}

impl BookingForm {
    pub fn new(selection: Selection) -> Self {
        Self {
            selection,
            ..Self::default()
        }
    }

    /// Validate the form and build the request body.
    ///
    /// # Errors
    ///
    /// * `ClinicError::Validation` - patient, doctor, date or time is missing
    /// * `ClinicError::Conflict` - the chosen time is off the grid or already booked
    pub fn to_request(&self) -> ClinicResult<NewAppointment> {
        let selection = &self.selection;
        let (Some(patient_id), Some(doctor_id), Some(date), Some(time)) = (
            self.patient_id,
            selection.doctor_id(),
            selection.date(),
            selection.time(),
        ) else {
            return Err(ClinicError::Validation(
                "Please fill all required fields.".to_string(),
            ));
        };

        if !selection.is_free(time) {
            return Err(ClinicError::Conflict(format!(
                "{time} is not available for this doctor on {date}"
            )));
        }

        Ok(NewAppointment {
            patient_id,
            doctor_id,
            date,
            time: time.clone(),
            reason: self.reason.clone(),
        })
    }
}
