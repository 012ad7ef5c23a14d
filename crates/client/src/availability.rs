use healthpoint_core::{
    selection::{SelectionChange, SelectionKey},
    slots::BookedTimeSet,
};
use tracing::{debug, warn};

use crate::api::AppointmentsApi;

/// Fetch the booked times for `key` and wrap them as a reducer change tagged
/// with that key.
///
/// A failed fetch degrades to an empty set so the user can still pick a
/// slot; the server remains the final judge of conflicts.
pub async fn load_booked_times<A>(api: &A, key: SelectionKey) -> SelectionChange
where
    A: AppointmentsApi + ?Sized,
{
    let booked = match api.appointments_for(key).await {
        Ok(appointments) => {
            let booked = BookedTimeSet::from_appointments(&appointments);
            debug!(
                "Doctor {} has {} booked slots on {}",
                key.doctor_id,
                booked.len(),
                key.date
            );
            booked
        }
        Err(e) => {
            warn!(
                "Could not load booked times for doctor {} on {}, treating the day as free: {}",
                key.doctor_id, key.date, e
            );
            BookedTimeSet::new()
        }
    };

    SelectionChange::BookedTimesLoaded { key, booked }
}
