use crate::models::Doctor;

/// Distinct departments in the order they first appear.
pub fn departments(doctors: &[Doctor]) -> Vec<&str> {
    let mut seen: Vec<&str> = Vec::new();
    for doctor in doctors {
        let department = doctor.department.as_str();
        if !department.is_empty() && !seen.contains(&department) {
            seen.push(department);
        }
    }
    seen
}

pub fn doctors_in<'a>(doctors: &'a [Doctor], department: &str) -> Vec<&'a Doctor> {
    doctors
        .iter()
        .filter(|doctor| doctor.department == department)
        .collect()
}

pub fn find_doctor(doctors: &[Doctor], doctor_id: i64) -> Option<&Doctor> {
    doctors.iter().find(|doctor| doctor.id == doctor_id)
}
