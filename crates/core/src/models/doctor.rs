use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: i64,
    pub name: String,
    /// Older API deployments omit the department.
    #[serde(default)]
    pub department: String,
}

impl Doctor {
    pub fn new(id: i64, name: impl Into<String>, department: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            department: department.into(),
        }
    }

    /// The clinic's standing roster, used when the API cannot list doctors.
    pub fn default_roster() -> Vec<Doctor> {
        vec![
            Doctor::new(1, "Dr. Evelyn Reed", "Cardiology"),
            Doctor::new(2, "Dr. Marcus Thorne", "Cardiology"),
            Doctor::new(3, "Dr. Lena Petrova", "Neurology"),
            Doctor::new(4, "Dr. Kenji Tanaka", "Neurology"),
            Doctor::new(5, "Dr. Sofia Rossi", "Orthopedics"),
            Doctor::new(6, "Dr. Samuel Chen", "Pediatrics"),
        ]
    }
}
