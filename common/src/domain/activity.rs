use serde::{Deserialize, Serialize};

/// One extracurricular offering. The activity name lives as the catalog key,
/// not inside the record, so the JSON shape is `name -> {details}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    #[serde(default)]
    pub participants: Vec<String>,
}

impl Activity {
    pub fn is_enrolled(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }
}
