use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hospital {
    pub id: i32,
    pub name: String,
    pub address: Option<String>,
    pub phone_number: Option<String>,
}

/// Blank address/phone are stored as NULL, not empty strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewHospital {
    pub name: String,
    pub address: Option<String>,
    pub phone_number: Option<String>,
}
