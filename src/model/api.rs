use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ErrorDto {
    pub error: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<FieldErrorDto>,
}

/// One rejected input field and why it was rejected.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FieldErrorDto {
    pub field: String,
    pub reason: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GreetingDto {
    pub message: String,
    pub version: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct HealthDto {
    pub status: String,
}
