use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,                // Unique ID for the account
    pub username: String,          // Display name shown in the header
    pub email: String,             // Login identity, unique across accounts
    pub created_at: DateTime<Utc>, // Signup time
}
