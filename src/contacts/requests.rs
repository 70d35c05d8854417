use serde::{Deserialize, Serialize};

/// Payload for both creating a contact and replacing an existing one.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveContactRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
}
