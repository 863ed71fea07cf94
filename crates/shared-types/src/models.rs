use serde::{Deserialize, Serialize};

/// Profile data shown in the dynamic dashboard header.
///
/// All fields are optional; the backend omits what the account never filled in.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    #[serde(default)]
    pub prenom: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub background_image_url: Option<String>,
}

impl Profile {
    /// First name with surrounding whitespace removed, if non-empty.
    pub fn first_name(&self) -> Option<&str> {
        self.prenom
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// Header greeting, e.g. "Hello Awa".
    pub fn greeting(&self) -> String {
        match self.first_name() {
            Some(name) => format!("Hello {name}"),
            None => "Hello".to_string(),
        }
    }
}

/// Current state of the platform-wide maintenance switch.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceStatus {
    #[serde(default)]
    pub maintenance_mode: bool,
}

/// Body returned by `PUT /settings/maintenance`.
///
/// Older backend builds only answer with a message, so the flag is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceUpdateResponse {
    #[serde(default)]
    pub maintenance_mode: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Response to a login attempt.
///
/// The backend either hands back a token directly or asks for a one-time
/// code first, in which case `otp_required` is set and `token` is absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub otp_required: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Response to a successful OTP verification.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct VerifyOtpResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Generic acknowledgement body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}
