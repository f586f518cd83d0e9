//! User lookup models

use gong_core::wire::WireRecord;
use serde::{Deserialize, Serialize};

/// Recording and import settings for a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSettings {
    pub emails_imported: bool,
    pub gong_connect_enabled: bool,
    pub non_recorded_meetings_imported: bool,
    pub prevent_email_import: bool,
    pub prevent_web_conference_recording: bool,
    pub telephony_calls_imported: bool,
    pub web_conferences_recorded: bool,
}

impl WireRecord for UserSettings {}

/// A language the user speaks on calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpokenLanguage {
    pub language: String,
    pub primary: bool,
}

impl WireRecord for SpokenLanguage {}

/// A Gong user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Gong's unique identifier for the user
    pub id: String,

    /// Whether the user is active
    pub active: bool,

    /// Creation time of the user record
    pub created: String,

    pub email_address: String,
    pub email_aliases: Vec<String>,
    pub extension: String,
    pub first_name: String,
    pub last_name: String,
    pub manager_id: String,
    pub meeting_consent_page_url: String,
    pub personal_meeting_urls: Vec<String>,
    pub phone_number: String,
    pub settings: UserSettings,
    pub spoken_languages: Vec<SpokenLanguage>,
    pub title: String,
    pub trusted_email_address: String,
}

impl WireRecord for User {}

/// Response shape of `GET /v2/users/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserResponse {
    pub request_id: String,
    pub user: User,
}

impl WireRecord for UserResponse {}
