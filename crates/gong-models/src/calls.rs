//! Call listing, extensive call details, and transcript models
//!
//! Request types (`CallFilter`, `CallDetailsRequest`, `TranscriptFilter`,
//! and the content-selector family) all have full defaults, so a caller
//! sets only the fields it cares about and the rest never reach the wire.
//! Response types mirror the shapes returned by `GET /v2/calls`,
//! `POST /v2/calls/extensive`, and `POST /v2/calls/transcript`.

use chrono::{DateTime, Utc};
use gong_core::wire::time::{flex_time, flex_time_option};
use gong_core::wire::WireRecord;
use serde::{Deserialize, Serialize};

use crate::common::Records;

/// Base filter shared by call listing, details, and transcript requests.
///
/// Date bounds accept either an epoch-seconds integer or an ISO-8601
/// string when deserialized, and always serialize as ISO-8601.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CallFilter {
    /// Restrict to these call IDs
    pub call_ids: Option<Vec<String>>,

    /// Earliest call start time to include
    #[serde(default, with = "flex_time_option")]
    pub from_date_time: Option<DateTime<Utc>>,

    /// Restrict to calls hosted by these users
    pub primary_user_ids: Option<Vec<String>>,

    /// Latest call start time to include
    #[serde(default, with = "flex_time_option")]
    pub to_date_time: Option<DateTime<Utc>>,

    /// Restrict to a single workspace
    pub workspace_id: Option<String>,
}

impl WireRecord for CallFilter {}

/// Which content sections to expose in an extensive-details response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExposedFieldsContent {
    pub structure: Option<bool>,
    pub topics: Option<bool>,
    pub trackers: Option<bool>,
    pub tracker_occurences: Option<bool>,
    pub points_of_interest: Option<bool>,
    pub brief: Option<bool>,
    pub outline: Option<bool>,
    pub highlights: Option<bool>,
    pub call_outcome: Option<bool>,
    pub key_points: Option<bool>,
}

impl WireRecord for ExposedFieldsContent {}

/// Which interaction sections to expose in an extensive-details response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExposedFieldsInteraction {
    pub speakers: Option<bool>,
    pub video: Option<bool>,
    pub person_interaction_stats: Option<bool>,
    pub questions: Option<bool>,
}

impl WireRecord for ExposedFieldsInteraction {}

/// Which collaboration sections to expose in an extensive-details response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExposedFieldsCollaboration {
    pub public_comments: Option<bool>,
}

impl WireRecord for ExposedFieldsCollaboration {}

/// Field groups requested from the extensive-details endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExposedFields {
    pub parties: Option<bool>,
    pub content: Option<ExposedFieldsContent>,
    pub interaction: Option<ExposedFieldsInteraction>,
    pub collaboration: Option<ExposedFieldsCollaboration>,
    pub media: Option<bool>,
}

impl WireRecord for ExposedFields {}

/// Content selector for the extensive-details endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentSelector {
    /// Context level: `None`, `Basic`, or `Extended`
    pub context: Option<String>,

    /// Context timing: `Now` or `TimeOfCall`
    pub context_timing: Option<String>,

    /// Field groups to include in the response
    pub exposed_fields: Option<ExposedFields>,
}

impl WireRecord for ContentSelector {}

/// Request body for `POST /v2/calls/transcript`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TranscriptFilter {
    /// Cursor from the previous page's records envelope
    pub cursor: Option<String>,

    /// Call filter to apply
    pub filter: Option<CallFilter>,
}

impl WireRecord for TranscriptFilter {}

/// Request body for `POST /v2/calls/extensive`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CallDetailsRequest {
    /// Cursor from the previous page's records envelope
    pub cursor: Option<String>,

    /// Call filter to apply
    pub filter: Option<CallFilter>,

    /// Which sections of call content to return
    pub content_selector: Option<ContentSelector>,
}

impl WireRecord for CallDetailsRequest {}

/// Metadata for a single recorded call.
///
/// Retains empty fields on serialization: a `Call` converted to a mapping
/// keeps every declared key, so callers see the full shape even when a
/// value is unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Call {
    /// Calendar event this call was scheduled from
    pub calendar_event_id: String,

    /// Gong's unique identifier for the call
    pub id: String,

    /// Identifier assigned by the recording system
    pub client_unique_id: String,

    /// `Inbound`, `Outbound`, `Conference`, or `Unknown`
    pub direction: String,

    /// Call duration in seconds
    pub duration: i64,

    /// Whether the call is private
    pub is_private: bool,

    /// Language code of the call audio
    pub language: String,

    /// `Video` or `Audio`
    pub media: String,

    /// URL of the conference that was recorded
    pub meeting_url: String,

    /// User who hosted the call
    pub primary_user_id: String,

    /// Call purpose, e.g. `Demo`
    pub purpose: String,

    /// When the call was scheduled to start
    #[serde(with = "flex_time")]
    pub scheduled: DateTime<Utc>,

    /// `Internal` or `External`
    pub scope: String,

    /// SDR disposition assigned to the call
    pub sdr_disposition: String,

    /// When the call actually started
    #[serde(with = "flex_time")]
    pub started: DateTime<Utc>,

    /// System the call was recorded on
    pub system: String,

    /// Call title
    pub title: String,

    /// URL of the call page in Gong
    pub url: String,

    /// Workspace the call belongs to
    pub workspace_id: String,

    /// Free-form metadata attached at upload time
    pub custom_data: Option<String>,
}

impl WireRecord for Call {
    const RETAIN_EMPTY: bool = true;
}

/// One field of a CRM context object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallContextField {
    pub name: String,
    pub value: String,
}

impl WireRecord for CallContextField {}

/// A CRM object linked to a call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallContextObject {
    pub fields: Vec<CallContextField>,
    pub object_type: String,
    pub object_id: String,
    pub timing: String,
}

impl WireRecord for CallContextObject {}

/// External system a party's context comes from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallContext {
    pub system: String,
}

impl WireRecord for CallContext {}

/// A participant on a call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallParty {
    /// Unique identifier of the party within the call
    pub id: String,

    /// `Internal`, `External`, or `Unknown`
    pub affiliation: String,

    /// Speaker id used in transcript monologues
    pub speaker_id: String,

    pub context: Option<Vec<CallContext>>,
    pub email_address: Option<String>,
    pub methods: Option<Vec<String>>,
    pub name: Option<String>,
    pub phone_number: Option<String>,
    pub user_id: Option<String>,
    pub title: Option<String>,
}

impl WireRecord for CallParty {}

/// One sentence of a transcript monologue, with millisecond offsets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonologueSentence {
    pub end: i64,
    pub start: i64,
    pub text: String,
}

impl WireRecord for MonologueSentence {}

/// A contiguous stretch of speech by one speaker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Monologue {
    pub sentences: Vec<MonologueSentence>,
    pub speaker_id: String,
    pub topic: String,
}

impl WireRecord for Monologue {}

/// Full transcript of one call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallTranscript {
    pub call_id: String,
    pub transcript: Vec<Monologue>,
}

impl WireRecord for CallTranscript {}

/// Response shape of `GET /v2/calls`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallsResponse {
    pub calls: Vec<Call>,
    pub records: Records,
    pub request_id: String,
}

impl WireRecord for CallsResponse {}

/// Response shape of `POST /v2/calls/transcript`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptResponse {
    pub call_transcripts: Vec<CallTranscript>,
    pub records: Records,
    pub request_id: String,
}

impl WireRecord for TranscriptResponse {}

/// A named item with a duration, used for call structure and topics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallDetailsItem {
    pub duration: i64,
    pub name: String,
}

impl WireRecord for CallDetailsItem {}

/// Where in the call a tracker or phrase fired.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Occurrence {
    pub start_time: f64,
    pub speaker_id: String,
}

impl WireRecord for Occurrence {}

/// A tracked phrase and where it occurred.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Phrase {
    pub count: i64,
    pub occurences: Vec<Occurrence>,
    pub phrase: String,
}

impl WireRecord for Phrase {}

/// A smart tracker hit on the call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tracker {
    pub id: String,
    pub name: String,
    pub count: i64,

    /// `KEYWORD` or `SMART`
    #[serde(rename = "type")]
    pub tracker_type: String,

    pub occurrences: Vec<Occurrence>,
    pub phrases: Vec<Phrase>,
}

impl WireRecord for Tracker {}

/// An action item spotted in the call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionItem {
    pub snippet: String,
    pub snippet_start_time: f64,
    pub snippet_end_time: f64,
    pub speaker_id: String,
}

impl WireRecord for ActionItem {}

/// Points of interest detected in the call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointsOfInterest {
    pub action_items: Vec<ActionItem>,
}

impl WireRecord for PointsOfInterest {}

/// One entry of an outline section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutlineItem {
    pub start_time: f64,
    pub text: String,
}

impl WireRecord for OutlineItem {}

/// A section of the call outline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outline {
    pub duration: f64,
    pub items: Vec<OutlineItem>,
    pub start_time: f64,
    pub section: String,
}

impl WireRecord for Outline {}

/// One highlighted quote and the times it was said.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighlightItem {
    pub start_times: Vec<f64>,
    pub text: String,
}

impl WireRecord for HighlightItem {}

/// A titled group of call highlights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Highlight {
    pub title: String,
    pub items: Vec<HighlightItem>,
}

impl WireRecord for Highlight {}

/// Outcome assigned to the call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallOutcome {
    pub id: String,
    pub category: String,
    pub name: String,
}

impl WireRecord for CallOutcome {}

/// One key point extracted from the call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyPoint {
    pub text: String,
}

impl WireRecord for KeyPoint {}

/// Analyzed content of a call, as requested through the content selector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallDetailsContent {
    pub brief: String,
    pub call_outcome: CallOutcome,
    pub highlights: Vec<Highlight>,
    pub key_points: Vec<KeyPoint>,
    pub outline: Vec<Outline>,
    pub points_of_interest: PointsOfInterest,
    pub structure: Vec<CallDetailsItem>,
    pub topics: Vec<CallDetailsItem>,
    pub trackers: Vec<Tracker>,
}

impl WireRecord for CallDetailsContent {}

/// Talk-time share for one speaker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionSpeaker {
    pub id: String,
    pub talk_time: String,
    pub user_id: String,
}

impl WireRecord for InteractionSpeaker {}

/// A single named interaction measurement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionStat {
    pub name: String,
    pub value: i64,
}

impl WireRecord for InteractionStat {}

/// Screen-share or video segment timing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionVideo {
    pub name: String,
    pub duration: f64,
}

impl WireRecord for InteractionVideo {}

/// Question counts by company side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionQuestions {
    pub company_count: i64,
    pub non_company_count: i64,
}

impl WireRecord for InteractionQuestions {}

/// Interaction statistics for a call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interaction {
    pub speakers: Vec<InteractionSpeaker>,
    pub interaction_stats: Vec<InteractionStat>,
    pub video: Vec<InteractionVideo>,
    pub questions: InteractionQuestions,
}

impl WireRecord for Interaction {}

/// A comment left on the call page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublicComment {
    pub id: String,
    pub audio_start_time: f64,
    pub audio_end_time: f64,
    pub commenter_user_id: String,
    pub comment: String,
    pub during_call: bool,
    pub in_reply_to: String,

    #[serde(with = "flex_time")]
    pub posted: DateTime<Utc>,
}

impl WireRecord for PublicComment {}

/// Collaboration activity on a call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collaboration {
    pub public_comments: Vec<PublicComment>,
}

impl WireRecord for Collaboration {}

/// Download URLs for the call recording.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Media {
    pub audio: String,
    pub video: String,
}

impl WireRecord for Media {}

/// One call in an extensive-details response. Every section is optional;
/// the API returns only what the content selector asked for.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CallDetails {
    pub content: Option<CallDetailsContent>,
    pub context: Option<Vec<CallContextObject>>,
    pub meta_data: Option<Call>,
    pub parties: Option<Vec<CallParty>>,
    pub interaction: Option<Interaction>,
    pub collaboration: Option<Collaboration>,
    pub media: Option<Media>,
}

impl WireRecord for CallDetails {}

/// Response shape of `POST /v2/calls/extensive`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallDetailsResponse {
    pub calls: Vec<CallDetails>,
    pub records: Records,
    pub request_id: String,
}

impl WireRecord for CallDetailsResponse {}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use gong_core::wire::translate;
    use serde_json::{json, Value};

    #[test]
    fn test_workspace_filter_serializes_to_single_wire_key() {
        let filter = CallFilter { workspace_id: Some("w1".into()), ..Default::default() };

        let params = filter.to_map().unwrap();
        let wire = translate::outbound(Value::Object(params));

        assert_eq!(wire, json!({"workspaceId": "w1"}));
    }

    #[test]
    fn test_filter_date_bounds_serialize_as_iso_8601() {
        let filter = CallFilter {
            from_date_time: Some(Utc.with_ymd_and_hms(2023, 5, 1, 0, 0, 0).unwrap()),
            workspace_id: Some("w1".into()),
            ..Default::default()
        };

        let wire = translate::outbound(Value::Object(filter.to_map().unwrap()));

        assert_eq!(wire["fromDateTime"], json!("2023-05-01T00:00:00Z"));
        assert!(wire.get("toDateTime").is_none());
    }

    #[test]
    fn test_details_request_nests_and_drops_unset_fields() {
        let request = CallDetailsRequest {
            filter: Some(CallFilter {
                call_ids: Some(vec!["7782342274025937895".into()]),
                ..Default::default()
            }),
            content_selector: Some(ContentSelector {
                context: Some("Extended".into()),
                exposed_fields: Some(ExposedFields {
                    parties: Some(true),
                    content: Some(ExposedFieldsContent {
                        trackers: Some(true),
                        ..Default::default()
                    }),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            ..Default::default()
        };

        let wire = translate::outbound(Value::Object(request.to_map().unwrap()));

        assert_eq!(
            wire,
            json!({
                "filter": {"callIds": ["7782342274025937895"]},
                "contentSelector": {
                    "context": "Extended",
                    "exposedFields": {
                        "parties": true,
                        "content": {"trackers": true},
                    },
                },
            })
        );
    }

    fn call_wire_json() -> Value {
        json!({
            "calendarEventId": "abc@google.com",
            "id": "7782342274025937895",
            "clientUniqueId": "7JEHFRHICDGBEE2V",
            "direction": "Inbound",
            "duration": 460,
            "isPrivate": false,
            "language": "eng",
            "media": "Video",
            "meetingUrl": "https://zoom.us/j/123",
            "primaryUserId": "234599484848423358",
            "purpose": "Demo",
            "scheduled": "2021-02-17T02:30:00-08:00",
            "scope": "Internal",
            "sdrDisposition": "Got the gatekeeper",
            "started": 1613557800,
            "system": "Outreach",
            "title": "Example call",
            "url": "https://app.gong.io/call?id=7782342274025937895",
            "workspaceId": "623457276584334",
            "customData": "Conference Call",
        })
    }

    #[test]
    fn test_calls_response_hydrates_nested_records() {
        let raw = translate::inbound(json!({
            "calls": [call_wire_json()],
            "records": {
                "currentPageSize": 1,
                "currentPageNumber": 1,
                "totalRecords": 1,
            },
            "requestId": "4al9x9lv5rz1j9j",
        }));

        let response = CallsResponse::from_map(raw).unwrap();

        assert_eq!(response.request_id, "4al9x9lv5rz1j9j");
        assert_eq!(response.records.total_records, 1);

        let call = &response.calls[0];
        assert_eq!(call.id, "7782342274025937895");
        assert_eq!(call.direction, "Inbound");
        // Both timestamp encodings land on the same instant.
        assert_eq!(call.scheduled, call.started);
        assert_eq!(call.scheduled, Utc.with_ymd_and_hms(2021, 2, 17, 10, 30, 0).unwrap());
    }

    #[test]
    fn test_call_to_map_retains_unset_fields() {
        let raw = translate::inbound(call_wire_json());
        let mut call = Call::from_map(raw).unwrap();
        call.custom_data = None;

        let map = call.to_map().unwrap();

        assert!(map.contains_key("custom_data"));
        assert_eq!(map["custom_data"], Value::Null);
        assert_eq!(map["scheduled"], json!("2021-02-17T10:30:00Z"));
    }

    #[test]
    fn test_transcript_response_hydrates_monologues_in_order() {
        let raw = translate::inbound(json!({
            "callTranscripts": [{
                "callId": "7782342274025937895",
                "transcript": [
                    {
                        "speakerId": "6432345678555530067",
                        "topic": "Objections",
                        "sentences": [
                            {"start": 460230, "end": 462343, "text": "No wait, I think we should check that out first."},
                            {"start": 462970, "end": 463331, "text": "Sure."},
                        ],
                    },
                    {
                        "speakerId": "6432345678555530068",
                        "topic": "Pricing",
                        "sentences": [],
                    },
                ],
            }],
            "records": {
                "currentPageSize": 1,
                "currentPageNumber": 1,
                "totalRecords": 1,
            },
            "requestId": "79euwa9vzlm24dd",
        }));

        let response = TranscriptResponse::from_map(raw).unwrap();
        let transcript = &response.call_transcripts[0];

        assert_eq!(transcript.call_id, "7782342274025937895");
        assert_eq!(transcript.transcript.len(), 2);
        assert_eq!(transcript.transcript[0].topic, "Objections");
        assert_eq!(transcript.transcript[0].sentences[1].text, "Sure.");
        assert_eq!(transcript.transcript[1].sentences.len(), 0);
    }

    #[test]
    fn test_details_response_hydrates_requested_sections_only() {
        let raw = translate::inbound(json!({
            "calls": [{
                "metaData": call_wire_json(),
                "parties": [{
                    "id": "56825452554556",
                    "affiliation": "External",
                    "speakerId": "6432345678555530067",
                    "emailAddress": "test@test.com",
                    "methods": ["Invitee"],
                }],
            }],
            "records": {
                "currentPageSize": 1,
                "currentPageNumber": 1,
                "totalRecords": 1,
            },
            "requestId": "2zqcgrtfbe0o45l",
        }));

        let response = CallDetailsResponse::from_map(raw).unwrap();
        let details = &response.calls[0];

        assert!(details.content.is_none());
        assert_eq!(details.meta_data.as_ref().unwrap().purpose, "Demo");

        let party = &details.parties.as_ref().unwrap()[0];
        assert_eq!(party.affiliation, "External");
        assert_eq!(party.methods.as_deref(), Some(&["Invitee".to_string()][..]));
        assert_eq!(party.user_id, None);
    }

    #[test]
    fn test_tracker_type_key_survives_both_directions() {
        let raw = translate::inbound(json!({
            "id": "56825452554556",
            "name": "Competitors",
            "count": 7,
            "type": "KEYWORD",
            "occurrences": [{"startTime": 32.56, "speakerId": "6432345678555530067"}],
            "phrases": [],
        }));

        let tracker = Tracker::from_map(raw).unwrap();
        assert_eq!(tracker.tracker_type, "KEYWORD");

        let map = tracker.to_map().unwrap();
        assert_eq!(map["type"], json!("KEYWORD"));
        assert!(!map.contains_key("phrases"));
    }
}
