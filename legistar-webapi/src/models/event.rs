use serde::{Deserialize, Serialize};

/// A calendar event: one meeting of a legislative body
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Event {
    #[serde(rename = "EventId")]
    pub event_id: i64,
    #[serde(rename = "EventGuid")]
    pub event_guid: Option<String>,
    #[serde(rename = "EventLastModifiedUtc")]
    pub event_last_modified_utc: Option<String>,
    #[serde(rename = "EventBodyId")]
    pub event_body_id: Option<i64>,
    #[serde(rename = "EventBodyName")]
    pub event_body_name: Option<String>,
    #[serde(rename = "EventDate")]
    pub event_date: Option<String>,
    #[serde(rename = "EventTime")]
    pub event_time: Option<String>,
    #[serde(rename = "EventLocation")]
    pub event_location: Option<String>,
    #[serde(rename = "EventAgendaFile")]
    pub event_agenda_file: Option<String>,
    #[serde(rename = "EventMinutesFile")]
    pub event_minutes_file: Option<String>,
    #[serde(rename = "EventComment")]
    pub event_comment: Option<String>,
}
