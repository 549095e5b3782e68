//! Destination notes and custom note types.

use super::DeviceType;
use serde::{Deserialize, Serialize};

/// Note type used when none is given.
pub const DEFAULT_NOTE_TYPE: &str = "unclassified";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddressNote {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note_id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route_destination_id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upload_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ts_added: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lng: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contents: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upload_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upload_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upload_extension: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_type: Option<String>,
}

/// Query parameters identifying the destination a note belongs to.
///
/// `activity_type` is not a query parameter; it becomes the note's update
/// type in the form body.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NoteParameters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_id: Option<i64>,

    #[serde(rename = "dev_lat", skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,

    #[serde(rename = "dev_lng", skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_type: Option<DeviceType>,

    #[serde(skip)]
    pub activity_type: Option<String>,
}

impl NoteParameters {
    pub(crate) fn update_type(&self) -> &str {
        self.activity_type
            .as_deref()
            .filter(|t| !t.is_empty())
            .unwrap_or(DEFAULT_NOTE_TYPE)
    }
}

/// An account-level note type with its allowed values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomNoteType {
    #[serde(default)]
    pub note_custom_type_id: i64,

    #[serde(default)]
    pub note_custom_type: String,

    #[serde(default)]
    pub root_owner_member_id: i64,

    #[serde(default)]
    pub note_custom_type_values: Vec<String>,
}

/// Body of the custom note type creation call.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct NewCustomNoteType<'a> {
    #[serde(rename = "type")]
    pub note_type: &'a str,
    pub values: &'a [String],
}
