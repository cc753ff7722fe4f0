use serde::{Deserialize, Serialize};

/// A matter: a single piece of legislation (bill, resolution, appointment)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Matter {
    #[serde(rename = "MatterId")]
    pub matter_id: i64,
    #[serde(rename = "MatterGuid")]
    pub matter_guid: Option<String>,
    #[serde(rename = "MatterLastModifiedUtc")]
    pub matter_last_modified_utc: Option<String>,
    #[serde(rename = "MatterFile")]
    pub matter_file: Option<String>,
    #[serde(rename = "MatterName")]
    pub matter_name: Option<String>,
    #[serde(rename = "MatterTitle")]
    pub matter_title: Option<String>,
    #[serde(rename = "MatterTypeId")]
    pub matter_type_id: Option<i64>,
    #[serde(rename = "MatterTypeName")]
    pub matter_type_name: Option<String>,
    #[serde(rename = "MatterStatusId")]
    pub matter_status_id: Option<i64>,
    #[serde(rename = "MatterStatusName")]
    pub matter_status_name: Option<String>,
    #[serde(rename = "MatterIntroDate")]
    pub matter_intro_date: Option<String>,
    #[serde(rename = "MatterBodyId")]
    pub matter_body_id: Option<i64>,
    #[serde(rename = "MatterBodyName")]
    pub matter_body_name: Option<String>,
}
