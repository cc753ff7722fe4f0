use serde::{Deserialize, Serialize};

/// A legislative body: a council, committee, commission, or board
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Body {
    #[serde(rename = "BodyId")]
    pub body_id: i64,
    #[serde(rename = "BodyGuid")]
    pub body_guid: Option<String>,
    #[serde(rename = "BodyLastModifiedUtc")]
    pub body_last_modified_utc: Option<String>,
    #[serde(rename = "BodyName")]
    pub body_name: Option<String>,
    #[serde(rename = "BodyTypeId")]
    pub body_type_id: Option<i64>,
    #[serde(rename = "BodyTypeName")]
    pub body_type_name: Option<String>,
    #[serde(rename = "BodyDescription")]
    pub body_description: Option<String>,
    #[serde(rename = "BodyActiveFlag")]
    pub body_active_flag: Option<i64>,
}
