//! Script types.

use serde::{Deserialize, Serialize};

jamf_pro_client::string_enum! {
    /// When a script runs relative to the rest of the policy.
    pub enum ScriptPriority {
        Before => "BEFORE",
        After => "AFTER",
        AtReboot => "AT_REBOOT",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Script {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<ScriptPriority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameter4: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameter5: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameter6: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameter7: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameter8: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameter9: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameter10: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameter11: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub os_requirements: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub script_contents: Option<String>,
}

impl Script {
    pub fn new(name: impl Into<String>, contents: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            script_contents: Some(contents.into()),
            ..Default::default()
        }
    }
}

/// One page of scripts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptList {
    #[serde(default)]
    pub total_count: Option<i64>,
    #[serde(default)]
    pub results: Vec<Script>,
}
