//! Package types.

use serde::{Deserialize, Serialize};

jamf_pro_client::string_enum! {
    pub enum RequiredProcessor {
        None => "None",
        Ppc => "ppc",
        X86 => "x86",
    }
}

/// A package record. The file itself is uploaded separately, see the
/// distribution file upload of the session-based client.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Package {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reboot_required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_user_template: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_existing_users: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_uninstalled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub os_requirements: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_processor: Option<RequiredProcessor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub switch_with_package: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub install_if_reported_available: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reinstall_option: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub triggering_files: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_notification: Option<bool>,
}

impl Package {
    pub fn new(name: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            filename: Some(filename.into()),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PackageSummary {
    pub id: Option<i32>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PackageList {
    pub size: Option<i32>,
    #[serde(rename = "package", default)]
    pub packages: Vec<PackageSummary>,
}
