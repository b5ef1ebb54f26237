//! Computer extension attribute types.

use serde::{Deserialize, Serialize};

jamf_pro_client::string_enum! {
    pub enum DataType {
        String => "String",
        Integer => "Integer",
        Date => "Date",
    }
}

jamf_pro_client::string_enum! {
    /// How the attribute value is collected.
    pub enum InputKind {
        Script => "script",
        TextField => "Text Field",
        PopupMenu => "Pop-up Menu",
    }
}

jamf_pro_client::string_enum! {
    pub enum Platform {
        Mac => "Mac",
    }
}

jamf_pro_client::string_enum! {
    /// Inventory tab the attribute is shown on.
    pub enum InventoryDisplay {
        General => "General",
        Hardware => "Hardware",
        OperatingSystem => "Operating System",
        UserAndLocation => "User and Location",
        Purchasing => "Purchasing",
        ExtensionAttributes => "Extension Attributes",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComputerExtensionAttribute {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_type: Option<DataType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_type: Option<InputType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory_display: Option<InventoryDisplay>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InputType {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<InputKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<Platform>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub popup_choices: Option<PopupChoices>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub script: Option<String>,
}

impl InputType {
    /// A script-based input for macOS.
    pub fn script(script: impl Into<String>) -> Self {
        Self {
            kind: Some(InputKind::Script),
            platform: Some(Platform::Mac),
            script: Some(script.into()),
            ..Default::default()
        }
    }

    /// A pop-up menu offering `choices`.
    pub fn popup_menu<I, S>(choices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            kind: Some(InputKind::PopupMenu),
            popup_choices: Some(PopupChoices {
                choice: choices.into_iter().map(Into::into).collect(),
            }),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PopupChoices {
    #[serde(default)]
    pub choice: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComputerExtensionAttributeSummary {
    pub id: Option<i32>,
    pub name: Option<String>,
    pub enabled: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComputerExtensionAttributeList {
    pub size: Option<i32>,
    #[serde(rename = "computer_extension_attribute", default)]
    pub computer_extension_attributes: Vec<ComputerExtensionAttributeSummary>,
}
