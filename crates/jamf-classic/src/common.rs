//! Types shared by several classic resources.

use serde::{Deserialize, Serialize};

/// Declares a wrapper element holding repeated child elements, such as
/// `<computers><computer>..</computer><computer>..</computer></computers>`.
macro_rules! xml_list {
    ($(#[$meta:meta])* $name:ident, $tag:literal, $item:ty) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
        pub struct $name {
            #[serde(rename = $tag, default)]
            pub items: Vec<$item>,
        }

        impl From<Vec<$item>> for $name {
            fn from(items: Vec<$item>) -> Self {
                Self { items }
            }
        }
    };
}

pub(crate) use xml_list;

/// Body returned by every classic create call: `<root><id>N</id></root>`.
#[derive(Debug, Deserialize)]
pub(crate) struct CreatedId {
    pub id: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Site {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Building {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Department {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Category assigned in a resource's `general` section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeneralCategory {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Category a resource is listed under in Self Service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SelfServiceCategory {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_in: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feature_in: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SelfServiceIcon {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
}

xml_list!(SelfServiceCategories, "category", SelfServiceCategory);

// ============================================================================
// Scope
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScopeComputer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub udid: Option<String>,
}

/// A scope target identified by id and name (computer groups, network
/// segments, iBeacons).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScopeItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScopeUser {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScopeUserGroup {
    // Policies report this as free text rather than a number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

xml_list!(ScopeComputers, "computer", ScopeComputer);
xml_list!(ScopeComputerGroups, "computer_group", ScopeItem);
xml_list!(Buildings, "building", Building);
xml_list!(Departments, "department", Department);
xml_list!(ScopeUsers, "user", ScopeUser);
xml_list!(ScopeUserGroups, "user_group", ScopeUserGroup);
xml_list!(NetworkSegments, "network_segment", ScopeItem);
xml_list!(Ibeacons, "ibeacon", ScopeItem);

/// Targets of a policy or configuration profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scope {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub all_computers: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub all_jss_users: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub computers: Option<ScopeComputers>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub computer_groups: Option<ScopeComputerGroups>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buildings: Option<Buildings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub departments: Option<Departments>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jss_users: Option<ScopeUsers>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jss_user_groups: Option<ScopeUserGroups>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limitations: Option<ScopeLimitations>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclusions: Option<ScopeExclusions>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScopeLimitations {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub users: Option<ScopeUsers>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_groups: Option<ScopeUserGroups>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_segments: Option<NetworkSegments>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ibeacons: Option<Ibeacons>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScopeExclusions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub computers: Option<ScopeComputers>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub computer_groups: Option<ScopeComputerGroups>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buildings: Option<Buildings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub departments: Option<Departments>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub users: Option<ScopeUsers>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_groups: Option<ScopeUserGroups>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jss_users: Option<ScopeUsers>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jss_user_groups: Option<ScopeUserGroups>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_segments: Option<NetworkSegments>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ibeacons: Option<Ibeacons>,
}

// ============================================================================
// Date formats
// ============================================================================

/// Local timestamps such as `2023-01-01 14:00:00`.
pub(crate) mod jss_date {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    pub fn serialize<S: Serializer>(
        value: &Option<NaiveDateTime>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(value) => serializer.serialize_str(&value.format(FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveDateTime>, D::Error> {
        let value = Option::<String>::deserialize(deserializer)?;
        match value.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(s) => NaiveDateTime::parse_from_str(s, FORMAT)
                .map(Some)
                .map_err(serde::de::Error::custom),
        }
    }
}

/// UTC timestamps such as `2023-01-01T14:00:00.000+0000`.
pub(crate) mod jss_date_utc {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f%z";

    pub fn serialize<S: Serializer>(
        value: &Option<DateTime<Utc>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(value) => serializer.serialize_str(&value.format(FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<DateTime<Utc>>, D::Error> {
        let value = Option::<String>::deserialize(deserializer)?;
        match value.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(s) => DateTime::parse_from_str(s, FORMAT)
                .map(|parsed| Some(parsed.with_timezone(&Utc)))
                .map_err(serde::de::Error::custom),
        }
    }
}
