//! Computer group types.

use serde::{Deserialize, Serialize};

use crate::common::Site;

jamf_pro_client::string_enum! {
    /// How a criterion joins the one before it.
    pub enum AndOr {
        And => "and",
        Or => "or",
    }
}

jamf_pro_client::string_enum! {
    /// Comparison used by a smart group criterion.
    pub enum SearchType {
        Is => "is",
        IsNot => "is not",
        Has => "has",
        DoesNotHave => "does not have",
        Before => "before (yyyy-mm-dd)",
        After => "after (yyyy-mm-dd)",
        MoreThanXDaysAgo => "more than x days ago",
        LessThanXDaysAgo => "less than x days ago",
        Like => "like",
        NotLike => "not like",
        GreaterThan => "greater than",
        LessThan => "less than",
        GreaterThanOrEqual => "greater than or equal",
        LessThanOrEqual => "less than or equal",
        MatchesRegex => "matches regex",
        DoesNotMatchRegex => "does not match regex",
    }
}

/// A static or smart computer group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComputerGroup {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_smart: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site: Option<Site>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub criteria: Option<ComputerGroupCriteria>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub computers: Option<ComputerGroupComputers>,
}

impl ComputerGroup {
    /// A static group with the given name.
    pub fn new_static(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            is_smart: Some(false),
            ..Default::default()
        }
    }

    /// A smart group with the given name and criteria.
    pub fn new_smart(name: impl Into<String>, criteria: Vec<Criterion>) -> Self {
        Self {
            name: Some(name.into()),
            is_smart: Some(true),
            criteria: Some(ComputerGroupCriteria {
                size: Some(criteria.len() as i32),
                criterion: criteria,
            }),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComputerGroupCriteria {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<i32>,
    #[serde(default)]
    pub criterion: Vec<Criterion>,
}

/// One smart group rule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Criterion {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub and_or: Option<AndOr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_type: Option<SearchType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opening_paren: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closing_paren: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComputerGroupComputers {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<i32>,
    #[serde(default)]
    pub computer: Vec<ComputerGroupComputer>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComputerGroupComputer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mac_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt_mac_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
}

/// Entry of the computer group listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComputerGroupSummary {
    pub id: Option<i32>,
    pub name: Option<String>,
    pub is_smart: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComputerGroupList {
    pub size: Option<i32>,
    #[serde(rename = "computer_group", default)]
    pub computer_groups: Vec<ComputerGroupSummary>,
}
