//! macOS configuration profile types.

use serde::{Deserialize, Serialize};

use crate::common::{GeneralCategory, Scope, SelfServiceCategories, Site};

jamf_pro_client::string_enum! {
    pub enum DistributionMethod {
        InstallAutomatically => "Install Automatically",
        MakeAvailableInSelfService => "Make Available in Self Service",
    }
}

jamf_pro_client::string_enum! {
    /// Whether the profile installs for the computer or for the user.
    pub enum ProfileLevel {
        System => "System",
        User => "User",
    }
}

jamf_pro_client::string_enum! {
    pub enum RedeployOnUpdate {
        NewlyAssigned => "Newly Assigned",
        All => "All",
    }
}

jamf_pro_client::string_enum! {
    pub enum RemovalDisallowed {
        Always => "Always",
        Never => "Never",
        WithAuthorization => "With Authorization",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OsxConfigurationProfile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub general: Option<ProfileGeneral>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<Scope>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub self_service: Option<ProfileSelfService>,
}

impl OsxConfigurationProfile {
    /// The profile id from the `general` section.
    pub fn id(&self) -> Option<i32> {
        self.general.as_ref()?.id
    }

    /// The profile name from the `general` section.
    pub fn name(&self) -> Option<&str> {
        self.general.as_ref()?.name.as_deref()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileGeneral {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site: Option<Site>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<GeneralCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distribution_method: Option<DistributionMethod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_removable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<ProfileLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redeploy_on_update: Option<RedeployOnUpdate>,
    /// The profile payload as an (escaped) property list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payloads: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileSelfService {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub self_service_display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub install_button_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub self_service_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force_users_to_view_description: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security: Option<ProfileSecurity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feature_on_main_page: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub self_service_categories: Option<SelfServiceCategories>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileSecurity {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub removal_disallowed: Option<RemovalDisallowed>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OsxConfigurationProfileSummary {
    pub id: Option<i32>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OsxConfigurationProfileList {
    pub size: Option<i32>,
    #[serde(rename = "os_x_configuration_profile", default)]
    pub os_x_configuration_profiles: Vec<OsxConfigurationProfileSummary>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{ScopeComputerGroups, ScopeItem};
    use jamf_pro_client::xml;

    #[test]
    fn test_profile_serialization() {
        let profile = OsxConfigurationProfile {
            general: Some(ProfileGeneral {
                name: Some("Wi-Fi".into()),
                level: Some(ProfileLevel::System),
                distribution_method: Some(DistributionMethod::InstallAutomatically),
                payloads: Some("<plist version=\"1\"/>".into()),
                ..Default::default()
            }),
            scope: Some(Scope {
                all_computers: Some(false),
                computer_groups: Some(ScopeComputerGroups::from(vec![ScopeItem {
                    id: Some(4),
                    name: None,
                }])),
                ..Default::default()
            }),
            self_service: None,
        };

        let body = xml::to_string_with_root("os_x_configuration_profile", &profile).unwrap();
        assert!(body.starts_with("<os_x_configuration_profile><general><name>Wi-Fi</name>"));
        assert!(body.contains("<distribution_method>Install Automatically</distribution_method>"));
        assert!(body.contains("<level>System</level>"));
        assert!(body.contains("<payloads>&lt;plist version="));
        assert!(!body.contains("<plist"));
        assert!(body.contains(
            "<scope><all_computers>false</all_computers><computer_groups><computer_group><id>4</id></computer_group></computer_groups></scope>"
        ));
        assert!(!body.contains("self_service"));
    }

    #[test]
    fn test_profile_deserialization() {
        let source = "<os_x_configuration_profile>\
            <general><id>12</id><name>Dock</name><level>User</level>\
            <redeploy_on_update>Newly Assigned</redeploy_on_update></general>\
            <self_service><security><removal_disallowed>With Authorization</removal_disallowed></security>\
            <self_service_categories><category><id>1</id><name>Apps</name>\
            <display_in>true</display_in><feature_in>false</feature_in></category></self_service_categories>\
            </self_service></os_x_configuration_profile>";

        let profile: OsxConfigurationProfile = xml::from_str(source).unwrap();
        assert_eq!(profile.id(), Some(12));
        assert_eq!(profile.name(), Some("Dock"));
        let general = profile.general.as_ref().unwrap();
        assert_eq!(general.level, Some(ProfileLevel::User));
        assert_eq!(general.redeploy_on_update, Some(RedeployOnUpdate::NewlyAssigned));

        let self_service = profile.self_service.unwrap();
        assert_eq!(
            self_service.security.unwrap().removal_disallowed,
            Some(RemovalDisallowed::WithAuthorization)
        );
        let categories = self_service.self_service_categories.unwrap().items;
        assert_eq!(categories[0].display_in, Some(true));
    }
}
