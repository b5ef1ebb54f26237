//! Policy types.
//!
//! A policy is made of independent sections (`general`, `scope`,
//! `self_service`, `package_configuration`, ...). Every section is optional
//! so a partial policy can be sent on update.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::{
    jss_date, jss_date_utc, xml_list, GeneralCategory, Scope, SelfServiceCategories,
    SelfServiceIcon, Site,
};

jamf_pro_client::string_enum! {
    pub enum Trigger {
        Event => "EVENT",
        UserInitiated => "USER_INITIATED",
    }
}

jamf_pro_client::string_enum! {
    pub enum Frequency {
        OncePerComputer => "Once per computer",
        OncePerUserPerComputer => "Once per user per computer",
        OncePerUser => "Once per user",
        OnceEveryDay => "Once every day",
        OnceEveryWeek => "Once every week",
        OnceEveryMonth => "Once every month",
        Ongoing => "Ongoing",
    }
}

jamf_pro_client::string_enum! {
    pub enum RetryEvent {
        None => "none",
        Trigger => "trigger",
        CheckIn => "check-in",
    }
}

jamf_pro_client::string_enum! {
    pub enum Weekday {
        Sun => "Sun",
        Mon => "Mon",
        Tue => "Tue",
        Wed => "Wed",
        Thu => "Thu",
        Fri => "Fri",
        Sat => "Sat",
    }
}

jamf_pro_client::string_enum! {
    pub enum MinimumNetworkConnection {
        NoMinimum => "No Minimum",
        Ethernet => "Ethernet",
    }
}

jamf_pro_client::string_enum! {
    pub enum NetworkRequirements {
        Any => "Any",
        Ethernet => "Ethernet",
    }
}

jamf_pro_client::string_enum! {
    /// Where the policy's Self Service notification is shown.
    pub enum NotificationType {
        SelfService => "Self Service",
        SelfServiceAndNotificationCenter => "Self Service and Notification Center",
    }
}

jamf_pro_client::string_enum! {
    pub enum PackageAction {
        Install => "Install",
        Cache => "Cache",
        InstallCached => "Install Cached",
    }
}

jamf_pro_client::string_enum! {
    pub enum ScriptPriority {
        Before => "Before",
        After => "After",
    }
}

jamf_pro_client::string_enum! {
    pub enum PrinterAction {
        Install => "install",
        Uninstall => "uninstall",
    }
}

jamf_pro_client::string_enum! {
    pub enum DockItemAction {
        AddToBeginning => "Add To Beginning",
        AddToEnd => "Add To End",
        Remove => "Remove",
    }
}

jamf_pro_client::string_enum! {
    pub enum AccountAction {
        Create => "Create",
        Reset => "Reset",
        Delete => "Delete",
        DisableFileVault => "DisableFileVault",
    }
}

jamf_pro_client::string_enum! {
    pub enum ManagementAccountAction {
        DoNotChange => "doNotChange",
        Specified => "specified",
        Random => "random",
        Reset => "reset",
        ResetRandom => "resetRandom",
        FileVaultEnable => "fileVaultEnable",
        FileVaultDisable => "fileVaultDisable",
    }
}

jamf_pro_client::string_enum! {
    pub enum OpenFirmwareMode {
        Command => "command",
        None => "none",
    }
}

jamf_pro_client::string_enum! {
    pub enum NoUserLoggedIn {
        DoNotRestart => "Do not restart",
        RestartImmediately => "Restart immediately",
        RestartIfRequired => "Restart if a package or update requires it",
    }
}

jamf_pro_client::string_enum! {
    pub enum UserLoggedIn {
        DoNotRestart => "Do not restart",
        Restart => "Restart",
        RestartImmediately => "Restart immediately",
        RestartIfRequired => "Restart if a package or update requires it",
    }
}

jamf_pro_client::string_enum! {
    pub enum DiskEncryptionAction {
        None => "none",
        Apply => "apply",
        Remediate => "remediate",
    }
}

jamf_pro_client::string_enum! {
    pub enum RemediateKeyType {
        Individual => "Individual",
        Institutional => "Institutional",
        IndividualAndInstitutional => "Individual And Institutional",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Policy {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub general: Option<PolicyGeneral>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<Scope>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub self_service: Option<PolicySelfService>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_configuration: Option<PackageConfiguration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scripts: Option<PolicyScripts>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub printers: Option<PolicyPrinters>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dock_items: Option<DockItems>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_maintenance: Option<AccountMaintenance>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reboot: Option<Reboot>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maintenance: Option<Maintenance>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub files_processes: Option<FilesProcesses>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_interaction: Option<UserInteraction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disk_encryption: Option<DiskEncryption>,
}

impl Policy {
    /// A policy with only a name set.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            general: Some(PolicyGeneral {
                name: Some(name.into()),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    /// The policy id from the `general` section.
    pub fn id(&self) -> Option<i32> {
        self.general.as_ref()?.id
    }

    /// The policy name from the `general` section.
    pub fn name(&self) -> Option<&str> {
        self.general.as_ref()?.name.as_deref()
    }
}

// ============================================================================
// General
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PolicyGeneral {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger: Option<Trigger>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger_checkin: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger_enrollment_complete: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger_login: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger_network_state_changed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger_startup: Option<bool>,
    /// Custom event name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger_other: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<Frequency>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retry_event: Option<RetryEvent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retry_attempts: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notify_on_each_failed_retry: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_user_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_drive: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offline: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<GeneralCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_time_limitations: Option<DateTimeLimitations>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_limitations: Option<NetworkLimitations>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub override_default_settings: Option<OverrideDefaultSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_requirements: Option<NetworkRequirements>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site: Option<Site>,
}

xml_list!(NoExecuteOn, "day", Weekday);

/// Activation window and blackout times.
///
/// `activation_date` is server-local time, `activation_date_utc` the same
/// instant in UTC; the server accepts either.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DateTimeLimitations {
    #[serde(default, skip_serializing_if = "Option::is_none", with = "jss_date")]
    pub activation_date: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activation_date_epoch: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "jss_date_utc")]
    pub activation_date_utc: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "jss_date")]
    pub expiration_date: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_date_epoch: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "jss_date_utc")]
    pub expiration_date_utc: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_execute_on: Option<NoExecuteOn>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_execute_start: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_execute_end: Option<String>,
}

impl DateTimeLimitations {
    /// Limit the policy to the window `[from, until)`, both given in UTC.
    pub fn between(from: DateTime<Utc>, until: DateTime<Utc>) -> Self {
        Self {
            activation_date_utc: Some(from),
            expiration_date_utc: Some(until),
            ..Default::default()
        }
    }

    /// The activation instant, from the epoch-millis field if present.
    pub fn activation(&self) -> Option<DateTime<Utc>> {
        self.activation_date_utc
            .or_else(|| DateTime::from_timestamp_millis(self.activation_date_epoch?))
    }

    /// The expiration instant, from the epoch-millis field if present.
    pub fn expiration(&self) -> Option<DateTime<Utc>> {
        self.expiration_date_utc
            .or_else(|| DateTime::from_timestamp_millis(self.expiration_date_epoch?))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkLimitations {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_network_connection: Option<MinimumNetworkConnection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub any_ip_address: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OverrideDefaultSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_drive: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distribution_point: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force_afp_smb: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sus: Option<String>,
}

// ============================================================================
// Self Service
// ============================================================================

/// Self Service settings.
///
/// The server encodes the notification settings as two consecutive
/// `<notification>` elements: the enabled flag, then the type. Use
/// [`notification_enabled`](Self::notification_enabled),
/// [`notification_type`](Self::notification_type) and
/// [`set_notification`](Self::set_notification) rather than the raw field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PolicySelfService {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_for_self_service: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub self_service_display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub install_button_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reinstall_button_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub self_service_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force_users_to_view_description: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub self_service_icon: Option<SelfServiceIcon>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feature_on_main_page: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub self_service_categories: Option<SelfServiceCategories>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notification: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_message: Option<String>,
}

impl PolicySelfService {
    /// Whether the Self Service notification is enabled.
    pub fn notification_enabled(&self) -> Option<bool> {
        match self.notification.as_slice() {
            [enabled, _] => enabled.trim().parse().ok(),
            _ => None,
        }
    }

    /// Where the notification is shown.
    pub fn notification_type(&self) -> Option<NotificationType> {
        match self.notification.as_slice() {
            [_, kind] => kind.parse().ok(),
            _ => None,
        }
    }

    /// Set both notification values.
    pub fn set_notification(&mut self, enabled: bool, kind: NotificationType) {
        self.notification = vec![enabled.to_string(), kind.to_string()];
    }
}

// ============================================================================
// Payloads
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PackageConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub packages: Option<PolicyPackages>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distribution_point: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PolicyPackages {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<i32>,
    #[serde(default)]
    pub package: Vec<PolicyPackage>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PolicyPackage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<PackageAction>,
    /// Fill user templates.
    #[serde(rename = "fut", skip_serializing_if = "Option::is_none")]
    pub fill_user_templates: Option<bool>,
    /// Fill existing user home directories.
    #[serde(rename = "feu", skip_serializing_if = "Option::is_none")]
    pub fill_existing_users: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PolicyScripts {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<i32>,
    #[serde(default)]
    pub script: Vec<PolicyScript>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PolicyScript {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<ScriptPriority>,
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
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PolicyPrinters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leave_existing_default: Option<String>,
    #[serde(default)]
    pub printer: Vec<PolicyPrinter>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PolicyPrinter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<PrinterAction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub make_default: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DockItems {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<i32>,
    #[serde(default)]
    pub dock_item: Vec<DockItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DockItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<DockItemAction>,
}

// ============================================================================
// Account maintenance
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountMaintenance {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accounts: Option<Accounts>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directory_bindings: Option<DirectoryBindings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub management_account: Option<ManagementAccount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_firmware_efi_password: Option<OpenFirmwareEfiPassword>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Accounts {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<i32>,
    #[serde(default)]
    pub account: Vec<Account>,
}

/// A local account created, reset or deleted by the policy.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Account {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<AccountAction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub realname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archive_home_directory: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archive_home_directory_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub home: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin: Option<bool>,
    #[serde(rename = "filevault_enabled", skip_serializing_if = "Option::is_none")]
    pub file_vault_enabled: Option<bool>,
}

impl std::fmt::Debug for Account {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Account")
            .field("action", &self.action)
            .field("username", &self.username)
            .field("realname", &self.realname)
            .field("password", &self.password.as_ref().map(|_| "[REDACTED]"))
            .field("admin", &self.admin)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DirectoryBindings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<i32>,
    #[serde(default)]
    pub binding: Vec<DirectoryBinding>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DirectoryBinding {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ManagementAccount {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<ManagementAccountAction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub managed_password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub managed_password_length: Option<i32>,
}

impl std::fmt::Debug for ManagementAccount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ManagementAccount")
            .field("action", &self.action)
            .field(
                "managed_password",
                &self.managed_password.as_ref().map(|_| "[REDACTED]"),
            )
            .field("managed_password_length", &self.managed_password_length)
            .finish()
    }
}

#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OpenFirmwareEfiPassword {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub of_mode: Option<OpenFirmwareMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub of_password: Option<String>,
}

impl std::fmt::Debug for OpenFirmwareEfiPassword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenFirmwareEfiPassword")
            .field("of_mode", &self.of_mode)
            .field("of_password", &self.of_password.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

// ============================================================================
// Restart, maintenance, files and processes
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Reboot {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub startup_disk: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specify_startup: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_user_logged_in: Option<NoUserLoggedIn>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_logged_in: Option<UserLoggedIn>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minutes_until_reboot: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_reboot_timer_immediately: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_vault_2_reboot: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Maintenance {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recon: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reset_name: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub install_all_cached_packages: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heal: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prebindings: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub byhost: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_cache: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_cache: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verify: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilesProcesses {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_by_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete_file: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locate_file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_locate_database: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spotlight_search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_for_process: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kill_process: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_command: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserInteraction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_start: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_users_to_defer: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "jss_date_utc")]
    pub allow_deferral_until_utc: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_deferral_minutes: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_finish: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiskEncryption {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<DiskEncryptionAction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disk_encryption_configuration_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_restart: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remediate_key_type: Option<RemediateKeyType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remediate_disk_encryption_configuration_id: Option<i32>,
}

// ============================================================================
// Listing
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PolicySummary {
    pub id: Option<i32>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PolicyList {
    pub size: Option<i32>,
    #[serde(rename = "policy", default)]
    pub policies: Vec<PolicySummary>,
}
