use tracing::instrument;

use crate::error::{Error, Result};
use crate::osx_configuration_profiles::{OsxConfigurationProfile, OsxConfigurationProfileList};

const PATH: &str = "/osxconfigurationprofiles";
const ROOT: &str = "os_x_configuration_profile";

fn validate(profile: &OsxConfigurationProfile) -> Result<()> {
    if profile.name().is_none_or(str::is_empty) {
        return Err(Error::validation(
            "cannot create macOS configuration profile without a name",
        ));
    }
    Ok(())
}

impl super::ClassicClient {
    /// Create a macOS configuration profile and return its id.
    #[instrument(skip(self, profile))]
    pub async fn create_osx_configuration_profile(
        &self,
        profile: &OsxConfigurationProfile,
    ) -> Result<i32> {
        validate(profile)?;
        self.create_resource("OsxConfigurationProfiles.create", PATH, ROOT, profile)
            .await
    }

    #[instrument(skip(self))]
    pub async fn get_osx_configuration_profile(&self, id: i32) -> Result<OsxConfigurationProfile> {
        self.get_resource("OsxConfigurationProfiles.get", PATH, id)
            .await
    }

    #[instrument(skip(self))]
    pub async fn list_osx_configuration_profiles(&self) -> Result<OsxConfigurationProfileList> {
        self.list_resources("OsxConfigurationProfiles.list", PATH)
            .await
    }

    /// Replace a profile. The id is taken from `general.id`.
    #[instrument(skip(self, profile), fields(id = ?profile.id()))]
    pub async fn update_osx_configuration_profile(
        &self,
        profile: &OsxConfigurationProfile,
    ) -> Result<()> {
        let id = super::require_id(profile.id(), "macOS configuration profile")?;
        validate(profile)?;
        self.update_resource("OsxConfigurationProfiles.update", PATH, ROOT, id, profile)
            .await
    }

    #[instrument(skip(self))]
    pub async fn delete_osx_configuration_profile(&self, id: i32) -> Result<()> {
        self.delete_resource("OsxConfigurationProfiles.delete", PATH, id)
            .await
    }
}
