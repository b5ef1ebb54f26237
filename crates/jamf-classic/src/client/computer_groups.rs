use tracing::instrument;

use crate::computer_groups::{ComputerGroup, ComputerGroupList};
use crate::error::{Error, Result};

const PATH: &str = "/computergroups";
const ROOT: &str = "computer_group";

fn validate(group: &ComputerGroup) -> Result<()> {
    if group.name.as_deref().is_none_or(str::is_empty) {
        return Err(Error::validation("cannot create computer group without a name"));
    }
    if group.is_smart.is_none() {
        return Err(Error::validation(
            "cannot create computer group without is_smart",
        ));
    }
    Ok(())
}

impl super::ClassicClient {
    /// Create a computer group and return its id.
    #[instrument(skip(self, group))]
    pub async fn create_computer_group(&self, group: &ComputerGroup) -> Result<i32> {
        validate(group)?;
        self.create_resource("ComputerGroups.create", PATH, ROOT, group)
            .await
    }

    /// Get a computer group by id.
    #[instrument(skip(self))]
    pub async fn get_computer_group(&self, id: i32) -> Result<ComputerGroup> {
        self.get_resource("ComputerGroups.get", PATH, id).await
    }

    /// List all computer groups.
    #[instrument(skip(self))]
    pub async fn list_computer_groups(&self) -> Result<ComputerGroupList> {
        self.list_resources("ComputerGroups.list", PATH).await
    }

    /// Replace a computer group. `group.id` selects the record.
    #[instrument(skip(self, group), fields(id = ?group.id))]
    pub async fn update_computer_group(&self, group: &ComputerGroup) -> Result<()> {
        let id = super::require_id(group.id, "computer group")?;
        validate(group)?;
        self.update_resource("ComputerGroups.update", PATH, ROOT, id, group)
            .await
    }

    /// Delete a computer group by id.
    #[instrument(skip(self))]
    pub async fn delete_computer_group(&self, id: i32) -> Result<()> {
        self.delete_resource("ComputerGroups.delete", PATH, id).await
    }
}
