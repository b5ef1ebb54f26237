use tracing::instrument;

use crate::computer_extension_attributes::{
    ComputerExtensionAttribute, ComputerExtensionAttributeList,
};
use crate::error::{Error, Result};

const PATH: &str = "/computerextensionattributes";
const ROOT: &str = "computer_extension_attribute";

fn validate(attribute: &ComputerExtensionAttribute) -> Result<()> {
    if attribute.name.as_deref().is_none_or(str::is_empty) {
        return Err(Error::validation(
            "cannot create computer extension attribute without a name",
        ));
    }
    Ok(())
}

impl super::ClassicClient {
    /// Create a computer extension attribute and return its id.
    #[instrument(skip(self, attribute))]
    pub async fn create_computer_extension_attribute(
        &self,
        attribute: &ComputerExtensionAttribute,
    ) -> Result<i32> {
        validate(attribute)?;
        self.create_resource("ComputerExtensionAttributes.create", PATH, ROOT, attribute)
            .await
    }

    #[instrument(skip(self))]
    pub async fn get_computer_extension_attribute(
        &self,
        id: i32,
    ) -> Result<ComputerExtensionAttribute> {
        self.get_resource("ComputerExtensionAttributes.get", PATH, id)
            .await
    }

    #[instrument(skip(self))]
    pub async fn list_computer_extension_attributes(
        &self,
    ) -> Result<ComputerExtensionAttributeList> {
        self.list_resources("ComputerExtensionAttributes.list", PATH)
            .await
    }

    #[instrument(skip(self, attribute), fields(id = ?attribute.id))]
    pub async fn update_computer_extension_attribute(
        &self,
        attribute: &ComputerExtensionAttribute,
    ) -> Result<()> {
        let id = super::require_id(attribute.id, "computer extension attribute")?;
        validate(attribute)?;
        self.update_resource(
            "ComputerExtensionAttributes.update",
            PATH,
            ROOT,
            id,
            attribute,
        )
        .await
    }

    #[instrument(skip(self))]
    pub async fn delete_computer_extension_attribute(&self, id: i32) -> Result<()> {
        self.delete_resource("ComputerExtensionAttributes.delete", PATH, id)
            .await
    }
}
