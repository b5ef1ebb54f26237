use jamf_pro_client::Uri;
use tracing::instrument;

use crate::categories::{Category, CategoryList, DeleteMultiple, HrefResponse};
use crate::error::{Error, Result};
use crate::list::ListOptions;

const PATH: &str = "/v1/categories";

fn require_name_and_priority(category: &Category, action: &str) -> Result<()> {
    if category.name.is_none() {
        return Err(Error::validation(format!(
            "cannot {} category without a name",
            action
        )));
    }
    if category.priority.is_none() {
        return Err(Error::validation(format!(
            "cannot {} category without a priority",
            action
        )));
    }
    Ok(())
}

impl super::JamfProClient {
    /// Create a category and return its id.
    #[instrument(skip(self, category))]
    pub async fn create_category(&self, category: &Category) -> Result<String> {
        require_name_and_priority(category, "create")?;

        let spec = self
            .client
            .post(PATH)
            .json_body(category)
            .map_err(|e| Error::client("Categories.create", e))?
            .valid_status_codes([201]);

        let created: HrefResponse = self.send_json("Categories.create", spec).await?;
        Ok(created.id)
    }

    #[instrument(skip(self))]
    pub async fn get_category(&self, id: &str) -> Result<Category> {
        let spec = self
            .client
            .get(format!("{}/{}", PATH, id))
            .valid_status_codes([200]);
        self.send_json("Categories.get", spec).await
    }

    #[instrument(skip(self))]
    pub async fn list_categories(&self, options: &ListOptions) -> Result<CategoryList> {
        let spec = self
            .client
            .get(Uri::new(PATH).params(options.to_params()))
            .valid_status_codes([200]);
        self.send_json("Categories.list", spec).await
    }

    /// Replace a category and return the server's copy.
    #[instrument(skip(self, category), fields(id = ?category.id))]
    pub async fn update_category(&self, category: &Category) -> Result<Category> {
        let Some(id) = category.id.as_deref() else {
            return Err(Error::validation("cannot update category without an id"));
        };
        require_name_and_priority(category, "update")?;

        let spec = self
            .client
            .put(format!("{}/{}", PATH, id))
            .json_body(category)
            .map_err(|e| Error::client("Categories.update", e))?
            .valid_status_codes([200]);
        self.send_json("Categories.update", spec).await
    }

    #[instrument(skip(self))]
    pub async fn delete_category(&self, id: &str) -> Result<()> {
        let spec = self
            .client
            .delete(format!("{}/{}", PATH, id))
            .valid_status_codes([204]);
        self.send("Categories.delete", spec).await?;
        Ok(())
    }

    /// Delete several categories in one call.
    #[instrument(skip(self))]
    pub async fn delete_categories(&self, ids: &[String]) -> Result<()> {
        let spec = self
            .client
            .post(format!("{}/delete-multiple", PATH))
            .json_body(&DeleteMultiple { ids })
            .map_err(|e| Error::client("Categories.deleteMultiple", e))?
            .valid_status_codes([204]);
        self.send("Categories.deleteMultiple", spec).await?;
        Ok(())
    }
}
