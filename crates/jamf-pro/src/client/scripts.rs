use jamf_pro_client::Uri;
use tracing::instrument;

use crate::categories::HrefResponse;
use crate::error::{Error, Result};
use crate::list::ListOptions;
use crate::scripts::{Script, ScriptList};

const PATH: &str = "/v1/scripts";

impl super::JamfProClient {
    /// Create a script and return its id.
    #[instrument(skip(self, script))]
    pub async fn create_script(&self, script: &Script) -> Result<String> {
        if script.name.is_none() {
            return Err(Error::validation("cannot create script without a name"));
        }

        let spec = self
            .client
            .post(PATH)
            .json_body(script)
            .map_err(|e| Error::client("Scripts.create", e))?
            .valid_status_codes([201]);

        let created: HrefResponse = self.send_json("Scripts.create", spec).await?;
        Ok(created.id)
    }

    #[instrument(skip(self))]
    pub async fn get_script(&self, id: &str) -> Result<Script> {
        let spec = self
            .client
            .get(format!("{}/{}", PATH, id))
            .valid_status_codes([200]);
        self.send_json("Scripts.get", spec).await
    }

    #[instrument(skip(self))]
    pub async fn list_scripts(&self, options: &ListOptions) -> Result<ScriptList> {
        let spec = self
            .client
            .get(Uri::new(PATH).params(options.to_params()))
            .valid_status_codes([200]);
        self.send_json("Scripts.list", spec).await
    }

    /// Replace a script and return the server's copy.
    #[instrument(skip(self, script), fields(id = ?script.id))]
    pub async fn update_script(&self, script: &Script) -> Result<Script> {
        let Some(id) = script.id.as_deref() else {
            return Err(Error::validation("cannot update script without an id"));
        };
        if script.name.is_none() {
            return Err(Error::validation("cannot update script without a name"));
        }

        let spec = self
            .client
            .put(format!("{}/{}", PATH, id))
            .json_body(script)
            .map_err(|e| Error::client("Scripts.update", e))?
            .valid_status_codes([200]);
        self.send_json("Scripts.update", spec).await
    }

    #[instrument(skip(self))]
    pub async fn delete_script(&self, id: &str) -> Result<()> {
        let spec = self
            .client
            .delete(format!("{}/{}", PATH, id))
            .valid_status_codes([204]);
        self.send("Scripts.delete", spec).await?;
        Ok(())
    }
}
