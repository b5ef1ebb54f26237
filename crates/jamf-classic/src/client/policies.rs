use tracing::instrument;

use crate::error::{Error, Result};
use crate::policies::{Policy, PolicyList};

const PATH: &str = "/policies";
const ROOT: &str = "policy";

fn validate(policy: &Policy) -> Result<()> {
    if policy.name().is_none_or(str::is_empty) {
        return Err(Error::validation("cannot create policy without a name"));
    }
    Ok(())
}

impl super::ClassicClient {
    /// Create a policy and return its id.
    #[instrument(skip(self, policy))]
    pub async fn create_policy(&self, policy: &Policy) -> Result<i32> {
        validate(policy)?;
        self.create_resource("Policies.create", PATH, ROOT, policy)
            .await
    }

    #[instrument(skip(self))]
    pub async fn get_policy(&self, id: i32) -> Result<Policy> {
        self.get_resource("Policies.get", PATH, id).await
    }

    #[instrument(skip(self))]
    pub async fn list_policies(&self) -> Result<PolicyList> {
        self.list_resources("Policies.list", PATH).await
    }

    /// Replace a policy. The id is taken from `general.id`; sections left as
    /// `None` are not sent and keep their server-side values.
    #[instrument(skip(self, policy), fields(id = ?policy.id()))]
    pub async fn update_policy(&self, policy: &Policy) -> Result<()> {
        let id = super::require_id(policy.id(), "policy")?;
        validate(policy)?;
        self.update_resource("Policies.update", PATH, ROOT, id, policy)
            .await
    }

    #[instrument(skip(self))]
    pub async fn delete_policy(&self, id: i32) -> Result<()> {
        self.delete_resource("Policies.delete", PATH, id).await
    }
}
