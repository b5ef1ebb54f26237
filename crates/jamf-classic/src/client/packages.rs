use tracing::instrument;

use crate::error::{Error, Result};
use crate::packages::{Package, PackageList};

const PATH: &str = "/packages";
const ROOT: &str = "package";

fn validate(package: &Package) -> Result<()> {
    if package.name.as_deref().is_none_or(str::is_empty) {
        return Err(Error::validation("cannot create package without a name"));
    }
    if package.filename.as_deref().is_none_or(str::is_empty) {
        return Err(Error::validation("cannot create package without a filename"));
    }
    Ok(())
}

impl super::ClassicClient {
    /// Create a package record and return its id.
    ///
    /// This only registers the metadata. Upload the file itself to the
    /// distribution point separately.
    #[instrument(skip(self, package))]
    pub async fn create_package(&self, package: &Package) -> Result<i32> {
        validate(package)?;
        self.create_resource("Packages.create", PATH, ROOT, package)
            .await
    }

    #[instrument(skip(self))]
    pub async fn get_package(&self, id: i32) -> Result<Package> {
        self.get_resource("Packages.get", PATH, id).await
    }

    #[instrument(skip(self))]
    pub async fn list_packages(&self) -> Result<PackageList> {
        self.list_resources("Packages.list", PATH).await
    }

    #[instrument(skip(self, package), fields(id = ?package.id))]
    pub async fn update_package(&self, package: &Package) -> Result<()> {
        let id = super::require_id(package.id, "package")?;
        validate(package)?;
        self.update_resource("Packages.update", PATH, ROOT, id, package)
            .await
    }

    #[instrument(skip(self))]
    pub async fn delete_package(&self, id: i32) -> Result<()> {
        self.delete_resource("Packages.delete", PATH, id).await
    }
}
