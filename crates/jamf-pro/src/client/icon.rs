use bytes::Bytes;
use jamf_pro_client::{Response, Uri};
use reqwest::multipart::{Form, Part};
use tracing::instrument;

use crate::error::{Error, Result};
use crate::icon::{Icon, IconDownloadOptions};

const PATH: &str = "/v1/icon";

/// A single-file form with the image under the `file` field.
fn icon_form(file_name: &str, content: &Bytes) -> reqwest::Result<Form> {
    let part = Part::bytes(content.to_vec())
        .file_name(file_name.to_string())
        .mime_str("application/octet-stream")?;
    Ok(Form::new().part("file", part))
}

impl super::JamfProClient {
    /// Get icon metadata.
    #[instrument(skip(self))]
    pub async fn get_icon(&self, id: i32) -> Result<Icon> {
        let spec = self
            .client
            .get(format!("{}/{}", PATH, id))
            .valid_status_codes([200]);
        self.send_json("Icon.get", spec).await
    }

    /// Download icon content.
    ///
    /// The response is returned open; read it with `bytes()` or stream it
    /// with `chunk()`.
    #[instrument(skip(self))]
    pub async fn download_icon(&self, id: i32, options: &IconDownloadOptions) -> Result<Response> {
        let uri = Uri::new(format!("{}/download/{}", PATH, id)).params(options.to_params());
        let spec = self.client.get(uri).valid_status_codes([200]);
        self.send("Icon.download", spec).await
    }

    /// Upload an image as a Self Service icon.
    #[instrument(skip(self, content), fields(size = content.len()))]
    pub async fn upload_icon(&self, file_name: &str, content: &[u8]) -> Result<Icon> {
        if file_name.is_empty() {
            return Err(Error::validation("cannot upload icon without a file name"));
        }

        let file_name = file_name.to_string();
        let content = Bytes::copy_from_slice(content);
        let spec = self
            .client
            .post(PATH)
            .multipart(move || icon_form(&file_name, &content))
            .valid_status_codes([201]);
        self.send_json("Icon.upload", spec).await
    }
}
