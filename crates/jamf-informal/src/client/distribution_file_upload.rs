use bytes::Bytes;
use jamf_pro_client::{set_basic_auth, Response};
use reqwest::header::{HeaderName, HeaderValue};
use tracing::instrument;

use crate::distribution_file_upload::{Destination, FileType};
use crate::error::{Error, Result};

const PATH: &str = "/dbfileupload";
const OCTET_STREAM: &str = "application/octet-stream";

impl super::InformalClient {
    /// Upload a file to the default distribution point.
    ///
    /// `object_id` is the id of the record the file belongs to, e.g. the
    /// package created with the Classic API.
    #[instrument(skip(self, content), fields(%file_type))]
    pub async fn upload_distribution_file(
        &self,
        file_type: FileType,
        object_id: i32,
        file_name: &str,
        content: impl Into<Bytes>,
    ) -> Result<Response> {
        self.upload_distribution_file_to(Destination::Default, file_type, object_id, file_name, content)
            .await
    }

    /// Upload a file to the given destination.
    #[instrument(skip(self, content), fields(%file_type))]
    pub async fn upload_distribution_file_to(
        &self,
        destination: Destination,
        file_type: FileType,
        object_id: i32,
        file_name: &str,
        content: impl Into<Bytes>,
    ) -> Result<Response> {
        if file_name.is_empty() {
            return Err(Error::validation("cannot upload a file without a name"));
        }
        let file_name = HeaderValue::from_str(file_name).map_err(|e| Error {
            kind: crate::ErrorKind::Validation(format!(
                "file name {:?} is not a valid header value",
                file_name
            )),
            source: Some(Box::new(e)),
        })?;

        let headers = [
            (HeaderName::from_static("destination"), HeaderValue::from_static(destination.code())),
            (HeaderName::from_static("object_id"), HeaderValue::from(object_id)),
            (HeaderName::from_static("file_type"), HeaderValue::from_static(file_type.code())),
            (HeaderName::from_static("file_name"), file_name),
        ];
        let credentials = self.credentials.clone();

        let spec = self
            .client
            .post(PATH)
            .content_type(OCTET_STREAM)
            .body(content)
            .valid_status_codes([200])
            .middleware(move |request| {
                set_basic_auth(request, &credentials);
                for (name, value) in &headers {
                    request.headers_mut().insert(name.clone(), value.clone());
                }
            });

        self.client
            .execute(spec)
            .await
            .map_err(|e| Error::client("DistributionFileUpload.upload", e))
    }
}
