//! Scheme upload and download through the designer form endpoint

use crate::client::workflow_api_client::{RequestBody, WorkflowApiClient};
use crate::error::Result;
use reqwest::multipart::{Form, Part};
use reqwest::Method;
use tracing::debug;
use workflow_api_core::paths;

const OPERATION_UPLOAD: &str = "uploadscheme";
const OPERATION_DOWNLOAD: &str = "downloadscheme";
const UPLOAD_FILE_FIELD: &str = "uploadFile";

/// Entry point to `/workflow-api/designer`, obtained from [`WorkflowApiClient::designer`].
#[derive(Debug, Clone, Copy)]
pub struct DesignerApi<'a> {
    client: &'a WorkflowApiClient,
}

impl<'a> DesignerApi<'a> {
    pub(crate) fn new(client: &'a WorkflowApiClient) -> Self {
        Self { client }
    }

    /// Store `xml` as the scheme `code`, replacing any previous version.
    pub async fn upload_scheme(&self, code: &str, xml: &str) -> Result<()> {
        let file = Part::text(xml.to_string())
            .file_name(format!("{}.xml", code))
            .mime_str("application/xml")?;
        let form = Form::new()
            .text("operation", OPERATION_UPLOAD)
            .text("schemecode", code.to_string())
            .part(UPLOAD_FILE_FIELD, file);

        debug!(scheme_code = %code, bytes = xml.len(), "Uploading scheme");
        self.client
            .execute_text(Method::POST, paths::DESIGNER, &[], RequestBody::Multipart(form))
            .await
            .map(|_| ())
    }

    /// Fetch the scheme `code` as XML.
    pub async fn download_scheme(&self, code: &str) -> Result<String> {
        let fields = vec![
            ("operation".to_string(), OPERATION_DOWNLOAD.to_string()),
            ("schemecode".to_string(), code.to_string()),
        ];
        self.client
            .execute_text(Method::POST, paths::DESIGNER, &[], RequestBody::Form(fields))
            .await
    }
}
