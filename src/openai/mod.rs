pub mod files;
pub mod misc;

pub use files::{AssistantFile, AttachFile, DeleteResponse, FileList, FileRecord};
pub use misc::{ErrorDetails, OpenAIError, GENERIC_API_ERROR};

use std::path::Path;

use reqwest::multipart::{Form, Part};
use reqwest::{Client, Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};

use crate::config::ClientConfig;
use crate::errors::{GptsError, GptsResult};

/// Client for the files attached to an OpenAI assistant.
///
/// Every request carries the bearer token. Calls against the assistants
/// sub-API additionally carry the `OpenAI-Beta` header.
#[derive(Clone)]
pub struct OpenAIClient {
    client: Client,
    api_key: String,
    base_url: Url,
}

impl OpenAIClient {
    const OPENAI_BETA_HEADER: &'static str = "OpenAI-Beta";
    const OPENAI_BETA_ASSISTANTS: &'static str = "assistants=v1";
    const FILE_PURPOSE: &'static str = "assistants";

    pub fn new(config: &ClientConfig) -> GptsResult<Self> {
        let base_url = Url::parse(&config.base_url)
            .ok()
            .filter(|u| !u.cannot_be_a_base())
            .ok_or_else(|| {
                GptsError::InvalidConfig(format!("not a valid base URL: {}", config.base_url))
            })?;
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            base_url,
        })
    }

    /// Upload a local file and attach it to the assistant.
    ///
    /// The file is sent as `file` in a multipart form next to
    /// `purpose=assistants`, named `new_name` when given and the path's base
    /// name otherwise. The returned record is the one from `/files`; the
    /// attach call only runs when the upload succeeded.
    #[instrument(level = "debug", skip(self, file_path), fields(path = %file_path.as_ref().display()))]
    pub async fn upload<P: AsRef<Path>>(
        &self,
        file_path: P,
        assistant_id: &str,
        new_name: Option<&str>,
    ) -> GptsResult<FileRecord> {
        let path = file_path.as_ref();
        let content = tokio::fs::read(path).await.map_err(|source| GptsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let file_name = Self::_upload_file_name(path, new_name)?;
        debug!(file_name = %file_name, bytes = content.len(), "uploading file");

        let part = Part::bytes(content)
            .file_name(file_name)
            .mime_str("application/octet-stream")?;
        let form = Form::new()
            .text("purpose", Self::FILE_PURPOSE)
            .part("file", part);

        let record: FileRecord = self
            ._send(self._request(Method::POST, &["files"]).multipart(form))
            .await?;

        let attach = AttachFile {
            file_id: record.id.clone(),
        };
        let attached: AssistantFile = self
            ._send(
                self._assistants_request(Method::POST, &["assistants", assistant_id, "files"])
                    .json(&attach),
            )
            .await?;
        debug!(file_id = %attached.id, assistant_id, "file attached");

        Ok(record)
    }

    /// List the files attached to the assistant.
    #[instrument(level = "debug", skip(self))]
    pub async fn list(&self, assistant_id: &str) -> GptsResult<FileList> {
        self._send(self._assistants_request(Method::GET, &["assistants", assistant_id, "files"]))
            .await
    }

    /// Detach the file from the assistant, then delete the file object.
    ///
    /// A failed detach returns before the file object is touched.
    #[instrument(level = "debug", skip(self))]
    pub async fn delete(&self, file_id: &str, assistant_id: &str) -> GptsResult<()> {
        let detached: DeleteResponse = self
            ._send(self._assistants_request(
                Method::DELETE,
                &["assistants", assistant_id, "files", file_id],
            ))
            .await?;
        if !detached.deleted {
            warn!(file_id, assistant_id, "service did not confirm detach");
        }

        let deleted: DeleteResponse = self
            ._send(self._request(Method::DELETE, &["files", file_id]))
            .await?;
        if !deleted.deleted {
            warn!(file_id, "service did not confirm delete");
        }
        Ok(())
    }

    fn _upload_file_name(path: &Path, new_name: Option<&str>) -> GptsResult<String> {
        if let Some(name) = new_name.filter(|n| !n.is_empty()) {
            return Ok(name.to_string());
        }
        path.file_name()
            .and_then(|n| n.to_str())
            .map(str::to_string)
            .ok_or_else(|| GptsError::InvalidPath(path.to_path_buf()))
    }

    /// Appends `segments` to the base path, percent-encoding each one so ids
    /// containing `/`, `?` or `#` stay inside their segment.
    fn _url(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // `new` only accepts hierarchical base URLs
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn _request(&self, method: Method, segments: &[&str]) -> RequestBuilder {
        let url = self._url(segments);
        debug!(%method, %url, "request");
        self.client.request(method, url).bearer_auth(&self.api_key)
    }

    fn _assistants_request(&self, method: Method, segments: &[&str]) -> RequestBuilder {
        self._request(method, segments)
            .header(Self::OPENAI_BETA_HEADER, Self::OPENAI_BETA_ASSISTANTS)
    }

    async fn _send<T: DeserializeOwned>(&self, request: RequestBuilder) -> GptsResult<T> {
        let resp = request.send().await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            let message = OpenAIError::message_from_body(&body);
            debug!(%status, %message, "request failed");
            return Err(GptsError::Api { status, message });
        }
        Ok(resp.json::<T>().await?)
    }
}
