//! Attachment upload and download.
//!
//! Uploading content is a three-step exchange:
//! 1. create an upload slot — the API returns a `fileId` and a one-shot
//!    `uploadUrl`
//! 2. POST the bytes to the upload URL as single-part multipart/form-data,
//!    field name `Filedata`
//! 3. reference the `fileId` in later message payloads
//!
//! Downloading resolves a `fileId` through the attachment endpoint, which
//! answers with a redirect whose `Location` header is the content URL. There
//! is no rollback: if an upload succeeds but a later send fails, the
//! uploaded file stays orphaned on the remote side.

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::client::{BotClient, BotId, FileId};
use crate::error::{ApiError, ParseError};
use crate::transport::FetchRequest;

/// Fixed multipart boundary used for uploads.
pub const UPLOAD_BOUNDARY: &str = "--------------u1p2l3o4a5d6f7i8l9e0d1a2t3a";

const FORM_FIELD_NAME: &str = "Filedata";

/// Upload slot returned by attachment creation.
///
/// The `upload_url` is consumed immediately by [`BotClient::upload`]; the
/// `file_id` remains a durable reference usable in later message payloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileInfo {
    pub file_id: FileId,
    pub upload_url: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateAttachmentRequest<'a> {
    file_name: &'a str,
}

impl BotClient {
    /// Request an upload slot for a named file.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Http` on any non-2xx status and `ApiError::Parse`
    /// if the body is not the expected `{fileId, uploadUrl}` shape.
    pub async fn create_upload_slot(
        &self,
        file_name: &str,
        bot_id: &BotId,
        access_token: &str,
    ) -> Result<FileInfo, ApiError> {
        let url = self.api_url(&format!("/bots/{bot_id}/attachments"));
        let body =
            serde_json::to_vec(&CreateAttachmentRequest { file_name }).map_err(ParseError::from)?;
        let request = FetchRequest::post(&url)
            .bearer(access_token)
            .content_type("application/json")
            .body(Bytes::from(body));

        tracing::debug!(%url, file_name, "creating upload slot");
        let response = self.transport().fetch(request).await?;
        Ok(response.json()?)
    }

    /// Upload file bytes to a previously created upload slot.
    ///
    /// Builds a single-part multipart/form-data body with the fixed
    /// boundary and field name `Filedata`, and returns the endpoint's parsed
    /// JSON result.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Http` on any non-2xx status and `ApiError::Parse`
    /// if the result body is not valid JSON.
    pub async fn upload(
        &self,
        upload_url: &str,
        data: &[u8],
        content_type: &str,
        file_name: &str,
        access_token: &str,
    ) -> Result<serde_json::Value, ApiError> {
        let body = multipart_body(UPLOAD_BOUNDARY, file_name, content_type, data);
        let request = FetchRequest::post(upload_url)
            .bearer(access_token)
            .content_type(format!("multipart/form-data; boundary={UPLOAD_BOUNDARY}"))
            .body(body);

        tracing::debug!(url = %upload_url, file_name, bytes = data.len(), "uploading attachment");
        let response = self.transport().fetch(request).await?;
        Ok(response.json()?)
    }

    /// Resolve a file ID to its content URL.
    ///
    /// Issues the attachment GET without following redirects and extracts
    /// the `Location` header of the redirect response.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::MissingLocation` if the endpoint answered without
    /// a `Location` header.
    pub async fn download_url(
        &self,
        file_id: &FileId,
        bot_id: &BotId,
        access_token: &str,
    ) -> Result<String, ApiError> {
        let url = self.api_url(&format!("/bots/{bot_id}/attachments/{file_id}"));
        let request = FetchRequest::get(&url).bearer(access_token);

        let response = self.transport().fetch(request).await?;
        response
            .header("location")
            .map(str::to_string)
            .ok_or(ApiError::MissingLocation)
    }

    /// Download a file's raw bytes.
    ///
    /// Issues the attachment GET following the redirect and returns the
    /// fetched body.
    pub async fn download_bytes(
        &self,
        file_id: &FileId,
        bot_id: &BotId,
        access_token: &str,
    ) -> Result<Bytes, ApiError> {
        let url = self.api_url(&format!("/bots/{bot_id}/attachments/{file_id}"));
        let request = FetchRequest::get(&url)
            .bearer(access_token)
            .follow_redirects(true);

        let response = self.transport().fetch(request).await?;
        Ok(response.into_bytes())
    }
}

/// Build the single-part multipart/form-data body.
///
/// Part layout (CRLF separated): boundary line, `Content-Disposition` with
/// the `Filedata` field name and file name, `Content-Type`, blank line, the
/// raw bytes, then the closing boundary.
fn multipart_body(boundary: &str, file_name: &str, content_type: &str, data: &[u8]) -> Bytes {
    let header = format!(
        "--{boundary}\r\n\
         Content-Disposition: form-data; name=\"{FORM_FIELD_NAME}\"; filename=\"{file_name}\"\r\n\
         Content-Type: {content_type}\r\n\
         \r\n"
    );
    let footer = format!("\r\n--{boundary}--\r\n");

    let mut body = Vec::with_capacity(header.len() + data.len() + footer.len());
    body.extend_from_slice(header.as_bytes());
    body.extend_from_slice(data);
    body.extend_from_slice(footer.as_bytes());
    Bytes::from(body)
}

#[cfg(test)]
#[path = "attachment_tests.rs"]
mod tests;
