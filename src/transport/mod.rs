pub mod protocol;

use std::{
    path::Path,
    time::Instant,
};

use reqwest::{
    header::CONTENT_TYPE,
    multipart::{
        Form,
        Part,
    },
    Client,
    Response,
};
use tracing::{
    debug,
    info,
};

use self::protocol::{
    decode_envelope,
    decode_list,
    TextRequest,
};
use crate::core::{
    utils::truncate_for_log,
    FlashError,
    Flashcard,
};

/// Where the flashcard service runs. Not configurable in this version.
pub const DEFAULT_ORIGIN: &str = "http://127.0.0.1:8000";

pub const UPLOAD_PATH: &str = "/upload/";
pub const TEXT_PATH: &str = "/text/";
pub const SAVED_PATH: &str = "/flashcards/";

const ERROR_BODY_PREVIEW: usize = 300;

/// Refuses blank text before anything is sent.
pub fn validate_text(text: &str) -> Result<(), FlashError> {
    if text.trim().is_empty() {
        return Err(FlashError::EmptyText);
    }
    Ok(())
}

/// Refuses an upload when no file was chosen.
pub fn require_file(selected: Option<&Path>) -> Result<&Path, FlashError> {
    selected.ok_or(FlashError::NoFileSelected)
}

/// Client for the flashcard service. Requests are sent once: no retries, no
/// timeout.
#[derive(Clone, Debug)]
pub struct FlashcardClient {
    client: Client,
    origin: String,
}

impl FlashcardClient {
    pub fn new() -> Result<Self, FlashError> {
        Self::with_origin(DEFAULT_ORIGIN)
    }

    pub fn with_origin(origin: impl Into<String>) -> Result<Self, FlashError> {
        let client = Client::builder()
            .user_agent(concat!("flashstudy/", env!("CARGO_PKG_VERSION")))
            .build()?;
        let origin = origin.into().trim_end_matches('/').to_string();

        Ok(Self { client, origin })
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.origin, path)
    }

    /// Uploads `path` as the multipart field `file`.
    pub async fn submit_file(&self, path: &Path) -> Result<Vec<Flashcard>, FlashError> {
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("upload")
            .to_string();

        info!(file = %file_name, size = bytes.len(), "Uploading file");

        let part = Part::bytes(bytes).file_name(file_name).mime_str(guess_mime(path))?;
        let form = Form::new().part("file", part);

        let started = Instant::now();
        let response = self.client.post(self.url(UPLOAD_PATH)).multipart(form).send().await?;
        let body = read_body(response).await?;
        let flashcards = decode_envelope(&body)?;

        info!(
            endpoint = UPLOAD_PATH,
            count = flashcards.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Received flashcards"
        );
        Ok(flashcards)
    }

    /// Sends `{"text": text}`. Blank text is refused without a request.
    pub async fn submit_text(&self, text: &str) -> Result<Vec<Flashcard>, FlashError> {
        validate_text(text)?;

        info!(chars = text.chars().count(), "Submitting text");

        let started = Instant::now();
        let response = self
            .client
            .post(self.url(TEXT_PATH))
            .header(CONTENT_TYPE, "application/json")
            .json(&TextRequest { text })
            .send()
            .await?;
        let body = read_body(response).await?;
        let flashcards = decode_envelope(&body)?;

        info!(
            endpoint = TEXT_PATH,
            count = flashcards.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Received flashcards"
        );
        Ok(flashcards)
    }

    /// Lists the flashcards the service has stored so far.
    pub async fn fetch_saved(&self) -> Result<Vec<Flashcard>, FlashError> {
        let started = Instant::now();
        let response = self.client.get(self.url(SAVED_PATH)).send().await?;
        let body = read_body(response).await?;
        let flashcards = decode_list(&body)?;

        info!(
            endpoint = SAVED_PATH,
            count = flashcards.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Received saved flashcards"
        );
        Ok(flashcards)
    }
}

async fn read_body(response: Response) -> Result<String, FlashError> {
    let status = response.status();
    let url = response.url().to_string();
    let body = response.text().await?;

    debug!(%status, %url, bytes = body.len(), "Response received");

    if !status.is_success() {
        return Err(FlashError::HttpStatus {
            status: status.as_u16(),
            url,
            body: truncate_for_log(&body, ERROR_BODY_PREVIEW),
        });
    }
    Ok(body)
}

fn guess_mime(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "pdf" => "application/pdf",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "txt" | "md" => "text/plain",
        _ => "application/octet-stream",
    }
}
