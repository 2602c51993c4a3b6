//! Streaming `multipart/form-data` encoder.
//!
//! Fields are framed as they are added and kept in insertion order. Turning
//! the form into a stream consumes it, which appends the closing delimiter;
//! a sealed form can therefore neither take more fields nor be sent twice.

use crate::error::{MailgunError, Result};
use bytes::Bytes;
use futures::stream::{self, Stream};
use rand::Rng;
use std::fmt;
use std::path::PathBuf;
use std::pin::Pin;
use tokio::io::{AsyncWrite, AsyncWriteExt};

/// Dash run every boundary starts with
pub const BOUNDARY_PREFIX: &str = "--------------------------";

/// Number of random hex digits appended to the prefix
pub const BOUNDARY_RANDOM_LEN: usize = 24;

const LINE_BREAK: &str = "\r\n";

/// Body chunks of a sealed form, in wire order
pub type FormStream = Pin<Box<dyn Stream<Item = std::io::Result<Bytes>> + Send + Sync>>;

/// Generate a boundary: the dash prefix followed by 24 random lowercase hex digits
pub fn generate_boundary() -> String {
    let mut rng = rand::thread_rng();
    let mut boundary = String::with_capacity(BOUNDARY_PREFIX.len() + BOUNDARY_RANDOM_LEN);
    boundary.push_str(BOUNDARY_PREFIX);
    for _ in 0..BOUNDARY_RANDOM_LEN {
        let digit: u32 = rng.gen_range(0..16);
        boundary.push(char::from_digit(digit, 16).unwrap_or('0'));
    }
    boundary
}

/// Multipart form being built for one outbound request.
pub struct FormData {
    boundary: String,
    parts: Vec<Bytes>,
    field_count: usize,
}

impl fmt::Debug for FormData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormData")
            .field("boundary", &self.boundary)
            .field("field_count", &self.field_count)
            .finish()
    }
}

impl Default for FormData {
    fn default() -> Self {
        Self::new()
    }
}

impl FormData {
    /// Start a new form with a fresh random boundary
    pub fn new() -> Self {
        FormData {
            boundary: generate_boundary(),
            parts: Vec::new(),
            field_count: 0,
        }
    }

    pub fn boundary(&self) -> &str {
        &self.boundary
    }

    /// Value for the request's `Content-Type` header
    pub fn content_type(&self) -> String {
        format!("multipart/form-data; boundary={}", self.boundary)
    }

    /// Number of parts written so far, files included
    pub fn field_count(&self) -> usize {
        self.field_count
    }

    /// Append a plain text field.
    pub fn add_field(&mut self, name: &str, value: impl fmt::Display) -> Result<()> {
        check_name(name)?;
        self.open_part(format!("Content-Disposition: form-data; name=\"{}\"", name));
        self.parts.push(Bytes::from(format!("{}{}", value, LINE_BREAK)));
        self.field_count += 1;
        Ok(())
    }

    /// Append a field whose value the caller may not have.
    ///
    /// A missing value is an error naming the field.
    pub fn add_required<V: fmt::Display>(&mut self, name: &str, value: Option<V>) -> Result<()> {
        match value {
            Some(value) => self.add_field(name, value),
            None => Err(MailgunError::InvalidField(format!(
                "a value must be provided for `{}`",
                name
            ))),
        }
    }

    /// Append a file part. The bytes are embedded verbatim.
    pub fn add_file(
        &mut self,
        name: &str,
        content: impl Into<Bytes>,
        media_type: &str,
        file_name: &str,
    ) -> Result<()> {
        check_name(name)?;
        if file_name.is_empty() || file_name.contains(['"', '\r', '\n']) {
            return Err(MailgunError::InvalidField(format!(
                "invalid file name for `{}`",
                name
            )));
        }
        if media_type.is_empty() || media_type.contains(['\r', '\n']) {
            return Err(MailgunError::InvalidField(format!(
                "invalid media type for `{}`",
                name
            )));
        }

        self.open_part(format!(
            "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"{}Content-Type: {}",
            name, file_name, LINE_BREAK, media_type
        ));
        self.parts.push(content.into());
        self.parts.push(Bytes::from_static(LINE_BREAK.as_bytes()));
        self.field_count += 1;
        Ok(())
    }

    /// Delimiter line, part headers and the blank line that ends them
    fn open_part(&mut self, headers: String) {
        self.parts
            .push(Bytes::from(format!("--{}{}", self.boundary, LINE_BREAK)));
        self.parts.push(Bytes::from(headers));
        self.parts
            .push(Bytes::from(format!("{}{}", LINE_BREAK, LINE_BREAK)));
    }

    /// Seal the form and hand out its body as a single-pass stream
    pub fn into_stream(mut self) -> FormStream {
        self.parts.push(Bytes::from(format!(
            "--{}--{}",
            self.boundary, LINE_BREAK
        )));
        Box::pin(stream::iter(
            self.parts.into_iter().map(Ok::<Bytes, std::io::Error>),
        ))
    }

    /// Seal the form and write the whole body to `destination`
    pub async fn submit_to<W>(self, destination: &mut W) -> std::io::Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        use futures::StreamExt;

        let mut body = self.into_stream();
        while let Some(chunk) = body.next().await {
            destination.write_all(&chunk?).await?;
        }
        destination.flush().await
    }
}

fn check_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(MailgunError::InvalidField(
            "a name must be provided for every field".to_string(),
        ));
    }
    if name.contains(['"', '\r', '\n']) {
        return Err(MailgunError::InvalidField(format!(
            "field name contains a reserved character: {:?}",
            name
        )));
    }
    Ok(())
}

/// Where an attachment's bytes come from
#[derive(Debug, Clone)]
pub enum FileSource {
    /// Read from disk when the request is built
    Path(PathBuf),
    /// Already in memory
    Bytes(Bytes),
}

/// A file to embed as a form part
#[derive(Debug, Clone)]
pub struct FileAttachment {
    pub source: FileSource,
    pub media_type: String,
    pub file_name: String,
}

impl FileAttachment {
    /// Attachment read from `path`; the file name defaults to the path's last component
    pub fn from_path(path: impl Into<PathBuf>, media_type: impl Into<String>) -> Self {
        let path = path.into();
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "file".to_string());
        FileAttachment {
            source: FileSource::Path(path),
            media_type: media_type.into(),
            file_name,
        }
    }

    /// Attachment from bytes already in memory
    pub fn from_bytes(
        content: impl Into<Bytes>,
        media_type: impl Into<String>,
        file_name: impl Into<String>,
    ) -> Self {
        FileAttachment {
            source: FileSource::Bytes(content.into()),
            media_type: media_type.into(),
            file_name: file_name.into(),
        }
    }

    /// Override the file name sent in the part header
    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }

    /// Load the attachment's bytes
    pub async fn load(&self) -> Result<Bytes> {
        match &self.source {
            FileSource::Bytes(bytes) => Ok(bytes.clone()),
            FileSource::Path(path) => Ok(Bytes::from(tokio::fs::read(path).await?)),
        }
    }
}
