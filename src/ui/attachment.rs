use crate::error::{AraError, PreconditionError};
use std::path::Path;

/// A local file ready to be appended to a guide message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Attachment {
    /// Plain UTF-8 text, injected as is.
    Inline { name: String, text: String },
    /// Binary document the server has to turn into text first.
    NeedsExtraction {
        name: String,
        mime: String,
        bytes: Vec<u8>,
    },
}

impl Attachment {
    pub fn name(&self) -> &str {
        match self {
            Self::Inline { name, .. } | Self::NeedsExtraction { name, .. } => name,
        }
    }
}

pub async fn load_attachment(path: &Path, limit: u64) -> Result<Attachment, AraError> {
    let name = path
        .file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());

    let size = tokio::fs::metadata(path)
        .await
        .map_err(|e| anyhow::anyhow!("cannot read {}: {e}", path.display()))?
        .len();
    if size > limit {
        return Err(PreconditionError::AttachmentTooLarge { name, size, limit }.into());
    }

    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| anyhow::anyhow!("cannot read {}: {e}", path.display()))?;
    Ok(classify(name, bytes))
}

fn classify(name: String, bytes: Vec<u8>) -> Attachment {
    let sniffed = infer::get(&bytes).map(|kind| kind.mime_type().to_string());
    if let Some(mime) = sniffed.filter(|m| !m.starts_with("text/")) {
        return Attachment::NeedsExtraction { name, mime, bytes };
    }
    match String::from_utf8(bytes) {
        Ok(text) => Attachment::Inline { name, text },
        Err(e) => Attachment::NeedsExtraction {
            mime: guess_mime(&name).to_string(),
            name,
            bytes: e.into_bytes(),
        },
    }
}

fn guess_mime(name: &str) -> mime::Mime {
    let ext = Path::new(name)
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("pdf") => mime::APPLICATION_PDF,
        Some("txt" | "md" | "log") => mime::TEXT_PLAIN_UTF_8,
        Some("csv") => mime::TEXT_CSV_UTF_8,
        Some("json") => mime::APPLICATION_JSON,
        _ => mime::APPLICATION_OCTET_STREAM,
    }
}

/// Block appended to the user's message so the orchestrator sees the file.
pub fn wrap_attachment(name: &str, text: &str) -> String {
    format!("\n\n[ARCHIVO ADJUNTO: {name}]\n{text}\n[FIN ADJUNTO]\n")
}
