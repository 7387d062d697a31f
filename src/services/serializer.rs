// src/services/serializer.rs
use crate::errors::PromptError;
use crate::models::PromptDocument;
use crate::services::advisor::advisories;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Published JSON Schema for the artifact, embedded as `$schema`.
pub const SCHEMA_URL: &str = "https://sketchy.dev/schemas/prompt/v1.json";

/// File name the artifact is written to inside the export directory.
pub const DEFAULT_OUTPUT: &str = "prompt.json";

#[derive(Serialize)]
struct TaggedRef<'a> {
    #[serde(rename = "$schema")]
    schema: &'a str,
    #[serde(flatten)]
    document: &'a PromptDocument,
}

/// A decoded artifact: the embedded schema URL and the document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SchemaTagged {
    #[serde(rename = "$schema")]
    pub schema: String,
    #[serde(flatten)]
    pub document: PromptDocument,
}

pub struct PromptSerializer {
    schema_url: String,
}

impl Default for PromptSerializer {
    fn default() -> Self {
        Self::new(SCHEMA_URL)
    }
}

impl PromptSerializer {
    pub fn new(schema_url: impl Into<String>) -> Self {
        Self {
            schema_url: schema_url.into(),
        }
    }

    /// Pretty JSON with `$schema` as the first key. The document is only
    /// borrowed. NaN and infinities are rejected since JSON would turn them
    /// into `null`.
    pub fn encode(&self, document: &PromptDocument) -> Result<String, PromptError> {
        ensure_finite(document)?;
        let tagged = TaggedRef {
            schema: &self.schema_url,
            document,
        };
        Ok(serde_json::to_string_pretty(&tagged)?)
    }

    /// Writes the artifact to `path`, replacing whatever is there.
    pub async fn write(
        &self,
        document: &PromptDocument,
        path: impl AsRef<Path>,
    ) -> Result<PathBuf, PromptError> {
        let path = path.as_ref();

        for advisory in advisories(document) {
            warn!("{}", advisory);
        }

        let mut body = self.encode(document)?;
        body.push('\n');
        debug!("Encoded prompt document ({} bytes)", body.len());

        tokio::fs::write(path, body.as_bytes())
            .await
            .map_err(|e| PromptError::io(path, e))?;

        info!("Wrote prompt document to {}", path.display());
        Ok(path.to_path_buf())
    }
}

fn ensure_finite(document: &PromptDocument) -> Result<(), PromptError> {
    let mut floats = Vec::new();
    if let Some(scale) = document.guidance_scale {
        floats.push(("guidance_scale".to_string(), scale));
    }
    for (i, overlay) in document.text_overlays.iter().flatten().enumerate() {
        floats.push((format!("text_overlays[{i}].opacity"), overlay.opacity));
        if let Some(rotation) = overlay.rotation {
            floats.push((format!("text_overlays[{i}].rotation"), rotation));
        }
    }

    match floats.into_iter().find(|(_, value)| !value.is_finite()) {
        Some((field, value)) => Err(PromptError::NonFinite { field, value }),
        None => Ok(()),
    }
}

/// Writes `document` to [`DEFAULT_OUTPUT`] inside `dir` with the default
/// schema URL.
pub async fn export(document: &PromptDocument, dir: impl AsRef<Path>) -> Result<PathBuf, PromptError> {
    PromptSerializer::default()
        .write(document, dir.as_ref().join(DEFAULT_OUTPUT))
        .await
}

pub fn decode(text: &str) -> Result<SchemaTagged, PromptError> {
    Ok(serde_json::from_str(text)?)
}

pub async fn read(path: impl AsRef<Path>) -> Result<SchemaTagged, PromptError> {
    let path = path.as_ref();
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| PromptError::io(path, e))?;
    decode(&text)
}
