//! Docker artifact file written by image publishing plugins.
//!
//! The orchestrator picks the file up after the step finishes and shows the
//! pushed images in its UI.

use std::fs;
use std::path::Path;

use log::debug;
use serde::Serialize;

use crate::error::{Error, Result};

const DOCKER_ARTIFACT_V1: &str = "docker/v1";

/// Kind of registry the images were pushed to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum RegistryType {
    Docker,
    #[serde(rename = "ECR")]
    Ecr,
    #[serde(rename = "GCR")]
    Gcr,
    #[serde(rename = "ACR")]
    Acr,
}

/// A single pushed image reference.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Image {
    pub image: String,
    pub digest: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Data {
    pub registry_type: RegistryType,
    pub registry_url: String,
    pub images: Vec<Image>,
}

/// Top level document of the artifact file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DockerArtifact {
    pub kind: String,
    pub data: Data,
}

impl DockerArtifact {
    /// Describe `image` pushed under every tag in `tags`, all sharing one
    /// digest.
    pub fn new(
        registry_type: RegistryType,
        registry_url: &str,
        image: &str,
        digest: &str,
        tags: &[String],
    ) -> Self {
        let images = tags
            .iter()
            .map(|tag| Image {
                image: format!("{}:{}", image, tag),
                digest: digest.to_string(),
            })
            .collect();

        Self {
            kind: DOCKER_ARTIFACT_V1.to_string(),
            data: Data {
                registry_type,
                registry_url: registry_url.to_string(),
                images,
            },
        }
    }

    /// Render the artifact as tab indented JSON.
    pub fn to_json(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"\t");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser).map_err(|e| Error::Serialization {
            message: format!("failed to serialize docker artifact: {}", e),
        })?;
        Ok(buf)
    }
}

/// Write the docker artifact file at `path`, creating missing parent
/// directories and replacing any existing file.
pub fn write_plugin_artifact_file(
    registry_type: RegistryType,
    path: impl AsRef<Path>,
    registry_url: &str,
    image: &str,
    digest: &str,
    tags: &[String],
) -> Result<()> {
    let path = path.as_ref();
    let artifact = DockerArtifact::new(registry_type, registry_url, image, digest, tags);
    let json = artifact.to_json()?;

    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(|e| Error::io_path("create directory", dir, e))?;
    }
    fs::write(path, json).map_err(|e| Error::io_path("write", path, e))?;

    debug!(
        "wrote docker artifact with {} image(s) to {}",
        artifact.data.images.len(),
        path.display()
    );
    Ok(())
}
