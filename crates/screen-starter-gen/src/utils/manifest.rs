use std::path::Path;

use anyhow::Context;
use fmmap::tokio::{AsyncMmapFile, AsyncMmapFileExt};

use crate::generator::discovery::SymbolManifest;

/// Memory-maps a symbol manifest and parses it.
pub struct ManifestLoader {
  file: AsyncMmapFile,
}

impl ManifestLoader {
  pub async fn open(path: &Path) -> anyhow::Result<Self> {
    let file = AsyncMmapFile::open(path)
      .await
      .with_context(|| format!("Failed to open manifest {}", path.display()))?;

    Ok(Self { file })
  }

  /// Parses the manifest; errors name the JSON path of the offending value.
  pub fn parse(&self) -> anyhow::Result<SymbolManifest> {
    let deserializer = &mut serde_json::Deserializer::from_slice(self.file.as_slice());
    serde_path_to_error::deserialize(deserializer).map_err(|err| {
      let path = err.path().to_string();
      anyhow::anyhow!("Invalid manifest at '{path}': {}", err.into_inner())
    })
  }
}
