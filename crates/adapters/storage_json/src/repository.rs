//! JSON file repository — load with soft failure, save with atomic replace.

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use rentalhub_app::ports::UnitRepository;
use rentalhub_domain::error::RentalHubError;
use rentalhub_domain::unit::Unit;

use crate::error::StorageError;
use crate::record::UnitRecord;

/// [`UnitRepository`] backed by a single JSON document.
pub struct JsonUnitRepository {
    path: PathBuf,
}

impl JsonUnitRepository {
    /// Create a repository over the given dataset path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The dataset path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_units(&self) -> Result<Vec<Unit>, StorageError> {
        let bytes = tokio::fs::read(&self.path).await?;
        let records: Vec<UnitRecord> = serde_json::from_slice(&bytes)?;
        records.into_iter().map(Unit::try_from).collect()
    }

    async fn write_units(&self, units: Vec<Unit>) -> Result<(), StorageError> {
        let records: Vec<UnitRecord> = units.into_iter().map(UnitRecord::from).collect();

        // Existing datasets are 4-space indented; keep writing that form.
        let mut json = Vec::new();
        let mut ser =
            serde_json::Serializer::with_formatter(&mut json, PrettyFormatter::with_indent(b"    "));
        records.serialize(&mut ser)?;

        // Write a sibling temp file and rename over the target so readers
        // observe either the old or the new dataset, never a partial write.
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, &json).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

impl UnitRepository for JsonUnitRepository {
    async fn load(&self) -> Result<Vec<Unit>, RentalHubError> {
        match self.read_units().await {
            Ok(units) => Ok(units),
            Err(StorageError::Io(err)) if err.kind() == std::io::ErrorKind::NotFound => {
                Ok(Vec::new())
            }
            Err(err) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %err,
                    "unreadable dataset, starting empty"
                );
                Ok(Vec::new())
            }
        }
    }

    async fn save(&self, units: Vec<Unit>) -> Result<(), RentalHubError> {
        self.write_units(units).await.map_err(RentalHubError::from)
    }
}
