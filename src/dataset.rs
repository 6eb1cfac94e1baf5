use crate::{
    error::{ExportError, KeypointError},
    keypoints::{FaceRow, decode_row},
};
use csv::StringRecord;
use std::path::Path;

/// Rows of a facial keypoints CSV file, kept undecoded until requested.
pub struct KeypointDataset {
    header: StringRecord,
    records: Vec<StringRecord>,
}

impl KeypointDataset {
    /// Reads a CSV file with a header row.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, ExportError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ExportError::DatasetNotFound(path.to_path_buf()));
        }

        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: std::io::Read>(reader: R) -> Result<Self, ExportError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(reader);

        let header = reader.headers()?.clone();
        let records = reader.records().collect::<Result<Vec<_>, _>>()?;

        Ok(Self { header, records })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn header(&self) -> &StringRecord {
        &self.header
    }

    /// Decodes the row at `index`, zero-based. `None` past the end.
    pub fn row(&self, index: usize) -> Option<Result<FaceRow, KeypointError>> {
        self.records
            .get(index)
            .map(|record| decode_row(&self.header, record))
    }
}
