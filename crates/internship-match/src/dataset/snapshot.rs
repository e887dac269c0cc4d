use super::domain::InternshipRecord;
use super::DatasetError;
use std::io::{Read, Write};
use std::path::Path;
use tracing::debug;

/// Flat CSV snapshot of the simulated dataset.
pub struct InternshipSnapshot;

impl InternshipSnapshot {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<InternshipRecord>, DatasetError> {
        let file = std::fs::File::open(path.as_ref())?;
        let records = Self::from_reader(file)?;
        debug!(path = %path.as_ref().display(), records = records.len(), "snapshot loaded");
        Ok(records)
    }

    /// Reads every row, lowercasing both sector columns so they compare cleanly.
    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<InternshipRecord>, DatasetError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut records = Vec::new();

        for row in csv_reader.deserialize::<InternshipRecord>() {
            let mut record = row?;
            record.pref_sector = record.pref_sector.to_lowercase();
            record.req_sector = record.req_sector.to_lowercase();
            records.push(record);
        }

        Ok(records)
    }

    pub fn to_path<P: AsRef<Path>>(
        path: P,
        records: &[InternshipRecord],
    ) -> Result<(), DatasetError> {
        let file = std::fs::File::create(path.as_ref())?;
        Self::to_writer(file, records)?;
        debug!(path = %path.as_ref().display(), records = records.len(), "snapshot written");
        Ok(())
    }

    pub fn to_writer<W: Write>(
        writer: W,
        records: &[InternshipRecord],
    ) -> Result<(), DatasetError> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        for record in records {
            csv_writer.serialize(record)?;
        }
        csv_writer.flush()?;
        Ok(())
    }
}
