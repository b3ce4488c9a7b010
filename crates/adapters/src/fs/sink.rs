use std::fs;
use std::path::Path;

use mintprep_application::{ApplicationError, MetadataSink};
use mintprep_domain::{MetadataRecord, TokenId};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

/// Writes each record as a pretty-printed JSON file named by its decimal
/// token id, with no extension. The output directory must already exist;
/// it is never created here.
#[derive(Debug, Default)]
pub struct JsonFileSink;

impl MetadataSink for JsonFileSink {
    fn write_record(
        &self,
        output_dir: &Path,
        token_id: TokenId,
        record: &MetadataRecord,
    ) -> Result<(), ApplicationError> {
        let mut buffer = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
        record
            .serialize(&mut serializer)
            .map_err(|error| ApplicationError::Io(error.to_string()))?;

        let target = output_dir.join(token_id.get().to_string());
        fs::write(&target, buffer).map_err(|error| ApplicationError::Io(error.to_string()))?;
        Ok(())
    }
}
