use std::path::{Path, PathBuf};

use mintprep_domain::{MetadataRecord, TokenId};

use crate::ApplicationError;

/// An eligible image file found in the input directory, with the integer
/// parsed from its file stem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredAsset {
    pub path: PathBuf,
    pub index: u64,
}

pub trait AssetSource {
    fn list_assets(
        &self,
        input_dir: &Path,
        image_extension: &str,
    ) -> Result<Vec<DiscoveredAsset>, ApplicationError>;
}

pub trait MetadataSink {
    fn write_record(
        &self,
        output_dir: &Path,
        token_id: TokenId,
        record: &MetadataRecord,
    ) -> Result<(), ApplicationError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedRecord {
    pub token_id: TokenId,
    pub record: MetadataRecord,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationReport {
    pub assets_found: usize,
    pub files_written: usize,
}
