use std::path::Path;

use mintprep_application::{ApplicationError, AssetSource, DiscoveredAsset};
use walkdir::WalkDir;

#[derive(Debug, Default)]
pub struct WalkdirAssetSource;

impl AssetSource for WalkdirAssetSource {
    fn list_assets(
        &self,
        input_dir: &Path,
        image_extension: &str,
    ) -> Result<Vec<DiscoveredAsset>, ApplicationError> {
        if !input_dir.is_dir() {
            return Err(ApplicationError::NotFound(format!(
                "input directory does not exist or is not a directory: {}",
                input_dir.display()
            )));
        }

        let mut assets = Vec::new();
        for entry in WalkDir::new(input_dir).max_depth(1) {
            let entry = entry.map_err(|error| ApplicationError::Io(error.to_string()))?;
            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();
            let matches_extension = path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case(image_extension));
            if !matches_extension {
                continue;
            }

            // An eligible file whose stem is not an integer aborts the
            // whole run; bad entries are never skipped.
            let stem = path
                .file_stem()
                .and_then(|stem| stem.to_str())
                .unwrap_or_default();
            let index = stem.parse::<u64>().map_err(|_| {
                ApplicationError::Parse(format!(
                    "file name is not an integer: {}",
                    path.display()
                ))
            })?;

            assets.push(DiscoveredAsset {
                path: path.to_path_buf(),
                index,
            });
        }

        Ok(assets)
    }
}
