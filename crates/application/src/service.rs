use std::path::Path;

use mintprep_domain::{CollectionConfig, HalfSplit, MetadataRecord, TokenId};

use crate::{
    ApplicationError, AssetSource, GenerateMetadataCommand, GenerationReport, MetadataSink,
    PlanCollectionCommand, PlannedRecord,
};

pub struct ApplicationService {
    source: Box<dyn AssetSource>,
    sink: Box<dyn MetadataSink>,
}

impl ApplicationService {
    pub fn new(source: Box<dyn AssetSource>, sink: Box<dyn MetadataSink>) -> Self {
        Self { source, sink }
    }

    /// Computes the full token plan without writing anything.
    pub fn plan_collection(
        &self,
        command: PlanCollectionCommand,
    ) -> Result<Vec<PlannedRecord>, ApplicationError> {
        let (_, plan) = self.build_plan(&command.input_dir, &command.config)?;
        Ok(plan)
    }

    /// Writes one metadata file per planned record. Earlier writes are not
    /// rolled back when a later write fails.
    pub fn generate_metadata(
        &self,
        command: GenerateMetadataCommand,
    ) -> Result<GenerationReport, ApplicationError> {
        if command.output_dir.trim().is_empty() {
            return Err(ApplicationError::InvalidInput(
                "output directory must not be empty".to_string(),
            ));
        }

        let (assets_found, plan) = self.build_plan(&command.input_dir, &command.config)?;
        let output_dir = Path::new(&command.output_dir);

        let mut files_written = 0;
        for planned in &plan {
            self.sink
                .write_record(output_dir, planned.token_id, &planned.record)?;
            files_written += 1;
        }

        Ok(GenerationReport {
            assets_found,
            files_written,
        })
    }

    fn build_plan(
        &self,
        input_dir: &str,
        config: &CollectionConfig,
    ) -> Result<(usize, Vec<PlannedRecord>), ApplicationError> {
        if input_dir.trim().is_empty() {
            return Err(ApplicationError::InvalidInput(
                "input directory must not be empty".to_string(),
            ));
        }
        config.validate()?;

        let mut assets = self
            .source
            .list_assets(Path::new(input_dir), &config.image_extension)?;
        assets.sort_unstable_by_key(|asset| asset.index);

        let split = HalfSplit::of(assets.len());
        let mut plan = Vec::with_capacity(split.expected_outputs());

        for position in 0..split.primary_len() {
            let sequence = (position + 1) as u64;
            let token_id = TokenId::new(sequence)?;
            plan.push(PlannedRecord {
                token_id,
                record: MetadataRecord::compose(
                    &config.primary,
                    token_id,
                    sequence,
                    &config.base_uri,
                    &config.image_extension,
                ),
            });
        }

        // Companion numbering restarts at 1; token ids continue from the
        // primary run with no gap.
        for offset in 0..split.companion_len() {
            let sequence = (offset + 1) as u64;
            let token_id = TokenId::new((offset + split.primary_len() + 1) as u64)?;
            plan.push(PlannedRecord {
                token_id,
                record: MetadataRecord::compose(
                    &config.companion,
                    token_id,
                    sequence,
                    &config.base_uri,
                    &config.image_extension,
                ),
            });
        }

        Ok((assets.len(), plan))
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::path::PathBuf;

    use mintprep_domain::{DomainError, HalfTemplate, TraitAttribute};

    use super::*;
    use crate::DiscoveredAsset;

    struct FakeAssetSource {
        assets: Result<Vec<DiscoveredAsset>, String>,
    }

    impl FakeAssetSource {
        fn with_indices(indices: &[u64]) -> Self {
            let assets = indices
                .iter()
                .map(|index| DiscoveredAsset {
                    path: PathBuf::from(format!("{index}.jpg")),
                    index: *index,
                })
                .collect();
            Self { assets: Ok(assets) }
        }
    }

    impl AssetSource for FakeAssetSource {
        fn list_assets(
            &self,
            _input_dir: &Path,
            _image_extension: &str,
        ) -> Result<Vec<DiscoveredAsset>, ApplicationError> {
            match &self.assets {
                Ok(assets) => Ok(assets.clone()),
                Err(msg) => Err(ApplicationError::NotFound(msg.clone())),
            }
        }
    }

    #[derive(Default)]
    struct RecordingSink {
        written: RefCell<Vec<(u64, MetadataRecord)>>,
        fail_on: Option<u64>,
    }

    impl MetadataSink for RecordingSink {
        fn write_record(
            &self,
            _output_dir: &Path,
            token_id: TokenId,
            record: &MetadataRecord,
        ) -> Result<(), ApplicationError> {
            if self.fail_on == Some(token_id.get()) {
                return Err(ApplicationError::Io("disk full".to_string()));
            }
            self.written
                .borrow_mut()
                .push((token_id.get(), record.clone()));
            Ok(())
        }
    }

    fn config() -> CollectionConfig {
        CollectionConfig {
            base_uri: "ipfs://cid".to_string(),
            image_extension: "jpg".to_string(),
            primary: HalfTemplate {
                name_prefix: "Toad #".to_string(),
                description: "a toad".to_string(),
                trait_attribute: Some(TraitAttribute {
                    trait_type: "Type".to_string(),
                    value: "Toad".to_string(),
                }),
            },
            companion: HalfTemplate {
                name_prefix: "Glasses #".to_string(),
                description: "a memento".to_string(),
                trait_attribute: Some(TraitAttribute {
                    trait_type: "Type".to_string(),
                    value: "Glasses".to_string(),
                }),
            },
        }
    }

    fn service(source: FakeAssetSource) -> (ApplicationService, std::rc::Rc<RecordingSink>) {
        let sink = std::rc::Rc::new(RecordingSink::default());
        let service = ApplicationService::new(Box::new(source), Box::new(SharedSink(sink.clone())));
        (service, sink)
    }

    struct SharedSink(std::rc::Rc<RecordingSink>);

    impl MetadataSink for SharedSink {
        fn write_record(
            &self,
            output_dir: &Path,
            token_id: TokenId,
            record: &MetadataRecord,
        ) -> Result<(), ApplicationError> {
            self.0.write_record(output_dir, token_id, record)
        }
    }

    #[test]
    fn five_assets_produce_four_records() {
        let (service, sink) = service(FakeAssetSource::with_indices(&[1, 2, 3, 4, 5]));
        let report = service
            .generate_metadata(GenerateMetadataCommand {
                input_dir: "images".to_string(),
                output_dir: "metadata".to_string(),
                config: config(),
            })
            .expect("generate");

        assert_eq!(report.assets_found, 5);
        assert_eq!(report.files_written, 4);

        let written = sink.written.borrow();
        let ids: Vec<u64> = written.iter().map(|(id, _)| *id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
        assert_eq!(written[0].1.name, "Toad #1");
        assert_eq!(written[1].1.name, "Toad #2");
        assert_eq!(written[2].1.name, "Glasses #1");
        assert_eq!(written[3].1.name, "Glasses #2");
        assert_eq!(written[2].1.image, "ipfs://cid/3.jpg");
        assert_eq!(written[2].1.attributes[0].value, "Glasses");
    }

    #[test]
    fn unsorted_indices_are_sorted_before_splitting() {
        let (service, sink) = service(FakeAssetSource::with_indices(&[5, 1, 3, 2, 4]));
        let report = service
            .generate_metadata(GenerateMetadataCommand {
                input_dir: "images".to_string(),
                output_dir: "metadata".to_string(),
                config: config(),
            })
            .expect("generate");

        assert_eq!(report.files_written, 4);
        let ids: Vec<u64> = sink.written.borrow().iter().map(|(id, _)| *id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn single_asset_writes_nothing() {
        let (service, sink) = service(FakeAssetSource::with_indices(&[1]));
        let report = service
            .generate_metadata(GenerateMetadataCommand {
                input_dir: "images".to_string(),
                output_dir: "metadata".to_string(),
                config: config(),
            })
            .expect("generate");

        assert_eq!(report.assets_found, 1);
        assert_eq!(report.files_written, 0);
        assert!(sink.written.borrow().is_empty());
    }

    #[test]
    fn empty_directory_writes_nothing() {
        let (service, sink) = service(FakeAssetSource::with_indices(&[]));
        let report = service
            .generate_metadata(GenerateMetadataCommand {
                input_dir: "images".to_string(),
                output_dir: "metadata".to_string(),
                config: config(),
            })
            .expect("generate");

        assert_eq!(report.files_written, 0);
        assert!(sink.written.borrow().is_empty());
    }

    #[test]
    fn plan_matches_what_generate_writes() {
        let (service, sink) = service(FakeAssetSource::with_indices(&[1, 2, 3, 4, 5]));
        let plan = service
            .plan_collection(PlanCollectionCommand {
                input_dir: "images".to_string(),
                config: config(),
            })
            .expect("plan");

        service
            .generate_metadata(GenerateMetadataCommand {
                input_dir: "images".to_string(),
                output_dir: "metadata".to_string(),
                config: config(),
            })
            .expect("generate");

        let written = sink.written.borrow();
        assert_eq!(plan.len(), written.len());
        for (planned, (id, record)) in plan.iter().zip(written.iter()) {
            assert_eq!(planned.token_id.get(), *id);
            assert_eq!(&planned.record, record);
        }
    }

    #[test]
    fn sink_failure_keeps_earlier_writes() {
        let sink = std::rc::Rc::new(RecordingSink {
            written: RefCell::new(Vec::new()),
            fail_on: Some(3),
        });
        let service = ApplicationService::new(
            Box::new(FakeAssetSource::with_indices(&[1, 2, 3, 4, 5])),
            Box::new(SharedSink(sink.clone())),
        );

        let result = service.generate_metadata(GenerateMetadataCommand {
            input_dir: "images".to_string(),
            output_dir: "metadata".to_string(),
            config: config(),
        });

        assert!(matches!(result, Err(ApplicationError::Io(_))));
        let ids: Vec<u64> = sink.written.borrow().iter().map(|(id, _)| *id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn source_error_propagates() {
        let source = FakeAssetSource {
            assets: Err("no such directory".to_string()),
        };
        let (service, _) = service(source);
        let result = service.generate_metadata(GenerateMetadataCommand {
            input_dir: "missing".to_string(),
            output_dir: "metadata".to_string(),
            config: config(),
        });
        assert!(matches!(result, Err(ApplicationError::NotFound(_))));
    }

    #[test]
    fn invalid_config_is_rejected() {
        let (service, sink) = service(FakeAssetSource::with_indices(&[1, 2]));
        let mut bad = config();
        bad.base_uri = "ipfs://cid/".to_string();
        let result = service.generate_metadata(GenerateMetadataCommand {
            input_dir: "images".to_string(),
            output_dir: "metadata".to_string(),
            config: bad,
        });
        assert!(matches!(
            result,
            Err(ApplicationError::Domain(DomainError::MalformedBaseUri(_)))
        ));
        assert!(sink.written.borrow().is_empty());
    }

    #[test]
    fn empty_input_dir_is_invalid() {
        let (service, _) = service(FakeAssetSource::with_indices(&[1]));
        let result = service.plan_collection(PlanCollectionCommand {
            input_dir: "  ".to_string(),
            config: config(),
        });
        assert!(matches!(result, Err(ApplicationError::InvalidInput(_))));
    }
}
