use mintprep_domain::CollectionConfig;

#[derive(Debug, Clone)]
pub struct GenerateMetadataCommand {
    pub input_dir: String,
    pub output_dir: String,
    pub config: CollectionConfig,
}

#[derive(Debug, Clone)]
pub struct PlanCollectionCommand {
    pub input_dir: String,
    pub config: CollectionConfig,
}
