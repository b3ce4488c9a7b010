mod error;
mod ports;
mod service;
mod use_cases;

pub use error::ApplicationError;
pub use ports::{AssetSource, DiscoveredAsset, GenerationReport, MetadataSink, PlannedRecord};
pub use service::ApplicationService;
pub use use_cases::{GenerateMetadataCommand, PlanCollectionCommand};
