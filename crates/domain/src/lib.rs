mod config;
mod error;
mod record;
mod split;
mod token;

pub use config::{CollectionConfig, HalfTemplate};
pub use error::DomainError;
pub use record::{MetadataRecord, TraitAttribute};
pub use split::HalfSplit;
pub use token::TokenId;
