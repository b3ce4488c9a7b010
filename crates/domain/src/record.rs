use serde::{Deserialize, Serialize};

use crate::{HalfTemplate, TokenId};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TraitAttribute {
    pub trait_type: String,
    pub value: String,
}

/// One metadata document. Field order is the serialized key order and must
/// stay `name`, `attributes`, `description`, `image`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MetadataRecord {
    pub name: String,
    pub attributes: Vec<TraitAttribute>,
    pub description: String,
    pub image: String,
}

impl MetadataRecord {
    pub fn compose(
        template: &HalfTemplate,
        token_id: TokenId,
        sequence: u64,
        base_uri: &str,
        image_extension: &str,
    ) -> Self {
        Self {
            name: format!("{}{}", template.name_prefix, sequence),
            attributes: template.trait_attribute.iter().cloned().collect(),
            description: template.description.clone(),
            image: format!("{}/{}.{}", base_uri, token_id.get(), image_extension),
        }
    }
}
