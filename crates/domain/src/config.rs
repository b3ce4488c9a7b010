use crate::{DomainError, TraitAttribute};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HalfTemplate {
    pub name_prefix: String,
    pub description: String,
    pub trait_attribute: Option<TraitAttribute>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionConfig {
    pub base_uri: String,
    pub image_extension: String,
    pub primary: HalfTemplate,
    pub companion: HalfTemplate,
}

impl CollectionConfig {
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.base_uri.is_empty() {
            return Err(DomainError::EmptyTemplateField("base_uri"));
        }
        if self.base_uri.ends_with('/') {
            return Err(DomainError::MalformedBaseUri(self.base_uri.clone()));
        }
        if self.image_extension.is_empty() {
            return Err(DomainError::EmptyTemplateField("image_extension"));
        }
        if self.image_extension.starts_with('.') {
            return Err(DomainError::MalformedExtension(
                self.image_extension.clone(),
            ));
        }
        if self.primary.name_prefix.is_empty() {
            return Err(DomainError::EmptyTemplateField("primary.name_prefix"));
        }
        if self.companion.name_prefix.is_empty() {
            return Err(DomainError::EmptyTemplateField("companion.name_prefix"));
        }
        Ok(())
    }
}
