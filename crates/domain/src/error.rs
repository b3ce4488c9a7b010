use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    InvalidTokenId(u64),
    EmptyTemplateField(&'static str),
    MalformedBaseUri(String),
    MalformedExtension(String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTokenId(value) => write!(f, "token id must be positive, got {value}"),
            Self::EmptyTemplateField(name) => write!(f, "config field {name} must not be empty"),
            Self::MalformedBaseUri(uri) => {
                write!(f, "base uri must not end with a slash: {uri}")
            }
            Self::MalformedExtension(ext) => {
                write!(f, "image extension must not start with a dot: {ext}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
