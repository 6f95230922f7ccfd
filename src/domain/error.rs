use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("unknown format tag `{tag}`")]
    UnknownFormat { tag: String },
}

impl DomainError {
    pub fn unknown_format(tag: impl Into<String>) -> Self {
        Self::UnknownFormat { tag: tag.into() }
    }
}
