use thiserror::Error;

use crate::{
    application::preview::PreviewPageError, domain::error::DomainError, infra::error::InfraError,
};

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error(transparent)]
    Infra(#[from] InfraError),
    #[error(transparent)]
    Preview(#[from] PreviewPageError),
    #[error("unexpected error: {0}")]
    Unexpected(String),
}

impl AppError {
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected(message.into())
    }

    /// Process exit status for the binary: 2 for an unknown format tag or bad configuration,
    /// 1 for everything else.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Domain(DomainError::UnknownFormat { .. })
            | AppError::Infra(InfraError::Configuration { .. }) => 2,
            AppError::Infra(InfraError::Io(_))
            | AppError::Infra(InfraError::Telemetry(_))
            | AppError::Preview(_)
            | AppError::Unexpected(_) => 1,
        }
    }
}
