//! Error types for `orgbook-core`.

use thiserror::Error;

use crate::organization::OrganizationId;

#[derive(Debug, Error)]
pub enum Error {
  #[error("organization not found: {0}")]
  OrganizationNotFound(OrganizationId),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
  /// Box a backend error for transport across the engine boundary.
  pub fn store<E>(err: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    Error::Store(Box::new(err))
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
