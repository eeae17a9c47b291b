use serde::{Deserialize, Serialize};
use url::Url;

use crate::validator::{SemanticValidationError, Validator};

/// The upstream opentracker daemon whose statistics are exported.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
pub struct Upstream {
    /// The `host:port` the tracker statistics endpoint listens on, for
    /// example `127.0.0.1:6969`. There is no default value.
    pub address: String,
}

impl Validator for Upstream {
    fn validate(&self) -> Result<(), SemanticValidationError> {
        if self.address.trim().is_empty() {
            return Err(SemanticValidationError::EmptyUpstreamAddress);
        }

        Url::parse(&format!("http://{}/", self.address)).map_err(|source| SemanticValidationError::InvalidUpstreamAddress {
            address: self.address.clone(),
            source,
        })?;

        Ok(())
    }
}
