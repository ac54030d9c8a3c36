mod introspection;

pub use introspection::IntrospectionSource;

use async_trait::async_trait;

use crate::schema::parse;
use crate::shared::OperationDeclaration;
use crate::RangerClientError;

/// Where the declared operations of a run come from. Local SDL parsing
/// and remote introspection are interchangeable behind this seam.
#[async_trait]
pub trait OperationSource {
    async fn declared_operations(&self) -> Result<Vec<OperationDeclaration>, RangerClientError>;
}

/// Declared operations read out of a local schema document.
pub struct SdlSource {
    sdl: String,
}

impl SdlSource {
    pub fn new(sdl: impl Into<String>) -> Self {
        Self { sdl: sdl.into() }
    }
}

#[async_trait]
impl OperationSource for SdlSource {
    async fn declared_operations(&self) -> Result<Vec<OperationDeclaration>, RangerClientError> {
        Ok(parse(&self.sdl))
    }
}
