mod data_source;
mod operation;
mod publication;
mod resolver;
mod templates;

pub use data_source::{DataSourceKind, DataSourceRef};
pub use operation::{OperationDeclaration, OperationKind, OperationSet};
pub use publication::{PublicationStatus, SchemaCreationStatus};
pub use resolver::RemoteResolver;
pub use templates::{MappingTemplatePair, MappingTemplates};
