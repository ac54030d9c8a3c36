mod gateway;
mod lambda;
mod schema;
mod templates;

pub(crate) use gateway::GatewayOpt;
pub(crate) use lambda::LambdaOpt;
pub(crate) use schema::SchemaOpt;
pub(crate) use templates::TemplateOpt;
