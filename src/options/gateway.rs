use std::collections::HashMap;

use clap::Parser;
use ranger_client::gateway::HttpGateway;
use url::Url;

use crate::utils::parsers::parse_header;
use crate::RangerResult;

#[derive(Debug, Parser)]
pub struct GatewayOpt {
    /// The identifier of the gateway API to configure
    #[arg(long = "api-id", env = "API_ID")]
    pub api_id: String,

    /// Base URL of the gateway's control-plane endpoint
    #[arg(long = "endpoint", env = "GATEWAY_ENDPOINT")]
    pub endpoint: Url,

    /// A header to send with every gateway request, as `key:value`. May
    /// be repeated. Auth material goes here; ranger never signs requests
    /// itself.
    #[arg(long = "header", value_name = "KEY:VALUE", value_parser = parse_header)]
    pub headers: Vec<(String, String)>,
}

impl GatewayOpt {
    pub(crate) fn client(&self) -> RangerResult<HttpGateway> {
        Ok(HttpGateway::new(self.endpoint.clone(), &self.header_map())?)
    }

    pub(crate) fn header_map(&self) -> HashMap<String, String> {
        self.headers.iter().cloned().collect()
    }
}
