#[derive(Clone, serde::Deserialize, Debug)]
pub struct Connectors {
    pub novalnet: ConnectorParams,
}

#[derive(Clone, serde::Deserialize, Debug)]
pub struct ConnectorParams {
    /// base url
    pub base_url: String,
}

#[derive(Debug, serde::Deserialize, Clone, Default)]
#[serde(default)]
pub struct Proxy {
    pub http_url: Option<String>,
    pub https_url: Option<String>,
    pub idle_pool_connection_timeout: Option<u64>,
    pub bypass_proxy_urls: Vec<String>,
}

impl Proxy {
    pub fn is_configured(&self) -> bool {
        self.http_url.is_some() || self.https_url.is_some()
    }
}
