use std::{str::FromStr, time::Duration};

use common_utils::{
    request::{Headers, Method, Request, RequestContent},
    CustomResult,
};
use domain_types::{
    errors::{ApiClientError, ConnectorError},
    router_response_types::Response,
    types::Proxy,
};
use error_stack::{report, ResultExt};
use hyperswitch_masking::{ErasedMaskSerialize, Maskable};
use interfaces::connector_integration::BoxedConnectorIntegration;
use once_cell::sync::OnceCell;
use reqwest::Client;
use serde_json::{json, Value};
use tracing::{field::Empty, Instrument};

use crate::shared_metrics;

/// Builds the connector request for `req`, sends it and hands the answer back to the connector.
pub async fn execute_connector_processing_step<Flow, Req, Resp>(
    proxy: &Proxy,
    connector: BoxedConnectorIntegration<'_, Flow, Req, Resp>,
    req: &Req,
    flow_name: &'static str,
) -> CustomResult<Resp, ConnectorError>
where
    Req: std::fmt::Debug + Sync,
    Resp: Send,
{
    let span = tracing::info_span!(
        "nnc_outgoing_app_data",
        connector = connector.id(),
        flow = flow_name,
        request_headers = Empty,
        request_body = Empty,
        response_body = Empty,
        status_code = Empty,
        latency = Empty,
        url = Empty,
    );

    async move {
        let start = tokio::time::Instant::now();
        let request = connector.build_request(req)?.ok_or_else(|| {
            ConnectorError::ProcessingStepFailed(Some(format!("{flow_name} produced no request")))
        })?;

        let headers = masked_headers(&request.headers);
        let masked_request = match request.body.as_ref() {
            Some(RequestContent::Json(body)) => (**body)
                .masked_serialize()
                .unwrap_or(json!({ "error": "failed to mask serialize connector request"})),
            None => Value::Null,
        };
        tracing::Span::current().record("url", tracing::field::display(&request.url));
        tracing::Span::current().record("request_headers", tracing::field::display(&headers));
        tracing::Span::current()
            .record("request_body", tracing::field::display(&masked_request));

        let labels = [flow_name, connector.id()];
        shared_metrics::EXTERNAL_SERVICE_TOTAL_API_CALLS
            .with_label_values(&labels)
            .inc();

        let response = call_connector_api(proxy, request, flow_name)
            .await
            .inspect_err(|err| {
                info_log(
                    "NETWORK_ERROR",
                    &json!(format!(
                        "Failed getting response from connector. Error: {:?}",
                        err
                    )),
                );
                let error = err.current_context().to_string();
                shared_metrics::EXTERNAL_SERVICE_API_CALLS_ERRORS
                    .with_label_values(&[flow_name, connector.id(), error.as_str()])
                    .inc();
            })
            .change_context(ConnectorError::ProcessingStepFailed(None));

        let elapsed = start.elapsed();
        shared_metrics::EXTERNAL_SERVICE_API_CALLS_LATENCY
            .with_label_values(&labels)
            .observe(elapsed.as_secs_f64());
        tracing::Span::current()
            .record("latency", tracing::field::display(elapsed.as_millis()));

        let result = match response? {
            Ok(body) => {
                record_response(&body);
                connector.handle_response(req, body)
            }
            Err(body) => {
                record_response(&body);
                match body.status_code {
                    500..=511 => connector.get_5xx_error_response(req, body),
                    _ => connector.get_error_response(req, body),
                }
            }
        };
        tracing::info!(tag = ?Tag::OutgoingApi, log_type = "api", "Outgoing Request completed");
        result
    }
    .instrument(span)
    .await
}

fn masked_headers(headers: &Headers) -> Value {
    let masked = headers
        .iter()
        .fold(serde_json::Map::new(), |mut acc, (k, v)| {
            let value = match v {
                Maskable::Masked(_) => Value::String("*** alloc::string::String ***".to_string()),
                Maskable::Normal(iv) => Value::String(iv.to_owned()),
            };
            acc.insert(k.clone(), value);
            acc
        });
    Value::Object(masked)
}

fn record_response(body: &Response) {
    tracing::Span::current().record("status_code", tracing::field::display(body.status_code));
    if let Ok(response) = serde_json::from_slice::<Value>(&body.response) {
        tracing::Span::current().record(
            "response_body",
            tracing::field::display(response.masked_serialize().unwrap_or(
                json!({ "error": "failed to mask serialize connector response"}),
            )),
        );
    }
}

pub async fn call_connector_api(
    proxy: &Proxy,
    request: Request,
    flow_name: &str,
) -> CustomResult<Result<Response, Response>, ApiClientError> {
    let url =
        reqwest::Url::parse(&request.url).change_context(ApiClientError::UrlEncodingFailed)?;

    let should_bypass_proxy = proxy.bypass_proxy_urls.contains(&url.to_string());

    let client = create_client(proxy, should_bypass_proxy)?;

    let headers = request.headers.construct_header_map()?;

    let request = {
        match request.method {
            Method::Get => client.get(url),
            Method::Post => {
                let client = client.post(url);
                match request.body {
                    Some(RequestContent::Json(payload)) => client.json(&payload),
                    None => client,
                }
            }
        }
        .add_headers(headers)
    };
    let send_request = async {
        request.send().await.map_err(|error| {
            let api_error = match error {
                error if error.is_timeout() => ApiClientError::RequestTimeoutReceived,
                _ => ApiClientError::RequestNotSent(error.to_string()),
            };
            info_log(
                "REQUEST_FAILURE",
                &json!(format!("Unable to send {flow_name} request to connector.")),
            );
            report!(api_error)
        })
    };

    let response = send_request.await?;

    handle_response(response).await
}

pub fn create_client(
    proxy_config: &Proxy,
    should_bypass_proxy: bool,
) -> CustomResult<Client, ApiClientError> {
    get_base_client(proxy_config, should_bypass_proxy)
}

static NON_PROXIED_CLIENT: OnceCell<Client> = OnceCell::new();
static PROXIED_CLIENT: OnceCell<Client> = OnceCell::new();

fn get_base_client(
    proxy_config: &Proxy,
    should_bypass_proxy: bool,
) -> CustomResult<Client, ApiClientError> {
    Ok(if should_bypass_proxy || !proxy_config.is_configured() {
        &NON_PROXIED_CLIENT
    } else {
        &PROXIED_CLIENT
    }
    .get_or_try_init(|| {
        get_client_builder(proxy_config, should_bypass_proxy)?
            .build()
            .change_context(ApiClientError::ClientConstructionFailed)
            .inspect_err(|err| {
                info_log(
                    "ERROR",
                    &json!(format!("Failed to construct base client. Error: {:?}", err)),
                );
            })
    })?
    .clone())
}

fn get_client_builder(
    proxy_config: &Proxy,
    should_bypass_proxy: bool,
) -> CustomResult<reqwest::ClientBuilder, ApiClientError> {
    let mut client_builder = Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .pool_idle_timeout(Duration::from_secs(
            proxy_config
                .idle_pool_connection_timeout
                .unwrap_or_default(),
        ));

    if should_bypass_proxy {
        return Ok(client_builder);
    }

    if let Some(url) = proxy_config.https_url.as_ref() {
        client_builder = client_builder.proxy(
            reqwest::Proxy::https(url)
                .change_context(ApiClientError::InvalidProxyConfiguration)
                .inspect_err(|err| {
                    info_log(
                        "PROXY_ERROR",
                        &json!(format!("HTTPS proxy configuration error. Error: {:?}", err)),
                    );
                })?,
        );
    }

    if let Some(url) = proxy_config.http_url.as_ref() {
        client_builder = client_builder.proxy(
            reqwest::Proxy::http(url)
                .change_context(ApiClientError::InvalidProxyConfiguration)
                .inspect_err(|err| {
                    info_log(
                        "PROXY_ERROR",
                        &json!(format!("HTTP proxy configuration error. Error: {:?}", err)),
                    );
                })?,
        );
    }

    Ok(client_builder)
}

async fn handle_response(
    resp: reqwest::Response,
) -> CustomResult<Result<Response, Response>, ApiClientError> {
    let status_code = resp.status().as_u16();
    let headers = Some(resp.headers().to_owned());
    match status_code {
        200..=202 | 302 | 204 => {
            let response = resp
                .bytes()
                .await
                .change_context(ApiClientError::ResponseDecodingFailed)?;
            Ok(Ok(Response {
                headers,
                response,
                status_code,
            }))
        }
        400..=599 => {
            let bytes = resp
                .bytes()
                .await
                .change_context(ApiClientError::ResponseDecodingFailed)?;

            Ok(Err(Response {
                headers,
                response: bytes,
                status_code,
            }))
        }
        _ => {
            info_log(
                "UNEXPECTED_RESPONSE",
                &json!("Unexpected response from server."),
            );
            Err(report!(ApiClientError::UnexpectedServerResponse))
        }
    }
}

pub(super) trait HeaderExt {
    fn construct_header_map(self) -> CustomResult<reqwest::header::HeaderMap, ApiClientError>;
}

impl HeaderExt for Headers {
    fn construct_header_map(self) -> CustomResult<reqwest::header::HeaderMap, ApiClientError> {
        use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

        self.into_iter().try_fold(
            HeaderMap::new(),
            |mut header_map, (header_name, header_value)| {
                let header_name = HeaderName::from_str(&header_name)
                    .change_context(ApiClientError::HeaderMapConstructionFailed)?;
                let header_value = header_value.into_inner();
                let header_value = HeaderValue::from_str(&header_value)
                    .change_context(ApiClientError::HeaderMapConstructionFailed)?;
                header_map.append(header_name, header_value);
                Ok(header_map)
            },
        )
    }
}

pub(super) trait RequestBuilderExt {
    fn add_headers(self, headers: reqwest::header::HeaderMap) -> Self;
}

impl RequestBuilderExt for reqwest::RequestBuilder {
    fn add_headers(mut self, headers: reqwest::header::HeaderMap) -> Self {
        self = self.headers(headers);
        self
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Tag {
    /// Call to the payment gateway
    OutgoingApi,
}

#[inline]
pub fn info_log(action: &str, message: &Value) {
    tracing::info!(tags = %action, json_value= %message);
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use hyperswitch_masking::Mask;

    use super::*;

    #[test]
    fn masked_headers_hide_secrets() {
        let mut headers: Headers = HashSet::new();
        headers.insert(("Accept".to_string(), "application/json".to_string().into()));
        headers.insert(("X-NN-Access-Key".to_string(), "a2V5".to_string().into_masked()));

        let value = masked_headers(&headers);
        assert_eq!(value["Accept"], "application/json");
        assert_eq!(value["X-NN-Access-Key"], "*** alloc::string::String ***");
    }

    #[test]
    fn header_map_rejects_invalid_names() {
        let mut headers: Headers = HashSet::new();
        headers.insert(("bad header".to_string(), "value".to_string().into()));
        assert!(headers.construct_header_map().is_err());
    }

    #[test]
    fn unconfigured_proxy_uses_plain_client() {
        let proxy = Proxy::default();
        assert!(!proxy.is_configured());
        assert!(create_client(&proxy, false).is_ok());
    }
}
