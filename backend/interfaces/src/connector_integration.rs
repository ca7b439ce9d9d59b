use common_utils::{
    request::{Method, Request, RequestBuilder, RequestContent},
    CustomResult,
};
use domain_types::{errors::ConnectorError, router_response_types::Response};
use hyperswitch_masking::Maskable;

use crate::api::ConnectorCommon;

pub type BoxedConnectorIntegration<'a, Flow, Req, Resp> =
    Box<&'a (dyn ConnectorIntegration<Flow, Req, Resp> + Send + Sync)>;

/// One call of a connector: how to build it and how to read its answer.
pub trait ConnectorIntegration<Flow, Req, Resp>: ConnectorCommon + Sync {
    fn get_headers(
        &self,
        _req: &Req,
    ) -> CustomResult<Vec<(String, Maskable<String>)>, ConnectorError> {
        Ok(vec![])
    }

    fn get_content_type(&self) -> &'static str {
        self.common_get_content_type()
    }

    fn get_http_method(&self) -> Method {
        Method::Post
    }

    fn get_url(&self, req: &Req) -> CustomResult<String, ConnectorError>;

    fn get_request_body(
        &self,
        _req: &Req,
    ) -> CustomResult<Option<RequestContent>, ConnectorError> {
        Ok(None)
    }

    fn build_request(&self, req: &Req) -> CustomResult<Option<Request>, ConnectorError> {
        let mut builder = RequestBuilder::new()
            .method(self.get_http_method())
            .url(&self.get_url(req)?)
            .headers(self.get_headers(req)?);
        if let Some(body) = self.get_request_body(req)? {
            builder = builder.set_body(body);
        }
        Ok(Some(builder.build()))
    }

    fn handle_response(&self, req: &Req, res: Response) -> CustomResult<Resp, ConnectorError>;

    fn get_error_response(&self, req: &Req, res: Response) -> CustomResult<Resp, ConnectorError>;

    fn get_5xx_error_response(
        &self,
        req: &Req,
        res: Response,
    ) -> CustomResult<Resp, ConnectorError> {
        self.get_error_response(req, res)
    }
}
