pub mod health_check;
pub mod notifications;
pub mod payments;
pub mod wallet;

use std::convert::Infallible;

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use common_utils::{consts, fp_utils::generate_id_with_default_len, CustomResult};
use domain_types::{errors::StorageError, notification::Notification};

use crate::{app::AppState, flows::CheckoutRedirect, utils};

/// Storefront session and language of the current request.
///
/// A request without a session gets a fresh id, which is handed back as the session cookie.
#[derive(Debug, Clone)]
pub struct CheckoutSession {
    pub id: String,
    /// Lower-cased, as used in storefront paths
    pub lang: String,
    issued: bool,
}

impl CheckoutSession {
    /// Language as sent to the gateway.
    pub fn gateway_lang(&self) -> String {
        self.lang.to_uppercase()
    }

    fn set_cookie(&self) -> Option<HeaderValue> {
        if !self.issued {
            return None;
        }
        HeaderValue::from_str(&format!(
            "{}={}; Path=/; HttpOnly; Secure; SameSite=None",
            consts::SESSION_COOKIE,
            self.id
        ))
        .ok()
    }
}

impl FromRequestParts<AppState> for CheckoutSession {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let lang = utils::language_from_headers(
            &parts.headers,
            &state.config.storefront.default_language,
        );
        Ok(match utils::session_id_from_headers(&parts.headers) {
            Some(id) => Self {
                id: id.to_string(),
                lang,
                issued: false,
            },
            None => {
                let id = generate_id_with_default_len("sess");
                tracing::debug!(session_id = %id, "issuing a new storefront session");
                Self {
                    id,
                    lang,
                    issued: true,
                }
            }
        })
    }
}

/// Turns the outcome of a checkout step into the browser redirect.
///
/// A storage failure ends on `fallback` with the generic error notification.
pub(crate) async fn settle(
    state: &AppState,
    session: &CheckoutSession,
    outcome: CustomResult<CheckoutRedirect, StorageError>,
    fallback: CheckoutRedirect,
) -> Response {
    let target = match outcome {
        Ok(target) => target,
        Err(error) => {
            tracing::error!(?error, "checkout step could not access storefront storage");
            state
                .services
                .notifications
                .push(&session.id, Notification::error(consts::GENERIC_ERROR_TEXT))
                .await;
            fallback
        }
    };
    redirect(state, session, target)
}

pub(crate) fn redirect(
    state: &AppState,
    session: &CheckoutSession,
    target: CheckoutRedirect,
) -> Response {
    let to_gateway = matches!(target, CheckoutRedirect::Gateway(_));
    let location = match target {
        CheckoutRedirect::Confirmation => format!("/{}/confirmation", session.lang),
        CheckoutRedirect::Checkout => state.config.storefront.checkout_path.clone(),
        CheckoutRedirect::PlaceOrder => format!("/{}/place-order", session.lang),
        CheckoutRedirect::Gateway(url) => url,
    };

    let mut response = (StatusCode::FOUND, [(header::LOCATION, location)]).into_response();
    if to_gateway {
        response.headers_mut().insert(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("*"),
        );
    }
    if let Some(cookie) = session.set_cookie() {
        response.headers_mut().append(header::SET_COOKIE, cookie);
    }
    response
}
