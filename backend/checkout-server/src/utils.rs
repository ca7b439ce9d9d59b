use common_utils::consts;
use http::{header, request::Request, HeaderMap};

/// Record the header's fields in request's trace
pub fn record_fields_from_header<B: hyper::body::Body>(request: &Request<B>) -> tracing::Span {
    let url_path = request.uri().path();

    let span = tracing::debug_span!(
        "request",
        uri = %url_path,
        method = %request.method(),
        version = ?request.version(),
        session_id = tracing::field::Empty,
        request_id = tracing::field::Empty,
    );
    session_id_from_headers(request.headers())
        .map(|session_id| span.record("session_id", session_id));

    request
        .headers()
        .get(consts::X_REQUEST_ID)
        .and_then(|value| value.to_str().ok())
        .map(|request_id| span.record("request_id", request_id));

    span
}

/// Storefront session of the request: the `x-session-id` header, else the session cookie.
pub fn session_id_from_headers(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(consts::X_SESSION_ID)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.trim().is_empty())
        .or_else(|| {
            headers
                .get_all(header::COOKIE)
                .iter()
                .filter_map(|value| value.to_str().ok())
                .flat_map(|cookies| cookies.split(';'))
                .filter_map(|cookie| cookie.trim().split_once('='))
                .find(|(name, value)| *name == consts::SESSION_COOKIE && !value.is_empty())
                .map(|(_, value)| value)
        })
}

/// Storefront language of the request, lower-cased.
///
/// Only a short alphabetic language tag is taken from the header, since it ends up in
/// redirect paths; anything else falls back to `default_language`.
pub fn language_from_headers(headers: &HeaderMap, default_language: &str) -> String {
    headers
        .get(consts::X_LOCALE)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| is_language_tag(value))
        .unwrap_or(default_language)
        .to_lowercase()
}

fn is_language_tag(value: &str) -> bool {
    (2..=consts::MAX_LANGUAGE_TAG_LENGTH).contains(&value.len())
        && value.bytes().all(|byte| byte.is_ascii_alphabetic())
}

#[cfg(test)]
mod tests {
    use http::HeaderValue;

    use super::*;

    #[test]
    fn session_header_wins_over_cookie() {
        let mut headers = HeaderMap::new();
        headers.insert(consts::X_SESSION_ID, HeaderValue::from_static("sess_header"));
        headers.insert(header::COOKIE, HeaderValue::from_static("nn_session=sess_cookie"));
        assert_eq!(session_id_from_headers(&headers), Some("sess_header"));
    }

    #[test]
    fn session_cookie_is_found_among_others() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("theme=dark; nn_session=sess_42; other=1"),
        );
        assert_eq!(session_id_from_headers(&headers), Some("sess_42"));
        assert_eq!(session_id_from_headers(&HeaderMap::new()), None);
    }

    #[test]
    fn language_falls_back_to_default() {
        let mut headers = HeaderMap::new();
        assert_eq!(language_from_headers(&headers, "de"), "de");
        headers.insert(consts::X_LOCALE, HeaderValue::from_static("EN"));
        assert_eq!(language_from_headers(&headers, "de"), "en");
    }

    #[test]
    fn language_must_be_a_plain_tag() {
        for locale in ["/evil.example", "en/../x", "e", "english-language", "d e", ""] {
            let mut headers = HeaderMap::new();
            headers.insert(consts::X_LOCALE, HeaderValue::from_str(locale).expect("header value"));
            assert_eq!(language_from_headers(&headers, "de"), "de", "{locale}");
        }
    }
}
