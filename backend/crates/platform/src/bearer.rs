//! Bearer Token Extraction
//!
//! Pulls the token out of an `Authorization: Bearer <token>` header.
//! Anything that is not exactly the Bearer scheme counts as "no token",
//! so a wrong scheme is indistinguishable from an absent header.

use axum::http::{HeaderMap, header};

/// Extract a bearer token from request headers
pub fn extract_bearer(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;

    let (scheme, token) = value.split_once(' ')?;
    if scheme != "Bearer" || token.is_empty() {
        return None;
    }

    Some(token.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with_authorization(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static(value));
        headers
    }

    #[test]
    fn test_extract_bearer() {
        let headers = headers_with_authorization("Bearer abc.def.ghi");
        assert_eq!(extract_bearer(&headers), Some("abc.def.ghi".to_string()));
    }

    #[test]
    fn test_missing_header() {
        assert_eq!(extract_bearer(&HeaderMap::new()), None);
    }

    #[test]
    fn test_wrong_scheme() {
        let headers = headers_with_authorization("Basic dXNlcjpwYXNz");
        assert_eq!(extract_bearer(&headers), None);
    }

    #[test]
    fn test_scheme_is_case_sensitive() {
        let headers = headers_with_authorization("bearer abc.def.ghi");
        assert_eq!(extract_bearer(&headers), None);
    }

    #[test]
    fn test_bare_scheme() {
        let headers = headers_with_authorization("Bearer");
        assert_eq!(extract_bearer(&headers), None);

        let headers = headers_with_authorization("Bearer ");
        assert_eq!(extract_bearer(&headers), None);
    }
}
