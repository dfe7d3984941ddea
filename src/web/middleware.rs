use actix_web::{
    Error,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::header::{HeaderName, HeaderValue},
};
use futures_util::future::{Ready, ok};
use reqwest::Url;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

/// Origin part of the content API url, if it has one.
fn api_origin(api_base_url: &str) -> Option<String> {
    let url = Url::parse(api_base_url).ok()?;
    let origin = url.origin();
    origin.is_tuple().then(|| origin.ascii_serialization())
}

/// Content Security Policy allowing the page to talk to, and load media
/// from, the content API.
pub fn content_security_policy(api_base_url: &str) -> String {
    let api = api_origin(api_base_url)
        .map(|origin| format!(" {}", origin))
        .unwrap_or_default();

    format!(
        "default-src 'self'; script-src 'self' 'unsafe-inline' 'wasm-unsafe-eval'; style-src 'self' 'unsafe-inline'; img-src 'self' data: https:{api}; connect-src 'self'{api}; frame-ancestors 'none'"
    )
}

/// Security headers middleware
#[derive(Clone)]
pub struct SecurityHeaders {
    csp: HeaderValue,
}

impl SecurityHeaders {
    pub fn new(api_base_url: &str) -> Self {
        let policy = content_security_policy(api_base_url);
        let csp = HeaderValue::from_str(&policy).unwrap_or_else(|e| {
            log::warn!("Invalid CSP for API url {}: {}", api_base_url, e);
            HeaderValue::from_static("default-src 'self'; frame-ancestors 'none'")
        });

        Self { csp }
    }
}

impl<S, B> Transform<S, ServiceRequest> for SecurityHeaders
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = SecurityHeadersMiddleware<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(SecurityHeadersMiddleware {
            service,
            csp: self.csp.clone(),
        })
    }
}

pub struct SecurityHeadersMiddleware<S> {
    service: S,
    csp: HeaderValue,
}

impl<S, B> Service<ServiceRequest> for SecurityHeadersMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let fut = self.service.call(req);
        let csp = self.csp.clone();

        Box::pin(async move {
            let mut res = fut.await?;

            let headers = res.headers_mut();

            // Prevent clickjacking
            headers.insert(
                HeaderName::from_static("x-frame-options"),
                HeaderValue::from_static("DENY"),
            );

            // Prevent MIME sniffing
            headers.insert(
                HeaderName::from_static("x-content-type-options"),
                HeaderValue::from_static("nosniff"),
            );

            headers.insert(
                HeaderName::from_static("strict-transport-security"),
                HeaderValue::from_static("max-age=31536000; includeSubDomains"),
            );

            headers.insert(HeaderName::from_static("content-security-policy"), csp);

            headers.insert(
                HeaderName::from_static("referrer-policy"),
                HeaderValue::from_static("strict-origin-when-cross-origin"),
            );

            Ok(res)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_allows_api_origin() {
        let policy = content_security_policy("https://api.odonlab.org/v1/");

        assert!(policy.contains("connect-src 'self' https://api.odonlab.org;"));
        assert!(policy.contains("img-src 'self' data: https: https://api.odonlab.org;"));
    }

    #[test]
    fn test_policy_keeps_port() {
        let policy = content_security_policy("http://localhost:8000");

        assert!(policy.contains("connect-src 'self' http://localhost:8000;"));
    }

    #[test]
    fn test_policy_without_valid_api_url() {
        let policy = content_security_policy("not a url");

        assert!(policy.contains("connect-src 'self';"));
    }
}
