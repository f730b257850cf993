use {
    actix_web::{
        dev::{Service, ServiceRequest, ServiceResponse, Transform},
        http::header::{HeaderName, HeaderValue},
        Error, HttpMessage,
    },
    futures::{
        future::{ok, Ready},
        task::{Context, Poll},
    },
    std::{future::Future, pin::Pin, time::Instant},
    tracing::Span,
    tracing_futures::Instrument,
    uuid::Uuid,
};

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Wraps every request in a tracing span and tags it with a fresh request id.
pub struct TracingLogger;

impl<S, B> Transform<S, ServiceRequest> for TracingLogger
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = TracingLoggerMiddleware<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(TracingLoggerMiddleware { service })
    }
}

#[doc(hidden)]
pub struct TracingLoggerMiddleware<S> {
    service: S,
}

#[derive(Clone, Copy, Debug)]
pub struct RequestId(Uuid);

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<S, B> Service<ServiceRequest> for TracingLoggerMiddleware<S>
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
        let user_agent = req
            .headers()
            .get("User-Agent")
            .and_then(|h| h.to_str().ok())
            .unwrap_or("")
            .to_string();

        let client_ip = req
            .connection_info()
            .realip_remote_addr()
            .unwrap_or("")
            .to_string();

        let request_id = RequestId(Uuid::new_v4());

        let span = tracing::info_span!(
            "Request",
            http_method = %req.method(),
            request_path = %req.path(),
            user_agent = %user_agent,
            client_ip_address = %client_ip,
            request_id = %request_id,
            status_code = tracing::field::Empty,
        );

        req.extensions_mut().insert(request_id);

        let started = Instant::now();
        let fut = self.service.call(req);

        Box::pin(
            async move {
                let mut outcome = fut.await;

                let status_code = match &outcome {
                    Ok(response) => response.response().status(),
                    Err(error) => error.as_response_error().status_code(),
                };

                Span::current().record("status_code", &status_code.as_u16());

                if let Ok(response) = &mut outcome {
                    if let Ok(value) = HeaderValue::from_str(&request_id.to_string()) {
                        response
                            .headers_mut()
                            .insert(HeaderName::from_static(REQUEST_ID_HEADER), value);
                    }
                }

                tracing::info!(
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "Request completed"
                );

                outcome
            }
            .instrument(span),
        )
    }
}
