use std::ops::{Deref, DerefMut};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use bytes::BytesMut;
use futures_util::StreamExt;
use serde::de::DeserializeOwned;
use serde_json::Error as JsonError;
use tracing::warn;

use crate::error::AppError;
use crate::web::trace_ctx;

/// JSON extractor with standardized error handling: any body-read or
/// deserialization failure becomes a 400 Problem Details response with the
/// canonical validation code, instead of actix's default error shape.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<T> ValidatedJson<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for ValidatedJson<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for ValidatedJson<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<T> FromRequest for ValidatedJson<T>
where
    T: DeserializeOwned + 'static,
{
    type Error = AppError;
    type Future = std::pin::Pin<Box<dyn std::future::Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(_req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let mut payload = payload.take();

        Box::pin(async move {
            let mut body = BytesMut::new();
            while let Some(chunk) = payload.next().await {
                let chunk = chunk.map_err(|e| {
                    warn!(trace_id = %trace_ctx::trace_id(), error = %e, "Failed to read request body");
                    AppError::bad_request(
                        "BAD_REQUEST",
                        "Failed to read request body".to_string(),
                    )
                })?;
                body.extend_from_slice(&chunk);
            }

            let parsed = serde_json::from_slice::<T>(&body)
                .map_err(|e| AppError::invalid("VALIDATION", classify_json_error(&e)))?;

            Ok(ValidatedJson(parsed))
        })
    }
}

/// Turn a serde_json error into a caller-facing detail string without
/// echoing body content back.
fn classify_json_error(e: &JsonError) -> String {
    if e.is_eof() {
        "Request body is empty or truncated".to_string()
    } else if e.is_syntax() {
        format!("Request body is not valid JSON (line {}, column {})", e.line(), e.column())
    } else if e.is_data() {
        format!("Request body has missing or mistyped fields: {e}")
    } else {
        "Request body could not be parsed".to_string()
    }
}
