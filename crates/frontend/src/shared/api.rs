//! Thin fetch layer over the purchase-agency REST API.
//!
//! Every non-success response is reduced to an [`ApiError`]; error bodies are
//! JSON with an optional `detail` string and the pages choose the fallback
//! text when it is missing. Nothing here retries or throws.

use gloo_net::http::{Method, Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Failure of a backend call, reduced to what the pages need for messaging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    Network(String),
    /// Non-success HTTP status; `detail` parsed from the JSON body if present.
    Status { status: u16, detail: Option<String> },
}

impl ApiError {
    /// User-facing text: the backend's `detail` when it sent one, otherwise
    /// the caller's fallback message.
    pub fn message(&self, fallback: &str) -> String {
        match self {
            ApiError::Status {
                detail: Some(detail),
                ..
            } => detail.clone(),
            _ => fallback.to_string(),
        }
    }
}

/// Pull the optional `detail` string out of an error body.
pub fn extract_detail(body: &str) -> Option<String> {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()?
        .get("detail")?
        .as_str()
        .map(|detail| detail.to_string())
}

fn network_error(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

async fn check(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let detail = match response.text().await {
        Ok(body) => extract_detail(&body),
        Err(_) => None,
    };
    log::warn!("request failed with HTTP {}", status);
    Err(ApiError::Status { status, detail })
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = Request::get(path).send().await.map_err(network_error)?;
    let response = check(response).await?;
    response.json::<T>().await.map_err(network_error)
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let response = Request::post(path)
        .json(body)
        .map_err(network_error)?
        .send()
        .await
        .map_err(network_error)?;
    let response = check(response).await?;
    response.json::<T>().await.map_err(network_error)
}

/// POST where the page only cares about success, not the response body.
pub async fn post_unit<B: Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
    let response = Request::post(path)
        .json(body)
        .map_err(network_error)?
        .send()
        .await
        .map_err(network_error)?;
    check(response).await.map(|_| ())
}

/// Partial update; the payload decides which fields are present.
pub async fn patch_unit<B: Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
    let response = RequestBuilder::new(path)
        .method(Method::PATCH)
        .json(body)
        .map_err(network_error)?
        .send()
        .await
        .map_err(network_error)?;
    check(response).await.map(|_| ())
}

pub async fn put_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let response = RequestBuilder::new(path)
        .method(Method::PUT)
        .json(body)
        .map_err(network_error)?
        .send()
        .await
        .map_err(network_error)?;
    let response = check(response).await?;
    response.json::<T>().await.map_err(network_error)
}

/// POST returning a binary body (the channel CSV blob).
pub async fn post_binary<B: Serialize>(path: &str, body: &B) -> Result<Vec<u8>, ApiError> {
    let response = Request::post(path)
        .json(body)
        .map_err(network_error)?
        .send()
        .await
        .map_err(network_error)?;
    let response = check(response).await?;
    response.binary().await.map_err(network_error)
}

/// Multipart upload; the browser sets the content type from the form data.
pub async fn post_form_data(path: &str, form: web_sys::FormData) -> Result<(), ApiError> {
    let response = RequestBuilder::new(path)
        .method(Method::POST)
        .body(form)
        .map_err(network_error)?
        .send()
        .await
        .map_err(network_error)?;
    check(response).await.map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_is_extracted_from_error_bodies() {
        assert_eq!(
            extract_detail(r#"{"detail":"상품 정보를 불러오지 못했습니다."}"#),
            Some("상품 정보를 불러오지 못했습니다.".to_string())
        );
    }

    #[test]
    fn missing_or_malformed_detail_falls_back() {
        assert_eq!(extract_detail("{}"), None);
        assert_eq!(extract_detail("not json"), None);
        assert_eq!(extract_detail(r#"{"detail":42}"#), None);

        let err = ApiError::Status {
            status: 500,
            detail: None,
        };
        assert_eq!(err.message("Failed to import"), "Failed to import");
    }

    #[test]
    fn detail_wins_over_the_fallback_message() {
        let err = ApiError::Status {
            status: 422,
            detail: Some("상품 정보를 불러오지 못했습니다.".to_string()),
        };
        assert_eq!(err.message("Failed to import"), "상품 정보를 불러오지 못했습니다.");
    }
}
