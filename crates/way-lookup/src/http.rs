//! Response status handling for the lookup service.

use crate::error::LookupError;

/// Pass successful responses through; turn anything else into
/// [`LookupError::Api`] carrying the body text.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, LookupError> {
    if !resp.status().is_success() {
        return Err(LookupError::Api {
            status: resp.status().as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_response(status: u16, body: &'static str) -> reqwest::Response {
        reqwest::Response::from(::http::Response::builder().status(status).body(body).unwrap())
    }

    #[tokio::test]
    async fn api_error_keeps_body() {
        let resp = mock_response(401, r#"{"message":"Invalid API key"}"#);
        let err = check_response(resp).await.unwrap_err();
        match err {
            LookupError::Api { status, message } => {
                assert_eq!(status, 401);
                assert!(message.contains("Invalid API key"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn success_passes_through() {
        let resp = mock_response(200, "[]");
        assert!(check_response(resp).await.is_ok());
    }
}
