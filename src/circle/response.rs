//! Response decoding
//!
//! A 200 response is decoded into the expected success shape; anything else is
//! decoded as an API error body. Both paths take the response by value, so the
//! body buffer is released on every exit.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::{CircleError, Result};

use super::transport::RawResponse;

/// The only status treated as success
const SUCCESS_STATUS: u16 = 200;

/// Maximum number of body bytes echoed back in decode errors
const BODY_SNIPPET_LEN: usize = 400;

/// Error body returned by the API on failure
#[derive(Deserialize, Debug)]
struct ErrorBody {
    message: Option<String>,
}

/// Decode a response into `T`, or into an error for non-200 statuses
pub(crate) fn decode_json<T: DeserializeOwned>(response: RawResponse) -> Result<T> {
    if response.status != SUCCESS_STATUS {
        return Err(decode_error(response));
    }
    serde_json::from_slice(&response.body).map_err(|e| {
        CircleError::MalformedResponse(format!("{}: {}", e, snippet(&response.body)))
    })
}

/// Accept a 200 response without looking at its body
pub(crate) fn decode_empty(response: RawResponse) -> Result<()> {
    if response.status != SUCCESS_STATUS {
        return Err(decode_error(response));
    }
    Ok(())
}

/// Turn a failed response into `Api`, or `MalformedErrorResponse` when the
/// body has no usable message
fn decode_error(response: RawResponse) -> CircleError {
    match serde_json::from_slice::<ErrorBody>(&response.body) {
        Ok(ErrorBody {
            message: Some(message),
        }) => CircleError::Api {
            status: response.status,
            message,
        },
        _ => CircleError::MalformedErrorResponse {
            status: response.status,
            body: snippet(&response.body),
        },
    }
}

fn snippet(body: &[u8]) -> String {
    String::from_utf8_lossy(&body[..body.len().min(BODY_SNIPPET_LEN)]).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circle::pagination::Page;

    #[derive(Deserialize, Debug)]
    struct Item {
        name: String,
    }

    #[test]
    fn test_decode_success() {
        let resp = RawResponse::new(200, r#"{"name": "ctx"}"#);
        let item: Item = decode_json(resp).unwrap();
        assert_eq!(item.name, "ctx");
    }

    #[test]
    fn test_decode_success_with_unparsable_body() {
        let resp = RawResponse::new(200, "<html>oops</html>");
        let result: Result<Item> = decode_json(resp);
        match result.unwrap_err() {
            CircleError::MalformedResponse(msg) => assert!(msg.contains("<html>")),
            other => panic!("Expected MalformedResponse, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_page_missing_items_is_malformed() {
        let resp = RawResponse::new(200, r#"{"next_page_token": null}"#);
        let result: Result<Page<Item>> = decode_json(resp);
        assert!(matches!(result, Err(CircleError::MalformedResponse(_))));
    }

    #[test]
    fn test_decode_error_with_message() {
        let resp = RawResponse::new(403, r#"{"message": "Permission denied"}"#);
        let result: Result<Item> = decode_json(resp);
        match result.unwrap_err() {
            CircleError::Api { status, message } => {
                assert_eq!(status, 403);
                assert_eq!(message, "Permission denied");
            }
            other => panic!("Expected Api, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_error_with_null_message() {
        let resp = RawResponse::new(500, r#"{"message": null}"#);
        let result: Result<Item> = decode_json(resp);
        match result.unwrap_err() {
            CircleError::MalformedErrorResponse { status, body } => {
                assert_eq!(status, 500);
                assert!(body.contains("null"));
            }
            other => panic!("Expected MalformedErrorResponse, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_error_with_missing_message() {
        let resp = RawResponse::new(404, "{}");
        assert!(matches!(
            decode_empty(resp),
            Err(CircleError::MalformedErrorResponse { status: 404, .. })
        ));
    }

    #[test]
    fn test_decode_error_with_unparsable_body() {
        let resp = RawResponse::new(502, "Bad Gateway");
        assert!(matches!(
            decode_empty(resp),
            Err(CircleError::MalformedErrorResponse { status: 502, .. })
        ));
    }

    #[test]
    fn test_decode_empty_ignores_body_on_success() {
        let resp = RawResponse::new(200, "not even json");
        assert!(decode_empty(resp).is_ok());
    }

    #[test]
    fn test_non_200_success_codes_are_errors() {
        let resp = RawResponse::new(201, r#"{"message": "created"}"#);
        assert!(matches!(
            decode_empty(resp),
            Err(CircleError::Api { status: 201, .. })
        ));
    }

    #[test]
    fn test_snippet_truncates_long_bodies() {
        let body = vec![b'x'; 1000];
        assert_eq!(snippet(&body).len(), BODY_SNIPPET_LEN);
    }
}
