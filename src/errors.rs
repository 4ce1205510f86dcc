use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("not authenticated")]
    Unauthenticated,

    #[error("not the owner of this listing")]
    NotOwner,

    #[error("not found: {0}")]
    NotFound(String),

    #[error("those dates are no longer available")]
    DateConflict,

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("a booking submission is already in flight")]
    SubmissionInFlight,

    #[error("malformed response: {0}")]
    Decode(String),

    #[error("server error ({status}): {message}")]
    Server { status: u16, message: String },
}

impl ApiError {
    /// Map a non-2xx backend status to the error taxonomy. The backend
    /// categorizes by HTTP status, not custom codes.
    pub fn from_status(status: u16, body: &Value) -> Self {
        match status {
            400 => ApiError::Validation(message_from(body)),
            401 | 403 => ApiError::Unauthenticated,
            404 => ApiError::NotFound(message_from(body)),
            _ => ApiError::Server {
                status,
                message: message_from(body),
            },
        }
    }

    /// Same mapping, but for operations only a listing's owner may perform,
    /// where the backend answers 403 to everyone else.
    pub fn from_owner_status(status: u16, body: &Value) -> Self {
        if status == 403 {
            return ApiError::NotOwner;
        }
        Self::from_status(status, body)
    }
}

fn message_from(body: &Value) -> String {
    body.get("detail")
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| body.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_400_is_validation() {
        let err = ApiError::from_status(400, &json!({"guests": ["required"]}));
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[test]
    fn test_status_401_and_403_are_unauthenticated() {
        assert!(matches!(
            ApiError::from_status(401, &json!({})),
            ApiError::Unauthenticated
        ));
        assert!(matches!(
            ApiError::from_status(403, &json!({})),
            ApiError::Unauthenticated
        ));
    }

    #[test]
    fn test_owner_status_403_is_not_owner() {
        assert!(matches!(
            ApiError::from_owner_status(403, &json!({})),
            ApiError::NotOwner
        ));
        assert!(matches!(
            ApiError::from_owner_status(404, &json!({"detail": "Not found."})),
            ApiError::NotFound(_)
        ));
    }

    #[test]
    fn test_detail_message_is_extracted() {
        let err = ApiError::from_status(404, &json!({"detail": "Room not found"}));
        assert_eq!(err.to_string(), "not found: Room not found");
    }

    #[test]
    fn test_5xx_is_server_error() {
        let err = ApiError::from_status(502, &json!({}));
        assert!(matches!(err, ApiError::Server { status: 502, .. }));
    }
}
