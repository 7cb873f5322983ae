use thiserror::Error;

/// Failure modes when talking to the calculation service.
///
/// Messages are user-facing (the CLI surfaces them verbatim), hence Spanish.
/// No variant triggers an automatic retry; the user resubmits.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request ran past the configured timeout and was aborted.
    #[error("el servidor tardó demasiado en responder")]
    Timeout,

    #[error("error de red: {0}")]
    Network(String),

    /// Non-2xx response; `detail` carries the server's message when the
    /// body was parseable, a generic fallback otherwise.
    #[error("el servidor respondió {status}: {detail}")]
    Status { status: u16, detail: String },

    /// The response arrived but did not match the expected shape.
    #[error("respuesta inválida del servidor: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::Timeout
        } else if error.is_decode() {
            Self::Decode(error.to_string())
        } else {
            Self::Network(error.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn status_error_carries_server_detail() {
        let error = ApiError::Status {
            status: 400,
            detail: "El PDF no es un F.572 válido".to_string(),
        };

        assert_eq!(
            error.to_string(),
            "el servidor respondió 400: El PDF no es un F.572 válido"
        );
    }

    #[test]
    fn timeout_has_a_distinct_message() {
        assert_eq!(
            ApiError::Timeout.to_string(),
            "el servidor tardó demasiado en responder"
        );
    }
}
