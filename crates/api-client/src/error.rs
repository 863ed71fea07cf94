use shared_types::AppError;
use thiserror::Error;

/// Failure of a single backend call.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request to {path} failed: {source}")]
    Transport {
        path: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{path} returned status {status}")]
    Status {
        path: String,
        status: u16,
        body: String,
    },

    #[error("could not decode response from {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: reqwest::Error,
    },
}

impl ClientError {
    /// HTTP status, when the backend answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<ClientError> for AppError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Transport { source, .. } => AppError::network(source.to_string()),
            ClientError::Status { status, body, .. } => AppError::from_status(status, &body),
            ClientError::Decode { source, .. } => AppError::decode(source.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::AppErrorKind;

    #[test]
    fn status_error_converts_with_server_message() {
        let err = ClientError::Status {
            path: "/auth/admin/register".into(),
            status: 409,
            body: r#"{"message":"Cet email existe déjà"}"#.into(),
        };
        assert_eq!(err.status(), Some(409));
        let app: AppError = err.into();
        assert_eq!(app.kind, AppErrorKind::Conflict);
        assert_eq!(app.message, "Cet email existe déjà");
    }

    #[test]
    fn status_error_display_names_path() {
        let err = ClientError::Status {
            path: "/settings/maintenance".into(),
            status: 500,
            body: String::new(),
        };
        assert_eq!(err.to_string(), "/settings/maintenance returned status 500");
    }
}
