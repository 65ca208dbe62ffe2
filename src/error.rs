use thiserror::Error;

/// Message shown when a close is attempted without any result image.
pub const MISSING_EVIDENCE_MESSAGE: &str =
    "Es obligatorio capturar al menos un link de imagen del resultado.";

/// Fallback message when the server reports an error without a `mensaje`.
pub const DEFAULT_SERVER_MESSAGE: &str = "Error en la petición al servidor";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to fetch data from API: {0}")]
    ApiFetch(#[from] reqwest::Error),

    #[error("Failed to parse API response: {0}")]
    ApiParse(#[from] serde_json::Error),

    // Specific HTTP status code errors
    #[error("API request not found (404): {url}")]
    ApiNotFound { url: String },

    #[error("API server error ({status}): {message} (URL: {url})")]
    ApiServerError {
        status: u16,
        message: String,
        url: String,
    },

    #[error("API client error ({status}): {message} (URL: {url})")]
    ApiClientError {
        status: u16,
        message: String,
        url: String,
    },

    #[error("API rate limit exceeded (429): {message} (URL: {url})")]
    ApiRateLimit { message: String, url: String },

    #[error("API service unavailable ({status}): {message} (URL: {url})")]
    ApiServiceUnavailable {
        status: u16,
        message: String,
        url: String,
    },

    /// The response envelope carried an `estado` other than 200.
    #[error("Server rejected the request (estado {estado}): {message}")]
    ApiEnvelope { estado: i64, message: String },

    // Network-specific errors
    #[error("Network timeout while fetching data from: {url}")]
    NetworkTimeout { url: String },

    #[error("Connection failed to: {url} - {message}")]
    NetworkConnection { url: String, message: String },

    #[error("API returned malformed JSON: {message} (URL: {url})")]
    ApiMalformedJson { message: String, url: String },

    #[error("API returned unexpected data structure: {message} (URL: {url})")]
    ApiUnexpectedStructure { message: String, url: String },

    // Session and match workflow errors
    #[error("No authenticated user")]
    NotAuthenticated,

    #[error("{}", MISSING_EVIDENCE_MESSAGE)]
    MissingEvidence,

    #[error("Match {match_id} is closed and can no longer be edited")]
    MatchClosed { match_id: i64 },

    #[error("A submission for match {match_id} is already in progress")]
    SubmissionInFlight { match_id: i64 },

    #[error("Player {player_id} is not listed for the {side} side")]
    UnknownPlayer { player_id: i64, side: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),
}

impl AppError {
    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// Create an API not found error
    pub fn api_not_found(url: impl Into<String>) -> Self {
        Self::ApiNotFound { url: url.into() }
    }

    /// Create an API server error (5xx status codes)
    pub fn api_server_error(
        status: u16,
        message: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self::ApiServerError {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create an API client error (4xx status codes except 404 and 429)
    pub fn api_client_error(
        status: u16,
        message: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self::ApiClientError {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create an API rate limit error
    pub fn api_rate_limit(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiRateLimit {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create an API service unavailable error
    pub fn api_service_unavailable(
        status: u16,
        message: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self::ApiServiceUnavailable {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create an error from a response envelope whose `estado` is not 200
    pub fn api_envelope(estado: i64, message: impl Into<String>) -> Self {
        Self::ApiEnvelope {
            estado,
            message: message.into(),
        }
    }

    /// Create a network timeout error
    pub fn network_timeout(url: impl Into<String>) -> Self {
        Self::NetworkTimeout { url: url.into() }
    }

    /// Create a network connection error
    pub fn network_connection(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::NetworkConnection {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create a malformed JSON error
    pub fn api_malformed_json(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiMalformedJson {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create an unexpected data structure error
    pub fn api_unexpected_structure(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiUnexpectedStructure {
            message: message.into(),
            url: url.into(),
        }
    }

    pub fn unknown_player(player_id: i64, side: impl Into<String>) -> Self {
        Self::UnknownPlayer {
            player_id,
            side: side.into(),
        }
    }

    /// Check if error indicates data not found
    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::ApiNotFound { .. })
    }

    /// Errors caused by the operator's input rather than by transport or server.
    /// These are shown as-is and never logged as failures.
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            AppError::MissingEvidence
                | AppError::MatchClosed { .. }
                | AppError::SubmissionInFlight { .. }
                | AppError::UnknownPlayer { .. }
                | AppError::NotAuthenticated
        )
    }

    /// Text presented to the operator. Server-provided messages are shown verbatim.
    pub fn user_message(&self) -> String {
        match self {
            AppError::ApiEnvelope { message, .. } => message.clone(),
            AppError::ApiServerError { message, .. }
            | AppError::ApiClientError { message, .. }
            | AppError::ApiServiceUnavailable { message, .. } => message.clone(),
            AppError::NotAuthenticated => {
                "No hay una sesión activa. Inicia sesión con --login.".to_string()
            }
            other => other.to_string(),
        }
    }
}
