//! Application-wide constants and configuration values
//!
//! This module centralizes the magic numbers, endpoint paths and header
//! values shared by the API client, the cache and the CLI.

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 16;

/// Device name sent with authenticated requests when none is stored
pub const DEFAULT_DEVICE: &str = "postman";

/// Client version header expected by the backend
pub const CLIENT_VERSION: &str = "3.0";

/// Value of the `tipo-app` header
pub const APP_KIND: &str = "app";

/// Player name used when a statistic entry carries none
pub const DEFAULT_PLAYER_NAME: &str = "Jugador";

/// Confirmation shown before a match is closed
pub const CLOSE_CONFIRMATION_PROMPT: &str = "Atención: Una vez enviada la información, solo un administrador podrá revertir el resultado. ¿Deseas continuar?";

/// Message shown once a match result has been stored
pub const CLOSE_SUCCESS_MESSAGE: &str = "¡Encuentro guardado con éxito!";

/// Message used when a save fails without a server message
pub const CLOSE_FAILURE_MESSAGE: &str = "Error al guardar el encuentro";

/// REST endpoint paths, relative to the configured API domain
pub mod endpoints {
    pub const LOGIN: &str = "/api/login/acceder";
    pub const TEAMS: &str = "/api/equipos/obtener";
    pub const ROUNDS: &str = "/api/jornadas/obtener";
    pub const ROUND_MATCHES: &str = "/api/jornadas/encuentros";
    pub const PENDING_MATCHES: &str = "/api/jornadas/pendientes";
    pub const PLAYED_MATCHES: &str = "/api/jornadas/jugados";
    pub const MATCH_INFO: &str = "/api/jornadas/informacion-encuentro";
    pub const SAVE_MATCH: &str = "/api/jornadas/guardar-encuentro";

    /// Endpoints whose cached responses describe match lists
    pub const MATCH_LISTS: [&str; 3] = [ROUND_MATCHES, PENDING_MATCHES, PLAYED_MATCHES];
}

/// Cache TTL (Time To Live) values in seconds
pub mod cache_ttl {
    /// Match lists change whenever a result is captured
    pub const MATCH_LIST_SECONDS: u64 = 60;

    /// Rounds only change when an administrator opens or closes one
    pub const ROUNDS_SECONDS: u64 = 600;

    /// Team list (1 hour)
    pub const TEAMS_SECONDS: u64 = 3600;
}

/// Capacity of the HTTP response LRU cache
pub const HTTP_RESPONSE_CACHE_CAPACITY: usize = 100;

/// Environment variable names
pub mod env_vars {
    /// Environment variable for API domain override
    pub const API_DOMAIN: &str = "FUCHIBOLI_API_DOMAIN";

    /// Environment variable for log file path override
    pub const LOG_FILE: &str = "FUCHIBOLI_LOG_FILE";

    /// Environment variable for HTTP timeout override in seconds
    pub const HTTP_TIMEOUT: &str = "FUCHIBOLI_HTTP_TIMEOUT";

    /// Session token override
    pub const TOKEN: &str = "FUCHIBOLI_TOKEN";

    /// Session user override
    pub const USER: &str = "FUCHIBOLI_USER";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_list_endpoints_are_round_endpoints() {
        for endpoint in endpoints::MATCH_LISTS {
            assert!(endpoint.starts_with("/api/jornadas/"));
        }
        assert!(!endpoints::MATCH_LISTS.contains(&endpoints::MATCH_INFO));
    }

    #[test]
    fn test_ttl_ordering() {
        assert!(cache_ttl::MATCH_LIST_SECONDS < cache_ttl::ROUNDS_SECONDS);
        assert!(cache_ttl::ROUNDS_SECONDS < cache_ttl::TEAMS_SECONDS);
    }
}
