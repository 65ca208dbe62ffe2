use serde::{Deserialize, Serialize};

use super::lenient::null_as_default;

use crate::constants::DEFAULT_DEVICE;

/// Credentials and device identity attached to authenticated requests.
///
/// Passed explicitly to the API client; nothing reads it from ambient state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub usuario: String,
    #[serde(default = "default_device")]
    pub dispositivo: String,
}

fn default_device() -> String {
    DEFAULT_DEVICE.to_string()
}

impl Session {
    /// Builds a session on the default device. Quotes around the token are
    /// stripped, as some logins hand it back JSON-quoted.
    pub fn new(token: impl Into<String>, usuario: impl Into<String>) -> Self {
        Self {
            token: token.into().replace('"', ""),
            usuario: usuario.into(),
            dispositivo: default_device(),
        }
    }

    pub fn with_device(mut self, dispositivo: impl Into<String>) -> Self {
        self.dispositivo = dispositivo.into();
        self
    }

    pub fn has_token(&self) -> bool {
        !self.token.trim().is_empty()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub usuario: String,
    #[serde(rename = "contraseña")]
    pub password: String,
    pub dispositivo: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Team {
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub nombre: String,
    #[serde(deserialize_with = "null_as_default")]
    pub nombre_estadio: String,
    #[serde(deserialize_with = "null_as_default")]
    pub url_escudo: String,
    pub estatus: bool,
    pub presupuesto_inicial: f64,
    pub presupuesto_final: f64,
    pub total_jugadores: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub nombre_grupo: String,
    pub id_usuario: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Season {
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub descripcion: String,
    pub activa: bool,
    pub transferencias_activas: bool,
    pub publicacion_activa: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct User {
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub nombre_usuario: String,
    pub administrador: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub token: String,
    pub equipo: Option<Team>,
}

/// `datos` of a successful login
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoginData {
    pub usuario: User,
    pub temporada: Season,
}

impl LoginData {
    pub fn session(&self, dispositivo: &str) -> Session {
        Session::new(self.usuario.token.clone(), self.usuario.nombre_usuario.clone())
            .with_device(dispositivo)
    }
}
