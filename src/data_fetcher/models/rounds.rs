use serde::{Deserialize, Serialize};

use super::lenient::null_as_default;

/// A round (jornada) of a tournament
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Round {
    pub id: i64,
    pub numero: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub descripcion: String,
    pub activa: bool,
    pub cerrada: bool,
    pub eliminatoria: bool,
    pub id_temporada: i64,
    pub id_torneo: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EncounterTeam {
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub nombre: String,
    #[serde(deserialize_with = "null_as_default")]
    pub url_escudo: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PublishingUser {
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub nombre_usuario: String,
}

/// A match (encuentro) as returned by the list endpoints
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Encounter {
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub marcador_local: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub marcador_visita: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub completado: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub cerrado: bool,
    pub fecha_publicacion: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub equipo_local: EncounterTeam,
    #[serde(deserialize_with = "null_as_default")]
    pub equipo_visita: EncounterTeam,
    pub jornada: Option<Round>,
    pub usuario_publicacion: Option<PublishingUser>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_encounter_deserialization() {
        let encounter: Encounter = serde_json::from_value(json!({
            "id": 81,
            "marcadorLocal": 2,
            "marcadorVisita": 1,
            "completado": true,
            "cerrado": true,
            "fechaPublicacion": "2025-03-02T18:00:00",
            "equipoLocal": { "id": 1, "nombre": "Rayados FC", "urlEscudo": "https://x/1.png" },
            "equipoVisita": { "id": 2, "nombre": "Tuzos", "urlEscudo": "https://x/2.png" },
            "jornada": { "id": 5, "numero": 5, "descripcion": "Jornada 5", "activa": true,
                         "cerrada": false, "eliminatoria": false, "idTemporada": 3, "idTorneo": 1 },
            "usuarioPublicacion": { "id": 9, "nombreUsuario": "admin" }
        }))
        .unwrap();

        assert_eq!(encounter.id, 81);
        assert_eq!(encounter.equipo_local.nombre, "Rayados FC");
        assert_eq!(encounter.jornada.unwrap().id_temporada, 3);
        assert_eq!(encounter.usuario_publicacion.unwrap().nombre_usuario, "admin");
    }

    #[test]
    fn test_encounter_missing_fields_default() {
        let encounter: Encounter = serde_json::from_value(json!({ "id": 4 })).unwrap();
        assert_eq!(encounter.marcador_local, 0);
        assert!(!encounter.cerrado);
        assert!(encounter.jornada.is_none());
        assert_eq!(encounter.equipo_visita.nombre, "");
    }
}
