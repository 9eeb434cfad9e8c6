use std::fmt;

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::{Deserialize, Deserializer};

use crate::error::SyncError;

/// Caracteres que no pueden ir sin escapar dentro de un segmento de path
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// 2^53: a partir de aquí un f64 ya no representa todos los enteros
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Identificador opaco de la plantilla de formulario a sincronizar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormTemplateId(String);

impl FormTemplateId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Id numérico tal como lo pasa una plantilla (`manualSyncToKobo(12)`)
    pub fn from_number(value: f64) -> Self {
        // Solo enteros exactos en f64; el resto conserva su forma decimal
        if value.fract() == 0.0 && value.abs() < MAX_SAFE_INTEGER {
            Self(format!("{}", value as i64))
        } else {
            Self(value.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Id escapado para usarlo como un único segmento de URL
    pub fn path_segment(&self) -> String {
        utf8_percent_encode(&self.0, PATH_SEGMENT).to_string()
    }
}

impl fmt::Display for FormTemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Respuesta JSON del endpoint de sync
/// `{ success: bool, message?: string, form_url?: string, asset_uid?: string }`
/// Un campo con tipo inesperado nunca invalida la respuesta entera.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SyncResponse {
    #[serde(default, deserialize_with = "truthy")]
    pub success: bool,
    #[serde(default, deserialize_with = "display_text")]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "string_only")]
    pub form_url: Option<String>,
    #[serde(default, deserialize_with = "string_only")]
    pub asset_uid: Option<String>,
}

/// `success` se evalúa como en el navegador: cualquier valor "truthy" cuenta
fn truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    use serde_json::Value;

    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null => false,
        Value::Bool(b) => b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    })
}

/// Solo strings; cualquier otro tipo se descarta
fn string_only<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde_json::Value;

    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

/// Texto mostrable: strings tal cual, escalares y estructuras serializados
fn display_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde_json::Value;

    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    })
}

impl SyncResponse {
    /// Parsear el cuerpo de la respuesta, sea cual sea el status HTTP.
    /// El servidor responde 400/403/405/500 con `{success: false, message}`.
    pub fn parse(status: u16, body: &str) -> Result<Self, SyncError> {
        let value: serde_json::Value = serde_json::from_str(body).map_err(|e| SyncError::Parse {
            status,
            reason: e.to_string(),
        })?;

        match value {
            serde_json::Value::Object(_) => {
                serde_json::from_value(value).map_err(|e| SyncError::Parse {
                    status,
                    reason: e.to_string(),
                })
            }
            // `null` no tiene propiedades: equivale a un fallo de transporte
            serde_json::Value::Null => Err(SyncError::Parse {
                status,
                reason: "response body is null".to_string(),
            }),
            // Escalares y arrays no traen `success`: fallo sin mensaje
            _ => Ok(Self::default()),
        }
    }
}

/// Resultado discriminado de una petición de sync
#[derive(Debug, Clone, PartialEq)]
pub enum SyncOutcome {
    /// `success: true`
    Synced {
        message: Option<String>,
        form_url: Option<String>,
    },
    /// `success: false`: fallo lógico reportado por el servidor
    Rejected { message: Option<String> },
    /// Error de red o respuesta no parseable
    TransportError { message: String },
}

impl SyncOutcome {
    pub fn from_result(result: Result<SyncResponse, SyncError>) -> Self {
        match result {
            Ok(response) if response.success => Self::Synced {
                message: response.message,
                form_url: response.form_url,
            },
            Ok(response) => Self::Rejected {
                message: response.message,
            },
            Err(e) => Self::TransportError {
                message: e.to_string(),
            },
        }
    }

    /// Texto de la alerta principal de este resultado
    pub fn alert_message(&self) -> String {
        match self {
            Self::Synced { .. } => "✓ Form synced successfully to KoboToolbox!".to_string(),
            Self::Rejected { message } => format!(
                "✗ Sync failed: {}",
                message.as_deref().unwrap_or("Unknown error")
            ),
            Self::TransportError { message } => format!("Error: {}", message),
        }
    }
}

/// Fase del widget de sync para un click
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncPhase {
    Idle,
    Confirming,
    Requesting,
    /// Terminal: la página se va a recargar
    Reloading,
}

impl SyncPhase {
    /// Transiciones válidas del widget
    pub fn can_transition_to(self, next: SyncPhase) -> bool {
        use SyncPhase::*;
        matches!(
            (self, next),
            (Idle, Confirming)
                | (Confirming, Idle)
                | (Confirming, Requesting)
                | (Requesting, Idle)
                | (Requesting, Reloading)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_id_from_number_drops_fraction() {
        assert_eq!(FormTemplateId::from_number(12.0).as_str(), "12");
        assert_eq!(FormTemplateId::from_number(1.5).as_str(), "1.5");
        assert_eq!(FormTemplateId::from_number(-3.0).as_str(), "-3");
    }

    #[test]
    fn form_id_from_huge_number_keeps_every_digit() {
        assert_eq!(
            FormTemplateId::from_number(1e20).as_str(),
            "100000000000000000000"
        );
        assert_eq!(
            FormTemplateId::from_number(9_007_199_254_740_991.0).as_str(),
            "9007199254740991"
        );
    }

    #[test]
    fn form_id_path_segment_escapes_separators() {
        assert_eq!(FormTemplateId::new("7").path_segment(), "7");
        assert_eq!(FormTemplateId::new("../admin").path_segment(), "..%2Fadmin");
        assert_eq!(FormTemplateId::new("a?b#c").path_segment(), "a%3Fb%23c");
    }

    #[test]
    fn parse_full_success_body() {
        let body = r#"{"success": true, "message": "Form synced", "asset_uid": "aBc123",
                      "form_url": "https://kf.kobotoolbox.org/#/forms/aBc123"}"#;
        let response = SyncResponse::parse(200, body).unwrap();
        assert!(response.success);
        assert_eq!(response.asset_uid.as_deref(), Some("aBc123"));
        assert_eq!(
            response.form_url.as_deref(),
            Some("https://kf.kobotoolbox.org/#/forms/aBc123")
        );
    }

    #[test]
    fn parse_error_status_with_json_body() {
        let body = r#"{"success": false, "message": "You do not have permission to sync forms"}"#;
        let response = SyncResponse::parse(403, body).unwrap();
        assert!(!response.success);
        assert_eq!(
            response.message.as_deref(),
            Some("You do not have permission to sync forms")
        );
    }

    #[test]
    fn parse_treats_missing_or_null_fields_as_absent() {
        let response = SyncResponse::parse(200, r#"{"form_url": null}"#).unwrap();
        assert!(!response.success);
        assert!(response.form_url.is_none());

        let response = SyncResponse::parse(200, r#"{"success": 1}"#).unwrap();
        assert!(response.success);

        let response = SyncResponse::parse(200, r#"{"success": ""}"#).unwrap();
        assert!(!response.success);
    }

    #[test]
    fn parse_tolerates_mistyped_optional_fields() {
        let response =
            SyncResponse::parse(200, r#"{"success": true, "form_url": 42, "asset_uid": 7}"#).unwrap();
        assert!(response.success);
        assert!(response.form_url.is_none());
        assert!(response.asset_uid.is_none());

        let response =
            SyncResponse::parse(200, r#"{"success": true, "form_url": {"href": "x"}}"#).unwrap();
        assert!(response.form_url.is_none());
    }

    #[test]
    fn parse_stringifies_non_string_message() {
        let response = SyncResponse::parse(500, r#"{"success": false, "message": 503}"#).unwrap();
        assert_eq!(response.message.as_deref(), Some("503"));

        let response =
            SyncResponse::parse(400, r#"{"success": false, "message": {"field": "name"}}"#).unwrap();
        assert_eq!(response.message.as_deref(), Some(r#"{"field":"name"}"#));

        let response = SyncResponse::parse(400, r#"{"success": false, "message": null}"#).unwrap();
        assert!(response.message.is_none());
    }

    #[test]
    fn parse_rejects_html_and_null_bodies() {
        let err = SyncResponse::parse(403, "<!DOCTYPE html><h1>CSRF</h1>").unwrap_err();
        assert!(matches!(err, SyncError::Parse { status: 403, .. }));

        let err = SyncResponse::parse(200, "null").unwrap_err();
        assert!(matches!(err, SyncError::Parse { status: 200, .. }));
    }

    #[test]
    fn parse_non_object_json_is_a_plain_failure() {
        assert_eq!(SyncResponse::parse(200, "[1, 2]").unwrap(), SyncResponse::default());
        assert_eq!(SyncResponse::parse(200, "\"ok\"").unwrap(), SyncResponse::default());
    }

    #[test]
    fn outcome_messages() {
        let synced = SyncOutcome::from_result(Ok(SyncResponse {
            success: true,
            ..Default::default()
        }));
        assert!(matches!(synced, SyncOutcome::Synced { .. }));
        assert_eq!(synced.alert_message(), "✓ Form synced successfully to KoboToolbox!");

        let rejected = SyncOutcome::from_result(Ok(SyncResponse {
            success: false,
            message: Some("bad schema".into()),
            ..Default::default()
        }));
        assert_eq!(rejected.alert_message(), "✗ Sync failed: bad schema");

        let rejected = SyncOutcome::from_result(Ok(SyncResponse::default()));
        assert_eq!(rejected.alert_message(), "✗ Sync failed: Unknown error");

        let failed = SyncOutcome::from_result(Err(SyncError::network("Failed to fetch")));
        assert_eq!(failed.alert_message(), "Error: Failed to fetch");
    }

    #[test]
    fn phase_transitions() {
        use SyncPhase::*;
        assert!(Idle.can_transition_to(Confirming));
        assert!(Confirming.can_transition_to(Idle));
        assert!(Requesting.can_transition_to(Reloading));
        assert!(!Idle.can_transition_to(Requesting));
        assert!(!Reloading.can_transition_to(Idle));
    }
}
