/// Severidad de una alerta
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Error,
    Warning,
    Info,
}

impl AlertKind {
    /// Nombre recibido desde JS; cualquier valor desconocido es `Info`
    pub fn from_name(name: &str) -> Self {
        match name {
            "success" => Self::Success,
            "error" => Self::Error,
            "warning" => Self::Warning,
            _ => Self::Info,
        }
    }

    /// Clase Bootstrap del panel
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "alert-success",
            Self::Error => "alert-danger",
            Self::Warning => "alert-warning",
            Self::Info => "alert-info",
        }
    }

    pub fn panel_class(self) -> String {
        format!(
            "alert {} alert-dismissible fade show position-fixed",
            self.css_class()
        )
    }
}

/// Contenido del panel: texto inerte o markup de confianza
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlertContent {
    Text(String),
    Markup(String),
}

impl AlertContent {
    /// Solo las alertas `Info` con `allow_markup` se insertan como HTML
    pub fn for_kind(kind: AlertKind, message: &str, allow_markup: bool) -> Self {
        if allow_markup && kind == AlertKind::Info {
            Self::Markup(message.to_string())
        } else {
            Self::Text(message.to_string())
        }
    }
}
