// ============================================================================
// URL GUARD - Validación del `form_url` devuelto por el servidor
// ============================================================================
// Una URL mal formada o de otro dominio se descarta en silencio
// ============================================================================

use url::Url;

/// URL de formulario ya validada contra el dominio de confianza
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrustedFormUrl(Url);

impl TrustedFormUrl {
    /// Markup del aviso "Form available at: <link>" con la URL escapada
    pub fn notice_markup(&self) -> String {
        let href = escape_html(self.0.as_str());
        format!(
            "Form available at: <a href=\"{href}\" target=\"_blank\" rel=\"noopener noreferrer\">{href}</a>"
        )
    }
}

/// Validar `raw`: URL absoluta http(s) cuyo host contiene `trusted_domain`
pub fn trusted_form_url(raw: &str, trusted_domain: &str) -> Option<TrustedFormUrl> {
    let url = match Url::parse(raw.trim()) {
        Ok(url) => url,
        Err(e) => {
            log::debug!("🔗 form_url descartada (mal formada): {}", e);
            return None;
        }
    };

    if !matches!(url.scheme(), "http" | "https") {
        log::debug!("🔗 form_url descartada (esquema {})", url.scheme());
        return None;
    }

    let host = url.host_str()?.to_ascii_lowercase();
    if trusted_domain.is_empty() || !host.contains(&trusted_domain.to_ascii_lowercase()) {
        log::debug!("🔗 form_url descartada (host {} no confiable)", host);
        return None;
    }

    Some(TrustedFormUrl(url))
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
