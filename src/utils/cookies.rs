use percent_encoding::percent_decode_str;
use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

/// Buscar una cookie en un header `document.cookie` y decodificar su valor.
/// Devuelve la primera coincidencia exacta del nombre.
pub fn find_cookie(cookie_header: &str, name: &str) -> Option<String> {
    if cookie_header.is_empty() || name.is_empty() {
        return None;
    }

    cookie_header
        .split(';')
        .map(str::trim)
        .find_map(|cookie| cookie.strip_prefix(name)?.strip_prefix('='))
        .map(|raw| percent_decode_str(raw).decode_utf8_lossy().into_owned())
}

/// Leer una cookie del documento actual
pub fn get_cookie(name: &str) -> Option<String> {
    let document = web_sys::window()?
        .document()?
        .dyn_into::<HtmlDocument>()
        .ok()?;

    match document.cookie() {
        Ok(header) => find_cookie(&header, name),
        Err(e) => {
            log::warn!("⚠️ No se pudo leer document.cookie: {:?}", e);
            None
        }
    }
}
