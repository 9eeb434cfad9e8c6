use std::env;
use std::fs;
use std::path::Path;

// Variables que el widget lee con option_env! en tiempo de compilación
const CONFIG_KEYS: &[&str] = &[
    "KOBO_SYNC_ENDPOINT",
    "KOBO_TRUSTED_DOMAIN",
    "CSRF_COOKIE_NAME",
    "SYNC_STATUS_ATTRIBUTE",
    "SYNC_PENDING_VALUE",
    "ENABLE_LOGGING",
    "LOG_LEVEL",
];

fn main() {
    // Cargar variables de entorno desde .env si existe
    let env_file = Path::new(".env");

    if env_file.exists() {
        println!("cargo:rerun-if-changed=.env");

        if let Ok(contents) = fs::read_to_string(env_file) {
            for line in contents.lines() {
                // Ignorar comentarios y líneas vacías
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }

                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    let value = value.trim().trim_matches('"');

                    if !CONFIG_KEYS.contains(&key) {
                        println!("cargo:warning=Clave desconocida en .env: {}", key);
                        continue;
                    }

                    // Solo configurar si no está ya definida
                    if env::var(key).is_err() {
                        println!("cargo:rustc-env={}={}", key, value);
                    }
                }
            }
        }
    }

    for key in CONFIG_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }
    println!("cargo:rerun-if-changed=build.rs");
}
