use std::{env, fs};

use tracing::{debug, error};

/// Looks up the secret `name`.
///
/// When `{name}_FILE` is set (e.g. a mounted Docker secret) the file it points
/// to is read and trimmed, and `name` itself is ignored. Otherwise the value of
/// `name` is returned. Empty values count as missing.
pub fn get_secret(name: &str) -> Option<String> {
    let file_var = format!("{name}_FILE");

    let value = match env::var(&file_var) {
        Ok(secret_file_path) => match fs::read_to_string(&secret_file_path) {
            Ok(content) => {
                debug!(%file_var, "Secret read from file");
                content.trim().to_string()
            }
            Err(e) => {
                error!(%secret_file_path, ?e, "Error reading secret file");
                return None;
            }
        },
        Err(_) => env::var(name).ok()?,
    };

    (!value.is_empty()).then_some(value)
}
