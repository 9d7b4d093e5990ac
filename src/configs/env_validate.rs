use std::path::PathBuf;

pub const STORAGE_DIR_VAR: &str = "PERSONAL_WEB_STORAGE_DIR";
const DEFAULT_STORAGE_DIR: &str = ".personal-web";

pub fn get_storage_dir() -> PathBuf {
    // Native builds keep persisted stores on disk; the browser uses localStorage instead
    let dir = std::env::var(STORAGE_DIR_VAR).unwrap_or_else(|_| {
        log::warn!("{} not set, using {}", STORAGE_DIR_VAR, DEFAULT_STORAGE_DIR);
        DEFAULT_STORAGE_DIR.to_string()
    });

    log::info!("Persisting store state under: {}", dir);
    PathBuf::from(dir)
}

pub fn init_env() {
    dotenv::dotenv().ok();
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }
}
