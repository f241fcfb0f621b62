use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "Orzecznik";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Reasoning service defaults. The key comes from the environment.
pub const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const GEMINI_MODEL: &str = "gemini-2.5-flash";
pub const GEMINI_TIMEOUT_SECS: u64 = 120;
pub const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Default bind address of the HTTP API.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

/// Get the application data directory, ~/Orzecznik/ on all platforms
/// (user-visible by design).
pub fn app_data_dir() -> PathBuf {
    let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    home.join("Orzecznik")
}

/// SQLite database with the case register.
pub fn database_path() -> PathBuf {
    app_data_dir().join("orzecznik.db")
}

/// Historical rules database injected into adjudication prompts.
/// The file is optional; a missing file means empty rules.
pub fn rules_path() -> PathBuf {
    app_data_dir().join("rules_database_min.json")
}

/// Accident-card template rendered on export.
pub fn template_path() -> PathBuf {
    app_data_dir().join("wzor-karta-wypadku.docx")
}

/// Default tracing filter when RUST_LOG is unset.
pub fn default_log_filter() -> String {
    format!("info,{}=debug", env!("CARGO_PKG_NAME"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_data_dir_under_home() {
        let dir = app_data_dir();
        let home = dirs::home_dir().unwrap();
        assert!(dir.starts_with(home));
        assert!(dir.ends_with("Orzecznik"));
    }

    #[test]
    fn paths_under_app_data() {
        for path in [database_path(), rules_path(), template_path()] {
            assert!(path.starts_with(app_data_dir()));
        }
    }

    #[test]
    fn app_name_is_orzecznik() {
        assert_eq!(APP_NAME, "Orzecznik");
    }

    #[test]
    fn default_filter_names_the_crate() {
        assert!(default_log_filter().contains("orzecznik"));
    }
}
