use log::warn;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub model_path: PathBuf,
    pub open_browser: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 5000,
            model_path: PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/models/churn_model.json")),
            open_browser: true,
        }
    }
}

impl Settings {
    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

/// Reads the settings from the process environment.
pub fn load_settings() -> Settings {
    load_from(|key| std::env::var(key).ok())
}

/// Applies `CHURN_*` overrides on top of the defaults. Unparsable values are
/// logged and ignored.
pub fn load_from(lookup: impl Fn(&str) -> Option<String>) -> Settings {
    let mut settings = Settings::default();

    if let Some(v) = lookup("CHURN_HOST").filter(|v| !v.trim().is_empty()) {
        settings.host = v.trim().to_string();
    }

    if let Some(v) = lookup("CHURN_PORT") {
        match v.trim().parse::<u16>() {
            Ok(port) => settings.port = port,
            Err(_) => warn!("Ignoring CHURN_PORT={:?}: not a port number", v),
        }
    }

    if let Some(v) = lookup("CHURN_MODEL_PATH").filter(|v| !v.trim().is_empty()) {
        settings.model_path = PathBuf::from(v.trim());
    }

    if let Some(v) = lookup("CHURN_OPEN_BROWSER") {
        match v.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => settings.open_browser = true,
            "0" | "false" | "no" | "off" => settings.open_browser = false,
            _ => warn!("Ignoring CHURN_OPEN_BROWSER={:?}: expected true or false", v),
        }
    }

    settings
}
