use anyhow::Context;
use once_cell::sync::OnceCell;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub erp: ErpConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Ограничение на обработку одного входящего запроса
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
    /// Требовать `Authorization: Bearer` на бизнес-маршрутах
    #[serde(default)]
    pub require_bearer: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ErpConfig {
    pub url: String,
    pub database: String,
    pub username: String,
    pub password: String,
    /// Таймаут одного HTTP вызова к ERP
    #[serde(default = "default_erp_timeout")]
    pub timeout_secs: u64,
}

fn default_request_timeout() -> u64 {
    30
}

fn default_erp_timeout() -> u64 {
    20
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 8080
request_timeout_secs = 30
require_bearer = false

[erp]
url = "http://localhost:8069"
database = "odoo"
username = "admin"
password = ""
timeout_secs = 20
"#;

static CONFIG: OnceCell<Config> = OnceCell::new();

/// Загрузить конфигурацию один раз при старте; повторный вызов
/// возвращает уже загруженную
pub fn init() -> anyhow::Result<&'static Config> {
    if let Some(config) = CONFIG.get() {
        return Ok(config);
    }
    let config = load_config()?;
    Ok(CONFIG.get_or_init(|| config))
}

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Path from `GATEWAY_CONFIG`
/// 2. Next to the executable (for production)
/// 3. Current working directory
/// 4. Falls back to embedded default config
///
/// `ERP_URL`, `ERP_DATABASE`, `ERP_USERNAME`, `ERP_PASSWORD` override the file.
pub fn load_config() -> anyhow::Result<Config> {
    let mut config = match find_config_file() {
        Some(path) => {
            tracing::info!("Loading config from: {}", path.display());
            parse_file(&path)?
        }
        None => {
            tracing::info!("Using default embedded configuration");
            parse(DEFAULT_CONFIG)?
        }
    };

    apply_env_overrides(&mut config.erp, |key| std::env::var(key).ok());
    Ok(config)
}

fn find_config_file() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("GATEWAY_CONFIG") {
        let path = PathBuf::from(path);
        if path.exists() {
            return Some(path);
        }
        tracing::warn!("GATEWAY_CONFIG points to missing file: {}", path.display());
    }

    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(Path::to_path_buf));

    exe_dir
        .into_iter()
        .chain(std::env::current_dir().ok())
        .map(|dir| dir.join("config.toml"))
        .find(|candidate| candidate.exists())
}

fn parse_file(path: &Path) -> anyhow::Result<Config> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Cannot read config file {}", path.display()))?;
    parse(&contents).with_context(|| format!("Invalid config file {}", path.display()))
}

fn parse(contents: &str) -> anyhow::Result<Config> {
    Ok(toml::from_str(contents)?)
}

fn apply_env_overrides(erp: &mut ErpConfig, lookup: impl Fn(&str) -> Option<String>) {
    let targets: [(&str, &mut String); 4] = [
        ("ERP_URL", &mut erp.url),
        ("ERP_DATABASE", &mut erp.database),
        ("ERP_USERNAME", &mut erp.username),
        ("ERP_PASSWORD", &mut erp.password),
    ];

    for (key, target) in targets {
        if let Some(value) = lookup(key).filter(|v| !v.is_empty()) {
            *target = value;
        }
    }
}
