use anyhow::anyhow;
use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct SiteConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub auth: AuthConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Base address including the API prefix, e.g. `http://localhost:8082/api/v1`.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { base_url: default_base_url(), timeout_secs: default_timeout_secs() }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Where the bearer token persists between sessions.
    #[serde(default = "default_token_path")]
    pub token_path: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self { token_path: default_token_path() }
    }
}

fn default_base_url() -> String { "http://localhost:8082/api/v1".to_string() }
fn default_timeout_secs() -> u64 { 10 }
fn default_token_path() -> String { "data/auth_token".to_string() }

pub fn load_default() -> Result<SiteConfig> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    load_from_file(&path)
}

pub fn load_from_file(path: &str) -> Result<SiteConfig> {
    // A missing file is fine; the defaults describe a local backend.
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(SiteConfig::default()),
        Err(e) => return Err(e.into()),
    };
    let cfg: SiteConfig = toml::from_str(&content)?;
    Ok(cfg)
}

impl SiteConfig {
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = load_default()?;
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.api.normalize_from_env();
        self.api.validate()?;
        if self.auth.token_path.trim().is_empty() {
            self.auth.token_path = default_token_path();
        }
        Ok(())
    }
}

impl ApiConfig {
    /// Fill the base URL from `CONSITE_API_BASE_URL` when the TOML left it empty.
    pub fn normalize_from_env(&mut self) {
        if self.base_url.trim().is_empty() {
            if let Ok(url) = std::env::var("CONSITE_API_BASE_URL") {
                self.base_url = url;
            }
        }
        if self.timeout_secs == 0 {
            self.timeout_secs = default_timeout_secs();
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(anyhow!(
                "api.base_url is empty; set it in config.toml or CONSITE_API_BASE_URL"
            ));
        }
        let lower = self.base_url.to_lowercase();
        if !(lower.starts_with("http://") || lower.starts_with("https://")) {
            return Err(anyhow!("api.base_url must start with http:// or https://"));
        }
        Ok(())
    }
}
