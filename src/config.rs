/// Client id usado quando GOOGLE_CLIENT_ID não é fornecido no build
pub const GOOGLE_CLIENT_ID_PLACEHOLDER: &str = "SEU_CLIENT_ID_GOOGLE_AQUI";

const DEFAULT_BACKEND_URL: &str = "http://localhost:3000";
const DEFAULT_TOAST_DURATION_MS: u32 = 4000;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub backend_url: String,
    pub google_client_id: String,
    pub environment: String,
    pub enable_logging: bool,
    pub toast_duration_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            google_client_id: GOOGLE_CLIENT_ID_PLACEHOLDER.to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            toast_duration_ms: DEFAULT_TOAST_DURATION_MS,
        }
    }
}

impl AppConfig {
    /// Carrega a configuração a partir das variáveis definidas em tempo de compilação
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("BACKEND_URL"),
            option_env!("GOOGLE_CLIENT_ID"),
            option_env!("ENVIRONMENT"),
            option_env!("ENABLE_LOGGING"),
            option_env!("TOAST_DURATION_MS"),
        )
    }

    /// Monta a configuração a partir de valores opcionais; valores vazios ou
    /// inválidos caem no padrão
    pub fn from_values(
        backend_url: Option<&str>,
        google_client_id: Option<&str>,
        environment: Option<&str>,
        enable_logging: Option<&str>,
        toast_duration_ms: Option<&str>,
    ) -> Self {
        fn non_empty(v: Option<&str>) -> Option<&str> {
            v.map(str::trim).filter(|s| !s.is_empty())
        }

        let defaults = Self::default();

        Self {
            backend_url: non_empty(backend_url)
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.backend_url),
            google_client_id: non_empty(google_client_id)
                .map(str::to_string)
                .unwrap_or(defaults.google_client_id),
            environment: non_empty(environment)
                .map(str::to_string)
                .unwrap_or(defaults.environment),
            enable_logging: non_empty(enable_logging)
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.enable_logging),
            toast_duration_ms: non_empty(toast_duration_ms)
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.toast_duration_ms),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }

    /// Nível do logger: Warn sem logging, Info em produção, Debug no resto
    pub fn log_level(&self) -> log::Level {
        if !self.is_logging_enabled() {
            log::Level::Warn
        } else if self.is_production() {
            log::Level::Info
        } else {
            log::Level::Debug
        }
    }

    /// true quando o client id real do Google não foi configurado
    pub fn uses_placeholder_client_id(&self) -> bool {
        self.google_client_id == GOOGLE_CLIENT_ID_PLACEHOLDER
    }
}

// Configuração global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
