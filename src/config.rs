use tracing::trace;

const DB_HOST: &str = "DB_HOST";
const DB_PORT: &str = "DB_PORT";
const DB_USER: &str = "DB_USER";
const DB_PASSWORD: &str = "DB_PASSWORD";
const DB_NAME: &str = "DB_NAME";
const DB_SSL: &str = "DB_SSL";
const HTTP_PORT: &str = "PORT";

const DEFAULT_DB_PORT: u16 = 3306;
const DEFAULT_HTTP_PORT: u16 = 3000;

/// Runtime configuration, assembled from the environment
#[derive(Debug, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub http: HttpConfig,
}

/// MySQL connection settings
#[derive(Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
    /// Encrypt the connection (without CA verification)
    pub ssl: bool,
}

/// Keeps the password out of trace output
impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("database", &self.database)
            .field("ssl", &self.ssl)
            .finish()
    }
}

/// HTTP listener settings
#[derive(Debug, Clone)]
pub struct HttpConfig {
    pub port: u16,
}

impl Config {
    /// Assemble the configuration from environment variables
    ///
    /// `DB_HOST`, `DB_USER`, `DB_PASSWORD` and `DB_NAME` are required;
    /// everything else falls back to a default.
    pub fn from_env() -> anyhow::Result<Self> {
        let database = DatabaseConfig {
            host: required(DB_HOST)?,
            port: std::env::var(DB_PORT)
                .map_or(DEFAULT_DB_PORT, |res| res.parse().unwrap_or(DEFAULT_DB_PORT)),
            user: required(DB_USER)?,
            password: required(DB_PASSWORD)?,
            database: required(DB_NAME)?,
            ssl: std::env::var(DB_SSL).map_or(false, |res| parse_bool(&res)),
        };

        let http = HttpConfig {
            port: std::env::var(HTTP_PORT).map_or(DEFAULT_HTTP_PORT, |res| {
                res.parse().unwrap_or(DEFAULT_HTTP_PORT)
            }),
        };

        Ok(Self { database, http }).inspect(|config| trace!("loaded config: {config:?}"))
    }
}

fn required(name: &str) -> anyhow::Result<String> {
    std::env::var(name)
        .map_err(|_| anyhow::anyhow!("missing required environment variable {name}"))
}

fn parse_bool(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
