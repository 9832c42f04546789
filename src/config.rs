use crate::error::{
    BadEnvVarSnafu, InvalidOriginSnafu, ParsePortSnafu, RosterResult, UnknownStoreSnafu,
};
use axum::http::HeaderValue;
use dotenvy::var;
use secrecy::{ExposeSecret, SecretString};
use snafu::ResultExt;
use std::sync::Arc;

const DEFAULT_SERVER_IP: &str = "127.0.0.1:8080";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoreKind {
    Postgres,
    Memory,
}

#[derive(Clone, Debug)]
pub struct RuntimeConfiguration {
    server_ip: String,
    api_url: String,
    allowed_origin: Option<HeaderValue>,
    store: StoreKind,
    db_config: Option<Arc<DbConfig>>,
}

impl RuntimeConfiguration {
    pub fn new() -> RosterResult<Self> {
        let server_ip = var("ROSTER_SERVER_IP").unwrap_or_else(|_| DEFAULT_SERVER_IP.to_string());
        let api_url = var("ROSTER_API_URL").unwrap_or_else(|_| format!("http://{server_ip}"));

        let allowed_origin = match var("ROSTER_ALLOWED_ORIGIN") {
            Ok(origin) => {
                let header = HeaderValue::from_str(&origin)
                    .context(InvalidOriginSnafu { origin: origin.clone() })?;
                Some(header)
            }
            Err(_) => None,
        };

        let store = match var("ROSTER_STORE") {
            Ok(found) => match found.trim().to_ascii_lowercase().as_str() {
                "postgres" => StoreKind::Postgres,
                "memory" => StoreKind::Memory,
                _ => return UnknownStoreSnafu { found }.fail(),
            },
            Err(_) => StoreKind::Postgres,
        };

        let db_config = match store {
            StoreKind::Postgres => Some(Arc::new(DbConfig::new()?)),
            StoreKind::Memory => None,
        };

        Ok(Self {
            server_ip,
            api_url,
            allowed_origin,
            store,
            db_config,
        })
    }

    #[cfg(test)]
    pub fn in_memory(server_ip: &str) -> Self {
        Self {
            server_ip: server_ip.to_string(),
            api_url: format!("http://{server_ip}"),
            allowed_origin: None,
            store: StoreKind::Memory,
            db_config: None,
        }
    }

    #[cfg(test)]
    pub fn with_allowed_origin(mut self, origin: &'static str) -> Self {
        self.allowed_origin = Some(HeaderValue::from_static(origin));
        self
    }

    pub fn server_ip(&self) -> &str {
        &self.server_ip
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub fn allowed_origin(&self) -> Option<HeaderValue> {
        self.allowed_origin.clone()
    }

    pub const fn store(&self) -> &StoreKind {
        &self.store
    }

    pub fn db_config(&self) -> Option<Arc<DbConfig>> {
        self.db_config.clone()
    }
}

#[derive(Debug)]
pub struct DbConfig {
    user: String,
    password: SecretString,
    path: String,
    port: u16,
    database: String,
}

impl DbConfig {
    pub fn new() -> RosterResult<Self> {
        let get_env_var = |name| var(name).context(BadEnvVarSnafu { name });

        Ok(Self {
            user: get_env_var("DB_USER")?,
            password: SecretString::from(get_env_var("DB_PASSWORD")?),
            path: get_env_var("DB_PATH")?,
            port: get_env_var("DB_PORT")?.parse().context(ParsePortSnafu)?,
            database: get_env_var("DB_NAME")?,
        })
    }

    pub fn get_db_path(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.user,
            self.password.expose_secret(),
            self.path,
            self.port,
            self.database
        )
    }
}
