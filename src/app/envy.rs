use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Envy {
    pub app_env: String,
    pub port: Option<u16>,

    pub database_url: String,
    pub database_max_connections: Option<u32>,

    pub body_limit_bytes: Option<usize>,
}
