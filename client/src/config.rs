use std::{path::PathBuf, time::Duration};

use clap::Parser;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:1337";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_LOG_FILE: &str = "lobby-client.log";

/// Opções de linha de comando, com fallback para variáveis de ambiente.
#[derive(Parser, Debug, Clone)]
#[command(name = "lobby-client")]
#[command(about = "Terminal lobby: browse, search and create game rooms")]
pub struct LobbyConfig {
    /// Base URL do diretório de salas (sem o `/room`).
    #[arg(long, env = "LOBBY_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Tempo máximo de cada requisição ao diretório.
    #[arg(long, env = "LOBBY_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// A TUI ocupa o stdout, então os logs vão para arquivo.
    #[arg(long, env = "LOBBY_LOG_FILE", default_value = DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,
}

impl Default for LobbyConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

impl LobbyConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }

    /// `{api_url}/room`, tolerando barra final na base.
    pub fn rooms_url(&self) -> String {
        format!("{}/room", self.api_url.trim_end_matches('/'))
    }
}
