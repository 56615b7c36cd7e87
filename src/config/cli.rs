use crate::config::AppConfig;
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "newscard")]
#[command(about = "Turns a news prompt into a captioned, framed PNG")]
pub struct CliConfig {
    #[arg(long, help = "Optional TOML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, env = "NEWSCARD_HOST")]
    pub host: Option<String>,

    #[arg(long, env = "NEWSCARD_PORT")]
    pub port: Option<u16>,

    #[arg(long, env = "NEWSCARD_FONT_PATH")]
    pub font_path: Option<String>,

    #[arg(long, env = "HF_TOKEN", hide_env_values = true)]
    pub hf_token: Option<String>,

    #[arg(long, env = "NEWS_API_KEY", hide_env_values = true)]
    pub news_api_key: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

impl CliConfig {
    /// Defaults, then the TOML file, then flags and environment.
    pub fn resolve(&self) -> Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => AppConfig::from_file(path)?,
            None => AppConfig::default(),
        };

        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(font_path) = &self.font_path {
            config.render.font_path = font_path.clone();
        }
        if let Some(token) = &self.hf_token {
            config.upstream.hf_token = token.clone();
        }
        if let Some(key) = &self.news_api_key {
            config.upstream.news_api_key = key.clone();
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_flags_override_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[server]\nport = 7000\nhost = \"127.0.0.1\"\n")
            .unwrap();

        let cli = CliConfig::parse_from([
            "newscard",
            "--config",
            temp_file.path().to_str().unwrap(),
            "--port",
            "7100",
            "--hf-token",
            "hf_cli",
            "--news-api-key",
            "news_cli",
        ]);

        let config = cli.resolve().unwrap();
        assert_eq!(config.server.port, 7100);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.upstream.hf_token, "hf_cli");
        assert_eq!(config.upstream.news_api_key, "news_cli");
    }

    #[test]
    fn test_missing_config_file_fails() {
        let cli = CliConfig::parse_from(["newscard", "--config", "/nonexistent/newscard.toml"]);
        assert!(cli.resolve().is_err());
    }
}
