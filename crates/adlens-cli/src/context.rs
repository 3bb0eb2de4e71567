use adlens_runtime::config::expand_tilde;
use adlens_runtime::{
    CampaignRepository, Config, FileRepository, HttpRepository, ViewConfig, demo_repository,
};
use anyhow::{Context, Result};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::args::Cli;

/// Where campaigns are read from for this invocation
#[derive(Debug, Clone, PartialEq)]
pub enum CampaignSource {
    Endpoint(String),
    File(PathBuf),
    Demo,
}

impl CampaignSource {
    /// `--source` wins over `--demo`, which wins over the endpoint
    /// (flag, `ADLENS_ENDPOINT`, then `api.base_url`).
    pub fn resolve(cli: &Cli, config: &Config) -> Self {
        if let Some(path) = &cli.source {
            CampaignSource::File(path.clone())
        } else if cli.demo {
            CampaignSource::Demo
        } else {
            let endpoint = cli
                .endpoint
                .clone()
                .unwrap_or_else(|| config.api.base_url.clone());
            CampaignSource::Endpoint(endpoint)
        }
    }
}

impl fmt::Display for CampaignSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CampaignSource::Endpoint(url) => f.write_str(url.trim_end_matches('/')),
            CampaignSource::File(path) => write!(f, "{}", path.display()),
            CampaignSource::Demo => f.write_str("demo data"),
        }
    }
}

pub struct ExecutionContext {
    config_path: PathBuf,
    config: Config,
    source: CampaignSource,
}

impl ExecutionContext {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let config_path = resolve_config_path(cli.config.as_deref())?;
        let config = Config::load_from(&config_path)
            .with_context(|| format!("Failed to load {}", config_path.display()))?;
        let source = CampaignSource::resolve(cli, &config);
        tracing::debug!(
            config = %config_path.display(),
            source = ?source,
            "execution context ready"
        );

        Ok(Self {
            config_path,
            config,
            source,
        })
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn view_defaults(&self) -> ViewConfig {
        self.config.view
    }

    pub fn source(&self) -> &CampaignSource {
        &self.source
    }

    pub fn repository(&self) -> Result<Arc<dyn CampaignRepository>> {
        let repository: Arc<dyn CampaignRepository> = match &self.source {
            CampaignSource::File(path) => Arc::new(FileRepository::new(path)),
            CampaignSource::Demo => Arc::new(demo_repository()),
            CampaignSource::Endpoint(url) => {
                Arc::new(HttpRepository::new(url, self.config.api.timeout())?)
            }
        };
        Ok(repository)
    }
}

/// `--config` names the file itself; otherwise `config.toml` in the
/// resolved adlens directory.
pub fn resolve_config_path(explicit: Option<&str>) -> Result<PathBuf> {
    match explicit {
        Some(path) => Ok(expand_tilde(path)),
        None => Ok(Config::default_path()?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn source_for(args: &[&str], config: &Config) -> CampaignSource {
        let cli = Cli::try_parse_from(std::iter::once("adlens").chain(args.iter().copied()))
            .unwrap();
        CampaignSource::resolve(&cli, config)
    }

    #[test]
    fn test_source_priority() {
        let config = Config::default();

        assert_eq!(
            source_for(&["--source", "c.json", "list"], &config),
            CampaignSource::File(PathBuf::from("c.json"))
        );
        assert_eq!(source_for(&["--demo", "list"], &config), CampaignSource::Demo);
        assert_eq!(
            source_for(&["--endpoint", "http://api.test", "list"], &config),
            CampaignSource::Endpoint("http://api.test".to_string())
        );
    }

    #[test]
    fn test_source_display() {
        assert_eq!(
            CampaignSource::Endpoint("http://api.test/".to_string()).to_string(),
            "http://api.test"
        );
        assert_eq!(CampaignSource::Demo.to_string(), "demo data");
    }

    fn context_for(source: CampaignSource) -> ExecutionContext {
        ExecutionContext {
            config_path: PathBuf::from("/tmp/adlens-test/config.toml"),
            config: Config::default(),
            source,
        }
    }

    #[test]
    fn test_repository_follows_source() {
        let endpoint = context_for(CampaignSource::Endpoint("http://api.test/v1/".to_string()));
        assert_eq!(endpoint.repository().unwrap().describe(), "http://api.test/v1");

        let demo = context_for(CampaignSource::Demo);
        assert_eq!(demo.repository().unwrap().describe(), "demo data");

        let file = context_for(CampaignSource::File(PathBuf::from("c.json")));
        assert_eq!(file.repository().unwrap().describe(), "c.json");
    }

    #[test]
    fn test_explicit_config_path_is_used_as_is() {
        let path = resolve_config_path(Some("/tmp/adlens-test/custom.toml")).unwrap();
        assert_eq!(path, PathBuf::from("/tmp/adlens-test/custom.toml"));
    }
}
