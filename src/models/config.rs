//! Watchlist and monitor settings.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{AppError, Result};
use crate::models::WatchedCompany;

/// Root configuration, loaded from the YAML watchlist file.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MonitorConfig {
    /// HTTP and extraction settings
    #[serde(default)]
    pub crawler: CrawlerConfig,

    /// Mail submission settings
    #[serde(default)]
    pub mail: MailConfig,

    /// Companies to watch, in check order
    #[serde(default)]
    pub companies: Vec<WatchedCompany>,
}

impl MonitorConfig {
    /// Load, normalize and validate configuration from a YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(AppError::config(format!(
                "Config file not found: {}",
                path.display()
            )));
        }

        let content = fs::read_to_string(path)?;
        let config = Self::from_yaml(&content).map_err(|e| match e {
            AppError::Yaml(e) => AppError::config(format!("{}: {e}", path.display())),
            other => other,
        })?;
        Ok(config)
    }

    /// Parse, normalize and validate configuration from YAML text.
    pub fn from_yaml(content: &str) -> Result<Self> {
        // An empty document deserializes as null; treat it as an empty mapping.
        let mut config: Self = if content.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str(content)?
        };

        config.companies = config
            .companies
            .into_iter()
            .map(WatchedCompany::normalized)
            .collect();

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.crawler.user_agent.trim().is_empty() {
            return Err(AppError::config("crawler.user_agent is empty"));
        }
        if self.crawler.timeout_secs == 0 {
            return Err(AppError::config("crawler.timeout_secs must be > 0"));
        }
        if self.crawler.max_links == 0 {
            return Err(AppError::config("crawler.max_links must be > 0"));
        }
        if self.mail.smtp_host.trim().is_empty() {
            return Err(AppError::config("mail.smtp_host is empty"));
        }
        if self.companies.is_empty() {
            return Err(AppError::config(
                "No companies configured. Add at least one company to the watchlist",
            ));
        }

        let mut seen = HashSet::new();
        for (idx, company) in self.companies.iter().enumerate() {
            if company.name.trim().is_empty() {
                return Err(AppError::config(format!("companies[{idx}].name is empty")));
            }
            if company.ticker.is_empty() {
                return Err(AppError::config(format!("companies[{idx}].ticker is empty")));
            }
            if Url::parse(&company.ir_url).is_err() {
                return Err(AppError::config(format!(
                    "companies[{idx}].ir_url is not an absolute URL: {}",
                    company.ir_url
                )));
            }
            if !seen.insert(company.ticker.as_str()) {
                return Err(AppError::config(format!(
                    "Duplicate ticker in watchlist: {}",
                    company.ticker
                )));
            }
        }
        Ok(())
    }
}

/// HTTP client and extraction settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawlerConfig {
    /// User-Agent header for page requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,

    /// Maximum links kept per company
    #[serde(default = "defaults::max_links")]
    pub max_links: usize,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
            max_links: defaults::max_links(),
        }
    }
}

/// Mail submission settings. Credentials come from the environment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MailConfig {
    /// SMTP server (implicit TLS)
    #[serde(default = "defaults::smtp_host")]
    pub smtp_host: String,

    /// SMTP port
    #[serde(default = "defaults::smtp_port")]
    pub smtp_port: u16,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            smtp_host: defaults::smtp_host(),
            smtp_port: defaults::smtp_port(),
        }
    }
}

pub mod defaults {
    pub const USER_AGENT: &str = "Mozilla/5.0 (compatible; portfolio-news-monitor/1.0; \
                                  +https://github.com/your-username/portfolio-news-monitor)";
    pub const TIMEOUT_SECS: u64 = 20;
    pub const MAX_LINKS: usize = 50;
    pub const SMTP_HOST: &str = "smtp.gmail.com";
    pub const SMTP_PORT: u16 = 465;

    pub fn user_agent() -> String {
        USER_AGENT.into()
    }
    pub fn timeout() -> u64 {
        TIMEOUT_SECS
    }
    pub fn max_links() -> usize {
        MAX_LINKS
    }
    pub fn smtp_host() -> String {
        SMTP_HOST.into()
    }
    pub fn smtp_port() -> u16 {
        SMTP_PORT
    }
}
