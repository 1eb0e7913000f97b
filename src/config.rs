use crate::scrapers::types::{ExtractOptions, DEFAULT_LOCATION_LABEL, DEFAULT_MAX_RESULTS, DEFAULT_ORIGIN};
use anyhow::{bail, Result};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

const PLACEHOLDER: &str = "OVERRIDE_ME";

#[derive(Parser, Debug, Clone)]
#[clap(author, version, about = "Report new listings on a Gumtree search")]
pub struct Args {
    /// Name used in log lines and notice subjects
    #[clap(long, env = "TRAWL_APP_NAME", default_value = "gumtreeTrawler")]
    pub app_name: String,

    /// Search-results page to watch
    #[clap(long, env = "GUMTREE_SEARCH")]
    pub search_url: String,

    /// Maximum number of listings kept per run
    #[clap(long, env = "TRAWL_MAX_RESULTS", default_value_t = DEFAULT_MAX_RESULTS)]
    pub max_results: usize,

    /// Snapshot file of previously seen listings
    #[clap(long, env = "TRAWL_STORE_FILE", default_value = ".gumtreeResults.json")]
    pub store_file: PathBuf,

    /// Origin prefixed to relative listing links
    #[clap(long, env = "GUMTREE_ORIGIN", default_value = DEFAULT_ORIGIN)]
    pub origin: String,

    /// Label stripped from the front of location text
    #[clap(long, default_value = DEFAULT_LOCATION_LABEL)]
    pub location_label: String,

    /// HTTP request timeout in seconds
    #[clap(long = "timeout", env = "TRAWL_TIMEOUT_SECS", default_value = "30")]
    pub timeout_secs: u64,

    /// Log level used when RUST_LOG is not set
    #[clap(long, env = "TRAWL_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Directory for the daily-rotated run log
    #[clap(long, env = "TRAWL_LOG_DIR", default_value = "./logs")]
    pub log_dir: PathBuf,

    #[clap(long, env = "SMTP_HOST")]
    pub smtp_host: Option<String>,

    #[clap(long, env = "SMTP_USER")]
    pub smtp_user: Option<String>,

    #[clap(long, env = "SMTP_PASS", hide_env_values = true)]
    pub smtp_pass: Option<String>,

    #[clap(long, env = "NOTIFY_EMAIL_FROM")]
    pub email_from: Option<String>,

    #[clap(long, env = "NOTIFY_EMAIL_TO")]
    pub email_to: Option<String>,
}

/// SMTP delivery settings
#[derive(Debug, Clone)]
pub struct EmailConfig {
    pub host: String,
    pub user: String,
    pub password: String,
    pub from: String,
    pub to: String,
}

/// Run configuration, built once at startup and handed to each component
#[derive(Debug, Clone)]
pub struct Config {
    pub app_name: String,
    pub search_url: String,
    pub max_results: usize,
    pub store_file: PathBuf,
    pub origin: String,
    pub location_label: String,
    pub request_timeout: Duration,
    pub log_level: String,
    pub log_dir: PathBuf,
    pub email: Option<EmailConfig>,
}

impl Config {
    pub fn from_args(args: Args) -> Result<Self> {
        let search_url = args.search_url.trim().to_string();
        if search_url.is_empty() || search_url == PLACEHOLDER {
            bail!("search URL is not configured (set --search-url or GUMTREE_SEARCH)");
        }
        if args.max_results == 0 {
            bail!("max results must be greater than zero");
        }

        let email = match (
            args.smtp_host,
            args.smtp_user,
            args.smtp_pass,
            args.email_from,
            args.email_to,
        ) {
            (Some(host), Some(user), Some(password), Some(from), Some(to)) => Some(EmailConfig {
                host,
                user,
                password,
                from,
                to,
            }),
            _ => None,
        };

        Ok(Self {
            app_name: args.app_name,
            search_url,
            max_results: args.max_results,
            store_file: args.store_file,
            origin: args.origin,
            location_label: args.location_label,
            request_timeout: Duration::from_secs(args.timeout_secs),
            log_level: args.log_level,
            log_dir: args.log_dir,
            email,
        })
    }

    pub fn extract_options(&self) -> ExtractOptions {
        ExtractOptions {
            origin: self.origin.clone(),
            location_label: self.location_label.clone(),
            max_results: self.max_results,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["gumtree-trawler"];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn defaults_apply() {
        let cfg = Config::from_args(args(&["--search-url", "https://www.gumtree.com/search?q=microwave"])).unwrap();

        assert_eq!(cfg.max_results, 10);
        assert_eq!(cfg.store_file, PathBuf::from(".gumtreeResults.json"));
        assert_eq!(cfg.request_timeout, Duration::from_secs(30));
        assert_eq!(cfg.extract_options().origin, "https://www.gumtree.com");
        assert_eq!(cfg.log_dir, PathBuf::from("./logs"));
    }

    #[test]
    fn extract_defaults_match_cli_defaults() {
        let cfg = Config::from_args(args(&["--search-url", "https://x"])).unwrap();
        let from_cli = cfg.extract_options();
        let fallback = ExtractOptions::default();

        assert_eq!(from_cli.origin, fallback.origin);
        assert_eq!(from_cli.location_label, fallback.location_label);
        assert_eq!(from_cli.max_results, fallback.max_results);
    }

    #[test]
    fn log_dir_can_be_overridden() {
        let cfg = Config::from_args(args(&["--search-url", "https://x", "--log-dir", "/var/log/trawler"])).unwrap();

        assert_eq!(cfg.log_dir, PathBuf::from("/var/log/trawler"));
    }

    #[test]
    fn placeholder_search_url_is_rejected() {
        assert!(Config::from_args(args(&["--search-url", "OVERRIDE_ME"])).is_err());
    }

    #[test]
    fn zero_cap_is_rejected() {
        assert!(Config::from_args(args(&["--search-url", "https://x", "--max-results", "0"])).is_err());
    }

    #[test]
    fn email_needs_every_setting() {
        let partial = Config::from_args(args(&[
            "--search-url",
            "https://x",
            "--smtp-host",
            "smtp.example.com",
        ]))
        .unwrap();
        assert!(partial.email.is_none());

        let full = Config::from_args(args(&[
            "--search-url",
            "https://x",
            "--smtp-host",
            "smtp.example.com",
            "--smtp-user",
            "me",
            "--smtp-pass",
            "secret",
            "--email-from",
            "me@example.com",
            "--email-to",
            "you@example.com",
        ]))
        .unwrap();
        assert_eq!(full.email.map(|e| e.to), Some("you@example.com".to_string()));
    }
}
