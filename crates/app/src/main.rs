use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use gamify_core::model::AchievementCatalog;
use services::AppServices;
use ui::{App, UiApp, build_app_context};

const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8000";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidServerUrl { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidServerUrl { raw } => write!(f, "invalid --server value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    services: AppServices,
    achievement_catalog: Arc<AchievementCatalog>,
}

impl UiApp for DesktopApp {
    fn app_services(&self) -> AppServices {
        self.services.clone()
    }

    fn achievement_catalog(&self) -> Arc<AchievementCatalog> {
        Arc::clone(&self.achievement_catalog)
    }
}

struct Args {
    server_url: String,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--server <base_url>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --server {DEFAULT_SERVER_URL}");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  GAMIFY_SERVER_URL");
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut server_url = std::env::var("GAMIFY_SERVER_URL")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string());

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--server" => {
                    let value = require_value(args, "--server")?;
                    server_url = normalize_server_url(value)?;
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self { server_url })
    }
}

fn normalize_server_url(raw: String) -> Result<String, ArgsError> {
    let trimmed = raw.trim();
    if trimmed.is_empty()
        || !(trimmed.starts_with("http://") || trimmed.starts_with("https://"))
    {
        return Err(ArgsError::InvalidServerUrl { raw });
    }
    Ok(trimmed.trim_end_matches('/').to_string())
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let app = DesktopApp {
        services: AppServices::over_http(&parsed.server_url),
        achievement_catalog: Arc::new(AchievementCatalog::builtin()),
    };
    let context = build_app_context(&(Arc::new(app) as Arc<dyn UiApp>));

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Gamify")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    tracing_subscriber::fmt().with_env_filter("info").init();

    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_url_requires_a_scheme() {
        assert!(normalize_server_url("localhost:8000".into()).is_err());
        assert_eq!(
            normalize_server_url("http://localhost:8000/".into()).unwrap(),
            "http://localhost:8000"
        );
    }
}
