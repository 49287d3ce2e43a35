use dotenvy::dotenv;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default)]
struct Cli {
    port: Option<u16>,
    config: Option<String>,
}

fn parse_cli_from_args<I, S>(args: I) -> Cli
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut cli = Cli::default();
    let mut iter = args.into_iter().map(Into::into);

    // Skip binary name
    let _ = iter.next();

    while let Some(arg) = iter.next() {
        if let Some(raw_port) = arg.strip_prefix("--port=") {
            if let Ok(port) = raw_port.parse::<u16>() {
                cli.port = Some(port);
            }
            continue;
        }

        if arg == "--port" {
            if let Some(raw_port) = iter.next() {
                if let Ok(port) = raw_port.parse::<u16>() {
                    cli.port = Some(port);
                }
            }
            continue;
        }

        if let Some(raw_config) = arg.strip_prefix("--config=") {
            if !raw_config.is_empty() {
                cli.config = Some(raw_config.to_string());
            }
            continue;
        }

        if arg == "--config" {
            if let Some(config) = iter.next() {
                if !config.is_empty() {
                    cli.config = Some(config);
                }
            }
        }
    }

    cli
}

fn parse_cli() -> Cli {
    parse_cli_from_args(std::env::args())
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Settings {
    pub port: u16,
    /// Directory the static frontend is served from.
    pub static_dir: String,
    /// Optional JSON file overriding the built-in activity catalog.
    pub catalog_path: Option<String>,
    /// When set (and debug is off), CORS is restricted to this origin.
    pub frontend_origin: Option<String>,
    #[serde(default)]
    pub debug: bool,
}

impl Settings {
    #[allow(clippy::result_large_err)]
    pub fn new() -> Result<Self, figment::Error> {
        dotenv().ok();
        let cli = parse_cli();

        let mut figment = Figment::from(Serialized::defaults(Settings::default()));

        figment = figment.merge(Toml::file("/etc/activities/config.toml"));

        if let Some(config_dir) = dirs::config_dir() {
            figment = figment.merge(Toml::file(config_dir.join("activities/config.toml")));
        }

        figment = figment.merge(Toml::file("activities.toml"));

        let config_path = cli
            .config
            .or_else(|| std::env::var("ACTIVITIES_CONFIG_PATH").ok());
        if let Some(config_path) = config_path {
            figment = figment.merge(Toml::file(config_path));
        }

        figment = figment.merge(Env::prefixed("ACTIVITIES_"));

        if let Some(port) = cli.port {
            figment = figment.merge(("port", port));
        }

        figment.extract()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            port: 8000,
            static_dir: "static".to_string(),
            catalog_path: None,
            frontend_origin: None,
            debug: false,
        }
    }
}
