use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Plain,
    Json,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct TelemetrySettings {
    pub log_level: String,
    pub format: LogFormat,
}

impl Default for TelemetrySettings {
    fn default() -> Self {
        TelemetrySettings {
            log_level: "info".to_string(),
            format: LogFormat::Plain,
        }
    }
}

/// Installs the global subscriber. `RUST_LOG` wins over the configured level.
pub fn setup(settings: &TelemetrySettings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    let result = match settings.format {
        LogFormat::Plain => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };

    if let Err(err) = result {
        eprintln!("failed to install tracing subscriber: {}", err);
    }
}
