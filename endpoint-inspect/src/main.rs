use std::{
    error::Error,
    io::{self, Read},
    str::FromStr,
};

use endpoint_model::EndpointRequest;
use tracing_subscriber::EnvFilter;

const OUTPUT_VAR: &str = "ENDPOINT_INSPECT_OUTPUT";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Output {
    #[default]
    Display,
    Json,
    Pretty,
}

impl FromStr for Output {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "display" => Ok(Output::Display),
            "json" => Ok(Output::Json),
            "pretty" => Ok(Output::Pretty),
            other => Err(format!(
                "{OUTPUT_VAR} must be one of 'display', 'json' or 'pretty', got '{other}'"
            )),
        }
    }
}

impl Output {
    fn from_env() -> Result<Self, String> {
        match std::env::var(OUTPUT_VAR) {
            Ok(value) => value.parse(),
            Err(std::env::VarError::NotPresent) => Ok(Output::default()),
            Err(error) => Err(format!("{OUTPUT_VAR}: {error}")),
        }
    }
}

fn inspect(document: &str, output: Output) -> Result<String, Box<dyn Error>> {
    let request: EndpointRequest = serde_json::from_str(document)?;

    if let Some(channel_type) = request.channel_type().filter(|it| it.is_unknown()) {
        tracing::warn!(%channel_type, "channel type not known to this build");
    }
    tracing::debug!(
        hash = request.structural_hash(),
        has_address = request.address().is_some(),
        has_user = request.user().is_some(),
        "decoded endpoint request"
    );

    let rendered = match output {
        Output::Display => request.to_string(),
        Output::Json => serde_json::to_string(&request)?,
        Output::Pretty => serde_json::to_string_pretty(&request)?,
    };

    Ok(rendered)
}

fn main() -> Result<(), Box<dyn Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let output = Output::from_env()?;

    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;

    match inspect(&input, output) {
        Ok(rendered) => {
            println!("{rendered}");
            Ok(())
        }
        Err(error) => {
            tracing::error!(%error, "failed to inspect endpoint request");
            Err(error)
        }
    }
}
