use anyhow::Result;
use clap::Parser;
use log::{debug, info, warn};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use textmml::{decode_with_diagnostics, encode_with_config, EncoderConfig, Instrument, MmlError};

#[derive(Parser, Debug)]
#[command(
    name = "textmml",
    about = "Turn text into MML, and optionally into timed note events"
)]
struct Args {
    /// Text file to encode. Reads stdin when omitted.
    input: Option<PathBuf>,

    /// YAML file overriding the encoder's tempo and preamble constants.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Instrument named in the preamble; overrides the config file's number.
    #[arg(short, long, value_enum)]
    instrument: Option<Instrument>,

    /// Print the decoded events instead of the notation string.
    #[arg(short, long, default_value_t = false)]
    events: bool,

    /// Print the decoded events as JSON (implies --events).
    #[arg(short, long, default_value_t = false)]
    json: bool,
}

fn read_file(path: &Path) -> Result<String, MmlError> {
    fs::read_to_string(path).map_err(|e| MmlError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

fn read_input(path: Option<&Path>) -> Result<String, MmlError> {
    match path {
        Some(path) => read_file(path),
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .map_err(|e| MmlError::Io {
                    path: "<stdin>".to_string(),
                    message: e.to_string(),
                })?;
            Ok(text)
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => {
            info!("Loading encoder config from '{}'", path.display());
            EncoderConfig::from_yaml(&read_file(path)?)?
        }
        None => EncoderConfig::default(),
    };
    let config = match args.instrument {
        Some(instrument) => {
            debug!("Using instrument {:?} (@{})", instrument, instrument.program());
            config.with_instrument(instrument)
        }
        None => config,
    };

    let text = read_input(args.input.as_deref())?;
    debug!("Read {} bytes of input text", text.len());

    let notation = encode_with_config(&text, &config);

    if !args.events && !args.json {
        println!("{}", notation);
        return Ok(());
    }

    let decoded = decode_with_diagnostics(&notation);
    for diagnostic in &decoded.diagnostics {
        // The preamble's instrument hint is always skipped by the decoder
        if !diagnostic.token.starts_with('@') {
            warn!(
                "Token {} '{}': {}",
                diagnostic.index, diagnostic.token, diagnostic.reason
            );
        }
    }

    if args.json {
        let json = serde_json::to_string_pretty(&textmml::schedule(&decoded.events))
            .map_err(|e| MmlError::Serialize(e.to_string()))?;
        println!("{}", json);
    } else {
        for scheduled in textmml::schedule(&decoded.events) {
            println!("{:>9.3}s  {}", scheduled.start_seconds, scheduled.event);
        }
    }

    info!(
        "{} events, {:.3}s total",
        decoded.events.len(),
        textmml::total_seconds(&decoded.events)
    );

    Ok(())
}
