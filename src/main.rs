mod api;
mod config;
mod display;
mod envelope;
mod error;
mod extract;

use std::io;
use std::path::PathBuf;
use std::process;

use clap::Parser;

use api::client::FetchClient;
use api::endpoints::forge_request;
use config::{read_api_key, Config, DEFAULT_COOLDOWN};
use display::{display_error, display_info};
use envelope::Envelope;
use error::AppError;
use extract::{extract_cooldown, extract_nicknames, NicknameMap};

#[derive(Parser, Debug)]
#[command(name = "Featured Scout")]
#[command(about = "Collect summoner nicknames from currently featured games", long_about = None)]
struct Args {
    /// World region to poke: EUW, NA, EUNE, etc.
    #[arg(short, long)]
    region: Option<String>,

    /// Type of data to get (only "featured" is served)
    #[arg(short = 't', long)]
    query_type: Option<String>,

    /// Force the reported cooldown to a fixed value, in seconds
    #[arg(short, long)]
    force_cooldown: Option<u64>,

    /// File holding the API key on its first line
    #[arg(short, long)]
    api_file: Option<PathBuf>,

    /// Query a specific URL instead of forging one
    #[arg(short, long)]
    custom_url: Option<String>,

    /// Print progress details on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    let verbose = args.verbose;

    let mut config = Config::from_env();
    if let Some(region) = args.region {
        config.region = region;
    }
    if let Some(query_type) = args.query_type {
        config.query_type = query_type;
    }
    if let Some(path) = args.api_file {
        config.api_key_path = path;
    }
    config.forced_cooldown = args.force_cooldown;
    config.custom_url = args.custom_url;

    let envelope = match run(&config, verbose) {
        Ok((cooldown, nicknames)) => Envelope::nicknames(cooldown, nicknames),
        Err(e) => {
            display_error(&e.to_string());
            // The error path always reports the stock cooldown, never the
            // caller's override.
            Envelope::error(DEFAULT_COOLDOWN, e.to_string())
        }
    };

    let stdout = io::stdout();
    if let Err(e) = envelope.send(&mut stdout.lock()) {
        display_error(&e.to_string());
        process::exit(1);
    }

    process::exit(i32::from(envelope.status));
}

fn run(config: &Config, verbose: bool) -> Result<(u64, NicknameMap), AppError> {
    let api_key = read_api_key(&config.api_key_path)?;

    let url = match &config.custom_url {
        Some(custom) => custom.clone(),
        None => forge_request(&api_key, &config.region, &config.query_type),
    };

    if verbose {
        display_info(&format!(
            "Fetching {} games for region {}",
            config.query_type, config.region
        ));
    }

    let mut client = FetchClient::new();
    let payload = client.fetch(&url)?;

    if verbose {
        display_info(&format!("{} request(s) made this run", client.calls()));
    }

    let cooldown = match config.forced_cooldown {
        Some(forced) => forced,
        None => extract_cooldown(&payload),
    };

    let nicknames = extract_nicknames(&payload)?;
    Ok((cooldown, nicknames))
}
