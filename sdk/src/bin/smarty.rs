#![deny(
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used
)]
#![allow(clippy::print_stdout)]

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use smarty_sdk::{
    international_autocomplete, us_enrichment, us_reverse_geo, us_street, us_zipcode,
    ClientBuilder, SdkConfig,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "smarty")]
#[command(version)]
#[command(about = "Send lookups to the Smarty APIs and print the result as JSON")]
struct Args {
    /// YAML configuration file; SMARTY_* environment variables override it
    #[arg(long, default_value = "smarty.yaml")]
    config: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// US property enrichment for a Smarty key
    Enrichment {
        #[arg(value_enum)]
        kind: EnrichmentKind,
        smarty_key: String,
        #[arg(long)]
        include: Option<String>,
        #[arg(long)]
        exclude: Option<String>,
        #[arg(long)]
        dataset: Option<String>,
        #[arg(long)]
        data_subset: Option<String>,
    },

    /// Nearest US addresses to a coordinate
    ReverseGeo {
        #[arg(allow_negative_numbers = true)]
        latitude: f64,
        #[arg(allow_negative_numbers = true)]
        longitude: f64,
        #[arg(long)]
        source: Option<String>,
    },

    /// US city/state/ZIP Code lookup
    Zipcode {
        #[arg(long)]
        city: Option<String>,
        #[arg(long)]
        state: Option<String>,
        #[arg(long)]
        zipcode: Option<String>,
    },

    /// US street address validation
    Street {
        street: String,
        #[arg(long)]
        city: Option<String>,
        #[arg(long)]
        state: Option<String>,
        #[arg(long)]
        zipcode: Option<String>,
    },

    /// International address autocomplete
    IntlAutocomplete {
        search: String,
        /// ISO-3 country code
        #[arg(long)]
        country: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum EnrichmentKind {
    Principal,
    Financial,
    Geo,
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Load and validate configuration first (fail-fast)
    let config = SdkConfig::load_from(&args.config).map_err(|e| anyhow::anyhow!("{e}"))?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let builder = ClientBuilder::from_config(&config).map_err(|e| anyhow::anyhow!("{e}"))?;

    match args.command {
        Command::Enrichment {
            kind,
            smarty_key,
            include,
            exclude,
            dataset,
            data_subset,
        } => {
            let client = builder.build_us_enrichment_client()?;
            let mut lookup = us_enrichment::Lookup::from_parts(
                &smarty_key,
                include.as_deref(),
                exclude.as_deref(),
                dataset.as_deref(),
                data_subset.as_deref(),
            );
            match kind {
                EnrichmentKind::Principal => client.send_principal(Some(&mut lookup))?.await?,
                EnrichmentKind::Financial => client.send_financial(Some(&mut lookup))?.await?,
                EnrichmentKind::Geo => client.send_geo(Some(&mut lookup))?.await?,
            }
            print_json(&lookup.response)
        }
        Command::ReverseGeo {
            latitude,
            longitude,
            source,
        } => {
            let client = builder.build_us_reverse_geo_client()?;
            let mut lookup = us_reverse_geo::Lookup::new(latitude, longitude);
            lookup.source = source;
            client.send(Some(&mut lookup))?.await?;
            print_json(&lookup.response)
        }
        Command::Zipcode {
            city,
            state,
            zipcode,
        } => {
            let client = builder.build_us_zipcode_client()?;
            let mut lookup = us_zipcode::Lookup {
                city,
                state,
                zipcode,
                ..us_zipcode::Lookup::default()
            };
            client.send(Some(&mut lookup))?.await?;
            print_json(&lookup.result)
        }
        Command::Street {
            street,
            city,
            state,
            zipcode,
        } => {
            let client = builder.build_us_street_client()?;
            let mut lookup = us_street::Lookup {
                city,
                state,
                zipcode,
                ..us_street::Lookup::new(street)
            };
            client.send(Some(&mut lookup))?.await?;
            print_json(&lookup.result)
        }
        Command::IntlAutocomplete { search, country } => {
            let client = builder.build_international_autocomplete_client()?;
            let mut lookup = international_autocomplete::Lookup::new(search, country);
            client.send(Some(&mut lookup))?.await?;
            print_json(&lookup.result)
        }
    }
}
