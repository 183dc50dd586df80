use std::io;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use dotenv::dotenv;

use exchange_sample::{
    api::{NbuSource, PrivatSource, RateSource},
    app::{ExchangeSample, PlainViewer, PlotRenderer, TerminalViewer},
    config::Config,
    models::{HalfYear, Month, View},
};

#[derive(Debug, Parser)]
#[command(
    name = "exchange-sample",
    version,
    about = "Daily hryvna exchange rates for a year, charted"
)]
struct Cli {
    /// Where daily rates come from
    #[arg(long, value_enum, default_value_t = SourceKind::Nbu)]
    source: SourceKind,

    /// Counter currency (USD, EUR, RUB)
    #[arg(short, long, default_value = "USD")]
    currency: String,

    /// Year to collect, 2000 or later
    #[arg(short, long)]
    year: String,

    /// hist or timeline
    #[arg(long, default_value = "timeline")]
    view: View,

    /// Print the collected rates as JSON before plotting
    #[arg(long)]
    print_changes: bool,

    /// Write the plot as text instead of opening the terminal chart
    #[arg(long)]
    plain: bool,

    #[command(subcommand)]
    query: Query,
}

#[derive(Debug, Subcommand)]
enum Query {
    /// Monthly means over the whole year
    Year,
    /// Monthly means over one half of the year
    Half { part: HalfYear },
    /// Every daily rate of one month
    Month { month: Month },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SourceKind {
    Nbu,
    Privat,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = Config::from_env()?;
    let client = config.http_client()?;

    match cli.source {
        SourceKind::Nbu => {
            let source = NbuSource::new(client, config.nbu_base_url());
            run(ExchangeSample::hryvna(source), &cli).await
        }
        SourceKind::Privat => {
            let source = PrivatSource::new(client, config.privat_base_url());
            run(ExchangeSample::hryvna(source), &cli).await
        }
    }
}

async fn run<S: RateSource>(mut sample: ExchangeSample<S>, cli: &Cli) -> Result<()> {
    sample.generate_from_str(&cli.currency, &cli.year).await?;

    if cli.print_changes {
        println!("{}", serde_json::to_string_pretty(sample.changes())?);
    }

    let mut renderer: Box<dyn PlotRenderer> = if cli.plain {
        Box::new(PlainViewer::new(io::stdout()))
    } else {
        Box::new(TerminalViewer)
    };

    match &cli.query {
        Query::Year => sample.year_information(cli.view, renderer.as_mut())?,
        Query::Half { part } => sample.half_year_information(*part, cli.view, renderer.as_mut())?,
        Query::Month { month } => sample.month_information(*month, cli.view, renderer.as_mut())?,
    }

    Ok(())
}
