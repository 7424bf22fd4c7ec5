mod cli;
mod error;
mod output;

use std::io::{self, BufWriter};

use clap::Parser;
use cli::Command;
use error::CliError;
use monobank::{MonoConfig, Monobank, StatementBound};
use tracing::info;

#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();

    // Initialize tracing
    let filter = cli
        .log_level
        .parse::<tracing_subscriber::filter::LevelFilter>()
        .unwrap_or(tracing_subscriber::filter::LevelFilter::INFO);

    tracing_subscriber::fmt()
        .with_max_level(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let _ = dotenvy::dotenv(); // load .env if present

    let config = match MonoConfig::from_env() {
        Ok(mut config) => {
            if cli.token.is_some() {
                config.token = cli.token.clone();
            }
            if let Some(host) = &cli.host {
                config.base_host = host.clone();
            }
            config
        }
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    let client = Monobank::new(config);
    info!(
        host = %client.config().base_host,
        authenticated = client.has_token(),
        "mono starting"
    );
    if let Err(e) = run(&client, cli.command).await {
        tracing::error!(error = %e, "command failed");
        std::process::exit(1);
    }
}

async fn run(client: &Monobank, command: Command) -> Result<(), CliError> {
    let mut out = BufWriter::new(io::stdout().lock());

    match command {
        Command::Currency(args) => {
            if args.output.json {
                output::write_json(&client.currency(args.output.force).await?, &mut out)?;
            } else {
                let rates = client.currency_rates(args.output.force).await?;
                output::write_rates(&rates, args.code, &mut out)?;
            }
        }

        Command::ClientInfo(args) => {
            if args.json {
                output::write_json(&client.client_info(args.force).await?, &mut out)?;
            } else {
                output::write_user_info(&client.user_info(args.force).await?, &mut out)?;
            }
        }

        Command::Webhook(args) => {
            if !client.set_webhook(&args.url).await? {
                return Err(CliError::WebhookRejected);
            }
            info!(url = %args.url, "webhook registered");
        }

        Command::Statement(args) => {
            let from = args.from.map(StatementBound::from);
            let to = args.to.map(StatementBound::from);
            if args.output.json {
                let value = client.statement(&args.account, from, to, args.output.force).await?;
                output::write_json(&value, &mut out)?;
            } else {
                let items = client
                    .statement_items(&args.account, from, to, args.output.force)
                    .await?;
                output::write_statement(&items, args.currency, &mut out)?;
            }
        }
    }

    Ok(())
}
