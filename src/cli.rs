use clap::{Parser, Subcommand};

/// mono: command-line access to the Monobank API.
#[derive(Parser, Debug)]
#[command(name = "mono", version)]
pub struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", global = true)]
    pub log_level: String,

    /// Personal access token (overrides MONOBANK_TOKEN)
    #[arg(long, global = true)]
    pub token: Option<String>,

    /// API host without scheme (overrides MONOBANK_HOST)
    #[arg(long, global = true)]
    pub host: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print public exchange rates
    Currency(CurrencyArgs),

    /// Print client profile, accounts and jars
    ClientInfo(OutputArgs),

    /// Register a webhook URL for new transactions
    Webhook(WebhookArgs),

    /// Print account transactions
    Statement(StatementArgs),
}

/// Arguments shared by read commands.
#[derive(Parser, Debug)]
pub struct OutputArgs {
    /// Print the raw JSON response instead of TSV
    #[arg(long)]
    pub json: bool,

    /// Bypass the response cache
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the `currency` subcommand.
#[derive(Parser, Debug)]
pub struct CurrencyArgs {
    #[command(flatten)]
    pub output: OutputArgs,

    /// Only print pairs involving this ISO 4217 numeric code
    #[arg(long)]
    pub code: Option<u16>,
}

/// Arguments for the `webhook` subcommand.
#[derive(Parser, Debug)]
pub struct WebhookArgs {
    /// URL that receives transaction notifications
    pub url: String,
}

/// Arguments for the `statement` subcommand.
#[derive(Parser, Debug)]
pub struct StatementArgs {
    /// Account id, or 0 for the default account
    #[arg(default_value = "0")]
    pub account: String,

    /// Range start, Unix seconds (default: 30 days ago)
    #[arg(long)]
    pub from: Option<i64>,

    /// Range end, Unix seconds (default: now)
    #[arg(long)]
    pub to: Option<i64>,

    /// Account currency, ISO 4217 numeric code; sets the amount precision
    #[arg(long, default_value_t = 980)]
    pub currency: u16,

    #[command(flatten)]
    pub output: OutputArgs,
}
