//! Starfed CLI
//!
//! Command-line interface for Stellar federation resolution.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use url::Url;

use starfed_client::{
    resolve_address, resolve_for_domain, well_known_url, FederationClient, FederationConfig,
    FederationRecord,
};

/// Starfed - Stellar federation address resolution
#[derive(Parser)]
#[command(name = "starfed")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a name*domain address to its federation record
    Resolve {
        /// Stellar address to resolve
        address: String,
    },

    /// Look up the record owning a Stellar account ID
    Account {
        /// Account ID to look up
        account_id: String,

        #[command(flatten)]
        endpoint: EndpointArgs,
    },

    /// Look up the record behind a transaction ID
    Transaction {
        /// Transaction ID to look up
        transaction_id: String,

        #[command(flatten)]
        endpoint: EndpointArgs,
    },

    /// Show the federation endpoint a domain advertises
    Discover {
        /// Domain to inspect
        domain: String,
    },
}

/// Where to send the query: a domain to discover, or a server URL.
#[derive(Args)]
#[group(required = true, multiple = false)]
struct EndpointArgs {
    /// Domain whose federation server should be discovered
    #[arg(long)]
    domain: Option<String>,

    /// Federation server URL to query directly
    #[arg(long, env = "FEDERATION_SERVER")]
    server: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        "starfed_client=debug,info"
    } else {
        "starfed_client=info,warn"
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command {
        Commands::Resolve { address } => cmd_resolve(&address).await,
        Commands::Account {
            account_id,
            endpoint,
        } => cmd_account(&account_id, endpoint).await,
        Commands::Transaction {
            transaction_id,
            endpoint,
        } => cmd_transaction(&transaction_id, endpoint).await,
        Commands::Discover { domain } => cmd_discover(&domain).await,
    }
}

/// Resolve a federation address end to end
async fn cmd_resolve(address: &str) -> Result<()> {
    println!("{} {}", "🔍 Resolving:".cyan().bold(), address);

    let record = resolve_address(address)
        .await
        .context("Failed to resolve federation address")?;

    print_record(&record)
}

/// Look up a record by account ID
async fn cmd_account(account_id: &str, endpoint: EndpointArgs) -> Result<()> {
    println!("{} {}", "🔍 Looking up account:".cyan().bold(), account_id);

    let client = client_for(endpoint).await?;
    let record = client
        .query_by_account_id(account_id)
        .await
        .context("Federation lookup failed")?;

    print_record(&record)
}

/// Look up a record by transaction ID
async fn cmd_transaction(transaction_id: &str, endpoint: EndpointArgs) -> Result<()> {
    println!("{} {}", "🔍 Looking up transaction:".cyan().bold(), transaction_id);

    let client = client_for(endpoint).await?;
    let record = client
        .query_by_transaction_id(transaction_id)
        .await
        .context("Federation lookup failed")?;

    print_record(&record)
}

/// Show the endpoint a domain advertises
async fn cmd_discover(domain: &str) -> Result<()> {
    println!(
        "{} {}",
        "🔍 Discovering federation server for:".cyan().bold(),
        domain
    );
    println!("   {} {}", "Well-known:".dimmed(), well_known_url(domain));

    let client = resolve_for_domain(domain)
        .await
        .context("Failed to discover federation server")?;
    let config = client.config();

    println!("\n{}", "✅ Federation endpoint:".green().bold());
    println!("   {} {}", "Scheme:".dimmed(), config.scheme());
    println!("   {} {}", "Host:".dimmed(), config.hostname);
    println!("   {} {}", "Port:".dimmed(), config.port);
    println!("   {} {}", "Path:".dimmed(), config.path);
    println!(
        "   {} {}",
        "Domain:".dimmed(),
        config.domain.as_deref().unwrap_or("-")
    );
    println!("\n   {} {}", "Endpoint:".yellow(), client.base_url());

    Ok(())
}

/// Build a client for the chosen endpoint
async fn client_for(endpoint: EndpointArgs) -> Result<FederationClient> {
    if let Some(domain) = endpoint.domain {
        return resolve_for_domain(&domain)
            .await
            .context("Failed to discover federation server");
    }
    if let Some(server) = endpoint.server {
        let url = Url::parse(&server).context("Invalid federation server URL")?;
        let config = FederationConfig::from_federation_url(&url, None);
        return Ok(FederationClient::new(config));
    }
    anyhow::bail!("either --domain or --server is required")
}

/// Print a federation record
fn print_record(record: &FederationRecord) -> Result<()> {
    println!("\n{}", "✅ Federation record:".green().bold());
    if let Some(address) = &record.stellar_address {
        println!("   {} {}", "Address:".dimmed(), address);
    }
    if let Some(account_id) = &record.account_id {
        println!("   {} {}", "Account ID:".dimmed(), account_id);
    }
    if let Some(memo_type) = &record.memo_type {
        println!("   {} {}", "Memo type:".dimmed(), memo_type);
    }
    if let Some(memo) = &record.memo {
        println!("   {} {}", "Memo:".dimmed(), memo);
    }

    println!("\n{}", "📋 Record (JSON):".yellow().bold());
    println!("{}", serde_json::to_string_pretty(record)?);

    Ok(())
}
