use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;

use dragonchain_client::config::{load_config, load_from_env};
use dragonchain_client::observability::logging::init_logging;
use dragonchain_client::{Client, QueryOptions, TransactionDefinition};

#[derive(Parser)]
#[command(name = "dragonchain-cli")]
#[command(about = "Command line client for the Dragonchain API", long_about = None)]
struct Cli {
    /// TOML config file. Without it credentials come from the environment.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the configured endpoint.
    #[arg(short, long)]
    endpoint: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args)]
struct QueryArgs {
    /// Lucene query string
    #[arg(short, long, default_value = "")]
    q: String,

    #[arg(short, long, default_value = "")]
    sort: String,

    #[arg(long, default_value_t = 0)]
    offset: i64,

    #[arg(long, default_value_t = 10)]
    limit: i64,
}

impl From<QueryArgs> for QueryOptions {
    fn from(args: QueryArgs) -> Self {
        QueryOptions::new(args.q)
            .sort(args.sort)
            .offset(args.offset)
            .limit(args.limit)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch a transaction by ID
    GetTransaction { id: String },
    /// Create a transaction
    CreateTransaction {
        #[arg(long)]
        txn_type: String,
        /// Payload; parsed as JSON when possible, otherwise sent as a string
        #[arg(long)]
        payload: String,
        #[arg(long)]
        tag: Option<String>,
        #[arg(long, default_value = "1")]
        version: String,
    },
    /// Search transactions
    QueryTransactions(QueryArgs),
    /// Fetch a contract by ID
    GetContract { id: String },
    /// Search contracts
    QueryContracts(QueryArgs),
    /// Delete a contract
    DeleteContract { id: String },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path),
        None => load_from_env(),
    };
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    init_logging(&config.log_level);

    let mut client = match Client::from_config(&config) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    if let Some(endpoint) = cli.endpoint {
        client = client.with_endpoint(endpoint);
    }

    match run(&client, cli.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(client: &Client, command: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::GetTransaction { id } => print_json(&client.get_transaction(&id).await?),
        Commands::CreateTransaction {
            txn_type,
            payload,
            tag,
            version,
        } => {
            let payload = serde_json::from_str::<serde_json::Value>(&payload)
                .unwrap_or(serde_json::Value::String(payload));
            let def = TransactionDefinition {
                version,
                txn_type,
                payload,
                tag,
            };
            let id = client.create_transaction(&def).await?;
            print_json(&serde_json::json!({ "transaction_id": id }))
        }
        Commands::QueryTransactions(args) => {
            print_json(&client.query_transactions(&args.into()).await?)
        }
        Commands::GetContract { id } => print_json(&client.get_contract(&id).await?),
        Commands::QueryContracts(args) => print_json(&client.query_contracts(&args.into()).await?),
        Commands::DeleteContract { id } => {
            client.delete_contract(&id).await?;
            print_json(&serde_json::json!({ "deleted": id }))
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
