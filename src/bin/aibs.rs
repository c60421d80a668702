//! AIBS command-line client.
//!
//! Each subcommand issues one API call and prints the JSON body the backend
//! returned. Session cookies are kept in a JSON file between invocations, so
//! `aibs login ...` followed by `aibs listings` behaves like a browser tab.
//!
//! Logging goes to stderr and is controlled by `RUST_LOG`.

use aibs_client::config;
use aibs_client::models::UserType;
use aibs_client::{ApiClient, ApiResponse, QueryParams, Session};
use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use log::{info, warn};
use serde_json::Value;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about = "Command-line client for the AIBS REST API", long_about = None)]
struct Cli {
    /// Backend origin, e.g. http://localhost:5000. Overrides AIBS_BASE_URL
    /// and the configuration file
    #[arg(long)]
    base_url: Option<String>,

    /// JSON configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// File holding the session cookies
    #[arg(long, default_value = ".aibs-session.json")]
    session_file: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create an account and log in
    Signup {
        name: String,
        email: String,
        password: String,
        #[arg(value_parser = parse_user_type)]
        user_type: UserType,
    },
    /// Log in to an existing account
    Login {
        email: String,
        password: String,
        #[arg(value_parser = parse_user_type)]
        user_type: UserType,
    },
    /// Log out and forget the session
    Logout,
    /// Show the logged-in account
    Me,
    /// List crop listings
    Listings {
        /// Query parameter as key=value, repeatable
        #[arg(short, long = "param", value_parser = parse_param)]
        params: Vec<(String, String)>,
    },
    /// Create a crop listing from a JSON body
    CreateListing { json: String },
    /// Update a crop listing from a JSON body
    UpdateListing { id: String, json: String },
    /// List farm supplies
    Supplies {
        #[arg(short, long = "param", value_parser = parse_param)]
        params: Vec<(String, String)>,
    },
    /// Create a farm supply from a JSON body
    CreateSupply { json: String },
    /// List transactions
    Transactions {
        #[arg(short, long = "param", value_parser = parse_param)]
        params: Vec<(String, String)>,
    },
    /// Record a transaction from a JSON body
    CreateTransaction { json: String },
    /// List all accounts (admin)
    Users,
    /// Update an account from a JSON body (admin)
    UpdateUser { id: String, json: String },
    /// Show dashboard figures (admin)
    Stats,
}

fn parse_user_type(s: &str) -> Result<UserType, String> {
    UserType::from_str(s).ok_or_else(|| format!("expected Farmer, Vendor or Admin, got `{}`", s))
}

fn parse_param(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("expected key=value, got `{}`", s))
}

fn parse_body(json: &str) -> Result<Value> {
    serde_json::from_str(json).context("request body is not valid JSON")
}

async fn run(client: &ApiClient, session: &Session, command: Command) -> Result<ApiResponse> {
    let response = match command {
        Command::Signup {
            name,
            email,
            password,
            user_type,
        } => {
            client
                .signup(session, &name, &email, &password, user_type)
                .await?
        }
        Command::Login {
            email,
            password,
            user_type,
        } => client.login(session, &email, &password, user_type).await?,
        Command::Logout => client.logout(session).await?,
        Command::Me => client.get_current_user(session).await?,
        Command::Listings { params } => {
            let params: QueryParams = params.into_iter().collect();
            client.get_listings(session, &params).await?
        }
        Command::CreateListing { json } => {
            client.create_listing(session, &parse_body(&json)?).await?
        }
        Command::UpdateListing { id, json } => {
            client
                .update_listing(session, id, &parse_body(&json)?)
                .await?
        }
        Command::Supplies { params } => {
            let params: QueryParams = params.into_iter().collect();
            client.get_supplies(session, &params).await?
        }
        Command::CreateSupply { json } => client.create_supply(session, &parse_body(&json)?).await?,
        Command::Transactions { params } => {
            let params: QueryParams = params.into_iter().collect();
            client.get_transactions(session, &params).await?
        }
        Command::CreateTransaction { json } => {
            client
                .create_transaction(session, &parse_body(&json)?)
                .await?
        }
        Command::Users => client.get_users(session).await?,
        Command::UpdateUser { id, json } => {
            client
                .update_user(session, id, &parse_body(&json)?)
                .await?
        }
        Command::Stats => client.get_admin_stats(session).await?,
    };
    Ok(response)
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    config::load(cli.config.as_deref(), cli.base_url.as_deref())?;
    let client = ApiClient::from_global_config()?;
    let session = Session::load(&cli.session_file)
        .with_context(|| format!("cannot read session file {}", cli.session_file.display()))?;

    let session_file = cli.session_file.clone();
    let response = run(&client, &session, cli.command).await?;

    if let Err(e) = session.save(&session_file) {
        warn!("Could not save session to {}: {}", session_file.display(), e);
    }

    info!("HTTP {} {}", response.status_code, response.status_text());
    println!("{}", serde_json::to_string_pretty(&response.body)?);

    check_status(&response)
}

/// Fails the command when the backend reported a failure: a non-2xx status
/// or an `error` field in the body.
fn check_status(response: &ApiResponse) -> Result<()> {
    if response.is_success() && response.error_message().is_none() {
        return Ok(());
    }

    let message = response
        .error_message()
        .unwrap_or_else(|| response.status_text());
    Err(anyhow!("{} (HTTP {})", message, response.status_code))
}
