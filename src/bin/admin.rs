//! CLI administration tool for shortlink-services.
//!
//! Provides commands for managing user accounts, viewing statistics,
//! and performing database operations without requiring HTTP API access.
//!
//! # Usage
//!
//! ```bash
//! # Create a user (prompts for missing fields)
//! cargo run --bin admin -- user create
//!
//! # List the newest users
//! cargo run --bin admin -- user list --limit 20
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Check database connection / apply migrations
//! cargo run --bin admin -- db check
//! cargo run --bin admin -- db migrate
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` or `DB_USER` / `DB_PASSWORD` / `DB_NAME` (required)

use shortlink_services::api::dto::auth::RegisterRequest;
use shortlink_services::application::services::AuthService;
use shortlink_services::config::{Config, mask_connection_string};
use shortlink_services::domain::repositories::UserRepository;
use shortlink_services::infrastructure::persistence::PgUserRepository;
use shortlink_services::infrastructure::security::{Argon2CredentialHasher, JwtTokenIssuer};
use shortlink_services::utils::short_code::random_code;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input, Password};
use sqlx::PgPool;
use std::sync::Arc;
use validator::Validate;

/// CLI tool for managing shortlink-services.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage user accounts
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// User management subcommands.
#[derive(Subcommand)]
enum UserAction {
    /// Create a new user
    Create {
        #[arg(short, long)]
        name: Option<String>,

        #[arg(short, long)]
        email: Option<String>,

        /// Password (prompted without echo if omitted)
        #[arg(short, long)]
        password: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List users, newest first
    List {
        #[arg(short, long, default_value_t = 50)]
        limit: i64,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,

    /// Apply pending migrations
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = Config::load_database_url()?;

    let pool = PgPool::connect(&database_url)
        .await
        .with_context(|| format!("Failed to connect to {}", mask_connection_string(&database_url)))?;

    match cli.command {
        Commands::User { action } => handle_user_action(action, &pool).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches user management commands.
async fn handle_user_action(action: UserAction, pool: &PgPool) -> Result<()> {
    let repo = Arc::new(PgUserRepository::new(Arc::new(pool.clone())));

    match action {
        UserAction::Create {
            name,
            email,
            password,
            yes,
        } => create_user(repo, name, email, password, yes).await?,
        UserAction::List { limit } => list_users(repo, limit).await?,
    }

    Ok(())
}

/// Creates a user with the same rules as `POST /registrar`.
///
/// # Flow
///
/// 1. Prompt for missing name, email and password
/// 2. Validate the fields
/// 3. Confirm creation (unless `--yes` flag)
/// 4. Hash the password and store the user
async fn create_user(
    repo: Arc<PgUserRepository>,
    name: Option<String>,
    email: Option<String>,
    password: Option<String>,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "👤 Create User".bright_blue().bold());
    println!();

    let nome = match name {
        Some(n) => n,
        None => Input::new().with_prompt("Name").interact_text()?,
    };
    let email = match email {
        Some(e) => e,
        None => Input::new().with_prompt("Email").interact_text()?,
    };
    let senha = match password {
        Some(p) => p,
        None => Password::new()
            .with_prompt("Password")
            .with_confirmation("Repeat password", "Passwords do not match")
            .interact()?,
    };

    let request = RegisterRequest { nome, email, senha };
    if let Err(errors) = request.validate() {
        println!("{}", "❌ Invalid input:".red().bold());
        for (field, field_errors) in errors.field_errors() {
            for error in field_errors {
                let message = error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| error.code.to_string());
                println!("  {}: {}", field.to_string().cyan(), message);
            }
        }
        return Ok(());
    }

    println!();
    println!("  Name:  {}", request.nome.cyan());
    println!("  Email: {}", request.email.cyan());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Create this user?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    // Only `register` is called; the issuer never signs anything here
    let issuer = JwtTokenIssuer::new(&random_code(32), 1);
    let auth = AuthService::new(repo, Arc::new(Argon2CredentialHasher::new()), Arc::new(issuer));

    let user = auth
        .register(&request.nome, &request.email, &request.senha)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create user: {}", e))?;

    println!();
    println!("{}", "✅ User created successfully!".green().bold());
    println!("  ID: {}", user.id.to_string().bright_white());
    println!();

    Ok(())
}

/// Lists users with creation dates.
async fn list_users(repo: Arc<PgUserRepository>, limit: i64) -> Result<()> {
    println!("{}", "📋 Users".bright_blue().bold());
    println!();

    let users = repo
        .list(limit)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list users: {}", e))?;

    if users.is_empty() {
        println!("{}", "  No users found".yellow());
        println!();
        println!(
            "  Create one with: {} admin user create",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<36} {:<30} {:<30} {:<16}",
        "ID".bright_white().bold(),
        "Name".bright_white().bold(),
        "Email".bright_white().bold(),
        "Created".bright_white().bold()
    );
    println!("  {}", "─".repeat(115).bright_black());

    for user in &users {
        println!(
            "  {:<36} {:<30} {:<30} {}",
            user.id.to_string().bright_black(),
            user.name.cyan(),
            user.email,
            user.created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black()
        );
    }

    println!();
    println!("  Total: {}", users.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Displays system statistics.
///
/// Shows:
/// - Number of users
/// - Active and soft-deleted links
/// - Total clicks over all links
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let users_count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE deleted_at IS NULL")
            .fetch_one(pool)
            .await?;

    let (active_links, deleted_links, total_clicks): (i64, i64, i64) = sqlx::query_as(
        r#"
        SELECT
            COUNT(*) FILTER (WHERE deleted_at IS NULL),
            COUNT(*) FILTER (WHERE deleted_at IS NOT NULL),
            COALESCE(SUM(clicks), 0)::BIGINT
        FROM links
        "#,
    )
    .fetch_one(pool)
    .await?;

    println!(
        "  Users:         {}",
        users_count.to_string().bright_green().bold()
    );
    println!(
        "  Active links:  {}",
        active_links.to_string().bright_green().bold()
    );
    println!(
        "  Deleted links: {}",
        deleted_links.to_string().bright_black()
    );
    println!(
        "  Clicks:        {}",
        total_clicks.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
        DbAction::Migrate => {
            println!("{}", "🛠  Applying migrations...".bright_blue());

            sqlx::migrate!("./migrations")
                .run(pool)
                .await
                .context("Failed to run migrations")?;

            println!("{}", "✅ Migrations applied".green().bold());
        }
    }

    Ok(())
}
