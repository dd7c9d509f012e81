//! Siteworks server binary
//!
//! `serve` boots the HTTP server; the remaining subcommands cover day-2
//! operation: migrations, the first admin account and database snapshots.

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use siteworks_server::app::App;
use siteworks_server::backup;
use siteworks_server::config::{self, AppConfig, LogConfig};
use std::path::PathBuf;
use tokio_util::sync::CancellationToken;

#[derive(Parser)]
#[command(
    name = "siteworks-server",
    about = "Siteworks facilities & asset management server",
    version
)]
struct Cli {
    /// Path to the YAML configuration file (default: siteworks.yaml if present)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run migrations, then serve the API and the portal
    Serve,

    /// Apply all module migrations and exit
    Migrate,

    /// Create an administrator account
    CreateAdmin(CreateAdminArgs),

    /// Database snapshots
    #[command(subcommand)]
    Backup(BackupCommand),
}

#[derive(Args)]
struct CreateAdminArgs {
    /// Display name
    #[arg(long)]
    name: String,

    /// Login email, unique across accounts
    #[arg(long)]
    email: String,

    /// Initial password
    #[arg(long)]
    password: String,
}

#[derive(Subcommand)]
enum BackupCommand {
    /// Write a snapshot, then prune beyond the retention count
    Run,

    /// Prune old snapshots only
    Prune,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = config::load(cli.config.as_deref())?;
    init_tracing(&config.log);

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(config).await,
        Command::Migrate => migrate(config).await,
        Command::CreateAdmin(args) => create_admin(config, args).await,
        Command::Backup(BackupCommand::Run) => {
            let path = backup::run(&config.database, &config.backup).await?;
            println!("snapshot written to {}", path.display());
            Ok(())
        }
        Command::Backup(BackupCommand::Prune) => {
            let removed = backup::prune(&config.backup).await?;
            println!("removed {removed} old snapshot(s)");
            Ok(())
        }
    }
}

fn init_tracing(cfg: &LogConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cfg.filter));
    if cfg.json {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

async fn serve(config: AppConfig) -> anyhow::Result<()> {
    if config.auth.jwt_secret == config::DEFAULT_JWT_SECRET {
        tracing::warn!("auth.jwt_secret is the built-in default; set a real secret");
    }

    let app = App::build(&config).await?;
    app.migrate().await?;
    let router = app.router(&config)?;

    let cancel = CancellationToken::new();
    let backup_task = config.backup.enabled.then(|| {
        backup::spawn_periodic(config.database.clone(), config.backup.clone(), cancel.clone())
    });
    tokio::spawn(shutdown_signal(cancel.clone()));

    let listener = tokio::net::TcpListener::bind((config.server.host.as_str(), config.server.port))
        .await
        .with_context(|| format!("failed to bind {}:{}", config.server.host, config.server.port))?;
    tracing::info!(addr = %listener.local_addr()?, "siteworks listening");

    let shutdown = cancel.clone();
    axum::serve(listener, router)
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await?;

    cancel.cancel();
    if let Some(task) = backup_task {
        let _ = task.await;
    }
    tracing::info!("server stopped");
    Ok(())
}

/// Resolve when SIGINT or SIGTERM arrives, then trip the token
async fn shutdown_signal(cancel: CancellationToken) {
    let ctrl_c = async {
        if let Err(error) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %error, "failed to install the Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(error) => {
                tracing::error!(error = %error, "failed to install the SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("received SIGINT, shutting down"),
        _ = terminate => tracing::info!("received SIGTERM, shutting down"),
    }
    cancel.cancel();
}

async fn migrate(config: AppConfig) -> anyhow::Result<()> {
    let app = App::build(&config).await?;
    app.migrate().await?;
    println!("migrations applied");
    Ok(())
}

async fn create_admin(config: AppConfig, args: CreateAdminArgs) -> anyhow::Result<()> {
    let app = App::build(&config).await?;
    app.migrate().await?;

    let user = app
        .accounts
        .service()
        .create_user(accounts::NewUser {
            name: args.name,
            email: args.email,
            password: args.password,
            role: sitekit::Role::Admin,
            active: true,
        })
        .await?;

    println!("created admin {} <{}>", user.name, user.email);
    Ok(())
}
