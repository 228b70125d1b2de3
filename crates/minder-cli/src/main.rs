mod config;
mod serve_cmd;
mod todo_cmds;

use clap::{Parser, Subcommand};

use minder_db::pool;

use config::MinderConfig;

#[derive(Parser)]
#[command(name = "minder", about = "Minimal server-rendered todo list service")]
struct Cli {
    /// Database URL (overrides MINDER_DATABASE_URL env var)
    #[arg(long, global = true)]
    database_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a minder config file (no database required)
    Init {
        /// PostgreSQL connection URL
        #[arg(long, default_value = "postgresql://localhost:5432/minder")]
        db_url: String,
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
    /// Create the minder database if absent and run migrations
    DbInit,
    /// Run the web server
    Serve {
        /// Address to bind
        #[arg(long, default_value = "127.0.0.1")]
        bind: String,
        /// Port to listen on
        #[arg(long, default_value_t = 8080)]
        port: u16,
    },
    /// Add a todo
    Add {
        /// The todo text (1-255 characters)
        name: String,
    },
    /// List all todos in creation order
    List,
    /// Rename a todo
    Rename {
        /// Todo ID to rename
        id: String,
        /// The new text
        name: String,
    },
    /// Mark a todo as completed
    Done {
        /// Todo ID to mark
        id: String,
    },
    /// Mark a todo as not completed
    Undone {
        /// Todo ID to mark
        id: String,
    },
    /// Delete a todo (no-op when the id matches nothing)
    Rm {
        /// Todo ID to delete
        id: String,
    },
}

/// Execute the `minder init` command: write the config file.
fn cmd_init(db_url: &str, force: bool) -> anyhow::Result<()> {
    let path = config::config_path();

    if path.exists() && !force {
        anyhow::bail!(
            "config file already exists at {}\nUse --force to overwrite.",
            path.display()
        );
    }

    let cfg = config::ConfigFile {
        database: config::DatabaseSection {
            url: db_url.to_string(),
        },
    };

    config::save_config(&cfg)?;

    println!("Config written to {}", path.display());
    println!("  database.url = {db_url}");
    println!();
    println!("Next: run `minder db-init` to create and migrate the database.");

    Ok(())
}

/// Execute the `minder db-init` command: create the database and run
/// migrations.
async fn cmd_db_init(cli_db_url: Option<&str>) -> anyhow::Result<()> {
    let resolved = MinderConfig::resolve(cli_db_url);

    println!("Initializing minder database...");

    pool::ensure_database_exists(&resolved.db_config).await?;

    let db_pool = pool::create_pool(&resolved.db_config).await?;
    pool::run_migrations(&db_pool).await?;

    let count = pool::todo_count(&db_pool).await?;
    println!("Database ready. todos: {count} rows");

    db_pool.close().await;

    println!("minder db-init complete.");
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init { db_url, force } => {
            cmd_init(&db_url, force)?;
        }
        Commands::DbInit => {
            cmd_db_init(cli.database_url.as_deref()).await?;
        }
        Commands::Serve { bind, port } => {
            let resolved = MinderConfig::resolve(cli.database_url.as_deref());
            let db_pool = pool::create_pool(&resolved.db_config).await?;
            let result = serve_cmd::run_serve(db_pool.clone(), &bind, port).await;
            db_pool.close().await;
            result?;
        }
        Commands::Add { name } => {
            let resolved = MinderConfig::resolve(cli.database_url.as_deref());
            let db_pool = pool::create_pool(&resolved.db_config).await?;
            let result = todo_cmds::run_add(&db_pool, &name).await;
            db_pool.close().await;
            result?;
        }
        Commands::List => {
            let resolved = MinderConfig::resolve(cli.database_url.as_deref());
            let db_pool = pool::create_pool(&resolved.db_config).await?;
            let result = todo_cmds::run_list(&db_pool).await;
            db_pool.close().await;
            result?;
        }
        Commands::Rename { id, name } => {
            let resolved = MinderConfig::resolve(cli.database_url.as_deref());
            let db_pool = pool::create_pool(&resolved.db_config).await?;
            let result = todo_cmds::run_rename(&db_pool, &id, &name).await;
            db_pool.close().await;
            result?;
        }
        Commands::Done { id } => {
            let resolved = MinderConfig::resolve(cli.database_url.as_deref());
            let db_pool = pool::create_pool(&resolved.db_config).await?;
            let result = todo_cmds::run_set_complete(&db_pool, &id, true).await;
            db_pool.close().await;
            result?;
        }
        Commands::Undone { id } => {
            let resolved = MinderConfig::resolve(cli.database_url.as_deref());
            let db_pool = pool::create_pool(&resolved.db_config).await?;
            let result = todo_cmds::run_set_complete(&db_pool, &id, false).await;
            db_pool.close().await;
            result?;
        }
        Commands::Rm { id } => {
            let resolved = MinderConfig::resolve(cli.database_url.as_deref());
            let db_pool = pool::create_pool(&resolved.db_config).await?;
            let result = todo_cmds::run_rm(&db_pool, &id).await;
            db_pool.close().await;
            result?;
        }
    }

    Ok(())
}
