use clap::{Parser, ValueEnum};
use migration::MigrationCommand;
use sea_orm::Database;

#[derive(Clone, ValueEnum)]
enum Command {
    Up,
    Down,
    Fresh,
    Reset,
    Refresh,
    Status,
}

impl From<Command> for MigrationCommand {
    fn from(cmd: Command) -> Self {
        match cmd {
            Command::Up => MigrationCommand::Up,
            Command::Down => MigrationCommand::Down,
            Command::Fresh => MigrationCommand::Fresh,
            Command::Reset => MigrationCommand::Reset,
            Command::Refresh => MigrationCommand::Refresh,
            Command::Status => MigrationCommand::Status,
        }
    }
}

#[derive(Parser)]
#[command(name = "migration-cli")]
#[command(about = "Database migration tool")]
struct Args {
    /// Migration command to run
    #[arg(value_enum)]
    command: Command,
}

/// Builds the database URL from the same DB_* environment variables the
/// backend uses. Host, port and sslmode have defaults; the rest are required.
fn db_url_from_env() -> Result<String, String> {
    let host = std::env::var("DB_HOST").unwrap_or_else(|_| "localhost".to_string());
    let port = std::env::var("DB_PORT").unwrap_or_else(|_| "5432".to_string());
    let sslmode = std::env::var("DB_SSLMODE").unwrap_or_else(|_| "disable".to_string());
    let user = std::env::var("DB_USER").map_err(|_| "DB_USER must be set".to_string())?;
    let password = std::env::var("DB_PASSWORD").map_err(|_| "DB_PASSWORD must be set".to_string())?;
    let name = std::env::var("DB_NAME").map_err(|_| "DB_NAME must be set".to_string())?;

    Ok(format!(
        "postgresql://{user}:{password}@{host}:{port}/{name}?sslmode={sslmode}"
    ))
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stdout)
        .without_time()
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_line_number(false)
        .with_file(false)
        .with_env_filter("migration=info,sqlx=warn")
        .init();

    let args = Args::parse();

    let url = match db_url_from_env() {
        Ok(url) => url,
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };

    let db = match Database::connect(&url).await {
        Ok(db) => db,
        Err(e) => {
            eprintln!("❌ Failed to connect to database: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = migration::migrate(&db, args.command.into()).await {
        eprintln!("❌ Migration failed: {e}");
        std::process::exit(1);
    }
}
