use clap::{Parser, ValueEnum};
use migration::{migrate_internal, MigrationCommand};
use sea_orm::Database;

#[derive(Clone, ValueEnum)]
enum Env {
    Prod,
    Test,
}

#[derive(Parser)]
#[command(name = "migration-cli")]
#[command(about = "Tournament backend database migration tool")]
struct Args {
    /// Migration command to run
    command: String,

    /// Runtime environment; selects DATABASE_URL or TEST_DATABASE_URL
    #[arg(short, long, value_enum, default_value = "test")]
    env: Env,
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

    let command = match args.command.as_str() {
        "up" => MigrationCommand::Up,
        "down" => MigrationCommand::Down,
        "fresh" => MigrationCommand::Fresh,
        "reset" => MigrationCommand::Reset,
        "refresh" => MigrationCommand::Refresh,
        "status" => MigrationCommand::Status,
        other => {
            eprintln!(
                "Unknown command: {other}. Use: up | down | fresh | reset | refresh | status"
            );
            std::process::exit(2);
        }
    };

    let url_var = match args.env {
        Env::Prod => "DATABASE_URL",
        Env::Test => "TEST_DATABASE_URL",
    };
    let url = match std::env::var(url_var) {
        Ok(url) => url,
        Err(_) => {
            eprintln!("❌ {url_var} must be set");
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

    if let Err(e) = migrate_internal(&db, command).await {
        eprintln!("❌ Migration failed: {e}");
        std::process::exit(1);
    }
}
