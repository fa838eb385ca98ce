use tracing::{error, info};

use community::{AccountRepository, BoardRepository, Config, Database, PostRepository};

#[tokio::main]
async fn main() {
    // Load configuration
    let config = match Config::load("config.toml") {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config.toml: {e}");
            eprintln!("Using default configuration.");
            Config::default()
        }
    };

    // Initialize logging
    if let Err(e) = community::logging::init(&config.logging) {
        eprintln!("Failed to initialize logging: {e}");
        // Fall back to console-only logging
        community::logging::init_console_only(&config.logging.level);
    }

    info!("{}", config.community.name);

    let db = match Database::open(&config.database.path).await {
        Ok(db) => db,
        Err(e) => {
            error!("Failed to open database {}: {e}", config.database.path);
            std::process::exit(1);
        }
    };

    match summarize(&db).await {
        Ok((accounts, boards, posts)) => {
            let path = &config.database.path;
            info!(accounts, boards, posts, "Database ready at {path}");
        }
        Err(e) => error!("Failed to read database summary: {e}"),
    }

    db.close().await;
}

async fn summarize(db: &Database) -> community::Result<(i64, i64, i64)> {
    let accounts = AccountRepository::new(db.pool()).count().await?;
    let boards = BoardRepository::new(db.pool()).count().await?;
    let posts = PostRepository::new(db.pool()).count().await?;
    Ok((accounts, boards, posts))
}
