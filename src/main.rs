use anyhow::{Context, Result};
use clap::Parser;
use secrecy::SecretString;
use std::path::PathBuf;
use tokio::sync::mpsc;

use runway::app::{App, AppEvent};
use runway::category::CategoryId;
use runway::config::Config;
use runway::saved::SavedArticles;
use runway::source::{fallback_articles, NewsClient};
use runway::storage::{Database, DatabaseError, THEME_KEY};
use runway::theme::ThemeVariant;
use runway::ui;

/// Get the config directory path (~/.config/runway/)
fn get_config_dir() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME environment variable not set")?;
    Ok(PathBuf::from(home).join(".config").join("runway"))
}

#[derive(Parser, Debug)]
#[command(name = "runway", about = "Terminal reader for NYT Top Stories")]
struct Args {
    /// Reset the database (delete and recreate)
    #[arg(long)]
    reset_db: bool,

    /// Category to show at startup (all, saved, fashion, style, arts, culture)
    #[arg(long, value_name = "NAME")]
    category: Option<String>,

    /// Skip the initial fetch and start from the built-in dataset
    #[arg(long)]
    no_fetch: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let config_dir = get_config_dir()?;
    if !config_dir.exists() {
        std::fs::create_dir_all(&config_dir).context("Failed to create config directory")?;
        println!("Created config directory: {}", config_dir.display());
    }

    // User-only access on Unix
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        match std::fs::metadata(&config_dir) {
            Ok(metadata) => {
                let mut perms = metadata.permissions();
                perms.set_mode(0o700);
                if let Err(e) = std::fs::set_permissions(&config_dir, perms) {
                    tracing::warn!(
                        path = %config_dir.display(),
                        error = %e,
                        "Failed to set config directory permissions to 0700"
                    );
                }
            }
            Err(e) => {
                tracing::warn!(
                    path = %config_dir.display(),
                    error = %e,
                    "Failed to read config directory metadata"
                );
            }
        }
    }

    let config = Config::load(&config_dir.join("config.toml")).context("Failed to load config")?;

    let db_path = config_dir.join("news.db");
    if args.reset_db && db_path.exists() {
        std::fs::remove_file(&db_path).context("Failed to delete database")?;
        println!("Database reset.");
    }

    let db_path_str = db_path
        .to_str()
        .ok_or_else(|| anyhow::anyhow!("Invalid UTF-8 in database path"))?;
    let db = match Database::open(db_path_str).await {
        Ok(db) => db,
        Err(DatabaseError::InstanceLocked) => {
            eprintln!(
                "Error: Another instance of runway appears to be running. Please close it and try again."
            );
            std::process::exit(1);
        }
        Err(e) => {
            return Err(anyhow::anyhow!("Failed to open database: {}", e));
        }
    };

    // A stored theme preference wins over the config file default.
    let theme = match db.get_preference(THEME_KEY).await {
        Ok(Some(stored)) => ThemeVariant::from_name(&stored)
            .unwrap_or_else(|| ThemeVariant::from_name(&config.theme).unwrap_or(ThemeVariant::Dark)),
        Ok(None) => ThemeVariant::from_name(&config.theme).unwrap_or(ThemeVariant::Dark),
        Err(e) => {
            tracing::warn!(error = %e, "Failed to read theme preference, using default");
            ThemeVariant::Dark
        }
    };

    let saved = SavedArticles::load(&db).await;
    tracing::info!(saved = saved.len(), "Loaded saved articles");

    let initial_category = args
        .category
        .as_deref()
        .or(Some(config.default_category.as_str()))
        .and_then(CategoryId::from_name)
        .unwrap_or(CategoryId::All);

    let (api_key, demo_mode) = match config.resolve_api_key() {
        Some(key) => (SecretString::from(key), false),
        None => (SecretString::from(String::new()), true),
    };
    let client = NewsClient::new(&config.api_base_url, api_key)
        .context("Failed to create API client")?;

    let mut app = App::new(db, client, demo_mode, theme, saved, initial_category);

    let (event_tx, event_rx) = mpsc::channel::<AppEvent>(32);

    if args.no_fetch {
        app.store
            .set_articles(fallback_articles(), app.saved.articles());
        app.set_status("Offline mode: showing built-in stories");
    } else {
        if demo_mode {
            app.set_status("No API key found: running in demo mode");
        }
        app.spawn_fetch(&event_tx);
    }

    ui::run(&mut app, event_tx, event_rx).await?;

    println!("Goodbye!");
    Ok(())
}
