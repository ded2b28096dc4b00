mod catalog;
mod config;
mod interpreter;
mod matcher;
mod model;
mod render;
mod storage;
mod utils;

use catalog::Catalog;
use config::{AppConfig, load_config};
use interpreter::QueryInterpreter;
use matcher::{Matcher, RankerImpl, fallback};
use model::{ApiResponse, SearchRequest};
use render::render_results;
use std::sync::Arc;
use storage::SqliteStorage;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::sync::Mutex;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Load configuration from file
    let config: AppConfig = match load_config("config.json") {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Config load error: {}", e);
            return;
        }
    };

    // Load the catalog snapshot. It stays immutable for the process
    // lifetime; a reload would build a new Catalog and swap the Arc.
    let catalog = match Catalog::load(&config.catalog_path) {
        Ok(c) => Arc::new(c),
        Err(e) => {
            error!("Catalog load error: {}", e);
            return;
        }
    };
    if catalog.is_empty() {
        warn!("Catalog {} is empty, every query will fall back", config.catalog_path);
    }
    info!("Loaded {} products from {}", catalog.len(), config.catalog_path);

    // Initialize the search log (SQLite) with async access (wrapped in a Mutex)
    let storage = match SqliteStorage::new(&config.db_path) {
        Ok(s) => Arc::new(Mutex::new(s)),
        Err(e) => {
            error!("Failed to initialize storage: {:?}", e);
            return;
        }
    };
    match storage.lock().await.search_count() {
        Ok(count) => info!("Search log has {} entries", count),
        Err(e) => warn!("Search log count failed: {:?}", e),
    }

    let interpreter = QueryInterpreter::new();
    let ranker = RankerImpl::new();

    info!("Ready. Expecting one JSON request per line on stdin.");

    // Request loop: one query is fully processed before the next is read.
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();
    while let Ok(Some(line)) = lines.next_line().await {
        let response = process_query(&line, &catalog, &interpreter, &ranker, &storage).await;
        let payload = match serde_json::to_string(&response) {
            Ok(p) => p,
            Err(e) => {
                warn!("Response serialization failed: {}", e);
                continue;
            }
        };
        if let Err(e) = stdout.write_all(payload.as_bytes()).await {
            error!("Stdout write failed: {}", e);
            break;
        }
        let _ = stdout.write_all(b"\n").await;
        let _ = stdout.flush().await;
    }

    info!("Input closed, shutting down.");
}

/// Request boundary: every failure past this point becomes a uniform
/// error-shaped response, never a partial success.
async fn process_query(
    line: &str,
    catalog: &Catalog,
    interpreter: &QueryInterpreter,
    ranker: &RankerImpl,
    storage: &Arc<Mutex<SqliteStorage>>,
) -> ApiResponse {
    let request: SearchRequest = match serde_json::from_str(line) {
        Ok(req) => req,
        Err(e) => {
            warn!("Malformed request: {}", e);
            return ApiResponse::Error {
                error: "Invalid request".to_string(),
            };
        }
    };
    let query = request.query.trim().to_string();
    info!("Processing query: {:?}", query);

    // Log first; a failed write aborts the request before any search runs.
    if let Err(e) = storage.lock().await.log_search(&query) {
        warn!("Search log write failed: {:?}", e);
        return ApiResponse::Error {
            error: format!("Database error: {}", e),
        };
    }

    let descriptor = interpreter.interpret(&query);
    info!(
        "Interpreted: category={:?} max={:?} min={:?} best={} gaming={} term={:?}",
        descriptor.category,
        descriptor.max_price,
        descriptor.min_price,
        descriptor.is_best_query,
        descriptor.is_gaming_query,
        descriptor.cleaned_term
    );

    let mut results = ranker.search(catalog, &descriptor);
    info!("Matched {} catalog products", results.len());
    if results.is_empty() {
        info!("No matches, substituting fallback result");
        results.push(fallback::fallback_product(&query));
    }

    ApiResponse::Success {
        message: render_results(&query, &results),
    }
}
