//! Todo server - GraphQL API over a todo list stored in a single JSON file.

mod config;
mod logging;
mod routes;
mod schema;
mod state;

use anyhow::{Context, Result};
use clap::Parser;
use todo_server::exit_codes;
use todo_store::store::TodoStore;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{debug, error, info, warn};

use crate::config::Args;
use crate::state::AppState;

#[tokio::main]
async fn main() {
    // `.env` may set RUST_LOG, so it is loaded before the subscriber.
    let dotenv = config::load_dotenv();
    logging::init();
    match dotenv {
        Ok(Some(path)) => debug!(path = %path.display(), "loaded .env"),
        Ok(None) => {}
        Err(err) => warn!(error = %err, "ignoring malformed .env"),
    }

    let args = Args::parse();
    if let Err(err) = run(args).await {
        error!("{:#}", err);
        std::process::exit(exit_codes::STARTUP_FAILED);
    }
}

async fn run(args: Args) -> Result<()> {
    if args.print_schema {
        print!("{}", schema::schema_builder().finish().sdl());
        return Ok(());
    }

    let data_file = args.data_file.clone().context("DATA_FILE is not set")?;
    let store = TodoStore::load(&data_file).context("load todo store")?;
    info!(data_file = %store.path().display(), todos = store.len(), "todo store loaded");

    let state = AppState::new(schema::build_schema(store));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = routes::router()
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state);

    let addr = args.addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("bind {addr}"))?;
    info!(url = %format!("http://{addr}/"), "server ready");

    axum::serve(listener, app).await.context("serve http")?;
    Ok(())
}
