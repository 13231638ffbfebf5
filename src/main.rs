use std::sync::Arc;

use clap::Parser;
use trivia_api::{
    db::Db,
    engine::{RandomSource, SeededRandom, ThreadRandom},
    names, AppState,
};

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// SQLite database URL, e.g. `sqlite://trivia.db`.
    #[clap(env)]
    database_url: String,

    /// The address to bind to.
    #[arg(short, long, env, default_value = names::DEFAULT_ADDRESS)]
    address: String,

    /// Do not write the default categories into an empty database.
    #[arg(long, env)]
    no_seed: bool,

    /// Seed for quiz draws, for reproducible sessions.
    #[arg(long, env)]
    quiz_seed: Option<u64>,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| names::DEFAULT_LOG_FILTER.to_owned());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .init();

    let args = Args::parse();

    let db = Db::new(&args.database_url).await?;
    if !args.no_seed {
        db.seed_categories().await?;
    }

    let random: Arc<dyn RandomSource> = match args.quiz_seed {
        Some(seed) => Arc::new(SeededRandom::new(seed)),
        None => Arc::new(ThreadRandom),
    };

    let state = AppState {
        store: Arc::new(db),
        random,
    };

    let address = args.address.parse::<std::net::SocketAddr>()?;
    let listener = tokio::net::TcpListener::bind(address).await?;
    tracing::info!("listening on {address}");

    axum::serve(listener, trivia_api::router(state)).await?;

    Ok(())
}
