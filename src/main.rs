use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::WrapErr;
use walletwise::{content::QuizContent, AppState};

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// The address to bind to.
    #[arg(short, long, env, default_value = "127.0.0.1:1414")]
    address: String,

    /// Quiz content as a JSON array of questions. Uses the bundled quiz when omitted.
    #[arg(short, long, env)]
    content: Option<PathBuf>,

    /// Split long 0x-prefixed hex strings in feedback text into 60 character lines.
    #[arg(long, env)]
    break_long_hex: bool,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "walletwise=debug,axum=info".to_owned());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .init();

    let args = Args::parse();

    let content = match &args.content {
        Some(path) => QuizContent::load(path)?,
        None => QuizContent::builtin()?,
    };
    tracing::info!("serving {} questions", content.len());

    let state = AppState::new(content).with_hex_breaking(args.break_long_hex);
    let app = walletwise::router(state);

    let address = args.address.parse::<std::net::SocketAddr>()?;
    let listener = tokio::net::TcpListener::bind(address)
        .await
        .wrap_err_with(|| format!("could not bind {address}"))?;
    tracing::info!("listening on http://{address}");
    axum::serve(listener, app).await?;

    Ok(())
}
