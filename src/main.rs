use anyhow::Result;
use csvpipe::demo::{self, report_line};
use std::{env, path::PathBuf};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_CSV_PATH: &str = "data/example.csv";

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    info!("startup");

    // ─── 2) resolve input: argv[1], then $CSV_PATH, then the sample ──
    let path = env::args()
        .nth(1)
        .or_else(|| env::var("CSV_PATH").ok())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CSV_PATH));
    info!(path = %path.display(), "reading scores");

    // ─── 3) currying needs no input ──────────────────────────────────
    let calls = demo::currying_calls(2);
    println!("{}", report_line("basicCall", calls.basic_call)?);
    println!("{}", report_line("chainCall", calls.chain_call)?);

    // ─── 4) monad: failures come back as values ──────────────────────
    let average = demo::run_monad(&path).await;
    println!("{}", demo::monad_report_line(&average)?);

    // ─── 5) chain + composition: I/O failures end the run ────────────
    let chain_average = demo::run_chain(&path).await?;
    println!("{}", report_line("chainAverageScore", chain_average)?);

    let composition_average = demo::run_composition(&path).await?;
    println!(
        "{}",
        report_line("compositionAverageScore", composition_average)?
    );

    info!("done");
    Ok(())
}
