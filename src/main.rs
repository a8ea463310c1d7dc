use anyhow::Context;
use scalawag::{comment_stream, telemetry, Config, Orchestrator, StdoutSink};
use tokio::io::BufReader;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let config = Config::load().context("loading configuration")?;
    telemetry::init(&config.log_filter).context("installing tracing subscriber")?;

    let engine = config.build_engine()?;
    info!(
        delay_seconds = config.delay_seconds,
        patterns = engine.registry().len(),
        bot_identity = %config.bot_identity,
        "Starting scalawag"
    );

    let source = comment_stream(BufReader::new(tokio::io::stdin()));
    let orchestrator = Orchestrator::new(engine, StdoutSink, &config);
    let summary = orchestrator.run(source).await?;

    info!(?summary, "Comment stream ended");
    Ok(())
}
