/*
[INPUT]:  CLI arguments and the remote task service
[OUTPUT]: Interactive task manager session
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags or startup flow
*/

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use taskflow_client::TaskflowClient;
use taskflow_sync::{TaskController, cli};

#[derive(Parser, Debug)]
#[command(name = "taskflow", version, about = "TaskFlow task management client")]
struct Cli {
    #[arg(long = "base-url", value_name = "URL", default_value = "http://localhost:5000")]
    base_url: String,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "warn")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(&args.log_level)?;

    info!(base_url = %args.base_url, "starting taskflow");

    let client = TaskflowClient::with_base_url(&args.base_url)
        .context("build task service client")?;
    let mut controller = TaskController::new(client);

    controller.refresh().await;
    cli::interactive::run_interactive(&mut controller).await?;

    info!("taskflow session ended");
    Ok(())
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}
