use clap::Parser;
use startlabx_server::{start_startlabx_server, CmdArgs};
use startlabx_utils::error::StartlabxResult;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[tokio::main]
pub async fn main() -> StartlabxResult<()> {
  let filter = EnvFilter::builder()
    .with_default_directive(LevelFilter::INFO.into())
    .from_env_lossy();
  tracing_subscriber::fmt().with_env_filter(filter).init();

  let args = CmdArgs::parse();

  start_startlabx_server(args).await?;
  Ok(())
}
