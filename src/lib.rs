pub mod api_routes_http;
pub mod scheduled_tasks;
pub mod session_middleware;

use crate::session_middleware::SessionMiddleware;
use actix_cors::Cors;
use actix_web::{middleware, web::Data, App, HttpServer};
use clap::Parser;
use reqwest::header::USER_AGENT;
use startlabx_api_common::context::StartlabxContext;
use startlabx_db_schema::utils::build_db_pool;
use startlabx_utils::{
  error::StartlabxResult,
  rate_limit::RateLimitCell,
  settings::SETTINGS,
  VERSION,
};
use tracing::info;
use tracing_actix_web::TracingLogger;

#[derive(Parser, Debug)]
#[command(
  version,
  about = "The StartLabX server",
  long_about = "The server process behind StartLabX, a platform connecting startup founders with talent."
)]
pub struct CmdArgs {
  /// Skip the background cleanup jobs. Useful when running several server
  /// processes against one database.
  #[arg(long, default_value_t = false)]
  pub disable_scheduled_tasks: bool,
}

/// Placing the main function in lib.rs allows other crates to embed the
/// server for testing.
pub async fn start_startlabx_server(args: CmdArgs) -> StartlabxResult<()> {
  let settings = SETTINGS.clone();

  let pool = build_db_pool(&settings).await?;

  let mut headers = reqwest::header::HeaderMap::new();
  headers.insert(
    USER_AGENT,
    reqwest::header::HeaderValue::from_str(&format!("StartLabX/{VERSION}"))?,
  );
  let client = reqwest::Client::builder()
    .default_headers(headers)
    .timeout(std::time::Duration::from_secs(10))
    .build()?;

  let rate_limit_cell = RateLimitCell::new(settings.rate_limit.clone());

  let context = StartlabxContext::create(pool, client, rate_limit_cell.clone());

  if !args.disable_scheduled_tasks {
    let scheduled_context = context.clone();
    let scheduled_rate_limit = rate_limit_cell.clone();
    tokio::task::spawn(async move {
      if let Err(e) = scheduled_tasks::setup(scheduled_context, scheduled_rate_limit).await {
        tracing::error!("Error running scheduled tasks: {e}");
      }
    });
  }

  info!(
    "Starting HTTP server at {}:{}",
    settings.bind, settings.port
  );

  let cors_origin = settings.cors_origin();
  let server_context = context.clone();
  HttpServer::new(move || {
    let cors_config = match &cors_origin {
      Some(origin) => Cors::default()
        .allowed_origin(origin)
        .allow_any_method()
        .allow_any_header()
        .max_age(3600),
      None => Cors::default()
        .allow_any_origin()
        .allow_any_method()
        .allow_any_header(),
    };

    App::new()
      .wrap(middleware::Compress::default())
      .wrap(cors_config)
      .wrap(TracingLogger::default())
      .app_data(Data::new(server_context.clone()))
      .wrap(SessionMiddleware::new(server_context.clone()))
      .configure(|cfg| api_routes_http::config(cfg, server_context.rate_limit_cell()))
  })
  .bind((settings.bind, settings.port))?
  .run()
  .await?;

  Ok(())
}
