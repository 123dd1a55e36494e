use clokwerk::{AsyncScheduler, TimeUnits as CTimeUnits};
use startlabx_api_common::context::StartlabxContext;
use startlabx_db_schema::source::{
  password_reset_request::PasswordResetRequest,
  subscription::Subscription,
};
use startlabx_utils::{error::StartlabxError, rate_limit::RateLimitCell};
use std::time::Duration;
use tracing::{error, info};

/// Schedules the background cleanup jobs.
pub async fn setup(
  context: StartlabxContext,
  rate_limit_cell: RateLimitCell,
) -> Result<(), StartlabxError> {
  let mut scheduler = AsyncScheduler::new();

  let context_1 = context.clone();
  // Drop stale reset tokens every hour
  scheduler.every(CTimeUnits::hour(1)).run(move || {
    let context = context_1.clone();

    async move {
      delete_expired_reset_tokens(&context).await;
    }
  });

  let context_1 = context.clone();
  // Cancel lapsed subscriptions once a day
  scheduler.every(CTimeUnits::days(1)).run(move || {
    let context = context_1.clone();

    async move {
      cancel_expired_subscriptions(&context).await;
    }
  });

  // Drop rate limit buckets that haven't been touched in an hour
  scheduler.every(CTimeUnits::hour(1)).run(move || {
    let rate_limit_cell = rate_limit_cell.clone();

    async move {
      rate_limit_cell.remove_older_than(Duration::from_secs(3600));
    }
  });

  // Manually run the scheduler forever
  loop {
    scheduler.run_pending().await;
    tokio::time::sleep(Duration::from_millis(1000)).await;
  }
}

async fn delete_expired_reset_tokens(context: &StartlabxContext) {
  info!("Deleting expired password reset tokens...");
  match PasswordResetRequest::delete_expired(&mut context.pool()).await {
    Ok(count) => info!("Done. {count} deleted."),
    Err(e) => error!("Failed to delete expired password reset tokens: {e}"),
  }
}

async fn cancel_expired_subscriptions(context: &StartlabxContext) {
  info!("Canceling expired subscriptions...");
  match Subscription::cancel_expired(&mut context.pool()).await {
    Ok(count) => info!("Done. {count} canceled."),
    Err(e) => error!("Failed to cancel expired subscriptions: {e}"),
  }
}
