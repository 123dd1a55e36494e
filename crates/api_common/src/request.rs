use crate::context::StartlabxContext;
use serde::{Deserialize, Serialize};
use startlabx_db_schema::{
  enums::{AiFlowKind, PlanTier},
  source::{notification::Notification, user::User},
};
use startlabx_utils::{
  error::{StartlabxErrorExt, StartlabxErrorType, StartlabxResult},
  settings::SETTINGS,
};
use tracing::warn;

#[derive(Debug, Serialize)]
struct CheckoutSessionCreate<'a> {
  customer_email: &'a str,
  plan: PlanTier,
}

#[derive(Debug, Deserialize)]
pub struct CheckoutSession {
  pub id: String,
  pub customer_id: Option<String>,
  /// Where to send the user to complete payment.
  pub url: String,
}

/// Asks the billing provider for a checkout session. The provider owns the
/// payment flow, we only keep its session id and redirect url.
pub async fn create_checkout_session(
  context: &StartlabxContext,
  user: &User,
  tier: PlanTier,
) -> StartlabxResult<CheckoutSession> {
  let Some(billing) = SETTINGS.billing.clone() else {
    return Err(
      StartlabxErrorType::BillingProviderError("billing provider not configured".to_string())
        .into(),
    );
  };
  let url = billing
    .url
    .join("v1/checkout/sessions")
    .with_error_type(StartlabxErrorType::BillingProviderError(
      "invalid billing url".to_string(),
    ))?;
  let mut req = context.client().post(url).json(&CheckoutSessionCreate {
    customer_email: &user.email,
    plan: tier,
  });
  if let Some(key) = &billing.api_key {
    let key: &str = key.as_ref();
    req = req.bearer_auth(key);
  }
  let res = req
    .send()
    .await
    .with_error_type(StartlabxErrorType::BillingProviderError(
      "request failed".to_string(),
    ))?;
  if !res.status().is_success() {
    return Err(
      StartlabxErrorType::BillingProviderError(format!("provider returned {}", res.status()))
        .into(),
    );
  }
  res
    .json::<CheckoutSession>()
    .await
    .with_error_type(StartlabxErrorType::BillingProviderError(
      "malformed provider response".to_string(),
    ))
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
  model: &'a str,
  flow: AiFlowKind,
  prompt: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
  output: String,
}

/// One delegated call to the generation provider. The prompt is already
/// fully templated by the flow handler.
pub async fn ai_generate(
  context: &StartlabxContext,
  flow: AiFlowKind,
  prompt: &str,
) -> StartlabxResult<String> {
  let Some(ai) = SETTINGS.ai.clone() else {
    return Err(
      StartlabxErrorType::AiProviderError("ai provider not configured".to_string()).into(),
    );
  };
  let url = ai
    .url
    .join("v1/generate")
    .with_error_type(StartlabxErrorType::AiProviderError(
      "invalid ai url".to_string(),
    ))?;
  let mut req = context.client().post(url).json(&GenerateRequest {
    model: &ai.model,
    flow,
    prompt,
  });
  if let Some(key) = &ai.api_key {
    let key: &str = key.as_ref();
    req = req.bearer_auth(key);
  }
  let res = req
    .send()
    .await
    .with_error_type(StartlabxErrorType::AiProviderError(
      "request failed".to_string(),
    ))?;
  if !res.status().is_success() {
    return Err(
      StartlabxErrorType::AiProviderError(format!("provider returned {}", res.status())).into(),
    );
  }
  let body = res
    .json::<GenerateResponse>()
    .await
    .with_error_type(StartlabxErrorType::AiProviderError(
      "malformed provider response".to_string(),
    ))?;
  Ok(body.output)
}

/// Mirrors a stored notification to the realtime transport, fire and
/// forget. No delivery or ordering guarantee; failures are logged and
/// dropped.
pub fn emit_realtime_event(context: &StartlabxContext, notification: &Notification) {
  let Some(realtime) = SETTINGS.realtime.clone() else {
    return;
  };
  let client = context.client().clone();
  let notification = notification.clone();
  actix_web::rt::spawn(async move {
    let res = client.post(realtime.url).json(&notification).send().await;
    match res {
      Ok(res) if !res.status().is_success() => {
        warn!("Realtime emit rejected with {}", res.status());
      }
      Err(e) => warn!("Realtime emit failed: {e}"),
      _ => {}
    }
  });
}
