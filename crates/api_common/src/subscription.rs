use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use startlabx_db_schema::{enums::PlanTier, source::subscription::Subscription};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Subscribe {
  pub tier: PlanTier,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SubscribeResponse {
  /// Where to redirect the user to pay. The subscription stays pending
  /// until the provider confirms.
  pub checkout_url: String,
  pub subscription: Subscription,
}

#[skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GetSubscriptionResponse {
  /// Effective tier, free when there is no active subscription.
  pub tier: PlanTier,
  pub subscription: Option<Subscription>,
}
