use crate::{
  enums::{PlanTier, SubscriptionStatus},
  newtypes::{SubscriptionId, UserId},
  schema::subscription,
};
use chrono::{DateTime, Utc};
use diesel::{AsChangeset, Identifiable, Insertable, Queryable, Selectable};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[skip_serializing_none]
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Queryable, Selectable, Identifiable)]
#[diesel(table_name = subscription)]
#[diesel(check_for_backend(diesel::pg::Pg))]
/// A user's paid plan. At most one row per user, upserted on plan changes.
pub struct Subscription {
  pub id: SubscriptionId,
  pub user_id: UserId,
  pub tier: PlanTier,
  pub status: SubscriptionStatus,
  /// Checkout session id handed back by the billing provider.
  pub external_session_id: Option<String>,
  pub external_customer_id: Option<String>,
  pub current_period_end: Option<DateTime<Utc>>,
  pub published: DateTime<Utc>,
  pub updated: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = subscription)]
pub struct SubscriptionInsertForm {
  pub user_id: UserId,
  pub tier: PlanTier,
  pub status: SubscriptionStatus,
  pub external_session_id: Option<String>,
  pub external_customer_id: Option<String>,
  pub current_period_end: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = subscription)]
pub struct SubscriptionUpdateForm {
  pub tier: Option<PlanTier>,
  pub status: Option<SubscriptionStatus>,
  pub external_session_id: Option<Option<String>>,
  pub external_customer_id: Option<Option<String>>,
  pub current_period_end: Option<Option<DateTime<Utc>>>,
  pub updated: Option<Option<DateTime<Utc>>>,
}
