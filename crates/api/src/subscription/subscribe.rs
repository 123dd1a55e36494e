use actix_web::web::{Data, Json};
use startlabx_api_common::{
  context::StartlabxContext,
  request::create_checkout_session,
  subscription::{Subscribe, SubscribeResponse},
};
use startlabx_db_schema::{
  enums::{PlanTier, SubscriptionStatus},
  source::subscription::{Subscription, SubscriptionInsertForm},
};
use startlabx_db_views::structs::UserView;
use startlabx_utils::error::{StartlabxErrorType, StartlabxResult};

/// Creates a checkout session with the billing provider and stores a
/// pending subscription. Activation happens out of band once the provider
/// confirms payment.
#[tracing::instrument(skip_all)]
pub async fn subscribe(
  data: Json<Subscribe>,
  context: Data<StartlabxContext>,
  user_view: UserView,
) -> StartlabxResult<Json<SubscribeResponse>> {
  if data.tier == PlanTier::Free {
    return Err(StartlabxErrorType::InvalidPlanTier.into());
  }

  let session = create_checkout_session(&context, &user_view.user, data.tier).await?;
  let form = SubscriptionInsertForm {
    user_id: user_view.user.id,
    tier: data.tier,
    status: SubscriptionStatus::Pending,
    external_session_id: Some(session.id),
    external_customer_id: session.customer_id,
    current_period_end: None,
  };
  let subscription = Subscription::upsert(&mut context.pool(), &form).await?;

  Ok(Json(SubscribeResponse {
    checkout_url: session.url,
    subscription,
  }))
}
