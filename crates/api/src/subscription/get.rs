use actix_web::web::{Data, Json};
use startlabx_api_common::{
  context::StartlabxContext,
  subscription::GetSubscriptionResponse,
  utils::current_tier,
};
use startlabx_db_schema::source::subscription::Subscription;
use startlabx_db_views::structs::UserView;
use startlabx_utils::error::StartlabxResult;

#[tracing::instrument(skip_all)]
pub async fn get_subscription(
  context: Data<StartlabxContext>,
  user_view: UserView,
) -> StartlabxResult<Json<GetSubscriptionResponse>> {
  let tier = current_tier(&context, &user_view.user).await?;
  let subscription = Subscription::read_for_user(&mut context.pool(), user_view.user.id).await?;
  Ok(Json(GetSubscriptionResponse { tier, subscription }))
}
