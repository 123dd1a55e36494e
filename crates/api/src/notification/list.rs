use actix_web::web::{Data, Json, Query};
use startlabx_api_common::{
  context::StartlabxContext,
  notification::{ListNotifications, ListNotificationsResponse},
};
use startlabx_db_schema::source::notification::Notification;
use startlabx_db_views::structs::UserView;
use startlabx_utils::error::StartlabxResult;

#[tracing::instrument(skip_all)]
pub async fn list_notifications(
  data: Query<ListNotifications>,
  context: Data<StartlabxContext>,
  user_view: UserView,
) -> StartlabxResult<Json<ListNotificationsResponse>> {
  let notifications = Notification::list_for_user(
    &mut context.pool(),
    user_view.user.id,
    data.unread_only.unwrap_or(false),
    data.page,
    data.limit,
  )
  .await?;
  Ok(Json(ListNotificationsResponse { notifications }))
}
