use actix_web::web::{Data, Json, Query};
use startlabx_api_common::{
  context::StartlabxContext,
  user::{ListUsers, ListUsersResponse},
  utils::is_admin,
};
use startlabx_db_schema::source::user::User;
use startlabx_db_views::structs::UserView;
use startlabx_utils::error::StartlabxResult;

#[tracing::instrument(skip_all)]
pub async fn admin_list_users(
  data: Query<ListUsers>,
  context: Data<StartlabxContext>,
  user_view: UserView,
) -> StartlabxResult<Json<ListUsersResponse>> {
  is_admin(&user_view)?;
  let users = User::list(&mut context.pool(), data.page, data.limit).await?;
  Ok(Json(ListUsersResponse { users }))
}
