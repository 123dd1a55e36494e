use actix_web::web::{Data, Json, Query};
use startlabx_api_common::{
  context::StartlabxContext,
  user::{GetTalent, ListUsersResponse},
};
use startlabx_db_views::{structs::UserView, talent_view::TalentQuery};
use startlabx_utils::error::StartlabxResult;

/// Browse talent profiles. Requires login but no particular role.
#[tracing::instrument(skip_all)]
pub async fn list_talent(
  data: Query<GetTalent>,
  context: Data<StartlabxContext>,
  _user_view: UserView,
) -> StartlabxResult<Json<ListUsersResponse>> {
  let users = TalentQuery {
    skill: data.skill.clone(),
    page: data.page,
    limit: data.limit,
  }
  .list(&mut context.pool())
  .await?;
  Ok(Json(ListUsersResponse { users }))
}
