use actix_web::web::{Data, Json, Query};
use startlabx_api_common::{
  community::{ListCommunities, ListCommunitiesResponse},
  context::StartlabxContext,
};
use startlabx_db_views::structs::{CommunityView, UserView};
use startlabx_utils::error::StartlabxResult;

pub async fn list_communities(
  data: Query<ListCommunities>,
  context: Data<StartlabxContext>,
  user_view: Option<UserView>,
) -> StartlabxResult<Json<ListCommunitiesResponse>> {
  let my_user_id = user_view.map(|v| v.user.id);
  let communities =
    CommunityView::list(&mut context.pool(), my_user_id, data.page, data.limit).await?;
  Ok(Json(ListCommunitiesResponse { communities }))
}
