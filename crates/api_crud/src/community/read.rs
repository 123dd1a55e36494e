use actix_web::web::{Data, Json, Query};
use startlabx_api_common::{
  community::{CommunityResponse, GetCommunity},
  context::StartlabxContext,
};
use startlabx_db_schema::source::community::Community;
use startlabx_db_views::structs::{CommunityView, UserView};
use startlabx_utils::error::{StartlabxErrorType, StartlabxResult};

pub async fn get_community(
  data: Query<GetCommunity>,
  context: Data<StartlabxContext>,
  user_view: Option<UserView>,
) -> StartlabxResult<Json<CommunityResponse>> {
  let my_user_id = user_view.map(|v| v.user.id);
  let community_id = match (data.id, &data.name) {
    (Some(id), _) => id,
    (None, Some(name)) => {
      Community::find_by_name(&mut context.pool(), name)
        .await?
        .ok_or(StartlabxErrorType::NotFound)?
        .id
    }
    (None, None) => return Err(StartlabxErrorType::NotFound.into()),
  };
  let community_view = CommunityView::read(&mut context.pool(), community_id, my_user_id).await?;
  Ok(Json(CommunityResponse { community_view }))
}
