use actix_web::web::{Data, Json};
use startlabx_api_common::{
  community::{CommunityResponse, CreateCommunity},
  context::StartlabxContext,
};
use startlabx_db_schema::{
  enums::CommunityRole,
  source::community::{Community, CommunityInsertForm, CommunityMember, CommunityMemberForm},
  traits::{Crud, Joinable},
};
use startlabx_db_views::structs::{CommunityView, UserView};
use startlabx_utils::{
  error::{StartlabxErrorType, StartlabxResult},
  utils::validation::{is_valid_actor_name, is_valid_title},
};

/// Creates the community and its owner membership row in one go.
#[tracing::instrument(skip_all)]
pub async fn create_community(
  data: Json<CreateCommunity>,
  context: Data<StartlabxContext>,
  user_view: UserView,
) -> StartlabxResult<Json<CommunityResponse>> {
  is_valid_actor_name(&data.name)?;
  is_valid_title(&data.title)?;

  if Community::find_by_name(&mut context.pool(), &data.name)
    .await?
    .is_some()
  {
    return Err(StartlabxErrorType::CommunityAlreadyExists.into());
  }

  let form = CommunityInsertForm {
    name: data.name.clone(),
    title: data.title.clone(),
    description: data.description.clone(),
    creator_id: user_view.user.id,
  };
  let community = Community::create(&mut context.pool(), &form).await?;

  let member_form = CommunityMemberForm {
    community_id: community.id,
    user_id: user_view.user.id,
    role: CommunityRole::Owner,
  };
  CommunityMember::join(&mut context.pool(), &member_form).await?;

  let community_view =
    CommunityView::read(&mut context.pool(), community.id, Some(user_view.user.id)).await?;
  Ok(Json(CommunityResponse { community_view }))
}
