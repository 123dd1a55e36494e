use crate::toggle::{flip_membership, Toggle};
use actix_web::web::{Data, Json};
use startlabx_api_common::{
  community::{JoinCommunityResponse, ToggleJoinCommunity},
  context::StartlabxContext,
};
use startlabx_db_schema::{
  enums::CommunityRole,
  source::community::{Community, CommunityMember, CommunityMemberForm},
  traits::{Crud, Joinable},
};
use startlabx_db_views::structs::UserView;
use startlabx_utils::error::StartlabxResult;

/// Membership toggle. The request carries only the community id; the server
/// looks at the current state and flips it.
#[tracing::instrument(skip_all)]
pub async fn toggle_join_community(
  data: Json<ToggleJoinCommunity>,
  context: Data<StartlabxContext>,
  user_view: UserView,
) -> StartlabxResult<Json<JoinCommunityResponse>> {
  let community_id = data.community_id;
  // 404 before any membership logic.
  Community::read(&mut context.pool(), community_id).await?;

  let existing =
    CommunityMember::read_for_user(&mut context.pool(), community_id, user_view.user.id).await?;

  let action = flip_membership(existing.map(|member| member.role))?;
  let form = CommunityMemberForm {
    community_id,
    user_id: user_view.user.id,
    role: CommunityRole::Member,
  };
  match action {
    Toggle::Set => {
      CommunityMember::join(&mut context.pool(), &form).await?;
    }
    Toggle::Unset => {
      CommunityMember::leave(&mut context.pool(), &form).await?;
    }
  }

  let member_count = CommunityMember::member_count(&mut context.pool(), community_id).await?;
  Ok(Json(JoinCommunityResponse {
    joined: action.state(),
    member_count,
  }))
}
