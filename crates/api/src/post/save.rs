use crate::toggle::{flip, Toggle};
use actix_web::web::{Data, Json};
use startlabx_api_common::{
  context::StartlabxContext,
  post::{SavePostResponse, ToggleSavePost},
};
use startlabx_db_schema::{
  source::post::{Post, PostSaved, PostSavedForm},
  traits::{Crud, Saveable},
};
use startlabx_db_views::structs::UserView;
use startlabx_utils::error::StartlabxResult;

/// Save-for-later toggle.
#[tracing::instrument(skip_all)]
pub async fn toggle_save_post(
  data: Json<ToggleSavePost>,
  context: Data<StartlabxContext>,
  user_view: UserView,
) -> StartlabxResult<Json<SavePostResponse>> {
  let post = Post::read(&mut context.pool(), data.post_id).await?;
  let form = PostSavedForm {
    post_id: post.id,
    user_id: user_view.user.id,
  };

  let existing = PostSaved::read(&mut context.pool(), post.id, user_view.user.id).await?;
  let action = flip(existing.is_some());
  match action {
    Toggle::Unset => {
      PostSaved::unsave(&mut context.pool(), &form).await?;
    }
    Toggle::Set => {
      PostSaved::save(&mut context.pool(), &form).await?;
    }
  }

  Ok(Json(SavePostResponse {
    saved: action.state(),
  }))
}
