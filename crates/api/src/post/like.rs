use crate::toggle::{flip, Toggle};
use actix_web::web::{Data, Json};
use startlabx_api_common::{
  context::StartlabxContext,
  post::{LikePostResponse, ToggleLikePost},
  utils::notify,
};
use startlabx_db_schema::{
  enums::NotificationKind,
  source::{
    notification::NotificationInsertForm,
    post::{Post, PostLike, PostLikeForm},
  },
  traits::{Crud, Likeable},
};
use startlabx_db_views::structs::UserView;
use startlabx_utils::error::StartlabxResult;

/// Like toggle. Liking someone else's post notifies its author.
#[tracing::instrument(skip_all)]
pub async fn toggle_like_post(
  data: Json<ToggleLikePost>,
  context: Data<StartlabxContext>,
  user_view: UserView,
) -> StartlabxResult<Json<LikePostResponse>> {
  let post = Post::read(&mut context.pool(), data.post_id).await?;
  let user_id = user_view.user.id;

  let existing = PostLike::read(&mut context.pool(), post.id, user_id).await?;
  let action = flip(existing.is_some());
  match action {
    Toggle::Unset => {
      PostLike::remove(&mut context.pool(), user_id, post.id).await?;
    }
    Toggle::Set => {
      let form = PostLikeForm {
        post_id: post.id,
        user_id,
      };
      PostLike::like(&mut context.pool(), &form).await?;
      if post.creator_id != user_id {
        let form = NotificationInsertForm {
          recipient_id: post.creator_id,
          kind: NotificationKind::Like,
          content: format!("{} liked your post", user_view.user.name),
          link: Some(format!("/post/{}", post.id)),
        };
        notify(&context, form).await?;
      }
    }
  }

  let like_count = PostLike::count_for_post(&mut context.pool(), post.id).await?;
  Ok(Json(LikePostResponse {
    liked: action.state(),
    like_count,
  }))
}
