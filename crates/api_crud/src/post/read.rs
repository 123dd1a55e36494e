use actix_web::web::{Data, Json, Query};
use startlabx_api_common::{
  context::StartlabxContext,
  post::{GetPost, GetPosts, GetPostsResponse, PostResponse},
};
use startlabx_db_views::structs::{PostView, UserView};
use startlabx_utils::error::StartlabxResult;

/// Single post. Works logged out; the per-user flags are false then.
pub async fn get_post(
  data: Query<GetPost>,
  context: Data<StartlabxContext>,
  user_view: Option<UserView>,
) -> StartlabxResult<Json<PostResponse>> {
  let my_user_id = user_view.map(|v| v.user.id);
  let post_view = PostView::read(&mut context.pool(), data.id, my_user_id).await?;
  Ok(Json(PostResponse { post_view }))
}

pub async fn list_posts(
  data: Query<GetPosts>,
  context: Data<StartlabxContext>,
  user_view: Option<UserView>,
) -> StartlabxResult<Json<GetPostsResponse>> {
  let my_user_id = user_view.map(|v| v.user.id);
  let posts = PostView::list(
    &mut context.pool(),
    my_user_id,
    data.creator_id,
    data.page,
    data.limit,
  )
  .await?;
  Ok(Json(GetPostsResponse { posts }))
}
