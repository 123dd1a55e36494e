use actix_web::web::{Data, Json};
use startlabx_api_common::{context::StartlabxContext, post::DeletePost, SuccessResponse};
use startlabx_db_schema::{source::post::Post, traits::Crud};
use startlabx_db_views::structs::UserView;
use startlabx_utils::error::{StartlabxErrorType, StartlabxResult};

/// Author or admin only. A hard delete; likes, saves and comments go with
/// the row via foreign keys.
#[tracing::instrument(skip_all)]
pub async fn delete_post(
  data: Json<DeletePost>,
  context: Data<StartlabxContext>,
  user_view: UserView,
) -> StartlabxResult<Json<SuccessResponse>> {
  let post = Post::read(&mut context.pool(), data.post_id).await?;
  if post.creator_id != user_view.user.id && !user_view.is_admin() {
    return Err(StartlabxErrorType::NoPostEditAllowed.into());
  }
  Post::delete(&mut context.pool(), post.id).await?;
  Ok(Json(SuccessResponse::default()))
}
