use actix_web::web::{Data, Json, Query};
use startlabx_api_common::{
  comment::{GetComments, GetCommentsResponse},
  context::StartlabxContext,
};
use startlabx_db_schema::source::comment::Comment;
use startlabx_utils::error::StartlabxResult;

pub async fn list_comments(
  data: Query<GetComments>,
  context: Data<StartlabxContext>,
) -> StartlabxResult<Json<GetCommentsResponse>> {
  let comments = Comment::list_for_post(&mut context.pool(), data.post_id).await?;
  Ok(Json(GetCommentsResponse { comments }))
}
