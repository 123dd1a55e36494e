use actix_web::web::{Data, Json};
use startlabx_api_common::{
  context::StartlabxContext,
  post::{CreatePost, PostResponse},
};
use startlabx_db_schema::{
  source::{
    post::{Post, PostInsertForm},
    startup::Startup,
  },
  traits::Crud,
};
use startlabx_db_views::structs::{PostView, UserView};
use startlabx_utils::{
  error::{StartlabxErrorType, StartlabxResult},
  utils::validation::is_valid_body_field,
};

#[tracing::instrument(skip_all)]
pub async fn create_post(
  data: Json<CreatePost>,
  context: Data<StartlabxContext>,
  user_view: UserView,
) -> StartlabxResult<Json<PostResponse>> {
  is_valid_body_field(&data.content, true)?;

  // A post can only be attached to a startup the caller owns.
  if let Some(startup_id) = data.startup_id {
    let startup = Startup::read(&mut context.pool(), startup_id).await?;
    if startup.owner_id != user_view.user.id {
      return Err(StartlabxErrorType::NoStartupEditAllowed.into());
    }
  }

  let form = PostInsertForm {
    creator_id: user_view.user.id,
    startup_id: data.startup_id,
    content: data.content.clone(),
  };
  let post = Post::create(&mut context.pool(), &form).await?;
  let post_view = PostView::read(&mut context.pool(), post.id, Some(user_view.user.id)).await?;
  Ok(Json(PostResponse { post_view }))
}
