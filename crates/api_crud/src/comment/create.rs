use actix_web::web::{Data, Json};
use startlabx_api_common::{
  comment::{CommentResponse, CreateComment},
  context::StartlabxContext,
  utils::notify,
};
use startlabx_db_schema::{
  enums::NotificationKind,
  source::{
    comment::{Comment, CommentInsertForm},
    notification::NotificationInsertForm,
    post::Post,
  },
  traits::Crud,
};
use startlabx_db_views::structs::UserView;
use startlabx_utils::{
  error::StartlabxResult,
  utils::validation::is_valid_body_field,
};

#[tracing::instrument(skip_all)]
pub async fn create_comment(
  data: Json<CreateComment>,
  context: Data<StartlabxContext>,
  user_view: UserView,
) -> StartlabxResult<Json<CommentResponse>> {
  is_valid_body_field(&data.content, false)?;
  let post = Post::read(&mut context.pool(), data.post_id).await?;

  let form = CommentInsertForm {
    creator_id: user_view.user.id,
    post_id: post.id,
    content: data.content.clone(),
  };
  let comment = Comment::create(&mut context.pool(), &form).await?;

  if post.creator_id != user_view.user.id {
    let form = NotificationInsertForm {
      recipient_id: post.creator_id,
      kind: NotificationKind::Comment,
      content: format!("{} commented on your post", user_view.user.name),
      link: Some(format!("/post/{}", post.id)),
    };
    notify(&context, form).await?;
  }

  Ok(Json(CommentResponse { comment }))
}
