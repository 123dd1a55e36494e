use crate::{
  newtypes::{CommentId, PostId},
  schema::comment,
  source::comment::{Comment, CommentInsertForm, CommentUpdateForm},
  traits::Crud,
  utils::{get_conn, DbPool},
};
use diesel::{dsl::insert_into, result::Error, ExpressionMethods, QueryDsl};
use diesel_async::RunQueryDsl;

#[async_trait::async_trait]
impl Crud for Comment {
  type InsertForm = CommentInsertForm;
  type UpdateForm = CommentUpdateForm;
  type IdType = CommentId;

  async fn create(pool: &mut DbPool<'_>, form: &Self::InsertForm) -> Result<Self, Error> {
    let conn = &mut get_conn(pool).await?;
    insert_into(comment::table)
      .values(form)
      .get_result::<Self>(conn)
      .await
  }

  async fn read(pool: &mut DbPool<'_>, comment_id: CommentId) -> Result<Self, Error> {
    let conn = &mut get_conn(pool).await?;
    comment::table.find(comment_id).first::<Self>(conn).await
  }

  async fn update(
    pool: &mut DbPool<'_>,
    comment_id: CommentId,
    form: &Self::UpdateForm,
  ) -> Result<Self, Error> {
    let conn = &mut get_conn(pool).await?;
    diesel::update(comment::table.find(comment_id))
      .set(form)
      .get_result::<Self>(conn)
      .await
  }

  async fn delete(pool: &mut DbPool<'_>, comment_id: CommentId) -> Result<usize, Error> {
    let conn = &mut get_conn(pool).await?;
    diesel::delete(comment::table.find(comment_id))
      .execute(conn)
      .await
  }
}

impl Comment {
  /// Oldest first, the way a thread reads.
  pub async fn list_for_post(pool: &mut DbPool<'_>, post_id: PostId) -> Result<Vec<Self>, Error> {
    let conn = &mut get_conn(pool).await?;
    comment::table
      .filter(comment::post_id.eq(post_id))
      .order_by(comment::published.asc())
      .load::<Self>(conn)
      .await
  }

  pub async fn count_for_post(pool: &mut DbPool<'_>, post_id: PostId) -> Result<i64, Error> {
    let conn = &mut get_conn(pool).await?;
    comment::table
      .filter(comment::post_id.eq(post_id))
      .count()
      .get_result::<i64>(conn)
      .await
  }
}
