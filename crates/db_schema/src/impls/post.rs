use crate::{
  newtypes::{PostId, UserId},
  schema::{post, post_like, post_saved},
  source::post::{Post, PostInsertForm, PostLike, PostLikeForm, PostSaved, PostSavedForm, PostUpdateForm},
  traits::{Crud, Likeable, Saveable},
  utils::{get_conn, DbPool},
};
use diesel::{dsl::insert_into, result::Error, ExpressionMethods, OptionalExtension, QueryDsl};
use diesel_async::RunQueryDsl;

#[async_trait::async_trait]
impl Crud for Post {
  type InsertForm = PostInsertForm;
  type UpdateForm = PostUpdateForm;
  type IdType = PostId;

  async fn create(pool: &mut DbPool<'_>, form: &Self::InsertForm) -> Result<Self, Error> {
    let conn = &mut get_conn(pool).await?;
    insert_into(post::table)
      .values(form)
      .get_result::<Self>(conn)
      .await
  }

  async fn read(pool: &mut DbPool<'_>, post_id: PostId) -> Result<Self, Error> {
    let conn = &mut get_conn(pool).await?;
    post::table.find(post_id).first::<Self>(conn).await
  }

  async fn update(
    pool: &mut DbPool<'_>,
    post_id: PostId,
    form: &Self::UpdateForm,
  ) -> Result<Self, Error> {
    let conn = &mut get_conn(pool).await?;
    diesel::update(post::table.find(post_id))
      .set(form)
      .get_result::<Self>(conn)
      .await
  }

  async fn delete(pool: &mut DbPool<'_>, post_id: PostId) -> Result<usize, Error> {
    let conn = &mut get_conn(pool).await?;
    diesel::delete(post::table.find(post_id))
      .execute(conn)
      .await
  }
}

#[async_trait::async_trait]
impl Likeable for PostLike {
  type Form = PostLikeForm;
  type IdType = PostId;

  async fn like(pool: &mut DbPool<'_>, form: &Self::Form) -> Result<Self, Error> {
    let conn = &mut get_conn(pool).await?;
    insert_into(post_like::table)
      .values(form)
      .get_result::<Self>(conn)
      .await
  }

  async fn remove(
    pool: &mut DbPool<'_>,
    user_id: UserId,
    post_id: PostId,
  ) -> Result<usize, Error> {
    let conn = &mut get_conn(pool).await?;
    diesel::delete(
      post_like::table
        .filter(post_like::post_id.eq(post_id))
        .filter(post_like::user_id.eq(user_id)),
    )
    .execute(conn)
    .await
  }
}

impl PostLike {
  pub async fn count_for_post(pool: &mut DbPool<'_>, post_id: PostId) -> Result<i64, Error> {
    let conn = &mut get_conn(pool).await?;
    post_like::table
      .filter(post_like::post_id.eq(post_id))
      .count()
      .get_result::<i64>(conn)
      .await
  }

  /// The toggle endpoints look the row up first to decide direction.
  pub async fn read(
    pool: &mut DbPool<'_>,
    post_id: PostId,
    user_id: UserId,
  ) -> Result<Option<Self>, Error> {
    let conn = &mut get_conn(pool).await?;
    post_like::table
      .filter(post_like::post_id.eq(post_id))
      .filter(post_like::user_id.eq(user_id))
      .first::<Self>(conn)
      .await
      .optional()
  }
}

#[async_trait::async_trait]
impl Saveable for PostSaved {
  type Form = PostSavedForm;

  async fn save(pool: &mut DbPool<'_>, form: &Self::Form) -> Result<Self, Error> {
    let conn = &mut get_conn(pool).await?;
    insert_into(post_saved::table)
      .values(form)
      .get_result::<Self>(conn)
      .await
  }

  async fn unsave(pool: &mut DbPool<'_>, form: &Self::Form) -> Result<usize, Error> {
    let conn = &mut get_conn(pool).await?;
    diesel::delete(
      post_saved::table
        .filter(post_saved::post_id.eq(form.post_id))
        .filter(post_saved::user_id.eq(form.user_id)),
    )
    .execute(conn)
    .await
  }
}

impl PostSaved {
  pub async fn read(
    pool: &mut DbPool<'_>,
    post_id: PostId,
    user_id: UserId,
  ) -> Result<Option<Self>, Error> {
    let conn = &mut get_conn(pool).await?;
    post_saved::table
      .filter(post_saved::post_id.eq(post_id))
      .filter(post_saved::user_id.eq(user_id))
      .first::<Self>(conn)
      .await
      .optional()
  }
}
