use crate::{
  newtypes::UserId,
  schema::user_,
  source::user::{User, UserInsertForm, UserUpdateForm},
  traits::Crud,
  utils::{get_conn, limit_and_offset, DbPool},
};
use diesel::{
  dsl::insert_into,
  result::Error,
  BoolExpressionMethods,
  ExpressionMethods,
  OptionalExtension,
  QueryDsl,
};
use diesel_async::RunQueryDsl;

#[async_trait::async_trait]
impl Crud for User {
  type InsertForm = UserInsertForm;
  type UpdateForm = UserUpdateForm;
  type IdType = UserId;

  async fn create(pool: &mut DbPool<'_>, form: &Self::InsertForm) -> Result<Self, Error> {
    let conn = &mut get_conn(pool).await?;
    insert_into(user_::table)
      .values(form)
      .get_result::<Self>(conn)
      .await
  }

  async fn read(pool: &mut DbPool<'_>, user_id: UserId) -> Result<Self, Error> {
    let conn = &mut get_conn(pool).await?;
    user_::table.find(user_id).first::<Self>(conn).await
  }

  async fn update(
    pool: &mut DbPool<'_>,
    user_id: UserId,
    form: &Self::UpdateForm,
  ) -> Result<Self, Error> {
    let conn = &mut get_conn(pool).await?;
    diesel::update(user_::table.find(user_id))
      .set(form)
      .get_result::<Self>(conn)
      .await
  }
}

impl User {
  /// Emails are stored lowercased, callers lowercase before lookup.
  pub async fn find_by_email(pool: &mut DbPool<'_>, email: &str) -> Result<Option<Self>, Error> {
    let conn = &mut get_conn(pool).await?;
    user_::table
      .filter(user_::email.eq(email))
      .first::<Self>(conn)
      .await
      .optional()
  }

  pub async fn find_by_email_or_name(
    pool: &mut DbPool<'_>,
    name_or_email: &str,
  ) -> Result<Option<Self>, Error> {
    let conn = &mut get_conn(pool).await?;
    user_::table
      .filter(
        user_::name
          .eq(name_or_email)
          .or(user_::email.eq(name_or_email)),
      )
      .first::<Self>(conn)
      .await
      .optional()
  }

  pub async fn check_email_taken(pool: &mut DbPool<'_>, email: &str) -> Result<bool, Error> {
    Ok(Self::find_by_email(pool, email).await?.is_some())
  }

  pub async fn check_name_taken(pool: &mut DbPool<'_>, name: &str) -> Result<bool, Error> {
    let conn = &mut get_conn(pool).await?;
    Ok(
      user_::table
        .filter(user_::name.eq(name))
        .first::<Self>(conn)
        .await
        .optional()?
        .is_some(),
    )
  }

  pub async fn update_password(
    pool: &mut DbPool<'_>,
    user_id: UserId,
    new_password_encrypted: &str,
  ) -> Result<Self, Error> {
    let conn = &mut get_conn(pool).await?;
    diesel::update(user_::table.find(user_id))
      .set(user_::password_encrypted.eq(new_password_encrypted))
      .get_result::<Self>(conn)
      .await
  }

  /// Paged listing for the admin panel, newest first.
  pub async fn list(
    pool: &mut DbPool<'_>,
    page: Option<i64>,
    limit: Option<i64>,
  ) -> Result<Vec<Self>, Error> {
    let conn = &mut get_conn(pool).await?;
    let (limit, offset) = limit_and_offset(page, limit)?;
    user_::table
      .order_by(user_::published.desc())
      .limit(limit)
      .offset(offset)
      .load::<Self>(conn)
      .await
  }
}
