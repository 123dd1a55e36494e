use crate::{
  newtypes::{PasswordResetRequestId, UserId},
  schema::password_reset_request,
  source::password_reset_request::{PasswordResetRequest, PasswordResetRequestForm},
  utils::{get_conn, reset_request_cutoff, DbPool},
};
use diesel::{dsl::insert_into, result::Error, ExpressionMethods, OptionalExtension, QueryDsl};
use diesel_async::RunQueryDsl;
use sha2::{Digest, Sha256};

impl PasswordResetRequest {
  pub async fn create(
    pool: &mut DbPool<'_>,
    user_id: UserId,
    token: &str,
  ) -> Result<Self, Error> {
    let form = PasswordResetRequestForm {
      user_id,
      token_encrypted: hash_token(token),
    };
    let conn = &mut get_conn(pool).await?;
    insert_into(password_reset_request::table)
      .values(form)
      .get_result::<Self>(conn)
      .await
  }

  /// Only finds requests that are unconsumed and younger than the cutoff.
  pub async fn read_from_token(
    pool: &mut DbPool<'_>,
    token: &str,
  ) -> Result<Option<Self>, Error> {
    let conn = &mut get_conn(pool).await?;
    password_reset_request::table
      .filter(password_reset_request::token_encrypted.eq(hash_token(token)))
      .filter(password_reset_request::consumed.eq(false))
      .filter(password_reset_request::published.gt(reset_request_cutoff()))
      .first::<Self>(conn)
      .await
      .optional()
  }

  /// Makes the token single-use.
  pub async fn consume(
    pool: &mut DbPool<'_>,
    id: PasswordResetRequestId,
  ) -> Result<Self, Error> {
    let conn = &mut get_conn(pool).await?;
    diesel::update(password_reset_request::table.find(id))
      .set(password_reset_request::consumed.eq(true))
      .get_result::<Self>(conn)
      .await
  }

  /// Scheduled cleanup of requests past their validity window.
  pub async fn delete_expired(pool: &mut DbPool<'_>) -> Result<usize, Error> {
    let conn = &mut get_conn(pool).await?;
    diesel::delete(
      password_reset_request::table
        .filter(password_reset_request::published.lt(reset_request_cutoff())),
    )
    .execute(conn)
    .await
  }
}

fn hash_token(token: &str) -> String {
  let mut hasher = Sha256::new();
  hasher.update(token);
  format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
  use super::hash_token;
  use pretty_assertions::assert_eq;

  #[test]
  fn test_hash_token_is_stable_hex() {
    let a = hash_token("super secret token");
    let b = hash_token("super secret token");
    assert_eq!(a, b);
    assert_eq!(64, a.len());
    assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
    assert_ne!(a, hash_token("another token"));
  }
}
