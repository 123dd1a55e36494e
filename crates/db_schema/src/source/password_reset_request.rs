use crate::{
  newtypes::{PasswordResetRequestId, UserId},
  schema::password_reset_request,
};
use chrono::{DateTime, Utc};
use diesel::{Identifiable, Insertable, Queryable, Selectable};

#[derive(Clone, PartialEq, Debug, Queryable, Selectable, Identifiable)]
#[diesel(table_name = password_reset_request)]
#[diesel(check_for_backend(diesel::pg::Pg))]
/// Only the sha256 of the reset token is stored, never the token itself.
/// A request is valid for 24 hours and `consumed` makes it single-use.
pub struct PasswordResetRequest {
  pub id: PasswordResetRequestId,
  pub user_id: UserId,
  pub token_encrypted: String,
  pub consumed: bool,
  pub published: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = password_reset_request)]
pub struct PasswordResetRequestForm {
  pub user_id: UserId,
  pub token_encrypted: String,
}
