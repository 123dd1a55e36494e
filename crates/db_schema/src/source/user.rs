use crate::{enums::UserRole, newtypes::UserId, schema::user_};
use chrono::{DateTime, Utc};
use diesel::{AsChangeset, Identifiable, Insertable, Queryable, Selectable};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[skip_serializing_none]
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Queryable, Selectable, Identifiable)]
#[diesel(table_name = user_)]
#[diesel(check_for_backend(diesel::pg::Pg))]
/// A registered user, either a founder looking for talent or talent looking
/// for a startup.
pub struct User {
  pub id: UserId,
  /// The unique handle.
  pub name: String,
  pub display_name: Option<String>,
  pub email: String,
  #[serde(skip)]
  pub password_encrypted: String,
  pub role: UserRole,
  pub bio: Option<String>,
  /// Free-form comma separated skill list, searched with a substring match.
  pub skills: Option<String>,
  pub avatar: Option<String>,
  /// Whether an admin marked this account as verified.
  pub verified: bool,
  pub published: DateTime<Utc>,
  pub updated: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = user_)]
pub struct UserInsertForm {
  pub name: String,
  pub email: String,
  pub password_encrypted: String,
  pub role: UserRole,
  pub display_name: Option<String>,
  pub bio: Option<String>,
  pub skills: Option<String>,
  pub avatar: Option<String>,
}

impl UserInsertForm {
  pub fn new(name: String, email: String, password_encrypted: String, role: UserRole) -> Self {
    UserInsertForm {
      name,
      email,
      password_encrypted,
      role,
      display_name: None,
      bio: None,
      skills: None,
      avatar: None,
    }
  }
}

#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = user_)]
pub struct UserUpdateForm {
  pub display_name: Option<Option<String>>,
  pub email: Option<String>,
  pub password_encrypted: Option<String>,
  pub role: Option<UserRole>,
  pub bio: Option<Option<String>>,
  pub skills: Option<Option<String>>,
  pub avatar: Option<Option<String>>,
  pub verified: Option<bool>,
  pub updated: Option<Option<DateTime<Utc>>>,
}
