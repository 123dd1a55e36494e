use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use startlabx_db_schema::{enums::UserRole, newtypes::UserId, source::user::User};
use startlabx_utils::sensitive::SensitiveString;

#[derive(Debug, Serialize, Deserialize, Clone)]
/// Register a new account.
pub struct Register {
  pub username: String,
  pub email: SensitiveString,
  pub password: SensitiveString,
  pub password_verify: SensitiveString,
  /// Founder or talent. Admins are only ever promoted by other admins.
  pub role: UserRole,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Login {
  pub username_or_email: SensitiveString,
  pub password: SensitiveString,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LoginResponse {
  /// A signed bearer token, valid for seven days.
  pub jwt: SensitiveString,
  pub user: User,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
/// Always answered with a plain 200 so the endpoint can't be used to probe
/// which emails exist.
pub struct PasswordReset {
  pub email: SensitiveString,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PasswordChangeAfterReset {
  /// The raw token from the reset message, single use.
  pub token: SensitiveString,
  pub password: SensitiveString,
  pub password_verify: SensitiveString,
}

#[skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
/// Profile fields a user can change about themselves.
pub struct SaveUserSettings {
  pub display_name: Option<String>,
  pub bio: Option<String>,
  pub skills: Option<String>,
  pub avatar: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct UserResponse {
  pub user: User,
}

#[skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct ListUsers {
  pub page: Option<i64>,
  pub limit: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ListUsersResponse {
  pub users: Vec<User>,
}

#[skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone)]
/// Admin-only change to another account.
pub struct AdminUpdateUser {
  pub user_id: UserId,
  pub role: Option<UserRole>,
  pub verified: Option<bool>,
}

#[skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct GetTalent {
  /// Substring match against the skills field.
  pub skill: Option<String>,
  pub page: Option<i64>,
  pub limit: Option<i64>,
}
