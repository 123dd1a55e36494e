use startlabx_utils::error::{StartlabxErrorExt, StartlabxErrorType, StartlabxResult};

pub mod admin;
pub mod ai;
pub mod community;
pub mod notification;
pub mod post;
pub mod subscription;
pub mod talent;
pub(crate) mod toggle;
pub mod user;

/// Wrapper so handlers don't touch bcrypt directly.
pub(crate) fn verify_password(password: &str, password_encrypted: &str) -> bool {
  bcrypt::verify(password, password_encrypted).unwrap_or(false)
}

pub(crate) fn hash_password(password: &str) -> StartlabxResult<String> {
  bcrypt::hash(password, bcrypt::DEFAULT_COST)
    .with_error_type(StartlabxErrorType::CouldntUpdateUser)
}
