use crate::structs::UserView;
use actix_web::{dev::Payload, FromRequest, HttpMessage, HttpRequest};
use startlabx_db_schema::source::user::User;
use startlabx_utils::error::{StartlabxError, StartlabxErrorType};
use std::future::{ready, Ready};

impl UserView {
  pub fn new(user: User) -> Self {
    UserView { user }
  }

  pub fn is_admin(&self) -> bool {
    self.user.role == startlabx_db_schema::enums::UserRole::Admin
  }

  pub fn is_founder(&self) -> bool {
    self.user.role == startlabx_db_schema::enums::UserRole::Founder
  }
}

impl FromRequest for UserView {
  type Error = StartlabxError;
  type Future = Ready<Result<Self, Self::Error>>;

  fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
    ready(match req.extensions().get::<UserView>() {
      Some(view) => Ok(view.clone()),
      None => Err(StartlabxErrorType::NotLoggedIn.into()),
    })
  }
}
