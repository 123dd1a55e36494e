use actix_web::{
  body::MessageBody,
  dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
  http::header::{HeaderValue, AUTHORIZATION, CACHE_CONTROL},
  Error,
  HttpMessage,
};
use core::future::Ready;
use futures_util::future::LocalBoxFuture;
use startlabx_api_common::{claims::Claims, context::StartlabxContext};
use startlabx_db_schema::{source::user::User, traits::Crud};
use startlabx_db_views::structs::UserView;
use startlabx_utils::{error::StartlabxError, settings::SETTINGS};
use std::{future::ready, rc::Rc};

/// Decodes the bearer token and puts the caller's `UserView` into request
/// extensions, where the extractor picks it up. An invalid or expired token
/// is treated the same as no token; protected routes answer 401 through the
/// extractor.
#[derive(Clone)]
pub struct SessionMiddleware {
  context: StartlabxContext,
}

impl SessionMiddleware {
  pub fn new(context: StartlabxContext) -> Self {
    SessionMiddleware { context }
  }
}

impl<S, B> Transform<S, ServiceRequest> for SessionMiddleware
where
  S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
  S::Future: 'static,
  B: MessageBody + 'static,
{
  type Response = ServiceResponse<B>;
  type Error = Error;
  type Transform = SessionService<S>;
  type InitError = ();
  type Future = Ready<Result<Self::Transform, Self::InitError>>;

  fn new_transform(&self, service: S) -> Self::Future {
    ready(Ok(SessionService {
      service: Rc::new(service),
      context: self.context.clone(),
    }))
  }
}

pub struct SessionService<S> {
  service: Rc<S>,
  context: StartlabxContext,
}

impl<S, B> Service<ServiceRequest> for SessionService<S>
where
  S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
  S::Future: 'static,
  B: 'static,
{
  type Response = ServiceResponse<B>;
  type Error = Error;
  type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

  forward_ready!(service);

  fn call(&self, req: ServiceRequest) -> Self::Future {
    let svc = self.service.clone();
    let context = self.context.clone();

    Box::pin(async move {
      let jwt = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(ToString::to_string);

      if let Some(jwt) = &jwt {
        // Ignore any invalid auth so public routes keep working; protected
        // routes get their 401 from the UserView extractor.
        if let Ok(user_view) = user_view_from_jwt(jwt, &context).await {
          req.extensions_mut().insert(user_view);
        }
      }

      let mut res = svc.call(req).await?;

      // Authenticated responses must not be cached by shared proxies.
      let cache_value = if jwt.is_some() {
        "private"
      } else {
        "public, max-age=60"
      };
      res
        .headers_mut()
        .insert(CACHE_CONTROL, HeaderValue::from_static(cache_value));
      Ok(res)
    })
  }
}

#[tracing::instrument(skip_all)]
async fn user_view_from_jwt(
  jwt: &str,
  context: &StartlabxContext,
) -> Result<UserView, StartlabxError> {
  let secret = SETTINGS.jwt_secret()?;
  let claims = Claims::validate(jwt, secret.as_ref())?;
  let user = User::read(&mut context.pool(), claims.user_id()).await?;
  Ok(UserView::new(user))
}
