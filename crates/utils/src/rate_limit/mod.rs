use crate::error::{StartlabxError, StartlabxErrorType};
use actix_web::dev::{ConnectionInfo, Service, ServiceRequest, ServiceResponse, Transform};
use enum_map::{enum_map, EnumMap};
use futures_util::future::{ok, Ready};
use rate_limiter::{ActionType, BucketConfig, InstantSecs, RateLimitStorage};
use serde::{Deserialize, Serialize};
use smart_default::SmartDefault;
use std::{
  future::Future,
  net::{IpAddr, Ipv4Addr, SocketAddr},
  pin::Pin,
  rc::Rc,
  str::FromStr,
  sync::{Arc, Mutex},
  task::{Context, Poll},
  time::Duration,
};

pub mod rate_limiter;

#[derive(Debug, Deserialize, Serialize, Clone, Copy, SmartDefault)]
#[serde(default)]
pub struct RateLimitConfig {
  /// Maximum number of messages created in interval
  #[default(180)]
  pub message: i32,
  /// Interval length for message limit, in seconds
  #[default(60)]
  pub message_per_second: i32,
  /// Maximum number of posts created in interval
  #[default(6)]
  pub post: i32,
  /// Interval length for post limit, in seconds
  #[default(300)]
  pub post_per_second: i32,
  /// Maximum number of registrations in interval
  #[default(3)]
  pub register: i32,
  /// Interval length for registration limit, in seconds
  #[default(3600)]
  pub register_per_second: i32,
  /// Maximum number of searches created in interval
  #[default(60)]
  pub search: i32,
  /// Interval length for search limit, in seconds
  #[default(600)]
  pub search_per_second: i32,
  /// Maximum number of ai generations in interval
  #[default(6)]
  pub ai: i32,
  /// Interval length for ai generation limit, in seconds
  #[default(600)]
  pub ai_per_second: i32,
}

impl From<RateLimitConfig> for EnumMap<ActionType, BucketConfig> {
  fn from(rate_limit: RateLimitConfig) -> Self {
    enum_map! {
      ActionType::Message => (rate_limit.message, rate_limit.message_per_second),
      ActionType::Post => (rate_limit.post, rate_limit.post_per_second),
      ActionType::Register => (rate_limit.register, rate_limit.register_per_second),
      ActionType::Search => (rate_limit.search, rate_limit.search_per_second),
      ActionType::Ai => (rate_limit.ai, rate_limit.ai_per_second),
    }
    .map(|_, t| BucketConfig {
      capacity: t.0,
      secs_to_refill: t.1,
    })
  }
}

/// Single instance of rate limit config and buckets, shared across all
/// worker threads.
#[derive(Clone)]
pub struct RateLimitCell {
  config: EnumMap<ActionType, BucketConfig>,
  storage: Arc<Mutex<RateLimitStorage>>,
}

impl RateLimitCell {
  pub fn new(config: RateLimitConfig) -> Self {
    RateLimitCell {
      config: config.into(),
      storage: Arc::new(Mutex::new(RateLimitStorage::default())),
    }
  }

  /// Remove buckets that received no request within the given duration
  pub fn remove_older_than(&self, duration: Duration) {
    if let Ok(mut guard) = self.storage.lock() {
      guard.remove_older_than(duration);
    }
  }

  pub fn message(&self) -> RateLimitedGuard {
    self.kind(ActionType::Message)
  }

  pub fn post(&self) -> RateLimitedGuard {
    self.kind(ActionType::Post)
  }

  pub fn register(&self) -> RateLimitedGuard {
    self.kind(ActionType::Register)
  }

  pub fn search(&self) -> RateLimitedGuard {
    self.kind(ActionType::Search)
  }

  pub fn ai(&self) -> RateLimitedGuard {
    self.kind(ActionType::Ai)
  }

  fn kind(&self, type_: ActionType) -> RateLimitedGuard {
    RateLimitedGuard {
      config: self.config,
      storage: self.storage.clone(),
      type_,
    }
  }
}

#[derive(Clone)]
pub struct RateLimitedGuard {
  config: EnumMap<ActionType, BucketConfig>,
  storage: Arc<Mutex<RateLimitStorage>>,
  type_: ActionType,
}

impl RateLimitedGuard {
  /// Returns true if the request passed the rate limit, false if it failed
  /// and should be rejected.
  pub fn check(self, ip_addr: IpAddr) -> bool {
    // The lock is held only long enough to update one bucket, never across
    // an await point.
    let Ok(mut guard) = self.storage.lock() else {
      return true;
    };
    #[allow(clippy::indexing_slicing)] // `EnumMap` has no `get` function
    let config = self.config[self.type_];
    guard.check(self.type_, ip_addr, config, InstantSecs::now())
  }
}

pub struct RateLimitedMiddleware<S> {
  rate_limited: RateLimitedGuard,
  service: Rc<S>,
}

impl<S> Transform<S, ServiceRequest> for RateLimitedGuard
where
  S: Service<ServiceRequest, Response = ServiceResponse, Error = actix_web::Error> + 'static,
  S::Future: 'static,
{
  type Response = S::Response;
  type Error = actix_web::Error;
  type InitError = ();
  type Transform = RateLimitedMiddleware<S>;
  type Future = Ready<Result<Self::Transform, Self::InitError>>;

  fn new_transform(&self, service: S) -> Self::Future {
    ok(RateLimitedMiddleware {
      rate_limited: self.clone(),
      service: Rc::new(service),
    })
  }
}

type FutResult<T, E> = dyn Future<Output = Result<T, E>>;

impl<S> Service<ServiceRequest> for RateLimitedMiddleware<S>
where
  S: Service<ServiceRequest, Response = ServiceResponse, Error = actix_web::Error> + 'static,
  S::Future: 'static,
{
  type Response = S::Response;
  type Error = actix_web::Error;
  type Future = Pin<Box<FutResult<Self::Response, Self::Error>>>;

  fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
    self.service.poll_ready(cx)
  }

  fn call(&self, req: ServiceRequest) -> Self::Future {
    let ip_addr = get_ip(&req.connection_info());

    let rate_limited = self.rate_limited.clone();
    let service = self.service.clone();

    Box::pin(async move {
      if rate_limited.check(ip_addr) {
        service.call(req).await
      } else {
        let (http_req, _) = req.into_parts();
        Ok(ServiceResponse::from_err(
          StartlabxError::from(StartlabxErrorType::RateLimitError),
          http_req,
        ))
      }
    })
  }
}

fn get_ip(conn_info: &ConnectionInfo) -> IpAddr {
  conn_info
    .realip_remote_addr()
    .and_then(parse_ip)
    .unwrap_or(IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1)))
}

fn parse_ip(addr: &str) -> Option<IpAddr> {
  if let Some(s) = addr.strip_suffix(']') {
    IpAddr::from_str(s.get(1..)?).ok()
  } else if let Ok(ip) = IpAddr::from_str(addr) {
    Some(ip)
  } else if let Ok(socket) = SocketAddr::from_str(addr) {
    Some(socket.ip())
  } else {
    None
  }
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used)]

  #[test]
  fn test_parse_ip() {
    let ip_addrs = [
      "1.2.3.4",
      "1.2.3.4:8000",
      "2001:db8::",
      "[2001:db8::]",
      "[2001:db8::]:8000",
    ];
    for addr in ip_addrs {
      assert!(super::parse_ip(addr).is_some(), "failed to parse {addr}");
    }
  }
}
