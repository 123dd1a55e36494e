use chrono::{DateTime, TimeDelta, Utc};
use deadpool::Runtime;
use diesel::{
  helper_types::AsExprOf,
  result::Error::{self as DieselError, QueryBuilderError},
  sql_types::Timestamptz,
  IntoSql,
};
use diesel_async::{
  pg::AsyncPgConnection,
  pooled_connection::{
    deadpool::{Object as PooledConnection, Pool},
    AsyncDieselConnectionManager,
  },
};
use startlabx_utils::{
  error::StartlabxResult,
  settings::structs::Settings,
  FETCH_LIMIT_DEFAULT,
  FETCH_LIMIT_MAX,
};
use std::ops::{Deref, DerefMut};
use tracing::info;

pub type ActualDbPool = Pool<AsyncPgConnection>;

/// References a pool or connection. Functions must take `&mut DbPool<'_>` to
/// allow implicit reborrowing.
///
/// https://github.com/rust-lang/rfcs/issues/1403
pub enum DbPool<'a> {
  Pool(&'a ActualDbPool),
  Conn(&'a mut AsyncPgConnection),
}

pub enum DbConn<'a> {
  Pool(PooledConnection<AsyncPgConnection>),
  Conn(&'a mut AsyncPgConnection),
}

pub async fn get_conn<'a, 'b: 'a>(pool: &'a mut DbPool<'b>) -> Result<DbConn<'a>, DieselError> {
  Ok(match pool {
    DbPool::Pool(pool) => DbConn::Pool(pool.get().await.map_err(|e| QueryBuilderError(e.into()))?),
    DbPool::Conn(conn) => DbConn::Conn(conn),
  })
}

impl Deref for DbConn<'_> {
  type Target = AsyncPgConnection;

  fn deref(&self) -> &Self::Target {
    match self {
      DbConn::Pool(conn) => conn.deref(),
      DbConn::Conn(conn) => conn.deref(),
    }
  }
}

impl DerefMut for DbConn<'_> {
  fn deref_mut(&mut self) -> &mut Self::Target {
    match self {
      DbConn::Pool(conn) => conn.deref_mut(),
      DbConn::Conn(conn) => conn.deref_mut(),
    }
  }
}

// Allows functions that take `DbPool<'_>` to be called in a transaction by
// passing `&mut conn.into()`
impl<'a> From<&'a mut AsyncPgConnection> for DbPool<'a> {
  fn from(value: &'a mut AsyncPgConnection) -> Self {
    DbPool::Conn(value)
  }
}

impl<'a, 'b: 'a> From<&'a mut DbConn<'b>> for DbPool<'a> {
  fn from(value: &'a mut DbConn<'b>) -> Self {
    DbPool::Conn(value.deref_mut())
  }
}

impl<'a> From<&'a ActualDbPool> for DbPool<'a> {
  fn from(value: &'a ActualDbPool) -> Self {
    DbPool::Pool(value)
  }
}

pub async fn build_db_pool(settings: &Settings) -> StartlabxResult<ActualDbPool> {
  let db_url = settings.get_database_url();
  let manager = AsyncDieselConnectionManager::<AsyncPgConnection>::new(&db_url);
  let pool = Pool::builder(manager)
    .max_size(settings.database.pool_size)
    .runtime(Runtime::Tokio1)
    .build()?;
  info!("Built database connection pool ({})", settings.database.pool_size);
  Ok(pool)
}

/// Returns `now()` at the `timestamptz` type, for comparisons against
/// published columns.
pub fn now() -> AsExprOf<diesel::dsl::now, Timestamptz> {
  diesel::dsl::now.into_sql::<Timestamptz>()
}

/// Cutoff for password reset request validity.
pub fn reset_request_cutoff() -> DateTime<Utc> {
  Utc::now() - TimeDelta::hours(24)
}

pub fn limit_and_offset(
  page: Option<i64>,
  limit: Option<i64>,
) -> Result<(i64, i64), diesel::result::Error> {
  let page = match page {
    Some(page) => {
      if page < 1 {
        return Err(QueryBuilderError("Page is < 1".into()));
      }
      page
    }
    None => 1,
  };
  let limit = match limit {
    Some(limit) => {
      if !(1..=FETCH_LIMIT_MAX).contains(&limit) {
        return Err(QueryBuilderError(
          format!("Fetch limit is > {FETCH_LIMIT_MAX}").into(),
        ));
      }
      limit
    }
    None => FETCH_LIMIT_DEFAULT,
  };
  let offset = limit * (page - 1);
  Ok((limit, offset))
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used)]
  use super::limit_and_offset;
  use pretty_assertions::assert_eq;

  #[test]
  fn test_limit_and_offset() {
    assert_eq!((20, 0), limit_and_offset(None, None).unwrap());
    assert_eq!((10, 10), limit_and_offset(Some(2), Some(10)).unwrap());
    assert!(limit_and_offset(Some(0), None).is_err());
    assert!(limit_and_offset(None, Some(51)).is_err());
  }
}
