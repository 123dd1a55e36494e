use reqwest::Client;
use startlabx_db_schema::utils::{ActualDbPool, DbPool};
use startlabx_utils::rate_limit::RateLimitCell;
use std::sync::Arc;

#[derive(Clone)]
pub struct StartlabxContext {
  pool: ActualDbPool,
  client: Arc<Client>,
  rate_limit_cell: RateLimitCell,
}

impl StartlabxContext {
  pub fn create(pool: ActualDbPool, client: Client, rate_limit_cell: RateLimitCell) -> Self {
    StartlabxContext {
      pool,
      client: Arc::new(client),
      rate_limit_cell,
    }
  }

  pub fn pool(&'_ self) -> DbPool<'_> {
    DbPool::Pool(&self.pool)
  }

  pub fn client(&self) -> &Client {
    &self.client
  }

  pub fn rate_limit_cell(&self) -> &RateLimitCell {
    &self.rate_limit_cell
  }
}
