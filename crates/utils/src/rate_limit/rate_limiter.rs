use enum_map::EnumMap;
use std::{
  collections::HashMap,
  net::{IpAddr, Ipv6Addr},
  sync::LazyLock,
  time::{Duration, Instant},
};
use strum::AsRefStr;
use tracing::debug;

static START_TIME: LazyLock<Instant> = LazyLock::new(Instant::now);

/// Smaller than `std::time::Instant` because it uses a smaller integer for
/// seconds and doesn't store nanoseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstantSecs {
  secs: u32,
}

impl InstantSecs {
  pub fn now() -> Self {
    InstantSecs {
      secs: u32::try_from(START_TIME.elapsed().as_secs()).unwrap_or(u32::MAX),
    }
  }

  fn secs_since(self, earlier: Self) -> u32 {
    self.secs.saturating_sub(earlier.secs)
  }

  fn to_instant(self) -> Instant {
    *START_TIME + Duration::from_secs(self.secs.into())
  }
}

#[derive(Debug, Clone, Copy)]
pub struct BucketConfig {
  pub capacity: i32,
  pub secs_to_refill: i32,
}

#[derive(Debug, Clone, Copy)]
struct Bucket {
  last_checked: InstantSecs,
  /// Tokens present at `last_checked`. Steadily refills up to the bucket's
  /// capacity; performing the rate-limited action consumes 1 token.
  tokens: f32,
}

#[derive(Debug, enum_map::Enum, Copy, Clone, AsRefStr)]
pub enum ActionType {
  Message,
  Register,
  Post,
  Search,
  Ai,
}

/// Rate limiting based on action type and IP addr.
///
/// IPv6 addresses share one bucket per /64 prefix, since a single user
/// typically controls the whole prefix.
#[derive(Debug, Clone, Default)]
pub struct RateLimitStorage {
  buckets: HashMap<IpAddr, EnumMap<ActionType, Bucket>>,
}

impl RateLimitStorage {
  /// Rate limiting algorithm described here:
  /// https://stackoverflow.com/a/668327/1655478
  ///
  /// Returns true if the request passed the rate limit, false if it failed
  /// and should be rejected.
  pub fn check(
    &mut self,
    type_: ActionType,
    ip: IpAddr,
    config: BucketConfig,
    now: InstantSecs,
  ) -> bool {
    let ip = normalize_ip(ip);

    let group = self.buckets.entry(ip).or_insert_with(|| {
      EnumMap::from_fn(|_| Bucket {
        last_checked: now,
        tokens: -2.0,
      })
    });

    let capacity = config.capacity as f32;
    let secs_to_refill = config.secs_to_refill as f32;

    #[allow(clippy::indexing_slicing)] // `EnumMap` has no `get` function
    let bucket = &mut group[type_];

    // Sentinel for a bucket that was never filled
    if bucket.tokens == -2.0 {
      bucket.tokens = capacity;
    }

    let secs_elapsed = now.secs_since(bucket.last_checked) as f32;
    bucket.last_checked = now;

    // For `secs_elapsed` seconds, increase `bucket.tokens` by `capacity`
    // every `secs_to_refill` seconds
    bucket.tokens += secs_elapsed * (capacity / secs_to_refill);

    if bucket.tokens > capacity {
      bucket.tokens = capacity;
    }

    if bucket.tokens < 1.0 {
      debug!(
        "Rate limited type: {}, time passed: {}, allowance: {}",
        type_.as_ref(),
        secs_elapsed,
        bucket.tokens
      );
      false
    } else {
      bucket.tokens -= 1.0;
      true
    }
  }

  /// Remove buckets not used for longer than the given duration
  pub fn remove_older_than(&mut self, duration: Duration) {
    let Some(instant) = Instant::now().checked_sub(duration) else {
      return;
    };

    self.buckets.retain(|_, group| {
      group
        .values()
        .any(|bucket| bucket.last_checked.to_instant() > instant)
    });
  }
}

fn normalize_ip(ip: IpAddr) -> IpAddr {
  match ip {
    IpAddr::V4(_) => ip,
    IpAddr::V6(v6) => {
      let [a, b, c, d, e, f, g, h, ..] = v6.octets();
      IpAddr::V6(Ipv6Addr::from([
        a, b, c, d, e, f, g, h, 0, 0, 0, 0, 0, 0, 0, 0,
      ]))
    }
  }
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used)]
  #![allow(clippy::indexing_slicing)]
  use super::*;
  use pretty_assertions::assert_eq;
  use std::net::Ipv4Addr;

  const CONFIG: BucketConfig = BucketConfig {
    capacity: 3,
    secs_to_refill: 3,
  };

  #[test]
  fn test_bucket_is_drained_and_refills() {
    let mut storage = RateLimitStorage::default();
    let ip = IpAddr::V4(Ipv4Addr::new(1, 2, 3, 4));
    let now = InstantSecs::now();

    for _ in 0..3 {
      assert!(storage.check(ActionType::Post, ip, CONFIG, now));
    }
    // Bucket is empty
    assert!(!storage.check(ActionType::Post, ip, CONFIG, now));

    // Other action types are unaffected
    assert!(storage.check(ActionType::Message, ip, CONFIG, now));

    // One token refills per second with this config
    let later = InstantSecs { secs: now.secs + 1 };
    assert!(storage.check(ActionType::Post, ip, CONFIG, later));
    assert!(!storage.check(ActionType::Post, ip, CONFIG, later));
  }

  #[test]
  fn test_ipv6_prefix_shares_bucket() {
    let mut storage = RateLimitStorage::default();
    let now = InstantSecs::now();
    let first: IpAddr = "2001:db8::1".parse().unwrap();
    let second: IpAddr = "2001:db8::2".parse().unwrap();

    for _ in 0..3 {
      assert!(storage.check(ActionType::Post, first, CONFIG, now));
    }
    // Same /64, so the second address is already drained
    assert!(!storage.check(ActionType::Post, second, CONFIG, now));

    assert_eq!(1, storage.buckets.len());
  }
}
