use rand::{distributions::Alphanumeric, thread_rng, Rng};

pub mod validation;

/// Opaque token, used for password resets.
pub fn generate_random_string() -> String {
  thread_rng()
    .sample_iter(&Alphanumeric)
    .take(32)
    .map(char::from)
    .collect()
}

#[cfg(test)]
mod tests {
  use super::generate_random_string;
  use pretty_assertions::assert_eq;

  #[test]
  fn test_random_string_length_and_uniqueness() {
    let a = generate_random_string();
    let b = generate_random_string();
    assert_eq!(32, a.len());
    assert_ne!(a, b);
  }
}
