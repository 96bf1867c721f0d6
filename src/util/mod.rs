use std::sync::atomic::{AtomicUsize, Ordering};

use time::OffsetDateTime;
use uuid::Uuid;

pub mod assets;
pub mod version;

static ID_COUNTER: AtomicUsize = AtomicUsize::new(1);

/// Short process-local id for transient UI items such as toasts.
pub fn generate_id(prefix: &str) -> String {
    let value = ID_COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{value}")
}

/// Stable key for a submitted record.
pub fn generate_entry_id() -> String {
    format!("entry-{}", Uuid::new_v4())
}

/// Human-facing medicine id: `MED` followed by the current Unix time in milliseconds.
pub fn generate_medicine_id() -> String {
    let millis = OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000;
    format!("MED{millis}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_id_is_unique() {
        assert_ne!(generate_id("toast"), generate_id("toast"));
    }

    #[test]
    fn test_medicine_id_format() {
        let id = generate_medicine_id();
        let digits = id.strip_prefix("MED").unwrap();
        assert!(digits.len() >= 13);
        assert!(digits.chars().all(|c| c.is_ascii_digit()));
    }
}
