use std::time::{SystemTime, UNIX_EPOCH};

use uuid::Uuid;

pub mod assets;
pub mod format;
pub mod persistence;
pub mod version;

pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}

/// Current wall-clock time in milliseconds since the Unix epoch.
pub fn now_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        let a = generate_id();
        let b = generate_id();
        assert_ne!(a, b);
        assert_eq!(a.len(), 36);
    }

    #[test]
    fn clock_is_past_2020() {
        assert!(now_millis() > 1_577_836_800_000);
    }
}
