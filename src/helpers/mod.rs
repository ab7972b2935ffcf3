use std::time::{SystemTime, UNIX_EPOCH};

pub mod id;

pub fn timestamp_nanos() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or(Default::default())
        .as_nanos() as u64
}
