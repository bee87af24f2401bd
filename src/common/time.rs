use chrono::prelude::Utc;

pub fn timestamp_millis() -> i64 {
    let now = Utc::now();

    now.timestamp_millis()
}
