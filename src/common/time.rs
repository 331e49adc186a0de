//! KST clock helpers. Trading-day boundaries follow Korea Standard Time.

use chrono::{DateTime, FixedOffset, Utc};

const KST_OFFSET_SECS: i32 = 9 * 3600;

/// Fixed UTC+9 offset. KST has no daylight saving.
pub fn kst() -> FixedOffset {
    FixedOffset::east_opt(KST_OFFSET_SECS).expect("KST offset is in range")
}

/// Current KST timestamp.
pub fn now_kst() -> DateTime<FixedOffset> {
    Utc::now().with_timezone(&kst())
}

/// Current KST calendar date as `YYYY-MM-DD`, the usage-log day key.
pub fn today_kst() -> String {
    now_kst().format("%Y-%m-%d").to_string()
}
