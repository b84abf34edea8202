//! 日期时间序列化/反序列化工具
//!
//! 博客 API（Mongo 时间戳）与 Firebase Storage 元数据都返回 RFC3339 字符串，
//! 个别代理层会把时间改写为 Unix 毫秒时间戳，这里一并兼容。
//! - 序列化: `Option<DateTime<Utc>>` -> RFC3339 字符串（保留毫秒）
//! - 反序列化: RFC3339 字符串 或 Unix 时间戳 -> `Option<DateTime<Utc>>`

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serializer};

/// 序列化为与 Mongo `toISOString()` 一致的格式（如 `2024-05-01T08:00:00.000Z`）
pub fn serialize<S>(dt: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match dt {
        Some(dt) => serializer.serialize_some(&dt.to_rfc3339_opts(SecondsFormat::Millis, true)),
        None => serializer.serialize_none(),
    }
}

/// 反序列化：支持 RFC3339 字符串或 Unix 时间戳（秒/毫秒自动识别）
pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawTimestamp {
        Text(String),
        Number(i64),
    }

    match Option::<RawTimestamp>::deserialize(deserializer)? {
        Some(RawTimestamp::Text(s)) => DateTime::parse_from_rfc3339(&s)
            .map(|dt| Some(dt.with_timezone(&Utc)))
            .map_err(|e| Error::custom(format!("Invalid RFC3339 timestamp: {e}"))),
        Some(RawTimestamp::Number(ts)) => from_unix(ts)
            .map(Some)
            .ok_or_else(|| Error::custom("Invalid Unix timestamp")),
        None => Ok(None),
    }
}

/// 超过 10^11 视为毫秒，否则视为秒
fn from_unix(ts: i64) -> Option<DateTime<Utc>> {
    if ts > 100_000_000_000 {
        DateTime::from_timestamp_millis(ts)
    } else {
        DateTime::from_timestamp(ts, 0)
    }
}
