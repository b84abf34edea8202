use std::fmt;
use std::path::{Path, PathBuf};

use blog_admin_provider::UploadSnapshot;
use serde::Serialize;

use crate::error::CoreError;

/// 上传状态
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum UploadStatus {
    /// 没有上传在进行
    #[default]
    Idle,
    /// 上传中；收到第一份进度快照之前 `percent` 为 `None`
    InProgress { percent: Option<u8> },
    /// 上传失败，附带展示给用户的消息
    Failed { message: String },
}

impl UploadStatus {
    pub fn is_in_progress(&self) -> bool {
        matches!(self, Self::InProgress { .. })
    }

    pub fn percent(&self) -> Option<u8> {
        match self {
            Self::InProgress { percent } => *percent,
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed { message } => Some(message),
            _ => None,
        }
    }
}

/// 进度百分比：`round(transferred / total * 100)`
///
/// 零字节对象视为 100；服务端报告的字节数超过总量时截断到 100。
pub fn progress_percent(snapshot: UploadSnapshot) -> u8 {
    if snapshot.total_bytes == 0 {
        return 100;
    }
    let transferred = u128::from(snapshot.bytes_transferred.min(snapshot.total_bytes));
    let total = u128::from(snapshot.total_bytes);
    // 四舍五入（.5 向上）
    let percent = (transferred * 200 + total) / (total * 2);
    u8::try_from(percent).unwrap_or(100)
}

/// 存储 key：`<unix 毫秒>-<文件名>`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StorageKey(String);

impl StorageKey {
    /// 由时间戳和所选文件派生；只取路径的最后一段。
    ///
    /// 路径没有文件名（`/`、`..`）时返回 `None`。
    pub fn derive(unix_millis: i64, path: &Path) -> Option<Self> {
        let name = path.file_name()?.to_string_lossy();
        if name.is_empty() {
            return None;
        }
        Some(Self(format!("{unix_millis}-{name}")))
    }

    /// 以当前时间派生
    pub fn now(path: &Path) -> Option<Self> {
        Self::derive(chrono::Utc::now().timestamp_millis(), path)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 已通过校验、等待执行的上传
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingUpload {
    pub key: StorageKey,
    pub path: PathBuf,
}

/// 一次上传的最终结果
#[derive(Debug, Clone)]
pub enum UploadOutcome {
    /// 上传完成并拿到了公开下载地址
    Completed { url: String },
    /// 上传或下载地址解析失败
    Failed(CoreError),
    /// 所属界面已关闭
    Cancelled,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snap(done: u64, total: u64) -> UploadSnapshot {
        UploadSnapshot {
            bytes_transferred: done,
            total_bytes: total,
        }
    }

    #[test]
    fn percent_from_fraction() {
        assert_eq!(progress_percent(snap(0, 200)), 0);
        assert_eq!(progress_percent(snap(100, 200)), 50);
        assert_eq!(progress_percent(snap(200, 200)), 100);
    }

    #[test]
    fn percent_rounds_half_up() {
        // 1/3 = 33.33 -> 33, 2/3 = 66.67 -> 67, 1/200 = 0.5 -> 1
        assert_eq!(progress_percent(snap(1, 3)), 33);
        assert_eq!(progress_percent(snap(2, 3)), 67);
        assert_eq!(progress_percent(snap(1, 200)), 1);
    }

    #[test]
    fn percent_edge_cases() {
        assert_eq!(progress_percent(snap(0, 0)), 100);
        assert_eq!(progress_percent(snap(500, 200)), 100);
        assert_eq!(progress_percent(snap(u64::MAX - 1, u64::MAX)), 100);
    }

    #[test]
    fn storage_key_uses_basename() {
        let key = StorageKey::derive(1_718_000_000_000, Path::new("/home/me/Pictures/cat.png"));
        assert_eq!(
            key.map(|k| k.to_string()),
            Some("1718000000000-cat.png".to_string())
        );
        assert!(StorageKey::derive(1, Path::new("/")).is_none());
        assert!(StorageKey::derive(1, Path::new("")).is_none());
    }

    #[test]
    fn status_accessors() {
        let s = UploadStatus::InProgress { percent: Some(40) };
        assert!(s.is_in_progress());
        assert_eq!(s.percent(), Some(40));
        assert_eq!(s.error(), None);

        let f = UploadStatus::Failed {
            message: "Image upload failed".into(),
        };
        assert_eq!(f.percent(), None);
        assert_eq!(f.error(), Some("Image upload failed"));
    }
}
