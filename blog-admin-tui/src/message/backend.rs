//! 异步任务结果消息

use blog_admin_core::CoreResult;
use blog_admin_core::types::{Post, PostsPage, Route, UploadOutcome, UploadSnapshot};

/// Backend 任务回传给 UI 循环的结果
///
/// `scope_id` 是发起任务时界面作用域的 ID。
#[derive(Debug, Clone)]
pub enum BackendMessage {
    /// 待编辑文章加载完成
    PostLoaded {
        scope_id: u64,
        result: CoreResult<Post>,
    },

    /// 仪表盘文章列表加载完成
    PostsListed {
        scope_id: u64,
        result: CoreResult<PostsPage>,
    },

    /// 上传进度快照
    UploadProgress {
        scope_id: u64,
        snapshot: UploadSnapshot,
    },

    /// 上传结束（成功 / 失败 / 取消）
    UploadFinished {
        scope_id: u64,
        outcome: UploadOutcome,
    },

    /// 提交更新完成
    Submitted {
        scope_id: u64,
        result: CoreResult<Route>,
    },
}

impl BackendMessage {
    /// 发起任务的界面作用域
    pub fn scope_id(&self) -> u64 {
        match self {
            Self::PostLoaded { scope_id, .. }
            | Self::PostsListed { scope_id, .. }
            | Self::UploadProgress { scope_id, .. }
            | Self::UploadFinished { scope_id, .. }
            | Self::Submitted { scope_id, .. } => *scope_id,
        }
    }
}
