//! Update 层交给 Backend 执行的异步命令

use blog_admin_core::ScreenScope;
use blog_admin_core::types::{Actor, DraftPost, PendingUpload};
use tokio_util::sync::CancellationToken;

/// 任务所属的界面作用域
///
/// 持有作用域的子 token：界面离开时任务随之取消。
#[derive(Debug, Clone)]
pub struct ScopeHandle {
    pub id: u64,
    pub token: CancellationToken,
}

impl ScopeHandle {
    pub fn of(scope: &ScreenScope) -> Self {
        Self {
            id: scope.id(),
            token: scope.child_token(),
        }
    }
}

/// 异步命令
#[derive(Debug, Clone)]
pub enum Command {
    /// 加载要编辑的文章
    LoadPost { scope: ScopeHandle, post_id: String },

    /// 列出当前用户的文章
    ListPosts { scope: ScopeHandle, actor: Actor },

    /// 上传封面图片
    Upload {
        scope: ScopeHandle,
        pending: PendingUpload,
    },

    /// 提交文章更新
    Submit {
        scope: ScopeHandle,
        post_id: String,
        actor: Actor,
        draft: DraftPost,
    },
}

impl Command {
    pub fn scope(&self) -> &ScopeHandle {
        match self {
            Self::LoadPost { scope, .. }
            | Self::ListPosts { scope, .. }
            | Self::Upload { scope, .. }
            | Self::Submit { scope, .. } => scope,
        }
    }

    /// 日志用名称
    pub fn name(&self) -> &'static str {
        match self {
            Self::LoadPost { .. } => "load_post",
            Self::ListPosts { .. } => "list_posts",
            Self::Upload { .. } => "upload",
            Self::Submit { .. } => "submit",
        }
    }
}
