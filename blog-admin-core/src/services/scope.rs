//! 界面作用域：界面挂载期间发起的异步操作随界面一起取消

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio_util::sync::CancellationToken;

static NEXT_SCOPE_ID: AtomicU64 = AtomicU64::new(1);

/// 一个已挂载界面的生命周期
///
/// 每个异步操作取一个子 token；界面被替换（drop）或显式 [`close`](Self::close)
/// 时全部取消。操作结果携带 [`id`](Self::id)，界面据此丢弃过期结果。
#[derive(Debug)]
pub struct ScreenScope {
    id: u64,
    token: CancellationToken,
}

impl ScreenScope {
    pub fn new() -> Self {
        Self {
            id: NEXT_SCOPE_ID.fetch_add(1, Ordering::Relaxed),
            token: CancellationToken::new(),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    /// 供单个操作使用的子 token
    pub fn child_token(&self) -> CancellationToken {
        self.token.child_token()
    }

    /// 结果是否属于仍然存活的本作用域
    pub fn accepts(&self, scope_id: u64) -> bool {
        scope_id == self.id && !self.token.is_cancelled()
    }

    pub fn close(&self) {
        if !self.token.is_cancelled() {
            log::debug!("Closing screen scope {}", self.id);
            self.token.cancel();
        }
    }
}

impl Default for ScreenScope {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ScreenScope {
    fn drop(&mut self) {
        self.close();
    }
}

/// 在取消前完成则返回 `Some`，否则 `None`
pub async fn run_scoped<F>(token: &CancellationToken, future: F) -> Option<F::Output>
where
    F: Future,
{
    tokio::select! {
        biased;
        () = token.cancelled() => None,
        output = future => Some(output),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scopes_have_distinct_ids() {
        let a = ScreenScope::new();
        let b = ScreenScope::new();
        assert_ne!(a.id(), b.id());
        assert!(a.accepts(a.id()));
        assert!(!a.accepts(b.id()));
    }

    #[test]
    fn dropping_scope_cancels_children() {
        let scope = ScreenScope::new();
        let child = scope.child_token();
        assert!(!child.is_cancelled());
        drop(scope);
        assert!(child.is_cancelled());
    }

    #[test]
    fn closed_scope_rejects_own_results() {
        let scope = ScreenScope::new();
        scope.close();
        assert!(!scope.accepts(scope.id()));
    }

    #[tokio::test]
    async fn run_scoped_returns_none_when_cancelled() {
        let scope = ScreenScope::new();
        let token = scope.child_token();
        scope.close();
        let out = run_scoped(&token, std::future::pending::<u32>()).await;
        assert_eq!(out, None);

        let live = ScreenScope::new();
        assert_eq!(run_scoped(&live.child_token(), async { 7 }).await, Some(7));
    }
}
