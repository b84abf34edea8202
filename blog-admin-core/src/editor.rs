//! 文章编辑表单状态机
//!
//! 纯同步状态：异步操作由调用方执行，结果再喂回这里。每个界面实例一份，
//! 不做任何持久化。

use std::path::Path;

use blog_admin_provider::{Post, UploadSnapshot};

use crate::error::{CoreError, CoreResult, MSG_SELECT_IMAGE};
use crate::types::{DraftPost, PendingUpload, Route, StorageKey, UploadOutcome, UploadStatus, progress_percent};

/// 文章编辑表单
#[derive(Debug, Clone, Default)]
pub struct EditorForm {
    post_id: String,
    draft: DraftPost,
    upload: UploadStatus,
    publish_error: Option<String>,
    loaded: bool,
}

impl EditorForm {
    pub fn new(post_id: impl Into<String>) -> Self {
        Self {
            post_id: post_id.into(),
            ..Self::default()
        }
    }

    pub fn post_id(&self) -> &str {
        &self.post_id
    }

    pub fn draft(&self) -> &DraftPost {
        &self.draft
    }

    pub fn upload_status(&self) -> &UploadStatus {
        &self.upload
    }

    pub fn publish_error(&self) -> Option<&str> {
        self.publish_error.as_deref()
    }

    /// 服务端文章是否已加载
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.draft.set_title(title);
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.draft.set_content(content);
    }

    // ============ 加载 ============

    /// 文章加载结果
    pub fn apply_loaded(&mut self, result: CoreResult<Post>) {
        match result {
            Ok(post) => {
                self.publish_error = None;
                self.draft = DraftPost::from_post(post);
                self.loaded = true;
            }
            Err(e) => self.publish_error = Some(e.display_message()),
        }
    }

    // ============ 上传 ============

    /// 发起上传
    ///
    /// 未选择文件时状态变为 `Failed("Please select an image")`，草稿不变。
    /// 已有上传进行中时拒绝，状态不变。
    pub fn begin_upload(&mut self, file: Option<&Path>, unix_millis: i64) -> CoreResult<PendingUpload> {
        if self.upload.is_in_progress() {
            return Err(CoreError::UploadInProgress);
        }

        let Some((path, key)) = file.and_then(|p| StorageKey::derive(unix_millis, p).map(|k| (p, k)))
        else {
            self.upload = UploadStatus::Failed {
                message: MSG_SELECT_IMAGE.to_string(),
            };
            return Err(CoreError::Validation(MSG_SELECT_IMAGE.to_string()));
        };

        self.upload = UploadStatus::InProgress { percent: None };
        Ok(PendingUpload {
            key,
            path: path.to_path_buf(),
        })
    }

    /// 进度快照；不在上传中时忽略
    pub fn track_progress(&mut self, snapshot: UploadSnapshot) {
        if self.upload.is_in_progress() {
            self.upload = UploadStatus::InProgress {
                percent: Some(progress_percent(snapshot)),
            };
        }
    }

    /// 上传结束
    pub fn finish_upload(&mut self, outcome: UploadOutcome) {
        match outcome {
            UploadOutcome::Completed { url } => {
                self.draft.set_image(url);
                self.upload = UploadStatus::Idle;
            }
            UploadOutcome::Failed(e) => {
                self.upload = UploadStatus::Failed {
                    message: e.display_message(),
                };
            }
            UploadOutcome::Cancelled => self.upload = UploadStatus::Idle,
        }
    }

    /// 用户关闭上传错误提示
    pub fn clear_upload_error(&mut self) {
        if matches!(self.upload, UploadStatus::Failed { .. }) {
            self.upload = UploadStatus::Idle;
        }
    }

    // ============ 提交 ============

    /// 提交结果；成功时返回要跳转的路由
    pub fn apply_submitted(&mut self, result: CoreResult<Route>) -> Option<Route> {
        match result {
            Ok(route) => {
                self.publish_error = None;
                Some(route)
            }
            Err(e) => {
                self.publish_error = Some(e.display_message());
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blog_admin_provider::ProviderError;

    fn snap(done: u64, total: u64) -> UploadSnapshot {
        UploadSnapshot {
            bytes_transferred: done,
            total_bytes: total,
        }
    }

    fn loaded_form() -> EditorForm {
        let mut form = EditorForm::new("p1");
        form.apply_loaded(Ok(Post {
            id: "p1".into(),
            title: Some("Hello".into()),
            image: Some("https://old/img.png".into()),
            slug: Some("hello".into()),
            ..Post::default()
        }));
        form
    }

    #[test]
    fn no_file_sets_validation_error_and_keeps_image() {
        let mut form = loaded_form();
        let err = form.begin_upload(None, 1).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
        assert_eq!(form.upload_status().error(), Some("Please select an image"));
        assert_eq!(form.draft().image(), Some("https://old/img.png"));
    }

    #[test]
    fn begin_clears_prior_error_and_derives_key() {
        let mut form = loaded_form();
        let _ = form.begin_upload(None, 1);
        let pending = form
            .begin_upload(Some(Path::new("/tmp/pics/cat.png")), 1_718_000_000_000)
            .unwrap();
        assert_eq!(pending.key.as_str(), "1718000000000-cat.png");
        assert_eq!(
            form.upload_status(),
            &UploadStatus::InProgress { percent: None }
        );
    }

    #[test]
    fn second_upload_refused_while_in_progress() {
        let mut form = loaded_form();
        form.begin_upload(Some(Path::new("a.png")), 1).unwrap();
        form.track_progress(snap(5, 10));
        let err = form.begin_upload(Some(Path::new("b.png")), 2).unwrap_err();
        assert!(matches!(err, CoreError::UploadInProgress));
        assert_eq!(form.upload_status().percent(), Some(50));
    }

    #[test]
    fn progress_fractions_map_to_percent() {
        let mut form = loaded_form();
        form.begin_upload(Some(Path::new("a.png")), 1).unwrap();
        for (done, expected) in [(0, 0), (50, 50), (100, 100)] {
            form.track_progress(snap(done, 100));
            assert_eq!(form.upload_status().percent(), Some(expected));
        }
        // 回退的进度原样显示
        form.track_progress(snap(30, 100));
        assert_eq!(form.upload_status().percent(), Some(30));
    }

    #[test]
    fn progress_ignored_when_idle() {
        let mut form = loaded_form();
        form.track_progress(snap(1, 2));
        assert_eq!(form.upload_status(), &UploadStatus::Idle);
    }

    #[test]
    fn error_event_resets_percent() {
        let mut form = loaded_form();
        form.begin_upload(Some(Path::new("a.png")), 1).unwrap();
        form.track_progress(snap(90, 100));
        form.finish_upload(UploadOutcome::Failed(CoreError::UploadFailed("boom".into())));
        assert_eq!(form.upload_status().percent(), None);
        assert_eq!(form.upload_status().error(), Some("Image upload failed"));
        assert_eq!(form.draft().image(), Some("https://old/img.png"));

        form.clear_upload_error();
        assert_eq!(form.upload_status(), &UploadStatus::Idle);
    }

    #[test]
    fn completion_sets_image_and_clears_state() {
        let mut form = loaded_form();
        form.begin_upload(Some(Path::new("a.png")), 1).unwrap();
        form.track_progress(snap(10, 100));
        form.finish_upload(UploadOutcome::Completed {
            url: "https://new/img.png".into(),
        });
        assert_eq!(form.draft().image(), Some("https://new/img.png"));
        assert_eq!(form.upload_status(), &UploadStatus::Idle);
        assert_eq!(form.upload_status().percent(), None);
        assert_eq!(form.upload_status().error(), None);
    }

    #[test]
    fn url_failure_keeps_image_and_allows_retry() {
        let mut form = loaded_form();
        form.begin_upload(Some(Path::new("a.png")), 1).unwrap();
        form.finish_upload(UploadOutcome::Failed(CoreError::DownloadUrlUnavailable(
            "no token".into(),
        )));
        assert_eq!(form.draft().image(), Some("https://old/img.png"));
        assert_eq!(
            form.upload_status().error(),
            Some("Image uploaded but its download URL could not be resolved")
        );
        assert!(form.begin_upload(Some(Path::new("a.png")), 2).is_ok());
    }

    #[test]
    fn submit_rejection_shows_message_without_navigation() {
        let mut form = loaded_form();
        let route = form.apply_submitted(Err(CoreError::Provider(ProviderError::Rejected {
            service: "blog-api".into(),
            status: 400,
            message: "X".into(),
        })));
        assert!(route.is_none());
        assert_eq!(form.publish_error(), Some("X"));
    }

    #[test]
    fn submit_success_navigates() {
        let mut form = loaded_form();
        form.apply_submitted(Err(CoreError::InvalidResponse("x".into())));
        let route = form.apply_submitted(Ok(Route::Post {
            slug: "my-post".into(),
        }));
        assert_eq!(route.map(|r| r.path()), Some("/post/my-post".to_string()));
        assert_eq!(form.publish_error(), None);
    }

    #[test]
    fn load_failure_sets_publish_error() {
        let mut form = EditorForm::new("p1");
        form.apply_loaded(Err(CoreError::PostNotFound("p1".into())));
        assert_eq!(form.publish_error(), Some("Post not found"));
        assert!(!form.is_loaded());
    }
}
