use blog_admin_provider::Post;

/// 正在编辑的文章草稿
///
/// 包装服务端返回的 [`Post`]：表单只改 `title` / `content` / `image`，
/// 其余字段原样保留，提交时整体发回。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DraftPost {
    post: Post,
}

impl DraftPost {
    /// 以服务端文章整体替换草稿
    pub fn from_post(post: Post) -> Self {
        Self { post }
    }

    pub fn id(&self) -> &str {
        &self.post.id
    }

    pub fn title(&self) -> &str {
        self.post.title.as_deref().unwrap_or_default()
    }

    pub fn content(&self) -> &str {
        self.post.content.as_deref().unwrap_or_default()
    }

    pub fn image(&self) -> Option<&str> {
        self.post.image.as_deref()
    }

    pub fn slug(&self) -> Option<&str> {
        self.post.slug.as_deref()
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.post.title = Some(title.into());
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.post.content = Some(content.into());
    }

    pub fn set_image(&mut self, url: impl Into<String>) {
        self.post.image = Some(url.into());
    }

    /// 提交用的完整文章
    pub fn as_post(&self) -> &Post {
        &self.post
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edits_keep_other_fields() {
        let mut post = Post {
            id: "p1".into(),
            category: Some("rust".into()),
            slug: Some("old".into()),
            ..Post::default()
        };
        post.extra.insert("__v".into(), serde_json::json!(3));

        let mut draft = DraftPost::from_post(post);
        draft.set_title("New");
        draft.set_content("<p>body</p>");
        draft.set_image("https://img/1.png");

        let sent = draft.as_post();
        assert_eq!(sent.title.as_deref(), Some("New"));
        assert_eq!(sent.category.as_deref(), Some("rust"));
        assert_eq!(sent.extra.get("__v"), Some(&serde_json::json!(3)));
        assert_eq!(draft.image(), Some("https://img/1.png"));
        assert_eq!(draft.slug(), Some("old"));
    }

    #[test]
    fn empty_draft_reads_as_blank() {
        let draft = DraftPost::default();
        assert_eq!(draft.title(), "");
        assert_eq!(draft.content(), "");
        assert_eq!(draft.image(), None);
    }
}
