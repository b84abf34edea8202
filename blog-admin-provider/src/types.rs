use serde::{Deserialize, Serialize};

// ============ Posts ============

/// A blog post as stored by the remote API.
///
/// Only the fields the admin client reads or edits are typed. Everything else
/// the server sends is kept in [`extra`](Self::extra) so that an update request
/// can send the post back wholesale without dropping fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Post {
    /// Server-side identifier (`_id`).
    #[serde(rename = "_id", default)]
    pub id: String,

    /// Author identifier.
    #[serde(rename = "userId", default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,

    /// Post title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Rich-text (HTML) body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    /// Cover image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Category slug.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// URL slug, derived by the server from the title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    /// When the post was created, if known.
    #[serde(
        rename = "createdAt",
        with = "crate::utils::datetime",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,

    /// When the post was last updated, if known.
    #[serde(
        rename = "updatedAt",
        with = "crate::utils::datetime",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,

    /// Any other field returned by the server (`__v`, custom fields, ...).
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Response of `GET /api/post/getposts`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostsPage {
    /// Matching posts, newest first.
    #[serde(default)]
    pub posts: Vec<Post>,
    /// Total number of posts on the blog.
    #[serde(default)]
    pub total_posts: u64,
    /// Number of posts created during the last month.
    #[serde(default)]
    pub last_month_posts: u64,
}

/// Filters for `GET /api/post/getposts`.
///
/// # Default
///
/// The default matches every post with the server's own paging (9 items)
/// and sort order (newest first).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostQuery {
    /// Only the post with this id.
    pub post_id: Option<String>,
    /// Only posts by this author.
    pub user_id: Option<String>,
}

impl PostQuery {
    /// Query a single post by id.
    #[must_use]
    pub fn by_id(post_id: impl Into<String>) -> Self {
        Self {
            post_id: Some(post_id.into()),
            ..Self::default()
        }
    }

    /// Query posts written by one author.
    #[must_use]
    pub fn by_author(user_id: impl Into<String>) -> Self {
        Self {
            user_id: Some(user_id.into()),
            ..Self::default()
        }
    }

    /// Query-string pairs in the order the server documents them.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(v) = &self.user_id {
            pairs.push(("userId", v.clone()));
        }
        if let Some(v) = &self.post_id {
            pairs.push(("postId", v.clone()));
        }
        pairs
    }
}

// ============ Object storage ============

/// Firebase web-app configuration used to initialise the storage client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FirebaseConfig {
    /// Web API key. Storage REST calls do not send it; it is kept so the
    /// configuration matches the web app's. Never stored in the config file.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub api_key: String,
    pub auth_domain: String,
    pub project_id: String,
    /// Default bucket, e.g. `my-project.appspot.com`.
    pub storage_bucket: String,
    pub messaging_sender_id: String,
    pub app_id: String,
}

impl Default for FirebaseConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            auth_domain: "mern-blog-ae30c.firebaseapp.com".to_string(),
            project_id: "mern-blog-ae30c".to_string(),
            storage_bucket: "mern-blog-ae30c.appspot.com".to_string(),
            messaging_sender_id: "690196201451".to_string(),
            app_id: "1:690196201451:web:82adfc80d09e0adf9263ae".to_string(),
        }
    }
}

/// A file handed to the storage client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadRequest {
    /// Storage key (object name) to upload under.
    pub key: String,
    /// File content.
    pub bytes: Vec<u8>,
    /// MIME type sent with the object metadata.
    pub content_type: String,
}

impl UploadRequest {
    /// Build a request, guessing the content type from the key's extension.
    #[must_use]
    pub fn new(key: impl Into<String>, bytes: Vec<u8>) -> Self {
        let key = key.into();
        let content_type = content_type_for(&key).to_string();
        Self {
            key,
            bytes,
            content_type,
        }
    }

    /// Total size in bytes.
    #[must_use]
    pub fn total_bytes(&self) -> u64 {
        self.bytes.len() as u64
    }
}

/// Progress snapshot emitted while an upload is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadSnapshot {
    /// Bytes acknowledged by the backend so far.
    pub bytes_transferred: u64,
    /// Size of the whole object.
    pub total_bytes: u64,
}

/// Object metadata returned once an upload is finalised.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredObject {
    /// Bucket holding the object.
    #[serde(default)]
    pub bucket: String,
    /// Object name (the storage key).
    pub name: String,
    /// Comma-separated download tokens.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_tokens: Option<String>,
    /// Object size, encoded as a decimal string by the backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    /// Stored MIME type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
}

impl StoredObject {
    /// First download token, if the backend issued any.
    #[must_use]
    pub fn first_download_token(&self) -> Option<&str> {
        self.download_tokens
            .as_deref()
            .and_then(|tokens| tokens.split(',').map(str::trim).find(|t| !t.is_empty()))
    }
}

/// MIME type for an image file name; unknown extensions are sent as binary.
pub fn content_type_for(file_name: &str) -> &'static str {
    let ext = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "bmp" => "image/bmp",
        "avif" => "image/avif",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_keeps_unknown_fields_on_round_trip() {
        let json = r#"{
            "_id": "65f0",
            "userId": "u1",
            "title": "Hello",
            "content": "<p>hi</p>",
            "image": "https://img",
            "category": "rust",
            "slug": "hello",
            "__v": 0,
            "createdAt": "2024-05-01T08:00:00.000Z"
        }"#;
        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.id, "65f0");
        assert_eq!(post.slug.as_deref(), Some("hello"));
        assert_eq!(post.extra.get("__v"), Some(&serde_json::json!(0)));

        let back = serde_json::to_value(&post).unwrap();
        assert_eq!(back["_id"], "65f0");
        assert_eq!(back["__v"], 0);
        assert_eq!(back["createdAt"], "2024-05-01T08:00:00.000Z");
    }

    #[test]
    fn empty_post_serializes_only_id() {
        let post = Post::default();
        let back = serde_json::to_value(&post).unwrap();
        assert_eq!(back, serde_json::json!({ "_id": "" }));
    }

    #[test]
    fn posts_page_tolerates_missing_counters() {
        let page: PostsPage = serde_json::from_str(r#"{"posts":[{"_id":"a"}]}"#).unwrap();
        assert_eq!(page.posts.len(), 1);
        assert_eq!(page.total_posts, 0);
    }

    #[test]
    fn query_pairs_only_include_set_filters() {
        assert!(PostQuery::default().to_pairs().is_empty());
        let q = PostQuery {
            post_id: Some("p".to_string()),
            ..PostQuery::by_author("u1")
        };
        assert_eq!(
            q.to_pairs(),
            vec![("userId", "u1".to_string()), ("postId", "p".to_string())]
        );
        assert_eq!(PostQuery::by_id("p").to_pairs(), vec![("postId", "p".to_string())]);
    }

    #[test]
    fn content_type_guessing() {
        assert_eq!(content_type_for("1700-cat.PNG"), "image/png");
        assert_eq!(content_type_for("a.jpeg"), "image/jpeg");
        assert_eq!(content_type_for("noext"), "application/octet-stream");
        assert_eq!(UploadRequest::new("x.webp", vec![1, 2]).content_type, "image/webp");
    }

    #[test]
    fn first_download_token_skips_blanks() {
        let obj = StoredObject {
            name: "a.png".into(),
            download_tokens: Some(" ,tok-1,tok-2".into()),
            ..StoredObject::default()
        };
        assert_eq!(obj.first_download_token(), Some("tok-1"));

        let none = StoredObject {
            name: "a.png".into(),
            download_tokens: Some(String::new()),
            ..StoredObject::default()
        };
        assert_eq!(none.first_download_token(), None);
    }
}
