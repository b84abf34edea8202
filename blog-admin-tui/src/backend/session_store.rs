//! 会话令牌存储
//!
//! 令牌按用户 ID 存放在系统钥匙串中：
//! - Windows: Credential Manager
//! - macOS: Keychain
//! - Linux: Secret Service (GNOME Keyring / KWallet)

use keyring::Entry;

const SERVICE_NAME: &str = "blog-admin";

/// 钥匙串访问错误
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Failed to open keyring entry for {actor_id}: {source}")]
    Entry {
        actor_id: String,
        #[source]
        source: keyring::Error,
    },

    #[error("Failed to read session token for {actor_id}: {source}")]
    Read {
        actor_id: String,
        #[source]
        source: keyring::Error,
    },
}

/// 会话令牌来源
pub trait SessionStore: Send + Sync {
    /// 读取某个用户的令牌；不存在时返回 `None`
    fn load(&self, actor_id: &str) -> Result<Option<String>, SessionError>;
}

/// 基于系统钥匙串的会话令牌存储
pub struct KeyringSessionStore;

impl SessionStore for KeyringSessionStore {
    fn load(&self, actor_id: &str) -> Result<Option<String>, SessionError> {
        let entry = Entry::new(SERVICE_NAME, actor_id).map_err(|source| SessionError::Entry {
            actor_id: actor_id.to_string(),
            source,
        })?;

        match entry.get_password() {
            Ok(token) => Ok(Some(token)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(source) => Err(SessionError::Read {
                actor_id: actor_id.to_string(),
                source,
            }),
        }
    }
}

/// 解析会话令牌：环境变量 → 钥匙串 → 无
///
/// 钥匙串不可用时只记录警告，以未登录状态继续。
pub fn resolve_session_token(
    env_token: Option<String>,
    actor_id: &str,
    store: &dyn SessionStore,
) -> Option<String> {
    if let Some(token) = env_token.filter(|t| !t.is_empty()) {
        log::debug!("Using session token from environment");
        return Some(token);
    }

    if actor_id.is_empty() {
        return None;
    }

    match store.load(actor_id) {
        Ok(Some(token)) if !token.is_empty() => {
            log::debug!("Using session token from keyring for {actor_id}");
            Some(token)
        }
        Ok(_) => {
            log::info!("No session token stored for {actor_id}");
            None
        }
        Err(e) => {
            log::warn!("{e}");
            None
        }
    }
}
