use serde::{Deserialize, Serialize};

/// 当前登录用户
///
/// 显式传给需要身份的操作（提交更新等），不存在全局用户状态。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    /// 用户 ID（`_id`）
    pub id: String,
    /// 用户名
    #[serde(default)]
    pub username: String,
    /// 邮箱
    #[serde(default)]
    pub email: String,
    /// 是否管理员
    #[serde(default)]
    pub is_admin: bool,
    /// 会话令牌，不写入配置文件
    #[serde(skip)]
    pub session_token: Option<String>,
}

impl Actor {
    /// 是否已配置身份
    pub fn is_signed_in(&self) -> bool {
        !self.id.is_empty()
    }

    /// 用于界面显示的名称
    pub fn display_name(&self) -> &str {
        if self.username.is_empty() {
            &self.id
        } else {
            &self.username
        }
    }
}
