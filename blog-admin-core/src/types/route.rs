//! 应用内路由：路径解析与仪表盘标签页选择

use std::fmt;

use url::Url;

/// 解析相对路径时使用的虚拟根地址
const ROUTE_BASE: &str = "http://blog-admin.local/";

/// 仪表盘标签页
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tab {
    Profile,
    Posts,
    Users,
    Dash,
    Creation,
}

impl Tab {
    /// 侧边栏中的顺序
    pub const ALL: [Tab; 5] = [
        Tab::Dash,
        Tab::Profile,
        Tab::Posts,
        Tab::Users,
        Tab::Creation,
    ];

    /// 查询参数中的取值
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Profile => "profile",
            Self::Posts => "posts",
            Self::Users => "users",
            Self::Dash => "dash",
            Self::Creation => "creation",
        }
    }

    /// 精确匹配（区分大小写，不去空白）
    pub fn from_query_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == value)
    }
}

/// 仪表盘标签页路由
///
/// 保存查询参数里的原始取值：未知取值只渲染侧边栏，不回退到任何面板。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabRouter {
    current: Option<String>,
}

impl TabRouter {
    /// 查询串变化时调用（含首次挂载）
    ///
    /// `tab` 存在且非空时替换当前值；不存在时保留上一次的值。
    pub fn on_query(&mut self, query: &str) {
        if let Some(tab) = query_param(query, "tab") {
            self.current = Some(tab);
        }
    }

    /// 直接选择某个标签页（侧边栏点击）
    pub fn select(&mut self, tab: Tab) {
        self.current = Some(tab.as_str().to_string());
    }

    /// 当前的原始取值
    pub fn raw(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// 要渲染的面板；`None` 表示只渲染侧边栏
    pub fn selected(&self) -> Option<Tab> {
        self.current.as_deref().and_then(Tab::from_query_value)
    }
}

/// 从查询串中取出非空参数
fn query_param(query: &str, name: &str) -> Option<String> {
    let query = query.strip_prefix('?').unwrap_or(query);
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(k, _)| k == name)
        .map(|(_, v)| v.into_owned())
        .filter(|v| !v.is_empty())
}

/// 应用内路由
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/dashboard?tab=<tab>`
    Dashboard { query: String },
    /// `/update-post/<postId>`
    UpdatePost { post_id: String },
    /// `/post/<slug>`
    Post { slug: String },
}

impl Route {
    /// 指定标签页的仪表盘
    pub fn dashboard(tab: Tab) -> Self {
        Self::Dashboard {
            query: format!("tab={}", tab.as_str()),
        }
    }

    /// 解析路径；无法识别的路径回到仪表盘
    pub fn parse(input: &str) -> Self {
        let fallback = Self::Dashboard {
            query: String::new(),
        };
        let Ok(base) = Url::parse(ROUTE_BASE) else {
            return fallback;
        };
        let Ok(url) = base.join(input.trim()) else {
            log::warn!("Unparseable route {input:?}, falling back to dashboard");
            return fallback;
        };

        let segments: Vec<String> = url
            .path_segments()
            .map(|s| {
                s.filter(|seg| !seg.is_empty())
                    .map(|seg| {
                        urlencoding::decode(seg)
                            .map_or_else(|_| seg.to_string(), std::borrow::Cow::into_owned)
                    })
                    .collect()
            })
            .unwrap_or_default();

        match segments.as_slice() {
            [first] if first == "dashboard" => Self::Dashboard {
                query: url.query().unwrap_or_default().to_string(),
            },
            [first, id] if first == "update-post" => Self::UpdatePost {
                post_id: id.clone(),
            },
            [first, slug] if first == "post" => Self::Post { slug: slug.clone() },
            _ => {
                log::warn!("Unknown route {input:?}, falling back to dashboard");
                fallback
            }
        }
    }

    /// 路径形式
    pub fn path(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dashboard { query } if query.is_empty() => f.write_str("/dashboard"),
            Self::Dashboard { query } => write!(f, "/dashboard?{query}"),
            Self::UpdatePost { post_id } => write!(f, "/update-post/{post_id}"),
            Self::Post { slug } => write!(f, "/post/{slug}"),
        }
    }
}
