//! 简体中文

use super::keys::{
    CommonTexts, DashboardTexts, EditorTexts, HelpTexts, HintTexts, ModalTexts, PageTexts,
    PostTexts, StatusTexts, TabTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        app_name: "博客管理",
        loading: "加载中...",
        no_data: "暂无数据",
        error: "错误",
    },

    hints: HintTexts {
        switch_panels: "切换面板",
        navigate: "导航",
        select: "选择",
        open: "打开",
        refresh: "刷新",
        next_field: "下一字段",
        upload: "上传",
        submit: "更新文章",
        dismiss: "关闭提示",
        back: "返回",
        help: "帮助",
        quit: "退出",
    },

    tabs: TabTexts {
        dash: "仪表盘",
        profile: "个人资料",
        posts: "文章",
        users: "用户",
        creation: "新建",
    },

    pages: PageTexts {
        dashboard: "仪表盘",
        update_post: "编辑文章",
        post: "文章",
    },

    dashboard: DashboardTexts {
        total_posts: "文章总数",
        last_month_posts: "近一个月",
        no_posts: "还没有文章",
        not_signed_in: "未登录。设置 BLOG_ADMIN_ACTOR_ID 后可列出你的文章。",
        col_title: "标题",
        col_category: "分类",
        col_updated: "更新时间",
        untitled: "（无标题）",
        profile_id: "ID",
        profile_username: "用户名",
        profile_email: "邮箱",
        profile_role: "角色",
        role_admin: "管理员",
        role_user: "普通用户",
        users_info: "用户管理请使用网页版仪表盘。",
        creation_info: "请在网页版仪表盘中新建文章，然后在“文章”标签页中编辑。",
    },

    editor: EditorTexts {
        title_label: "标题",
        content_label: "正文",
        image_label: "图片文件",
        image_placeholder: "输入图片路径，按 Enter 上传",
        current_image: "封面图片",
        no_image: "（无）",
        uploading: "上传中",
        submitting: "更新中...",
        loading_post: "正在加载文章...",
    },

    post: PostTexts {
        published: "文章已更新",
        back_hint: "按 Esc 返回文章列表",
    },

    status: StatusTexts {
        refreshing: "刷新中...",
        upload_started: "开始上传",
        upload_done: "图片已上传",
        upload_busy: "已有上传正在进行",
        submitting: "正在更新文章...",
        post_not_ready: "文章尚未加载完成",
    },

    modal: ModalTexts {
        not_signed_in_title: "未登录",
        not_signed_in_message: "更新文章前请设置 BLOG_ADMIN_ACTOR_ID（或 config.json 中的 actor.id）。",
        close_hint: "按 Esc 关闭",
    },

    help: HelpTexts {
        title: "快捷键",
        entries: &[
            ("Tab / ←→", "切换面板"),
            ("↑↓ / j k", "移动选择或切换字段"),
            ("Enter", "打开文章 / 上传图片"),
            ("Alt+u", "上传图片"),
            ("Alt+s", "更新文章"),
            ("Alt+x", "关闭上传错误提示"),
            ("Alt+r", "刷新"),
            ("Esc", "返回 / 关闭"),
            ("Alt+h / ?", "帮助"),
            ("Alt+q / Ctrl+c", "退出"),
        ],
    },
};
