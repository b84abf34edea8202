//! English (US)

use super::keys::{
    CommonTexts, DashboardTexts, EditorTexts, HelpTexts, HintTexts, ModalTexts, PageTexts,
    PostTexts, StatusTexts, TabTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        app_name: "Blog Admin",
        loading: "Loading...",
        no_data: "No data",
        error: "Error",
    },

    hints: HintTexts {
        switch_panels: "Switch Panels",
        navigate: "Navigate",
        select: "Select",
        open: "Open",
        refresh: "Refresh",
        next_field: "Next Field",
        upload: "Upload",
        submit: "Update post",
        dismiss: "Dismiss",
        back: "Back",
        help: "Help",
        quit: "Quit",
    },

    tabs: TabTexts {
        dash: "Dashboard",
        profile: "Profile",
        posts: "Posts",
        users: "Users",
        creation: "Create",
    },

    pages: PageTexts {
        dashboard: "Dashboard",
        update_post: "Update post",
        post: "Post",
    },

    dashboard: DashboardTexts {
        total_posts: "Total posts",
        last_month_posts: "Last month",
        no_posts: "No posts yet",
        not_signed_in: "No signed-in user. Set BLOG_ADMIN_ACTOR_ID to list your posts.",
        col_title: "Title",
        col_category: "Category",
        col_updated: "Updated",
        untitled: "(untitled)",
        profile_id: "ID",
        profile_username: "Username",
        profile_email: "Email",
        profile_role: "Role",
        role_admin: "Admin",
        role_user: "User",
        users_info: "User management is done in the web dashboard.",
        creation_info: "Create a post in the web dashboard, then edit it from the Posts tab.",
    },

    editor: EditorTexts {
        title_label: "Title",
        content_label: "Content",
        image_label: "Image file",
        image_placeholder: "Path to an image, then Enter to upload",
        current_image: "Image",
        no_image: "(none)",
        uploading: "Uploading",
        submitting: "Updating...",
        loading_post: "Loading post...",
    },

    post: PostTexts {
        published: "Post updated",
        back_hint: "Press Esc to return to your posts",
    },

    status: StatusTexts {
        refreshing: "Refreshing...",
        upload_started: "Upload started",
        upload_done: "Image uploaded",
        upload_busy: "An upload is already in progress",
        submitting: "Updating post...",
        post_not_ready: "The post has not been loaded yet",
    },

    modal: ModalTexts {
        not_signed_in_title: "Not signed in",
        not_signed_in_message: "Set BLOG_ADMIN_ACTOR_ID (or actor.id in config.json) before updating posts.",
        close_hint: "Esc to close",
    },

    help: HelpTexts {
        title: "Keyboard Shortcuts",
        entries: &[
            ("Tab / ←→", "Switch panels"),
            ("↑↓ / j k", "Move selection or field"),
            ("Enter", "Open post / upload image"),
            ("Alt+u", "Upload image"),
            ("Alt+s", "Update post"),
            ("Alt+x", "Dismiss upload error"),
            ("Alt+r", "Refresh"),
            ("Esc", "Back / close"),
            ("Alt+h / ?", "Help"),
            ("Alt+q / Ctrl+c", "Quit"),
        ],
    },
};
