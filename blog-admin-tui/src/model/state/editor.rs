//! 文章编辑界面状态

use std::path::PathBuf;

use blog_admin_core::{EditorForm, ScreenScope};

/// 表单字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorField {
    #[default]
    Title,
    Content,
    /// 要上传的图片路径
    Image,
}

impl EditorField {
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Title => Self::Content,
            Self::Content => Self::Image,
            Self::Image => Self::Title,
        }
    }

    #[must_use]
    pub fn prev(self) -> Self {
        match self {
            Self::Title => Self::Image,
            Self::Content => Self::Title,
            Self::Image => Self::Content,
        }
    }
}

/// 编辑界面状态
#[derive(Debug)]
pub struct EditorState {
    pub form: EditorForm,
    /// 当前输入字段
    pub field: EditorField,
    /// 图片路径输入框
    pub image_path: String,
    /// 提交请求进行中
    pub submitting: bool,
    scope: ScreenScope,
}

impl EditorState {
    pub fn new(post_id: impl Into<String>) -> Self {
        Self {
            form: EditorForm::new(post_id),
            field: EditorField::default(),
            image_path: String::new(),
            submitting: false,
            scope: ScreenScope::new(),
        }
    }

    pub fn scope(&self) -> &ScreenScope {
        &self.scope
    }

    /// 选中的文件；输入框为空时视为未选择
    pub fn selected_file(&self) -> Option<PathBuf> {
        let path = self.image_path.trim();
        (!path.is_empty()).then(|| PathBuf::from(path))
    }

    /// 向当前字段输入一个字符
    pub fn input(&mut self, c: char) {
        match self.field {
            EditorField::Title => {
                let mut title = self.form.draft().title().to_string();
                title.push(c);
                self.form.set_title(title);
            }
            EditorField::Content => {
                let mut content = self.form.draft().content().to_string();
                content.push(c);
                self.form.set_content(content);
            }
            EditorField::Image => self.image_path.push(c),
        }
    }

    /// 删除当前字段的最后一个字符
    pub fn backspace(&mut self) {
        match self.field {
            EditorField::Title => {
                let mut title = self.form.draft().title().to_string();
                title.pop();
                self.form.set_title(title);
            }
            EditorField::Content => {
                let mut content = self.form.draft().content().to_string();
                content.pop();
                self.form.set_content(content);
            }
            EditorField::Image => {
                self.image_path.pop();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_cycle() {
        let mut f = EditorField::Title;
        for _ in 0..3 {
            f = f.next();
        }
        assert_eq!(f, EditorField::Title);
        assert_eq!(EditorField::Title.prev(), EditorField::Image);
    }

    #[test]
    fn typing_goes_to_the_focused_field() {
        let mut state = EditorState::new("p1");
        state.input('H');
        state.input('i');
        state.field = EditorField::Content;
        state.input('<');
        state.field = EditorField::Image;
        for c in "/tmp/a.png".chars() {
            state.input(c);
        }
        state.backspace();

        assert_eq!(state.form.draft().title(), "Hi");
        assert_eq!(state.form.draft().content(), "<");
        assert_eq!(state.image_path, "/tmp/a.pn");
    }

    #[test]
    fn blank_path_is_no_selection() {
        let mut state = EditorState::new("p1");
        assert_eq!(state.selected_file(), None);
        state.image_path = "   ".to_string();
        assert_eq!(state.selected_file(), None);
        state.image_path = " /tmp/cat.png ".to_string();
        assert_eq!(state.selected_file(), Some(PathBuf::from("/tmp/cat.png")));
    }
}
