//! 终端事件 → 消息

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, ContentMessage, ModalMessage, NavigationMessage};
use crate::model::{App, Page};

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        // 终端窗口大小改变时下一帧自动重绘
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat
    // 避免 Windows 终端上按键重复
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // 如果有弹窗打开，优先处理弹窗输入
    if app.modal.is_open() {
        return handle_modal_keys(key);
    }

    // 全局快捷键（无论焦点在哪里）
    if DefaultKeymap::FORCE_QUIT.matches(&key) || DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }
    if DefaultKeymap::HELP.matches(&key) {
        return AppMessage::ShowHelp;
    }
    if DefaultKeymap::REFRESH.matches(&key) {
        return AppMessage::Refresh;
    }
    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::GoBack;
    }
    if DefaultKeymap::TOGGLE_FOCUS.matches(&key) {
        return AppMessage::ToggleFocus;
    }

    // 编辑表单占用普通字符输入
    let editing = app.focus.is_content() && app.current_page == Page::UpdatePost;
    if editing {
        return handle_editor_keys(key);
    }

    if key.modifiers.is_empty() && key.code == KeyCode::Char('?') {
        return AppMessage::ShowHelp;
    }

    // 根据焦点位置处理按键
    if app.focus.is_navigation() {
        handle_navigation_keys(key)
    } else {
        handle_list_keys(key)
    }
}

/// 处理侧边栏的按键
fn handle_navigation_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Navigation(NavigationMessage::SelectPrevious),
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Navigation(NavigationMessage::SelectNext),
        KeyCode::Enter => AppMessage::Navigation(NavigationMessage::Confirm),
        KeyCode::Home => AppMessage::Navigation(NavigationMessage::SelectFirst),
        KeyCode::End => AppMessage::Navigation(NavigationMessage::SelectLast),
        KeyCode::Right | KeyCode::Char('l') => AppMessage::ToggleFocus,
        _ => AppMessage::Noop,
    }
}

/// 处理仪表盘列表的按键
fn handle_list_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Content(ContentMessage::SelectPrevious),
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Content(ContentMessage::SelectNext),
        KeyCode::Enter => AppMessage::Content(ContentMessage::Confirm),
        KeyCode::Home => AppMessage::Content(ContentMessage::SelectFirst),
        KeyCode::End => AppMessage::Content(ContentMessage::SelectLast),
        KeyCode::Left | KeyCode::Char('h') => AppMessage::ToggleFocus,
        _ => AppMessage::Noop,
    }
}

/// 处理编辑表单的按键
fn handle_editor_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::ACTION_UPLOAD.matches(&key) {
        return AppMessage::Content(ContentMessage::Upload);
    }
    if DefaultKeymap::ACTION_SUBMIT.matches(&key) {
        return AppMessage::Content(ContentMessage::Submit);
    }
    if DefaultKeymap::ACTION_DISMISS.matches(&key) {
        return AppMessage::Content(ContentMessage::DismissError);
    }

    match key.code {
        KeyCode::Down => AppMessage::Content(ContentMessage::NextField),
        KeyCode::Up | KeyCode::BackTab => AppMessage::Content(ContentMessage::PrevField),
        KeyCode::Enter => AppMessage::Content(ContentMessage::Confirm),
        KeyCode::Backspace => AppMessage::Content(ContentMessage::Backspace),
        KeyCode::Char(ch) if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT => {
            AppMessage::Content(ContentMessage::Input(ch))
        }
        _ => AppMessage::Noop,
    }
}

/// 处理弹窗中的按键：帮助和错误弹窗只响应关闭
fn handle_modal_keys(key: KeyEvent) -> AppMessage {
    match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c'))
        | (KeyModifiers::NONE, KeyCode::Esc | KeyCode::Enter) => {
            AppMessage::Modal(ModalMessage::Close)
        }
        _ => AppMessage::Noop,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blog_admin_core::types::{Actor, Route};
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    fn editing_app() -> App {
        let mut app = App::new(Actor::default());
        crate::update::navigate(&mut app, Route::parse("/update-post/p1"));
        app
    }

    #[test]
    fn plain_characters_are_typed_in_the_editor() {
        let app = editing_app();
        for ch in ['q', '?', 'j'] {
            let msg = handle_event(press(KeyCode::Char(ch), KeyModifiers::NONE), &app);
            assert!(
                matches!(msg, AppMessage::Content(ContentMessage::Input(c)) if c == ch),
                "{ch}: {msg:?}"
            );
        }
        let upper = handle_event(press(KeyCode::Char('A'), KeyModifiers::SHIFT), &app);
        assert!(matches!(upper, AppMessage::Content(ContentMessage::Input('A'))));
    }

    #[test]
    fn editor_actions_use_alt() {
        let app = editing_app();
        let submit = handle_event(press(KeyCode::Char('s'), KeyModifiers::ALT), &app);
        assert!(matches!(submit, AppMessage::Content(ContentMessage::Submit)));
        let upload = handle_event(press(KeyCode::Char('u'), KeyModifiers::ALT), &app);
        assert!(matches!(upload, AppMessage::Content(ContentMessage::Upload)));
        let quit = handle_event(press(KeyCode::Char('q'), KeyModifiers::ALT), &app);
        assert!(matches!(quit, AppMessage::Quit));
    }

    #[test]
    fn arrows_move_between_fields() {
        let app = editing_app();
        let down = handle_event(press(KeyCode::Down, KeyModifiers::NONE), &app);
        assert!(matches!(down, AppMessage::Content(ContentMessage::NextField)));
        let up = handle_event(press(KeyCode::Up, KeyModifiers::NONE), &app);
        assert!(matches!(up, AppMessage::Content(ContentMessage::PrevField)));
    }

    #[test]
    fn question_mark_opens_help_outside_the_editor() {
        let app = App::new(Actor::default());
        let msg = handle_event(press(KeyCode::Char('?'), KeyModifiers::NONE), &app);
        assert!(matches!(msg, AppMessage::ShowHelp));
    }

    #[test]
    fn open_modal_swallows_keys() {
        let mut app = App::new(Actor::default());
        app.modal.show_help();
        let typed = handle_event(press(KeyCode::Char('x'), KeyModifiers::NONE), &app);
        assert!(matches!(typed, AppMessage::Noop));
        let esc = handle_event(press(KeyCode::Esc, KeyModifiers::NONE), &app);
        assert!(matches!(esc, AppMessage::Modal(ModalMessage::Close)));
    }

    #[test]
    fn release_events_are_ignored() {
        let app = App::new(Actor::default());
        let release = Event::Key(KeyEvent {
            code: KeyCode::Enter,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert!(matches!(handle_event(release, &app), AppMessage::Noop));
    }
}
