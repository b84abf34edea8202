//! 内容面板消息

/// 内容面板消息
#[derive(Debug, Clone)]
pub enum ContentMessage {
    // ========== 列表导航 ==========
    /// 选择上一项
    SelectPrevious,
    /// 选择下一项
    SelectNext,
    /// 跳转到第一项
    SelectFirst,
    /// 跳转到最后一项
    SelectLast,
    /// 确认选择（打开文章或触发当前字段的动作）
    Confirm,

    // ========== 编辑表单 ==========
    /// 下一个输入字段
    NextField,
    /// 上一个输入字段
    PrevField,
    /// 输入字符
    Input(char),
    /// 删除字符（Backspace）
    Backspace,
    /// 上传选中的图片
    Upload,
    /// 提交更新
    Submit,
    /// 关闭上传错误提示
    DismissError,
}
