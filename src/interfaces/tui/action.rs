//! Action 系统
//!
//! 按键先转换为 Action，再由 App 执行

use super::app::CurrentScreen;

/// TUI 动作枚举
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Action {
    // ========== 导航 ==========
    /// 向上移动选择
    MoveUp,
    /// 向下移动选择
    MoveDown,
    /// 切换到指定屏幕
    SwitchScreen(CurrentScreen),
    /// 返回上一个屏幕
    GoBack,

    // ========== 搜索 ==========
    /// 聚焦搜索框
    FocusSearch,
    /// 离开搜索框
    BlurSearch,
    /// 输入字符
    InputChar(char),
    /// 删除字符（Backspace）
    DeleteChar,
    /// 搜索按钮
    SubmitSearch,

    // ========== 商品 ==========
    /// 点赞选中商品（点击图片）
    LikeSelected,

    // ========== 系统 ==========
    /// 显示帮助
    ShowHelp,
    /// 退出程序
    Quit,
    /// 无操作
    #[default]
    Noop,
}

impl Action {
    /// 判断是否是无操作
    pub fn is_noop(&self) -> bool {
        matches!(self, Action::Noop)
    }

    /// 判断是否应该导致程序退出
    pub fn should_quit(&self) -> bool {
        matches!(self, Action::Quit)
    }
}
