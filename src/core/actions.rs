//! 액션 시스템: 단일 진실 원천 (Single Source of Truth)
//!
//! 모든 키 바인딩과 커맨드바 항목이 이 모듈의 레지스트리를 참조합니다.

use crate::ui::components::command_bar::CommandItem;
use crossterm::event::{KeyCode, KeyModifiers};
use std::sync::LazyLock;

/// 모든 가능한 액션의 열거
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // Navigation
    NextPage,
    PrevPage,
    GoToDashboard,
    GoToPolyhouse,
    GoToZelTrade,
    GoToZelBasket,
    GoToAuth,
    // Page
    SelectPrev,
    SelectNext,
    Decrease,
    Increase,
    ToggleItem,
    Activate,
    StartEditing,
    Refresh,
    TogglePasswordVisibility,
    // Recovery
    Retry,
    ReloadFull,
    SimulateFailure,
    // System
    ToggleTheme,
    Quit,
}

/// 액션 카테고리
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionCategory {
    Navigation,
    Page,
    Recovery,
    System,
}

/// 커맨드바 표시 정보
pub struct CommandBarEntry {
    pub key: &'static str,
    pub label: &'static str,
    pub priority: u8,
}

/// 액션 정의 (메타데이터)
pub struct ActionDef {
    pub action: Action,
    pub id: &'static str,
    pub label: &'static str,
    pub category: ActionCategory,
    pub command_bar: Option<CommandBarEntry>,
}

/// 키 바인딩 정의
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: Option<KeyModifiers>, // None = any modifier
    pub action: Action,
}

/// 모든 액션 메타데이터
pub static ACTION_DEFS: &[ActionDef] = &[
    // Navigation
    ActionDef {
        action: Action::NextPage,
        id: "next_page",
        label: "Next page",
        category: ActionCategory::Navigation,
        command_bar: Some(CommandBarEntry {
            key: "Tab",
            label: "Page",
            priority: 10,
        }),
    },
    ActionDef {
        action: Action::PrevPage,
        id: "prev_page",
        label: "Previous page",
        category: ActionCategory::Navigation,
        command_bar: None,
    },
    ActionDef {
        action: Action::GoToDashboard,
        id: "go_dashboard",
        label: "Dashboard",
        category: ActionCategory::Navigation,
        command_bar: Some(CommandBarEntry {
            key: "1-5",
            label: "Go",
            priority: 11,
        }),
    },
    ActionDef {
        action: Action::GoToPolyhouse,
        id: "go_polyhouse",
        label: "Polyhouse",
        category: ActionCategory::Navigation,
        command_bar: None,
    },
    ActionDef {
        action: Action::GoToZelTrade,
        id: "go_zeltrade",
        label: "ZelTrade",
        category: ActionCategory::Navigation,
        command_bar: None,
    },
    ActionDef {
        action: Action::GoToZelBasket,
        id: "go_zelbasket",
        label: "ZelBasket",
        category: ActionCategory::Navigation,
        command_bar: None,
    },
    ActionDef {
        action: Action::GoToAuth,
        id: "go_auth",
        label: "Login",
        category: ActionCategory::Navigation,
        command_bar: None,
    },
    // Page
    ActionDef {
        action: Action::SelectPrev,
        id: "select_prev",
        label: "Select previous",
        category: ActionCategory::Page,
        command_bar: Some(CommandBarEntry {
            key: "j/k",
            label: "Select",
            priority: 20,
        }),
    },
    ActionDef {
        action: Action::SelectNext,
        id: "select_next",
        label: "Select next",
        category: ActionCategory::Page,
        command_bar: None,
    },
    ActionDef {
        action: Action::Decrease,
        id: "decrease",
        label: "Decrease / previous option",
        category: ActionCategory::Page,
        command_bar: Some(CommandBarEntry {
            key: "h/l",
            label: "Adjust",
            priority: 21,
        }),
    },
    ActionDef {
        action: Action::Increase,
        id: "increase",
        label: "Increase / next option",
        category: ActionCategory::Page,
        command_bar: None,
    },
    ActionDef {
        action: Action::ToggleItem,
        id: "toggle_item",
        label: "Toggle",
        category: ActionCategory::Page,
        command_bar: Some(CommandBarEntry {
            key: "Spc",
            label: "Toggle",
            priority: 22,
        }),
    },
    ActionDef {
        action: Action::Activate,
        id: "activate",
        label: "Activate",
        category: ActionCategory::Page,
        command_bar: None,
    },
    ActionDef {
        action: Action::StartEditing,
        id: "start_editing",
        label: "Edit field / search",
        category: ActionCategory::Page,
        command_bar: Some(CommandBarEntry {
            key: "/",
            label: "Edit",
            priority: 23,
        }),
    },
    ActionDef {
        action: Action::Refresh,
        id: "refresh",
        label: "Refresh",
        category: ActionCategory::Page,
        command_bar: Some(CommandBarEntry {
            key: "F5",
            label: "Refresh",
            priority: 24,
        }),
    },
    ActionDef {
        action: Action::TogglePasswordVisibility,
        id: "toggle_password",
        label: "Show/hide password",
        category: ActionCategory::Page,
        command_bar: None,
    },
    // Recovery
    ActionDef {
        action: Action::Retry,
        id: "retry",
        label: "Try again",
        category: ActionCategory::Recovery,
        command_bar: None,
    },
    ActionDef {
        action: Action::ReloadFull,
        id: "reload_full",
        label: "Reload",
        category: ActionCategory::Recovery,
        command_bar: Some(CommandBarEntry {
            key: "^R",
            label: "Reload",
            priority: 40,
        }),
    },
    ActionDef {
        action: Action::SimulateFailure,
        id: "simulate_failure",
        label: "Simulate render failure",
        category: ActionCategory::Recovery,
        command_bar: None,
    },
    // System
    ActionDef {
        action: Action::ToggleTheme,
        id: "toggle_theme",
        label: "Toggle light/dark",
        category: ActionCategory::System,
        command_bar: Some(CommandBarEntry {
            key: "t",
            label: "Theme",
            priority: 30,
        }),
    },
    ActionDef {
        action: Action::Quit,
        id: "quit",
        label: "Quit",
        category: ActionCategory::System,
        command_bar: Some(CommandBarEntry {
            key: "q",
            label: "Quit",
            priority: 50,
        }),
    },
];

fn build_key_bindings() -> Vec<KeyBinding> {
    let mut bindings = Vec::new();
    let mut bind = |code: KeyCode, modifiers: Option<KeyModifiers>, action: Action| {
        bindings.push(KeyBinding {
            code,
            modifiers,
            action,
        });
    };
    let none = Some(KeyModifiers::NONE);
    let ctrl = Some(KeyModifiers::CONTROL);

    // System (Ctrl 조합을 먼저 검사)
    bind(KeyCode::Char('c'), ctrl, Action::Quit);
    bind(KeyCode::Char('r'), ctrl, Action::ReloadFull);
    bind(KeyCode::Char('q'), none, Action::Quit);
    bind(KeyCode::Char('t'), none, Action::ToggleTheme);

    // Navigation
    bind(KeyCode::Tab, None, Action::NextPage);
    bind(KeyCode::BackTab, None, Action::PrevPage);
    bind(KeyCode::Char('1'), none, Action::GoToDashboard);
    bind(KeyCode::Char('2'), none, Action::GoToPolyhouse);
    bind(KeyCode::Char('3'), none, Action::GoToZelTrade);
    bind(KeyCode::Char('4'), none, Action::GoToZelBasket);
    bind(KeyCode::Char('5'), none, Action::GoToAuth);

    // Page
    bind(KeyCode::Up, None, Action::SelectPrev);
    bind(KeyCode::Char('k'), none, Action::SelectPrev);
    bind(KeyCode::Down, None, Action::SelectNext);
    bind(KeyCode::Char('j'), none, Action::SelectNext);
    bind(KeyCode::Left, None, Action::Decrease);
    bind(KeyCode::Char('h'), none, Action::Decrease);
    bind(KeyCode::Right, None, Action::Increase);
    bind(KeyCode::Char('l'), none, Action::Increase);
    bind(KeyCode::Char(' '), None, Action::ToggleItem);
    bind(KeyCode::Enter, None, Action::Activate);
    bind(KeyCode::Char('/'), None, Action::StartEditing);
    bind(KeyCode::Char('i'), none, Action::StartEditing);
    bind(KeyCode::F(5), None, Action::Refresh);
    bind(KeyCode::Char('v'), none, Action::TogglePasswordVisibility);

    // Recovery
    bind(KeyCode::Char('r'), none, Action::Retry);
    bind(KeyCode::F(12), None, Action::SimulateFailure);

    bindings
}

static KEY_BINDINGS: LazyLock<Vec<KeyBinding>> = LazyLock::new(build_key_bindings);

/// 키 바인딩 목록 조회 (1회 초기화 후 재사용)
pub fn key_bindings() -> &'static [KeyBinding] {
    KEY_BINDINGS.as_slice()
}

/// 키 입력으로 액션 조회
pub fn find_action(modifiers: KeyModifiers, code: KeyCode) -> Option<Action> {
    for binding in key_bindings() {
        let code_matches = binding.code == code;
        let mod_matches = match binding.modifiers {
            None => true, // any modifier
            Some(required) => modifiers == required,
        };
        if code_matches && mod_matches {
            return Some(binding.action);
        }
    }
    None
}

impl Action {
    pub fn def(self) -> Option<&'static ActionDef> {
        ACTION_DEFS.iter().find(|d| d.action == self)
    }
}

/// 커맨드바용 항목 생성 (priority 순 정렬)
///
/// 경계가 실패 상태면 복구 항목(재시도/재시작)을 앞에 둡니다.
pub fn generate_command_bar_items(boundary_failed: bool, retry_enabled: bool) -> Vec<CommandItem> {
    let mut entries: Vec<&CommandBarEntry> = ACTION_DEFS
        .iter()
        .filter(|def| !boundary_failed || def.category != ActionCategory::Page)
        .filter_map(|def| def.command_bar.as_ref())
        .collect();

    entries.sort_by_key(|cb| cb.priority);

    let mut items: Vec<CommandItem> = entries
        .into_iter()
        .map(|cb| CommandItem::new(cb.key, cb.label))
        .collect();

    if boundary_failed {
        items.insert(0, CommandItem::new("r", "Retry").enabled(retry_enabled));
    }
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_ids_are_unique() {
        let mut ids: Vec<&str> = ACTION_DEFS.iter().map(|d| d.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), ACTION_DEFS.len());
        assert_eq!(Action::ReloadFull.def().map(|d| d.id), Some("reload_full"));
    }

    #[test]
    fn test_every_action_has_def() {
        let actions = [
            Action::NextPage,
            Action::PrevPage,
            Action::GoToDashboard,
            Action::GoToPolyhouse,
            Action::GoToZelTrade,
            Action::GoToZelBasket,
            Action::GoToAuth,
            Action::SelectPrev,
            Action::SelectNext,
            Action::Decrease,
            Action::Increase,
            Action::ToggleItem,
            Action::Activate,
            Action::StartEditing,
            Action::Refresh,
            Action::TogglePasswordVisibility,
            Action::Retry,
            Action::ReloadFull,
            Action::SimulateFailure,
            Action::ToggleTheme,
            Action::Quit,
        ];
        for action in actions {
            assert!(action.def().is_some(), "{:?}", action);
        }
    }

    #[test]
    fn test_find_action_basic_keys() {
        assert_eq!(
            find_action(KeyModifiers::NONE, KeyCode::Char('t')),
            Some(Action::ToggleTheme)
        );
        assert_eq!(
            find_action(KeyModifiers::NONE, KeyCode::Char('3')),
            Some(Action::GoToZelTrade)
        );
        assert_eq!(
            find_action(KeyModifiers::SHIFT, KeyCode::BackTab),
            Some(Action::PrevPage)
        );
        assert_eq!(find_action(KeyModifiers::NONE, KeyCode::Char('z')), None);
    }

    #[test]
    fn test_retry_and_reload_are_distinct() {
        assert_eq!(
            find_action(KeyModifiers::NONE, KeyCode::Char('r')),
            Some(Action::Retry)
        );
        assert_eq!(
            find_action(KeyModifiers::CONTROL, KeyCode::Char('r')),
            Some(Action::ReloadFull)
        );
        assert_eq!(
            find_action(KeyModifiers::CONTROL, KeyCode::Char('c')),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_command_bar_sorted_by_priority() {
        let items = generate_command_bar_items(false, false);
        let keys: Vec<_> = items.iter().map(|i| i.key.as_str()).collect();
        assert_eq!(keys.first(), Some(&"Tab"));
        assert_eq!(keys.last(), Some(&"q"));
        assert!(!keys.contains(&"r"));
    }

    #[test]
    fn test_command_bar_when_failed() {
        let items = generate_command_bar_items(true, false);
        assert_eq!(items[0].key, "r");
        assert!(!items[0].enabled);
        assert!(items.iter().all(|i| i.key != "j/k"));
        assert!(items.iter().any(|i| i.key == "^R"));
    }
}
