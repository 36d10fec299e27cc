use super::controllers::page_controller::submit_auth;
use super::*;
use crate::models::TextInput;
use crossterm::event::{KeyCode, KeyModifiers};

impl App {
    /// 입력 모드 키 처리
    ///
    /// 문자 키는 모두 입력으로 소비되며 액션 테이블을 거치지 않습니다.
    pub fn handle_editing_key(&mut self, modifiers: KeyModifiers, code: KeyCode) {
        if modifiers == KeyModifiers::CONTROL {
            match code {
                KeyCode::Char('c') => self.quit(),
                KeyCode::Char('r') => self.reload_full(),
                _ => {}
            }
            return;
        }

        match (self.page, code) {
            (_, KeyCode::Esc) => self.stop_editing(),
            (Page::Auth, KeyCode::Tab | KeyCode::Down) => self.pages.auth.focus_next(),
            (Page::Auth, KeyCode::BackTab | KeyCode::Up) => self.pages.auth.focus_prev(),
            (Page::Auth, KeyCode::Enter) => submit_auth(self),
            (_, KeyCode::Enter) => self.stop_editing(),
            _ => {
                if let Some(input) = self.active_input() {
                    edit_input(input, code);
                }
                if self.page == Page::ZelTrade {
                    self.pages.market.clamp_selection();
                }
            }
        }
    }

    /// 입력 모드 종료
    pub fn stop_editing(&mut self) {
        self.editing = false;
        if self.page == Page::ZelTrade {
            self.pages.market.clamp_selection();
        }
    }

    /// 현재 입력 대상 필드
    fn active_input(&mut self) -> Option<&mut TextInput> {
        match self.page {
            Page::ZelTrade => Some(&mut self.pages.market.search),
            Page::Auth => Some(self.pages.auth.focused_input_mut()),
            _ => None,
        }
    }
}

fn edit_input(input: &mut TextInput, code: KeyCode) {
    match code {
        KeyCode::Char(c) => input.insert_char(c),
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => input.left(),
        KeyCode::Right => input.right(),
        KeyCode::Home => input.home(),
        KeyCode::End => input.end(),
        _ => {}
    }
}
