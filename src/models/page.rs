// Pages - 화면 라우팅과 페이지별 로컬 상태

use super::auth::AuthForm;
use super::marketplace::MarketState;
use super::polyhouse::PolyhouseState;
use chrono::{DateTime, Local};

/// 화면
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Dashboard,
    Polyhouse,
    ZelTrade,
    ZelBasket,
    Auth,
}

impl Page {
    pub const ALL: [Page; 5] = [
        Page::Dashboard,
        Page::Polyhouse,
        Page::ZelTrade,
        Page::ZelBasket,
        Page::Auth,
    ];

    /// 헤더 탭 이름
    pub fn title(self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Polyhouse => "Polyhouse",
            Page::ZelTrade => "ZelTrade",
            Page::ZelBasket => "ZelBasket",
            Page::Auth => "Login",
        }
    }

    pub fn route(self) -> &'static str {
        match self {
            Page::Dashboard => "/",
            Page::Polyhouse => "/polyhouse",
            Page::ZelTrade => "/zeltrade",
            Page::ZelBasket => "/zelbasket",
            Page::Auth => "/auth",
        }
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|p| *p == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self.index() + len - 1) % len]
    }
}

/// ZelBasket 화면 상태
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasketState {
    pub last_updated: DateTime<Local>,
}

impl Default for BasketState {
    fn default() -> Self {
        Self {
            last_updated: Local::now(),
        }
    }
}

impl BasketState {
    /// 갱신 시각 기록 (실제 데이터 조회 없음)
    pub fn refresh(&mut self) {
        self.last_updated = Local::now();
    }
}

/// 페이지별 로컬 상태 묶음
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageStates {
    pub polyhouse: PolyhouseState,
    pub market: MarketState,
    pub basket: BasketState,
    pub auth: AuthForm,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_cycle() {
        assert_eq!(Page::Dashboard.next(), Page::Polyhouse);
        assert_eq!(Page::Auth.next(), Page::Dashboard);
        assert_eq!(Page::Dashboard.prev(), Page::Auth);
    }

    #[test]
    fn test_routes_are_distinct() {
        for page in Page::ALL {
            let same = Page::ALL.iter().filter(|p| p.route() == page.route()).count();
            assert_eq!(same, 1, "{}", page.route());
        }
    }

    #[test]
    fn test_basket_refresh_moves_forward() {
        let mut basket = BasketState::default();
        let before = basket.last_updated;
        basket.refresh();
        assert!(basket.last_updated >= before);
    }
}
