// Marketplace - ZelTrade 검색/카테고리 필터/즐겨찾기 상태

use super::farm::{Product, CATEGORIES, PRODUCTS};
use super::text_input::TextInput;
use std::collections::BTreeSet;

/// ZelTrade 화면 상태
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarketState {
    /// CATEGORIES 인덱스 (0 = All)
    pub category_index: usize,
    /// 검색어
    pub search: TextInput,
    /// 필터 결과 중 선택된 상품 위치
    pub selected: usize,
    /// 즐겨찾기 상품 ID
    pub favorites: BTreeSet<u32>,
}

impl MarketState {
    pub fn category(&self) -> &'static str {
        CATEGORIES[self.category_index % CATEGORIES.len()]
    }

    pub fn next_category(&mut self) {
        self.category_index = (self.category_index + 1) % CATEGORIES.len();
        self.clamp_selection();
    }

    pub fn prev_category(&mut self) {
        self.category_index = (self.category_index + CATEGORIES.len() - 1) % CATEGORIES.len();
        self.clamp_selection();
    }

    /// 카테고리와 검색어(대소문자 무시)로 필터링된 상품 목록
    pub fn visible_products(&self) -> Vec<&'static Product> {
        let category = self.category();
        let query = self.search.value().trim().to_lowercase();

        PRODUCTS
            .iter()
            .filter(|p| category == "All" || p.category == category)
            .filter(|p| query.is_empty() || p.name.to_lowercase().contains(&query))
            .collect()
    }

    pub fn selected_product(&self) -> Option<&'static Product> {
        self.visible_products().get(self.selected).copied()
    }

    pub fn select_next(&mut self) {
        let len = self.visible_products().len();
        if len > 0 {
            self.selected = (self.selected + 1) % len;
        }
    }

    pub fn select_prev(&mut self) {
        let len = self.visible_products().len();
        if len > 0 {
            self.selected = (self.selected + len - 1) % len;
        }
    }

    /// 선택된 상품 즐겨찾기 전환. 전환 후 즐겨찾기 여부 반환
    pub fn toggle_favorite(&mut self) -> Option<(&'static Product, bool)> {
        let product = self.selected_product()?;
        let now_favorite = if self.favorites.remove(&product.id) {
            false
        } else {
            self.favorites.insert(product.id);
            true
        };
        Some((product, now_favorite))
    }

    pub fn is_favorite(&self, product: &Product) -> bool {
        self.favorites.contains(&product.id)
    }

    /// 필터 변경 후 선택 위치 보정
    pub fn clamp_selection(&mut self) {
        let len = self.visible_products().len();
        self.selected = self.selected.min(len.saturating_sub(1));
    }
}
