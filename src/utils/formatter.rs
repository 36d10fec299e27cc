// Formatters - 시각, 가격, 평점, 수량 포맷팅

use chrono::{DateTime, Local};

/// "마지막 갱신" 표시용 시각 포맷 ("HH:MM:SS", 8자 고정)
pub fn format_clock(time: &DateTime<Local>) -> String {
    time.format("%H:%M:%S").to_string()
}

/// 단위 가격 포맷 (₹45.00/kg)
pub fn format_price(price: f64, unit: &str) -> String {
    format!("₹{:.2}/{}", price, unit)
}

/// 평점을 별 문자열로 변환 (0.5 단위 반올림, 5점 만점)
pub fn format_rating(rating: f32) -> String {
    let halves = (rating.clamp(0.0, 5.0) * 2.0).round() as usize;
    let full = halves / 2;
    let half = halves % 2;
    let empty = 5 - full - half;

    let mut stars = String::with_capacity(5 * 3);
    stars.push_str(&"★".repeat(full));
    if half == 1 {
        stars.push('⯪');
    }
    stars.push_str(&"☆".repeat(empty));
    stars
}

/// 측정값 포맷 (정수면 소수점 생략)
pub fn format_reading(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}

/// 개수에 따라 단수/복수형 반환
pub fn pluralize(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}

/// 비밀번호 마스킹 (문자 수만큼 '•')
pub fn mask_secret(value: &str) -> String {
    "•".repeat(value.chars().count())
}
