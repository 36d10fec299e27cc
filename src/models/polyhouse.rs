// Polyhouse controls - 폴리하우스 제어 상태
//
// 목표 온도/습도 슬라이더와 조명/관개/환기 스위치

/// 목표 온도 범위 (°C, 0.5 단위)
pub const TEMPERATURE_RANGE: (f64, f64) = (15.0, 35.0);
pub const TEMPERATURE_STEP: f64 = 0.5;
/// 목표 습도 범위 (%, 1 단위)
pub const HUMIDITY_RANGE: (u8, u8) = (40, 80);

/// 제어 카드 종류 (화면 표시 순서)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControlKind {
    #[default]
    Temperature,
    Humidity,
    Lighting,
    Irrigation,
    Ventilation,
}

impl ControlKind {
    pub const ALL: [ControlKind; 5] = [
        ControlKind::Temperature,
        ControlKind::Humidity,
        ControlKind::Lighting,
        ControlKind::Irrigation,
        ControlKind::Ventilation,
    ];

    pub fn title(self) -> &'static str {
        match self {
            ControlKind::Temperature => "Temperature Control",
            ControlKind::Humidity => "Humidity Control",
            ControlKind::Lighting => "Lighting System",
            ControlKind::Irrigation => "Irrigation System",
            ControlKind::Ventilation => "Ventilation System",
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|k| *k == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self.index() + len - 1) % len]
    }
}

/// 제어값
#[derive(Debug, Clone, PartialEq)]
pub struct PolyhouseControls {
    pub irrigation: bool,
    pub fans: bool,
    pub lights: bool,
    pub temperature: f64,
    pub humidity: u8,
}

impl Default for PolyhouseControls {
    fn default() -> Self {
        Self {
            irrigation: false,
            fans: false,
            lights: false,
            temperature: 25.0,
            humidity: 60,
        }
    }
}

impl PolyhouseControls {
    /// 값 범위 검증
    pub fn validate(&self) -> Result<(), String> {
        let (t_min, t_max) = TEMPERATURE_RANGE;
        if !(t_min..=t_max).contains(&self.temperature) {
            return Err(format!(
                "target temperature {}°C outside {}..={}",
                self.temperature, t_min, t_max
            ));
        }
        let (h_min, h_max) = HUMIDITY_RANGE;
        if !(h_min..=h_max).contains(&self.humidity) {
            return Err(format!(
                "target humidity {}% outside {}..={}",
                self.humidity, h_min, h_max
            ));
        }
        Ok(())
    }

    /// 슬라이더 위치 비율 (0.0 ~ 1.0)
    pub fn temperature_ratio(&self) -> f64 {
        let (min, max) = TEMPERATURE_RANGE;
        ((self.temperature - min) / (max - min)).clamp(0.0, 1.0)
    }

    pub fn humidity_ratio(&self) -> f64 {
        let (min, max) = HUMIDITY_RANGE;
        (f64::from(self.humidity.saturating_sub(min)) / f64::from(max - min)).clamp(0.0, 1.0)
    }
}

/// 폴리하우스 화면 상태
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PolyhouseState {
    pub controls: PolyhouseControls,
    pub selected: ControlKind,
}

impl PolyhouseState {
    pub fn select_next(&mut self) {
        self.selected = self.selected.next();
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.prev();
    }

    /// 선택된 슬라이더를 한 단계 조정 (범위 내로 고정)
    ///
    /// 스위치가 선택되어 있으면 아무 것도 하지 않습니다.
    pub fn adjust(&mut self, steps: i32) {
        match self.selected {
            ControlKind::Temperature => {
                let (min, max) = TEMPERATURE_RANGE;
                let next = self.controls.temperature + f64::from(steps) * TEMPERATURE_STEP;
                self.controls.temperature = next.clamp(min, max);
            }
            ControlKind::Humidity => {
                let (min, max) = HUMIDITY_RANGE;
                let next = i32::from(self.controls.humidity) + steps;
                self.controls.humidity = next.clamp(i32::from(min), i32::from(max)) as u8;
            }
            _ => {}
        }
    }

    /// 선택된 스위치 전환 (슬라이더면 무시)
    pub fn toggle_selected(&mut self) -> Option<(ControlKind, bool)> {
        let slot = match self.selected {
            ControlKind::Lighting => &mut self.controls.lights,
            ControlKind::Irrigation => &mut self.controls.irrigation,
            ControlKind::Ventilation => &mut self.controls.fans,
            ControlKind::Temperature | ControlKind::Humidity => return None,
        };
        *slot = !*slot;
        Some((self.selected, *slot))
    }
}
