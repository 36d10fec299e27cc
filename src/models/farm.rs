// Farm data - 센서/폴리하우스/창고/상품 목업 데이터
//
// 백엔드가 없으므로 모든 화면 데이터는 여기의 상수에서 옵니다.

/// 센서 측정값
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensorReading {
    pub label: &'static str,
    pub value: f64,
    pub unit: &'static str,
    /// 카드 아이콘 색상
    pub accent: &'static str,
    pub icon: &'static str,
}

/// 알림 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Warning,
    Info,
}

/// 대시보드 알림
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FarmAlert {
    pub kind: AlertKind,
    pub message: &'static str,
}

/// 폴리하우스 운영 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolyhouseStatus {
    Active,
    Maintenance,
}

impl PolyhouseStatus {
    pub fn label(self) -> &'static str {
        match self {
            PolyhouseStatus::Active => "active",
            PolyhouseStatus::Maintenance => "maintenance",
        }
    }
}

/// 폴리하우스 요약
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolyhouseSummary {
    pub id: &'static str,
    pub status: PolyhouseStatus,
    pub crop: &'static str,
    /// 작물 건강도 (0-100)
    pub health: u8,
}

impl PolyhouseSummary {
    /// 건강도 90 초과면 양호
    pub fn is_thriving(&self) -> bool {
        self.health > 90
    }
}

/// 요약 통계 카드
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickStat {
    pub value: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

/// 게이지 수준
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Normal,
    High,
    Critical,
}

/// 창고
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Warehouse {
    pub id: &'static str,
    pub kind: &'static str,
    pub capacity: u32,
    pub occupied: u32,
    pub temperature: i32,
    pub humidity: u8,
    pub alerts: u32,
    pub color: &'static str,
}

impl Warehouse {
    /// 점유율 (%)
    pub fn occupancy_percent(&self) -> f64 {
        if self.capacity == 0 {
            return 0.0;
        }
        self.occupied as f64 * 100.0 / self.capacity as f64
    }

    /// 90% 초과 Critical, 70% 초과 High
    pub fn occupancy_level(&self) -> Level {
        let pct = self.occupancy_percent();
        if pct > 90.0 {
            Level::Critical
        } else if pct > 70.0 {
            Level::High
        } else {
            Level::Normal
        }
    }
}

/// 재고 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockStatus {
    InStock,
    LowStock,
}

impl StockStatus {
    pub fn label(self) -> &'static str {
        match self {
            StockStatus::InStock => "In Stock",
            StockStatus::LowStock => "Low Stock",
        }
    }
}

/// 재고 항목
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InventoryItem {
    pub name: &'static str,
    pub quantity: u32,
    pub unit: &'static str,
    pub warehouse: &'static str,
    pub status: StockStatus,
    pub expiry_date: &'static str,
}

/// 마켓 상품
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Product {
    pub id: u32,
    pub name: &'static str,
    pub price: f64,
    pub unit: &'static str,
    pub rating: f32,
    pub reviews: u32,
    pub category: &'static str,
    pub farmer: &'static str,
    pub polyhouse: &'static str,
    pub stock: u32,
}

pub static SENSOR_READINGS: [SensorReading; 4] = [
    SensorReading {
        label: "Temperature",
        value: 25.4,
        unit: "°C",
        accent: "#ff6b6b",
        icon: "🌡",
    },
    SensorReading {
        label: "Humidity",
        value: 65.0,
        unit: "%",
        accent: "#4ecdc4",
        icon: "💧",
    },
    SensorReading {
        label: "Light",
        value: 850.0,
        unit: "lux",
        accent: "#ffd93d",
        icon: "☀",
    },
    SensorReading {
        label: "CO2",
        value: 412.0,
        unit: "ppm",
        accent: "#95a5a6",
        icon: "☁",
    },
];

pub static FARM_ALERTS: [FarmAlert; 2] = [
    FarmAlert {
        kind: AlertKind::Warning,
        message: "High humidity in Polyhouse Z1",
    },
    FarmAlert {
        kind: AlertKind::Info,
        message: "Scheduled maintenance for Z2 tomorrow",
    },
];

pub static POLYHOUSES: [PolyhouseSummary; 3] = [
    PolyhouseSummary {
        id: "Z1",
        status: PolyhouseStatus::Active,
        crop: "Tomatoes",
        health: 92,
    },
    PolyhouseSummary {
        id: "Z2",
        status: PolyhouseStatus::Active,
        crop: "Lettuce",
        health: 88,
    },
    PolyhouseSummary {
        id: "Z3",
        status: PolyhouseStatus::Maintenance,
        crop: "Cucumbers",
        health: 75,
    },
];

pub static DASHBOARD_STATS: [QuickStat; 3] = [
    QuickStat {
        value: "3",
        label: "Active Polyhouses",
        icon: "🌱",
    },
    QuickStat {
        value: "4",
        label: "ZelBasket Warehouses",
        icon: "🏬",
    },
    QuickStat {
        value: "28",
        label: "Active Orders",
        icon: "🛒",
    },
];

pub static WAREHOUSES: [Warehouse; 4] = [
    Warehouse {
        id: "S1",
        kind: "Normal Storage",
        capacity: 1000,
        occupied: 650,
        temperature: 25,
        humidity: 45,
        alerts: 0,
        color: "#4caf50",
    },
    Warehouse {
        id: "S2",
        kind: "Chilled Storage",
        capacity: 800,
        occupied: 720,
        temperature: 10,
        humidity: 60,
        alerts: 1,
        color: "#2196f3",
    },
    Warehouse {
        id: "S3",
        kind: "Cool Storage",
        capacity: 1200,
        occupied: 800,
        temperature: 15,
        humidity: 55,
        alerts: 0,
        color: "#9c27b0",
    },
    Warehouse {
        id: "S4",
        kind: "Frozen Storage",
        capacity: 600,
        occupied: 450,
        temperature: -18,
        humidity: 40,
        alerts: 0,
        color: "#3f51b5",
    },
];

pub static INVENTORY: [InventoryItem; 3] = [
    InventoryItem {
        name: "Fresh Tomatoes",
        quantity: 250,
        unit: "kg",
        warehouse: "S3",
        status: StockStatus::InStock,
        expiry_date: "2024-02-15",
    },
    InventoryItem {
        name: "Organic Lettuce",
        quantity: 150,
        unit: "kg",
        warehouse: "S2",
        status: StockStatus::LowStock,
        expiry_date: "2024-02-10",
    },
    InventoryItem {
        name: "Fresh Cucumbers",
        quantity: 300,
        unit: "kg",
        warehouse: "S3",
        status: StockStatus::InStock,
        expiry_date: "2024-02-12",
    },
];

pub static BASKET_STATS: [QuickStat; 3] = [
    QuickStat {
        value: "85%",
        label: "Average Occupancy Rate",
        icon: "📈",
    },
    QuickStat {
        value: "98%",
        label: "Order Fulfillment Rate",
        icon: "ℹ",
    },
    QuickStat {
        value: "1",
        label: "Active Alerts",
        icon: "⚠",
    },
];

pub static PRODUCTS: [Product; 3] = [
    Product {
        id: 1,
        name: "Fresh Tomatoes",
        price: 45.0,
        unit: "kg",
        rating: 4.5,
        reviews: 28,
        category: "Vegetables",
        farmer: "Green Acres Farm",
        polyhouse: "Z1",
        stock: 150,
    },
    Product {
        id: 2,
        name: "Organic Lettuce",
        price: 35.0,
        unit: "kg",
        rating: 4.8,
        reviews: 42,
        category: "Leafy Greens",
        farmer: "Sunrise Organics",
        polyhouse: "Z2",
        stock: 80,
    },
    Product {
        id: 3,
        name: "Fresh Cucumbers",
        price: 30.0,
        unit: "kg",
        rating: 4.3,
        reviews: 35,
        category: "Vegetables",
        farmer: "Tech Farm Solutions",
        polyhouse: "Z3",
        stock: 200,
    },
];

pub const CATEGORIES: [&str; 6] = [
    "All",
    "Vegetables",
    "Fruits",
    "Leafy Greens",
    "Herbs",
    "Microgreens",
];

/// 창고 ID로 창고 조회
pub fn warehouse_by_id(id: &str) -> Option<&'static Warehouse> {
    WAREHOUSES.iter().find(|w| w.id == id)
}
