use serde::{Deserialize, Serialize};

/// Sidebar section a menu item belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuCategory {
    Overview,
    Monitoring,
    Operations,
    Consumption,
    Administration,
}

impl MenuCategory {
    pub fn code(&self) -> &'static str {
        match self {
            MenuCategory::Overview => "overview",
            MenuCategory::Monitoring => "monitoring",
            MenuCategory::Operations => "operations",
            MenuCategory::Consumption => "consumption",
            MenuCategory::Administration => "administration",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuCategory::Overview => "الرئيسية",
            MenuCategory::Monitoring => "المراقبة",
            MenuCategory::Operations => "التشغيل والصيانة",
            MenuCategory::Consumption => "الاستهلاك",
            MenuCategory::Administration => "الإدارة",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            MenuCategory::Overview => "bar-chart",
            MenuCategory::Monitoring => "activity",
            MenuCategory::Operations => "layers",
            MenuCategory::Consumption => "droplet",
            MenuCategory::Administration => "settings",
        }
    }

    /// Categories in sidebar order
    pub fn all() -> Vec<MenuCategory> {
        vec![
            MenuCategory::Overview,
            MenuCategory::Monitoring,
            MenuCategory::Operations,
            MenuCategory::Consumption,
            MenuCategory::Administration,
        ]
    }
}
