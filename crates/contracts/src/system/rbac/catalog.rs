use crate::enums::{MenuCategory, Role};
use serde::Serialize;

use Role::*;

// ============================================================================
// Types
// ============================================================================

/// Entry of the main navigation menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub category: MenuCategory,
    pub allowed_roles: &'static [Role],
}

impl MenuItem {
    pub fn allows(&self, role: Role) -> bool {
        self.allowed_roles.contains(&role)
    }
}

/// Role-filtered shortcut; `id` is the route it opens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuickAction {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub allowed_roles: &'static [Role],
}

impl QuickAction {
    pub fn allows(&self, role: Role) -> bool {
        self.allowed_roles.contains(&role)
    }
}

// ============================================================================
// Static catalog (order is display order)
// ============================================================================

const EVERYONE: &[Role] = &[
    Admin,
    President,
    VicePresident,
    DepartmentHead,
    Employee,
    Contractor,
    GisOfficer,
];
const LEADERSHIP: &[Role] = &[Admin, President, VicePresident, DepartmentHead];
const GIS_VIEWERS: &[Role] = &[Admin, President, VicePresident, DepartmentHead, GisOfficer];
const CONSUMPTION_VIEWERS: &[Role] = &[Admin, President, VicePresident, DepartmentHead, Employee];
const DATA_ENTRY: &[Role] = &[Admin, DepartmentHead, Employee];
const ADMIN_ONLY: &[Role] = &[Admin];

pub static MENU_ITEMS: &[MenuItem] = &[
    MenuItem {
        id: "dashboard",
        label: "لوحة التحكم",
        icon: "layout-dashboard",
        category: MenuCategory::Overview,
        allowed_roles: EVERYONE,
    },
    MenuItem {
        id: "analytics",
        label: "التحليلات والإحصائيات",
        icon: "bar-chart",
        category: MenuCategory::Overview,
        allowed_roles: LEADERSHIP,
    },
    MenuItem {
        id: "cameras",
        label: "كاميرات المراقبة",
        icon: "camera",
        category: MenuCategory::Monitoring,
        allowed_roles: GIS_VIEWERS,
    },
    MenuItem {
        id: "gis_layers",
        label: "طبقات نظم المعلومات الجغرافية",
        icon: "map",
        category: MenuCategory::Monitoring,
        allowed_roles: GIS_VIEWERS,
    },
    MenuItem {
        id: "station_monitoring",
        label: "المراقبة اليومية للمحطات",
        icon: "activity",
        category: MenuCategory::Monitoring,
        allowed_roles: DATA_ENTRY,
    },
    MenuItem {
        id: "maintenance",
        label: "سجلات الصيانة",
        icon: "tool",
        category: MenuCategory::Operations,
        allowed_roles: &[Admin, VicePresident, DepartmentHead, Employee, Contractor],
    },
    MenuItem {
        id: "projects",
        label: "المشاريع",
        icon: "package",
        category: MenuCategory::Operations,
        allowed_roles: &[Admin, President, VicePresident, DepartmentHead, Contractor],
    },
    MenuItem {
        id: "water_consumption",
        label: "استهلاك المياه",
        icon: "droplet",
        category: MenuCategory::Consumption,
        allowed_roles: CONSUMPTION_VIEWERS,
    },
    MenuItem {
        id: "irrigation_consumption",
        label: "استهلاك مياه الري",
        icon: "sprout",
        category: MenuCategory::Consumption,
        allowed_roles: CONSUMPTION_VIEWERS,
    },
    MenuItem {
        id: "reports",
        label: "التقارير",
        icon: "file-text",
        category: MenuCategory::Consumption,
        allowed_roles: LEADERSHIP,
    },
    MenuItem {
        id: "users",
        label: "إدارة المستخدمين",
        icon: "users",
        category: MenuCategory::Administration,
        allowed_roles: ADMIN_ONLY,
    },
    MenuItem {
        id: "settings",
        label: "الإعدادات",
        icon: "settings",
        category: MenuCategory::Administration,
        allowed_roles: ADMIN_ONLY,
    },
];

pub static QUICK_ACTIONS: &[QuickAction] = &[
    QuickAction {
        id: "water_entry",
        label: "إدخال استهلاك المياه",
        icon: "droplet",
        allowed_roles: DATA_ENTRY,
    },
    QuickAction {
        id: "irrigation_entry",
        label: "إدخال استهلاك مياه الري",
        icon: "sprout",
        allowed_roles: DATA_ENTRY,
    },
    QuickAction {
        id: "monitoring_entry",
        label: "إدخال المراقبة اليومية",
        icon: "clipboard",
        allowed_roles: DATA_ENTRY,
    },
    QuickAction {
        id: "maintenance",
        label: "تسجيل طلب صيانة",
        icon: "tool",
        allowed_roles: &[Admin, DepartmentHead, Employee, Contractor],
    },
];
