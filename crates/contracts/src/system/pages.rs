//! Page resolver: route id -> page key.
//!
//! Resolution never fails. Any id that is not in the table resolves to the
//! dashboard, which is the only error policy of the routing surface.

use crate::domain::{e101_water_entry, e102_irrigation_entry, e103_monitoring_entry};
use crate::shared::entry_form::FormSpec;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageKey {
    Dashboard,
    Analytics,
    Cameras,
    GisLayers,
    StationMonitoring,
    Maintenance,
    Projects,
    WaterConsumption,
    IrrigationConsumption,
    Reports,
    Users,
    Settings,
    WaterEntry,
    IrrigationEntry,
    MonitoringEntry,
}

static ROUTE_TABLE: Lazy<HashMap<&'static str, PageKey>> = Lazy::new(|| {
    PageKey::all()
        .into_iter()
        .map(|key| (key.route_id(), key))
        .collect()
});

impl PageKey {
    pub fn route_id(&self) -> &'static str {
        match self {
            PageKey::Dashboard => "dashboard",
            PageKey::Analytics => "analytics",
            PageKey::Cameras => "cameras",
            PageKey::GisLayers => "gis_layers",
            PageKey::StationMonitoring => "station_monitoring",
            PageKey::Maintenance => "maintenance",
            PageKey::Projects => "projects",
            PageKey::WaterConsumption => "water_consumption",
            PageKey::IrrigationConsumption => "irrigation_consumption",
            PageKey::Reports => "reports",
            PageKey::Users => "users",
            PageKey::Settings => "settings",
            PageKey::WaterEntry => "water_entry",
            PageKey::IrrigationEntry => "irrigation_entry",
            PageKey::MonitoringEntry => "monitoring_entry",
        }
    }

    /// Header / breadcrumb title
    pub fn title(&self) -> &'static str {
        match self {
            PageKey::Dashboard => "لوحة التحكم",
            PageKey::Analytics => "التحليلات والإحصائيات",
            PageKey::Cameras => "كاميرات المراقبة",
            PageKey::GisLayers => "طبقات نظم المعلومات الجغرافية",
            PageKey::StationMonitoring => "المراقبة اليومية للمحطات",
            PageKey::Maintenance => "سجلات الصيانة",
            PageKey::Projects => "المشاريع",
            PageKey::WaterConsumption => "استهلاك المياه",
            PageKey::IrrigationConsumption => "استهلاك مياه الري",
            PageKey::Reports => "التقارير",
            PageKey::Users => "إدارة المستخدمين",
            PageKey::Settings => "الإعدادات",
            PageKey::WaterEntry => e101_water_entry::FORM_SPEC.title,
            PageKey::IrrigationEntry => e102_irrigation_entry::FORM_SPEC.title,
            PageKey::MonitoringEntry => e103_monitoring_entry::FORM_SPEC.title,
        }
    }

    /// Form configuration for entry-form pages
    pub fn entry_form(&self) -> Option<&'static FormSpec> {
        match self {
            PageKey::WaterEntry => Some(&e101_water_entry::FORM_SPEC),
            PageKey::IrrigationEntry => Some(&e102_irrigation_entry::FORM_SPEC),
            PageKey::MonitoringEntry => Some(&e103_monitoring_entry::FORM_SPEC),
            _ => None,
        }
    }

    pub fn all() -> Vec<PageKey> {
        vec![
            PageKey::Dashboard,
            PageKey::Analytics,
            PageKey::Cameras,
            PageKey::GisLayers,
            PageKey::StationMonitoring,
            PageKey::Maintenance,
            PageKey::Projects,
            PageKey::WaterConsumption,
            PageKey::IrrigationConsumption,
            PageKey::Reports,
            PageKey::Users,
            PageKey::Settings,
            PageKey::WaterEntry,
            PageKey::IrrigationEntry,
            PageKey::MonitoringEntry,
        ]
    }

    pub fn from_route_id(route_id: &str) -> Option<Self> {
        ROUTE_TABLE.get(route_id).copied()
    }
}

/// Page for a route id, falling back to the dashboard.
pub fn resolve(route_id: &str) -> PageKey {
    PageKey::from_route_id(route_id).unwrap_or(PageKey::Dashboard)
}
