//! Page registry: `PageKey` → view.
//!
//! The match is exhaustive, so adding a page key without a view does not
//! compile.

use crate::dashboards::OverviewDashboard;
use crate::domain::e101_water_entry::{WaterConsumptionPage, WaterEntryPage};
use crate::domain::e102_irrigation_entry::{IrrigationConsumptionPage, IrrigationEntryPage};
use crate::domain::e103_monitoring_entry::{MonitoringEntryPage, StationMonitoringPage};
use crate::system::pages::placeholder::ManagementPage;
use crate::system::pages::settings::SettingsPage;
use crate::system::pages::users::UsersPage;
use contracts::system::pages::PageKey;
use leptos::prelude::*;

pub fn render_page(key: PageKey) -> AnyView {
    match key {
        // ═══════════════════════════════════════════════════════════════════
        // Overview
        // ═══════════════════════════════════════════════════════════════════
        PageKey::Dashboard => view! { <OverviewDashboard /> }.into_any(),

        // ═══════════════════════════════════════════════════════════════════
        // Consumption and monitoring (session records + entry forms)
        // ═══════════════════════════════════════════════════════════════════
        PageKey::WaterConsumption => view! { <WaterConsumptionPage /> }.into_any(),
        PageKey::IrrigationConsumption => view! { <IrrigationConsumptionPage /> }.into_any(),
        PageKey::StationMonitoring => view! { <StationMonitoringPage /> }.into_any(),
        PageKey::WaterEntry => view! { <WaterEntryPage /> }.into_any(),
        PageKey::IrrigationEntry => view! { <IrrigationEntryPage /> }.into_any(),
        PageKey::MonitoringEntry => view! { <MonitoringEntryPage /> }.into_any(),

        // ═══════════════════════════════════════════════════════════════════
        // Administration
        // ═══════════════════════════════════════════════════════════════════
        PageKey::Users => view! { <UsersPage /> }.into_any(),
        PageKey::Settings => view! { <SettingsPage /> }.into_any(),

        // ═══════════════════════════════════════════════════════════════════
        // Management screens without data
        // ═══════════════════════════════════════════════════════════════════
        PageKey::Analytics
        | PageKey::Cameras
        | PageKey::GisLayers
        | PageKey::Maintenance
        | PageKey::Projects
        | PageKey::Reports => view! { <ManagementPage page=key /> }.into_any(),
    }
}
