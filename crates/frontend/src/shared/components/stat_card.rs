use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn StatCard(
    /// Label displayed above the value
    #[prop(into)]
    label: String,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    /// Already formatted value
    #[prop(into)]
    value: Signal<String>,
    /// Optional subtitle below the value
    #[prop(into, optional)]
    subtitle: MaybeProp<String>,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class="stat-card__icon">
                {icon(icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{move || value.get()}</div>
                {move || subtitle.get().map(|s| view! {
                    <div class="stat-card__subtitle">{s}</div>
                })}
            </div>
        </div>
    }
}
