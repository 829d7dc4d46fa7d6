//! Toast notifications rendered from core events.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::number_format::format_number_with_decimals;
use contracts::domain::form_spec;
use contracts::system::events::AppEvent;
use contracts::system::pages::PageKey;
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

impl ToastKind {
    fn class(&self) -> &'static str {
        match self {
            ToastKind::Info => "toast toast--info",
            ToastKind::Success => "toast toast--success",
            ToastKind::Error => "toast toast--error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// User-facing wording of an event. Route and search changes stay silent.
pub fn event_toast(event: &AppEvent) -> Option<(ToastKind, String)> {
    match event {
        AppEvent::LoggedIn { username, role } => Some((
            ToastKind::Success,
            format!("مرحباً {} ({})", username, role.display_name()),
        )),
        AppEvent::LoggedOut => Some((ToastKind::Info, "تم تسجيل الخروج".to_string())),
        AppEvent::NavigationDenied { route } => {
            let title = PageKey::from_route_id(route)
                .map(|key| key.title().to_string())
                .unwrap_or_else(|| route.clone());
            Some((
                ToastKind::Error,
                format!("ليس لديك صلاحية للوصول إلى: {}", title),
            ))
        }
        AppEvent::EntryAccepted { form_id, date, total } => {
            let unit = form_spec(form_id).and_then(|spec| spec.total_unit);
            let message = match unit {
                Some(unit) => format!(
                    "تم حفظ بيانات يوم {} بنجاح. الإجمالي: {} {}",
                    date,
                    format_number_with_decimals(*total, 2),
                    unit
                ),
                None => format!("تم حفظ بيانات يوم {} بنجاح", date),
            };
            Some((ToastKind::Success, message))
        }
        AppEvent::RouteChanged { .. } | AppEvent::SearchQueryChanged { .. } => None,
    }
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <div class="toast-host">
            <For
                each=move || ctx.toasts.get()
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.kind.class() on:click=move |_| ctx.dismiss_toast(id)>
                            {toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::Role;

    #[test]
    fn login_greets_with_role_name() {
        let event = AppEvent::LoggedIn {
            username: "sara".into(),
            role: Role::Employee,
        };
        let (kind, message) = event_toast(&event).unwrap();
        assert_eq!(kind, ToastKind::Success);
        assert!(message.contains("sara"));
        assert!(message.contains(Role::Employee.display_name()));
    }

    #[test]
    fn denied_navigation_uses_page_title() {
        let event = AppEvent::NavigationDenied {
            route: "users".into(),
        };
        let (kind, message) = event_toast(&event).unwrap();
        assert_eq!(kind, ToastKind::Error);
        assert!(message.contains(PageKey::Users.title()));
    }

    #[test]
    fn denied_unknown_route_echoes_id() {
        let event = AppEvent::NavigationDenied {
            route: "nowhere".into(),
        };
        let (_, message) = event_toast(&event).unwrap();
        assert!(message.contains("nowhere"));
    }

    #[test]
    fn accepted_water_entry_shows_total_with_unit() {
        let event = AppEvent::EntryAccepted {
            form_id: "water_entry".into(),
            date: "2024-05-01".into(),
            total: 1500.5,
        };
        let (_, message) = event_toast(&event).unwrap();
        assert!(message.contains("2024-05-01"));
        assert!(message.contains("1 500.50"));
        assert!(message.contains("م³"));
    }

    #[test]
    fn accepted_monitoring_entry_has_no_total() {
        let event = AppEvent::EntryAccepted {
            form_id: "monitoring_entry".into(),
            date: "2024-05-01".into(),
            total: 0.0,
        };
        let (_, message) = event_toast(&event).unwrap();
        assert!(!message.contains("الإجمالي"));
    }

    #[test]
    fn route_changes_are_silent() {
        let event = AppEvent::RouteChanged {
            from: "dashboard".into(),
            to: "reports".into(),
        };
        assert!(event_toast(&event).is_none());
    }
}
