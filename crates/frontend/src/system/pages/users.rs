//! Role permission matrix, built from the static menu catalog.

use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use contracts::enums::Role;
use contracts::system::pages::PageKey;
use contracts::system::rbac::{MENU_ITEMS, QUICK_ACTIONS};
use leptos::prelude::*;

/// `(label, allowed per role in Role::all() order)` for every menu item
/// and quick action.
fn permission_rows() -> Vec<(&'static str, Vec<bool>)> {
    let roles = Role::all();
    let menu = MENU_ITEMS
        .iter()
        .map(|item| (item.label, roles.iter().map(|r| item.allows(*r)).collect::<Vec<_>>()));
    let actions = QUICK_ACTIONS
        .iter()
        .map(|action| (action.label, roles.iter().map(|r| action.allows(*r)).collect::<Vec<_>>()));
    menu.chain(actions).collect()
}

#[component]
pub fn UsersPage() -> impl IntoView {
    let page = PageKey::Users;

    view! {
        <PageFrame
            route_id=page.route_id()
            category=PAGE_CAT_SYSTEM
            title=page.title()
            subtitle="صلاحيات الأدوار"
        >
            <table class="data-table permissions-table">
                <thead>
                    <tr>
                        <th>"الصفحة"</th>
                        {Role::all().into_iter().map(|r| view! { <th>{r.display_name()}</th> }).collect_view()}
                    </tr>
                </thead>
                <tbody>
                    {permission_rows().into_iter().map(|(label, allowed)| view! {
                        <tr>
                            <td>{label}</td>
                            {allowed.into_iter().map(|ok| view! {
                                <td class:allowed=ok>{if ok { "✓" } else { "" }}</td>
                            }).collect_view()}
                        </tr>
                    }).collect_view()}
                </tbody>
            </table>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_row_per_catalog_entry() {
        let rows = permission_rows();
        assert_eq!(rows.len(), MENU_ITEMS.len() + QUICK_ACTIONS.len());
        assert!(rows.iter().all(|(_, allowed)| allowed.len() == Role::all().len()));
    }

    #[test]
    fn admin_sees_every_entry() {
        let admin = Role::all().iter().position(|r| *r == Role::Admin).unwrap();
        assert!(permission_rows().iter().all(|(_, allowed)| allowed[admin]));
    }
}
