//! Pure lookups over the static catalog. Nothing here can fail: an unknown
//! role code simply has no permissions.

use super::catalog::{MenuItem, QuickAction, MENU_ITEMS, QUICK_ACTIONS};
use crate::enums::{MenuCategory, Role};
use serde::Serialize;

/// Visible menu items of one sidebar section
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuGroup {
    pub category: MenuCategory,
    pub items: Vec<&'static MenuItem>,
}

/// True when a menu item or quick action with this id lists the role.
pub fn is_allowed(role: Role, item_id: &str) -> bool {
    MENU_ITEMS
        .iter()
        .any(|item| item.id == item_id && item.allows(role))
        || QUICK_ACTIONS
            .iter()
            .any(|action| action.id == item_id && action.allows(role))
}

pub fn items_for(role: Role) -> Vec<&'static MenuItem> {
    MENU_ITEMS.iter().filter(|item| item.allows(role)).collect()
}

pub fn quick_actions_for(role: Role) -> Vec<&'static QuickAction> {
    QUICK_ACTIONS
        .iter()
        .filter(|action| action.allows(role))
        .collect()
}

pub fn items_for_code(role_code: &str) -> Vec<&'static MenuItem> {
    Role::from_code(role_code).map(items_for).unwrap_or_default()
}

pub fn quick_actions_for_code(role_code: &str) -> Vec<&'static QuickAction> {
    Role::from_code(role_code)
        .map(quick_actions_for)
        .unwrap_or_default()
}

/// Visible items grouped by category; empty sections are skipped.
pub fn grouped_items_for(role: Role) -> Vec<MenuGroup> {
    let visible = items_for(role);
    MenuCategory::all()
        .into_iter()
        .filter_map(|category| {
            let items: Vec<_> = visible
                .iter()
                .copied()
                .filter(|item| item.category == category)
                .collect();
            (!items.is_empty()).then_some(MenuGroup { category, items })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(items: &[&MenuItem]) -> Vec<&'static str> {
        items.iter().map(|i| i.id).collect()
    }

    #[test]
    fn test_items_for_only_returns_permitted_items() {
        for role in Role::all() {
            for item in items_for(role) {
                assert!(item.allowed_roles.contains(&role));
            }
        }
    }

    #[test]
    fn test_items_keep_catalog_order() {
        let all: Vec<_> = MENU_ITEMS.iter().map(|i| i.id).collect();
        for role in Role::all() {
            let visible = ids(&items_for(role));
            let mut positions = visible
                .iter()
                .map(|id| all.iter().position(|x| x == id).unwrap());
            let mut last = positions.next().unwrap();
            for pos in positions {
                assert!(pos > last);
                last = pos;
            }
        }
    }

    #[test]
    fn test_admin_sees_everything() {
        assert_eq!(items_for(Role::Admin).len(), MENU_ITEMS.len());
        assert_eq!(quick_actions_for(Role::Admin).len(), QUICK_ACTIONS.len());
    }

    #[test]
    fn test_employee_has_no_user_management() {
        let visible = ids(&items_for(Role::Employee));
        assert!(!visible.contains(&"users"));
        assert!(!visible.contains(&"settings"));
        assert!(visible.contains(&"water_consumption"));
        assert!(!is_allowed(Role::Employee, "users"));
    }

    #[test]
    fn test_contractor_quick_actions() {
        let actions: Vec<_> = quick_actions_for(Role::Contractor)
            .iter()
            .map(|a| a.id)
            .collect();
        assert_eq!(actions, vec!["maintenance"]);
    }

    #[test]
    fn test_gis_officer_has_no_quick_actions() {
        assert!(quick_actions_for(Role::GisOfficer).is_empty());
        assert!(is_allowed(Role::GisOfficer, "gis_layers"));
    }

    #[test]
    fn test_sub_pages_are_allowed_through_quick_actions() {
        assert!(is_allowed(Role::Employee, "water_entry"));
        assert!(!is_allowed(Role::President, "water_entry"));
    }

    #[test]
    fn test_unknown_role_code_has_no_permissions() {
        assert!(items_for_code("guest").is_empty());
        assert!(items_for_code("").is_empty());
        assert!(quick_actions_for_code("superuser").is_empty());
        assert_eq!(items_for_code("admin").len(), MENU_ITEMS.len());
    }

    #[test]
    fn test_unknown_item_is_never_allowed() {
        for role in Role::all() {
            assert!(!is_allowed(role, "no_such_page"));
        }
    }

    #[test]
    fn test_grouped_items_follow_category_order() {
        let groups = grouped_items_for(Role::Admin);
        let categories: Vec<_> = groups.iter().map(|g| g.category).collect();
        assert_eq!(categories, MenuCategory::all());

        let employee = grouped_items_for(Role::Employee);
        assert!(employee
            .iter()
            .all(|g| g.category != MenuCategory::Administration));
        let total: usize = employee.iter().map(|g| g.items.len()).sum();
        assert_eq!(total, items_for(Role::Employee).len());
    }
}
