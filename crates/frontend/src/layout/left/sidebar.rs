//! Sidebar: the role's menu grouped by category.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use contracts::enums::MenuCategory;
use contracts::system::rbac::MenuGroup;
use leptos::prelude::*;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    // Only categories the role can see are listed; all start expanded.
    let groups = Memo::new(move |_| ctx.app.with(|app| app.visible_menu()));
    let current = ctx.route;
    let collapsed = RwSignal::new(Vec::<MenuCategory>::new());
    
    view! {
        <div class="app-sidebar__content">
            <For
                each=move || groups.get()
                key=|group| group.category
                children=move |group: MenuGroup| {
                    let category = group.category;
                    let is_expanded = move || !collapsed.get().contains(&category);
                    view! {
                        <div>
                            <div
                                class="app-sidebar__item"
                                on:click=move |_| {
                                    collapsed.update(|items| {
                                        if let Some(pos) = items.iter().position(|c| *c == category) {
                                            items.remove(pos);
                                        } else {
                                            items.push(category);
                                        }
                                    });
                                }
                            >
                                <div class="app-sidebar__item-content">
                                    {icon(category.icon())}
                                    <span>{category.label()}</span>
                                </div>
                                <div
                                    class="app-sidebar__chevron"
                                    class:app-sidebar__chevron--expanded=is_expanded
                                >
                                    {icon("chevron-left")}
                                </div>
                            </div>

                            <Show when=is_expanded>
                                <div class="app-sidebar__children">
                                    {group.items.iter().map(|item| {
                                        let id = item.id;
                                        view! {
                                            <div
                                                class="app-sidebar__item"
                                                class:app-sidebar__item--active=move || current.get() == id
                                                on:click=move |_| ctx.navigate(id)
                                            >
                                                <div class="app-sidebar__item-content">
                                                    {icon(item.icon)}
                                                    <span>{item.label}</span>
                                                </div>
                                            </div>
                                        }
                                    }).collect_view()}
                                </div>
                            </Show>
                        </div>
                    }
                }
            />
        </div>
    }
}
