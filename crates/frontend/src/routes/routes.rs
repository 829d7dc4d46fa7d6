use crate::layout::global_context::AppGlobalContext;
use crate::layout::left::Sidebar;
use crate::layout::pages::CurrentPage;
use crate::layout::right::ActivityPanel;
use crate::layout::Shell;
use crate::system::pages::login::LoginPage;
use contracts::system::app_state::Screen;
use leptos::prelude::*;

#[component]
fn MainLayout() -> impl IntoView {
    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=|| view! { <CurrentPage /> }.into_any()
            right=|| view! { <ActivityPanel /> }.into_any()
        />
    }
}

/// Auth gate: without a session only the login page is reachable.
#[component]
pub fn AppRoutes() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let on_login_screen = Memo::new(move |_| ctx.app.with(|app| app.screen() == Screen::Login));

    view! {
        <Show
            when=move || !on_login_screen.get()
            fallback=|| view! { <LoginPage /> }
        >
            <MainLayout />
        </Show>
    }
}
