pub mod center;
pub mod global_context;
pub mod left;
pub mod pages;
pub mod right;
pub mod toasts;
pub mod top_header;

use leptos::prelude::*;
use toasts::ToastHost;
use top_header::TopHeader;

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                    |
/// +------------------------------------------+
/// |  Sidebar  |    Content    | ActivityPanel |
/// |  (start)  |   (Center)    |    (end)      |
/// +------------------------------------------+
/// ```
///
/// The document is RTL, so the sidebar renders on the right edge.
#[component]
pub fn Shell<L, C, R>(left: L, center: C, right: R) -> impl IntoView
where
    L: Fn() -> AnyView + 'static + Send,
    C: Fn() -> AnyView + 'static + Send,
    R: Fn() -> AnyView + 'static + Send,
{
    view! {
        <div class="app-layout">
            <TopHeader />

            <div class="app-body">
                <left::Left>
                    {left()}
                </left::Left>

                <div class="app-main">
                    <center::Center>
                        {center()}
                    </center::Center>
                </div>

                <right::Right>
                    {right()}
                </right::Right>
            </div>

            <ToastHost />
        </div>
    }
}
