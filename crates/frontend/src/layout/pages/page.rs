use super::registry::render_page;
use crate::layout::global_context::AppGlobalContext;
use contracts::system::pages::{resolve, PageKey};
use leptos::logging::log;
use leptos::prelude::*;

#[component]
fn PageHost(page: PageKey) -> impl IntoView {
    log!("PageHost CREATED for: '{}'", page.route_id());
    on_cleanup(move || log!("PageHost DESTROYED for: '{}'", page.route_id()));

    view! {
        <div class="page-host" data-page-key=page.route_id()>
            {render_page(page)}
        </div>
    }
}

/// Renders the page of the current route. Route changes that resolve to
/// the same page keep the mounted view. Only mounted behind the login gate.
#[component]
pub fn CurrentPage() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let page = Memo::new(move |_| ctx.route.with(|route| resolve(route)));

    move || {
        let current = page.get();
        view! { <PageHost page=current /> }
    }
}
