use leptos::*;
use rwa_core::route::Route;

/// "Coming soon" card for menu entries without a page yet.
#[component]
pub fn Placeholder(route: Route) -> impl IntoView {
    debug_assert!(route.is_placeholder());
    view! {
      <div class="card empty">
        <h2>{route.title()}</h2>
        <p class="meta">"This section is coming soon."</p>
        <a class="button" href=Route::Dashboard.path()>"Back to Dashboard"</a>
      </div>
    }
}
