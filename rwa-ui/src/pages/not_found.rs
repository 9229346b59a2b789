use leptos::*;
use rwa_core::pages::asset_details::AssetLookup;
use rwa_core::route::Route;

fn not_found_card(heading: &'static str, detail: String) -> impl IntoView {
    let back = AssetLookup::escape_route();
    view! {
      <div class="card empty">
        <h2>{heading}</h2>
        <p class="meta">{detail}</p>
        <div class="row">
          <a class="button" href=back.path()>{format!("Back to {back}")}</a>
          <a class="button secondary" href=Route::Dashboard.path()>"Go to Dashboard"</a>
        </div>
      </div>
    }
}

#[component]
pub fn NotFoundPage() -> impl IntoView {
    not_found_card("Page not found", "The page you are looking for does not exist.".to_string())
}

/// `/asset/:id` with an id the catalog does not know.
#[component]
pub fn AssetNotFound(id: Option<u32>) -> impl IntoView {
    let detail = match id {
        Some(id) => format!("No asset with id {id} exists."),
        None => "That is not a valid asset id.".to_string(),
    };
    not_found_card("Asset not found", detail)
}
