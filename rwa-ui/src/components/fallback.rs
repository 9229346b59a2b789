use leptos::*;

use crate::browser;
use crate::state::use_boundary;

/// Shown in place of the whole shell once the boundary has failed.
#[component]
pub fn Fallback() -> impl IntoView {
    let boundary = use_boundary();
    let mut message = None;
    boundary.update_untracked(|b| message = b.render_fallback());

    let reload = move |_| {
        boundary.update(|b| b.reset());
        browser::reload();
    };

    view! {
      <div class="fallback">
        <div class="card">
          <h2>"Something went wrong"</h2>
          <p class="meta">"The dashboard hit an unexpected error. Reload the page to try again."</p>
          <pre class="error">{message.unwrap_or_default()}</pre>
          <button class="button" on:click=reload>"Reload Page"</button>
        </div>
      </div>
    }
}
