use leptos::*;

/// Overlay dialog. Clicking the backdrop or the close button calls
/// `on_close`; clicks inside the dialog stay inside.
#[component]
pub fn Modal(
    #[prop(into)] title: String,
    #[prop(into)] on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
      <div class="overlay" on:click=move |_| on_close.call(())>
        <div class="modal" on:click=|ev| ev.stop_propagation()>
          <div class="row">
            <h2>{title}</h2>
            <button class="icon-button" on:click=move |_| on_close.call(())>"✕"</button>
          </div>
          {children()}
        </div>
      </div>
    }
}
