use leptos::*;

/// Dashboard shortcut to another page.
#[component]
pub fn ActionCard(
    #[prop(into)] title: String,
    #[prop(into)] description: String,
    #[prop(into)] href: String,
    #[prop(into)] cta: String,
) -> impl IntoView {
    view! {
      <div class="card action">
        <h3>{title}</h3>
        <p class="meta">{description}</p>
        <a class="button" href=href>{cta}</a>
      </div>
    }
}
