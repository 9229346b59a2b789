use std::fmt::Display;
use std::str::FromStr;

use leptos::*;
use rwa_query::Choice;

/// `<select>` over a [`Choice`]: an "all" entry, then one option per value.
/// Option values are the tags `V` displays as and parses from.
#[component]
pub fn ChoiceSelect<V>(
    #[prop(into)] all_label: String,
    options: Vec<(V, &'static str)>,
    value: Signal<Choice<V>>,
    #[prop(into)] on_change: Callback<Choice<V>>,
) -> impl IntoView
where
    V: Copy + PartialEq + FromStr + Display + 'static,
{
    let entries = options
        .into_iter()
        .map(|(v, label)| {
            view! {
              <option value=v.to_string() selected=move || value.with(|c| c.selected() == Some(&v))>
                {label}
              </option>
            }
        })
        .collect_view();

    view! {
      <select on:change={move |ev| match Choice::<V>::parse(&event_target_value(&ev)) {
        Ok(choice) => on_change.call(choice),
        Err(_) => tracing::warn!("unknown select value"),
      }}>
        <option value="all" selected=move || value.with(|c| c.is_any())>{all_label}</option>
        {entries}
      </select>
    }
}
