use leptos::*;
use rwa_core::stepper::PurchaseBounds;

/// Minus/plus buttons, a number field and a slider over one quantity.
///
/// The component only reports input; the owner clamps it through the
/// page's quantity book and feeds the result back via `quantity`.
#[component]
pub fn QuantityStepper(
    quantity: Signal<u64>,
    bounds: PurchaseBounds,
    #[prop(into)] on_decrement: Callback<()>,
    #[prop(into)] on_increment: Callback<()>,
    #[prop(into)] on_enter: Callback<String>,
) -> impl IntoView {
    let (min, upper) = (bounds.min(), bounds.upper());

    view! {
      <div class="stepper">
        <div class="row">
          <button
            disabled=move || !bounds.can_decrement(quantity.get())
            on:click=move |_| on_decrement.call(())
          >
            "−"
          </button>
          <input
            type="number"
            min=min
            max=upper
            prop:value=move || quantity.get().to_string()
            on:change=move |ev| on_enter.call(event_target_value(&ev))
          />
          <button
            disabled=move || !bounds.can_increment(quantity.get())
            on:click=move |_| on_increment.call(())
          >
            "+"
          </button>
        </div>
        <input
          type="range"
          min=min
          max=upper
          prop:value=move || quantity.get().to_string()
          on:input=move |ev| on_enter.call(event_target_value(&ev))
        />
        <div class="row meta">
          <span>{format!("Min: {min}")}</span>
          <span>{format!("Max: {upper}")}</span>
        </div>
      </div>
    }
}

/// Log a quantity change the page refused. Bounds are checked before the
/// modal opens, so this only fires if the offering changed underneath it.
pub fn report_step(result: rwa_core::Result<u64>) {
    if let Err(err) = result {
        tracing::warn!(%err, "quantity change rejected");
    }
}
