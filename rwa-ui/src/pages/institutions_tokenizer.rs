use leptos::*;
use rwa_core::inquiry::{InquiryForm, SubmitPhase, MIN_DESCRIPTION_CHARS};

use crate::state::{after_latency, use_config};

const BENEFITS: [(&str, &str); 4] = [
    ("Fractional Ownership", "Split large assets into tradable oNFT tokens."),
    ("Global Liquidity", "Reach investors on every supported chain."),
    ("Automated Yield", "Revenue is distributed to holders on-chain."),
    ("Compliance Ready", "KYC-gated transfers and audited contracts."),
];

const STEPS: [&str; 4] = [
    "Submit your asset details",
    "Due diligence and valuation",
    "Token structuring and audit",
    "Launch on the RWA vault",
];

fn field_error(message: Option<&'static str>) -> impl IntoView {
    message.map(|m| view! { <div class="error">{m}</div> })
}

#[component]
pub fn InstitutionsTokenizerPage() -> impl IntoView {
    let config = use_config();
    let form = create_rw_signal(InquiryForm::default());
    let phase = create_memo(move |_| form.with(|f| f.phase()));

    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        match form.try_update(|f| f.begin_submit()) {
            Some(Ok(())) => after_latency(&config, move || {
                form.update(|f| {
                    f.complete();
                })
            }),
            Some(Err(blocked)) => tracing::debug!(?blocked, "inquiry not submitted"),
            None => {}
        }
    };

    view! {
      <div class="stack">
        <section class="card hero">
          <h2>"Tokenize Your Real-World Assets"</h2>
          <p class="meta">
            "Bring GPU clusters, real estate, energy infrastructure and financial instruments on-chain."
          </p>
        </section>

        <div class="grid four">
          {BENEFITS
            .into_iter()
            .map(|(title, text)| view! {
              <div class="card">
                <h4>{title}</h4>
                <p class="meta">{text}</p>
              </div>
            })
            .collect_view()}
        </div>

        <section class="card">
          <h3>"How It Works"</h3>
          <ol class="steps">
            {STEPS.into_iter().map(|s| view! { <li>{s}</li> }).collect_view()}
          </ol>
        </section>

        <section class="card">
          <h3>"Request Early Access"</h3>
          <Show
            when=move || phase.get() != SubmitPhase::Submitted
            fallback=move || view! {
              <div class="ok">
                <p>"Thanks! Our team will contact you within two business days."</p>
                <button class="button secondary" on:click=move |_| form.update(|f| f.reset())>
                  "Submit another request"
                </button>
              </div>
            }
          >
            <form class="stack" on:submit=submit.clone()>
              <label class="meta">"Work Email"</label>
              <input
                type="text"
                placeholder="you@institution.com"
                prop:value=move || form.with(|f| f.email().to_string())
                on:input=move |ev| form.update(|f| f.set_email(event_target_value(&ev)))
              />
              {move || form.with(|f| field_error(f.errors().email))}

              <label class="meta">"Describe your asset and use case"</label>
              <textarea
                rows="5"
                prop:value=move || form.with(|f| f.description().to_string())
                on:input=move |ev| form.update(|f| f.set_description(event_target_value(&ev)))
              ></textarea>
              <div class="meta">
                {move || format!("{} / {MIN_DESCRIPTION_CHARS} characters minimum", form.with(|f| f.description_chars()))}
              </div>
              {move || form.with(|f| field_error(f.errors().description))}

              <button class="button" type="submit" disabled=move || phase.get() == SubmitPhase::Submitting>
                {move || if phase.get() == SubmitPhase::Submitting { "Submitting..." } else { "Request Access" }}
              </button>
            </form>
          </Show>
        </section>
      </div>
    }
}
