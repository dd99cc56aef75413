//! Offer entry form: submit, replace, or withdraw a standing offer.

#[cfg(test)]
#[path = "offer_form_test.rs"]
mod offer_form_test;

use leptos::prelude::*;

use crate::state::trade::TradeState;

/// Client-side validation of the amount field.
///
/// The server rejects bad amounts too; validating here keeps obviously wrong
/// input from burning a round trip.
fn parse_amount(raw: &str) -> Result<f64, &'static str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err("Enter an amount first.");
    }
    let Ok(value) = trimmed.parse::<f64>() else {
        return Err("Amounts must be numbers.");
    };
    if !value.is_finite() {
        return Err("Amounts must be numbers.");
    }
    if value < 0.0 {
        return Err("Amounts cannot be negative.");
    }
    Ok(value)
}

/// The offer form. `on_submit` receives `Some(amount)` for a new offer and
/// `None` for a withdrawal; everything is disabled while a request is in
/// flight or after the participant traded.
#[component]
pub fn OfferForm(
    trade: RwSignal<TradeState>,
    #[prop(into)] on_submit: Callback<Option<f64>>,
) -> impl IntoView {
    let amount = RwSignal::new(String::new());
    let note = RwSignal::new(None::<&'static str>);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !trade.with_untracked(TradeState::can_submit) {
            return;
        }
        match parse_amount(&amount.get_untracked()) {
            Ok(value) => {
                note.set(None);
                on_submit.run(Some(value));
            }
            Err(reason) => note.set(Some(reason)),
        }
    };

    let withdraw = move |_| {
        if !trade.with_untracked(|t| t.can_submit() && t.has_offer()) {
            return;
        }
        note.set(None);
        on_submit.run(None);
    };

    view! {
        <form class="offer-form" on:submit=submit>
            <input
                class="offer-form__amount"
                type="number"
                step="0.01"
                min="0"
                placeholder="0.00"
                prop:value=move || amount.get()
                on:input=move |ev| amount.set(event_target_value(&ev))
                disabled=move || !trade.with(|t| t.can_submit())
            />
            <button
                type="submit"
                class="offer-form__submit"
                disabled=move || !trade.with(|t| t.can_submit())
            >
                {move || if trade.with(|t| t.has_offer()) { "Replace offer" } else { "Submit offer" }}
            </button>
            <Show when=move || trade.with(|t| t.has_offer())>
                <button
                    type="button"
                    class="offer-form__withdraw"
                    disabled=move || !trade.with(|t| t.can_submit())
                    on:click=withdraw
                >
                    "Withdraw offer"
                </button>
            </Show>
            <Show when=move || note.get().is_some()>
                <p class="offer-form__note">{move || note.get().unwrap_or_default()}</p>
            </Show>
        </form>
    }
}
