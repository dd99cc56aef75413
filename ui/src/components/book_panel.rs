//! Order-book columns: asks, bids, and executed trades.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use market::book::{Offer, Transaction};

use crate::util::format::format_amount;

/// One side of the book. Offers render as price badges; when `enabled`, each
/// badge is a button that accepts the offer.
#[component]
pub fn OfferColumn(
    title: &'static str,
    /// CSS tone modifier, `"ask"` or `"bid"`.
    tone: &'static str,
    #[prop(into)] offers: Signal<Vec<Offer>>,
    #[prop(into)] enabled: Signal<bool>,
    #[prop(into)] on_accept: Callback<String>,
) -> impl IntoView {
    view! {
        <section class="book-column">
            <h3 class="book-column__title">{title}</h3>
            <div class="book-column__list">
                {move || {
                    offers
                        .get()
                        .into_iter()
                        .map(|offer| {
                            let label = format_amount(offer.price);
                            if enabled.get() {
                                let id = offer.id;
                                view! {
                                    <button
                                        type="button"
                                        class=format!("book-badge book-badge--{tone} book-badge--open")
                                        on:click=move |_| on_accept.run(id.clone())
                                    >
                                        {label}
                                    </button>
                                }
                                    .into_any()
                            } else {
                                view! {
                                    <span class=format!("book-badge book-badge--{tone}")>
                                        {label}
                                    </span>
                                }
                                    .into_any()
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
        </section>
    }
}

/// Executed trades, newest first, never clickable.
#[component]
pub fn TransactionColumn(
    title: &'static str,
    #[prop(into)] txs: Signal<Vec<Transaction>>,
) -> impl IntoView {
    view! {
        <section class="book-column">
            <h3 class="book-column__title">{title}</h3>
            <div class="book-column__list">
                {move || {
                    txs.get()
                        .into_iter()
                        .map(|tx| {
                            view! {
                                <span class="book-badge book-badge--trade">
                                    {format_amount(tx.price)}
                                </span>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
        </section>
    }
}
