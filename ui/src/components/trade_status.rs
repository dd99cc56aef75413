//! Status banner for the market page: role, standing offer, outcome, errors.

use leptos::prelude::*;

use market::role::Role;

use crate::state::trade::TradeState;
use crate::util::format::format_amount;

#[component]
pub fn TradeStatus(trade: RwSignal<TradeState>) -> impl IntoView {
    view! {
        <div class="trade-status">
            <p class="trade-status__role">
                {move || match trade.with(|t| t.role) {
                    Role::Buyer => "You are a buyer. Accept an ask, or place a bid.",
                    Role::Seller => "You are a seller. Accept a bid, or place an ask.",
                }}
            </p>
            <Show
                when=move || trade.with(|t| t.traded)
                fallback=move || {
                    view! {
                        <p class="trade-status__offer">
                            {move || {
                                trade
                                    .with(|t| t.offer_amount)
                                    .map_or_else(
                                        || "You have no standing offer.".to_owned(),
                                        |amount| {
                                            format!("Your standing offer: {}", format_amount(amount))
                                        },
                                    )
                            }}
                        </p>
                    }
                }
            >
                <p class="trade-status__traded">
                    {move || {
                        let profit = trade.with(|t| t.profit).unwrap_or_default();
                        format!("You traded. Your profit: {}", format_amount(profit))
                    }}
                </p>
            </Show>
            <Show when=move || trade.with(|t| t.error.is_some())>
                <p class="trade-status__error">
                    {move || trade.with(|t| t.error.clone()).unwrap_or_default()}
                </p>
            </Show>
        </div>
    }
}
