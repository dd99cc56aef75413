//! Market page: the participant's view of one double-auction round.
//!
//! The page owns the [`TradeState`] controller, subscribes to the market
//! push events, and fetches the initial snapshot once the host is ready.
//! All user-initiated RPCs run through the controller's in-flight guard so
//! a slow server cannot be double-submitted against.

use leptos::prelude::*;
use leptos_meta::Title;

use market::role::{Role, Side};

use crate::components::book_panel::{OfferColumn, TransactionColumn};
use crate::components::offer_form::OfferForm;
use crate::components::trade_status::TradeStatus;
use crate::net::{bridge, events, rpc};
use crate::state::trade::TradeState;

#[component]
pub fn TradePage() -> impl IntoView {
    let role = Role::from_buyer_flag(bridge::page_var("buyer").unwrap_or(false));
    let standing = bridge::page_var::<Option<f64>>("offer_amount").flatten();
    let trade = RwSignal::new(TradeState::new(role, standing));

    events::on_market_events(move |event| trade.update(|t| t.apply(event)));

    bridge::on_ready(move || {
        leptos::task::spawn_local(async move {
            match rpc::get_market().await {
                Ok(snapshot) => trade.update(|t| t.market = snapshot),
                Err(err) => trade.update(|t| t.request_failed(err.to_string())),
            }
        });
    });

    let accept = move |side: Side, id: String| {
        if !trade.with_untracked(|t| t.can_accept(side)) {
            return;
        }
        let started = trade.try_update(TradeState::begin_request).unwrap_or(false);
        if !started {
            return;
        }
        leptos::task::spawn_local(async move {
            match rpc::accept_offer(&id).await {
                Ok(profit) => trade.update(|t| t.trade_completed(profit)),
                Err(err) => trade.update(|t| t.request_failed(err.to_string())),
            }
        });
    };
    let accept_ask = Callback::new(move |id: String| accept(Side::Ask, id));
    let accept_bid = Callback::new(move |id: String| accept(Side::Bid, id));

    let submit_offer = Callback::new(move |amount: Option<f64>| {
        if !trade.with_untracked(TradeState::can_submit) {
            return;
        }
        let started = trade.try_update(TradeState::begin_request).unwrap_or(false);
        if !started {
            return;
        }
        leptos::task::spawn_local(async move {
            match rpc::make_offer(amount).await {
                Ok(new_amount) => trade.update(|t| t.offer_submitted(new_amount)),
                Err(err) => trade.update(|t| t.request_failed(err.to_string())),
            }
        });
    });

    let asks = Signal::derive(move || trade.with(|t| t.market.sorted_asks()));
    let bids = Signal::derive(move || trade.with(|t| t.market.sorted_bids()));
    let txs = Signal::derive(move || trade.with(|t| t.market.recent_txs()));
    let can_take_asks = Signal::derive(move || trade.with(|t| t.can_accept(Side::Ask)));
    let can_take_bids = Signal::derive(move || trade.with(|t| t.can_accept(Side::Bid)));

    view! {
        <Title text="Double auction"/>
        <main class="trade-page">
            <TradeStatus trade=trade/>
            <Show when=move || !trade.with(|t| t.traded)>
                <OfferForm trade=trade on_submit=submit_offer/>
            </Show>
            <div class="trade-page__book">
                <OfferColumn
                    title="Asks"
                    tone="ask"
                    offers=asks
                    enabled=can_take_asks
                    on_accept=accept_ask
                />
                <OfferColumn
                    title="Bids"
                    tone="bid"
                    offers=bids
                    enabled=can_take_bids
                    on_accept=accept_bid
                />
                <TransactionColumn title="Trades" txs=txs/>
            </div>
        </main>
    }
}
