//! Payment Page - book a session by card or crypto
//!
//! The [`PaymentSelector`] decides which form may be active; this page only
//! renders its answer and reports rejections as notices.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_params_map};
use lib_wallet::payment::{
    format_card_number, format_expiry, BookingRequest, CardDetails, Hours, PaymentSelector, MAX_HOURS, MIN_HOURS,
};
use shared::dto::payment::{CryptoCurrency, PaymentMethod};
use shared::dto::professional::{find_professional, Professional};
use web_sys::{Event, SubmitEvent};

use crate::components::{ConnectWalletModal, WalletStatus};
use crate::data::professionals;
use crate::state::notice::use_notice_context;
use crate::state::wallet::use_wallet_context;
use crate::utils::format::format_usd;

/// Simulated processing time before a booking is confirmed
const PROCESSING_MS: u32 = 2_000;
/// Delay before leaving the success screen
const REDIRECT_MS: u32 = 3_000;

/// Example receiving address shown on the crypto form
const RECEIVING_ADDRESS: &str = "bc1qxy2kgdygjrsqtzq2n0yrf2493p83kkfjhx0wlh";

#[component]
pub fn PaymentPage() -> impl IntoView {
    let params = use_params_map();

    let professional = move || {
        params
            .read()
            .get("id")
            .and_then(|id| id.parse::<u32>().ok())
            .and_then(|id| find_professional(&professionals(), id).cloned())
    };

    move || match professional() {
        Some(p) => view! { <BookingForm professional=p/> }.into_any(),
        None => view! { <ProfessionalNotFound/> }.into_any(),
    }
}

#[component]
fn ProfessionalNotFound() -> impl IntoView {
    view! {
        <div class="page page-narrow">
            <div class="card" style="text-align: center;">
                <h2>"Professional Not Found"</h2>
                <p class="muted">"The professional you're looking for doesn't exist or has been removed."</p>
                <A href="/">
                    <span class="btn">"Back to Explore"</span>
                </A>
            </div>
        </div>
    }
}

#[component]
fn BookingForm(professional: Professional) -> impl IntoView {
    let wallet = use_wallet_context();
    let notices = use_notice_context();
    let navigate = StoredValue::new_local(use_navigate());

    let selector = RwSignal::new(PaymentSelector::new(&professional));
    let (first_day, first_slot) = professional
        .first_opening()
        .map(|(d, s)| (d.to_string(), s.to_string()))
        .unwrap_or_else(|| ("N/A".to_string(), "N/A".to_string()));
    let day = RwSignal::new(first_day);
    let slot = RwSignal::new(first_slot);
    let hours_input = RwSignal::new(Hours::default().get().to_string());
    let hours = move || hours_input.with(|raw| raw.parse::<Hours>());

    let card_name = RwSignal::new(String::new());
    let card_number = RwSignal::new(String::new());
    let card_expiry = RwSignal::new(String::new());
    let card_cvc = RwSignal::new(String::new());

    let processing = RwSignal::new(false);
    let success = RwSignal::new(false);
    let modal_open = RwSignal::new(false);

    let professional = StoredValue::new(professional);

    // Fall back to card when the wallet goes away under the crypto form
    Effect::new(move |_| {
        let connected = wallet.session.with(|s| s.is_connected());
        let on_crypto = selector.with_untracked(|s| s.selection().method == PaymentMethod::Crypto);
        if !connected && on_crypto {
            selector.update(|s| {
                let _ = s.select_method(PaymentMethod::Card, &wallet.session.get_untracked());
            });
            notices.error("Wallet disconnected", "Switched back to card payment.");
        }
    });

    let select_method = move |method: PaymentMethod| {
        let session = wallet.session.get_untracked();
        let result = selector.try_update(|s| s.select_method(method, &session));
        if let Some(Err(e)) = result {
            notices.error("Cryptocurrency unavailable", e.user_message());
        }
    };

    let on_currency = move |ev: Event| {
        match event_target_value(&ev).parse::<CryptoCurrency>() {
            Ok(currency) => {
                if let Some(Err(e)) = selector.try_update(|s| s.select_currency(currency)) {
                    notices.error("Cannot select currency", e.user_message());
                }
            }
            Err(e) => log::warn!("{}", e),
        }
    };


    let on_day = move |ev: Event| {
        let d = event_target_value(&ev);
        let first = professional.with_value(|p| p.slots_for(&d).first().cloned().unwrap_or_default());
        day.set(d);
        slot.set(first);
    };

    // Invalid hours show their error in place of a total
    let total = move || hours().and_then(|h| selector.with(|s| s.total(i64::from(h.get()))));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if processing.get_untracked() {
            return;
        }

        let card = (selector.with_untracked(|s| s.selection().method) == PaymentMethod::Card).then(|| CardDetails {
            name: card_name.get_untracked(),
            number: card_number.get_untracked(),
            expiry: card_expiry.get_untracked(),
            cvc: card_cvc.get_untracked(),
        });
        let hours = match hours_input.with_untracked(|raw| raw.parse::<Hours>()) {
            Ok(h) => i64::from(h.get()),
            Err(e) => {
                notices.error("Cannot complete booking", e.user_message());
                return;
            }
        };
        let request = BookingRequest {
            hours,
            day: day.get_untracked(),
            slot: slot.get_untracked(),
            card,
        };

        let intent = match selector.with_untracked(|s| s.confirm(&request, &wallet.session.get_untracked())) {
            Ok(intent) => intent,
            Err(e) => {
                notices.error("Cannot complete booking", e.user_message());
                return;
            }
        };

        log::info!(
            "Booking {} for {}h via {}: {}",
            intent.professional_name,
            intent.hours,
            intent.method.label(),
            format_usd(intent.total_usd)
        );
        processing.set(true);

        leptos::task::spawn_local(async move {
            TimeoutFuture::new(PROCESSING_MS).await;
            processing.set(false);
            success.set(true);
            notices.info(
                "Payment Successful (Simulated)",
                format!("Your session with {} has been booked.", intent.professional_name),
            );
            TimeoutFuture::new(REDIRECT_MS).await;
            // The user may have left the page already
            let _ = navigate.try_with_value(|nav| nav("/", Default::default()));
        });
    };

    let method = move || selector.with(|s| s.selection().method);
    let accepts_crypto = selector.with_untracked(|s| s.accepts_crypto());
    let name = professional.with_value(|p| p.name.clone());
    let summary_name = name.clone();
    let success_name = name.clone();
    let title = professional.with_value(|p| p.title.clone());
    let hourly_rate = professional.with_value(|p| p.hourly_rate);

    view! {
        <div class="page">
            <h1 class="page-title">"Book a Session"</h1>
            <p class="muted">"Complete your booking with "{name}</p>

            <Show
                when=move || !success.get()
                fallback=move || view! { <SuccessMessage name=success_name.clone()/> }
            >
                <div class="payment-layout">
                    <form class="card" on:submit=on_submit>
                        <h2 class="card-title">"Payment Details"</h2>

                        <div class="tabs">
                            <button
                                type="button"
                                class="tab"
                                class:active=move || method() == PaymentMethod::Card
                                disabled=move || processing.get()
                                on:click=move |_| select_method(PaymentMethod::Card)
                            >
                                "Credit Card"
                            </button>
                            <button
                                type="button"
                                class="tab"
                                class:active=move || method() == PaymentMethod::Crypto
                                class:locked=move || !wallet.is_connected()
                                disabled=move || !accepts_crypto || processing.get()
                                on:click=move |_| select_method(PaymentMethod::Crypto)
                            >
                                "Cryptocurrency"
                            </button>
                        </div>

                        {(!accepts_crypto).then(|| view! {
                            <p class="hint">"This professional accepts card payments only."</p>
                        })}

                        {move || match method() {
                            PaymentMethod::Card => view! {
                                <CardPaymentForm
                                    name=card_name
                                    number=card_number
                                    expiry=card_expiry
                                    cvc=card_cvc
                                    processing=processing
                                />
                            }
                            .into_any(),
                            PaymentMethod::Crypto => view! {
                                <div class="form-stack">
                                    <WalletStatus/>
                                    <label for="crypto-currency">"Select Cryptocurrency"</label>
                                    <select
                                        id="crypto-currency"
                                        disabled=move || processing.get()
                                        on:change=on_currency
                                        prop:value=move || selector.with(|s| {
                                            s.selection().crypto_currency.unwrap_or_default().value()
                                        })
                                    >
                                        {CryptoCurrency::ALL
                                            .iter()
                                            .map(|c| view! { <option value=c.value()>{c.label()}</option> })
                                            .collect_view()}
                                    </select>
                                    <div class="crypto-box">
                                        <p class="muted">"Send payment to (example address):"</p>
                                        <p class="mono">{RECEIVING_ADDRESS}</p>
                                        <p class="muted">
                                            {move || {
                                                let symbol = selector.with(|s| {
                                                    s.selection().crypto_currency.unwrap_or_default().symbol()
                                                });
                                                let amount = total().map(format_usd).unwrap_or_default();
                                                format!("Send exactly {} worth of {} to the address above.", amount, symbol)
                                            }}
                                        </p>
                                    </div>
                                </div>
                            }
                            .into_any(),
                        }}

                        <Show when=move || accepts_crypto && !wallet.is_connected()>
                            <button type="button" class="btn btn-outline" on:click=move |_| modal_open.set(true)>
                                "Connect Wallet to pay with crypto"
                            </button>
                        </Show>

                        <h3>"Session Details"</h3>
                        <div class="form-grid">
                            <div class="form-field">
                                <label for="day">"Select Day"</label>
                                <select
                                    id="day"
                                    disabled=move || processing.get()
                                    on:change=on_day
                                    prop:value=move || day.get()
                                >
                                    {professional.with_value(|p| {
                                        p.availability
                                            .iter()
                                            .map(|a| view! { <option value=a.day.clone()>{a.day.clone()}</option> })
                                            .collect_view()
                                    })}
                                </select>
                            </div>
                            <div class="form-field">
                                <label for="slot">"Select Time"</label>
                                <select
                                    id="slot"
                                    disabled=move || processing.get()
                                    on:change=move |ev| slot.set(event_target_value(&ev))
                                    prop:value=move || slot.get()
                                >
                                    {move || {
                                        let d = day.get();
                                        professional.with_value(|p| p.slots_for(&d).to_vec())
                                            .into_iter()
                                            .map(|s| view! { <option value=s.clone()>{s.clone()}</option> })
                                            .collect_view()
                                    }}
                                </select>
                            </div>
                        </div>
                        <div class="form-field">
                            <label for="hours">"Number of Hours"</label>
                            <input
                                id="hours"
                                type="number"
                                min=MIN_HOURS.to_string()
                                max=MAX_HOURS.to_string()
                                disabled=move || processing.get()
                                class:invalid=move || hours().is_err()
                                prop:value=move || hours_input.get()
                                on:input=move |ev| hours_input.set(event_target_value(&ev))
                            />
                            {move || hours().err().map(|e| view! { <p class="field-error">{e.user_message()}</p> })}
                        </div>

                        <button type="submit" class="btn btn-wide" disabled=move || processing.get()>
                            {move || if processing.get() { "Processing..." } else { "Complete Booking" }}
                        </button>
                    </form>

                    <div class="card order-summary">
                        <h2 class="card-title">"Order Summary"</h2>
                        <h4>{summary_name.clone()}</h4>
                        <p class="muted">{title.clone()}</p>
                        <p>{move || day.get()}</p>
                        <p>{move || slot.get()}</p>
                        <div class="summary-row">
                            <span class="muted">"Hourly Rate"</span>
                            <span>{format_usd(u64::from(hourly_rate))}</span>
                        </div>
                        <div class="summary-row">
                            <span class="muted">"Hours"</span>
                            <span>{move || format!("× {}", hours_input.get().trim())}</span>
                        </div>
                        <div class="summary-row total">
                            <span>"Total"</span>
                            <span>{move || total().map(format_usd).unwrap_or_else(|e| e.user_message())}</span>
                        </div>
                    </div>
                </div>
            </Show>

            <ConnectWalletModal open=modal_open/>
        </div>
    }
}

#[component]
fn CardPaymentForm(
    name: RwSignal<String>,
    number: RwSignal<String>,
    expiry: RwSignal<String>,
    cvc: RwSignal<String>,
    processing: RwSignal<bool>,
) -> impl IntoView {
    view! {
        <div class="form-stack">
            <div class="form-field">
                <label for="name">"Name on Card"</label>
                <input
                    id="name"
                    placeholder="John Smith"
                    disabled=move || processing.get()
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
            </div>
            <div class="form-field">
                <label for="number">"Card Number"</label>
                <input
                    id="number"
                    placeholder="4242 4242 4242 4242"
                    maxlength="19"
                    disabled=move || processing.get()
                    prop:value=move || number.get()
                    on:input=move |ev| number.set(format_card_number(&event_target_value(&ev)))
                />
            </div>
            <div class="form-grid">
                <div class="form-field">
                    <label for="expiry">"Expiry Date"</label>
                    <input
                        id="expiry"
                        placeholder="MM/YY"
                        maxlength="5"
                        disabled=move || processing.get()
                        prop:value=move || expiry.get()
                        on:input=move |ev| expiry.set(format_expiry(&event_target_value(&ev)))
                    />
                </div>
                <div class="form-field">
                    <label for="cvc">"CVC"</label>
                    <input
                        id="cvc"
                        placeholder="123"
                        maxlength="3"
                        disabled=move || processing.get()
                        prop:value=move || cvc.get()
                        on:input=move |ev| cvc.set(event_target_value(&ev))
                    />
                </div>
            </div>
        </div>
    }
}

#[component]
fn SuccessMessage(name: String) -> impl IntoView {
    view! {
        <div class="card success">
            <h2>"Booking Confirmed!"</h2>
            <p class="muted">
                "Your session with "{name}" has been successfully booked."
            </p>
            <A href="/">
                <span class="btn btn-outline">"Find More Professionals"</span>
            </A>
        </div>
    }
}
