//! Card Form Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use checkout_client::CheckoutClient;
use checkout_core::{
    flow, CardBrand, FormEvent, FormState, LivenessGuard, Order, SubmitOutcome, NOTICE_AUTO_HIDE,
};

use crate::app::Theme;
use crate::components::{BrandBadge, Snackbar};

/// Backend base URL, resolved at build time like the bundler env it mirrors
const BASE_URL: Option<&str> = option_env!("CHECKOUT_BASE_URL");

fn backend_client() -> CheckoutClient {
    BASE_URL.map_or_else(CheckoutClient::default, CheckoutClient::from_base_url)
}

#[component]
pub fn CardForm(order_id: String, theme: Theme) -> impl IntoView {
    let (form, set_form) = signal(FormState::default());
    let (order, set_order) = signal(None::<Order>);
    let (show_success, set_show_success) = signal(false);
    let (show_failure, set_show_failure) = signal(false);

    // Fetch the order once at mount. The guard is revoked on teardown so a
    // late response is dropped instead of touching disposed state.
    let liveness = LivenessGuard::new();
    on_cleanup({
        let liveness = liveness.clone();
        move || liveness.revoke()
    });
    {
        let order_id = order_id.clone();
        let liveness = liveness.clone();
        spawn_local(async move {
            let client = backend_client();
            let fetched = flow::load_order(&client, &order_id).await;
            if liveness.is_live() {
                set_order.set(fetched);
            }
        });
    }

    let submit = {
        let order_id = order_id.clone();
        move |_| {
            let state = form.get();
            if !state.can_submit() {
                return;
            }
            set_form.update(|f| f.apply(FormEvent::SubmitStarted));

            let order_id = order_id.clone();
            spawn_local(async move {
                let client = backend_client();
                let outcome = flow::submit_payment(&client, &order_id, &state.input).await;
                set_form.update(|f| f.apply(FormEvent::SubmitSettled));
                match outcome {
                    SubmitOutcome::Success => {
                        set_show_success.set(true);
                        set_timeout(move || set_show_success.set(false), NOTICE_AUTO_HIDE);
                    }
                    SubmitOutcome::Failure => {
                        set_show_failure.set(true);
                        set_timeout(move || set_show_failure.set(false), NOTICE_AUTO_HIDE);
                    }
                }
            });
        }
    };

    let brand = Signal::derive(move || form.with(|f| CardBrand::detect(&f.input.number)));
    let amount = move || order.with(|o| o.as_ref().map(Order::display_amount).unwrap_or_default());

    view! {
        <div
            class="checkout-card"
            style=format!(
                "width: 400px; height: 400px; border: 1px solid black; padding: 20px 24px 0; --color-primary: {};",
                theme.primary
            )
        >
            <div class="field">
                <label class="field-label">"Номер карты"</label>
                <div class="field-input">
                    <input
                        id="card-number"
                        placeholder="4444 4444 4444 4444"
                        prop:value=move || form.with(|f| f.input.number.clone())
                        on:input=move |ev| {
                            set_form.update(|f| f.apply(FormEvent::NumberChanged(event_target_value(&ev))));
                        }
                        style:border-color=move || {
                            form.with(|f| if f.errors.number.is_some() { theme.error } else { "" })
                        }
                    />
                    <BrandBadge brand=brand />
                </div>
            </div>

            <div class="field-row" style="display: flex; justify-content: space-between; gap: 30px; margin-top: 10px;">
                <div class="field">
                    <label class="field-label">"Срок карты"</label>
                    <input
                        id="card-expiry"
                        placeholder="12/34"
                        prop:value=move || form.with(|f| f.input.expiry.clone())
                        on:input=move |ev| {
                            set_form.update(|f| f.apply(FormEvent::ExpiryChanged(event_target_value(&ev))));
                        }
                        on:blur=move |_| set_form.update(|f| f.apply(FormEvent::ExpiryBlurred))
                        style:border-color=move || {
                            form.with(|f| if f.errors.expiry.is_some() { theme.error } else { "" })
                        }
                    />
                </div>
                <div class="field">
                    <label class="field-label">"CVV"</label>
                    <input
                        id="card-cvv"
                        placeholder="123"
                        prop:value=move || form.with(|f| f.input.cvv.clone())
                        on:input=move |ev| {
                            set_form.update(|f| f.apply(FormEvent::CvvChanged(event_target_value(&ev))));
                        }
                        style:border-color=move || {
                            form.with(|f| if f.errors.cvv.is_some() { theme.error } else { "" })
                        }
                    />
                </div>
            </div>

            <label class="save-card">
                <input
                    type="checkbox"
                    prop:checked=move || form.with(|f| f.input.save_card)
                    on:change=move |ev| {
                        set_form.update(|f| f.apply(FormEvent::SaveCardToggled(event_target_checked(&ev))));
                    }
                />
                "Сохранить карту на этом сайте"
            </label>

            <button
                class="pay-button"
                style="width: 100%; margin-top: 20px; border-radius: 10px;"
                disabled=move || !form.with(FormState::can_submit)
                on:click=submit
            >
                {move || format!("Оплатить {}₸", amount())}
            </button>
        </div>

        <Snackbar
            visible=show_success
            set_visible=set_show_success
            severity="success"
            message="Payment successful!"
        />
        <Snackbar
            visible=show_failure
            set_visible=set_show_failure
            severity="error"
            message="Payment failed. Please try again."
        />
    }
}
