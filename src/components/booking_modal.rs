use leptos::prelude::*;

use crate::models::{BookingError, BookingForm, BookingRequest, RoomCategory, MAX_GUESTS, MIN_GUESTS};

/// Booking dialog. Requests are validated locally and acknowledged; there
/// is no reservation endpoint to send them to.
#[component]
pub fn BookingModal(open: ReadSignal<bool>, set_open: WriteSignal<bool>, phone: String) -> impl IntoView {
    let phone = StoredValue::new(phone);
    let form = RwSignal::new(BookingForm::default());
    let (outcome, set_outcome) = signal(Option::<Result<BookingRequest, Vec<BookingError>>>::None);

    let close = move || {
        set_open.set(false);
        set_outcome.set(None);
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let result = form.get_untracked().validate();
        if let Ok(request) = &result {
            leptos::logging::log!(
                "booking request: {} x{} {} -> {}",
                request.room.as_str(),
                request.guests,
                request.check_in,
                request.check_out
            );
            form.set(BookingForm::default());
        }
        set_outcome.set(Some(result));
    };

    view! {
        <Show when=move || open.get()>
            <div class="modal-backdrop" on:click=move |_| close()>
                <div class="modal-card" role="dialog" aria-modal="true" on:click=|ev| ev.stop_propagation()>
                    <button class="modal-close" aria-label="Close" on:click=move |_| close()>
                        "\u{2715}"
                    </button>

                    <div class="modal-header">
                        <h2>"Book Your Stay"</h2>
                        <p>"Fill in the details below to reserve your room"</p>
                    </div>

                    {move || match outcome.get() {
                        Some(Ok(request)) => view! {
                            <div class="booking-confirmed">
                                <p class="success">
                                    {format!(
                                        "Thank you! We will call {} to confirm your {} for {} night(s) from {}.",
                                        request.phone,
                                        request.room.label(),
                                        request.nights(),
                                        request.check_in.format("%d %b %Y"),
                                    )}
                                </p>
                                <button class="btn btn-primary" on:click=move |_| close()>"Close"</button>
                            </div>
                        }
                        .into_any(),
                        other => {
                            let errors = match other {
                                Some(Err(errors)) => errors,
                                _ => Vec::new(),
                            };
                            let has_errors = !errors.is_empty();
                            view! {
                                <form class="booking-form" on:submit=on_submit>
                                    <div class="form-group">
                                        <label for="room">"Room Type " <span class="required">"*"</span></label>
                                        <select
                                            id="room"
                                            name="room"
                                            required
                                            prop:value=move || form.with(|f| f.room.clone())
                                            on:change=move |ev| form.update(|f| f.room = event_target_value(&ev))
                                        >
                                            <option value="">"Select a room"</option>
                                            {RoomCategory::all()
                                                .into_iter()
                                                .map(|r| view! { <option value=r.as_str()>{r.label()}</option> })
                                                .collect_view()}
                                        </select>
                                    </div>

                                    <div class="form-group">
                                        <label for="guests">"Number of Guests " <span class="required">"*"</span></label>
                                        <input
                                            id="guests"
                                            type="number"
                                            min=MIN_GUESTS.to_string()
                                            max=MAX_GUESTS.to_string()
                                            required
                                            placeholder="2"
                                            prop:value=move || form.with(|f| f.guests.clone())
                                            on:input=move |ev| form.update(|f| f.guests = event_target_value(&ev))
                                        />
                                    </div>

                                    <div class="form-row">
                                        <div class="form-group">
                                            <label for="checkin">"Check-in Date " <span class="required">"*"</span></label>
                                            <input
                                                id="checkin"
                                                type="date"
                                                required
                                                prop:value=move || form.with(|f| f.check_in.clone())
                                                on:input=move |ev| form.update(|f| f.check_in = event_target_value(&ev))
                                            />
                                        </div>
                                        <div class="form-group">
                                            <label for="checkout">"Check-out Date " <span class="required">"*"</span></label>
                                            <input
                                                id="checkout"
                                                type="date"
                                                required
                                                prop:value=move || form.with(|f| f.check_out.clone())
                                                on:input=move |ev| form.update(|f| f.check_out = event_target_value(&ev))
                                            />
                                        </div>
                                    </div>

                                    <div class="form-group">
                                        <label for="phone">"Phone Number " <span class="required">"*"</span></label>
                                        <input
                                            id="phone"
                                            type="tel"
                                            required
                                            placeholder=phone.get_value()
                                            prop:value=move || form.with(|f| f.phone.clone())
                                            on:input=move |ev| form.update(|f| f.phone = event_target_value(&ev))
                                        />
                                    </div>

                                    <div class="form-group">
                                        <label for="email">"Email Address " <span class="optional">"(optional)"</span></label>
                                        <input
                                            id="email"
                                            type="email"
                                            placeholder="your@email.com"
                                            prop:value=move || form.with(|f| f.email.clone())
                                            on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                                        />
                                    </div>

                                    <Show when=move || has_errors>
                                        <ul class="form-errors">
                                            {errors.iter().map(|e| view! { <li class="error">{e.to_string()}</li> }).collect_view()}
                                        </ul>
                                    </Show>

                                    <div class="form-actions">
                                        <button type="button" class="btn btn-secondary" on:click=move |_| close()>
                                            "Cancel"
                                        </button>
                                        <button type="submit" class="btn btn-primary">"Confirm Booking"</button>
                                    </div>
                                </form>
                            }
                            .into_any()
                        }
                    }}
                </div>
            </div>
        </Show>
    }
}
