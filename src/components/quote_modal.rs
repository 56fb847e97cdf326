//! Quote Modal Component
//!
//! Project quote request form in an overlay. Opening locks page scroll,
//! closing with × or a backdrop click restores it.

use leptos::prelude::*;

use super::form_fields::{submit_lead, FieldKind, FormMessage, SelectField, TextField};
use crate::context::use_studio;
use crate::forms::{FormKind, LeadForm};
use crate::models::{BUDGET_OPTIONS, QUOTE_SERVICES, TIMELINE_OPTIONS};
use crate::store::PageStateStoreFields;

#[component]
fn ServiceCheckboxes(form: RwSignal<LeadForm>) -> impl IntoView {
    view! {
        <div class="form-group">
            <label>"Services Needed *"</label>
            <div class="checkbox-group">
                {QUOTE_SERVICES
                    .iter()
                    .map(|(value, label)| {
                        let value = *value;
                        view! {
                            <label class="checkbox-label">
                                <input
                                    type="checkbox"
                                    name="services"
                                    value=value
                                    prop:checked=move || form.with(|f| f.has_service(value))
                                    on:change=move |_| form.update(|f| f.toggle_service(value))
                                />
                                <span>{*label}</span>
                            </label>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
pub fn QuoteModal() -> impl IntoView {
    let ctx = use_studio();
    let open = ctx.store.quote_modal_open();
    let form = RwSignal::new(LeadForm::new(FormKind::Quote));

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        submit_lead(form, ctx, move || ctx.close_quote());
    };

    view! {
        <div class="modal" id="quoteModal" class:active=move || open.get()>
            <div class="modal-backdrop" on:click=move |_| ctx.close_quote()></div>
            <div class="modal-content">
                <button class="modal-close" aria-label="Close" on:click=move |_| ctx.close_quote()>
                    "×"
                </button>
                <h2>"Get Your Free Quote"</h2>
                <p class="modal-subtitle">"Tell us about your project and we'll get back to you within 24 hours"</p>
                <form class="quote-form" id="quoteForm" on:submit=on_submit>
                    <div class="form-row">
                        <TextField form=form name="name" id="quoteName" label="Full Name *" required=true />
                        <TextField form=form name="company" id="quoteCompany" label="Company Name" />
                    </div>
                    <div class="form-row">
                        <TextField form=form name="email" id="quoteEmail" label="Email Address *" kind=FieldKind::Email required=true />
                        <TextField form=form name="phone" id="quotePhone" label="Phone Number *" kind=FieldKind::Tel required=true />
                    </div>
                    <ServiceCheckboxes form=form />
                    <div class="form-row">
                        <SelectField form=form name="budget" id="quoteBudget" label="Budget Range" options=BUDGET_OPTIONS />
                        <SelectField form=form name="timeline" id="quoteTimeline" label="Project Timeline" options=TIMELINE_OPTIONS />
                    </div>
                    <TextField
                        form=form
                        name="details"
                        id="quoteDetails"
                        label="Project Details *"
                        kind=FieldKind::TextArea
                        required=true
                        placeholder="Tell us about your project, goals, target audience, etc."
                    />
                    <label class="checkbox-label newsletter">
                        <input
                            type="checkbox"
                            name="newsletter"
                            prop:checked=move || form.with(|f| f.newsletter())
                            on:change=move |ev| form.update(|f| f.set_newsletter(event_target_checked(&ev)))
                        />
                        <span>"Send me updates about new services and special offers"</span>
                    </label>
                    <FormMessage form=form />
                    <button type="submit" class="btn btn-primary btn-full" disabled=move || form.with(|f| f.is_sending())>
                        {move || if form.with(|f| f.is_sending()) { "Sending..." } else { "Request Quote" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
