//! Contact Component
//!
//! Contact details, the rotary phone and the quick message form.

use gloo_timers::callback::Timeout;
use leptos::html;
use leptos::prelude::*;

use super::form_fields::{submit_lead, FieldKind, FormMessage, TextField};
use super::{RotaryPhone, SectionHeader};
use crate::context::use_studio;
use crate::forms::{FormKind, LeadForm};
use crate::models::CONTACT_DETAILS;

#[component]
pub fn Contact() -> impl IntoView {
    let ctx = use_studio();
    let form = RwSignal::new(LeadForm::new(FormKind::Contact));
    let form_ref = NodeRef::<html::Form>::new();
    let (phone_focus, set_phone_focus) = signal(false);
    let focus_timer = StoredValue::new_local(None::<Timeout>);

    let on_connect = move |delay_ms: u32| {
        let timer = Timeout::new(delay_ms, move || {
            set_phone_focus.set(true);
            if let Some(el) = form_ref.get_untracked() {
                let options = web_sys::ScrollIntoViewOptions::new();
                options.set_behavior(web_sys::ScrollBehavior::Smooth);
                options.set_block(web_sys::ScrollLogicalPosition::Center);
                el.scroll_into_view_with_scroll_into_view_options(&options);
            }
        });
        focus_timer.set_value(Some(timer));
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        submit_lead(form, ctx, || {});
    };

    view! {
        <section class="contact" id="contact">
            <SectionHeader
                title="Let's Create Together"
                subtitle="Ready to bring your vision to life? Get in touch with our team"
            />
            <RotaryPhone on_connect=on_connect />
            <div class="contact-content">
                <div class="contact-info animate-on-scroll">
                    <h3>"Get In Touch"</h3>
                    {CONTACT_DETAILS
                        .iter()
                        .map(|(icon, heading, line)| {
                            view! {
                                <div class="contact-item">
                                    <div class="contact-icon">{*icon}</div>
                                    <div>
                                        <h4>{*heading}</h4>
                                        <p>{*line}</p>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <form
                    class="contact-form animate-on-scroll"
                    class:phone-focus=move || phone_focus.get()
                    id="contactForm"
                    node_ref=form_ref
                    on:submit=on_submit
                >
                    <h3>"Send Message"</h3>
                    <div class="form-row">
                        <TextField form=form name="name" id="name" label="Your Name" required=true />
                        <TextField form=form name="email" id="email" label="Email Address" kind=FieldKind::Email required=true />
                    </div>
                    <div class="form-row">
                        <TextField form=form name="phone" id="phone" label="Phone Number" kind=FieldKind::Tel required=true />
                        <TextField form=form name="subject" id="subject" label="Subject" required=true />
                    </div>
                    <TextField form=form name="message" id="message" label="Your Message" kind=FieldKind::TextArea required=true />
                    <FormMessage form=form />
                    <button
                        type="submit"
                        class="btn btn-primary"
                        disabled=move || form.with(|f| f.is_sending())
                        on:mousemove=super::fx::magnetic_move
                        on:mouseleave=super::fx::magnetic_reset
                    >
                        {move || if form.with(|f| f.is_sending()) { "Sending..." } else { "Send Message" }}
                    </button>
                </form>
            </div>
        </section>
    }
}
