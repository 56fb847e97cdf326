//! Form Field Components
//!
//! Inputs bound to a [`LeadForm`] signal, and the submit flow shared by the
//! contact and quote forms.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::config::studio;
use crate::context::StudioContext;
use crate::forms::{dispatch, LeadForm};
use crate::services::HttpRelay;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    TextArea,
}

impl FieldKind {
    fn input_type(&self) -> &'static str {
        match self {
            FieldKind::Text | FieldKind::TextArea => "text",
            FieldKind::Email => "email",
            FieldKind::Tel => "tel",
        }
    }
}

#[component]
pub fn TextField(
    form: RwSignal<LeadForm>,
    /// Form field name
    name: &'static str,
    /// Element id, unique on the page
    id: &'static str,
    label: &'static str,
    #[prop(default = FieldKind::Text)] kind: FieldKind,
    #[prop(optional)] required: bool,
    #[prop(optional)] placeholder: &'static str,
) -> impl IntoView {
    let value = move || form.with(|f| f.value(name).to_string());
    let on_input = move |ev| {
        let text = event_target_value(&ev);
        form.update(|f| f.set_field(name, text));
    };

    let control = if kind == FieldKind::TextArea {
        view! {
            <textarea id=id name=name rows="5" required=required placeholder=placeholder prop:value=value on:input=on_input></textarea>
        }
        .into_any()
    } else {
        view! {
            <input type=kind.input_type() id=id name=name required=required placeholder=placeholder prop:value=value on:input=on_input />
        }
        .into_any()
    };

    view! {
        <div class="form-group">
            <label for=id>{label}</label>
            {control}
        </div>
    }
}

#[component]
pub fn SelectField(
    form: RwSignal<LeadForm>,
    name: &'static str,
    id: &'static str,
    label: &'static str,
    options: &'static [(&'static str, &'static str)],
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=id>{label}</label>
            <select
                id=id
                name=name
                prop:value=move || form.with(|f| f.value(name).to_string())
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| f.set_field(name, value));
                }
            >
                {options
                    .iter()
                    .map(|(value, text)| view! { <option value=*value>{*text}</option> })
                    .collect_view()}
            </select>
        </div>
    }
}

/// Inline validation or delivery error
#[component]
pub fn FormMessage(form: RwSignal<LeadForm>) -> impl IntoView {
    move || {
        form.with(|f| f.status().message())
            .map(|msg| view! { <p class="form-error" role="alert">{msg}</p> })
    }
}

/// Validate, send once, then record the answer. `on_sent` runs after a
/// successful delivery.
pub fn submit_lead(form: RwSignal<LeadForm>, ctx: StudioContext, on_sent: impl FnOnce() + 'static) {
    let Some(Ok(submission)) = form.try_update(|f| f.begin_submit()) else {
        return;
    };
    spawn_local(async move {
        let relay = HttpRelay::new(&studio().relay);
        let result = dispatch(&relay, &submission).await;
        let delivered = form.try_update(|f| f.finish(result)).unwrap_or(false);
        if delivered {
            ctx.show_toast();
            on_sent();
        }
    });
}
