//! Process Component
//!
//! Alternating five-step timeline. The line draws and the step numbers pop,
//! staggered, on first view.

use gloo_timers::callback::Timeout;
use leptos::html;
use leptos::prelude::*;

use super::watch::on_first_visible;
use super::SectionHeader;
use crate::config::studio;
use crate::models::{ProcessStep, PROCESS_STEPS};

#[component]
fn StepNumber(index: usize) -> impl IntoView {
    let number = NodeRef::<html::Div>::new();
    let (popped, set_popped) = signal(false);
    let pending = StoredValue::new_local(None::<Timeout>);
    let delay = index as u32 * studio().scroll.step_pop_stagger_ms;

    on_first_visible(number, 0.5, move || {
        pending.set_value(Some(Timeout::new(delay, move || set_popped.set(true))));
    });

    view! {
        <div class="step-number" class:popped=move || popped.get() node_ref=number>
            {index + 1}
        </div>
    }
}

fn step_content(step: &ProcessStep) -> impl IntoView {
    view! {
        <div class="step-content">
            <h3>{step.title}</h3>
            <p>{step.detail}</p>
        </div>
    }
}

#[component]
pub fn Process() -> impl IntoView {
    let timeline = NodeRef::<html::Div>::new();
    let (drawn, set_drawn) = signal(false);
    on_first_visible(timeline, 0.15, move || set_drawn.set(true));

    view! {
        <section class="process" id="process">
            <SectionHeader
                title="Our Creative Process"
                subtitle="A streamlined approach that transforms your vision into compelling content"
            />
            <div class="process-timeline" node_ref=timeline>
                <div class="timeline-line" class:drawn=move || drawn.get()></div>
                {PROCESS_STEPS
                    .iter()
                    .enumerate()
                    .map(|(i, step)| {
                        // Content alternates sides of the line
                        let left = i % 2 == 0;
                        view! {
                            <div class="process-step animate-on-scroll">
                                {if left { step_content(step).into_any() } else { view! { <div class="step-content"></div> }.into_any() }}
                                <StepNumber index=i />
                                {if left { view! { <div class="step-content"></div> }.into_any() } else { step_content(step).into_any() }}
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
