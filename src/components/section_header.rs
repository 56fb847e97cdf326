//! Section Header Component
//!
//! Heading that reveals word by word the first time it scrolls into view.

use gloo_timers::callback::Timeout;
use leptos::html;
use leptos::prelude::*;
use leptos_scrollfx::{split_words, word_delay_ms, WatchOptions};

use super::watch::watch_visibility;
use crate::config::studio;

#[component]
pub fn SectionHeader(
    #[prop(into)] title: String,
    #[prop(into)] subtitle: String,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let header = NodeRef::<html::Div>::new();
    let (revealed, set_revealed) = signal(false);
    let scroll = &studio().scroll;

    let options = WatchOptions {
        threshold: 0.1,
        root_margin: "0px 0px -80px 0px",
        once: true,
    };
    let delay = scroll.word_reveal_delay_ms;
    let mut pending: Option<Timeout> = None;
    watch_visibility(header, options, move |visible| {
        if visible && pending.is_none() {
            pending = Some(Timeout::new(delay, move || set_revealed.set(true)));
        }
    });

    let stagger = scroll.word_stagger_ms;
    let words = split_words(&title)
        .into_iter()
        .enumerate()
        .map(|(i, word)| {
            let style = format!("--wi:{}; transition-delay:{}ms", i, word_delay_ms(i, stagger));
            view! {
                <span class="word" class:in=move || revealed.get() style=style>{word.to_string()}</span>
                " "
            }
        })
        .collect_view();

    view! {
        <div class="section-header animate-on-scroll" node_ref=header>
            <h2>{words}</h2>
            <p>{children.map(|c| c())}{subtitle}</p>
        </div>
    }
}
