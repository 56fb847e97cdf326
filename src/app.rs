//! E·Motion Studio App
//!
//! Single-page shell: intro overlay, the sections in scroll order and the
//! page-wide overlays.

use leptos::prelude::*;

use crate::components::{
    BroadcastMonitor, Clapperboard, ClientsMarquee, Contact, CtaSection, FilmHud, Footer, Hero, IntroSequence,
    Navbar, PageEffects, Process, QuoteModal, Services, StatsSection, SuccessToast, Team,
};
use crate::context::StudioContext;
use crate::store::PageStateStoreFields;

#[component]
pub fn App() -> impl IntoView {
    // Provide context to all children
    let ctx = StudioContext::new();
    ctx.provide();

    let entered = ctx.store.entered();
    let on_intro_complete = move |_: ()| {
        *entered.write() = true;
        log::info!("intro complete");
    };

    view! {
        <IntroSequence on_complete=on_intro_complete />
        <PageEffects />
        <Navbar />
        <main class:entered=move || entered.get()>
            <Hero />
            <BroadcastMonitor />
            <Clapperboard scene=1 title="Our Work" />
            <ClientsMarquee />
            <StatsSection />
            <Clapperboard scene=2 title="Our Services" />
            <Services />
            <Process />
            <Team />
            <Contact />
            <CtaSection />
        </main>
        <Footer />
        <QuoteModal />
        <SuccessToast />
        <FilmHud />
    }
}
