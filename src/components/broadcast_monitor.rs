//! Broadcast Monitor Component
//!
//! Vintage monitor playing the portfolio through the YouTube player, with a
//! remote beside it for switching channels.

use gloo_timers::callback::Timeout;
use leptos::html;
use leptos::prelude::*;

use super::SectionHeader;
use crate::audio::Cue;
use crate::config::studio;
use crate::context::use_studio;
use crate::machines::{BroadcastDeck, ChannelChange};
use crate::services::youtube::{on_api_ready, YouTubePlayer};

const PLAYER_ELEMENT: &str = "broadcast-player";

#[component]
pub fn BroadcastMonitor() -> impl IntoView {
    let ctx = use_studio();
    let config = studio();
    let playlist = config.playlist.clone();
    let total = playlist.len();
    let first_id = playlist.first().map(|e| e.external_id.clone()).unwrap_or_default();
    let ir_flash_ms = config.channel.ir_flash_ms;

    let deck = StoredValue::new_local(BroadcastDeck::<YouTubePlayer>::new(playlist, config.channel.settle_ms));
    let settle_timer = StoredValue::new_local(None::<Timeout>);
    let ir_timer = StoredValue::new_local(None::<Timeout>);

    let active = RwSignal::new(0usize);
    let on_air = RwSignal::new(deck.with_value(|d| d.current().cloned()));
    let ready = RwSignal::new(false);
    let playing = RwSignal::new(false);
    let static_on = RwSignal::new(false);
    let ir_flash = RwSignal::new(false);

    let flash_ir = move || {
        ir_flash.set(true);
        ir_timer.set_value(Some(Timeout::new(ir_flash_ms, move || ir_flash.set(false))));
    };

    let switch_to = move |change: Option<ChannelChange>| {
        let Some(change) = change else { return };
        static_on.set(true);
        ctx.play(Cue::VhsStatic);
        flash_ir();
        let timer = Timeout::new(change.settle_ms, move || {
            let channel = deck
                .try_update_value(|d| d.finish_switch().map(|e| e.channel.clone()))
                .flatten();
            if let Some(channel) = channel {
                log::debug!("on air: CH {}", channel);
            }
            if let Some((index, entry)) = deck.try_with_value(|d| (d.switcher.active(), d.current().cloned())) {
                active.set(index);
                on_air.set(entry);
            }
            static_on.set(false);
        });
        settle_timer.set_value(Some(timer));
    };

    let channel_up = move |_| switch_to(deck.try_update_value(|d| d.switcher.next()).flatten());
    let channel_down = move |_| switch_to(deck.try_update_value(|d| d.switcher.previous()).flatten());
    let select = move |index: usize| switch_to(deck.try_update_value(|d| d.switcher.select(index)).flatten());

    let toggle_power = move |_| {
        if deck.try_with_value(|d| d.toggle_power()).flatten().is_some() {
            flash_ir();
        }
    };

    // Boot the player once its element is in the document
    let screen = NodeRef::<html::Div>::new();
    let mut booted = false;
    Effect::new(move |_| {
        if screen.get().is_none() || booted {
            return;
        }
        booted = true;
        let first_id = first_id.clone();
        on_api_ready(move || {
            let on_ready = move || {
                deck.update_value(|d| d.on_ready());
                ready.set(deck.with_value(|d| d.switcher.is_ready()));
            };
            let on_state = move |is_playing: bool| {
                deck.update_value(|d| d.switcher.playback_changed(is_playing));
                playing.set(is_playing);
            };
            match YouTubePlayer::mount(PLAYER_ELEMENT, &first_id, on_ready, on_state) {
                Ok(player) => deck.update_value(|d| d.attach(player)),
                Err(e) => log::warn!("broadcast player failed to mount: {:?}", e),
            }
        });
    });

    view! {
        <section class="broadcast-section" id="portfolio">
            <SectionHeader
                title="Our Work"
                subtitle="Ads, films, and audio-visual productions, use the remote to switch channels"
            />

            <div class="monitor-and-remote">
                <div class="monitor-wrap">
                    <div class="monitor-frame">
                        <div class="monitor-screen" node_ref=screen>
                            <div id=PLAYER_ELEMENT></div>
                            <div class="crt-lines" aria-hidden="true"></div>
                            <div class="static-flash" class:visible=move || static_on.get() aria-hidden="true"></div>
                        </div>
                        <div class="monitor-chin">
                            <div class="monitor-chin-left">
                                <div class="power-led" class:on=move || ready.get()></div>
                                <span class="monitor-brand">"E·MOTION"</span>
                            </div>
                            <span class="ch-readout">
                                {move || on_air.with(|e| e.as_ref().map(|e| format!("CH {}", e.channel)).unwrap_or_default())}
                            </span>
                        </div>
                    </div>
                    <div class="monitor-stand">
                        <div class="monitor-neck"></div>
                        <div class="monitor-base"></div>
                    </div>
                    <div class="channel-dots" aria-label=move || format!("Channel {} of {}", active.get() + 1, total)>
                        {studio()
                            .playlist
                            .iter()
                            .enumerate()
                            .map(|(i, entry)| {
                                view! {
                                    <button
                                        class="ch-dot"
                                        class:active=move || active.get() == i
                                        aria-label=format!("Switch to channel {}", entry.channel)
                                        on:click=move |_| select(i)
                                    ></button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="remote-wrap" aria-label="TV remote control">
                    <div class="remote-ir" class:flash=move || ir_flash.get() aria-hidden="true"></div>
                    <div class="remote-display" aria-live="polite">
                        {move || {
                            on_air
                                .get()
                                .map(|e| {
                                    view! {
                                        <span class="remote-display-ch">{format!("CH {}", e.channel)}</span>
                                        <span class="remote-display-label">{e.label}</span>
                                    }
                                })
                        }}
                    </div>
                    <button
                        class="remote-power-btn"
                        class:playing=move || playing.get()
                        aria-label=move || if playing.get() { "Pause video" } else { "Play video" }
                        on:click=toggle_power
                    ></button>
                    <div class="remote-ch-group">
                        <button class="remote-ch-btn" aria-label="Next channel" on:click=channel_up>"▲"</button>
                        <span class="remote-ch-label">"CH"</span>
                        <button class="remote-ch-btn" aria-label="Previous channel" on:click=channel_down>"▼"</button>
                    </div>
                    <div class="remote-vol-group" aria-hidden="true">
                        <button class="remote-vol-btn" on:click=move |_| ctx.play(Cue::FaderClick)>"+"</button>
                        <span class="remote-vol-label">"VOL"</span>
                        <button class="remote-vol-btn" on:click=move |_| ctx.play(Cue::FaderClick)>"−"</button>
                    </div>
                    <div class="remote-dpad" aria-hidden="true">
                        <div class="dpad-up"></div>
                        <div class="dpad-row">
                            <div class="dpad-left"></div>
                            <div class="dpad-center"></div>
                            <div class="dpad-right"></div>
                        </div>
                        <div class="dpad-down"></div>
                    </div>
                    <div class="remote-num-grid" aria-hidden="true">
                        {(0..12).map(|_| view! { <div class="remote-num-key"></div> }).collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
