//! YouTube IFrame API bindings
//!
//! The API script is injected at most once. Ready callbacks are chained onto
//! `onYouTubeIframeAPIReady` so several widgets can wait for it without
//! overwriting each other.

use serde::Serialize;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::machines::Playback;

const API_SRC: &str = "https://www.youtube.com/iframe_api";
const READY_HOOK: &str = "onYouTubeIframeAPIReady";
const STATE_PLAYING: f64 = 1.0;

#[wasm_bindgen]
extern "C" {
    pub type YtPlayer;

    #[wasm_bindgen(method, catch, js_name = loadVideoById)]
    fn load_video_by_id(this: &YtPlayer, id: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(method, catch, js_name = playVideo)]
    fn play_video(this: &YtPlayer) -> Result<(), JsValue>;

    #[wasm_bindgen(method, catch, js_name = pauseVideo)]
    fn pause_video(this: &YtPlayer) -> Result<(), JsValue>;
}

#[derive(Serialize)]
struct PlayerVars {
    rel: u8,
    modestbranding: u8,
    playsinline: u8,
    controls: u8,
    autoplay: u8,
}

impl Default for PlayerVars {
    fn default() -> Self {
        Self {
            rel: 0,
            modestbranding: 1,
            playsinline: 1,
            controls: 1,
            autoplay: 0,
        }
    }
}

fn get(target: &JsValue, key: &str) -> Option<JsValue> {
    js_sys::Reflect::get(target, &JsValue::from_str(key))
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
}

/// `window.YT.Player`, once the API has loaded
fn player_constructor() -> Option<js_sys::Function> {
    let window = web_sys::window()?;
    let yt = get(&window, "YT")?;
    get(&yt, "Player")?.dyn_into::<js_sys::Function>().ok()
}

fn inject_script_once() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let Ok(Some(_)) = document.query_selector("script[src*=\"youtube.com/iframe_api\"]") {
        return;
    }
    let Ok(script) = document.create_element("script") else {
        return;
    };
    let Ok(script) = script.dyn_into::<web_sys::HtmlScriptElement>() else {
        return;
    };
    script.set_src(API_SRC);
    if let Some(head) = document.head() {
        let _ = head.append_child(&script);
        log::debug!("youtube iframe api requested");
    }
}

/// Run `callback` once the IFrame API is available
pub fn on_api_ready(callback: impl FnOnce() + 'static) {
    if player_constructor().is_some() {
        callback();
        return;
    }
    let Some(window) = web_sys::window() else {
        return;
    };

    let previous = get(&window, READY_HOOK).and_then(|v| v.dyn_into::<js_sys::Function>().ok());
    let chained = Closure::once_into_js(move || {
        if let Some(previous) = previous {
            if let Err(e) = previous.call0(&JsValue::NULL) {
                log::warn!("earlier youtube ready hook failed: {:?}", e);
            }
        }
        callback();
    });
    if js_sys::Reflect::set(&window, &JsValue::from_str(READY_HOOK), &chained).is_err() {
        log::warn!("could not register youtube ready hook");
        return;
    }
    inject_script_once();
}

type EventClosure = Closure<dyn FnMut(JsValue)>;

/// A `YT.Player` plus the event handlers it calls back into
pub struct YouTubePlayer {
    player: YtPlayer,
    _on_ready: EventClosure,
    _on_state_change: EventClosure,
}

impl YouTubePlayer {
    /// Replace the element `element_id` with a player showing `video_id`.
    /// `on_state_change` gets whether the video is now playing.
    pub fn mount(
        element_id: &str,
        video_id: &str,
        on_ready: impl FnMut() + 'static,
        mut on_state_change: impl FnMut(bool) + 'static,
    ) -> Result<Self, JsValue> {
        let constructor = player_constructor().ok_or_else(|| JsValue::from_str("YT.Player not loaded"))?;

        let mut on_ready = on_ready;
        let ready: EventClosure = Closure::new(move |_event: JsValue| on_ready());
        let state: EventClosure = Closure::new(move |event: JsValue| {
            let playing = get(&event, "data").and_then(|d| d.as_f64()) == Some(STATE_PLAYING);
            on_state_change(playing);
        });

        let events = js_sys::Object::new();
        js_sys::Reflect::set(&events, &"onReady".into(), ready.as_ref())?;
        js_sys::Reflect::set(&events, &"onStateChange".into(), state.as_ref())?;

        let vars = serde_wasm_bindgen::to_value(&PlayerVars::default())?;
        let options = js_sys::Object::new();
        js_sys::Reflect::set(&options, &"videoId".into(), &video_id.into())?;
        js_sys::Reflect::set(&options, &"playerVars".into(), &vars)?;
        js_sys::Reflect::set(&options, &"events".into(), &events)?;

        let args = js_sys::Array::of2(&element_id.into(), &options);
        let player = js_sys::Reflect::construct(&constructor, &args)?;
        log::info!("youtube player mounted on #{}", element_id);

        Ok(Self {
            player: player.unchecked_into(),
            _on_ready: ready,
            _on_state_change: state,
        })
    }
}

impl Playback for YouTubePlayer {
    fn load(&self, external_id: &str) {
        if let Err(e) = self.player.load_video_by_id(external_id) {
            log::warn!("loadVideoById({}) failed: {:?}", external_id, e);
        }
    }

    fn play(&self) {
        if let Err(e) = self.player.play_video() {
            log::warn!("playVideo failed: {:?}", e);
        }
    }

    fn pause(&self) {
        if let Err(e) = self.player.pause_video() {
            log::warn!("pauseVideo failed: {:?}", e);
        }
    }
}
