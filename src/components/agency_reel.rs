//! Agency Reel Component
//!
//! Full-screen client-logo collage shown between the intro and the site.

use leptos::prelude::*;

use crate::models::assets::client_logo_url;

/// Shuffled pick of at most `max` logos for the intro montage. `rng` yields
/// values in [0, 1).
pub fn reel_selection(logos: &[&str], max: usize, mut rng: impl FnMut() -> f64) -> Vec<String> {
    let mut picked: Vec<String> = logos.iter().map(|s| s.to_string()).collect();
    for i in (1..picked.len()).rev() {
        let j = ((rng() * (i + 1) as f64) as usize).min(i);
        picked.swap(i, j);
    }
    picked.truncate(max);
    picked
}

#[component]
pub fn AgencyReel(logos: Vec<String>, #[prop(into)] fading: Signal<bool>) -> impl IntoView {
    view! {
        <div class="agency-reel" class:reel-fade-out=move || fading.get()>
            <p class="reel-tagline">"100+ brands. One story."</p>
            <div class="reel-grid">
                {logos
                    .into_iter()
                    .enumerate()
                    .map(|(i, logo)| {
                        let style = format!("--rotate:0deg; --delay:{:.2}s", i as f64 * 0.08);
                        view! {
                            <div class="reel-logo" style=style>
                                <img src=client_logo_url(&logo) alt="" loading="eager" />
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <p class="reel-sub">"Trusted partners. Unforgettable stories."</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reel_selection_caps_and_keeps_members() {
        let logos: Vec<String> = (1..=30).map(|n| format!("worked-with-{}.png", n)).collect();
        let refs: Vec<&str> = logos.iter().map(|s| s.as_str()).collect();
        let mut seed = 0.37_f64;
        let picked = reel_selection(&refs, 20, || {
            seed = (seed * 9301.0 + 0.49297).fract();
            seed
        });
        assert_eq!(picked.len(), 20);
        assert!(picked.iter().all(|p| logos.contains(p)));
        let mut unique = picked.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), 20);
    }

    #[test]
    fn test_reel_selection_short_list() {
        assert_eq!(reel_selection(&["worked-with-1.png"], 20, || 0.99), vec!["worked-with-1.png"]);
        assert!(reel_selection(&[], 20, || 0.5).is_empty());
    }
}
