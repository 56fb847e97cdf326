use leptos::prelude::*;

const SOCIAL: &[(&str, &str)] = &[
    ("https://www.instagram.com/", "Instagram"),
    ("https://www.youtube.com/", "YouTube"),
    ("https://www.linkedin.com/", "LinkedIn"),
    ("https://www.facebook.com/", "Facebook"),
];

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer-content">
                <div class="footer-brand">
                    <img src="/Emotion.png" alt="E-Motion Production" height="80" />
                    <p>"Stories that move people. Video, voice, animation and sound from Mumbai."</p>
                </div>
                <div class="social-links">
                    {SOCIAL
                        .iter()
                        .map(|(href, label)| {
                            view! {
                                <a href=*href target="_blank" rel="noopener noreferrer" aria-label=*label>
                                    {*label}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <div class="footer-bottom">
                <p>"© 2024 E·Motion Production. All rights reserved."</p>
            </div>
        </footer>
    }
}
