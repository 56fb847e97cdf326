use leptos::prelude::*;

use super::SectionHeader;
use crate::models::TEAM;

#[component]
pub fn Team() -> impl IntoView {
    view! {
        <section class="team" id="team">
            <SectionHeader
                title="Meet Our Creative Team"
                subtitle="Passionate professionals dedicated to bringing your vision to life"
            />
            <div class="team-grid">
                {TEAM
                    .iter()
                    .map(|member| {
                        view! {
                            <div class="team-member animate-on-scroll">
                                <div class="member-photo">
                                    <img src=member.photo alt=member.name />
                                </div>
                                <h3>{member.name}</h3>
                                <p>{member.bio}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
