use leptos::prelude::*;
use portfolio_core::Section;
use portfolio_core::content::{Accent, SKILLS};

use super::header::SectionHeader;

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section id=Section::Skills.id() class="section">
            <div class="container">
                <SectionHeader title="Technical Skills" accent=Accent::Emerald />
                <div class="skills-grid">
                    {SKILLS
                        .iter()
                        .map(|category| {
                            view! {
                                <article class="card">
                                    <h3 class="card-title skill-title">{category.name}</h3>
                                    <div class="tag-list">
                                        {category
                                            .items
                                            .iter()
                                            .map(|item| view! { <span class="tag">{*item}</span> })
                                            .collect_view()}
                                    </div>
                                </article>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
