use leptos::prelude::*;
use portfolio_core::Section;
use portfolio_core::content::{Accent, HIGHLIGHTS, Highlight, PROFILE};

use super::header::SectionHeader;
use super::icons::{Icon, glyph_path};

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id=Section::About.id() class="section">
            <div class="container">
                <SectionHeader title="About Me" accent=Accent::Ocean />
                <div class="about-grid">
                    <div class="about-text">
                        {PROFILE.about.iter().map(|para| view! { <p>{*para}</p> }).collect_view()}
                    </div>
                    <div class="about-highlights">
                        {HIGHLIGHTS.iter().map(|highlight| view! { <HighlightCard highlight=highlight /> }).collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn HighlightCard(highlight: &'static Highlight) -> impl IntoView {
    view! {
        <article class="card">
            <div class="card-heading">
                <span class=format!("card-glyph {}", highlight.accent.css_class())>
                    <Icon path=glyph_path(highlight.glyph) />
                </span>
                <h3 class="card-title">{highlight.title}</h3>
            </div>
            <p class="card-body">{highlight.body}</p>
        </article>
    }
}
