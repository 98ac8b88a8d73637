use leptos::prelude::*;
use portfolio_core::Section;
use portfolio_core::content::{Accent, Glyph, PROFILE};

use super::header::SectionHeader;
use super::icons::{Icon, glyph_path};

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section id=Section::Contact.id() class="section section-alt">
            <div class="container contact">
                <SectionHeader title="Let's Connect" accent=Accent::Ember />
                <p class="contact-text">
                    "Interested in collaborating on a project or have questions about my work? "
                    "I'm always open to discussing new opportunities and challenges."
                </p>
                <div class="contact-actions">
                    <a href=PROFILE.mailto() class="btn btn-primary btn-large">
                        <Icon path=glyph_path(Glyph::Mail) />
                        {PROFILE.email}
                    </a>
                    <a href=PROFILE.github_url target="_blank" rel="noopener noreferrer" class="btn btn-secondary btn-large">
                        <Icon path=glyph_path(Glyph::GitHub) />
                        "GitHub"
                    </a>
                </div>
            </div>
        </section>
    }
}
