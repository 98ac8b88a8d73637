use leptos::prelude::*;
use portfolio_core::Section;
use portfolio_core::content::{Glyph, PROFILE};

use super::icons::{Icon, glyph_path};

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id=Section::Home.id() class="hero">
            <div class="hero-backdrop">
                <div class="hero-orb hero-orb-cyan"></div>
                <div class="hero-orb hero-orb-purple"></div>
            </div>
            <div class="container hero-content">
                <div class="hero-avatar">
                    <Icon path=glyph_path(Glyph::Terminal) size="64" />
                </div>
                <h1 class="hero-title">
                    <span class="hero-title-accent">{PROFILE.name}</span>
                </h1>
                <p class="hero-headline">{PROFILE.headline}</p>
                <p class="hero-tagline">{PROFILE.tagline}</p>
                <div class="hero-actions">
                    <a href=PROFILE.github_url target="_blank" rel="noopener noreferrer" class="btn btn-secondary">
                        <Icon path=glyph_path(Glyph::GitHub) size="20" />
                        "GitHub"
                    </a>
                    <a href=PROFILE.linkedin_url target="_blank" rel="noopener noreferrer" class="btn btn-secondary">
                        <Icon path=glyph_path(Glyph::LinkedIn) size="20" />
                        "LinkedIn"
                    </a>
                    <a href=PROFILE.mailto() class="btn btn-primary">
                        <Icon path=glyph_path(Glyph::Mail) size="20" />
                        "Contact"
                    </a>
                </div>
            </div>
        </section>
    }
}
