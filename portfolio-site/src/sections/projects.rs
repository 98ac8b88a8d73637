use leptos::prelude::*;
use portfolio_core::Section;
use portfolio_core::content::{Accent, PROJECTS, Project};

use super::header::SectionHeader;
use super::icons::{Icon, glyph_path};

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section id=Section::Projects.id() class="section section-alt">
            <div class="container">
                <SectionHeader title="Featured Projects" accent=Accent::Violet />
                <div class="projects-grid">
                    {PROJECTS.iter().map(|project| view! { <ProjectCard project=project /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    view! {
        <article class="card project-card">
            <div class="card-heading">
                <span class=format!("card-glyph filled {}", project.accent.css_class())>
                    <Icon path=glyph_path(project.glyph) />
                </span>
                <h3 class="card-title">{project.title}</h3>
            </div>
            <p class="card-body">{project.description}</p>
            <div class="tag-list">
                {project.tech.iter().map(|tech| view! { <span class="tag">{*tech}</span> }).collect_view()}
            </div>
            <div class="project-links">
                {project_actions(project).into_iter().map(|action| action.render()).collect_view()}
            </div>
        </article>
    }
}

/// One of the two actions every project card offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ProjectAction {
    label: &'static str,
    href: Option<&'static str>,
    primary: bool,
}

impl ProjectAction {
    fn render(self) -> AnyView {
        let class = if self.primary { "project-link primary" } else { "project-link" };
        match self.href {
            Some(url) => view! {
                <a href=url target="_blank" rel="noopener noreferrer" class=class>
                    {self.label}
                </a>
            }
            .into_any(),
            None => view! {
                <button class=class disabled=true title="Not published yet">
                    {self.label}
                </button>
            }
            .into_any(),
        }
    }
}

fn project_actions(project: &Project) -> [ProjectAction; 2] {
    [
        ProjectAction {
            label: "View Code",
            href: project.code_url,
            primary: true,
        },
        ProjectAction {
            label: "Live Demo",
            href: project.demo_url,
            primary: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_project_offers_code_and_demo() {
        for project in PROJECTS {
            let labels = project_actions(project).map(|action| action.label);
            assert_eq!(labels, ["View Code", "Live Demo"], "{}", project.title);
        }
    }

    #[test]
    fn actions_follow_project_links() {
        let [code, demo] = project_actions(&PROJECTS[0]);
        assert_eq!(code.href, PROJECTS[0].code_url);
        assert!(code.primary);
        assert_eq!(demo.href, PROJECTS[0].demo_url);
        assert!(!demo.primary);
    }
}
