use leptos::*;
use system_ui::{EmptyState, FallbackImage};

use super::use_desktop_runtime;
use crate::{
    about::{
        program_entries, skill_names, AboutSection, BIO, CONTACT_LINES, PROFILE_PLACEHOLDER,
        PROGRAMS_BLURB, SKILLS_BLURB, SOCIAL_LINKS, UNKNOWN_SECTION_MESSAGE, WORK_EXPERIENCE,
    },
    catalog::{self, FolderId},
};

#[component]
/// Static About Me content for the selected sub-tab.
pub(super) fn AboutPanel(#[prop(into)] section: Signal<String>) -> impl IntoView {
    move || match AboutSection::from_slug(&section.get()) {
        Some(section) => view! {
            <article class="about-panel" data-ui-kind="about" data-section=section.heading()>
                <h2>{section.heading()}</h2>
                {section_body(section)}
            </article>
        }
        .into_view(),
        None => view! { <EmptyState message=UNKNOWN_SECTION_MESSAGE/> }.into_view(),
    }
}

fn section_body(section: AboutSection) -> View {
    match section {
        AboutSection::About => view! { <AboutBio/> }.into_view(),
        AboutSection::Skills => view! { <SkillList/> }.into_view(),
        AboutSection::Programs => view! { <ProgramGrid/> }.into_view(),
        AboutSection::WorkExperience => WORK_EXPERIENCE
            .iter()
            .map(|job| {
                view! {
                    <section class="about-job">
                        <h3>{job.company}</h3>
                        <div class="about-job-meta">
                            <span>{job.position}</span>
                            <span>{job.period}</span>
                        </div>
                        <p>{job.description}</p>
                    </section>
                }
            })
            .collect_view(),
        AboutSection::Socials => view! {
            <ul class="about-links">
                {SOCIAL_LINKS
                    .iter()
                    .map(|link| {
                        view! {
                            <li>
                                <span>{link.network}": "</span>
                                <a href=link.url target="_blank" rel="noopener noreferrer">
                                    {link.handle}
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        }
        .into_view(),
        AboutSection::Contact => view! {
            <dl class="about-contact">
                {CONTACT_LINES
                    .iter()
                    .map(|(label, value)| view! { <dt>{*label}</dt><dd>{*value}</dd> })
                    .collect_view()}
            </dl>
        }
        .into_view(),
    }
}

#[component]
fn AboutBio() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let profile = runtime
        .host
        .get_value()
        .assets()
        .image_url(&catalog::catalog().desktop.profile_image);

    view! {
        <p>{BIO[0]}</p>
        <FallbackImage
            src=profile
            alt="Profile"
            fallback=PROFILE_PLACEHOLDER
            layout_class="about-profile"
        />
        <p>{BIO[1]}</p>
    }
}

#[component]
fn SkillList() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let key = catalog::folder(FolderId::AboutMe).directory(Some("skills"));
    let skills = Signal::derive(move || {
        runtime
            .manifests
            .with(|cache| skill_names(cache.files(&key)))
    });

    view! {
        <ul class="about-skills">
            <For each=move || skills.get() key=|skill| skill.clone() let:skill>
                <li>{skill}</li>
            </For>
        </ul>
        <p>{SKILLS_BLURB}</p>
    }
}

#[component]
fn ProgramGrid() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let assets = runtime.host.get_value().assets().clone();
    let directory = catalog::folder(FolderId::AboutMe).directory(Some("programs"));

    view! {
        <p>{PROGRAMS_BLURB}</p>
        <div class="about-programs">
            {program_entries()
                .into_iter()
                .map(|program| {
                    let src = assets.directory_image_url(&directory, program.icon);
                    view! {
                        <figure class="about-program">
                            <FallbackImage src=src alt=program.name.clone() fallback=program.name.clone()/>
                            <figcaption>{program.name}</figcaption>
                        </figure>
                    }
                })
                .collect_view()}
        </div>
    }
}
