//! Static content for the About Me folder.

use crate::gallery::format_display_name;

/// About Me sub-tabs, keyed by catalog slug.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AboutSection {
    /// Bio and profile picture.
    About,
    /// Skills listed by the `about-me/skills` manifest.
    Skills,
    /// Tools with icons.
    Programs,
    /// Employment history.
    WorkExperience,
    /// Social links.
    Socials,
    /// Contact details.
    Contact,
}

impl AboutSection {
    /// Resolves a tab slug. Unknown slugs yield `None`.
    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug {
            "about" => Some(Self::About),
            "skills" => Some(Self::Skills),
            "programs" => Some(Self::Programs),
            "work-experience" => Some(Self::WorkExperience),
            "socials" => Some(Self::Socials),
            "contact" => Some(Self::Contact),
            _ => None,
        }
    }

    /// Section heading.
    pub const fn heading(self) -> &'static str {
        match self {
            Self::About => "About Me",
            Self::Skills => "My Skills",
            Self::Programs => "Software I Use",
            Self::WorkExperience => "Work Experience",
            Self::Socials => "Socials",
            Self::Contact => "Contact Me",
        }
    }
}

/// Text shown for an unknown section.
pub const UNKNOWN_SECTION_MESSAGE: &str = "Select a category to view content";
/// Text shown when the profile picture fails to load.
pub const PROFILE_PLACEHOLDER: &str = "Profile Image Placeholder";

/// Bio paragraphs around the profile picture.
pub const BIO: [&str; 2] = [
    "Hello! I'm a passionate digital artist specializing in multiple art styles and mediums. \
     With a background in both traditional and digital art, I create everything from \
     illustrations to 3D models and animations.",
    "My art journey began when I was young, and I've since developed my skills across multiple \
     disciplines. I'm constantly exploring new techniques and pushing my creative boundaries. \
     Feel free to explore my portfolio to see my range of work!",
];

/// Paragraph under the skills grid.
pub const SKILLS_BLURB: &str = "I specialize in a variety of digital art techniques including \
     illustration, character design, and animation. With over 5 years of experience in both 2D \
     and 3D art, I pride myself on being versatile and adaptable to different project \
     requirements.";

/// Paragraph above the programs grid.
pub const PROGRAMS_BLURB: &str = "I'm proficient in industry-standard creative software, \
     allowing me to deliver high-quality work across different mediums and formats.";

/// Program icon files under `about-me/programs`.
pub const PROGRAM_ICONS: [&str; 6] = [
    "photoshop.png",
    "illustrator.png",
    "blender.png",
    "procreate.png",
    "after-effects.png",
    "clip-studio.png",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// One work-history entry.
pub struct WorkExperience {
    /// Employer.
    pub company: &'static str,
    /// Role title.
    pub position: &'static str,
    /// Display period.
    pub period: &'static str,
    /// Summary.
    pub description: &'static str,
}

/// Work history, most recent first.
pub const WORK_EXPERIENCE: [WorkExperience; 3] = [
    WorkExperience {
        company: "Creative Studio X",
        position: "Senior Digital Artist",
        period: "2020 - Present",
        description: "Lead artist for various client projects including character design, \
                      concept art, and promotional materials.",
    },
    WorkExperience {
        company: "Game Developer Y",
        position: "Character Artist",
        period: "2018 - 2020",
        description: "Designed and created game characters, environments, and assets for \
                      multiple game projects.",
    },
    WorkExperience {
        company: "Animation Studio Z",
        position: "Illustrator & Animator",
        period: "2016 - 2018",
        description: "Collaborated on animated short films, created storyboards, and designed \
                      characters.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Labelled external link.
pub struct SocialLink {
    /// Network name.
    pub network: &'static str,
    /// Handle shown to the visitor.
    pub handle: &'static str,
    /// Link target.
    pub url: &'static str,
}

/// Social profiles.
pub const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink {
        network: "Instagram",
        handle: "@lillulette",
        url: "https://www.instagram.com/lillulette",
    },
    SocialLink {
        network: "ArtStation",
        handle: "lillulette",
        url: "https://www.artstation.com/lillulette",
    },
    SocialLink {
        network: "Bluesky",
        handle: "@lillulette.bsky.social",
        url: "https://bsky.app/profile/lillulette.bsky.social",
    },
];

/// Contact lines. The contact form is not part of this site.
pub const CONTACT_LINES: [(&str, &str); 2] = [
    ("Email", "lillulette.art@gmail.com"),
    ("Commissions", "Open - send a short brief by email"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
/// Program tile: display name and icon file.
pub struct ProgramEntry {
    /// Caption and fallback text.
    pub name: String,
    /// Icon file under `about-me/programs`.
    pub icon: &'static str,
}

/// Program tiles in display order.
pub fn program_entries() -> Vec<ProgramEntry> {
    PROGRAM_ICONS
        .iter()
        .map(|&icon| ProgramEntry {
            name: format_display_name(icon),
            icon,
        })
        .collect()
}

/// Skill captions derived from the `about-me/skills` manifest files.
pub fn skill_names(files: &[String]) -> Vec<String> {
    files.iter().map(|file| format_display_name(file)).collect()
}
