//! The portfolio's static content.

use glyphfolio_core::Section;

/// A skill card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub description: &'static str,
    /// Single-cell icon shown on the card.
    pub icon: char,
}

/// A project card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
}

/// A quoted testimonial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub name: &'static str,
    pub feedback: &'static str,
}

/// A labelled field in the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormField {
    pub label: &'static str,
    /// Visible text rows.
    pub rows: u16,
}

/// Everything shown on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub bio: &'static str,
    pub skills: &'static [Skill],
    pub projects: &'static [Project],
    pub testimonials: &'static [Testimonial],
    pub contact_fields: &'static [FormField],
    pub submit_label: &'static str,
    pub copyright: &'static str,
    pub social_links: &'static [&'static str],
}

impl Profile {
    /// Number of items listed in a section; prose sections count as one.
    pub fn item_count(&self, section: Section) -> usize {
        match section {
            Section::About => 1,
            Section::Skills => self.skills.len(),
            Section::Projects => self.projects.len(),
            Section::Testimonials => self.testimonials.len(),
            Section::Contact => self.contact_fields.len(),
        }
    }
}

const SKILLS: &[Skill] = &[
    Skill {
        name: "Cybersecurity",
        description: "Protecting digital assets and infrastructure.",
        icon: '⛨',
    },
    Skill {
        name: "Web Development",
        description: "Building responsive and secure web applications.",
        icon: '⌨',
    },
    Skill {
        name: "Ethical Hacking",
        description: "Identifying vulnerabilities in systems.",
        icon: '▤',
    },
    Skill {
        name: "Cloud Security",
        description: "Securing cloud-based environments.",
        icon: '☁',
    },
    Skill {
        name: "Penetration Testing",
        description: "Simulating cyberattacks to test defenses.",
        icon: '◎',
    },
    Skill {
        name: "React & Next.js",
        description: "Developing modern web applications.",
        icon: '⚛',
    },
];

const PROJECTS: &[Project] = &[
    Project {
        title: "Personal Portfolio",
        description: "A responsive portfolio website showcasing my skills and projects.",
    },
    Project {
        title: "Cybersecurity Dashboard",
        description: "A dashboard for monitoring and analyzing security threats.",
    },
    Project {
        title: "Penetration Testing Toolkit",
        description: "A toolkit for performing penetration tests on web applications.",
    },
];

const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "John Doe",
        feedback: "An exceptional professional with a deep understanding of cybersecurity!",
    },
    Testimonial {
        name: "Jane Smith",
        feedback: "Delivered outstanding results on our web security project.",
    },
    Testimonial {
        name: "Alice Johnson",
        feedback: "A highly skilled developer and cybersecurity expert!",
    },
];

const CONTACT_FIELDS: &[FormField] = &[
    FormField {
        label: "Name:",
        rows: 1,
    },
    FormField {
        label: "Email:",
        rows: 1,
    },
    FormField {
        label: "Message:",
        rows: 4,
    },
];

/// The page owner's profile.
pub const PROFILE: Profile = Profile {
    name: "M Shashidhar",
    bio: "Hi, I'm M Shashidhar, a passionate cybersecurity expert and web developer. \
          I specialize in protecting digital assets and building secure web applications.",
    skills: SKILLS,
    projects: PROJECTS,
    testimonials: TESTIMONIALS,
    contact_fields: CONTACT_FIELDS,
    submit_label: "Send Message",
    copyright: "© 2023 M Shashidhar. All rights reserved.",
    social_links: &["Facebook", "Twitter", "LinkedIn"],
};
