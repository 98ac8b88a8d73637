//! Static page content: profile, about highlights, projects and skills.
//!
//! Everything here is `'static` and immutable. The records only carry data;
//! presentation lives in the site crate.

use serde::Serialize;

/// Icon identity. The site maps each glyph to SVG path data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Glyph {
    Terminal,
    Network,
    Brain,
    Shield,
    Cpu,
    Code,
    GitHub,
    LinkedIn,
    Mail,
}

/// Visual accent (gradient family) of a card or heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    /// blue to cyan
    Ocean,
    /// purple to pink
    Violet,
    /// green to emerald
    Emerald,
    /// orange to red
    Ember,
}

impl Accent {
    /// CSS class carrying the gradient.
    pub fn css_class(&self) -> &'static str {
        match self {
            Accent::Ocean => "accent-ocean",
            Accent::Violet => "accent-violet",
            Accent::Emerald => "accent-emerald",
            Accent::Ember => "accent-ember",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectCategory {
    Networking,
    Ai,
    Cybersecurity,
    Backend,
}

/// Who the page is about and where to reach them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Profile {
    /// Wordmark shown in the navigation bar
    pub brand: &'static str,
    pub name: &'static str,
    pub headline: &'static str,
    pub tagline: &'static str,
    pub email: &'static str,
    pub github_url: &'static str,
    pub linkedin_url: &'static str,
    /// Biography paragraphs for the about section
    pub about: &'static [&'static str],
}

impl Profile {
    /// Mail-composition link for the contact address.
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

/// One card in the about section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Highlight {
    pub title: &'static str,
    pub body: &'static str,
    pub glyph: Glyph,
    pub accent: Accent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Project {
    pub title: &'static str,
    pub category: ProjectCategory,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub glyph: Glyph,
    pub accent: Accent,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_url: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub demo_url: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SkillCategory {
    pub name: &'static str,
    pub items: &'static [&'static str],
}

pub const PROFILE: Profile = Profile {
    brand: "DevPortfolio",
    name: "Alex Chen",
    headline: "Backend Engineer • Network Specialist • Cybersecurity Enthusiast",
    tagline: "Building secure, scalable systems at the intersection of networking, AI, and cybersecurity",
    email: "hello@yourdomain.com",
    github_url: "https://github.com",
    linkedin_url: "https://linkedin.com",
    about: &[
        "I'm a passionate developer with a strong foundation in networking and backend development, \
         currently expanding my expertise into cybersecurity and AI technologies.",
        "With hands-on experience in building scalable web applications and managing complex network \
         infrastructures, I bring a unique perspective to solving technical challenges at the \
         intersection of these domains.",
        "I'm constantly learning and experimenting with new technologies, from implementing zero-trust \
         security models to exploring the capabilities of large language models in practical applications.",
    ],
};

pub const HIGHLIGHTS: &[Highlight] = &[
    Highlight {
        title: "Networking",
        body: "Designing and implementing secure, high-performance network architectures with focus on \
               reliability and scalability.",
        glyph: Glyph::Network,
        accent: Accent::Ocean,
    },
    Highlight {
        title: "Backend Development",
        body: "Building robust APIs and microservices with modern frameworks, emphasizing security, \
               performance, and maintainability.",
        glyph: Glyph::Code,
        accent: Accent::Violet,
    },
    Highlight {
        title: "Cybersecurity",
        body: "Implementing security best practices and exploring offensive/defensive security techniques \
               through hands-on labs and CTF challenges.",
        glyph: Glyph::Shield,
        accent: Accent::Emerald,
    },
];

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Secure Network Monitoring Dashboard",
        category: ProjectCategory::Networking,
        description: "Real-time network traffic analyzer with anomaly detection and security alerts \
                      built using Python and React.",
        tech: &["Python", "React", "Docker", "Wireshark", "Prometheus"],
        glyph: Glyph::Network,
        accent: Accent::Ocean,
        code_url: Some("https://github.com"),
        demo_url: None,
    },
    Project {
        title: "AI-Powered Log Analyzer",
        category: ProjectCategory::Ai,
        description: "Machine learning model that analyzes system logs to predict potential security \
                      threats and performance issues.",
        tech: &["Python", "TensorFlow", "FastAPI", "Elasticsearch"],
        glyph: Glyph::Brain,
        accent: Accent::Violet,
        code_url: Some("https://github.com"),
        demo_url: None,
    },
    Project {
        title: "Zero-Trust Authentication API",
        category: ProjectCategory::Cybersecurity,
        description: "Backend service implementing zero-trust security principles with multi-factor \
                      authentication and role-based access control.",
        tech: &["Node.js", "Express", "JWT", "Redis", "MongoDB"],
        glyph: Glyph::Shield,
        accent: Accent::Emerald,
        code_url: Some("https://github.com"),
        demo_url: None,
    },
    Project {
        title: "Cloud Infrastructure Automation",
        category: ProjectCategory::Backend,
        description: "Infrastructure as Code solution for automated deployment and scaling of cloud \
                      resources with monitoring.",
        tech: &["Terraform", "AWS", "Docker", "Kubernetes", "Grafana"],
        glyph: Glyph::Cpu,
        accent: Accent::Ember,
        code_url: Some("https://github.com"),
        demo_url: None,
    },
];

pub const SKILLS: &[SkillCategory] = &[
    SkillCategory {
        name: "Backend Development",
        items: &[
            "Node.js",
            "Express",
            "Python",
            "FastAPI",
            "REST/GraphQL",
            "MongoDB",
            "PostgreSQL",
        ],
    },
    SkillCategory {
        name: "Networking",
        items: &[
            "TCP/IP",
            "VLANs",
            "Firewalls",
            "Cisco CLI",
            "Wireshark",
            "Network Security",
            "Load Balancing",
        ],
    },
    SkillCategory {
        name: "Web Development",
        items: &[
            "React",
            "TypeScript",
            "Tailwind CSS",
            "Next.js",
            "Vite",
            "Responsive Design",
        ],
    },
    SkillCategory {
        name: "DevOps & IT",
        items: &[
            "Docker",
            "Kubernetes",
            "Linux",
            "Git",
            "CI/CD",
            "AWS",
            "Terraform",
        ],
    },
    SkillCategory {
        name: "Cybersecurity",
        items: &[
            "OWASP",
            "Secure Coding",
            "Vulnerability Assessment",
            "CTF",
            "Network Security",
            "Authentication",
        ],
    },
    SkillCategory {
        name: "AI & ML",
        items: &[
            "TensorFlow",
            "PyTorch",
            "LLM Integration",
            "Data Analysis",
            "Natural Language Processing",
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn brand_is_a_plain_wordmark() {
        assert_eq!(PROFILE.brand, "DevPortfolio");
    }

    #[test]
    fn mailto_uses_contact_address() {
        assert_eq!(PROFILE.mailto(), "mailto:hello@yourdomain.com");
    }

    #[test]
    fn accent_classes_are_distinct() {
        let classes = [Accent::Ocean, Accent::Violet, Accent::Emerald, Accent::Ember]
            .map(|a| a.css_class());
        for (i, a) in classes.iter().enumerate() {
            assert!(a.starts_with("accent-"));
            assert!(!classes[i + 1..].contains(a));
        }
    }

    #[test]
    fn project_serializes_without_missing_links() {
        let value = serde_json::to_value(PROJECTS[0]).unwrap();
        assert_eq!(value["category"], "networking");
        assert_eq!(value["glyph"], "network");
        assert_eq!(value["accent"], "ocean");
        assert_eq!(value["code_url"], "https://github.com");
        assert!(value.get("demo_url").is_none());
    }

    #[test]
    fn glyph_names_are_lowercase() {
        let json = serde_json::to_string(&[Glyph::GitHub, Glyph::LinkedIn]).unwrap();
        assert_eq!(json, r#"["github","linkedin"]"#);
    }
}
