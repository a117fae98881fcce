//! Static copy and records shown by the page sections.

pub const OWNER: &str = "Leulseyoum";
pub const OWNER_EMAIL: &str = "Leulseyoum103@gmail.com";
pub const BRAND: &str = "Leul.dev ⚡";
pub const CV_URL: &str = "/Leul_Resume.pdf";
pub const PHOTO_URL: &str = "/leul.jpg";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Github,
    Linkedin,
    Envelope,
    Twitter,
    Facebook,
    StackOverflow,
    Phone,
    Location,
    Code,
    Cogs,
    Robot,
    ExternalLink,
    GraduationCap,
    Briefcase,
}

impl Icon {
    /// Icon font class for the icon.
    pub fn class(self) -> &'static str {
        match self {
            Icon::Github => "devicon-github-plain",
            Icon::Linkedin => "devicon-linkedin-plain",
            Icon::Envelope => "extra-email",
            Icon::Twitter => "devicon-twitter-original",
            Icon::Facebook => "devicon-facebook-plain",
            Icon::StackOverflow => "devicon-stackoverflow-plain",
            Icon::Phone => "extra-phone",
            Icon::Location => "extra-location",
            Icon::Code => "extra-code",
            Icon::Cogs => "extra-cogs",
            Icon::Robot => "extra-robot",
            Icon::ExternalLink => "extra-link",
            Icon::GraduationCap => "extra-graduation",
            Icon::Briefcase => "extra-briefcase",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SocialLink {
    pub icon: Icon,
    pub label: &'static str,
    pub url: &'static str,
}

impl SocialLink {
    /// `mailto:` links open in place; everything else opens a new tab.
    pub fn is_external(&self) -> bool {
        !self.url.starts_with("mailto:") && !self.url.starts_with("tel:")
    }
}

pub static HERO_SOCIALS: [SocialLink; 3] = [
    SocialLink {
        icon: Icon::Github,
        label: "GitHub Profile",
        url: "https://github.com",
    },
    SocialLink {
        icon: Icon::Linkedin,
        label: "LinkedIn Profile",
        url: "https://linkedin.com",
    },
    SocialLink {
        icon: Icon::Envelope,
        label: "Email",
        url: "mailto:you@example.com",
    },
];

pub static CONTACT_SOCIALS: [SocialLink; 3] = [
    SocialLink {
        icon: Icon::Linkedin,
        label: "LinkedIn Profile",
        url: "https://linkedin.com/in/leulseyoum",
    },
    SocialLink {
        icon: Icon::StackOverflow,
        label: "Stack Overflow Profile",
        url: "https://stackoverflow.com/users/your_id/leulseyoum",
    },
    SocialLink {
        icon: Icon::Facebook,
        label: "Facebook Profile",
        url: "https://facebook.com/leulseyoum",
    },
];

pub static FOOTER_SOCIALS: [SocialLink; 4] = [
    SocialLink {
        icon: Icon::Github,
        label: "GitHub Profile",
        url: "https://github.com/yourusername",
    },
    SocialLink {
        icon: Icon::Linkedin,
        label: "LinkedIn Profile",
        url: "https://linkedin.com/in/yourusername",
    },
    SocialLink {
        icon: Icon::Twitter,
        label: "Twitter Profile",
        url: "https://twitter.com/yourusername",
    },
    SocialLink {
        icon: Icon::Envelope,
        label: "Email Address",
        url: "mailto:youremail@example.com",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct ContactDetail {
    pub icon: Icon,
    pub text: &'static str,
    pub href: Option<&'static str>,
}

pub static CONTACT_DETAILS: [ContactDetail; 3] = [
    ContactDetail {
        icon: Icon::Envelope,
        text: OWNER_EMAIL,
        href: Some("mailto:Leulseyoum103@gmail.com"),
    },
    ContactDetail {
        icon: Icon::Phone,
        text: "+251 989 905 112",
        href: Some("tel:+251989905112"),
    },
    ContactDetail {
        icon: Icon::Location,
        text: "Addis Ababa, Ethiopia",
        href: None,
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Skill {
    pub title: &'static str,
    pub icon: &'static str,
    /// Brand colour, CSS hex.
    pub color: &'static str,
}

pub static TECH_STACK: [Skill; 11] = [
    Skill {
        title: "HTML5",
        icon: "devicon-html5-plain",
        color: "#e34f26",
    },
    Skill {
        title: "CSS3",
        icon: "devicon-css3-plain",
        color: "#1572B6",
    },
    Skill {
        title: "TailwindCSS",
        icon: "devicon-tailwindcss-original",
        color: "#38B2AC",
    },
    Skill {
        title: "JavaScript",
        icon: "devicon-javascript-plain",
        color: "#f7df1e",
    },
    Skill {
        title: "React",
        icon: "devicon-react-original",
        color: "#61dafb",
    },
    Skill {
        title: "Next.js",
        icon: "devicon-nextjs-plain",
        color: "#ffffff",
    },
    Skill {
        title: "Flutter",
        icon: "devicon-flutter-plain",
        color: "#02569B",
    },
    Skill {
        title: "Node.js",
        icon: "devicon-nodejs-plain",
        color: "#3C873A",
    },
    Skill {
        title: "Firebase",
        icon: "devicon-firebase-plain",
        color: "#FFCA28",
    },
    Skill {
        title: "GitHub",
        icon: "devicon-github-original",
        color: "#ffffff",
    },
    Skill {
        title: "Figma",
        icon: "devicon-figma-plain",
        color: "#F24E1E",
    },
];

/// The tech stack repeated back to back, for a marquee that loops without a gap.
pub fn marquee() -> impl Iterator<Item = &'static Skill> {
    TECH_STACK.iter().chain(TECH_STACK.iter())
}

#[derive(Debug, Clone, Copy)]
pub struct Service {
    pub icon: Icon,
    /// Hover animation class applied to the icon.
    pub hover: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub static SERVICES: [Service; 3] = [
    Service {
        icon: Icon::Code,
        hover: "group-hover:animate-pulse",
        title: "Web Development",
        description: "I craft pixel-perfect websites and dynamic frontend experiences that are blazing fast and SEO-friendly.",
    },
    Service {
        icon: Icon::Cogs,
        hover: "group-hover:animate-spin",
        title: "Software Development",
        description: "Full-stack solutions using the MERN stack — REST APIs, databases, admin panels, and dashboards that scale.",
    },
    Service {
        icon: Icon::Robot,
        hover: "group-hover:animate-bounce",
        title: "Cross-platform Development",
        description: "One codebase for all screens — beautiful, performant Flutter apps for iOS, Android, and Web.",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub github: Option<&'static str>,
    pub demo: Option<&'static str>,
    pub image: Option<&'static str>,
}

pub static PROJECTS: [Project; 3] = [
    Project {
        title: "Portfolio Website",
        description: "A sleek, responsive portfolio website built with React, TailwindCSS, and Framer Motion animations.",
        tech: &["React", "TailwindCSS", "Framer Motion"],
        github: Some("https://github.com/yourusername/portfolio"),
        demo: Some("https://yourdomain.com"),
        image: Some("/images/portfolio-preview.jpg"),
    },
    Project {
        title: "E-commerce App",
        description: "Full-featured MERN stack e-commerce app with authentication, cart, and payment integration.",
        tech: &["MongoDB", "Express", "React", "Node.js"],
        github: Some("https://github.com/yourusername/ecommerce-app"),
        demo: None,
        image: Some("/images/ecommerce-preview.jpg"),
    },
    Project {
        title: "Flutter Chat App",
        description: "Cross-platform chat app using Flutter and Firebase with real-time messaging and push notifications.",
        tech: &["Flutter", "Firebase", "Dart"],
        github: Some("https://github.com/yourusername/flutter-chat"),
        demo: None,
        image: Some("/images/chat-app-preview.jpg"),
    },
];

/// One stop on the education or experience timeline.
#[derive(Debug, Clone, Copy)]
pub struct TimelineEntry {
    pub heading: &'static str,
    pub organisation: &'static str,
    pub period: &'static str,
    pub description: &'static str,
}

pub static EDUCATION: [TimelineEntry; 2] = [
    TimelineEntry {
        heading: "Bachelor of Science in Computer Science",
        organisation: "Addis Ababa University",
        period: "2019 - Present",
        description: "Focused on software engineering, advanced algorithms, and system design. Active in the programming club and hackathons.",
    },
    TimelineEntry {
        heading: "High School Diploma",
        organisation: "Bole High School",
        period: "2015 - 2018",
        description: "Graduated with distinction. Participated in national coding competitions and science expos.",
    },
];

pub static EXPERIENCE: [TimelineEntry; 3] = [
    TimelineEntry {
        heading: "Frontend Developer",
        organisation: "Tech Innovations Ltd.",
        period: "Jan 2023 - Present",
        description: "Building responsive web apps with React, TailwindCSS, animations, and accessibility best practices.",
    },
    TimelineEntry {
        heading: "Flutter Developer Intern",
        organisation: "Creative Apps Co.",
        period: "Jun 2022 - Dec 2022",
        description: "Developed cross-platform mobile apps, worked closely with backend teams, optimized performance & UX.",
    },
    TimelineEntry {
        heading: "MERN Stack Developer",
        organisation: "NextGen Solutions",
        period: "Jan 2021 - May 2022",
        description: "Built full-stack web apps with MongoDB, Express, React, and Node.js. Delivered modern dashboards & APIs.",
    },
];

/// Side of the timeline spine an entry sits on, alternating from the left.
pub fn timeline_side(index: usize) -> &'static str {
    if index % 2 == 0 {
        "md:self-start md:pl-12"
    } else {
        "md:self-end md:pr-12"
    }
}

pub fn copyright(year: i32) -> String {
    format!("© {year} {OWNER}. All Rights Reserved.")
}

/// Renders an RFC 3339 build timestamp as e.g. `Mar 4, 2025 14:05 UTC`.
pub fn build_stamp(rfc3339: &str) -> Option<String> {
    chrono::DateTime::parse_from_rfc3339(rfc3339)
        .ok()
        .map(|t| t.with_timezone(&chrono::Utc).format("%b %-d, %Y %H:%M UTC").to_string())
}
