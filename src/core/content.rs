//! Static content for the two site personas. Same component architecture,
//! different copy: the senior "johndoe" set and the junior "adam" set.
//! Records are plain `&'static` data, read by the scenes and never
//! mutated.

#[derive(Clone, Copy, Debug)]
pub struct ProjectRecord {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub status: &'static str,
    pub link: &'static str,
    /// Accent colour as CSS hex and as an "r,g,b" triplet for rgba()
    /// interpolation in glow gradients.
    pub accent: &'static str,
    pub accent_rgb: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct SiteContent {
    pub persona: &'static str,
    pub email: &'static str,
    /// Labels orbiting the skill sphere; sixteen per persona.
    pub skills: &'static [&'static str],
    pub projects: &'static [ProjectRecord],
    /// Contact-form intent categories.
    pub intents: &'static [&'static str],
}

pub const INTENTS: &[&str] = &[
    "Project inquiry",
    "Job opportunity",
    "Collaboration",
    "Just saying hi",
];

pub static PRIMARY: SiteContent = SiteContent {
    persona: "John Doe",
    email: "hello@johndoe.com",
    skills: &[
        "React",
        "Next.js",
        "TypeScript",
        "Node.js",
        "Python",
        "PostgreSQL",
        "Redis",
        "GraphQL",
        "AWS",
        "Docker",
        "Kubernetes",
        "Terraform",
        "Jest",
        "Figma",
        "CI/CD",
        "REST",
    ],
    projects: &[
        ProjectRecord {
            title: "Fleetboard",
            subtitle: "Logistics SaaS Platform",
            description: "Real-time fleet tracking and dispatch for regional \
                carriers. Live map updates over websockets, route analytics, \
                and a billing pipeline handling thousands of daily events.",
            tags: &["Next.js", "PostgreSQL", "AWS", "WebSockets"],
            status: "Operational",
            link: "#",
            accent: "#22c55e",
            accent_rgb: "34,197,94",
        },
        ProjectRecord {
            title: "Ledgerline",
            subtitle: "Invoicing & Payments",
            description: "Invoicing product for freelancers with Stripe \
                integration, recurring billing, and tax-ready exports. Grew \
                to paying customers in three markets.",
            tags: &["React", "Node.js", "Stripe", "Docker"],
            status: "Operational",
            link: "#",
            accent: "#3b82f6",
            accent_rgb: "59,130,246",
        },
        ProjectRecord {
            title: "Pulseview",
            subtitle: "Monitoring Dashboard",
            description: "Self-hosted uptime and latency dashboard with \
                alerting rules and status pages, built for small teams that \
                outgrew spreadsheet monitoring.",
            tags: &["TypeScript", "Redis", "Grafana", "K8s"],
            status: "Completed",
            link: "#",
            accent: "#a855f7",
            accent_rgb: "168,85,247",
        },
    ],
    intents: INTENTS,
};

pub static ALT: SiteContent = SiteContent {
    persona: "Adam Rami",
    email: "adam@ramidev.io",
    skills: &[
        "PHP",
        "Laravel",
        "React",
        "Node.js",
        "Python",
        "SQL",
        "MySQL",
        "MongoDB",
        "Blade",
        "Tailwind",
        "Bootstrap",
        "Git",
        "GitHub",
        "Figma",
        "Postman",
        "Express.js",
    ],
    projects: &[
        ProjectRecord {
            title: "Online Exams App",
            subtitle: "Exam Management System",
            description: "A comprehensive system to manage exams, users, and \
                roles. Features secure authentication, real-time analytics, \
                and anti-cheating measures. Built with Laravel and Blade.",
            tags: &["Laravel", "Blade", "MySQL", "Tailwind"],
            status: "Completed",
            link: "#",
            accent: "#ef4444",
            accent_rgb: "239,68,68",
        },
        ProjectRecord {
            title: "AUI Student Dashboard",
            subtitle: "Internal Dashboard",
            description: "Frontend for an internal dashboard using React and \
                Material UI. Features Outlook login integration, student \
                search, and visual enrollment statistics.",
            tags: &["React", "Material UI", "API", "Auth"],
            status: "Internship",
            link: "#",
            accent: "#3b82f6",
            accent_rgb: "59,130,246",
        },
    ],
    intents: INTENTS,
};

/// Pick the content set for a `data-variant` attribute value. Unknown or
/// missing values fall back to the primary persona.
pub fn content_for_variant(key: Option<&str>) -> &'static SiteContent {
    match key {
        Some("adam") => &ALT,
        _ => &PRIMARY,
    }
}
