//! Static page content.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Hero,
    About,
    Services,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Hero,
        Section::About,
        Section::Services,
        Section::Projects,
        Section::Contact,
    ];

    /// Anchor id used for in-page navigation.
    pub fn id(self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::About => "about",
            Section::Services => "services",
            Section::Projects => "projects",
            Section::Contact => "contact",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Section::Hero => "Home",
            Section::About => "About",
            Section::Services => "Services",
            Section::Projects => "Projects",
            Section::Contact => "Contact",
        }
    }
}

pub const OWNER_NAME: &str = "Ethan Carter";
pub const BRAND: &str = "Abraham.dev";

pub const ROLES: [&str; 3] = ["Developer", "Designer", "Problem Solver"];

#[derive(Clone, Debug, PartialEq)]
pub struct Stat {
    pub number: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

pub static STATS: [Stat; 3] = [
    Stat { number: "194", label: "Completed Projects", icon: "🎯" },
    Stat { number: "98%", label: "Client Rating", icon: "⭐" },
    Stat { number: "6", label: "Years of Experience", icon: "⚡" },
];

#[derive(Clone, Debug, PartialEq)]
pub struct Highlight {
    pub text: &'static str,
    pub icon: &'static str,
}

pub static HIGHLIGHTS: [Highlight; 3] = [
    Highlight { text: "Developer", icon: "💻" },
    Highlight { text: "Designer", icon: "🎨" },
    Highlight { text: "Problem Solver", icon: "🚀" },
];

#[derive(Clone, Debug, PartialEq)]
pub struct TimelineEntry {
    pub year: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

pub static TIMELINE: [TimelineEntry; 5] = [
    TimelineEntry {
        year: "2017",
        title: "Started Coding Journey",
        description: "Began learning web development through self-study and bootcamps",
        icon: "🌱",
    },
    TimelineEntry {
        year: "2019",
        title: "First Developer Role",
        description: "Joined a startup as a junior full-stack developer",
        icon: "👨‍💻",
    },
    TimelineEntry {
        year: "2020",
        title: "Freelance Success",
        description: "Started freelancing and completed 20+ successful projects",
        icon: "🎯",
    },
    TimelineEntry {
        year: "2021",
        title: "Tech Lead",
        description: "Promoted to tech lead, managing a team of 5 developers",
        icon: "👥",
    },
    TimelineEntry {
        year: "2023",
        title: "Independent Studio",
        description: "Successfully completed 194 projects with 98% client satisfaction",
        icon: "🚀",
    },
];

#[derive(Clone, Debug, PartialEq)]
pub struct CoreValue {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub background: &'static str,
}

pub static VALUES: [CoreValue; 4] = [
    CoreValue {
        icon: "🎯",
        title: "Innovation",
        description: "Pushing boundaries with creative solutions",
        background: "linear-gradient(135deg, #6DBE45 0%, #204E27 100%)",
    },
    CoreValue {
        icon: "⭐",
        title: "Excellence",
        description: "Committed to delivering premium quality",
        background: "linear-gradient(135deg, #204E27 0%, #6DBE45 100%)",
    },
    CoreValue {
        icon: "🚀",
        title: "Growth",
        description: "Continuous learning and improvement",
        background: "linear-gradient(135deg, #6DBE45 0%, #204E27 100%)",
    },
    CoreValue {
        icon: "⚡",
        title: "Efficiency",
        description: "Building trust through reliable delivery",
        background: "linear-gradient(135deg, #204E27 0%, #6DBE45 100%)",
    },
];

#[derive(Clone, Debug, PartialEq)]
pub struct Service {
    pub title: &'static str,
    /// SVG path data.
    pub icon: &'static str,
    pub description: &'static str,
    pub gradient: &'static str,
}

pub static SERVICES: [Service; 6] = [
    Service {
        title: "Web Development",
        icon: "M13 7h8m0 0v8m0-8l-8 8-4-4-6 6",
        description: "Custom, responsive websites built with modern technologies. From simple landing pages to complex web applications.",
        gradient: "linear-gradient(135deg, #6DBE45 0%, #204E27 100%)",
    },
    Service {
        title: "Mobile Development",
        icon: "M12 18h.01M8 21h8a2 2 0 002-2V5a2 2 0 00-2-2H8a2 2 0 00-2 2v14a2 2 0 002 2z",
        description: "Native and cross-platform mobile applications that deliver exceptional user experiences on any device.",
        gradient: "linear-gradient(135deg, #204E27 0%, #6DBE45 100%)",
    },
    Service {
        title: "UI/UX Design",
        icon: "M7 21a4 4 0 01-4-4V5a2 2 0 012-2h4a2 2 0 012 2v12a4 4 0 01-4 4zm0 0h12a2 2 0 002-2v-4a2 2 0 00-2-2h-2.343M11 7.343l1.657-1.657a2 2 0 012.828 0l2.829 2.829a2 2 0 010 2.828l-8.486 8.485M7 17h.01",
        description: "Intuitive interfaces and seamless user experiences that engage and delight your audience.",
        gradient: "linear-gradient(135deg, #6DBE45 0%, #204E27 100%)",
    },
    Service {
        title: "E-commerce Solutions",
        icon: "M3 3h2l.4 2M7 13h10l4-8H5.4M7 13L5.4 5M7 13l-2.293 2.293c-.63.63-.184 1.707.707 1.707H17m0 0a2 2 0 100 4 2 2 0 000-4zm-8 2a2 2 0 11-4 0 2 2 0 014 0z",
        description: "Full-featured online stores with secure payment processing and inventory management.",
        gradient: "linear-gradient(135deg, #204E27 0%, #6DBE45 100%)",
    },
    Service {
        title: "SEO Optimization",
        icon: "M21 21l-6-6m2-5a7 7 0 11-14 0 7 7 0 0114 0z",
        description: "Improve your search engine rankings and drive organic traffic to your website.",
        gradient: "linear-gradient(135deg, #6DBE45 0%, #204E27 100%)",
    },
    Service {
        title: "Brand Strategy",
        icon: "M11 3.055A9.001 9.001 0 1020.945 13H11V3.055z",
        description: "Comprehensive branding solutions that help your business stand out in the market.",
        gradient: "linear-gradient(135deg, #204E27 0%, #6DBE45 100%)",
    },
];

#[derive(Clone, Debug, PartialEq)]
pub struct Testimonial {
    pub text: &'static str,
    pub author: &'static str,
    pub role: &'static str,
    pub avatar: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProjectStats {
    pub users: &'static str,
    pub transactions: &'static str,
    pub revenue: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub video: &'static str,
    pub tags: &'static [&'static str],
    pub testimonial: Testimonial,
    pub stats: Option<ProjectStats>,
}

pub static PROJECTS: [Project; 4] = [
    Project {
        id: 1,
        title: "E-Commerce Platform",
        category: "web",
        description: "A full-stack e-commerce solution with real-time inventory management",
        image: "1.jpeg",
        video: "/project-demos/ecommerce-demo.mp4",
        tags: &["React", "Node.js", "MongoDB", "Stripe"],
        testimonial: Testimonial {
            text: "The e-commerce platform transformed our business. Sales increased by 200% in the first quarter!",
            author: "Sarah Johnson",
            role: "CEO, Fashion Boutique",
            avatar: "https://source.unsplash.com/random/100x100/?woman",
        },
        stats: Some(ProjectStats {
            users: "50K+",
            transactions: "100K+",
            revenue: "$2M+",
        }),
    },
    Project {
        id: 2,
        title: "Health & Fitness App",
        category: "mobile",
        description: "Cross-platform mobile app for workout tracking and meal planning",
        image: "2.jpeg",
        video: "/project-demos/fitness-demo.mp4",
        tags: &["React Native", "Firebase", "Redux", "GraphQL"],
        testimonial: Testimonial {
            text: "User engagement increased dramatically. The app is intuitive and feature-rich.",
            author: "Mike Chen",
            role: "Fitness Director",
            avatar: "https://source.unsplash.com/random/100x100/?man",
        },
        stats: None,
    },
    Project {
        id: 3,
        title: "Real Estate Platform",
        category: "web",
        description: "Property listing and management system with virtual tours",
        image: "3.jpeg",
        video: "/project-demos/realestate-demo.mp4",
        tags: &["Next.js", "Prisma", "PostgreSQL", "ThreeJS"],
        testimonial: Testimonial {
            text: "The virtual tour feature revolutionized how we showcase properties.",
            author: "Lisa Park",
            role: "Real Estate Agent",
            avatar: "https://source.unsplash.com/random/100x100/?person",
        },
        stats: None,
    },
    Project {
        id: 4,
        title: "Blockchain Marketplace",
        category: "blockchain",
        description: "Decentralized marketplace for digital assets and NFTs",
        image: "4.jpeg",
        video: "/project-demos/blockchain-demo.mp4",
        tags: &["Solidity", "Web3.js", "React", "IPFS"],
        testimonial: Testimonial {
            text: "A game-changing platform for digital artists and collectors alike.",
            author: "David Kim",
            role: "Digital Artist",
            avatar: "https://source.unsplash.com/random/100x100/?artist",
        },
        stats: None,
    },
];

#[derive(Clone, Debug, PartialEq)]
pub struct SocialLink {
    pub name: &'static str,
    pub url: &'static str,
    pub icon: &'static str,
}

pub static SOCIALS: [SocialLink; 3] = [
    SocialLink {
        name: "GitHub",
        url: "https://github.com/VenujaVP",
        icon: "M12 .5C5.65.5.5 5.65.5 12c0 5.08 3.29 9.39 7.86 10.91.58.1.79-.25.79-.56v-2c-3.2.7-3.87-1.37-3.87-1.37-.52-1.33-1.28-1.69-1.28-1.69-1.04-.71.08-.7.08-.7 1.15.08 1.76 1.18 1.76 1.18 1.03 1.76 2.69 1.25 3.35.96.1-.74.4-1.25.73-1.54-2.55-.29-5.24-1.28-5.24-5.69 0-1.26.45-2.28 1.18-3.09-.12-.29-.51-1.46.11-3.05 0 0 .97-.31 3.17 1.18a11 11 0 015.77 0c2.2-1.49 3.17-1.18 3.17-1.18.63 1.59.23 2.76.11 3.05.74.81 1.18 1.83 1.18 3.09 0 4.42-2.69 5.39-5.26 5.68.41.36.78 1.06.78 2.14v3.17c0 .31.21.67.8.56A11.5 11.5 0 0023.5 12C23.5 5.65 18.35.5 12 .5z",
    },
    SocialLink {
        name: "LinkedIn",
        url: "https://linkedin.com/company/nova-boost",
        icon: "M4.98 3.5a2.5 2.5 0 11-.02 5 2.5 2.5 0 01.02-5zM3 9h4v12H3zM9 9h3.8v1.7h.05c.53-1 1.83-2.05 3.77-2.05 4.03 0 4.78 2.65 4.78 6.1V21h-4v-5.6c0-1.34-.02-3.06-1.86-3.06-1.87 0-2.15 1.46-2.15 2.96V21H9z",
    },
    SocialLink {
        name: "LinkedIn (personal)",
        url: "https://linkedin.com/in/venuja-v11",
        icon: "M4.98 3.5a2.5 2.5 0 11-.02 5 2.5 2.5 0 01.02-5zM3 9h4v12H3zM9 9h3.8v1.7h.05c.53-1 1.83-2.05 3.77-2.05 4.03 0 4.78 2.65 4.78 6.1V21h-4v-5.6c0-1.34-.02-3.06-1.86-3.06-1.87 0-2.15 1.46-2.15 2.96V21H9z",
    },
];

pub const CONTACT_EMAIL: &str = "demo@abraham.dev";
pub const CONTACT_PHONE: &str = "+94777777777";
pub const CONTACT_PHONE_DISPLAY: &str = "+94 77 777 7777";
