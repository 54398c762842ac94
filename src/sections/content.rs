// Static landing page copy

use serde::Serialize;

use crate::models::{Education, Experience, Record};

pub const OWNER_NAME: &str = "Chandan Kumar K N";
pub const BRAND: &str = "ChandanDev";

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Card {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ContactChannel {
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Showcase {
    pub title: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub image: &'static str,
}

pub const HERO_BADGE: &str = "Available for Freelance";
pub const HERO_HEADLINE: &str = "React.js Developer Portfolio";
pub const HERO_INTRO: &str = "Building modern, scalable web applications with React, JavaScript, and cutting-edge technologies. Transforming ideas into exceptional digital experiences.";
pub const HERO_ACTIONS: &[&str] = &["Get in Touch", "Download CV"];
pub const HERO_STATS: &[Stat] = &[
    Stat { value: "3+", label: "Years Experience" },
    Stat { value: "50+", label: "Projects Completed" },
    Stat { value: "15+", label: "Technologies" },
];

pub const ABOUT_TITLE: &str = "Full-Stack Developer";
pub const ABOUT_BIO: &str = "B.Tech Computer Science student at Sri Siddhartha Institute Of Technology (CGPA 7.83), passionate about building full-stack applications with React, Spring Boot, MongoDB, and Docker. Actively preparing for technical interviews while creating scalable web solutions.";
pub const ABOUT_CARDS: &[Card] = &[
    Card {
        title: "Full-Stack",
        description: "Building end-to-end applications with React frontend, Spring Boot backend, MongoDB, and REST APIs.",
    },
    Card {
        title: "Modern Tech",
        description: "Expertise in Docker containerization, JavaScript/TypeScript, Tailwind CSS, and animated UIs with Framer Motion.",
    },
    Card {
        title: "Project-Driven",
        description: "Hands-on portfolio projects including backend portfolios, 3D campus maps, and interview prep tools.",
    },
];

pub const SKILLS_BLURB: &str = "Full-stack technologies I use daily for portfolio projects and interview prep";
pub const SKILL_NAMES: &[&str] = &[
    "React.js",
    "Spring Boot",
    "Java",
    "MongoDB",
    "PostgreSQL",
    "Docker",
    "Tailwind CSS",
    "JavaScript",
    "Git/GitHub",
    "Framer Motion",
];

pub const PROJECT_CATEGORIES: &[&str] = &["All", "Web Apps", "UI Components", "Full Stack"];
pub const SHOWCASE: &[Showcase] = &[
    Showcase {
        title: "E-Commerce Platform",
        category: "Full Stack",
        description: "Full-stack online shopping application with real-time inventory and payments.",
        image: "/project1.jpg",
    },
    Showcase {
        title: "Task Management Dashboard",
        category: "Web Apps",
        description: "Collaborative project management tool with drag-and-drop features.",
        image: "/project2.jpg",
    },
    Showcase {
        title: "Component Library",
        category: "UI Components",
        description: "Comprehensive React component library with 50+ reusable elements.",
        image: "/project3.jpg",
    },
];

pub const SERVICES_HEADLINE: &str = "Built for innovation.";
pub const SERVICES_BLURB: &str = "Comprehensive solutions to transform your ideas into exceptional digital experiences.";
pub const SERVICES: &[Card] = &[
    Card {
        title: "Frontend Development",
        description: "Building responsive and performant web applications using React, Next.js, and modern JavaScript frameworks with pixel-perfect designs.",
    },
    Card {
        title: "Responsive Design",
        description: "Creating mobile-first, responsive interfaces that work seamlessly across all devices and screen sizes with exceptional user experience.",
    },
    Card {
        title: "UI/UX Design",
        description: "Designing intuitive and visually appealing user interfaces with a focus on usability, accessibility, and modern aesthetics.",
    },
    Card {
        title: "Custom Components",
        description: "Developing reusable, scalable component libraries and design systems that maintain consistency across large applications.",
    },
    Card {
        title: "Performance Optimization",
        description: "Optimizing web applications for speed and efficiency through code splitting, lazy loading, and best performance practices.",
    },
    Card {
        title: "Code Review & Consulting",
        description: "Providing expert code reviews, architecture consulting, and technical guidance to improve your development workflow.",
    },
];

pub const CONTACT_HEADLINE: &str = "Let's Work Together";
pub const CONTACT_BLURB: &str = "Have a project in mind? I'm always ready to discuss new projects, creative ideas or opportunities to be part of your visions.";
pub const CONTACT_CHANNELS: &[ContactChannel] = &[
    ContactChannel { label: "Email Me", value: "hello@alexdev.com" },
    ContactChannel { label: "Call Me", value: "+1 (555) 000-0000" },
    ContactChannel { label: "Location", value: "San Francisco, CA" },
];
pub const CONTACT_FORM_FIELDS: &[&str] = &["Your Name", "Email Address", "Subject", "Message"];

pub const FOOTER_TAGLINE: &str = "Crafting digital experiences that matter.";
pub const FOOTER_HOLDER: &str = "Alex";

/// Shown by the landing page's education section when the API is unreachable
pub fn education_fallback() -> Vec<Record<Education>> {
    vec![
        Record::new(
            "1",
            Education {
                institution: "Sri Siddhartha Institute Of Technology".into(),
                degree: "B.E. Computer Science and Engineering".into(),
                duration: "2022-2026".into(),
                description: "Specialized in Artificial Intelligence and Software Engineering. Graduated with Honors.".into(),
            },
        ),
        Record::new(
            "2",
            Education {
                institution: "Tap Academy".into(),
                degree: "Full Stack Web Development".into(),
                duration: "6-months".into(),
                description: "Intensive bootcamp focused on Java development.".into(),
            },
        ),
    ]
}

/// Shown by the landing page's experience timeline when the API is unreachable
pub fn experience_fallback() -> Vec<Record<Experience>> {
    vec![
        Record::new(
            "1",
            Experience {
                role: "B.Tech Computer Science".into(),
                company: "Sri Siddhartha Institute of Technology".into(),
                duration: "2022-2026".into(),
                location: Some("Tumakuru, Karnataka".into()),
                description: "Pursuing B.Tech in Computer Science with CGPA 7.83. Focused on full-stack development, data structures, algorithms, and interview preparation for software engineering roles.".into(),
            },
        ),
        Record::new(
            "2",
            Experience {
                role: "Backend Developer Trainee".into(),
                company: "Tap Academy".into(),
                duration: "2024 - 2025".into(),
                location: Some("Bengaluru, IN".into()),
                description: "Hands-on training in Spring Boot backend development, REST APIs, MongoDB/PostgreSQL databases, and building scalable portfolio projects.".into(),
            },
        ),
        Record::new(
            "3",
            Experience {
                role: "Full-Stack Developer".into(),
                company: "Rasti Technology".into(),
                duration: "03/02/2025 - 25/04/2025".into(),
                location: Some("Remote".into()),
                description: "Built a online Job portal system and the tech stack used in this project is Codigniter, PHP, postgerSQL, HTML, CSS, JS".into(),
            },
        ),
    ]
}
