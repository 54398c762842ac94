//! Route table and navigation bar.
//!
//! Manage routes are reachable by anyone; only their links (and the screens'
//! mutation affordances) are hidden from anonymous visitors.

use serde::Serialize;
use std::fmt;

use crate::models::ResourceKind;
use crate::sections::content::BRAND;
use crate::sections::Section;
use crate::session::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "screen", content = "resource", rename_all = "lowercase")]
pub enum Screen {
    Home,
    Login,
    Register,
    Manage(ResourceKind),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub path: &'static str,
    pub screen: Screen,
}

pub const ROUTES: &[Route] = &[
    Route { path: "/", screen: Screen::Home },
    Route { path: "/login", screen: Screen::Login },
    Route { path: "/register", screen: Screen::Register },
    Route { path: "/education", screen: Screen::Manage(ResourceKind::Education) },
    Route { path: "/experience", screen: Screen::Manage(ResourceKind::Experience) },
    Route { path: "/projects-manage", screen: Screen::Manage(ResourceKind::Projects) },
    Route { path: "/skills-manage", screen: Screen::Manage(ResourceKind::Skills) },
];

/// Resolve a path, ignoring a trailing slash, query string and fragment
pub fn resolve(path: &str) -> Option<Screen> {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let path = match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    };

    ROUTES.iter().find(|route| route.path == path).map(|route| route.screen)
}

pub fn path_for(screen: Screen) -> &'static str {
    ROUTES
        .iter()
        .find(|route| route.screen == screen)
        .map(|route| route.path)
        .unwrap_or("/")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "target", rename_all = "lowercase")]
pub enum NavTarget {
    /// Scroll to a landing page section
    Section(&'static str),
    /// Navigate to a route
    Path(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub label: &'static str,
    pub target: NavTarget,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavBar {
    pub brand: &'static str,
    pub links: Vec<NavLink>,
    pub manage: Vec<NavLink>,
    /// "Login" link, or the logged-in identity with a "Logout" action
    pub account: Account,
    pub call_to_action: NavLink,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum Account {
    Anonymous { login: &'static str },
    Authenticated { email: String, logout: &'static str },
}

const SECTION_LINKS: &[(&str, Section)] = &[
    ("About", Section::About),
    ("Skills", Section::Skills),
    ("Education", Section::Education),
    ("Experience", Section::Experience),
    ("Projects", Section::Projects),
    ("Services", Section::Services),
    ("Contact", Section::Contact),
];

const MANAGE_LINKS: &[(&str, ResourceKind)] = &[
    ("Manage Edu", ResourceKind::Education),
    ("Manage Exp", ResourceKind::Experience),
    ("Manage Proj", ResourceKind::Projects),
    ("Manage Skills", ResourceKind::Skills),
];

pub fn nav_bar(session: Option<&Session>) -> NavBar {
    let links = SECTION_LINKS
        .iter()
        .map(|&(label, section)| NavLink {
            label,
            target: NavTarget::Section(section.anchor()),
        })
        .collect();

    let manage = match session {
        Some(_) => MANAGE_LINKS
            .iter()
            .map(|&(label, kind)| NavLink {
                label,
                target: NavTarget::Path(path_for(Screen::Manage(kind))),
            })
            .collect(),
        None => Vec::new(),
    };

    let account = match session {
        Some(session) => Account::Authenticated {
            email: session.email.clone(),
            logout: path_for(Screen::Login),
        },
        None => Account::Anonymous {
            login: path_for(Screen::Login),
        },
    };

    NavBar {
        brand: BRAND,
        links,
        manage,
        account,
        call_to_action: NavLink {
            label: "Hire Me",
            target: NavTarget::Section(Section::Contact.anchor()),
        },
    }
}

impl fmt::Display for NavTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavTarget::Section(anchor) => write!(f, "#{}", anchor),
            NavTarget::Path(path) => f.write_str(path),
        }
    }
}

impl fmt::Display for NavBar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.brand)?;
        for link in self.links.iter().chain(&self.manage) {
            writeln!(f, "  {:<14} {}", link.label, link.target)?;
        }
        match &self.account {
            Account::Anonymous { login } => writeln!(f, "  {:<14} {}", "Login", login)?,
            Account::Authenticated { email, .. } => writeln!(f, "  {:<14} {}", "Logout", email)?,
        }
        write!(f, "  {:<14} {}", self.call_to_action.label, self.call_to_action.target)
    }
}

/// Static layout of the login and register screens
#[derive(Debug, Clone, Serialize)]
pub struct AuthForm {
    pub title: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<&'static str>,
    pub fields: &'static [&'static str],
    pub submit: &'static str,
    pub alternate: (&'static str, NavLink),
}

pub fn login_form() -> AuthForm {
    AuthForm {
        title: "Admin Login",
        subtitle: None,
        fields: &["Email Address", "Password"],
        submit: "Login",
        alternate: (
            "Don't have an account?",
            NavLink {
                label: "Register here",
                target: NavTarget::Path(path_for(Screen::Register)),
            },
        ),
    }
}

pub fn register_form() -> AuthForm {
    AuthForm {
        title: "Request Access",
        subtitle: Some("Register to manage portfolio content"),
        fields: &["Full Name", "Email Address", "Password", "Confirm Password"],
        submit: "Register",
        alternate: (
            "Already have an account?",
            NavLink {
                label: "Login here",
                target: NavTarget::Path(path_for(Screen::Login)),
            },
        ),
    }
}

impl fmt::Display for AuthForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        if let Some(subtitle) = self.subtitle {
            writeln!(f, "{}", subtitle)?;
        }
        for field in self.fields {
            writeln!(f, "  {}: ____", field)?;
        }
        writeln!(f, "  [{}]", self.submit)?;
        let (prompt, link) = &self.alternate;
        write!(f, "{} {} ({})", prompt, link.label, link.target)
    }
}
