//! Hard-coded site copy: plans, partners, sidebar menu, company story.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use crate::util::guard::Page;

pub const COMPANY_NAME: &str = "Communication LTD";
pub const LOGO_SRC: &str = "/assets/images/logo.png";
/// Visitor name used by the home greeting.
pub const GREETING_USER: &str = "Itay";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlanDetail {
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Plan {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub details: &'static [PlanDetail],
    pub border_color: &'static str,
}

const fn detail(label: &'static str, value: &'static str) -> PlanDetail {
    PlanDetail { label, value }
}

pub const PLANS: &[Plan] = &[
    Plan {
        title: "Essential Plan",
        description: "",
        image: "/assets/images/plan_1.png",
        details: &[
            detail("Data Limit", "5GB"),
            detail("Price", "$10/month"),
            detail("Speed", "Up to 20Mbps"),
        ],
        border_color: "#533946",
    },
    Plan {
        title: "Streamer Lite",
        description: "",
        image: "/assets/images/plan_2.png",
        details: &[
            detail("Data Limit", "20GB"),
            detail("Price", "$25/month"),
            detail("Speed", "Up to 50Mbps"),
        ],
        border_color: "#2E9CA0",
    },
    Plan {
        title: "Unlimited Pro",
        description: "",
        image: "/assets/images/plan_3.png",
        details: &[
            detail("Data Limit", "Unlimited (Fair Use: 100GB)"),
            detail("Price", "$40/month"),
            detail("Speed", "Up to 100Mbps"),
        ],
        border_color: "#0F2C33",
    },
    Plan {
        title: "Global Connect",
        description: "",
        image: "/assets/images/plan_4.png",
        details: &[
            detail("Data Limit", "300GB"),
            detail("Price", "$70/month"),
            detail("Speed", "High-speed 5G"),
        ],
        border_color: "#21616A",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Partner {
    pub name: &'static str,
    pub image: &'static str,
}

pub const PARTNERS: &[Partner] = &[
    Partner { name: "Partner 1", image: "/assets/images/partner1.png" },
    Partner { name: "Partner 2", image: "/assets/images/partner2.png" },
    Partner { name: "Partner 3", image: "/assets/images/partner3.png" },
    Partner { name: "Partner 4", image: "/assets/images/partner4.png" },
    Partner { name: "Partner 5", image: "/assets/images/partner5.png" },
];

/// Destination of a sidebar entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuTarget {
    Page(Page),
    /// Placeholder link for a section that does not exist yet.
    Unavailable,
    Group(&'static [MenuLink]),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuLink {
    pub title: &'static str,
    pub target: MenuTarget,
}

impl MenuLink {
    /// `href` for a leaf entry; groups and placeholders use `#`.
    #[must_use]
    pub const fn href(&self) -> &'static str {
        match self.target {
            MenuTarget::Page(page) => page.path(),
            MenuTarget::Unavailable | MenuTarget::Group(_) => "#",
        }
    }

    #[must_use]
    pub const fn children(&self) -> &'static [MenuLink] {
        match self.target {
            MenuTarget::Group(children) => children,
            MenuTarget::Page(_) | MenuTarget::Unavailable => &[],
        }
    }
}

const fn leaf(title: &'static str, page: Page) -> MenuLink {
    MenuLink { title, target: MenuTarget::Page(page) }
}

const fn unavailable(title: &'static str) -> MenuLink {
    MenuLink { title, target: MenuTarget::Unavailable }
}

const CUSTOMER_LINKS: &[MenuLink] = &[unavailable("New Customer"), unavailable("Search")];
const ACCOUNT_LINKS: &[MenuLink] = &[unavailable("My Profile"), unavailable("Change My Password")];

pub const MENU: &[MenuLink] = &[
    leaf("Home", Page::Home),
    leaf("About", Page::About),
    leaf("Data Plans", Page::DataPlans),
    MenuLink {
        title: "Customers",
        target: MenuTarget::Group(CUSTOMER_LINKS),
    },
    MenuLink {
        title: "Account",
        target: MenuTarget::Group(ACCOUNT_LINKS),
    },
    leaf("Contact Us", Page::Contact),
];

/// "Our Story" paragraphs, in markdown.
pub const STORY: &[&str] = &[
    "Founded in 2010, **Communication LTD** was born from a simple yet ambitious vision: \
     to make staying connected easier for everyone, no matter where life takes them.",
    "Our journey began when our founder, a seasoned traveler, experienced the challenges \
     of finding affordable and reliable internet while abroad.",
    "Inspired by this gap, they assembled a team of tech enthusiasts and telecommunications \
     experts to create a company that bridges the connectivity divide for people at home and on the go.",
    "Since our inception, we\u{2019}ve grown into a trusted provider of internet solutions, offering tailored \
     data packages for both local and international use.",
    "At **Communication LTD**, we believe in connecting people, ideas, and opportunities, because in \
     today\u{2019}s world, staying connected means staying empowered.",
];

/// The story as one markdown paragraph, hard line breaks between entries.
#[must_use]
pub fn story_markdown() -> String {
    STORY.join("  \n")
}
