//! Page copy: navigable sections, counters, services, testimonials and
//! contact details.

/// A navigable region of the page, in page order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NavSection {
    Home,
    About,
    Services,
    Testimonials,
    Contact,
}

impl NavSection {
    pub const ALL: [NavSection; 5] = [
        NavSection::Home,
        NavSection::About,
        NavSection::Services,
        NavSection::Testimonials,
        NavSection::Contact,
    ];

    /// DOM id of the section element.
    pub const fn id(self) -> &'static str {
        match self {
            NavSection::Home => "home",
            NavSection::About => "about",
            NavSection::Services => "services",
            NavSection::Testimonials => "testimonials",
            NavSection::Contact => "contact",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            NavSection::Home => "Home",
            NavSection::About => "About",
            NavSection::Services => "Services",
            NavSection::Testimonials => "Testimonials",
            NavSection::Contact => "Contact",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|section| section.id() == id)
    }
}

/// Headline counter in the about section.
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
    pub test_id: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat {
        value: "117+",
        label: "Individuals Trained",
        test_id: "stat-trained",
    },
    Stat {
        value: "23+",
        label: "Success Stories",
        test_id: "stat-success",
    },
    Stat {
        value: "30+",
        label: "Awards Earned",
        test_id: "stat-awards",
    },
];

/// Card in the services grid.
pub struct Service {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub test_id: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service {
        icon: "◎",
        title: "Success Mindset Development",
        description: "Success is 80% mindset and 20% skills. We help you develop the right mindset, \
                      set clear goals, and create a roadmap to achieve minimum ₹1 crore income.",
        test_id: "service-mindset",
    },
    Service {
        icon: "₹",
        title: "Unlimited Income Potential",
        description: "No boss, no 9-to-5 job constraints. Enjoy flexible working hours, financial \
                      security with minimum capital investment, and lifetime royalty income.",
        test_id: "service-income",
    },
    Service {
        icon: "↗",
        title: "Proven Growth Strategy",
        description: "Earn ₹1 lakh per month within 3 years and scale to ₹1 crore per year. Our \
                      step-by-step roadmap ensures sustainable growth and success.",
        test_id: "service-growth",
    },
    Service {
        icon: "★",
        title: "Expert Mentorship",
        description: "Get comprehensive training, recognition & rewards, and learn to impact \
                      people's lives while building your own wealth and entrepreneurial success.",
        test_id: "service-mentorship",
    },
];

pub struct Testimonial {
    pub quote: &'static str,
    pub name: &'static str,
    pub role: &'static str,
    pub test_id: &'static str,
}

impl Testimonial {
    /// Avatar initials: first letter of each word of the name, upper-cased.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().find(|c| c.is_alphabetic()))
            .flat_map(char::to_uppercase)
            .collect()
    }
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "I had zero background in insurance sales. The training system here is designed \
                to take beginners to professionals. Our attitude and willingness to learn matter \
                more than experience.",
        name: "J. Indra",
        role: "LIC Career Advisor",
        test_id: "testimonial-1",
    },
    Testimonial {
        quote: "I was worried about competition until I learned a proper system here. The \
                system puts me in the top 5% who thrive with strategy. Now my friends ask me \
                for financial advice!",
        name: "V. Sankar",
        role: "Senior Development Officer",
        test_id: "testimonial-2",
    },
];

pub const PHONE_DISPLAY: &str = "+91 99428 15544";
pub const PHONE_HREF: &str = "tel:+919942815544";
pub const EMAIL: &str = "amutha.licdocbe@gmail.com";
pub const ADDRESS_LINES: [&str; 2] = [
    "Sri Sairam Complex, Opposite to Ganga Hospital,",
    "Mettupalayam Road, Coimbatore – 641043",
];

pub fn email_href() -> String {
    format!("mailto:{EMAIL}")
}
