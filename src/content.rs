//! Static copy for the page.

pub const NAV_LINKS: &[(&str, &str)] = &[
    ("#home", "Home"),
    ("#services", "Services"),
    ("#portfolio", "Portfolio"),
    ("#about", "About Us"),
    ("#testimonials", "Testimonials"),
    ("#contact", "Contact"),
];

pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service {
        title: "Renovation & Remodeling",
        description: "Complete home renovation services tailored to transform your living spaces into beautiful, functional areas.",
        icon: "🔨",
    },
    Service {
        title: "Interior Painting",
        description: "Professional interior painting services using premium quality paints and techniques for flawless finishes.",
        icon: "🪣",
    },
    Service {
        title: "Furniture Restoration",
        description: "Breathe new life into your cherished furniture pieces with our expert restoration services.",
        icon: "🛋",
    },
    Service {
        title: "Climate Control Systems",
        description: "Installation and maintenance of energy-efficient heating and cooling systems for your home.",
        icon: "🌡",
    },
    Service {
        title: "Exterior Finishing",
        description: "Transform your home's exterior with our professional painting and finishing services.",
        icon: "🖌",
    },
    Service {
        title: "Lighting Design",
        description: "Enhance your home's ambiance with custom lighting solutions designed for style and functionality.",
        icon: "💡",
    },
    Service {
        title: "Electrical Upgrades",
        description: "Comprehensive electrical system upgrades to improve safety and efficiency in your home.",
        icon: "🔌",
    },
    Service {
        title: "Plumbing Solutions",
        description: "Expert plumbing services from repairs to complete bathroom and kitchen renovations.",
        icon: "🔧",
    },
];

/// `(value, label)` pairs for the contact form's service picker.
pub const SERVICE_OPTIONS: &[(&str, &str)] = &[
    ("renovation", "Renovation & Remodeling"),
    ("painting", "Interior Painting"),
    ("furniture", "Furniture Restoration"),
    ("climate", "Climate Control Systems"),
    ("exterior", "Exterior Finishing"),
    ("lighting", "Lighting Design"),
    ("electrical", "Electrical Upgrades"),
    ("plumbing", "Plumbing Solutions"),
    ("other", "Other"),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    Kitchen,
    Bathroom,
    LivingRoom,
    Exterior,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::Kitchen => "Kitchen",
            Category::Bathroom => "Bathroom",
            Category::LivingRoom => "Living Room",
            Category::Exterior => "Exterior",
        }
    }
}

pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub category: Category,
    pub before_image: &'static str,
    pub after_image: &'static str,
}

pub const PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "Modern Kitchen Remodel",
        category: Category::Kitchen,
        before_image: "/assets/before1.jpg",
        after_image: "https://images.pexels.com/photos/2724749/pexels-photo-2724749.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
    },
    Project {
        id: 2,
        title: "Bathroom Transformation",
        category: Category::Bathroom,
        before_image: "/assets/before2.jpg",
        after_image: "https://images.pexels.com/photos/1910472/pexels-photo-1910472.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
    },
    Project {
        id: 3,
        title: "Living Room Renovation",
        category: Category::LivingRoom,
        before_image: "https://images.pexels.com/photos/1643383/pexels-photo-1643383.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
        after_image: "https://images.pexels.com/photos/1571460/pexels-photo-1571460.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
    },
    Project {
        id: 4,
        title: "House Façade Update",
        category: Category::Exterior,
        before_image: "https://images.pexels.com/photos/106399/pexels-photo-106399.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
        after_image: "https://images.pexels.com/photos/1396122/pexels-photo-1396122.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
    },
    Project {
        id: 5,
        title: "Contemporary Kitchen Design",
        category: Category::Kitchen,
        before_image: "https://images.pexels.com/photos/7061071/pexels-photo-7061071.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
        after_image: "https://images.pexels.com/photos/2062426/pexels-photo-2062426.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
    },
    Project {
        id: 6,
        title: "Luxury Bathroom Upgrade",
        category: Category::Bathroom,
        before_image: "https://images.pexels.com/photos/2127969/pexels-photo-2127969.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
        after_image: "https://images.pexels.com/photos/6958519/pexels-photo-6958519.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
    },
];

pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat { value: "500+", label: "Projects Completed", icon: "✔" },
    Stat { value: "20+", label: "Years Experience", icon: "🏆" },
    Stat { value: "50+", label: "Team Members", icon: "👥" },
    Stat { value: "98%", label: "On-time Completion", icon: "⏱" },
];

pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub image: &'static str,
    pub quote: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Sarah Johnson",
        role: "Homeowner",
        image: "https://images.pexels.com/photos/774909/pexels-photo-774909.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
        quote: "Home Transformations completely renovated our kitchen, and we couldn't be happier with the results. The team was professional, punctual, and the quality of their work exceeded our expectations. We're already planning our next project with them!",
    },
    Testimonial {
        name: "David Thompson",
        role: "Property Developer",
        image: "https://images.pexels.com/photos/614810/pexels-photo-614810.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
        quote: "I've worked with many contractors over the years, but Home Transformations stands out for their attention to detail and commitment to quality. They've completed several projects for me, and each one has been delivered on time and within budget.",
    },
    Testimonial {
        name: "Jennifer Martinez",
        role: "Interior Designer",
        image: "https://images.pexels.com/photos/1239291/pexels-photo-1239291.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
        quote: "As an interior designer, I often collaborate with Home Transformations to bring my designs to life. Their craftsmanship is exceptional, and they always find solutions to the most challenging design elements. It's a pleasure to work with such talented professionals.",
    },
    Testimonial {
        name: "Michael Wilson",
        role: "Homeowner",
        image: "https://images.pexels.com/photos/220453/pexels-photo-220453.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
        quote: "Our bathroom renovation was a complex project, but Home Transformations handled it with ease. They guided us through the entire process, from design to completion, and the result is stunning. We appreciate their expertise and dedication.",
    },
    Testimonial {
        name: "Amanda Carter",
        role: "Real Estate Agent",
        image: "https://images.pexels.com/photos/1587009/pexels-photo-1587009.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
        quote: "I recommend Home Transformations to my clients who need renovations before selling their homes. The transformations are always impressive, and the increase in property value is substantial. They're reliable, efficient, and produce outstanding results.",
    },
];

pub struct ContactDetail {
    pub icon: &'static str,
    pub title: &'static str,
    pub lines: &'static [&'static str],
}

pub const CONTACT_DETAILS: &[ContactDetail] = &[
    ContactDetail {
        icon: "📍",
        title: "Our Location",
        lines: &["123 Renovation Street, Transformation City, TC 12345"],
    },
    ContactDetail {
        icon: "📞",
        title: "Phone Number",
        lines: &["+1 (555) 123-4567"],
    },
    ContactDetail {
        icon: "✉",
        title: "Email Address",
        lines: &["info@hometransformations.com"],
    },
    ContactDetail {
        icon: "🕒",
        title: "Working Hours",
        lines: &[
            "Monday - Friday: 8:00 AM - 6:00 PM",
            "Saturday: 9:00 AM - 3:00 PM",
            "Sunday: Closed",
        ],
    },
];

pub const MAP_EMBED_URL: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3024.2219901290355!2d-74.00369368400567!3d40.71312937933185!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x89c25a23e28c1191%3A0x49f75d3281df052a!2s150%20Park%20Row%2C%20New%20York%2C%20NY%2010007%2C%20USA!5e0!3m2!1sen!2s!4v1560575084477!5m2!1sen!2s";

pub const SOCIAL_LINKS: &[(&str, &str)] = &[
    ("Facebook", "f"),
    ("Instagram", "◎"),
    ("Twitter", "𝕏"),
    ("YouTube", "▶"),
];
