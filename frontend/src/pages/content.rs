// Copy and data tables for the landing page sections.

pub const BRAND: &str = "StreamLine";

pub const NAV_LINKS: [&str; 4] = ["Features", "Testimonials", "Pricing", "Contact"];

/// In-page anchor for a nav label, e.g. "Pricing" -> "#pricing".
pub fn anchor(label: &str) -> String {
    format!("#{}", label.to_lowercase().replace(' ', "-"))
}

pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: [Feature; 4] = [
    Feature {
        icon: "⚡",
        title: "Smart Automation",
        description: "AI-powered workflows that learn from your patterns and automate repetitive tasks",
    },
    Feature {
        icon: "👥",
        title: "Team Collaboration",
        description: "Real-time collaboration tools that keep your team synchronized and productive",
    },
    Feature {
        icon: "📊",
        title: "Advanced Analytics",
        description: "Deep insights into your workflow performance with actionable recommendations",
    },
    Feature {
        icon: "🛡️",
        title: "Enterprise Security",
        description: "Bank-level security with SOC 2 compliance and end-to-end encryption",
    },
];

pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub initials: &'static str,
    pub quote: &'static str,
}

pub const TESTIMONIAL_STARS: usize = 5;

pub const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "Sarah Johnson",
        role: "CEO, TechCorp",
        initials: "SJ",
        quote: "StreamLine has completely transformed our workflow. We've reduced manual work by 80% and our team is more productive than ever.",
    },
    Testimonial {
        name: "Michael Chen",
        role: "CTO, StartupXYZ",
        initials: "MC",
        quote: "The automation features are incredible. What used to take hours now happens automatically. Our ROI was immediate.",
    },
    Testimonial {
        name: "Emily Rodriguez",
        role: "VP Operations, GrowthCo",
        initials: "ER",
        quote: "Best investment we've made for our team. The collaboration features have brought us closer together, even while remote.",
    },
];

pub struct Plan {
    pub name: &'static str,
    pub price: &'static str,
    pub description: &'static str,
    pub popular: bool,
    pub sales_led: bool,
    pub features: &'static [&'static str],
}

impl Plan {
    pub fn cta(&self) -> &'static str {
        if self.sales_led {
            "Contact Sales"
        } else {
            "Start Free Trial"
        }
    }
}

pub const PLANS: [Plan; 3] = [
    Plan {
        name: "Starter",
        price: "$29",
        description: "Perfect for small teams",
        popular: false,
        sales_led: false,
        features: &["Up to 5 team members", "Basic automation", "Standard support", "5GB storage"],
    },
    Plan {
        name: "Professional",
        price: "$79",
        description: "Best for growing teams",
        popular: true,
        sales_led: false,
        features: &[
            "Up to 25 team members",
            "Advanced automation",
            "Priority support",
            "100GB storage",
            "Advanced analytics",
        ],
    },
    Plan {
        name: "Enterprise",
        price: "$199",
        description: "For large organizations",
        popular: false,
        sales_led: true,
        features: &[
            "Unlimited team members",
            "Custom automation",
            "24/7 dedicated support",
            "Unlimited storage",
            "Custom integrations",
        ],
    },
];

pub struct ContactChannel {
    pub icon: &'static str,
    pub title: &'static str,
    pub content: &'static str,
    pub href: &'static str,
}

pub const CONTACT_CHANNELS: [ContactChannel; 3] = [
    ContactChannel {
        icon: "✉️",
        title: "Email",
        content: "hello@streamline.com",
        href: "mailto:hello@streamline.com",
    },
    ContactChannel {
        icon: "📞",
        title: "Phone",
        content: "+1 (555) 123-4567",
        href: "tel:+15551234567",
    },
    ContactChannel {
        icon: "📍",
        title: "Office",
        content: "123 Innovation Drive\nSan Francisco, CA 94105",
        href: "#",
    },
];

pub struct FooterColumn {
    pub title: &'static str,
    pub links: &'static [&'static str],
}

pub const FOOTER_COLUMNS: [FooterColumn; 3] = [
    FooterColumn {
        title: "Product",
        links: &["Features", "Pricing", "Integrations", "API"],
    },
    FooterColumn {
        title: "Company",
        links: &["About", "Blog", "Careers", "Contact"],
    },
    FooterColumn {
        title: "Support",
        links: &["Help Center", "Documentation", "Status", "Security"],
    },
];

pub const SOCIAL_LINKS: [(&str, &str); 4] = [
    ("Twitter", "𝕏"),
    ("LinkedIn", "in"),
    ("GitHub", "⌥"),
    ("Email", "✉"),
];

pub const LEGAL_LINKS: [&str; 3] = ["Privacy Policy", "Terms of Service", "Cookie Policy"];
