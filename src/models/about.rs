//! Hero, services, stats and testimonials for the About section.

use super::Stat;

pub const NAME: &str = "Amar Zuga";
pub const STATUS: &str = "Seeking New Challenges";
pub const TAGLINE: &str =
    "I craft exceptional digital experiences through customer support, design, and IT solutions.";
pub const SUMMARY: &str = "A versatile professional focused on delivering high-quality results across multiple domains. I combine technical expertise with creative problem-solving to help businesses thrive in the digital space.";
pub const LOCATION: &str = "Bosnia and Herzegovina, Sarajevo";
pub const EMAIL: &str = "zuga677@gmail.com";

pub const CV_DOWNLOAD_URL: &str =
    "https://drive.usercontent.google.com/u/0/uc?id=1W_LftBMLaexw7buPbPpJDGmI5wSo6Ls5&export=download";
pub const CV_PREVIEW_URL: &str =
    "https://drive.google.com/file/d/1W_LftBMLaexw7buPbPpJDGmI5wSo6Ls5/view";

pub const CTA_TITLE: &str = "Ready to Start a Project?";
pub const CTA_BODY: &str = "Let's create something exceptional together. I'm always excited to take on new challenges and help businesses achieve their goals.";
pub const CTA_BUTTON: &str = "Get in Touch";

/// Avatar used when a testimonial image fails to load.
pub const DEFAULT_AVATAR: &str = "imgs/default-avatar.png";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub pros: &'static [&'static str],
    pub features: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub content: &'static str,
    pub image: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service {
        title: "Customer Support",
        description: "Delivering exceptional customer experiences with personalized support solutions.",
        pros: &["24/7 availability", "Quick response time", "Multi-channel support"],
        features: &[
            "Issue resolution tracking",
            "Customer feedback integration",
            "Process optimization",
        ],
    },
    Service {
        title: "Creative Design Solutions",
        description: "Crafting visually stunning and purposeful design experiences.",
        pros: &["Brand-focused approach", "Modern aesthetics", "User-centric design"],
        features: &["Visual identity creation", "UI/UX design", "Marketing materials"],
    },
    Service {
        title: "Technical Expertise",
        description: "Implementing robust technical solutions for business efficiency.",
        pros: &["System optimization", "Problem-solving", "Technical documentation"],
        features: &["IT infrastructure", "Software solutions", "Technical support"],
    },
];

pub const IMPACT_STATS: &[Stat] = &[
    Stat { value: "3+", label: "Years Experience" },
    Stat { value: "20+", label: "Projects Completed" },
    Stat { value: "96%", label: "Client Satisfaction" },
    Stat { value: "24/7", label: "Support Availability" },
    Stat { value: "4", label: "Languages Spoken" },
    Stat { value: "2", label: "Projects in Progress" },
    Stat { value: "3 Hours", label: "Response Time" },
    Stat { value: "1+", label: "Certifications" },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Sarah Johnson",
        role: "CEO, TechStart",
        content: "Working with Amar was an absolute pleasure. Their attention to detail and creative vision transformed our brand identity.",
        image: "/imgs/testimonials/sarah-johnson.jpg",
    },
    Testimonial {
        name: "Michael Chen",
        role: "Marketing Director, InnovateCo",
        content: "The level of professionalism and creativity brought to our project was outstanding. Highly recommended!",
        image: "/imgs/testimonials/michael-chen.jpg",
    },
    Testimonial {
        name: "David Williams",
        role: "Product Manager, TechCorp",
        content: "Amar's ability to understand complex requirements and deliver elegant solutions is remarkable. A true professional.",
        image: "/imgs/testimonials/david-williams.jpg",
    },
    Testimonial {
        name: "Emily Rodriguez",
        role: "Design Director, CreativeHub",
        content: "The attention to detail and creative approach brought to our projects has been invaluable. Highly recommended!",
        image: "/imgs/testimonials/emily-rodriguez.jpg",
    },
];
