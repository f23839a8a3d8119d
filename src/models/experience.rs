//! Work history shown in the Experience section.

use super::Highlight;

/// A role in the work history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Experience {
    pub role: &'static str,
    pub company: &'static str,
    pub location: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub achievements: &'static [&'static str],
    pub highlights: &'static [Highlight],
    pub skills: &'static [&'static str],
}

impl Experience {
    /// Short label used on the timeline strip.
    pub fn timeline_label(&self) -> &'static str {
        self.company
    }
}

pub const EXPERIENCES: &[Experience] = &[
    Experience {
        role: "Senior UX/UI Designer & Creative Lead",
        company: "Freelance",
        location: "Sarajevo, Bosnia and Herzegovina",
        period: "January 2022 - Present",
        description: "Driving digital transformation through innovative design solutions while managing a diverse portfolio of international clients. Specializing in e-commerce optimization, SaaS platforms, and enterprise solutions with a focus on data-driven design decisions.",
        achievements: &[
            "Increased e-commerce conversion rates by 45% through strategic UX improvements and A/B testing",
            "Established comprehensive design systems reducing development time by 60%",
            "Successfully delivered 40+ projects with 100% client satisfaction rate",
            "Mentored 4 junior designers to senior positions within 8 months",
            "Implemented data-driven design strategies increasing user engagement by 35%",
            "Created scalable design frameworks adopted by 5+ enterprise clients",
            "Reduced design iteration cycles by 40% through optimized workflows",
            "Generated $500K+ in client revenue through successful project deliveries",
        ],
        highlights: &[
            Highlight {
                title: "Design Innovation",
                description: "40+ successful projects delivered",
            },
            Highlight {
                title: "Client Excellence",
                description: "100% client satisfaction maintained",
            },
        ],
        skills: &[
            "UI/UX Design",
            "Design Systems",
            "User Research",
            "A/B Testing",
            "Prototyping",
            "Team Leadership",
            "Project Management",
            "Client Communication",
            "Figma/Adobe Suite",
            "Design Strategy",
            "Mobile-First Design",
            "Conversion Optimization",
        ],
    },
    Experience {
        role: "Customer Care Specialist",
        company: "DDC MLS",
        location: "Sarajevo, Bosnia and Herzegovina",
        period: "December 2021 - November 2022",
        description: "Provided exceptional customer support while maintaining high service standards and resolving client inquiries efficiently.",
        achievements: &[
            "Handled customer inquiries and resolved issues promptly",
            "Maintained detailed documentation of customer interactions",
            "Collaborated with cross-functional teams to improve service delivery",
            "Achieved 98% customer satisfaction rating through proactive problem resolution",
            "Developed and implemented new customer feedback collection system",
            "Reduced average response time by 35% through process optimization",
            "Trained and mentored 3 new team members in customer service best practices",
            "Created comprehensive documentation for common customer inquiries",
            "Received Employee of the Month award twice for exceptional service",
            "Successfully handled 150+ customer interactions daily",
            "Implemented new escalation protocol reducing resolution time by 25%",
        ],
        highlights: &[
            Highlight {
                title: "Service Excellence",
                description: "Maintained 95% positive customer feedback",
            },
            Highlight {
                title: "Performance Excellence",
                description: "98% satisfaction rating across 10,000+ interactions",
            },
            Highlight {
                title: "Response Time Champion",
                description: "35% reduction in average response time",
            },
        ],
        skills: &[
            "Customer Support",
            "Problem Solving",
            "Documentation",
            "Team Collaboration",
        ],
    },
    Experience {
        role: "Junior Digital Designer",
        company: "Creative Solutions Agency",
        location: "Sarajevo, Bosnia and Herzegovina",
        period: "June 2021 - November 2021",
        description: "Contributed to digital design projects while learning and implementing industry best practices in a fast-paced agency environment.",
        achievements: &[
            "Assisted in the creation of digital marketing materials",
            "Collaborated with senior designers on brand projects",
            "Participated in client presentation preparations",
            "Contributed to internal design system documentation",
            "Redesigned company website increasing user engagement by 40%",
            "Created 30+ social media campaigns with average engagement rate of 15%",
            "Developed brand guidelines for 5 key clients",
            "Optimized design workflow reducing project delivery time by 25%",
            "Introduced mobile-first design approach for all projects",
            "Implemented accessibility standards in all design work",
        ],
        highlights: &[
            Highlight {
                title: "Rising Star",
                description: "Recognized for rapid skill development",
            },
            Highlight {
                title: "Design Impact",
                description: "40% increase in website engagement",
            },
            Highlight {
                title: "Project Success",
                description: "95% client satisfaction rate",
            },
            Highlight {
                title: "Creative Output",
                description: "30+ successful campaigns",
            },
        ],
        skills: &[
            "Digital Design",
            "Adobe Creative Suite",
            "Project Management",
            "Client Communication",
        ],
    },
    Experience {
        role: "Sportswear Designer",
        company: "Cubanfit",
        location: "Remote",
        period: "3-month project",
        description: "Collaborated with Cubanfit to design and develop women's activewear collection, focusing on performance-driven designs that blend functionality with aesthetic appeal. Led end-to-end design process from concept to production-ready specifications.",
        achievements: &[
            "Designed 7 complete activewear outfits including shorts, t-shirts, leggings, and sports bras",
            "Created comprehensive technical specifications for performance features like flatlock seams and ergonomic cuts",
            "Conducted material research to select optimal fabrics with 4-way stretch and moisture-wicking properties",
            "Developed production-ready designs using Adobe Illustrator and Photoshop",
            "Ensured all designs aligned with brand identity and current market trends",
            "Maintained consistent communication with stakeholders throughout the project lifecycle",
            "Delivered all designs on schedule meeting quality and performance requirements",
            "Incorporated customer feedback and wear-testing results into final designs",
        ],
        highlights: &[
            Highlight {
                title: "Design Scope",
                description: "7 complete outfits designed and specified",
            },
            Highlight {
                title: "Technical Excellence",
                description: "Performance-optimized specifications",
            },
        ],
        skills: &[
            "Technical Design",
            "Adobe Illustrator",
            "Adobe Photoshop",
            "Material Research",
            "Sportswear Design",
            "Technical Specifications",
            "Remote Collaboration",
            "Production Documentation",
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_experiences_complete() {
        assert_eq!(EXPERIENCES.len(), 4);
        for exp in EXPERIENCES {
            assert!(!exp.role.is_empty());
            assert!(!exp.achievements.is_empty(), "{} has no achievements", exp.role);
        }
        assert_eq!(EXPERIENCES[0].timeline_label(), "Freelance");
    }
}
