//! Cross-discipline skills shown in the Versatilist section.

use super::Stat;

pub const HEADER_BADGE: &str = "Driven by curiosity";
pub const HEADER_TITLE: &str = "Creative Technologist";
pub const HEADER_DESCRIPTION: &str =
    "Bridging creativity and technology with an intuitive approach to design and problem-solving.";

/// Pips drawn by the skill-level indicator.
pub const LEVEL_PIPS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillLevel {
    Expert,
    Advanced,
    Intermediate,
}

impl SkillLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkillLevel::Expert => "Expert",
            SkillLevel::Advanced => "Advanced",
            SkillLevel::Intermediate => "Intermediate",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillDetail {
    pub area: &'static str,
    pub level: SkillLevel,
    pub years: u8,
}

impl SkillDetail {
    /// Filled pips out of [`LEVEL_PIPS`], one per year.
    pub fn filled_pips(&self) -> usize {
        usize::from(self.years).min(LEVEL_PIPS)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaseStudy {
    pub title: &'static str,
    pub description: &'static str,
    pub impact: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecentProject {
    pub name: &'static str,
    pub date: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersatileSkill {
    pub title: &'static str,
    pub description: &'static str,
    pub primary_skills: &'static [&'static str],
    pub detailed_skills: &'static [&'static str],
    pub achievements: &'static [Stat],
    pub tools: &'static [&'static str],
    pub case_study: CaseStudy,
    pub skill_details: &'static [SkillDetail],
    pub recent_projects: &'static [RecentProject],
    pub soft_skills: &'static [&'static str],
}

pub const VERSATILE_SKILLS: &[VersatileSkill] = &[
    VersatileSkill {
        title: "Visual Design & UI/UX",
        description: "Transforming ideas into visually stunning and functional experiences",
        primary_skills: &[
            "Brand Design & Identity",
            "UI/UX Architecture",
            "Digital Illustration",
            "Responsive Design",
            "User Flow Mapping",
            "Design Systems",
        ],
        detailed_skills: &[
            "Creating comprehensive brand identity systems and guidelines",
            "Designing intuitive user interfaces with focus on user experience",
            "Developing interactive prototypes and user flows",
            "Creating vector illustrations and digital assets",
            "Implementing responsive design principles",
            "Building scalable design systems",
        ],
        achievements: &[
            Stat {
                value: "40+",
                label: "Design Projects",
            },
            Stat {
                value: "98%",
                label: "Client Satisfaction",
            },
            Stat {
                value: "15+",
                label: "Design Systems",
            },
        ],
        tools: &[
            "Figma",
            "Adobe Creative Suite",
            "Sketch",
            "InVision",
            "Adobe XD",
            "Photoshop",
            "Illustrator",
            "After Effects",
        ],
        case_study: CaseStudy {
            title: "E-commerce Redesign Success",
            description: "Complete overhaul of an e-commerce platform's user experience",
            impact: &[
                "45% conversion rate increase",
                "60% reduction in cart abandonment",
                "90% positive user feedback",
            ],
        },
        skill_details: &[
            SkillDetail {
                area: "UI Design",
                level: SkillLevel::Expert,
                years: 4,
            },
            SkillDetail {
                area: "Brand Design",
                level: SkillLevel::Advanced,
                years: 3,
            },
            SkillDetail {
                area: "Motion Design",
                level: SkillLevel::Intermediate,
                years: 2,
            },
        ],
        recent_projects: &[
            RecentProject {
                name: "E-commerce Redesign",
                date: "2023",
            },
            RecentProject {
                name: "Brand System",
                date: "2023",
            },
        ],
        soft_skills: &[
            "Creative Problem Solving",
            "Visual Communication",
        ],
    },
    VersatileSkill {
        title: "Hardware & Device Repair",
        description: "Expert diagnostics and repair of computers and mobile devices",
        primary_skills: &[
            "PC Diagnostics",
            "Hardware Repair",
            "Mobile Device Repair",
            "System Optimization",
            "Data Recovery",
            "Component Replacement",
        ],
        detailed_skills: &[
            "Advanced computer hardware diagnostics and troubleshooting",
            "Smartphone and tablet repair including screen replacements",
            "System performance optimization and maintenance",
            "Data recovery from damaged storage devices",
            "Custom PC building and upgrades",
            "Network hardware setup and configuration",
        ],
        achievements: &[
            Stat {
                value: "80+",
                label: "Devices Repaired",
            },
            Stat {
                value: "98%",
                label: "Success Rate",
            },
            Stat {
                value: "4.9 ★",
                label: "Service Rating",
            },
        ],
        tools: &[
            "Hardware Diagnostic Tools",
            "Repair Toolkits",
            "Testing Equipment",
            "Recovery Software",
            "Soldering Equipment",
            "Benchmarking Tools",
        ],
        case_study: CaseStudy {
            title: "Service Center Success",
            description: "Established efficient repair workflow system",
            impact: &[
                "24hr average turnaround",
                "95% first-time fix rate",
                "Zero data loss incidents",
            ],
        },
        skill_details: &[
            SkillDetail {
                area: "Hardware Repair",
                level: SkillLevel::Expert,
                years: 5,
            },
            SkillDetail {
                area: "Data Recovery",
                level: SkillLevel::Advanced,
                years: 4,
            },
            SkillDetail {
                area: "System Optimization",
                level: SkillLevel::Intermediate,
                years: 3,
            },
        ],
        recent_projects: &[
            RecentProject {
                name: "Device Repair Streamlining",
                date: "2023",
            },
            RecentProject {
                name: "Data Recovery Case Study",
                date: "2023",
            },
        ],
        soft_skills: &[
            "Attention to Detail",
            "Problem Solving",
        ],
    },
    VersatileSkill {
        title: "Technical Implementation",
        description: "Bringing designs to life with clean, organized code",
        primary_skills: &[
            "HTML/CSS Architecture",
            "Web Development",
            "API Integration",
            "Responsive Design",
            "Performance Optimization",
            "Cross-browser Compatibility",
        ],
        detailed_skills: &[
            "Building semantic HTML structures for accessibility",
            "Implementing complex CSS layouts and animations",
            "Integrating and consuming REST APIs",
            "Creating responsive and mobile-first designs",
            "Optimizing web performance and loading times",
            "Ensuring cross-browser and device compatibility",
        ],
        achievements: &[
            Stat {
                value: "100+",
                label: "Pages Built",
            },
            Stat {
                value: "5s",
                label: "Load Time",
            },
            Stat {
                value: "99%",
                label: "Mobile-Friendly",
            },
        ],
        tools: &[
            "Visual Studio Code",
            "Git",
            "Postman",
            "Chrome DevTools",
        ],
        case_study: CaseStudy {
            title: "Performance Optimization",
            description: "Improved website speed and responsiveness",
            impact: &[
                "50% reduction in load time",
                "30% increase in mobile traffic",
                "20% boost in SEO ranking",
            ],
        },
        skill_details: &[
            SkillDetail {
                area: "Frontend Development",
                level: SkillLevel::Expert,
                years: 4,
            },
            SkillDetail {
                area: "API Development",
                level: SkillLevel::Advanced,
                years: 3,
            },
            SkillDetail {
                area: "Web Performance",
                level: SkillLevel::Intermediate,
                years: 2,
            },
        ],
        recent_projects: &[
            RecentProject {
                name: "Corporate Website",
                date: "2023",
            },
            RecentProject {
                name: "API Development for Mobile App",
                date: "2023",
            },
        ],
        soft_skills: &[
            "Analytical Thinking",
            "Creativity",
        ],
    },
    VersatileSkill {
        title: "AI & Automation",
        description: "Leveraging AI to enhance digital experiences",
        primary_skills: &[
            "AI Implementation",
            "Process Automation",
            "ChatGPT Integration",
            "Workflow Optimization",
            "Machine Learning",
            "Data Analysis",
        ],
        detailed_skills: &[
            "Implementing AI-powered features and functionalities",
            "Creating automated workflow systems",
            "Integrating ChatGPT and other AI models",
            "Optimizing business processes through automation",
            "Analyzing data for AI-driven insights",
            "Building AI-enhanced user experiences",
        ],
        achievements: &[
            Stat {
                value: "15+",
                label: "AI Projects",
            },
            Stat {
                value: "40%",
                label: "Efficiency Gain",
            },
            Stat {
                value: "3",
                label: "AI Solutions",
            },
        ],
        tools: &[
            "TensorFlow",
            "Python",
            "R",
            "RapidMiner",
        ],
        case_study: CaseStudy {
            title: "AI Chatbot Development",
            description: "Created a chatbot that handles 70% of customer inquiries",
            impact: &[
                "24/7 customer support",
                "60% reduction in response time",
                "50% decrease in support costs",
            ],
        },
        skill_details: &[
            SkillDetail {
                area: "Machine Learning",
                level: SkillLevel::Expert,
                years: 3,
            },
            SkillDetail {
                area: "AI Integration",
                level: SkillLevel::Advanced,
                years: 2,
            },
            SkillDetail {
                area: "Data Analysis",
                level: SkillLevel::Intermediate,
                years: 2,
            },
        ],
        recent_projects: &[
            RecentProject {
                name: "Customer Support Chatbot",
                date: "2023",
            },
            RecentProject {
                name: "Sales Prediction Model",
                date: "2023",
            },
        ],
        soft_skills: &[
            "Critical Thinking",
            "Innovation",
        ],
    },
    VersatileSkill {
        title: "Customer Care & Support",
        description: "Managing complex customer relationships and technical support with empathy and expertise",
        primary_skills: &[
            "Complaint Resolution",
            "Technical Support",
            "Ombudsman Case Handling",
            "Escalation Management",
            "Customer Communication",
            "Process Documentation",
        ],
        detailed_skills: &[
            "Resolving complex customer complaints and disputes",
            "Providing technical support and troubleshooting",
            "Managing Ombudsman and regulatory cases",
            "Implementing support workflow improvements",
            "Creating customer communication strategies",
            "Developing support documentation and guides",
        ],
        achievements: &[
            Stat {
                value: "98%",
                label: "Resolution Rate",
            },
            Stat {
                value: "4.9★",
                label: "CSAT Score",
            },
            Stat {
                value: "1.2hr",
                label: "Avg Response",
            },
        ],
        tools: &[
            "Zendesk",
            "Jira Service Desk",
            "Salesforce",
            "Confluence",
            "TeamViewer",
            "LiveChat",
            "Knowledge Base",
            "QMS Systems",
        ],
        case_study: CaseStudy {
            title: "Support Excellence Program",
            description: "Transformed customer support operations and complaint handling processes",
            impact: &[
                "95% first-contact resolution rate",
                "40% reduction in escalations",
                "Zero upheld Ombudsman cases",
            ],
        },
        skill_details: &[
            SkillDetail {
                area: "Technical Support",
                level: SkillLevel::Expert,
                years: 5,
            },
            SkillDetail {
                area: "Complaint Handling",
                level: SkillLevel::Expert,
                years: 4,
            },
            SkillDetail {
                area: "Process Improvement",
                level: SkillLevel::Advanced,
                years: 3,
            },
        ],
        recent_projects: &[
            RecentProject {
                name: "Support Center Optimization",
                date: "2023",
            },
            RecentProject {
                name: "Complaint Process Redesign",
                date: "2023",
            },
        ],
        soft_skills: &[
            "Problem Resolution",
            "Customer Empathy",
        ],
    },
    VersatileSkill {
        title: "Coffee Shop Management",
        description: "Comprehensive cafe operations management focusing on staff, inventory, and financial oversight",
        primary_skills: &[
            "Staff Scheduling",
            "Inventory Control",
            "Financial Management",
            "Quality Assurance",
            "Team Leadership",
            "Operations Planning",
        ],
        detailed_skills: &[
            "Creating efficient staff rosters and shift management",
            "Managing stock levels and supplier relationships",
            "Handling basic bookkeeping and financial reports",
            "Maintaining product quality and consistency",
            "Training and supervising barista teams",
            "Implementing operational procedures and standards",
        ],
        achievements: &[
            Stat {
                value: "25%",
                label: "Cost Reduction",
            },
            Stat {
                value: "98%",
                label: "Staff Retention",
            },
            Stat {
                value: "4.8★",
                label: "Store Rating",
            },
        ],
        tools: &[
            "POS Systems",
            "Square",
            "Inventory Management",
            "Staff Scheduling Software",
            "QuickBooks",
            "Recipe Management",
            "Equipment Maintenance",
            "Safety Protocols",
        ],
        case_study: CaseStudy {
            title: "Cafe Operations Optimization",
            description: "Streamlined operations and improved profitability in high-volume coffee shop",
            impact: &[
                "30% reduction in waste",
                "20% increase in staff efficiency",
                "15% boost in customer satisfaction",
            ],
        },
        skill_details: &[
            SkillDetail {
                area: "Operations Management",
                level: SkillLevel::Expert,
                years: 4,
            },
            SkillDetail {
                area: "Staff Management",
                level: SkillLevel::Expert,
                years: 4,
            },
            SkillDetail {
                area: "Financial Control",
                level: SkillLevel::Advanced,
                years: 3,
            },
        ],
        recent_projects: &[
            RecentProject {
                name: "Staff Training Program",
                date: "2023",
            },
            RecentProject {
                name: "Inventory System Implementation",
                date: "2023",
            },
        ],
        soft_skills: &[
            "Leadership",
            "Organization",
        ],
    },
    VersatileSkill {
        title: "Project Management",
        description: "Orchestrating successful project delivery through effective planning and execution",
        primary_skills: &[
            "Agile Methodologies",
            "Risk Management",
            "Resource Planning",
            "Stakeholder Management",
            "Budget Control",
            "Timeline Management",
        ],
        detailed_skills: &[
            "Leading cross-functional teams",
            "Sprint planning and execution",
            "Project scope definition",
            "Risk assessment and mitigation",
            "Resource allocation",
            "Budget monitoring",
        ],
        achievements: &[
            Stat {
                value: "15+",
                label: "Projects Delivered",
            },
            Stat {
                value: "95%",
                label: "On-time Delivery",
            },
            Stat {
                value: "100%",
                label: "Client Satisfaction",
            },
        ],
        tools: &[
            "Jira",
            "Trello",
            "MS Project",
            "Confluence",
            "Slack",
            "Notion",
            "Asana",
        ],
        case_study: CaseStudy {
            title: "Digital Transformation Project",
            description: "Led a complex digital transformation initiative",
            impact: &[
                "Delivered 2 months ahead of schedule",
                "20% under budget",
                "Zero scope creep",
            ],
        },
        skill_details: &[
            SkillDetail {
                area: "Agile Management",
                level: SkillLevel::Expert,
                years: 4,
            },
            SkillDetail {
                area: "Risk Management",
                level: SkillLevel::Advanced,
                years: 3,
            },
            SkillDetail {
                area: "Resource Planning",
                level: SkillLevel::Expert,
                years: 4,
            },
        ],
        recent_projects: &[
            RecentProject {
                name: "Enterprise System Migration",
                date: "2023",
            },
            RecentProject {
                name: "Digital Transformation",
                date: "2023",
            },
        ],
        soft_skills: &[
            "Leadership",
            "Communication",
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skills_loaded() {
        assert_eq!(VERSATILE_SKILLS.len(), 7);
        assert_eq!(VERSATILE_SKILLS[0].title, "Visual Design & UI/UX");
        for skill in VERSATILE_SKILLS {
            assert!(!skill.case_study.impact.is_empty(), "{}", skill.title);
        }
    }

    #[test]
    fn test_filled_pips_capped() {
        let detail = SkillDetail {
            area: "Hardware Repair",
            level: SkillLevel::Expert,
            years: 9,
        };
        assert_eq!(detail.filled_pips(), LEVEL_PIPS);
        assert_eq!(VERSATILE_SKILLS[0].skill_details[2].filled_pips(), 2);
    }
}
