//! Working philosophy shown in the Mindset section.

use super::Stat;

pub const VISION: &str = "The best solutions emerge from the intersection of technical excellence, creative thinking, and a deep understanding of real-world needs.";
pub const VISION_SUBTITLE: &str =
    "Building bridges between technical excellence and creative innovation";

/// Category selected when the section opens.
pub const DEFAULT_MINDSET_CATEGORY: &str = "versatility";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trait {
    pub title: &'static str,
    pub description: &'static str,
    pub details: &'static str,
    pub stats: [Stat; 2],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MindsetCategory {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub traits: &'static [Trait],
}

/// Index of the category with `id`, if any.
pub fn mindset_index(id: &str) -> Option<usize> {
    MINDSET_CATEGORIES.iter().position(|c| c.id == id)
}

pub const MINDSET_CATEGORIES: &[MindsetCategory] = &[
    MindsetCategory {
        id: "versatility",
        title: "Versatile Thinking",
        description: "Adapting and evolving across domains",
        traits: &[
            Trait {
                title: "Cross-Domain Mastery",
                description: "Bridging multiple disciplines to create comprehensive solutions.",
                details: "Combining technical expertise with creative problem-solving.",
                stats: [
                    Stat { value: "5+", label: "Domains Mastered" },
                    Stat { value: "80%", label: "Cross-skill Integration" },
                ],
            },
            Trait {
                title: "Adaptive Vision",
                description: "Identifying opportunities across different fields and technologies.",
                details: "Staying ahead of trends while maintaining practical grounding.",
                stats: [
                    Stat { value: "10+", label: "Technologies Integrated" },
                    Stat { value: "3", label: "Industry Pivots" },
                ],
            },
            Trait {
                title: "Rapid Adaptation",
                description: "Quick learning and implementation of new technologies.",
                details: "Converting challenges into opportunities through agile thinking.",
                stats: [
                    Stat { value: "48h", label: "Avg. Learning Sprint" },
                    Stat { value: "90%", label: "Implementation Rate" },
                ],
            },
        ],
    },
    MindsetCategory {
        id: "philosophy",
        title: "Creative Philosophy",
        description: "Core principles that drive innovation and problem-solving",
        traits: &[
            Trait {
                title: "Learn by Building",
                description: "Transform concepts into reality through hands-on experimentation and iterative development.",
                details: "Every project is a learning laboratory where theory meets practice.",
                stats: [
                    Stat { value: "300+", label: "Hours of Learning" },
                    Stat { value: "15+", label: "New Skills Mastered" },
                ],
            },
            Trait {
                title: "Pattern Recognition",
                description: "Identify connections between different domains to create unique solutions.",
                details: "Cross-pollinating ideas from various fields for innovative approaches.",
                stats: [
                    Stat { value: "40+", label: "Projects Connected" },
                    Stat { value: "3", label: "Industries Bridged" },
                ],
            },
            Trait {
                title: "Systematic Solutions",
                description: "Transform complex challenges into clear, actionable frameworks.",
                details: "Breaking down problems into manageable, systematic solutions.",
                stats: [
                    Stat { value: "85%", label: "Efficiency Increase" },
                    Stat { value: "20+", label: "Frameworks Created" },
                ],
            },
        ],
    },
    MindsetCategory {
        id: "approach",
        title: "Technical Approach",
        description: "Methodologies and strategies in development",
        traits: &[
            Trait {
                title: "Clean Architecture",
                description: "Build scalable systems through solid principles and clean code practices.",
                details: "Focus on modularity, testing, and future-proof design patterns.",
                stats: [
                    Stat { value: "95%", label: "Code Quality" },
                    Stat { value: "40%", label: "Maintenance Time Reduced" },
                ],
            },
            Trait {
                title: "Best Practices",
                description: "Implement industry standards and security-first development.",
                details: "Ensuring robust, secure, and maintainable solutions.",
                stats: [
                    Stat { value: "100%", label: "Security Compliance" },
                    Stat { value: "0", label: "Major Incidents" },
                ],
            },
            Trait {
                title: "Performance Focus",
                description: "Optimize for speed, efficiency, and user experience.",
                details: "Creating lightning-fast, responsive applications.",
                stats: [
                    Stat { value: "2s", label: "Avg. Load Time" },
                    Stat { value: "60%", label: "Performance Boost" },
                ],
            },
        ],
    },
    MindsetCategory {
        id: "leadership",
        title: "Leadership Style",
        description: "Guiding principles in team and project management",
        traits: &[
            Trait {
                title: "Goal-Oriented",
                description: "Focus on clear objectives and measurable outcomes.",
                details: "Driving projects with purpose and direction.",
                stats: [
                    Stat { value: "95%", label: "Project Success Rate" },
                    Stat { value: "12", label: "Team Goals Achieved" },
                ],
            },
            Trait {
                title: "Collaborative Growth",
                description: "Foster an environment of shared learning and development.",
                details: "Building strong, skilled, and motivated teams.",
                stats: [
                    Stat { value: "4", label: "Team Members Mentored" },
                    Stat { value: "30%", label: "Team Skill Growth" },
                ],
            },
            Trait {
                title: "Innovation Driver",
                description: "Encourage creative thinking and calculated risk-taking.",
                details: "Pushing boundaries while maintaining stability.",
                stats: [
                    Stat { value: "5", label: "New Processes Implemented" },
                    Stat { value: "25%", label: "Efficiency Gained" },
                ],
            },
        ],
    },
    MindsetCategory {
        id: "innovation",
        title: "Innovation Mindset",
        description: "Pushing boundaries and exploring new possibilities",
        traits: &[
            Trait {
                title: "Creative Problem Solving",
                description: "Approaching challenges with innovative and unconventional solutions.",
                details: "Combining analytical thinking with creative approaches.",
                stats: [
                    Stat { value: "85%", label: "Problem Resolution Rate" },
                    Stat { value: "12+", label: "Innovation Awards" },
                ],
            },
            Trait {
                title: "Process Innovation",
                description: "Optimizing and reinventing workflows for maximum efficiency.",
                details: "Creating streamlined, efficient processes.",
                stats: [
                    Stat { value: "40%", label: "Efficiency Increase" },
                    Stat { value: "8", label: "Processes Reimagined" },
                ],
            },
            Trait {
                title: "Research & Development",
                description: "Continuously exploring new technologies and methodologies.",
                details: "Staying ahead of industry trends through constant learning.",
                stats: [
                    Stat { value: "20+", label: "Research Projects" },
                    Stat { value: "15", label: "New Tech Adopted" },
                ],
            },
        ],
    },
    MindsetCategory {
        id: "growth",
        title: "Growth & Learning",
        description: "Continuous development and skill expansion",
        traits: &[
            Trait {
                title: "Digital Adaptation",
                description: "Rapidly learning and implementing new digital technologies.",
                details: "Mastering emerging tools and platforms.",
                stats: [
                    Stat { value: "30+", label: "Tools Mastered" },
                    Stat { value: "95%", label: "Digital Proficiency" },
                ],
            },
            Trait {
                title: "Skill Synthesis",
                description: "Combining diverse skills to create unique solutions.",
                details: "Bridging multiple disciplines effectively.",
                stats: [
                    Stat { value: "8+", label: "Fields Integrated" },
                    Stat { value: "20+", label: "Cross-skill Projects" },
                ],
            },
            Trait {
                title: "Continuous Learning",
                description: "Dedicated to ongoing professional development.",
                details: "Regular upskilling and knowledge expansion.",
                stats: [
                    Stat { value: "500+", label: "Learning Hours" },
                    Stat { value: "12", label: "Certifications" },
                ],
            },
        ],
    },
    MindsetCategory {
        id: "agile",
        title: "Agile Mindset",
        description: "Embracing change and continuous improvement",
        traits: &[
            Trait {
                title: "Adaptive Planning",
                description: "Flexible approach to project planning and execution.",
                details: "Balancing structure with adaptability for optimal outcomes.",
                stats: [
                    Stat { value: "30%", label: "Efficiency Gain" },
                    Stat { value: "90%", label: "Sprint Success Rate" },
                ],
            },
            Trait {
                title: "Continuous Improvement",
                description: "Regular refinement of processes and methods.",
                details: "Implementing iterative improvements through feedback loops.",
                stats: [
                    Stat { value: "25+", label: "Process Improvements" },
                    Stat { value: "40%", label: "Quality Increase" },
                ],
            },
            Trait {
                title: "Collaborative Synergy",
                description: "Fostering team collaboration and shared responsibility.",
                details: "Building strong cross-functional relationships.",
                stats: [
                    Stat { value: "100%", label: "Team Engagement" },
                    Stat { value: "45%", label: "Productivity Boost" },
                ],
            },
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_category_has_three_traits() {
        assert_eq!(MINDSET_CATEGORIES.len(), 7);
        for category in MINDSET_CATEGORIES {
            assert_eq!(category.traits.len(), 3, "{}", category.id);
        }
    }

    #[test]
    fn test_default_category_exists() {
        assert_eq!(mindset_index(DEFAULT_MINDSET_CATEGORY), Some(0));
        assert_eq!(mindset_index("agile"), Some(6));
        assert_eq!(mindset_index("missing"), None);
    }
}
