//! Portfolio projects and their categories.

use crate::utils::{Categories, Categorized, ALL_CATEGORIES};

/// Image shown when a project image fails to load.
pub const PROJECT_FALLBACK_IMAGE: &str = "imgs/fallback.jpg";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectCategory {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub long_description: &'static str,
    pub tech: &'static [&'static str],
    pub image: &'static str,
    pub category: Categories,
    /// Empty when the project has no public link.
    pub link: &'static str,
}

impl Project {
    pub fn link(&self) -> Option<&'static str> {
        Some(self.link).filter(|l| !l.is_empty())
    }
}

impl Categorized for Project {
    fn categories(&self) -> Categories {
        self.category
    }
}

pub const PROJECT_CATEGORIES: &[ProjectCategory] = &[
    ProjectCategory {
        id: "web",
        name: "Web Development",
        description: "Websites and web applications",
    },
    ProjectCategory {
        id: "design",
        name: "Design & Branding",
        description: "Visual identity and branding projects",
    },
    ProjectCategory {
        id: "support",
        name: "Customer Support",
        description: "Customer service and support projects",
    },
    ProjectCategory {
        id: "ui",
        name: "UI/UX Design",
        description: "User interface and experience design",
    },
    ProjectCategory {
        id: "digital",
        name: "Digital Marketing",
        description: "Marketing and social media content",
    },
];

/// Category ids in navigation order, starting with `all`.
pub fn category_tabs() -> Vec<&'static str> {
    std::iter::once(ALL_CATEGORIES)
        .chain(PROJECT_CATEGORIES.iter().map(|c| c.id))
        .collect()
}

/// Display name of a category id.
pub fn category_name(id: &str) -> &'static str {
    if id == ALL_CATEGORIES {
        return "All Projects";
    }
    PROJECT_CATEGORIES
        .iter()
        .find(|c| c.id == id)
        .map(|c| c.name)
        .unwrap_or("Other")
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Neue AI Web IDE",
        description: "A modern web-based IDE for AI development and prototyping.",
        long_description: "Built a full-featured web IDE for AI workflows, featuring code editing, live collaboration, integrated AI model runners, and visualization tools. Designed for rapid prototyping and seamless deployment.",
        tech: &["React", "TypeScript", "WebSockets", "Monaco Editor", "Node.js", "AI Integration"],
        image: "/imgs/WebIDE.jpg",
        category: Categories::Many(&["web", "ui"]),
        link: "",
    },
    Project {
        title: "Personal Portfolio Website",
        description: "Modern React-based portfolio showcasing professional work and skills",
        long_description: "Built from ground up using React, TypeScript, and Tailwind CSS. Features smooth animations, responsive design, and dynamic content management. Implements modern development practices and performance optimization.",
        tech: &["React", "TypeScript", "Tailwind CSS", "Framer Motion", "Node.js", "Responsive Design"],
        image: "/imgs/Portfolio.jpg",
        category: Categories::Many(&["web", "ui"]),
        link: "https://amarsportfolio.fly.dev/",
    },
    Project {
        title: "Customer Support Email Templates",
        description: "Streamlined customer support operations through automated email templates and shortcuts",
        long_description: "Developed and implemented comprehensive email templates and keyboard shortcuts system for the support team during high-volume periods. Reduced response time and maintained quality during company transition.",
        tech: &["Email Templates", "Keyboard Shortcuts", "Process Optimization", "Customer Communication", "Quality Assurance", "Team Training"],
        image: "/imgs/EmailTemplates.jpg",
        category: Categories::One("support"),
        link: "",
    },
    Project {
        title: "Women's Sportswear Collection",
        description: "Modern gym and activewear designs for women",
        long_description: "Designed a collection of functional and stylish sportswear focused on comfort and performance. Includes workout sets, leggings, and training tops.",
        tech: &["Fashion Design", "Textile Selection", "Pattern Making", "Adobe Illustrator", "Product Design", "Technical Drawing"],
        image: "/imgs/Sportswear.jpg",
        category: Categories::Many(&["design", "digital"]),
        link: "",
    },
    Project {
        title: "3D Model: The Bedroom",
        description: "Photorealistic 3D interior design visualization of a modern bedroom.",
        long_description: "Created a detailed 3D model of a contemporary bedroom space, focusing on lighting, textures, and atmospheric elements. Designed for interior visualization and architectural presentation.",
        tech: &["Blender", "Cycles", "Interior Design", "Lighting", "Material Design", "Architectural Visualization"],
        image: "/imgs/Bedroom.jpg",
        category: Categories::One("design"),
        link: "",
    },
    Project {
        title: "Spaceship 3D Model: Nebula",
        description: "Futuristic spaceship design with detailed interior and exterior visualization.",
        long_description: "Created a highly detailed 3D model of a next-generation spacecraft, featuring innovative design elements, realistic texturing, and atmospheric lighting. The model includes both exterior hull details and interior command deck layouts.",
        tech: &["Blender", "Cycles", "3D Modeling", "Sci-fi Design", "Hard Surface Modeling", "Lighting Composition"],
        image: "/imgs/Spaceship.jpg",
        category: Categories::One("design"),
        link: "",
    },
    Project {
        title: "Product Design: Glass Bottles",
        description: "Modern glass bottle designs for luxury beverages",
        long_description: "Created a series of elegant glass bottle designs, combining modern aesthetics with practical functionality. Focused on creating unique shapes while maintaining manufacturability and brand identity.",
        tech: &["Blender", "Product Design", "Glass Materials", "Lighting Design", "Material Design", "Brand Identity"],
        image: "/imgs/Bottles.jpg",
        category: Categories::Many(&["design", "digital"]),
        link: "",
    },
    Project {
        title: "3D Assets Collection",
        description: "Collection of various 3D assets and models for games and visualization.",
        long_description: "Developed a diverse collection of high-quality 3D assets including props, environments, and characters. All assets are optimized for real-time rendering and follow industry standards.",
        tech: &["Blender", "Maya", "ZBrush", "Substance Painter", "UV Mapping", "PBR Materials"],
        image: "/imgs/3D-Assets.jpg",
        category: Categories::One("design"),
        link: "",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::filter_by_category;

    #[test]
    fn test_every_project_category_is_known() {
        for project in PROJECTS {
            for id in project.category.iter() {
                assert!(
                    PROJECT_CATEGORIES.iter().any(|c| c.id == id),
                    "{} uses unknown category {}",
                    project.title,
                    id
                );
            }
        }
    }

    #[test]
    fn test_design_filter() {
        let design = filter_by_category(PROJECTS, "design");
        assert_eq!(design.len(), 5);
        assert_eq!(filter_by_category(PROJECTS, "support").len(), 1);
        assert_eq!(filter_by_category(PROJECTS, ALL_CATEGORIES).len(), PROJECTS.len());
    }

    #[test]
    fn test_links() {
        assert_eq!(PROJECTS[0].link(), None);
        assert_eq!(PROJECTS[1].link(), Some("https://amarsportfolio.fly.dev/"));
    }

    #[test]
    fn test_category_tabs() {
        let tabs = category_tabs();
        assert_eq!(tabs.first(), Some(&"all"));
        assert_eq!(tabs.len(), 6);
        assert_eq!(category_name("ui"), "UI/UX Design");
        assert_eq!(category_name("all"), "All Projects");
    }
}
