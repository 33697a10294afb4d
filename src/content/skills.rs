//! Skill categories shown in the skills section

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct SkillCategory {
    pub title: &'static str,
    /// Key into the translation tables for the localized section heading.
    pub translation_key: &'static str,
    pub skills: &'static [&'static str],
}

pub fn skill_categories() -> &'static [SkillCategory] {
    SKILL_CATEGORIES
}

static SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        title: "Frontend",
        translation_key: "skills.frontend",
        skills: &[
            "HTML5",
            "CSS3",
            "TypeScript",
            "React",
            "Next.js",
            "Tailwind CSS",
        ],
    },
    SkillCategory {
        title: "Backend",
        translation_key: "skills.backend",
        skills: &["Node.js", "Express.js", "PHP", "Fast API"],
    },
    SkillCategory {
        title: "Database",
        translation_key: "skills.database",
        skills: &["MySQL", "MongoDB", "PostgreSQL", "Redis"],
    },
    SkillCategory {
        title: "Mobile",
        translation_key: "skills.mobile",
        skills: &["React Native", "Flutter", "Dart", "Android Studio"],
    },
    SkillCategory {
        title: "AI/ML Frameworks",
        translation_key: "skills.ai",
        skills: &["Python", "PyTorch", "TensorFlow", "OpenCV", "Scikit-learn"],
    },
    SkillCategory {
        title: "Other Tools",
        translation_key: "skills.tools",
        skills: &[
            "Figma",
            "Postman",
            "Docker",
            "Git",
            "GitHub Actions",
            "Linux",
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{text, Locale};

    #[test]
    fn every_category_heading_is_translated() {
        for category in skill_categories() {
            for locale in Locale::ALL {
                assert!(
                    text(locale, category.translation_key).is_some(),
                    "missing {} for {locale}",
                    category.translation_key
                );
            }
        }
    }

    #[test]
    fn no_empty_categories() {
        assert_eq!(skill_categories().len(), 6);
        assert!(skill_categories().iter().all(|c| !c.skills.is_empty()));
    }
}
