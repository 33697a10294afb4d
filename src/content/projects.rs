//! Project catalog

use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Web,
    Mobile,
    Game,
    Ai,
    Design,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Web,
        Category::Mobile,
        Category::Game,
        Category::Ai,
        Category::Design,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Category::Web => "web",
            Category::Mobile => "mobile",
            Category::Game => "game",
            Category::Ai => "ai",
            Category::Design => "design",
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown project category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "web" => Ok(Category::Web),
            "mobile" => Ok(Category::Mobile),
            "game" => Ok(Category::Game),
            "ai" => Ok(Category::Ai),
            "design" => Ok(Category::Design),
            other => Err(UnknownCategory(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub header_image: &'static str,
    pub images: &'static [&'static str],
    pub categories: &'static [Category],
    pub technologies: &'static [&'static str],
    pub demo_url: Option<&'static str>,
    pub code_url: Option<&'static str>,
}

impl Project {
    pub fn in_category(&self, category: Category) -> bool {
        self.categories.contains(&category)
    }
}

/// All showcased projects, newest first.
pub fn projects() -> &'static [Project] {
    PROJECTS
}

/// Projects belonging to one category, catalog order preserved.
pub fn filtered(category: Category) -> Vec<&'static Project> {
    PROJECTS.iter().filter(|p| p.in_category(category)).collect()
}

static PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "CGVortex",
        description: "A marketplace for 3D add-ons, built with the MERN stack and tailwind.",
        header_image: "/assets/images/CGVortex.png",
        images: &[
            "/assets/images/CGVortex pics/www.cgvortex.com_.png",
            "/assets/images/CGVortex pics/www.cgvortex2.com_.png",
            "/assets/images/CGVortex pics/www.cgvortex3.com_.png",
        ],
        categories: &[Category::Web],
        technologies: &["React", "MongoDB", "Express", "Node.js", "Tailwind"],
        demo_url: Some("https://www.cgvortex.com/"),
        code_url: None,
    },
    Project {
        id: 2,
        title: "Ekri-Echri",
        description: "A house rental platform for the Algerian market, built with the HTML, CSS (Bootstrap), and JS and PHP.",
        header_image: "/assets/images/Ekri&Echri.png",
        images: &[
            "/assets/images/EKRI&ECHRI pics/Home.png",
            "/assets/images/EKRI&ECHRI pics/Annonces.png",
            "/assets/images/EKRI&ECHRI pics/Annonce.png",
            "/assets/images/EKRI&ECHRI pics/deposer Annonce.png",
            "/assets/images/EKRI&ECHRI pics/Modifier Annonce.png",
            "/assets/images/EKRI&ECHRI pics/Admin.png",
            "/assets/images/EKRI&ECHRI pics/signIn.png",
            "/assets/images/EKRI&ECHRI pics/LogIn.png",
        ],
        categories: &[Category::Web],
        technologies: &["HTML", "CSS", "Bootstrap", "JavaScript", "PHP"],
        demo_url: Some("https://ekri-echri.000webhostapp.com/"),
        code_url: None,
    },
    Project {
        id: 3,
        title: "MC Got Visuals",
        description: "A showcase website for a motion graphics hackathon event, built with Nextjs, tailwind and framer-motion.",
        header_image: "/assets/images/MGV.png",
        images: &[
            "/assets/images/MGV pics/home-light.png",
            "/assets/images/MGV pics/home-dark.png",
            "/assets/images/MGV pics/Intro-light.png",
            "/assets/images/MGV pics/Intro-dark.png",
            "/assets/images/MGV pics/Agenda-light.png",
            "/assets/images/MGV pics/Agenda-dark.png",
            "/assets/images/MGV pics/Card-light.png",
            "/assets/images/MGV pics/Card-dark.png",
            "/assets/images/MGV pics/question-light.png",
            "/assets/images/MGV pics/question-dark.png",
        ],
        categories: &[Category::Web, Category::Design],
        technologies: &["Next.js", "Tailwind CSS", "Framer Motion"],
        demo_url: Some("https://mgv.microclub.info/"),
        code_url: None,
    },
    Project {
        id: 4,
        title: "AladoShop",
        description: "An e-commerce platform for a local business, with ecwid CMS platform.",
        header_image: "/assets/images/Aladoshop pics/aladoshop.png",
        images: &["/assets/images/Aladoshop pics/home.png"],
        categories: &[Category::Web],
        technologies: &["Ecwid CMS"],
        demo_url: Some("https://alado-shop.company.site/"),
        code_url: None,
    },
    Project {
        id: 5,
        title: "AI Site",
        description: "An AI article website, built only with HTML and CSS.",
        header_image: "/assets/images/AI-Site.png",
        images: &[
            "/assets/images/AI-Site.png",
            "/assets/images/AI pics/Home.png",
            "/assets/images/AI pics/ComputerVision.png",
            "/assets/images/AI pics/Machinlearning.png",
            "/assets/images/AI pics/Deeplearning.png",
            "/assets/images/AI pics/NLP.png",
        ],
        categories: &[Category::Web],
        technologies: &["HTML", "CSS"],
        demo_url: Some("https://raoufslv.github.io/AI-Article/"),
        code_url: Some("https://github.com/raoufslv/AI-Article"),
    },
    Project {
        id: 6,
        title: "Portfolio",
        description: "My old portfolio website, showcasing my work and skills at the time built with React & tailwind.",
        header_image: "/assets/images/thumpnail.png",
        images: &["/assets/images/portfolio pics/portfolio.png"],
        categories: &[Category::Web],
        technologies: &["React", "Tailwind CSS"],
        demo_url: Some("https://raouf-abdallah.netlify.app"),
        code_url: Some("https://github.com/raoufslv/portfolioV2"),
    },
    Project {
        id: 7,
        title: "SheTalks",
        description: "A Mental health platform for women, built with the MERN stack and tailwind.",
        header_image: "/assets/images/SheTalks.png",
        images: &[
            "/assets/images/SheTalks.png",
            "/assets/images/SheTalks pics/homePage.png",
            "/assets/images/SheTalks pics/LoginPage.png",
            "/assets/images/SheTalks pics/posterPage.png",
            "/assets/images/SheTalks pics/SignupPage.png",
            "/assets/images/SheTalks pics/postsPage.png",
        ],
        categories: &[Category::Web],
        technologies: &["React", "MongoDB", "Express", "Node.js", "Tailwind CSS"],
        demo_url: None,
        code_url: Some("https://github.com/raoufslv/SheTalks-IWD-23"),
    },
    Project {
        id: 8,
        title: "Image Analogy Generator",
        description: "Using a neural network to generate images based on a given analogy.",
        header_image: "/assets/images/ImageAnalogy pics/results1.png",
        images: &[
            "/assets/images/ImageAnalogy pics/results1.png",
            "/assets/images/ImageAnalogy pics/results2.png",
            "/assets/images/ImageAnalogy pics/results3.png",
        ],
        categories: &[Category::Ai],
        technologies: &["Python", "Neural Networks", "TensorFlow"],
        demo_url: None,
        code_url: Some("https://github.com/raoufslv/Image-Analogy-sequence-prediction"),
    },
    Project {
        id: 9,
        title: "River Puzzle Game",
        description: "A puzzle game that challenges the player to cross a river with a set of rules, built with OpenGL.",
        header_image: "/assets/images/RiverPuzzle pics/game_lost.png",
        images: &[
            "/assets/images/RiverPuzzle pics/game_lost.png",
            "/assets/images/RiverPuzzle pics/game_won.png",
            "/assets/images/RiverPuzzle pics/screenshot_text_rendering.png",
        ],
        categories: &[Category::Game],
        technologies: &["OpenGL", "C++"],
        demo_url: Some("https://drive.google.com/file/d/1bNo6hrjzTAfh5Y81zqyxEIHadYoYb2Bz/view"),
        code_url: Some("https://github.com/raoufslv/OpenGL-Project-3D-Game"),
    },
    Project {
        id: 10,
        title: "Sokoban Puzzle",
        description: "A puzzle game where i implemented Breadth First Search algorithm and Astar algorithm to solve the levels.",
        header_image: "/assets/images/sokoban pics/sokoban1.png",
        images: &[
            "/assets/images/sokoban pics/sokoban1.png",
            "/assets/images/sokoban pics/sokoban2.png",
            "/assets/images/sokoban pics/sokoban3.png",
            "/assets/images/sokoban pics/sokoban4.png",
        ],
        categories: &[Category::Game, Category::Ai],
        technologies: &["Python", "BFS Algorithm", "A* Algorithm"],
        demo_url: None,
        code_url: Some("https://github.com/raoufslv/SokoPuzzle"),
    },
    Project {
        id: 11,
        title: "Mancala Game",
        description: "A Manacala game built with python and pygame, with an AI player.",
        header_image: "/assets/images/mancala pics/mancala1.png",
        images: &[
            "/assets/images/mancala pics/mancala1.png",
            "/assets/images/mancala pics/mancala2.png",
        ],
        categories: &[Category::Game, Category::Ai],
        technologies: &["Python", "Pygame", "AI"],
        demo_url: None,
        code_url: Some("https://github.com/raoufslv/mancala"),
    },
    Project {
        id: 12,
        title: "DeepFake Interface",
        description: "A user interface for a deepfake software, built with python and tkinter.",
        header_image: "/assets/images/DeepFakeInterface pics/Figma Design.png",
        images: &["/assets/images/DeepFakeInterface pics/Figma Design.png"],
        categories: &[Category::Design],
        technologies: &["Python", "Tkinter"],
        demo_url: None,
        code_url: Some("https://github.com/raoufslv/DFL-GUI"),
    },
    Project {
        id: 13,
        title: "Bastion App",
        description: "A mobile app that helps users get a better knowledge of the monuments of the city of Algiers, built with Flutter.",
        header_image: "/assets/images/BastionApp pics/Capture.jpg",
        images: &[
            "/assets/images/BastionApp pics/Capture.jpg",
            "/assets/images/BastionApp pics/Capture2.jpg",
        ],
        categories: &[Category::Mobile],
        technologies: &["Flutter", "Dart"],
        demo_url: None,
        code_url: Some("https://github.com/raoufslv/bastionApp"),
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_unique_ids() {
        let mut ids: Vec<u32> = projects().iter().map(|p| p.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), projects().len());
    }

    #[test]
    fn every_project_has_at_least_one_category_and_image() {
        for project in projects() {
            assert!(!project.categories.is_empty(), "{}", project.title);
            assert!(!project.images.is_empty(), "{}", project.title);
        }
    }

    #[test]
    fn category_filter_matches_membership() {
        let games: Vec<&Project> = projects()
            .iter()
            .filter(|p| p.in_category(Category::Game))
            .collect();
        assert!(games.iter().any(|p| p.title == "Sokoban Puzzle"));
        assert!(games.iter().all(|p| p.categories.contains(&Category::Game)));
    }

    #[test]
    fn category_keys_round_trip() {
        for category in Category::ALL {
            assert_eq!(category.key().parse::<Category>().unwrap(), category);
        }
        assert!("desktop".parse::<Category>().is_err());
    }
}
