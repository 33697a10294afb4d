//! French string table and resume timeline.

use super::{TimelineEntry, TimelineKind};

pub(super) static STRINGS: &[(&str, &str)] = &[
    // Navbar
    ("nav.home", "Accueil"),
    ("nav.about", "À propos"),
    ("nav.skills", "Compétences"),
    ("nav.projects", "Projets"),
    ("nav.resume", "CV"),
    ("nav.contact", "Contact"),
    // Hero section
    ("hero.greeting", "Bonjour, je suis"),
    ("hero.name", "Raouf Abdallah"),
    ("hero.title", "Développeur Full Stack"),
    (
        "hero.description",
        "Je crée des applications web réactives et conviviales en mettant l'accent sur les performances et l'évolutivité.",
    ),
    ("hero.cta", "Voir Mes Projets"),
    ("hero.contact", "Me Contacter"),
    // About section / chat widget
    ("about.title", "À Propos"),
    ("about.subtitle", "Mon Parcours"),
    ("about.description1", "Demandez à mon assistant IA"),
    (
        "about.description2",
        "Salut ! Je suis l'assistant IA d'Abderraouf 👨‍💻 — ici pour vous aider à en savoir plus sur son travail, ses compétences et ses projets. Demandez-moi n'importe quoi !",
    ),
    ("about.sendButton", "Envoyer"),
    (
        "about.chatPlaceholder",
        "Demandez les compétences, les projets ou l'expérience d'Abderraouf...",
    ),
    // Skills section
    ("skills.title", "Compétences"),
    ("skills.subtitle", "Ma Boîte à Outils Technique"),
    ("skills.frontend", "Frontend"),
    ("skills.backend", "Backend"),
    ("skills.mobile", "Mobile"),
    ("skills.database", "Base de données"),
    ("skills.ai", "Frameworks IA/ML"),
    ("skills.tools", "Outils & Autres"),
    // Projects section
    ("projects.title", "Projets"),
    ("projects.subtitle", "Mes Travaux Récents"),
    ("projects.filter.all", "Tous"),
    ("projects.filter.web", "Web"),
    ("projects.filter.mobile", "Mobile"),
    ("projects.filter.game", "Jeux"),
    ("projects.filter.ai", "IA"),
    ("projects.filter.design", "Design"),
    ("projects.viewDemo", "Voir Démo"),
    ("projects.viewCode", "Voir Code"),
    ("projects.details", "Détails"),
    // Resume section
    ("resume.title", "CV"),
    ("resume.subtitle", "Mon Parcours"),
    ("resume.education", "Formation"),
    ("resume.experience", "Expérience"),
    // Contact section
    ("contact.title", "Contact"),
    ("contact.subtitle", "Entrer en Contact"),
    ("contact.name", "Nom"),
    ("contact.email", "Email"),
    ("contact.message", "Message"),
    ("contact.send", "Envoyer Message"),
    ("contact.namePlaceholder", "Votre Nom"),
    ("contact.emailPlaceholder", "Votre Email"),
    ("contact.messagePlaceholder", "Votre Message"),
    ("contact.success", "Message envoyé avec succès!"),
    ("contact.error", "Erreur lors de l'envoi du message. Veuillez réessayer."),
    // Footer
    ("footer.rights", "Tous Droits Réservés"),
    ("footer.madeWith", "Réalisé avec ❤️ par Raouf Abdallah"),
];

pub(super) static TIMELINE: &[TimelineEntry] = &[
    TimelineEntry {
        id: 1,
        title: "Développeur Full-Stack",
        organization: "Ronin Tek",
        period: "Mar 2024 – Août 2024",
        description: "Développement d'applications web full-stack avec React, Node.js et MongoDB. Gestion d'hébergement VPS via SSH avec Docker et pipelines CI/CD (GitHub Actions). Implémentation d'authentification utilisateur et tableaux de bord admin.",
        kind: TimelineKind::Experience,
    },
    TimelineEntry {
        id: 2,
        title: "Stagiaire IA & Logiciel",
        organization: "Sonatrach",
        period: "Jan 2024 – Juin 2024",
        description: "Optimisation du modèle YOLOv5 pour la détection d'incendies (vision par ordinateur). Création d'un système de surveillance vidéo intelligent en Python et développement d'une application mobile pour la gestion d'e-tickets.",
        kind: TimelineKind::Experience,
    },
    TimelineEntry {
        id: 6,
        title: "Master en Informatique – Ingénierie Web (IWOCS)",
        organization: "Université Le Havre Normandie",
        period: "2024 – 2026 (en cours)",
        description: "Spécialisation en Web, IoT, systèmes mobiles, sécurité web, Big Data, programmation fonctionnelle et informatique ubiquitaire.",
        kind: TimelineKind::Education,
    },
    TimelineEntry {
        id: 7,
        title: "Master en Visual Computing",
        organization: "USTHB – Algérie",
        period: "2022 – 2024",
        description: "Accent sur le traitement d'images, l'apprentissage automatique, la conception de jeux vidéo, la visualisation de grandes données, la communication multimédia et la compression d'images.",
        kind: TimelineKind::Education,
    },
    TimelineEntry {
        id: 8,
        title: "Licence en Informatique",
        organization: "USTHB – Algérie",
        period: "2019 – 2022",
        description: "Étude des algorithmes, logique, Python, C, Java, PHP, bases de données (SQL), compilation, architecture logicielle et POO.",
        kind: TimelineKind::Education,
    },
];
