//! English string table and resume timeline.

use super::{TimelineEntry, TimelineKind};

pub(super) static STRINGS: &[(&str, &str)] = &[
    // Navbar
    ("nav.home", "Home"),
    ("nav.about", "About"),
    ("nav.skills", "Skills"),
    ("nav.projects", "Projects"),
    ("nav.resume", "Resume"),
    ("nav.contact", "Contact"),
    // Hero section
    ("hero.greeting", "Hello, I'm"),
    ("hero.name", "Raouf Abdallah"),
    ("hero.title", "Full Stack Developer"),
    (
        "hero.description",
        "Creating responsive and user-friendly web applications with a focus on performance and scalability.",
    ),
    ("hero.cta", "View My Work"),
    ("hero.contact", "Contact Me"),
    // About section / chat widget
    ("about.title", "About Me"),
    ("about.subtitle", "My Background"),
    ("about.description1", "Ask My AI Assistant"),
    (
        "about.description2",
        "Hey there! I’m Abderraouf’s AI assistant 👨‍💻 — here to help you learn more about his work, skills, and projects. Ask me anything!",
    ),
    ("about.sendButton", "Send"),
    (
        "about.chatPlaceholder",
        "Ask about Abderraouf’s skills, projects, or experience...",
    ),
    // Skills section
    ("skills.title", "Skills"),
    ("skills.subtitle", "My Technical Toolkit"),
    ("skills.frontend", "Frontend"),
    ("skills.backend", "Backend"),
    ("skills.mobile", "Mobile"),
    ("skills.database", "Database"),
    ("skills.ai", "AI/ML Frameworks"),
    ("skills.tools", "Tools & Others"),
    // Projects section
    ("projects.title", "Projects"),
    ("projects.subtitle", "My Recent Work"),
    ("projects.filter.all", "All"),
    ("projects.filter.web", "Web"),
    ("projects.filter.mobile", "Mobile"),
    ("projects.filter.game", "Games"),
    ("projects.filter.ai", "AI"),
    ("projects.filter.design", "Design"),
    ("projects.viewDemo", "View Demo"),
    ("projects.viewCode", "View Code"),
    ("projects.details", "Details"),
    // Resume section
    ("resume.title", "Resume"),
    ("resume.subtitle", "My Journey"),
    ("resume.education", "Education"),
    ("resume.experience", "Experience"),
    // Contact section
    ("contact.title", "Contact"),
    ("contact.subtitle", "Get In Touch"),
    ("contact.name", "Name"),
    ("contact.email", "Email"),
    ("contact.message", "Message"),
    ("contact.send", "Send Message"),
    ("contact.namePlaceholder", "Your Name"),
    ("contact.emailPlaceholder", "Your Email"),
    ("contact.messagePlaceholder", "Your Message"),
    ("contact.success", "Message sent successfully!"),
    ("contact.error", "Error sending message. Please try again."),
    // Footer
    ("footer.rights", "All Rights Reserved"),
    ("footer.madeWith", "Made with ❤️ by Raouf Abdallah"),
];

pub(super) static TIMELINE: &[TimelineEntry] = &[
    TimelineEntry {
        id: 1,
        title: "Full-Stack Developer",
        organization: "Ronin Tek",
        period: "Mar 2024 – Aug 2024",
        description: "Built full-stack web apps using React, Node.js, and MongoDB. Managed VPS hosting via SSH with Docker and CI/CD pipelines (GitHub Actions). Implemented user authentication and admin dashboards.",
        kind: TimelineKind::Experience,
    },
    TimelineEntry {
        id: 2,
        title: "AI & Software Intern",
        organization: "Sonatrach",
        period: "Jan 2024 – Jun 2024",
        description: "Optimized YOLOv5 model for fire detection (computer vision). Built a smart video monitoring system in Python and developed a mobile app for e-ticket management.",
        kind: TimelineKind::Experience,
    },
    TimelineEntry {
        id: 6,
        title: "Master's in Computer Science – Web Engineering (IWOCS)",
        organization: "Université Le Havre Normandie",
        period: "2024 – 2026 (ongoing)",
        description: "Specializing in Web, IoT, mobile systems, web security, Big Data, functional programming, and ubiquitous computing.",
        kind: TimelineKind::Education,
    },
    TimelineEntry {
        id: 7,
        title: "Master's in Visual Computing",
        organization: "USTHB – Algérie",
        period: "2022 – 2024",
        description: "Focus on image processing, machine learning, video game design, large data visualization, multimedia communication, and image compression.",
        kind: TimelineKind::Education,
    },
    TimelineEntry {
        id: 8,
        title: "Bachelor's in Computer Science",
        organization: "USTHB – Algérie",
        period: "2019 – 2022",
        description: "Studied algorithms, logic, Python, C, Java, PHP, databases (SQL), compilation, software architecture, and OOP.",
        kind: TimelineKind::Education,
    },
];
