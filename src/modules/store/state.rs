// src/modules/store/state.rs
//
// State tree of the local persisted store, plus the fixed default datasets
// it is seeded with on first start. The defaults double as exemplar
// content so the public site never renders empty.

use std::collections::BTreeMap;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::modules::content::domain::entities::{
    Certificate, Education, Experience, Highlight, Profile, Project, ProjectCategory, ProjectSize,
    RecordId, SiteSettings, Skill, SkillCategory, Stat,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreState {
    pub profile: Profile,
    pub projects: Vec<Project>,
    pub experiences: Vec<Experience>,
    pub education: Vec<Education>,
    pub skills: Vec<Skill>,
    pub highlights: Vec<Highlight>,
    pub stats: Vec<Stat>,
    pub certificates: Vec<Certificate>,
    pub settings: SiteSettings,
}

impl StoreState {
    pub fn with_defaults() -> Self {
        Self {
            profile: default_profile(),
            projects: default_projects(),
            experiences: default_experiences(),
            education: default_education(),
            skills: default_skills(),
            highlights: default_highlights(),
            stats: default_stats(),
            certificates: default_certificates(),
            settings: default_settings(),
        }
    }
}

fn default_profile() -> Profile {
    let mut social = BTreeMap::new();
    social.insert("github".to_string(), "https://github.com".to_string());
    social.insert("linkedin".to_string(), "https://linkedin.com".to_string());
    social.insert("instagram".to_string(), "https://instagram.com".to_string());
    social.insert("twitter".to_string(), "https://twitter.com".to_string());

    Profile {
        id: RecordId::from("default"),
        name: "Your Name".to_string(),
        role: vec![
            "Web Developer".to_string(),
            "IoT Enthusiast".to_string(),
            "Creative Coder".to_string(),
        ],
        semester: "5".to_string(),
        university: "Universitas Indonesia".to_string(),
        year: "2024".to_string(),
        bio: vec![
            "Computer science student with a deep interest in web development and the Internet of Things.".to_string(),
            "Focused on building digital products that are not just functional but genuinely pleasant to use.".to_string(),
        ],
        email: "email@example.com".to_string(),
        location: "Jakarta, Indonesia".to_string(),
        avatar: None,
        social,
    }
}

fn default_settings() -> SiteSettings {
    SiteSettings {
        site_name: "Portfolio".to_string(),
        site_description: "Personal Portfolio Website".to_string(),
    }
}

fn default_projects() -> Vec<Project> {
    let now = Utc::now();
    vec![
        Project {
            id: RecordId::from("p1"),
            title: "Smart Home IoT System".to_string(),
            description: "Home automation built on ESP32 and a set of IoT sensors. Controls lighting, temperature and security from a mobile app.".to_string(),
            full_description: None,
            image: None,
            gallery: vec![],
            category: ProjectCategory::Iot,
            tech: vec![
                "SiArduino".to_string(),
                "SiCplusplus".to_string(),
                "SiFirebase".to_string(),
                "SiReact".to_string(),
            ],
            features: vec![],
            challenges: None,
            solutions: None,
            github: "https://github.com".to_string(),
            demo: String::new(),
            featured: true,
            size: ProjectSize::Large,
            order_index: 0,
            created_at: now,
        },
        Project {
            id: RecordId::from("p2"),
            title: "E-Commerce Platform".to_string(),
            description: "Full-stack e-commerce with cart, checkout and product management.".to_string(),
            full_description: None,
            image: None,
            gallery: vec![],
            category: ProjectCategory::Web,
            tech: vec![
                "SiNextdotjs".to_string(),
                "SiTypescript".to_string(),
                "SiTailwindcss".to_string(),
                "SiMongodb".to_string(),
            ],
            features: vec![],
            challenges: None,
            solutions: None,
            github: "https://github.com".to_string(),
            demo: "https://demo.com".to_string(),
            featured: true,
            size: ProjectSize::Medium,
            order_index: 1,
            created_at: now,
        },
        Project {
            id: RecordId::from("p3"),
            title: "Weather Monitoring Station".to_string(),
            description: "Real-time weather station around a BME280 sensor with a web dashboard.".to_string(),
            full_description: None,
            image: None,
            gallery: vec![],
            category: ProjectCategory::Iot,
            tech: vec![
                "SiArduino".to_string(),
                "SiPython".to_string(),
                "SiMongodb".to_string(),
            ],
            features: vec![],
            challenges: None,
            solutions: None,
            github: "https://github.com".to_string(),
            demo: String::new(),
            featured: false,
            size: ProjectSize::Small,
            order_index: 2,
            created_at: now,
        },
    ]
}

fn default_experiences() -> Vec<Experience> {
    let now = Utc::now();
    vec![
        Experience {
            id: RecordId::from("e1"),
            title: "Frontend Developer Intern".to_string(),
            organization: "Tech Startup XYZ".to_string(),
            period: "Jun 2024 - Aug 2024".to_string(),
            description: "Shipped new product features for a web application with React and TypeScript.".to_string(),
            skills: vec![
                "React".to_string(),
                "TypeScript".to_string(),
                "Tailwind CSS".to_string(),
            ],
            order_index: 0,
            created_at: now,
        },
        Experience {
            id: RecordId::from("e2"),
            title: "IoT Research Assistant".to_string(),
            organization: "Computer Laboratory".to_string(),
            period: "Feb 2024 - Present".to_string(),
            description: "Research and prototyping of IoT projects for a smart campus.".to_string(),
            skills: vec![
                "Arduino".to_string(),
                "ESP32".to_string(),
                "MQTT".to_string(),
                "Python".to_string(),
            ],
            order_index: 1,
            created_at: now,
        },
    ]
}

fn default_education() -> Vec<Education> {
    let now = Utc::now();
    vec![
        Education {
            id: RecordId::from("edu1"),
            degree: "BSc Computer Science".to_string(),
            institution: "Universitas Indonesia".to_string(),
            period: "2022 - Present".to_string(),
            description: "Concentration in web development and the Internet of Things.".to_string(),
            achievements: vec![
                "GPA 3.75".to_string(),
                "Teaching Assistant".to_string(),
                "Hackathon Runner-up".to_string(),
            ],
            order_index: 0,
            created_at: now,
        },
        Education {
            id: RecordId::from("edu2"),
            degree: "High School, Science Track".to_string(),
            institution: "SMA Negeri 1".to_string(),
            period: "2019 - 2022".to_string(),
            description: "Mathematics and introductory computer science.".to_string(),
            achievements: vec![
                "Top Graduating Score".to_string(),
                "Student Council President".to_string(),
            ],
            order_index: 1,
            created_at: now,
        },
    ]
}

fn default_skills() -> Vec<Skill> {
    let seed: [(&str, &str, i32, SkillCategory); 12] = [
        ("React", "SiReact", 90, SkillCategory::Frontend),
        ("Next.js", "SiNextdotjs", 85, SkillCategory::Frontend),
        ("TypeScript", "SiTypescript", 85, SkillCategory::Frontend),
        ("Tailwind CSS", "SiTailwindcss", 90, SkillCategory::Frontend),
        ("Node.js", "SiNodedotjs", 75, SkillCategory::Backend),
        ("MongoDB", "SiMongodb", 70, SkillCategory::Backend),
        ("Arduino", "SiArduino", 85, SkillCategory::Iot),
        ("Python", "SiPython", 80, SkillCategory::Backend),
        ("Firebase", "SiFirebase", 75, SkillCategory::Backend),
        ("Git", "SiGit", 85, SkillCategory::Tools),
        ("Figma", "SiFigma", 70, SkillCategory::Tools),
        ("C++", "SiCplusplus", 75, SkillCategory::Backend),
    ];

    seed.into_iter()
        .enumerate()
        .map(|(i, (name, icon, level, category))| Skill {
            id: RecordId::from(format!("s{}", i + 1)),
            name: name.to_string(),
            level,
            category,
            icon: icon.to_string(),
            order_index: i as i32,
        })
        .collect()
}

fn default_highlights() -> Vec<Highlight> {
    let seed = [
        ("h1", "FaCode", "Clean Code", "Readable, maintainable code"),
        ("h2", "FaLightbulb", "Problem Solver", "At home with complex problems"),
        ("h3", "FaRocket", "Fast Learner", "Quick to pick up new technology"),
        ("h4", "FaUsers", "Team Player", "Collaborative and communicative"),
    ];

    seed.into_iter()
        .enumerate()
        .map(|(i, (id, icon, title, description))| Highlight {
            id: RecordId::from(id),
            icon: icon.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            order_index: i as i32,
        })
        .collect()
}

fn default_stats() -> Vec<Stat> {
    let seed = [
        ("st1", "10+", "Projects"),
        ("st2", "5", "Semester"),
        ("st3", "3.75", "GPA"),
        ("st4", "500+", "Commits"),
    ];

    seed.into_iter()
        .enumerate()
        .map(|(i, (id, value, label))| Stat {
            id: RecordId::from(id),
            value: value.to_string(),
            label: label.to_string(),
            order_index: i as i32,
        })
        .collect()
}

fn default_certificates() -> Vec<Certificate> {
    let now = Utc::now();
    vec![
        Certificate {
            id: RecordId::from("cert1"),
            name: "AWS Cloud Practitioner".to_string(),
            issuer: "Amazon Web Services".to_string(),
            date: "2024".to_string(),
            image: None,
            credential_url: Some("https://aws.amazon.com/verification".to_string()),
            order_index: 0,
            created_at: now,
        },
        Certificate {
            id: RecordId::from("cert2"),
            name: "React Developer Certificate".to_string(),
            issuer: "Meta".to_string(),
            date: "2024".to_string(),
            image: None,
            credential_url: Some("https://coursera.org/verify".to_string()),
            order_index: 1,
            created_at: now,
        },
        Certificate {
            id: RecordId::from("cert3"),
            name: "IoT Fundamentals".to_string(),
            issuer: "Cisco Networking Academy".to_string(),
            date: "2023".to_string(),
            image: None,
            credential_url: None,
            order_index: 2,
            created_at: now,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_cover_every_collection() {
        let state = StoreState::with_defaults();

        assert_eq!(state.projects.len(), 3);
        assert_eq!(state.experiences.len(), 2);
        assert_eq!(state.education.len(), 2);
        assert_eq!(state.skills.len(), 12);
        assert_eq!(state.highlights.len(), 4);
        assert_eq!(state.stats.len(), 4);
        assert_eq!(state.certificates.len(), 3);
        assert_eq!(state.settings.site_name, "Portfolio");
    }

    #[test]
    fn test_default_profile_is_complete() {
        let profile = StoreState::with_defaults().profile;

        assert!(!profile.role.is_empty());
        assert_eq!(profile.bio.len(), 2);
        assert!(profile.social.contains_key("github"));
        assert!(profile.avatar.is_none());
    }

    #[test]
    fn test_state_round_trips_through_json() {
        let state = StoreState::with_defaults();
        let json = serde_json::to_string(&state).unwrap();
        let back: StoreState = serde_json::from_str(&json).unwrap();

        assert_eq!(back.skills.len(), 12);
        assert_eq!(back.projects[0].category, ProjectCategory::Iot);
        assert_eq!(back.projects[0].size, ProjectSize::Large);
    }
}
