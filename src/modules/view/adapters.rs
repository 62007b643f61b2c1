// src/modules/view/adapters.rs
//
// Pure mappings from stored records to renderable shapes. Two rules hold
// for every adapter here: an empty collection yields the fixed exemplar
// dataset instead of an empty list, and identifier resolution never drops
// or fails a record.

use serde::Serialize;

use crate::modules::content::domain::entities::{
    Certificate, Education, Experience, Highlight, Profile, Project, ProjectCategory, ProjectSize,
    RecordId, Skill, SkillCategory, Stat,
};
use crate::modules::store::state::StoreState;
use crate::modules::view::icon::Icon;

//
// ──────────────────────────────────────────────────────────
// View shapes
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Serialize)]
pub struct SkillView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub name: String,
    pub icon: Icon,
    pub level: i32,
    pub category: SkillCategory,
}

/// Column/row span hint for the project grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GridSpan {
    pub cols: u8,
    pub rows: u8,
}

pub fn grid_span(size: ProjectSize) -> GridSpan {
    match size {
        ProjectSize::Small => GridSpan { cols: 1, rows: 1 },
        ProjectSize::Medium => GridSpan { cols: 2, rows: 1 },
        ProjectSize::Large => GridSpan { cols: 2, rows: 2 },
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectCardView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub tech: Vec<Icon>,
    pub github: String,
    pub demo: String,
    pub category: ProjectCategory,
    /// Preserved verbatim; `grid` is derived from it.
    pub size: ProjectSize,
    pub grid: GridSpan,
    pub featured: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectDetailView {
    pub id: RecordId,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub gallery: Vec<String>,
    pub tech: Vec<Icon>,
    pub tech_names: Vec<String>,
    pub features: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub challenges: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solutions: Option<String>,
    pub github: String,
    pub demo: String,
    pub category: ProjectCategory,
    pub size: ProjectSize,
    pub featured: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct HighlightView {
    pub icon: Icon,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatView {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExperienceView {
    pub title: String,
    pub organization: String,
    pub period: String,
    pub description: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EducationView {
    pub degree: String,
    pub institution: String,
    pub period: String,
    pub description: String,
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CertificateView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub name: String,
    pub issuer: String,
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credential_url: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CertificateYearGroup {
    pub year: String,
    pub certificates: Vec<CertificateView>,
}

//
// ──────────────────────────────────────────────────────────
// Adapters
// ──────────────────────────────────────────────────────────
//

pub fn skills_view(skills: &[Skill]) -> Vec<SkillView> {
    if skills.is_empty() {
        return default_dataset()
            .skills
            .iter()
            .map(|s| skill_to_view(s, false))
            .collect();
    }

    skills.iter().map(|s| skill_to_view(s, true)).collect()
}

fn skill_to_view(skill: &Skill, with_id: bool) -> SkillView {
    SkillView {
        id: with_id.then(|| skill.id.clone()),
        name: skill.name.clone(),
        icon: Icon::from_name(&skill.icon),
        level: skill.level,
        category: skill.category.clone(),
    }
}

pub fn projects_view(projects: &[Project]) -> Vec<ProjectCardView> {
    if projects.is_empty() {
        return default_dataset()
            .projects
            .iter()
            .map(|p| project_to_card(p, false))
            .collect();
    }

    projects.iter().map(|p| project_to_card(p, true)).collect()
}

fn project_to_card(project: &Project, with_id: bool) -> ProjectCardView {
    ProjectCardView {
        id: with_id.then(|| project.id.clone()),
        title: project.title.clone(),
        description: project.description.clone(),
        image: project.image.clone(),
        tech: project.tech.iter().map(|t| Icon::from_name(t)).collect(),
        github: project.github.clone(),
        demo: project.demo.clone(),
        category: project.category,
        size: project.size,
        grid: grid_span(project.size),
        featured: project.featured,
    }
}

pub fn project_detail_view(project: &Project) -> ProjectDetailView {
    ProjectDetailView {
        id: project.id.clone(),
        title: project.title.clone(),
        description: project.description.clone(),
        full_description: project.full_description.clone(),
        image: project.image.clone(),
        gallery: project.gallery.clone(),
        tech: project.tech.iter().map(|t| Icon::from_name(t)).collect(),
        tech_names: project.tech.clone(),
        features: project.features.clone(),
        challenges: project.challenges.clone(),
        solutions: project.solutions.clone(),
        github: project.github.clone(),
        demo: project.demo.clone(),
        category: project.category,
        size: project.size,
        featured: project.featured,
    }
}

pub fn highlights_view(highlights: &[Highlight]) -> Vec<HighlightView> {
    let source;
    let highlights = if highlights.is_empty() {
        source = default_dataset().highlights;
        source.as_slice()
    } else {
        highlights
    };

    highlights
        .iter()
        .map(|h| HighlightView {
            icon: Icon::from_name(&h.icon),
            title: h.title.clone(),
            description: h.description.clone(),
        })
        .collect()
}

pub fn stats_view(stats: &[Stat]) -> Vec<StatView> {
    let source;
    let stats = if stats.is_empty() {
        source = default_dataset().stats;
        source.as_slice()
    } else {
        stats
    };

    stats
        .iter()
        .map(|s| StatView {
            value: s.value.clone(),
            label: s.label.clone(),
        })
        .collect()
}

pub fn experiences_view(experiences: &[Experience]) -> Vec<ExperienceView> {
    let source;
    let experiences = if experiences.is_empty() {
        source = default_dataset().experiences;
        source.as_slice()
    } else {
        experiences
    };

    experiences
        .iter()
        .map(|e| ExperienceView {
            title: e.title.clone(),
            organization: e.organization.clone(),
            period: e.period.clone(),
            description: e.description.clone(),
            skills: e.skills.clone(),
        })
        .collect()
}

pub fn education_view(education: &[Education]) -> Vec<EducationView> {
    let source;
    let education = if education.is_empty() {
        source = default_dataset().education;
        source.as_slice()
    } else {
        education
    };

    education
        .iter()
        .map(|e| EducationView {
            degree: e.degree.clone(),
            institution: e.institution.clone(),
            period: e.period.clone(),
            description: e.description.clone(),
            achievements: e.achievements.clone(),
        })
        .collect()
}

pub fn certificates_view(certificates: &[Certificate]) -> Vec<CertificateView> {
    if certificates.is_empty() {
        return default_dataset()
            .certificates
            .iter()
            .map(|c| certificate_to_view(c, false))
            .collect();
    }

    certificates
        .iter()
        .map(|c| certificate_to_view(c, true))
        .collect()
}

fn certificate_to_view(certificate: &Certificate, with_id: bool) -> CertificateView {
    CertificateView {
        id: with_id.then(|| certificate.id.clone()),
        name: certificate.name.clone(),
        issuer: certificate.issuer.clone(),
        date: certificate.date.clone(),
        image: certificate.image.clone(),
        credential_url: certificate.credential_url.clone(),
    }
}

/// Group certificates by their free-text date, years sorted descending,
/// insertion order preserved within each group.
pub fn group_certificates_by_year(certificates: &[CertificateView]) -> Vec<CertificateYearGroup> {
    let mut groups: Vec<CertificateYearGroup> = Vec::new();

    for certificate in certificates {
        match groups.iter_mut().find(|g| g.year == certificate.date) {
            Some(group) => group.certificates.push(certificate.clone()),
            None => groups.push(CertificateYearGroup {
                year: certificate.date.clone(),
                certificates: vec![certificate.clone()],
            }),
        }
    }

    groups.sort_by(|a, b| b.year.cmp(&a.year));
    groups
}

/// Fallback profile shown before the first successful fetch.
pub fn profile_or_default(profile: Option<Profile>) -> Profile {
    profile.unwrap_or_else(|| default_dataset().profile)
}

// The exemplar records double as the seed data of the local store, so the
// fallback datasets come from the same source of truth.
fn default_dataset() -> StoreState {
    StoreState::with_defaults()
}
