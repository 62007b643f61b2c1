// src/modules/content/application/ports/outgoing/records.rs
//
// Create / patch payloads for every table the gateway fronts. Create
// payloads omit id and created_at (assigned by the backing store); patch
// payloads carry explicit PatchField merge semantics and double as the
// admin PATCH request bodies.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::modules::content::application::ports::outgoing::content_gateway::PatchField;
use crate::modules::content::domain::entities::{ProjectCategory, ProjectSize, SkillCategory};

//
// ──────────────────────────────────────────────────────────
// Profile
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfilePatch {
    #[serde(default)]
    pub name: PatchField<String>,
    #[serde(default)]
    pub role: PatchField<Vec<String>>,
    #[serde(default)]
    pub semester: PatchField<String>,
    #[serde(default)]
    pub university: PatchField<String>,
    #[serde(default)]
    pub year: PatchField<String>,
    #[serde(default)]
    pub bio: PatchField<Vec<String>>,
    #[serde(default)]
    pub email: PatchField<String>,
    #[serde(default)]
    pub location: PatchField<String>,
    /// Null clears the avatar back to the placeholder.
    #[serde(default)]
    pub avatar: PatchField<String>,
    /// Whole-map replacement, no per-platform merge.
    #[serde(default)]
    pub social: PatchField<BTreeMap<String, String>>,
}

//
// ──────────────────────────────────────────────────────────
// Projects
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProject {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub full_description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub gallery: Vec<String>,
    pub category: ProjectCategory,
    #[serde(default)]
    pub tech: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub challenges: Option<String>,
    #[serde(default)]
    pub solutions: Option<String>,
    #[serde(default)]
    pub github: String,
    #[serde(default)]
    pub demo: String,
    #[serde(default)]
    pub featured: bool,
    pub size: ProjectSize,
    #[serde(default)]
    pub order_index: i32,
}

/// Sequences (gallery/tech/features) are replaced whole, never merged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectPatch {
    #[serde(default)]
    pub title: PatchField<String>,
    #[serde(default)]
    pub description: PatchField<String>,
    #[serde(default)]
    pub full_description: PatchField<String>,
    #[serde(default)]
    pub image: PatchField<String>,
    #[serde(default)]
    pub gallery: PatchField<Vec<String>>,
    #[serde(default)]
    pub category: PatchField<ProjectCategory>,
    #[serde(default)]
    pub tech: PatchField<Vec<String>>,
    #[serde(default)]
    pub features: PatchField<Vec<String>>,
    #[serde(default)]
    pub challenges: PatchField<String>,
    #[serde(default)]
    pub solutions: PatchField<String>,
    #[serde(default)]
    pub github: PatchField<String>,
    #[serde(default)]
    pub demo: PatchField<String>,
    #[serde(default)]
    pub featured: PatchField<bool>,
    #[serde(default)]
    pub size: PatchField<ProjectSize>,
    #[serde(default)]
    pub order_index: PatchField<i32>,
}

//
// ──────────────────────────────────────────────────────────
// Experiences
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewExperience {
    pub title: String,
    pub organization: String,
    pub period: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub order_index: i32,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExperiencePatch {
    #[serde(default)]
    pub title: PatchField<String>,
    #[serde(default)]
    pub organization: PatchField<String>,
    #[serde(default)]
    pub period: PatchField<String>,
    #[serde(default)]
    pub description: PatchField<String>,
    #[serde(default)]
    pub skills: PatchField<Vec<String>>,
    #[serde(default)]
    pub order_index: PatchField<i32>,
}

//
// ──────────────────────────────────────────────────────────
// Education
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewEducation {
    pub degree: String,
    pub institution: String,
    pub period: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub achievements: Vec<String>,
    #[serde(default)]
    pub order_index: i32,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EducationPatch {
    #[serde(default)]
    pub degree: PatchField<String>,
    #[serde(default)]
    pub institution: PatchField<String>,
    #[serde(default)]
    pub period: PatchField<String>,
    #[serde(default)]
    pub description: PatchField<String>,
    #[serde(default)]
    pub achievements: PatchField<Vec<String>>,
    #[serde(default)]
    pub order_index: PatchField<i32>,
}

//
// ──────────────────────────────────────────────────────────
// Skills
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewSkill {
    pub name: String,
    pub level: i32,
    pub category: SkillCategory,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub order_index: i32,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SkillPatch {
    #[serde(default)]
    pub name: PatchField<String>,
    #[serde(default)]
    pub level: PatchField<i32>,
    #[serde(default)]
    pub category: PatchField<SkillCategory>,
    #[serde(default)]
    pub icon: PatchField<String>,
    #[serde(default)]
    pub order_index: PatchField<i32>,
}

//
// ──────────────────────────────────────────────────────────
// Certificates
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCertificate {
    pub name: String,
    pub issuer: String,
    pub date: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub credential_url: Option<String>,
    #[serde(default)]
    pub order_index: i32,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CertificatePatch {
    #[serde(default)]
    pub name: PatchField<String>,
    #[serde(default)]
    pub issuer: PatchField<String>,
    #[serde(default)]
    pub date: PatchField<String>,
    #[serde(default)]
    pub image: PatchField<String>,
    #[serde(default)]
    pub credential_url: PatchField<String>,
    #[serde(default)]
    pub order_index: PatchField<i32>,
}

//
// ──────────────────────────────────────────────────────────
// Highlights
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewHighlight {
    pub icon: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub order_index: i32,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HighlightPatch {
    #[serde(default)]
    pub icon: PatchField<String>,
    #[serde(default)]
    pub title: PatchField<String>,
    #[serde(default)]
    pub description: PatchField<String>,
    #[serde(default)]
    pub order_index: PatchField<i32>,
}

//
// ──────────────────────────────────────────────────────────
// Stats
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewStat {
    pub value: String,
    pub label: String,
    #[serde(default)]
    pub order_index: i32,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatPatch {
    #[serde(default)]
    pub value: PatchField<String>,
    #[serde(default)]
    pub label: PatchField<String>,
    #[serde(default)]
    pub order_index: PatchField<i32>,
}

//
// ──────────────────────────────────────────────────────────
// Settings (local store only)
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SettingsPatch {
    #[serde(default)]
    pub site_name: PatchField<String>,
    #[serde(default)]
    pub site_description: PatchField<String>,
}

//
// ──────────────────────────────────────────────────────────
// Merge application (used by the local persisted store)
// ──────────────────────────────────────────────────────────
//

use crate::modules::content::domain::entities::{
    Certificate, Education, Experience, Highlight, Profile, Project, SiteSettings, Skill, Stat,
};

impl ProfilePatch {
    pub fn apply(self, profile: &mut Profile) {
        self.name.apply_to(&mut profile.name);
        self.role.apply_to(&mut profile.role);
        self.semester.apply_to(&mut profile.semester);
        self.university.apply_to(&mut profile.university);
        self.year.apply_to(&mut profile.year);
        self.bio.apply_to(&mut profile.bio);
        self.email.apply_to(&mut profile.email);
        self.location.apply_to(&mut profile.location);
        self.avatar.apply_to_option(&mut profile.avatar);
        self.social.apply_to(&mut profile.social);
    }
}

impl ProjectPatch {
    pub fn apply(self, project: &mut Project) {
        self.title.apply_to(&mut project.title);
        self.description.apply_to(&mut project.description);
        self.full_description
            .apply_to_option(&mut project.full_description);
        self.image.apply_to_option(&mut project.image);
        self.gallery.apply_to(&mut project.gallery);
        self.category.apply_to(&mut project.category);
        self.tech.apply_to(&mut project.tech);
        self.features.apply_to(&mut project.features);
        self.challenges.apply_to_option(&mut project.challenges);
        self.solutions.apply_to_option(&mut project.solutions);
        self.github.apply_to(&mut project.github);
        self.demo.apply_to(&mut project.demo);
        self.featured.apply_to(&mut project.featured);
        self.size.apply_to(&mut project.size);
        self.order_index.apply_to(&mut project.order_index);
    }
}

impl ExperiencePatch {
    pub fn apply(self, experience: &mut Experience) {
        self.title.apply_to(&mut experience.title);
        self.organization.apply_to(&mut experience.organization);
        self.period.apply_to(&mut experience.period);
        self.description.apply_to(&mut experience.description);
        self.skills.apply_to(&mut experience.skills);
        self.order_index.apply_to(&mut experience.order_index);
    }
}

impl EducationPatch {
    pub fn apply(self, education: &mut Education) {
        self.degree.apply_to(&mut education.degree);
        self.institution.apply_to(&mut education.institution);
        self.period.apply_to(&mut education.period);
        self.description.apply_to(&mut education.description);
        self.achievements.apply_to(&mut education.achievements);
        self.order_index.apply_to(&mut education.order_index);
    }
}

impl SkillPatch {
    pub fn apply(self, skill: &mut Skill) {
        self.name.apply_to(&mut skill.name);
        self.level.apply_to(&mut skill.level);
        self.category.apply_to(&mut skill.category);
        self.icon.apply_to(&mut skill.icon);
        self.order_index.apply_to(&mut skill.order_index);
    }
}

impl CertificatePatch {
    pub fn apply(self, certificate: &mut Certificate) {
        self.name.apply_to(&mut certificate.name);
        self.issuer.apply_to(&mut certificate.issuer);
        self.date.apply_to(&mut certificate.date);
        self.image.apply_to_option(&mut certificate.image);
        self.credential_url
            .apply_to_option(&mut certificate.credential_url);
        self.order_index.apply_to(&mut certificate.order_index);
    }
}

impl HighlightPatch {
    pub fn apply(self, highlight: &mut Highlight) {
        self.icon.apply_to(&mut highlight.icon);
        self.title.apply_to(&mut highlight.title);
        self.description.apply_to(&mut highlight.description);
        self.order_index.apply_to(&mut highlight.order_index);
    }
}

impl StatPatch {
    pub fn apply(self, stat: &mut Stat) {
        self.value.apply_to(&mut stat.value);
        self.label.apply_to(&mut stat.label);
        self.order_index.apply_to(&mut stat.order_index);
    }
}

impl SettingsPatch {
    pub fn apply(self, settings: &mut SiteSettings) {
        self.site_name.apply_to(&mut settings.site_name);
        self.site_description
            .apply_to(&mut settings.site_description);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_patch_deserializes_partial_body() {
        let patch: ProjectPatch =
            serde_json::from_str(r#"{"title": "New", "image": null, "featured": true}"#).unwrap();

        assert_eq!(patch.title.as_value().map(String::as_str), Some("New"));
        assert!(patch.image.is_null());
        assert_eq!(patch.featured.as_value(), Some(&true));
        assert!(patch.description.is_unset());
        assert!(patch.size.is_unset());
    }

    #[test]
    fn test_new_project_defaults_optional_fields() {
        let new: NewProject = serde_json::from_str(
            r#"{"title": "T", "description": "D", "category": "Web", "size": "small"}"#,
        )
        .unwrap();

        assert!(new.gallery.is_empty());
        assert!(new.tech.is_empty());
        assert!(!new.featured);
        assert_eq!(new.order_index, 0);
        assert_eq!(new.github, "");
    }

    #[test]
    fn test_project_patch_apply_merges_and_clears() {
        use crate::modules::content::domain::entities::RecordId;
        use chrono::Utc;

        let mut project = Project {
            id: RecordId::from("p1"),
            title: "Old".to_string(),
            description: "desc".to_string(),
            full_description: Some("full".to_string()),
            image: Some("data:image/png;base64,AAAA".to_string()),
            gallery: vec![],
            category: ProjectCategory::Web,
            tech: vec!["SiReact".to_string()],
            features: vec![],
            challenges: None,
            solutions: None,
            github: "https://github.com".to_string(),
            demo: String::new(),
            featured: false,
            size: ProjectSize::Small,
            order_index: 0,
            created_at: Utc::now(),
        };

        ProjectPatch {
            title: PatchField::Value("New".to_string()),
            image: PatchField::Null,
            featured: PatchField::Value(true),
            ..Default::default()
        }
        .apply(&mut project);

        assert_eq!(project.title, "New");
        assert!(project.image.is_none());
        assert!(project.featured);
        // Untouched fields keep their prior values.
        assert_eq!(project.description, "desc");
        assert_eq!(project.full_description.as_deref(), Some("full"));
        assert_eq!(project.id, RecordId::from("p1"));
    }

    #[test]
    fn test_skill_patch_accepts_open_category() {
        let patch: SkillPatch = serde_json::from_str(r#"{"category": "devops"}"#).unwrap();
        assert_eq!(
            patch.category.as_value(),
            Some(&SkillCategory::Other("devops".to_string()))
        );
    }
}
