// src/modules/content/domain/entities.rs

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

//
// ──────────────────────────────────────────────────────────
// Identifiers
// ──────────────────────────────────────────────────────────
//

/// Opaque record identifier shared by both access paths.
///
/// The Postgres path stores UUIDs and renders them as strings; the local
/// persisted store generates short pseudo-random ids. Immutable after
/// creation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for RecordId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<uuid::Uuid> for RecordId {
    fn from(value: uuid::Uuid) -> Self {
        Self(value.to_string())
    }
}

//
// ──────────────────────────────────────────────────────────
// Enumerations
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectCategory {
    Web,
    #[serde(rename = "IoT")]
    Iot,
    Other,
}

impl ProjectCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectCategory::Web => "Web",
            ProjectCategory::Iot => "IoT",
            ProjectCategory::Other => "Other",
        }
    }

    /// Lenient parse used when loading rows written by other clients.
    /// Unknown labels land in `Other` rather than failing the read.
    pub fn from_label(label: &str) -> Self {
        match label {
            "Web" => ProjectCategory::Web,
            "IoT" => ProjectCategory::Iot,
            _ => ProjectCategory::Other,
        }
    }
}

/// Display-hint for the project grid. `Large` spans 2x2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectSize {
    Small,
    Medium,
    Large,
}

impl ProjectSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectSize::Small => "small",
            ProjectSize::Medium => "medium",
            ProjectSize::Large => "large",
        }
    }

    pub fn from_label(label: &str) -> Self {
        match label {
            "large" => ProjectSize::Large,
            "medium" => ProjectSize::Medium,
            _ => ProjectSize::Small,
        }
    }
}

/// Skill grouping. The fixed arms mirror the admin UI tabs; `Other` keeps
/// the set open for rows written with a category this build does not know.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SkillCategory {
    Frontend,
    Backend,
    Iot,
    Tools,
    Other(String),
}

impl SkillCategory {
    pub fn as_str(&self) -> &str {
        match self {
            SkillCategory::Frontend => "frontend",
            SkillCategory::Backend => "backend",
            SkillCategory::Iot => "iot",
            SkillCategory::Tools => "tools",
            SkillCategory::Other(label) => label,
        }
    }
}

impl From<String> for SkillCategory {
    fn from(value: String) -> Self {
        match value.as_str() {
            "frontend" => SkillCategory::Frontend,
            "backend" => SkillCategory::Backend,
            "iot" => SkillCategory::Iot,
            "tools" => SkillCategory::Tools,
            _ => SkillCategory::Other(value),
        }
    }
}

impl From<SkillCategory> for String {
    fn from(value: SkillCategory) -> Self {
        value.as_str().to_string()
    }
}

//
// ──────────────────────────────────────────────────────────
// Records
// ──────────────────────────────────────────────────────────
//

/// Site owner profile. Singleton: exactly one record exists and updates
/// merge fields in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: RecordId,
    pub name: String,
    /// Rotating role labels, in display order.
    pub role: Vec<String>,
    pub semester: String,
    pub university: String,
    pub year: String,
    /// Bio paragraphs, in display order.
    pub bio: Vec<String>,
    pub email: String,
    pub location: String,
    /// URL or inline data URL; empty/None renders the placeholder avatar.
    pub avatar: Option<String>,
    /// Platform key (github, linkedin, ...) to URL.
    pub social: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: RecordId,
    pub title: String,
    pub description: String,
    pub full_description: Option<String>,
    pub image: Option<String>,
    pub gallery: Vec<String>,
    pub category: ProjectCategory,
    pub tech: Vec<String>,
    pub features: Vec<String>,
    pub challenges: Option<String>,
    pub solutions: Option<String>,
    pub github: String,
    pub demo: String,
    pub featured: bool,
    pub size: ProjectSize,
    pub order_index: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub id: RecordId,
    pub title: String,
    pub organization: String,
    /// Free-text range ("Jun 2024 - Aug 2024"), not a structured date.
    pub period: String,
    pub description: String,
    pub skills: Vec<String>,
    pub order_index: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub id: RecordId,
    pub degree: String,
    pub institution: String,
    pub period: String,
    pub description: String,
    pub achievements: Vec<String>,
    pub order_index: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub id: RecordId,
    pub name: String,
    /// 0-100 display percentage. Not validated beyond the admin UI range.
    pub level: i32,
    pub category: SkillCategory,
    /// Icon identifier resolved by the view layer; unknown names fall back.
    pub icon: String,
    pub order_index: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certificate {
    pub id: RecordId,
    pub name: String,
    pub issuer: String,
    /// Free-text year used for grouping and descending sort.
    pub date: String,
    pub image: Option<String>,
    pub credential_url: Option<String>,
    pub order_index: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Highlight {
    pub id: RecordId,
    pub icon: String,
    pub title: String,
    pub description: String,
    pub order_index: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub id: RecordId,
    /// Free text, e.g. "10+".
    pub value: String,
    pub label: String,
    pub order_index: i32,
}

/// Flat site settings document. Lives only in the local persisted store;
/// the hosted table set has no settings table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteSettings {
    pub site_name: String,
    pub site_description: String,
}
