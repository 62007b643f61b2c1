// src/modules/store/store.rs
//
// The local persisted store: one process-wide container for every content
// collection, injected wherever it is needed rather than reached as a
// global. All mutations go through the typed action methods below; each
// one locks the tree, applies synchronously, and writes the snapshot
// before releasing the lock, which keeps the on-disk blob in step with
// memory under the single-writer discipline.

use std::sync::Mutex;

use chrono::Utc;
use tracing::warn;

use crate::modules::content::application::ports::outgoing::records::{
    CertificatePatch, EducationPatch, ExperiencePatch, HighlightPatch, NewCertificate,
    NewEducation, NewExperience, NewHighlight, NewProject, NewSkill, NewStat, ProfilePatch,
    ProjectPatch, SettingsPatch, SkillPatch, StatPatch,
};
use crate::modules::content::domain::entities::{
    Certificate, Education, Experience, Highlight, Profile, Project, RecordId, SiteSettings,
    Skill, Stat,
};
use crate::modules::store::ids::generate_id;
use crate::modules::store::snapshot::SnapshotStore;
use crate::modules::store::state::StoreState;

pub struct ContentStore {
    state: Mutex<StoreState>,
    snapshots: Box<dyn SnapshotStore>,
}

impl ContentStore {
    /// Rehydrate from the snapshot if one exists, else seed the defaults.
    /// An unreadable snapshot is logged and replaced by the defaults; the
    /// store never refuses to start.
    pub fn new(snapshots: Box<dyn SnapshotStore>) -> Self {
        let state = match snapshots.load() {
            Ok(Some(state)) => state,
            Ok(None) => StoreState::with_defaults(),
            Err(err) => {
                warn!("loading content snapshot failed, seeding defaults: {}", err);
                StoreState::with_defaults()
            }
        };

        Self {
            state: Mutex::new(state),
            snapshots,
        }
    }

    fn mutate<T>(&self, action: impl FnOnce(&mut StoreState) -> T) -> T {
        let mut state = self.state.lock().expect("store state poisoned");
        let result = action(&mut state);
        if let Err(err) = self.snapshots.save(&state) {
            warn!("persisting content snapshot failed: {}", err);
        }
        result
    }

    fn read<T>(&self, read: impl FnOnce(&StoreState) -> T) -> T {
        read(&self.state.lock().expect("store state poisoned"))
    }

    //
    // ──────────────────────────────────────────────────────
    // Profile / settings (singletons)
    // ──────────────────────────────────────────────────────
    //

    pub fn profile(&self) -> Profile {
        self.read(|s| s.profile.clone())
    }

    pub fn update_profile(&self, patch: ProfilePatch) -> Profile {
        self.mutate(|s| {
            patch.apply(&mut s.profile);
            s.profile.clone()
        })
    }

    pub fn settings(&self) -> SiteSettings {
        self.read(|s| s.settings.clone())
    }

    pub fn update_settings(&self, patch: SettingsPatch) -> SiteSettings {
        self.mutate(|s| {
            patch.apply(&mut s.settings);
            s.settings.clone()
        })
    }

    //
    // ──────────────────────────────────────────────────────
    // Projects
    // ──────────────────────────────────────────────────────
    //

    pub fn projects(&self) -> Vec<Project> {
        self.read(|s| s.projects.clone())
    }

    /// Newest first: created records are prepended.
    pub fn add_project(&self, data: NewProject) -> Project {
        let project = Project {
            id: RecordId::from(generate_id()),
            title: data.title,
            description: data.description,
            full_description: data.full_description,
            image: data.image,
            gallery: data.gallery,
            category: data.category,
            tech: data.tech,
            features: data.features,
            challenges: data.challenges,
            solutions: data.solutions,
            github: data.github,
            demo: data.demo,
            featured: data.featured,
            size: data.size,
            order_index: data.order_index,
            created_at: Utc::now(),
        };

        self.mutate(|s| {
            s.projects.insert(0, project.clone());
        });
        project
    }

    /// Silent no-op when the id is absent, mirroring the merge-map shape
    /// of the original store actions.
    pub fn update_project(&self, id: &RecordId, patch: ProjectPatch) -> Option<Project> {
        self.mutate(|s| {
            let project = s.projects.iter_mut().find(|p| &p.id == id)?;
            patch.apply(project);
            Some(project.clone())
        })
    }

    pub fn delete_project(&self, id: &RecordId) {
        self.mutate(|s| s.projects.retain(|p| &p.id != id));
    }

    //
    // ──────────────────────────────────────────────────────
    // Experiences
    // ──────────────────────────────────────────────────────
    //

    pub fn experiences(&self) -> Vec<Experience> {
        self.read(|s| s.experiences.clone())
    }

    pub fn add_experience(&self, data: NewExperience) -> Experience {
        let experience = Experience {
            id: RecordId::from(generate_id()),
            title: data.title,
            organization: data.organization,
            period: data.period,
            description: data.description,
            skills: data.skills,
            order_index: data.order_index,
            created_at: Utc::now(),
        };

        self.mutate(|s| {
            s.experiences.insert(0, experience.clone());
        });
        experience
    }

    pub fn update_experience(&self, id: &RecordId, patch: ExperiencePatch) -> Option<Experience> {
        self.mutate(|s| {
            let experience = s.experiences.iter_mut().find(|e| &e.id == id)?;
            patch.apply(experience);
            Some(experience.clone())
        })
    }

    pub fn delete_experience(&self, id: &RecordId) {
        self.mutate(|s| s.experiences.retain(|e| &e.id != id));
    }

    //
    // ──────────────────────────────────────────────────────
    // Education
    // ──────────────────────────────────────────────────────
    //

    pub fn education(&self) -> Vec<Education> {
        self.read(|s| s.education.clone())
    }

    pub fn add_education(&self, data: NewEducation) -> Education {
        let education = Education {
            id: RecordId::from(generate_id()),
            degree: data.degree,
            institution: data.institution,
            period: data.period,
            description: data.description,
            achievements: data.achievements,
            order_index: data.order_index,
            created_at: Utc::now(),
        };

        self.mutate(|s| {
            s.education.insert(0, education.clone());
        });
        education
    }

    pub fn update_education(&self, id: &RecordId, patch: EducationPatch) -> Option<Education> {
        self.mutate(|s| {
            let education = s.education.iter_mut().find(|e| &e.id == id)?;
            patch.apply(education);
            Some(education.clone())
        })
    }

    pub fn delete_education(&self, id: &RecordId) {
        self.mutate(|s| s.education.retain(|e| &e.id != id));
    }

    //
    // ──────────────────────────────────────────────────────
    // Skills
    // ──────────────────────────────────────────────────────
    //

    pub fn skills(&self) -> Vec<Skill> {
        self.read(|s| s.skills.clone())
    }

    /// Skills append instead of prepending: the grid reads oldest first.
    pub fn add_skill(&self, data: NewSkill) -> Skill {
        let skill = Skill {
            id: RecordId::from(generate_id()),
            name: data.name,
            level: data.level,
            category: data.category,
            icon: data.icon,
            order_index: data.order_index,
        };

        self.mutate(|s| {
            s.skills.push(skill.clone());
        });
        skill
    }

    pub fn update_skill(&self, id: &RecordId, patch: SkillPatch) -> Option<Skill> {
        self.mutate(|s| {
            let skill = s.skills.iter_mut().find(|k| &k.id == id)?;
            patch.apply(skill);
            Some(skill.clone())
        })
    }

    pub fn delete_skill(&self, id: &RecordId) {
        self.mutate(|s| s.skills.retain(|k| &k.id != id));
    }

    //
    // ──────────────────────────────────────────────────────
    // Certificates
    // ──────────────────────────────────────────────────────
    //

    pub fn certificates(&self) -> Vec<Certificate> {
        self.read(|s| s.certificates.clone())
    }

    pub fn add_certificate(&self, data: NewCertificate) -> Certificate {
        let certificate = Certificate {
            id: RecordId::from(generate_id()),
            name: data.name,
            issuer: data.issuer,
            date: data.date,
            image: data.image,
            credential_url: data.credential_url,
            order_index: data.order_index,
            created_at: Utc::now(),
        };

        self.mutate(|s| {
            s.certificates.insert(0, certificate.clone());
        });
        certificate
    }

    pub fn update_certificate(
        &self,
        id: &RecordId,
        patch: CertificatePatch,
    ) -> Option<Certificate> {
        self.mutate(|s| {
            let certificate = s.certificates.iter_mut().find(|c| &c.id == id)?;
            patch.apply(certificate);
            Some(certificate.clone())
        })
    }

    pub fn delete_certificate(&self, id: &RecordId) {
        self.mutate(|s| s.certificates.retain(|c| &c.id != id));
    }

    //
    // ──────────────────────────────────────────────────────
    // Highlights
    // ──────────────────────────────────────────────────────
    //

    pub fn highlights(&self) -> Vec<Highlight> {
        self.read(|s| s.highlights.clone())
    }

    pub fn add_highlight(&self, data: NewHighlight) -> Highlight {
        let highlight = Highlight {
            id: RecordId::from(generate_id()),
            icon: data.icon,
            title: data.title,
            description: data.description,
            order_index: data.order_index,
        };

        self.mutate(|s| {
            s.highlights.insert(0, highlight.clone());
        });
        highlight
    }

    pub fn update_highlight(&self, id: &RecordId, patch: HighlightPatch) -> Option<Highlight> {
        self.mutate(|s| {
            let highlight = s.highlights.iter_mut().find(|h| &h.id == id)?;
            patch.apply(highlight);
            Some(highlight.clone())
        })
    }

    pub fn delete_highlight(&self, id: &RecordId) {
        self.mutate(|s| s.highlights.retain(|h| &h.id != id));
    }

    //
    // ──────────────────────────────────────────────────────
    // Stats
    // ──────────────────────────────────────────────────────
    //

    pub fn stats(&self) -> Vec<Stat> {
        self.read(|s| s.stats.clone())
    }

    pub fn add_stat(&self, data: NewStat) -> Stat {
        let stat = Stat {
            id: RecordId::from(generate_id()),
            value: data.value,
            label: data.label,
            order_index: data.order_index,
        };

        self.mutate(|s| {
            s.stats.insert(0, stat.clone());
        });
        stat
    }

    pub fn update_stat(&self, id: &RecordId, patch: StatPatch) -> Option<Stat> {
        self.mutate(|s| {
            let stat = s.stats.iter_mut().find(|t| &t.id == id)?;
            patch.apply(stat);
            Some(stat.clone())
        })
    }

    pub fn delete_stat(&self, id: &RecordId) {
        self.mutate(|s| s.stats.retain(|t| &t.id != id));
    }
}
