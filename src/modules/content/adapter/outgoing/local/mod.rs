// src/modules/content/adapter/outgoing/local/mod.rs
//
// Gateway adapters over the local persisted store, the alternative to the
// Postgres path. Listing order here is raw insertion order (newest first
// on create, oldest first for skills); there is no order_index sort. The
// store's own no-op update semantics surface as NotFound through the
// gateway so callers see one contract on both paths.

use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::content::application::ports::outgoing::content_gateway::{
    CollectionGateway, GatewayError, ProfileGateway,
};
use crate::modules::content::application::ports::outgoing::records::{
    CertificatePatch, EducationPatch, ExperiencePatch, HighlightPatch, NewCertificate,
    NewEducation, NewExperience, NewHighlight, NewProject, NewSkill, NewStat, ProfilePatch,
    ProjectPatch, SkillPatch, StatPatch,
};
use crate::modules::content::domain::entities::{
    Certificate, Education, Experience, Highlight, Profile, Project, RecordId, Skill, Stat,
};
use crate::modules::store::store::ContentStore;

//
// ──────────────────────────────────────────────────────────
// Profile
// ──────────────────────────────────────────────────────────
//

#[derive(Clone)]
pub struct LocalProfileGateway {
    store: Arc<ContentStore>,
}

impl LocalProfileGateway {
    pub fn new(store: Arc<ContentStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ProfileGateway for LocalProfileGateway {
    async fn get(&self) -> Result<Profile, GatewayError> {
        Ok(self.store.profile())
    }

    async fn update(&self, data: ProfilePatch) -> Result<Profile, GatewayError> {
        Ok(self.store.update_profile(data))
    }
}

//
// ──────────────────────────────────────────────────────────
// Collections
// ──────────────────────────────────────────────────────────
//

#[derive(Clone)]
pub struct LocalProjectsGateway {
    store: Arc<ContentStore>,
}

impl LocalProjectsGateway {
    pub fn new(store: Arc<ContentStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CollectionGateway<Project, NewProject, ProjectPatch> for LocalProjectsGateway {
    async fn list(&self) -> Result<Vec<Project>, GatewayError> {
        Ok(self.store.projects())
    }

    async fn get(&self, id: &RecordId) -> Result<Project, GatewayError> {
        self.store
            .projects()
            .into_iter()
            .find(|p| &p.id == id)
            .ok_or(GatewayError::NotFound)
    }

    async fn create(&self, data: NewProject) -> Result<Project, GatewayError> {
        Ok(self.store.add_project(data))
    }

    async fn update(&self, id: &RecordId, data: ProjectPatch) -> Result<Project, GatewayError> {
        self.store
            .update_project(id, data)
            .ok_or(GatewayError::NotFound)
    }

    async fn delete(&self, id: &RecordId) -> Result<(), GatewayError> {
        self.store.delete_project(id);
        Ok(())
    }
}

#[derive(Clone)]
pub struct LocalExperiencesGateway {
    store: Arc<ContentStore>,
}

impl LocalExperiencesGateway {
    pub fn new(store: Arc<ContentStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CollectionGateway<Experience, NewExperience, ExperiencePatch> for LocalExperiencesGateway {
    async fn list(&self) -> Result<Vec<Experience>, GatewayError> {
        Ok(self.store.experiences())
    }

    async fn get(&self, id: &RecordId) -> Result<Experience, GatewayError> {
        self.store
            .experiences()
            .into_iter()
            .find(|e| &e.id == id)
            .ok_or(GatewayError::NotFound)
    }

    async fn create(&self, data: NewExperience) -> Result<Experience, GatewayError> {
        Ok(self.store.add_experience(data))
    }

    async fn update(
        &self,
        id: &RecordId,
        data: ExperiencePatch,
    ) -> Result<Experience, GatewayError> {
        self.store
            .update_experience(id, data)
            .ok_or(GatewayError::NotFound)
    }

    async fn delete(&self, id: &RecordId) -> Result<(), GatewayError> {
        self.store.delete_experience(id);
        Ok(())
    }
}

#[derive(Clone)]
pub struct LocalEducationGateway {
    store: Arc<ContentStore>,
}

impl LocalEducationGateway {
    pub fn new(store: Arc<ContentStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CollectionGateway<Education, NewEducation, EducationPatch> for LocalEducationGateway {
    async fn list(&self) -> Result<Vec<Education>, GatewayError> {
        Ok(self.store.education())
    }

    async fn get(&self, id: &RecordId) -> Result<Education, GatewayError> {
        self.store
            .education()
            .into_iter()
            .find(|e| &e.id == id)
            .ok_or(GatewayError::NotFound)
    }

    async fn create(&self, data: NewEducation) -> Result<Education, GatewayError> {
        Ok(self.store.add_education(data))
    }

    async fn update(&self, id: &RecordId, data: EducationPatch) -> Result<Education, GatewayError> {
        self.store
            .update_education(id, data)
            .ok_or(GatewayError::NotFound)
    }

    async fn delete(&self, id: &RecordId) -> Result<(), GatewayError> {
        self.store.delete_education(id);
        Ok(())
    }
}

#[derive(Clone)]
pub struct LocalSkillsGateway {
    store: Arc<ContentStore>,
}

impl LocalSkillsGateway {
    pub fn new(store: Arc<ContentStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CollectionGateway<Skill, NewSkill, SkillPatch> for LocalSkillsGateway {
    async fn list(&self) -> Result<Vec<Skill>, GatewayError> {
        Ok(self.store.skills())
    }

    async fn get(&self, id: &RecordId) -> Result<Skill, GatewayError> {
        self.store
            .skills()
            .into_iter()
            .find(|s| &s.id == id)
            .ok_or(GatewayError::NotFound)
    }

    async fn create(&self, data: NewSkill) -> Result<Skill, GatewayError> {
        Ok(self.store.add_skill(data))
    }

    async fn update(&self, id: &RecordId, data: SkillPatch) -> Result<Skill, GatewayError> {
        self.store
            .update_skill(id, data)
            .ok_or(GatewayError::NotFound)
    }

    async fn delete(&self, id: &RecordId) -> Result<(), GatewayError> {
        self.store.delete_skill(id);
        Ok(())
    }
}

#[derive(Clone)]
pub struct LocalCertificatesGateway {
    store: Arc<ContentStore>,
}

impl LocalCertificatesGateway {
    pub fn new(store: Arc<ContentStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CollectionGateway<Certificate, NewCertificate, CertificatePatch>
    for LocalCertificatesGateway
{
    async fn list(&self) -> Result<Vec<Certificate>, GatewayError> {
        Ok(self.store.certificates())
    }

    async fn get(&self, id: &RecordId) -> Result<Certificate, GatewayError> {
        self.store
            .certificates()
            .into_iter()
            .find(|c| &c.id == id)
            .ok_or(GatewayError::NotFound)
    }

    async fn create(&self, data: NewCertificate) -> Result<Certificate, GatewayError> {
        Ok(self.store.add_certificate(data))
    }

    async fn update(
        &self,
        id: &RecordId,
        data: CertificatePatch,
    ) -> Result<Certificate, GatewayError> {
        self.store
            .update_certificate(id, data)
            .ok_or(GatewayError::NotFound)
    }

    async fn delete(&self, id: &RecordId) -> Result<(), GatewayError> {
        self.store.delete_certificate(id);
        Ok(())
    }
}

#[derive(Clone)]
pub struct LocalHighlightsGateway {
    store: Arc<ContentStore>,
}

impl LocalHighlightsGateway {
    pub fn new(store: Arc<ContentStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CollectionGateway<Highlight, NewHighlight, HighlightPatch> for LocalHighlightsGateway {
    async fn list(&self) -> Result<Vec<Highlight>, GatewayError> {
        Ok(self.store.highlights())
    }

    async fn get(&self, id: &RecordId) -> Result<Highlight, GatewayError> {
        self.store
            .highlights()
            .into_iter()
            .find(|h| &h.id == id)
            .ok_or(GatewayError::NotFound)
    }

    async fn create(&self, data: NewHighlight) -> Result<Highlight, GatewayError> {
        Ok(self.store.add_highlight(data))
    }

    async fn update(&self, id: &RecordId, data: HighlightPatch) -> Result<Highlight, GatewayError> {
        self.store
            .update_highlight(id, data)
            .ok_or(GatewayError::NotFound)
    }

    async fn delete(&self, id: &RecordId) -> Result<(), GatewayError> {
        self.store.delete_highlight(id);
        Ok(())
    }
}

#[derive(Clone)]
pub struct LocalStatsGateway {
    store: Arc<ContentStore>,
}

impl LocalStatsGateway {
    pub fn new(store: Arc<ContentStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CollectionGateway<Stat, NewStat, StatPatch> for LocalStatsGateway {
    async fn list(&self) -> Result<Vec<Stat>, GatewayError> {
        Ok(self.store.stats())
    }

    async fn get(&self, id: &RecordId) -> Result<Stat, GatewayError> {
        self.store
            .stats()
            .into_iter()
            .find(|t| &t.id == id)
            .ok_or(GatewayError::NotFound)
    }

    async fn create(&self, data: NewStat) -> Result<Stat, GatewayError> {
        Ok(self.store.add_stat(data))
    }

    async fn update(&self, id: &RecordId, data: StatPatch) -> Result<Stat, GatewayError> {
        self.store
            .update_stat(id, data)
            .ok_or(GatewayError::NotFound)
    }

    async fn delete(&self, id: &RecordId) -> Result<(), GatewayError> {
        self.store.delete_stat(id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::content::application::ports::outgoing::content_gateway::PatchField;
    use crate::modules::content::domain::entities::SkillCategory;
    use crate::modules::store::snapshot::MemorySnapshotStore;

    fn store() -> Arc<ContentStore> {
        Arc::new(ContentStore::new(Box::new(MemorySnapshotStore::new())))
    }

    #[tokio::test]
    async fn test_create_then_list_contains_record() {
        let gateway = LocalSkillsGateway::new(store());

        let created = gateway
            .create(NewSkill {
                name: "Rust".to_string(),
                level: 60,
                category: SkillCategory::Backend,
                icon: "SiRust".to_string(),
                order_index: 0,
            })
            .await
            .unwrap();

        let listed = gateway.list().await.unwrap();
        assert!(listed.iter().any(|s| s.id == created.id && s.name == "Rust"));
    }

    #[tokio::test]
    async fn test_update_absent_id_is_not_found() {
        let gateway = LocalProjectsGateway::new(store());

        let result = gateway
            .update(
                &RecordId::from("missing"),
                ProjectPatch {
                    title: PatchField::Value("x".to_string()),
                    ..Default::default()
                },
            )
            .await;

        assert!(matches!(result.unwrap_err(), GatewayError::NotFound));
    }

    #[tokio::test]
    async fn test_delete_absent_id_is_success() {
        let gateway = LocalStatsGateway::new(store());
        assert!(gateway.delete(&RecordId::from("missing")).await.is_ok());
    }
}
