//! Entity registry
//!
//! Central list of every entity the binary can introspect. Entities join
//! through their `Introspect` implementation; the process-wide instance is
//! built once on first use.

use chrono::Utc;
use std::fmt;

use contracts::shared::metadata::{Annotation, Capability, EntityDef, Introspect};
use contracts::system::attribute_map::MetadataMap;

use super::entity_builder::{build_entity_descriptor, survey_members, MemberSurvey};
use super::report::{render_text_report, ReportError};
use super::IntrospectionOptions;

/// Declaration carrying more than one developer annotation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateDeveloperInfo {
    pub entity: String,
    /// `None` for the entity itself
    pub member: Option<String>,
    pub count: usize,
}

impl fmt::Display for DuplicateDeveloperInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.member {
            Some(member) => write!(
                f,
                "{}::{} has {} DeveloperInfo annotations",
                self.entity, member, self.count
            ),
            None => write!(
                f,
                "{} has {} DeveloperInfo annotations",
                self.entity, self.count
            ),
        }
    }
}

pub struct EntityRegistry {
    entities: Vec<&'static EntityDef>,
}

impl EntityRegistry {
    /// Create a registry with every entity known to the binary
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register_known_entities();
        registry
    }

    pub fn empty() -> Self {
        Self {
            entities: Vec::new(),
        }
    }

    fn register_known_entities(&mut self) {
        use crate::domain::sample_service::SampleService;
        use crate::system::api::controllers::{ApiControllerBase, SystemController};

        self.register::<ApiControllerBase>();
        self.register::<SystemController>();
        self.register::<SampleService>();
    }

    pub fn register<T: Introspect>(&mut self) {
        self.register_def(T::entity_def());
    }

    /// Register a declaration
    ///
    /// A second entity with the same full name is ignored. A declaration with
    /// more than one developer annotation on the entity or on a member is
    /// rejected.
    pub fn register_def(&mut self, def: &'static EntityDef) {
        let full_name = def.full_name();
        if self.entities.iter().any(|e| e.full_name() == full_name) {
            tracing::warn!("Entity {} is already registered", full_name);
            return;
        }

        let issues = validate_entity(def);
        if !issues.is_empty() {
            for issue in &issues {
                tracing::error!("Rejected entity {}: {}", full_name, issue);
            }
            return;
        }

        tracing::debug!(
            "Registered entity {} ({} members)",
            full_name,
            def.members.len()
        );
        self.entities.push(def);
    }

    /// All registered entities in registration order
    pub fn entities(&self) -> &[&'static EntityDef] {
        &self.entities
    }

    /// Look up an entity by simple or fully qualified name
    pub fn find(&self, name: &str) -> Option<&'static EntityDef> {
        self.entities
            .iter()
            .copied()
            .find(|e| e.name == name || e.full_name() == name)
    }

    /// Concrete entities with the controller capability
    pub fn controllers(&self) -> impl Iterator<Item = &'static EntityDef> + '_ {
        self.entities
            .iter()
            .copied()
            .filter(|e| e.has_capability(Capability::Controller) && !e.is_abstract)
    }

    /// Metadata map over all controllers
    pub fn build_metadata_map(
        &self,
        origin_system_name: &str,
        options: &IntrospectionOptions,
    ) -> MetadataMap {
        let entities = self
            .controllers()
            .map(|e| build_entity_descriptor(e, options))
            .collect();

        let map = MetadataMap::new(origin_system_name, Utc::now(), entities);
        tracing::debug!(
            "Built metadata map: {} entities, {} actions",
            map.total_entities(),
            map.total_actions()
        );
        map
    }

    pub fn survey(&self, name: &str) -> Result<MemberSurvey, ReportError> {
        self.find(name)
            .map(survey_members)
            .ok_or_else(|| ReportError::UnknownEntity(name.to_string()))
    }

    /// Text report of one registered entity
    pub fn text_report(&self, name: &str) -> Result<String, ReportError> {
        render_text_report(&self.survey(name)?)
    }
}

impl Default for EntityRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Places in a declaration carrying more than one developer annotation
pub fn validate_entity(entity: &EntityDef) -> Vec<DuplicateDeveloperInfo> {
    let mut issues = Vec::new();

    let count = count_developer_info(entity.annotations);
    if count > 1 {
        issues.push(DuplicateDeveloperInfo {
            entity: entity.full_name(),
            member: None,
            count,
        });
    }

    for member in entity.members {
        let count = count_developer_info(member.annotations);
        if count > 1 {
            issues.push(DuplicateDeveloperInfo {
                entity: entity.full_name(),
                member: Some(member.name.to_string()),
                count,
            });
        }
    }

    issues
}

fn count_developer_info(annotations: &[Annotation]) -> usize {
    annotations
        .iter()
        .filter(|a| a.as_developer_info().is_some())
        .count()
}

/// Global entity registry instance
static REGISTRY: std::sync::OnceLock<EntityRegistry> = std::sync::OnceLock::new();

/// Get global entity registry
pub fn get_registry() -> &'static EntityRegistry {
    REGISTRY.get_or_init(EntityRegistry::new)
}
