//! Introspection of declared entities
//!
//! Turns the `'static` declarations from `contracts::shared::metadata` into
//! owned report descriptors (`contracts::system::attribute_map`) and renders
//! the console text report.

pub mod attribute_extractor;
pub mod entity_builder;
pub mod registry;
pub mod report;
pub mod type_name;

use serde::Deserialize;

pub use attribute_extractor::extract_attributes;
pub use entity_builder::{
    build_action_descriptor, build_entity_descriptor, is_action, survey_members, MemberSurvey,
};
pub use registry::{get_registry, EntityRegistry};
pub use report::{render_text_report, ReportError};
pub use type_name::friendly_name;

/// Annotation namespaces excluded from every attribute collection by default
pub const DEFAULT_RESERVED_PREFIXES: [&str; 2] = ["system::runtime", "system::diagnostics"];

/// How members are recognized as actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionRecognition {
    /// Verb markers or an `ActionResult`-capable return type
    #[default]
    Capability,
    /// Additionally accept return types whose name starts with
    /// `ActionResult` or `Task`
    NamePrefix,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntrospectionOptions {
    pub reserved_namespace_prefixes: Vec<String>,
    pub action_recognition: ActionRecognition,
    /// Add HEAD/OPTIONS tags to `httpMethods`
    pub report_head_and_options: bool,
}

impl Default for IntrospectionOptions {
    fn default() -> Self {
        Self {
            reserved_namespace_prefixes: DEFAULT_RESERVED_PREFIXES
                .iter()
                .map(|p| p.to_string())
                .collect(),
            action_recognition: ActionRecognition::default(),
            report_head_and_options: false,
        }
    }
}
