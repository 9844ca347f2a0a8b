//! Declarative metadata for introspectable entities
//!
//! This module provides compile-time metadata for every entity the system can
//! report on. All types use 'static lifetimes for zero-cost access to
//! compile-time constants.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use contracts::shared::metadata::{Introspect, EntityDef};
//!
//! let def: &'static EntityDef = SampleService::entity_def();
//! println!("Entity: {}", def.full_name());
//!
//! for member in def.surface_members() {
//!     println!("{} -> {}", member.name, member.return_type.name);
//! }
//! ```

mod annotation;
mod type_ref;
mod types;

pub use annotation::{
    Annotation, CustomAnnotation, DeveloperInfo, HttpVerb, Literal, PropertyDef,
    PropertyReadError, PropertyValue, ANNOTATIONS_NAMESPACE, WEB_NAMESPACE,
};
pub use type_ref::{Capability, TypeRef, BOOL, I32, I64, STRING, UNIT};
pub use types::{Declaration, EntityDef, Introspect, MemberDef, ParamDef, Receiver, Visibility};
