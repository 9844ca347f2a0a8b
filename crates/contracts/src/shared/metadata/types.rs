//! Declarative metadata for entities, members and parameters
//!
//! All types use 'static lifetimes: every introspectable entity declares one
//! `EntityDef` constant and exposes it through [`Introspect`].

use super::annotation::{Annotation, DeveloperInfo, HttpVerb, Literal};
use super::type_ref::{Capability, TypeRef};

// ============================================================================
// Registration
// ============================================================================

/// Links a Rust type to the static declaration describing it
pub trait Introspect {
    fn entity_def() -> &'static EntityDef;
}

// ============================================================================
// Parameter-level metadata
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamDef {
    pub name: Option<&'static str>,
    pub ty: TypeRef,
    /// Declared default; a parameter with a default is optional
    pub default: Option<Literal>,
    pub annotations: &'static [Annotation],
}

impl ParamDef {
    pub const fn new(name: &'static str, ty: TypeRef) -> Self {
        Self {
            name: Some(name),
            ty,
            default: None,
            annotations: &[],
        }
    }

    pub const fn with_default(self, default: Literal) -> Self {
        Self {
            default: Some(default),
            ..self
        }
    }

    pub const fn annotated(self, annotations: &'static [Annotation]) -> Self {
        Self {
            annotations,
            ..self
        }
    }

    pub fn is_optional(&self) -> bool {
        self.default.is_some()
    }
}

// ============================================================================
// Member-level metadata
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Public,
    Private,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Receiver {
    #[default]
    Instance,
    Static,
}

/// Where a member is declared relative to the entity listing it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Declaration {
    #[default]
    Direct,
    Inherited { from: &'static str },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MemberDef {
    pub name: &'static str,
    pub visibility: Visibility,
    pub receiver: Receiver,
    pub declaration: Declaration,
    pub return_type: TypeRef,
    pub parameters: &'static [ParamDef],
    pub annotations: &'static [Annotation],
}

impl MemberDef {
    /// Public instance method declared directly on the entity
    pub const fn method(name: &'static str, return_type: TypeRef) -> Self {
        Self {
            name,
            visibility: Visibility::Public,
            receiver: Receiver::Instance,
            declaration: Declaration::Direct,
            return_type,
            parameters: &[],
            annotations: &[],
        }
    }

    pub const fn params(self, parameters: &'static [ParamDef]) -> Self {
        Self { parameters, ..self }
    }

    pub const fn annotated(self, annotations: &'static [Annotation]) -> Self {
        Self {
            annotations,
            ..self
        }
    }

    pub const fn private(self) -> Self {
        Self {
            visibility: Visibility::Private,
            ..self
        }
    }

    pub const fn associated(self) -> Self {
        Self {
            receiver: Receiver::Static,
            ..self
        }
    }

    pub const fn inherited_from(self, base: &'static str) -> Self {
        Self {
            declaration: Declaration::Inherited { from: base },
            ..self
        }
    }

    /// Public, instance-level and declared directly on the entity
    pub fn is_surface_member(&self) -> bool {
        self.visibility == Visibility::Public
            && self.receiver == Receiver::Instance
            && self.declaration == Declaration::Direct
    }

    /// First developer annotation on the member
    pub fn developer_info(&self) -> Option<&'static DeveloperInfo> {
        self.annotations.iter().find_map(Annotation::as_developer_info)
    }

    /// First marker for `verb` and its template
    pub fn http_marker(&self, verb: HttpVerb) -> Option<Option<&'static str>> {
        self.annotations.iter().find_map(|a| match a {
            Annotation::Http { verb: v, template } if *v == verb => Some(*template),
            _ => None,
        })
    }

    pub fn has_http_marker(&self) -> bool {
        self.annotations.iter().any(|a| a.http_verb().is_some())
    }
}

// ============================================================================
// Entity-level metadata
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntityDef {
    pub name: &'static str,
    pub namespace: Option<&'static str>,
    /// Crate or component the entity is declared in
    pub origin: &'static str,
    pub capabilities: &'static [Capability],
    pub is_abstract: bool,
    pub annotations: &'static [Annotation],
    pub members: &'static [MemberDef],
}

impl EntityDef {
    pub const fn new(name: &'static str, origin: &'static str) -> Self {
        Self {
            name,
            namespace: None,
            origin,
            capabilities: &[],
            is_abstract: false,
            annotations: &[],
            members: &[],
        }
    }

    pub const fn in_namespace(self, namespace: &'static str) -> Self {
        Self {
            namespace: Some(namespace),
            ..self
        }
    }

    pub const fn with_capabilities(self, capabilities: &'static [Capability]) -> Self {
        Self {
            capabilities,
            ..self
        }
    }

    pub const fn abstract_entity(self) -> Self {
        Self {
            is_abstract: true,
            ..self
        }
    }

    pub const fn annotated(self, annotations: &'static [Annotation]) -> Self {
        Self {
            annotations,
            ..self
        }
    }

    pub const fn members(self, members: &'static [MemberDef]) -> Self {
        Self { members, ..self }
    }

    /// Namespace-qualified name, or the simple name without a namespace
    pub fn full_name(&self) -> String {
        match self.namespace {
            Some(ns) => format!("{}::{}", ns, self.name),
            None => self.name.to_string(),
        }
    }

    pub fn has_capability(&self, capability: Capability) -> bool {
        self.capabilities.contains(&capability)
    }

    /// First developer annotation on the entity
    pub fn developer_info(&self) -> Option<&'static DeveloperInfo> {
        self.annotations.iter().find_map(Annotation::as_developer_info)
    }

    /// Template of the first route marker on the entity
    pub fn route_template(&self) -> Option<&'static str> {
        self.annotations.iter().find_map(|a| match a {
            Annotation::Route { template } => Some(*template),
            _ => None,
        })
    }

    /// Members visible to introspection, in declaration order
    pub fn surface_members(&self) -> impl Iterator<Item = &'static MemberDef> {
        self.members.iter().filter(|m| m.is_surface_member())
    }
}
