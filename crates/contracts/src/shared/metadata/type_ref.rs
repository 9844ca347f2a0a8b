//! Type references for the metadata system

/// Capability a declared type advertises to the introspection layer.
///
/// Stands in for "is assignable to" checks: a controller entity carries
/// `Controller`, result wrappers of HTTP actions carry `ActionResult`, and
/// future-like wrappers carry `AsyncWrapper`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    Controller,
    ActionResult,
    AsyncWrapper,
}

impl Capability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Controller => "controller",
            Self::ActionResult => "action_result",
            Self::AsyncWrapper => "async_wrapper",
        }
    }
}

/// Reference to a declared type, possibly generic over other type references.
///
/// `name` may carry an arity suffix (`` Result`2 ``) the way generated
/// declarations spell generic definitions; renderers strip it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeRef {
    pub name: &'static str,
    pub namespace: Option<&'static str>,
    pub args: &'static [TypeRef],
    pub capabilities: &'static [Capability],
}

impl TypeRef {
    pub const fn named(name: &'static str) -> Self {
        Self {
            name,
            namespace: None,
            args: &[],
            capabilities: &[],
        }
    }

    pub const fn generic(name: &'static str, args: &'static [TypeRef]) -> Self {
        Self {
            name,
            namespace: None,
            args,
            capabilities: &[],
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

    /// Simple name as declared, arity suffix included
    pub fn simple_name(&self) -> &'static str {
        self.name
    }

    /// Name without the generic arity suffix
    pub fn base_name(&self) -> &'static str {
        self.name.split('`').next().unwrap_or(self.name)
    }

    pub fn is_generic(&self) -> bool {
        !self.args.is_empty()
    }

    pub fn has_capability(&self, capability: Capability) -> bool {
        self.capabilities.contains(&capability)
    }
}

// Common building blocks for declarations

pub const UNIT: TypeRef = TypeRef::named("()");
pub const BOOL: TypeRef = TypeRef::named("bool");
pub const I32: TypeRef = TypeRef::named("i32");
pub const I64: TypeRef = TypeRef::named("i64");
pub const STRING: TypeRef = TypeRef::named("String");
