//! Annotations attached to declared entities, members and parameters
//!
//! Every annotation kind is a tagged variant with explicit fields. The
//! `Custom` variant covers any other marker as an ordered property list whose
//! entries are read through a fallible accessor.

use thiserror::Error;

/// Namespace of the web routing markers (HTTP verbs, routes)
pub const WEB_NAMESPACE: &str = "web::mvc";

/// Namespace of the developer metadata annotation
pub const ANNOTATIONS_NAMESPACE: &str = "contracts::annotations";

/// HTTP verb carried by a verb marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpVerb {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Head,
    Options,
}

impl HttpVerb {
    /// Verbs that contribute a tag to an action, in priority order
    pub const REPORTED: [HttpVerb; 5] = [
        HttpVerb::Get,
        HttpVerb::Post,
        HttpVerb::Put,
        HttpVerb::Delete,
        HttpVerb::Patch,
    ];

    /// Verbs that only count toward action recognition
    pub const UNREPORTED: [HttpVerb; 2] = [HttpVerb::Head, HttpVerb::Options];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
            Self::Patch => "PATCH",
            Self::Head => "HEAD",
            Self::Options => "OPTIONS",
        }
    }

    /// Type name of the marker declaring this verb
    pub fn marker_type_name(&self) -> &'static str {
        match self {
            Self::Get => "HttpGetAttribute",
            Self::Post => "HttpPostAttribute",
            Self::Put => "HttpPutAttribute",
            Self::Delete => "HttpDeleteAttribute",
            Self::Patch => "HttpPatchAttribute",
            Self::Head => "HttpHeadAttribute",
            Self::Options => "HttpOptionsAttribute",
        }
    }
}

/// Developer and version information attached to a type or a member.
///
/// `description` and `last_modified` default to empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeveloperInfo {
    pub author: &'static str,
    pub version: &'static str,
    pub description: &'static str,
    pub last_modified: &'static str,
}

impl DeveloperInfo {
    pub const fn new(author: &'static str, version: &'static str) -> Self {
        Self {
            author,
            version,
            description: "",
            last_modified: "",
        }
    }

    pub const fn description(self, description: &'static str) -> Self {
        Self {
            description,
            ..self
        }
    }

    pub const fn last_modified(self, last_modified: &'static str) -> Self {
        Self {
            last_modified,
            ..self
        }
    }
}

/// Literal value as written in a declaration
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Literal {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(&'static str),
}

impl Literal {
    /// Stringified form, `None` for null
    pub fn render(&self) -> Option<String> {
        match self {
            Self::Null => None,
            Self::Bool(v) => Some(v.to_string()),
            Self::Int(v) => Some(v.to_string()),
            Self::Float(v) => Some(v.to_string()),
            Self::Text(v) => Some((*v).to_string()),
        }
    }
}

/// Failure to read a property of an annotation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PropertyReadError {
    #[error("property `{name}` cannot be read: {reason}")]
    Unreadable { name: String, reason: String },
}

/// Stored value of an annotation property
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PropertyValue {
    Value(Literal),
    /// The property exists but its accessor fails
    Unreadable(&'static str),
}

/// Named property of an annotation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropertyDef {
    pub name: &'static str,
    pub value: PropertyValue,
}

impl PropertyDef {
    pub const fn new(name: &'static str, value: Literal) -> Self {
        Self {
            name,
            value: PropertyValue::Value(value),
        }
    }

    pub const fn text(name: &'static str, value: &'static str) -> Self {
        Self::new(name, Literal::Text(value))
    }

    pub const fn unreadable(name: &'static str, reason: &'static str) -> Self {
        Self {
            name,
            value: PropertyValue::Unreadable(reason),
        }
    }

    /// Read the stringified value of the property
    pub fn read(&self) -> Result<Option<String>, PropertyReadError> {
        match self.value {
            PropertyValue::Value(literal) => Ok(literal.render()),
            PropertyValue::Unreadable(reason) => Err(PropertyReadError::Unreadable {
                name: self.name.to_string(),
                reason: reason.to_string(),
            }),
        }
    }
}

/// Annotation kind not known to the introspection layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CustomAnnotation {
    pub type_name: &'static str,
    pub namespace: Option<&'static str>,
    pub properties: &'static [PropertyDef],
}

impl CustomAnnotation {
    pub const fn new(type_name: &'static str, namespace: &'static str) -> Self {
        Self {
            type_name,
            namespace: Some(namespace),
            properties: &[],
        }
    }

    pub const fn with_properties(self, properties: &'static [PropertyDef]) -> Self {
        Self { properties, ..self }
    }
}

/// Annotation instance attached to an entity, member or parameter
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Annotation {
    /// HTTP verb marker with an optional route template
    Http {
        verb: HttpVerb,
        template: Option<&'static str>,
    },
    /// Route template marker
    Route { template: &'static str },
    /// Marks an entity as an API controller
    ApiController,
    /// Marks a parameter as bound from the request body
    FromBody,
    DeveloperInfo(DeveloperInfo),
    Custom(CustomAnnotation),
}

impl Annotation {
    pub const fn get(template: &'static str) -> Self {
        Self::Http {
            verb: HttpVerb::Get,
            template: Some(template),
        }
    }

    pub const fn post(template: &'static str) -> Self {
        Self::Http {
            verb: HttpVerb::Post,
            template: Some(template),
        }
    }

    /// Verb marker without a template
    pub const fn verb(verb: HttpVerb) -> Self {
        Self::Http {
            verb,
            template: None,
        }
    }

    pub const fn route(template: &'static str) -> Self {
        Self::Route { template }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Http { verb, .. } => verb.marker_type_name(),
            Self::Route { .. } => "RouteAttribute",
            Self::ApiController => "ApiControllerAttribute",
            Self::FromBody => "FromBodyAttribute",
            Self::DeveloperInfo(_) => "DeveloperInfoAttribute",
            Self::Custom(custom) => custom.type_name,
        }
    }

    pub fn namespace(&self) -> Option<&'static str> {
        match self {
            Self::Http { .. } | Self::Route { .. } | Self::ApiController | Self::FromBody => {
                Some(WEB_NAMESPACE)
            }
            Self::DeveloperInfo(_) => Some(ANNOTATIONS_NAMESPACE),
            Self::Custom(custom) => custom.namespace,
        }
    }

    /// Readable properties of the annotation, in declaration order
    pub fn properties(&self) -> Vec<PropertyDef> {
        match self {
            Self::Http { verb, template } => vec![
                PropertyDef::new("template", template.map_or(Literal::Null, Literal::Text)),
                PropertyDef::text("httpMethod", verb.as_str()),
            ],
            Self::Route { template } => vec![PropertyDef::text("template", *template)],
            Self::ApiController | Self::FromBody => Vec::new(),
            Self::DeveloperInfo(info) => vec![
                PropertyDef::text("author", info.author),
                PropertyDef::text("version", info.version),
                PropertyDef::text("description", info.description),
                PropertyDef::text("lastModified", info.last_modified),
            ],
            Self::Custom(custom) => custom.properties.to_vec(),
        }
    }

    pub fn http_verb(&self) -> Option<HttpVerb> {
        match self {
            Self::Http { verb, .. } => Some(*verb),
            _ => None,
        }
    }

    pub fn as_developer_info(&self) -> Option<&DeveloperInfo> {
        match self {
            Self::DeveloperInfo(info) => Some(info),
            _ => None,
        }
    }
}
