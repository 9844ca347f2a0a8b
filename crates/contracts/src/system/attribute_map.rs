use chrono::{DateTime, Utc};
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

// ============================================================================
// Attribute info
// ============================================================================

/// Ordered property bag of an attribute (name -> stringified value).
///
/// Serialized as a JSON object whose keys keep insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyMap(Vec<(String, Option<String>)>);

impl PropertyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a property; an existing key keeps its position and gets the new value
    pub fn insert(&mut self, name: impl Into<String>, value: Option<String>) {
        let name = name.into();
        match self.0.iter_mut().find(|(k, _)| *k == name) {
            Some(entry) => entry.1 = value,
            None => self.0.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<Option<&str>> {
        self.0
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_deref())
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.0.iter().any(|(k, _)| k == name)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_deref()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for PropertyMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in &self.0 {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for PropertyMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct PropertyMapVisitor;

        impl<'de> Visitor<'de> for PropertyMapVisitor {
            type Value = PropertyMap;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of property names to string values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<PropertyMap, A::Error> {
                let mut map = PropertyMap::new();
                while let Some((key, value)) = access.next_entry::<String, Option<String>>()? {
                    map.insert(key, value);
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(PropertyMapVisitor)
    }
}

/// Structured representation of one annotation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeInfo {
    /// Annotation kind, `Attribute` suffix stripped
    pub name: String,
    pub fully_qualified_name: String,
    pub properties: PropertyMap,
}

// ============================================================================
// Descriptors
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterDescriptor {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
    pub is_optional: bool,
    pub default_value: Option<String>,
    pub attributes: Vec<AttributeInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionDescriptor {
    pub name: String,
    pub return_type: String,
    pub route_template: Option<String>,
    pub http_methods: Vec<String>,
    pub parameters: Vec<ParameterDescriptor>,
    pub attributes: Vec<AttributeInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityDescriptor {
    pub name: String,
    pub fully_qualified_name: String,
    pub namespace_path: String,
    pub route_template: String,
    pub entity_attributes: Vec<AttributeInfo>,
    pub actions: Vec<ActionDescriptor>,
}

// ============================================================================
// Metadata map (report root)
// ============================================================================

/// Aggregate report over all introspected entities.
///
/// Totals are derived from `entities` on construction and deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "MetadataMapWire")]
pub struct MetadataMap {
    origin_system_name: String,
    generated_at_timestamp: DateTime<Utc>,
    total_entities: usize,
    total_actions: usize,
    entities: Vec<EntityDescriptor>,
}

impl MetadataMap {
    pub fn new(
        origin_system_name: impl Into<String>,
        generated_at_timestamp: DateTime<Utc>,
        entities: Vec<EntityDescriptor>,
    ) -> Self {
        Self {
            origin_system_name: origin_system_name.into(),
            generated_at_timestamp,
            total_entities: entities.len(),
            total_actions: entities.iter().map(|e| e.actions.len()).sum(),
            entities,
        }
    }

    pub fn origin_system_name(&self) -> &str {
        &self.origin_system_name
    }

    pub fn generated_at_timestamp(&self) -> DateTime<Utc> {
        self.generated_at_timestamp
    }

    pub fn total_entities(&self) -> usize {
        self.total_entities
    }

    pub fn total_actions(&self) -> usize {
        self.total_actions
    }

    pub fn entities(&self) -> &[EntityDescriptor] {
        &self.entities
    }

    pub fn into_entities(self) -> Vec<EntityDescriptor> {
        self.entities
    }
}

/// Incoming shape of a metadata map; totals in the payload are ignored
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct MetadataMapWire {
    origin_system_name: String,
    generated_at_timestamp: DateTime<Utc>,
    entities: Vec<EntityDescriptor>,
}

impl From<MetadataMapWire> for MetadataMap {
    fn from(wire: MetadataMapWire) -> Self {
        Self::new(
            wire.origin_system_name,
            wire.generated_at_timestamp,
            wire.entities,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn action(name: &str) -> ActionDescriptor {
        ActionDescriptor {
            name: name.to_string(),
            return_type: "ActionResult".to_string(),
            route_template: None,
            http_methods: vec!["GET".to_string()],
            parameters: Vec::new(),
            attributes: Vec::new(),
        }
    }

    fn entity(name: &str, actions: usize) -> EntityDescriptor {
        EntityDescriptor {
            name: name.to_string(),
            fully_qualified_name: format!("demo::{}", name),
            namespace_path: "demo".to_string(),
            route_template: name.to_lowercase(),
            entity_attributes: Vec::new(),
            actions: (0..actions).map(|i| action(&format!("a{}", i))).collect(),
        }
    }

    #[test]
    fn test_totals_are_derived() {
        let map = MetadataMap::new(
            "demo",
            Utc::now(),
            vec![entity("One", 2), entity("Two", 0), entity("Three", 3)],
        );
        assert_eq!(map.total_entities(), 3);
        assert_eq!(map.total_actions(), 5);
    }

    #[test]
    fn test_empty_map() {
        let map = MetadataMap::new("demo", Utc::now(), Vec::new());
        assert_eq!(map.total_entities(), 0);
        assert_eq!(map.total_actions(), 0);
    }

    #[test]
    fn test_serialized_field_names() {
        let map = MetadataMap::new("demo", Utc::now(), vec![entity("One", 1)]);
        let json = serde_json::to_value(&map).unwrap();

        assert_eq!(json["originSystemName"], "demo");
        assert_eq!(json["totalEntities"], 1);
        assert_eq!(json["totalActions"], 1);
        assert!(json["generatedAtTimestamp"].is_string());

        let e = &json["entities"][0];
        assert_eq!(e["fullyQualifiedName"], "demo::One");
        assert_eq!(e["namespacePath"], "demo");
        assert!(e["entityAttributes"].is_array());
        assert_eq!(e["actions"][0]["httpMethods"][0], "GET");
        assert!(e["actions"][0]["routeTemplate"].is_null());
    }

    #[test]
    fn test_deserialize_recomputes_totals() {
        let map = MetadataMap::new("demo", Utc::now(), vec![entity("One", 2)]);
        let mut json = serde_json::to_value(&map).unwrap();
        json["totalEntities"] = serde_json::json!(40);
        json["totalActions"] = serde_json::json!(99);

        let back: MetadataMap = serde_json::from_value(json).unwrap();
        assert_eq!(back.total_entities(), 1);
        assert_eq!(back.total_actions(), 2);
        assert_eq!(back, map);
    }

    #[test]
    fn test_property_map_keeps_insertion_order() {
        let mut props = PropertyMap::new();
        props.insert("zeta", Some("1".to_string()));
        props.insert("alpha", None);
        props.insert("mid", Some("x".to_string()));
        props.insert("zeta", Some("2".to_string()));

        assert_eq!(props.keys().collect::<Vec<_>>(), vec!["zeta", "alpha", "mid"]);
        assert_eq!(props.get("zeta"), Some(Some("2")));
        assert_eq!(props.get("alpha"), Some(None));
        assert_eq!(props.get("missing"), None);

        let json = serde_json::to_string(&props).unwrap();
        assert_eq!(json, r#"{"zeta":"2","alpha":null,"mid":"x"}"#);

        let back: PropertyMap = serde_json::from_str(&json).unwrap();
        assert_eq!(back, props);
    }

    #[test]
    fn test_parameter_type_field_name() {
        let param = ParameterDescriptor {
            name: "id".to_string(),
            type_name: "i32".to_string(),
            is_optional: false,
            default_value: None,
            attributes: Vec::new(),
        };
        let json = serde_json::to_value(&param).unwrap();
        assert_eq!(json["type"], "i32");
        assert_eq!(json["isOptional"], false);
        assert!(json["defaultValue"].is_null());
    }
}
