//! Controller declarations for the introspection registry
//!
//! Each HTTP controller is a unit type whose `EntityDef` mirrors the routes
//! registered in `system::api::routes`.

use contracts::shared::metadata::{
    Annotation, Capability, DeveloperInfo, EntityDef, Introspect, MemberDef, TypeRef,
};

const NAMESPACE: &str = "attrmap::system::api";

const METADATA_MAP: TypeRef =
    TypeRef::named("MetadataMap").in_namespace("contracts::system::attribute_map");

const JSON_METADATA_MAP: TypeRef = TypeRef::generic("Json`1", &[METADATA_MAP])
    .in_namespace("axum")
    .with_capabilities(&[Capability::ActionResult]);

const STATIC_STR: TypeRef = TypeRef::named("&str");

/// Common base of the API controllers
pub struct ApiControllerBase;

pub const API_CONTROLLER_BASE: EntityDef =
    EntityDef::new("ApiControllerBase", env!("CARGO_PKG_NAME"))
        .in_namespace(NAMESPACE)
        .with_capabilities(&[Capability::Controller])
        .abstract_entity()
        .annotated(&[Annotation::ApiController]);

impl Introspect for ApiControllerBase {
    fn entity_def() -> &'static EntityDef {
        &API_CONTROLLER_BASE
    }
}

/// System endpoints: health check and the attribute map
pub struct SystemController;

pub const SYSTEM_CONTROLLER: EntityDef = EntityDef::new("SystemController", env!("CARGO_PKG_NAME"))
    .in_namespace(NAMESPACE)
    .with_capabilities(&[Capability::Controller])
    .annotated(&[
        Annotation::ApiController,
        Annotation::route("api/system"),
        Annotation::DeveloperInfo(
            DeveloperInfo::new("Eda", "1.0.0").description("Attribute map of the API"),
        ),
    ])
    .members(&[
        MemberDef::method("get_attribute_map", JSON_METADATA_MAP).annotated(&[
            Annotation::get("attribute-map"),
            Annotation::DeveloperInfo(
                DeveloperInfo::new("Eda", "1.0.0").description("Controllers and actions of the API"),
            ),
        ]),
        MemberDef::method("health", STATIC_STR).annotated(&[Annotation::get("/health")]),
    ]);

impl Introspect for SystemController {
    fn entity_def() -> &'static EntityDef {
        &SYSTEM_CONTROLLER
    }
}
