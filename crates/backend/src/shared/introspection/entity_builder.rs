//! Entity descriptor builder
//!
//! Walks the surface members of a declared entity (public, instance-level,
//! declared directly on it) and produces the descriptors of the metadata map.

use contracts::shared::metadata::{
    Capability, DeveloperInfo, EntityDef, HttpVerb, MemberDef, ParamDef, TypeRef,
};
use contracts::system::attribute_map::{ActionDescriptor, EntityDescriptor, ParameterDescriptor};

use super::attribute_extractor::extract_attributes;
use super::type_name::friendly_name;
use super::{ActionRecognition, IntrospectionOptions};

/// Build the descriptor of one entity and its actions
pub fn build_entity_descriptor(
    entity: &EntityDef,
    options: &IntrospectionOptions,
) -> EntityDescriptor {
    let actions = entity
        .surface_members()
        .filter(|member| is_action(member, options.action_recognition))
        .map(|member| build_action_descriptor(member, options))
        .collect();

    EntityDescriptor {
        name: entity.name.to_string(),
        fully_qualified_name: entity.full_name(),
        namespace_path: entity.namespace.unwrap_or("Unknown").to_string(),
        route_template: entity
            .route_template()
            .map(str::to_string)
            .unwrap_or_else(|| route_placeholder(entity.name)),
        entity_attributes: extract_attributes(
            entity.annotations,
            &options.reserved_namespace_prefixes,
        ),
        actions,
    }
}

/// Route used when the entity declares none: `OrdersController` -> `orders`
fn route_placeholder(name: &str) -> String {
    name.strip_suffix("Controller")
        .filter(|stem| !stem.is_empty())
        .unwrap_or(name)
        .to_lowercase()
}

/// Whether a member is an externally invokable action
pub fn is_action(member: &MemberDef, recognition: ActionRecognition) -> bool {
    if member.has_http_marker() || returns_action_result(&member.return_type) {
        return true;
    }

    match recognition {
        ActionRecognition::Capability => false,
        ActionRecognition::NamePrefix => {
            let name = member.return_type.simple_name();
            name.starts_with("ActionResult") || name.starts_with("Task")
        }
    }
}

fn returns_action_result(ty: &TypeRef) -> bool {
    if ty.has_capability(Capability::ActionResult) {
        return true;
    }

    ty.has_capability(Capability::AsyncWrapper)
        && ty
            .args
            .first()
            .is_some_and(|inner| inner.has_capability(Capability::ActionResult))
}

/// Build the descriptor of one action member
///
/// Verbs are checked GET, POST, PUT, DELETE, PATCH; the first marker with a
/// template sets `routeTemplate`. HEAD and OPTIONS are only tagged when
/// `report_head_and_options` is set.
pub fn build_action_descriptor(
    member: &MemberDef,
    options: &IntrospectionOptions,
) -> ActionDescriptor {
    let extra: &[HttpVerb] = if options.report_head_and_options {
        &HttpVerb::UNREPORTED
    } else {
        &[]
    };

    let mut http_methods = Vec::new();
    let mut route_template = None;
    for verb in HttpVerb::REPORTED.iter().chain(extra) {
        if let Some(template) = member.http_marker(*verb) {
            http_methods.push(verb.as_str().to_string());
            if route_template.is_none() {
                route_template = template.map(str::to_string);
            }
        }
    }

    let reserved = &options.reserved_namespace_prefixes;
    ActionDescriptor {
        name: member.name.to_string(),
        return_type: friendly_name(&member.return_type),
        route_template,
        http_methods,
        parameters: member
            .parameters
            .iter()
            .map(|p| build_parameter_descriptor(p, reserved))
            .collect(),
        attributes: extract_attributes(member.annotations, reserved),
    }
}

fn build_parameter_descriptor(param: &ParamDef, reserved: &[String]) -> ParameterDescriptor {
    ParameterDescriptor {
        name: param.name.unwrap_or("unknown").to_string(),
        type_name: friendly_name(&param.ty),
        is_optional: param.is_optional(),
        default_value: param.default.and_then(|d| d.render()),
        attributes: extract_attributes(param.annotations, reserved),
    }
}

// ============================================================================
// Member survey (console report)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurveyedParameter {
    pub name: String,
    pub type_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurveyedMember {
    pub name: String,
    pub return_type: String,
    pub parameters: Vec<SurveyedParameter>,
    pub developer_info: Option<DeveloperInfo>,
}

/// Every surface member of an entity with its developer annotation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberSurvey {
    pub entity_name: String,
    pub full_name: String,
    pub namespace: String,
    pub origin: String,
    pub developer_info: Option<DeveloperInfo>,
    pub members: Vec<SurveyedMember>,
}

impl MemberSurvey {
    pub fn scanned(&self) -> usize {
        self.members.len()
    }

    /// Members carrying a developer annotation, in declaration order
    pub fn annotated(&self) -> impl Iterator<Item = (&SurveyedMember, &DeveloperInfo)> {
        self.members
            .iter()
            .filter_map(|m| m.developer_info.as_ref().map(|info| (m, info)))
    }
}

/// Collect the surface members of an entity regardless of action recognition
pub fn survey_members(entity: &EntityDef) -> MemberSurvey {
    let members = entity
        .surface_members()
        .map(|member| SurveyedMember {
            name: member.name.to_string(),
            return_type: friendly_name(&member.return_type),
            parameters: member
                .parameters
                .iter()
                .map(|p| SurveyedParameter {
                    name: p.name.unwrap_or("unknown").to_string(),
                    type_name: friendly_name(&p.ty),
                })
                .collect(),
            developer_info: member.developer_info().copied(),
        })
        .collect();

    MemberSurvey {
        entity_name: entity.name.to_string(),
        full_name: entity.full_name(),
        namespace: entity.namespace.unwrap_or_default().to_string(),
        origin: entity.origin.to_string(),
        developer_info: entity.developer_info().copied(),
        members,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::metadata::{
        Annotation, CustomAnnotation, Literal, I32, STRING, UNIT,
    };

    const ACTION_RESULT: TypeRef =
        TypeRef::named("ActionResult").with_capabilities(&[Capability::ActionResult]);
    const TASK_OF_RESULT: TypeRef = TypeRef::generic("Task`1", &[ACTION_RESULT])
        .with_capabilities(&[Capability::AsyncWrapper]);
    const TASK_OF_INT: TypeRef =
        TypeRef::generic("Task`1", &[I32]).with_capabilities(&[Capability::AsyncWrapper]);

    const COMPILER_GENERATED: Annotation = Annotation::Custom(CustomAnnotation::new(
        "AsyncStateMachineAttribute",
        "system::runtime::compiler_services",
    ));

    const ORDERS: EntityDef = EntityDef::new("OrdersController", "tests")
        .in_namespace("tests::orders")
        .with_capabilities(&[Capability::Controller])
        .annotated(&[Annotation::ApiController, COMPILER_GENERATED])
        .members(&[
            MemberDef::method("List", ACTION_RESULT).annotated(&[Annotation::verb(HttpVerb::Get)]),
            MemberDef::method("Upsert", ACTION_RESULT)
                .params(&[
                    ParamDef::new("id", I32),
                    ParamDef::new("note", STRING).with_default(Literal::Text("none")),
                ])
                .annotated(&[
                    Annotation::get("{id}"),
                    Annotation::post("upsert"),
                    COMPILER_GENERATED,
                ]),
            MemberDef::method("Ping", UNIT).annotated(&[Annotation::verb(HttpVerb::Head)]),
            MemberDef::method("Load", TASK_OF_RESULT),
            MemberDef::method("Count", TASK_OF_INT),
            MemberDef::method("Helper", I32),
            MemberDef::method("Secret", ACTION_RESULT).private(),
            MemberDef::method("Create", ACTION_RESULT).associated(),
            MemberDef::method("Ok", ACTION_RESULT).inherited_from("ControllerBase"),
        ]);

    fn action_names(descriptor: &EntityDescriptor) -> Vec<&str> {
        descriptor.actions.iter().map(|a| a.name.as_str()).collect()
    }

    fn action<'a>(descriptor: &'a EntityDescriptor, name: &str) -> &'a ActionDescriptor {
        descriptor
            .actions
            .iter()
            .find(|a| a.name == name)
            .unwrap()
    }

    #[test]
    fn test_entity_identity() {
        let d = build_entity_descriptor(&ORDERS, &IntrospectionOptions::default());
        assert_eq!(d.name, "OrdersController");
        assert_eq!(d.fully_qualified_name, "tests::orders::OrdersController");
        assert_eq!(d.namespace_path, "tests::orders");
        assert_eq!(d.route_template, "orders");
    }

    #[test]
    fn test_entity_without_namespace_or_route() {
        const BARE: EntityDef = EntityDef::new("Plain", "tests")
            .members(&[MemberDef::method("Helper", UNIT), MemberDef::method("Other", I32)]);

        let d = build_entity_descriptor(&BARE, &IntrospectionOptions::default());
        assert_eq!(d.fully_qualified_name, "Plain");
        assert_eq!(d.namespace_path, "Unknown");
        assert_eq!(d.route_template, "plain");
        assert!(d.actions.is_empty());
        assert!(d.entity_attributes.is_empty());
    }

    #[test]
    fn test_route_marker_wins_over_placeholder() {
        const ROUTED: EntityDef =
            EntityDef::new("ItemsController", "tests").annotated(&[Annotation::route("api/items")]);

        let d = build_entity_descriptor(&ROUTED, &IntrospectionOptions::default());
        assert_eq!(d.route_template, "api/items");
        assert_eq!(d.entity_attributes[0].name, "Route");
    }

    #[test]
    fn test_route_placeholder() {
        assert_eq!(route_placeholder("SystemController"), "system");
        assert_eq!(route_placeholder("Reports"), "reports");
        assert_eq!(route_placeholder("Controller"), "controller");
    }

    #[test]
    fn test_capability_recognition() {
        let d = build_entity_descriptor(&ORDERS, &IntrospectionOptions::default());
        assert_eq!(action_names(&d), vec!["List", "Upsert", "Ping", "Load"]);
    }

    #[test]
    fn test_name_prefix_recognition() {
        let options = IntrospectionOptions {
            action_recognition: ActionRecognition::NamePrefix,
            ..IntrospectionOptions::default()
        };

        let d = build_entity_descriptor(&ORDERS, &options);
        assert_eq!(action_names(&d), vec!["List", "Upsert", "Ping", "Load", "Count"]);
        assert!(!is_action(&ORDERS.members[4], ActionRecognition::Capability));
        assert!(is_action(&ORDERS.members[4], ActionRecognition::NamePrefix));
    }

    #[test]
    fn test_hidden_members_never_become_actions() {
        for recognition in [ActionRecognition::Capability, ActionRecognition::NamePrefix] {
            let options = IntrospectionOptions {
                action_recognition: recognition,
                ..IntrospectionOptions::default()
            };
            let d = build_entity_descriptor(&ORDERS, &options);
            for hidden in ["Secret", "Create", "Ok", "Helper"] {
                assert!(!action_names(&d).contains(&hidden));
            }
        }
    }

    #[test]
    fn test_get_and_post_priority() {
        let d = build_entity_descriptor(&ORDERS, &IntrospectionOptions::default());
        let upsert = action(&d, "Upsert");
        assert_eq!(upsert.http_methods, vec!["GET", "POST"]);
        assert_eq!(upsert.route_template.as_deref(), Some("{id}"));
    }

    #[test]
    fn test_template_from_later_verb() {
        const PUT_ONLY: MemberDef = MemberDef::method("Replace", ACTION_RESULT).annotated(&[
            Annotation::verb(HttpVerb::Get),
            Annotation::Http {
                verb: HttpVerb::Put,
                template: Some("{id}/replace"),
            },
        ]);

        let a = build_action_descriptor(&PUT_ONLY, &IntrospectionOptions::default());
        assert_eq!(a.http_methods, vec!["GET", "PUT"]);
        assert_eq!(a.route_template.as_deref(), Some("{id}/replace"));
    }

    #[test]
    fn test_action_without_template() {
        let d = build_entity_descriptor(&ORDERS, &IntrospectionOptions::default());
        let list = action(&d, "List");
        assert_eq!(list.http_methods, vec!["GET"]);
        assert_eq!(list.route_template, None);

        let load = action(&d, "Load");
        assert!(load.http_methods.is_empty());
        assert_eq!(load.return_type, "Task<ActionResult>");
    }

    #[test]
    fn test_head_only_member() {
        let d = build_entity_descriptor(&ORDERS, &IntrospectionOptions::default());
        assert!(action(&d, "Ping").http_methods.is_empty());

        let options = IntrospectionOptions {
            report_head_and_options: true,
            ..IntrospectionOptions::default()
        };
        let d = build_entity_descriptor(&ORDERS, &options);
        assert_eq!(action(&d, "Ping").http_methods, vec!["HEAD"]);
        assert_eq!(action(&d, "Upsert").http_methods, vec!["GET", "POST"]);
    }

    #[test]
    fn test_parameters() {
        let d = build_entity_descriptor(&ORDERS, &IntrospectionOptions::default());
        let params = &action(&d, "Upsert").parameters;

        assert_eq!(params.len(), 2);
        assert_eq!(params[0].name, "id");
        assert_eq!(params[0].type_name, "i32");
        assert!(!params[0].is_optional);
        assert_eq!(params[0].default_value, None);

        assert_eq!(params[1].name, "note");
        assert!(params[1].is_optional);
        assert_eq!(params[1].default_value.as_deref(), Some("none"));
    }

    #[test]
    fn test_unnamed_parameter() {
        const UNNAMED: MemberDef = MemberDef::method("Raw", ACTION_RESULT).params(&[ParamDef {
            name: None,
            ty: I32,
            default: None,
            annotations: &[Annotation::FromBody],
        }]);

        let a = build_action_descriptor(&UNNAMED, &IntrospectionOptions::default());
        assert_eq!(a.parameters[0].name, "unknown");
        assert_eq!(a.parameters[0].attributes[0].name, "FromBody");
    }

    #[test]
    fn test_reserved_parameter_annotations_dropped() {
        const NULLABLE: Annotation = Annotation::Custom(CustomAnnotation::new(
            "NullableAttribute",
            "system::runtime::compiler_services",
        ));
        const SAVE: MemberDef = MemberDef::method("Save", ACTION_RESULT).params(&[ParamDef {
            name: Some("body"),
            ty: STRING,
            default: None,
            annotations: &[NULLABLE, Annotation::FromBody],
        }]);

        let a = build_action_descriptor(&SAVE, &IntrospectionOptions::default());
        let names: Vec<_> = a.parameters[0]
            .attributes
            .iter()
            .map(|a| a.name.as_str())
            .collect();
        assert_eq!(names, vec!["FromBody"]);

        let unfiltered = IntrospectionOptions {
            reserved_namespace_prefixes: Vec::new(),
            ..IntrospectionOptions::default()
        };
        let a = build_action_descriptor(&SAVE, &unfiltered);
        assert_eq!(a.parameters[0].attributes[0].name, "Nullable");
    }

    #[test]
    fn test_reserved_annotations_filtered_everywhere() {
        let d = build_entity_descriptor(&ORDERS, &IntrospectionOptions::default());

        let entity_names: Vec<_> = d.entity_attributes.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(entity_names, vec!["ApiController"]);

        for a in &d.actions {
            assert!(a
                .attributes
                .iter()
                .all(|a| !a.fully_qualified_name.starts_with("system::runtime")));
        }
        let upsert_names: Vec<_> = action(&d, "Upsert")
            .attributes
            .iter()
            .map(|a| a.name.as_str())
            .collect();
        assert_eq!(upsert_names, vec!["HttpGet", "HttpPost"]);
    }

    #[test]
    fn test_survey_counts_all_surface_members() {
        let survey = survey_members(&ORDERS);
        assert_eq!(survey.scanned(), 6);
        assert_eq!(survey.annotated().count(), 0);
        assert_eq!(survey.full_name, "tests::orders::OrdersController");
        assert_eq!(survey.origin, "tests");

        let upsert = &survey.members[1];
        assert_eq!(upsert.parameters[1].name, "note");
        assert_eq!(upsert.parameters[1].type_name, "String");
    }

    #[test]
    fn test_survey_developer_info() {
        const SERVICE: EntityDef = EntityDef::new("Service", "tests")
            .annotated(&[Annotation::DeveloperInfo(DeveloperInfo::new("Eda", "2.0.0"))])
            .members(&[
                MemberDef::method("Run", UNIT).annotated(&[Annotation::DeveloperInfo(
                    DeveloperInfo::new("Eda", "1.0.0").description("runs"),
                )]),
                MemberDef::method("Stop", UNIT),
            ]);

        let survey = survey_members(&SERVICE);
        assert_eq!(survey.namespace, "");
        assert_eq!(survey.developer_info.map(|i| i.version), Some("2.0.0"));

        let annotated: Vec<_> = survey
            .annotated()
            .map(|(m, i)| (m.name.as_str(), i.description))
            .collect();
        assert_eq!(annotated, vec![("Run", "runs")]);
    }
}
