//! Declaration of `SampleService` for the introspection registry

use contracts::shared::metadata::{
    Annotation, DeveloperInfo, EntityDef, Introspect, MemberDef, ParamDef, TypeRef, I32, STRING,
    UNIT,
};

use super::service::SampleService;

pub const SAMPLE_SERVICE: EntityDef = EntityDef::new("SampleService", env!("CARGO_PKG_NAME"))
    .in_namespace("attrmap::domain::sample_service")
    .annotated(&[Annotation::DeveloperInfo(
        DeveloperInfo::new("Eda", "1.0.0")
            .description("Sample service with CRUD operations")
            .last_modified("2024-01-15"),
    )])
    .members(&[
        MemberDef::method("get_all_items", UNIT).annotated(&[Annotation::DeveloperInfo(
            DeveloperInfo::new("Eda", "1.0.0").description("Lists all items"),
        )]),
        MemberDef::method("get_item_by_id", UNIT)
            .params(&[ParamDef::new("id", I32)])
            .annotated(&[Annotation::DeveloperInfo(
                DeveloperInfo::new("Eda", "1.1.0")
                    .description("Gets an item by id")
                    .last_modified("2024-01-10"),
            )]),
        MemberDef::method("add_item", UNIT)
            .params(&[ParamDef::new("name", STRING)])
            .annotated(&[Annotation::DeveloperInfo(
                DeveloperInfo::new("Eda", "1.2.0").description("Adds a new item"),
            )]),
        MemberDef::method("delete_item", UNIT)
            .params(&[ParamDef::new("id", I32)])
            .annotated(&[Annotation::DeveloperInfo(
                DeveloperInfo::new("Eda", "1.0.0").description("Deletes an item"),
            )]),
        MemberDef::method("new", TypeRef::named("SampleService")).associated(),
    ]);

impl Introspect for SampleService {
    fn entity_def() -> &'static EntityDef {
        &SAMPLE_SERVICE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::introspection::{render_text_report, survey_members};

    #[test]
    fn test_declaration_matches_methods() {
        let def = SampleService::entity_def();
        let names: Vec<_> = def.surface_members().map(|m| m.name).collect();
        assert_eq!(
            names,
            vec!["get_all_items", "get_item_by_id", "add_item", "delete_item"]
        );

        crate::domain::sample_service::run_sample();
    }

    #[test]
    fn test_sample_report() {
        let text = render_text_report(&survey_members(&SAMPLE_SERVICE)).unwrap();

        assert!(text.contains("Type Name: SampleService"));
        assert!(text.contains("Full Name: attrmap::domain::sample_service::SampleService"));
        assert!(text.contains("|  Last Modified : 2024-01-15"));
        assert!(text.contains("> Member #2: get_item_by_id"));
        assert!(text.contains("   -> Parameters   : i32 id"));
        assert!(text.contains("   -> Parameters   : String name"));
        assert!(text.contains("   -> Version      : 1.2.0"));
        assert!(text.contains("SUMMARY: 4 members scanned, 4 annotated."));
    }
}
