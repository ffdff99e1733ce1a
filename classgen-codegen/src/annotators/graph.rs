//! Graph-schema field annotations.

use classgen_schema::GeneratorConfig;

use super::{Annotator, FieldContext};
use crate::annotation::{
    Annotation, AnnotationParam, GRAPH_ORIGIN, OptionMap, OptionValue, TypeRef,
};
use crate::error::ConvertResult;
use crate::types::graph_scalar_name;

/// Field annotation name.
pub const FIELD: &str = "Field";

/// Type referenced by identifier fields.
pub const ID_TYPE: &str = "ID";

/// Type referenced by JSON fields.
pub const JSON_OBJECT_TYPE: &str = "GraphQLJSONObject";

/// Emits one graph-schema field annotation per field.
pub struct GraphAnnotator;

impl Annotator for GraphAnnotator {
    fn name(&self) -> &'static str {
        "graph"
    }

    fn is_enabled(&self, config: &GeneratorConfig) -> bool {
        config.use_graph_annotations
    }

    fn annotate(&self, ctx: &FieldContext<'_>) -> ConvertResult<Vec<Annotation>> {
        Ok(vec![field_annotation(ctx)])
    }
}

/// Build the graph field annotation.
///
/// Identifier fields reference `ID` and nothing else. Otherwise the type
/// references accumulate in order (JSON object, mapped scalar, relation,
/// enum), followed by `{nullable: true}` for optional fields.
pub fn field_annotation(ctx: &FieldContext<'_>) -> Annotation {
    let field = ctx.field;
    let mut annotation = Annotation::new(FIELD, GRAPH_ORIGIN);

    if field.is_id {
        return annotation.with_param(AnnotationParam::Deferred(TypeRef::named(ID_TYPE)));
    }

    let is_json = field.is_json();
    if is_json {
        annotation.push_param(AnnotationParam::Deferred(TypeRef::named(JSON_OBJECT_TYPE)));
    }

    if let Some(scalar) = graph_scalar_name(ctx.target).filter(|_| !is_json) {
        annotation.push_param(AnnotationParam::Deferred(TypeRef::new(
            scalar,
            field.is_list,
        )));
    }

    if field.is_relation() || field.is_enum() {
        annotation.push_param(AnnotationParam::Deferred(TypeRef::new(
            field.type_name.clone(),
            field.is_list,
        )));
    }

    if field.is_optional() {
        let mut options = OptionMap::new();
        options.insert("nullable".into(), OptionValue::Bool(true));
        annotation.push_param(AnnotationParam::Options(options));
    }

    annotation
}

#[cfg(test)]
mod tests {
    use super::*;
    use classgen_schema::{Field, ScalarType};
    use pretty_assertions::assert_eq;

    fn annotate(field: &Field) -> Annotation {
        field_annotation(&FieldContext::new("User", field))
    }

    fn rendered(annotation: &Annotation) -> Vec<String> {
        annotation
            .params
            .iter()
            .map(|p| match p {
                AnnotationParam::Deferred(r) => r.to_string(),
                AnnotationParam::Options(map) => format!("{:?}", map.keys().collect::<Vec<_>>()),
                AnnotationParam::Literal(s) => s.clone(),
            })
            .collect()
    }

    #[test]
    fn test_id_short_circuits() {
        let field = Field::scalar("id", ScalarType::Int).id().optional();
        let annotation = annotate(&field);
        assert_eq!(annotation.name, FIELD);
        assert_eq!(annotation.origin, GRAPH_ORIGIN);
        assert_eq!(rendered(&annotation), vec!["(type) => ID"]);
    }

    #[test]
    fn test_scalars() {
        assert_eq!(
            rendered(&annotate(&Field::scalar("age", ScalarType::Int))),
            vec!["(type) => Int"]
        );
        assert_eq!(
            rendered(&annotate(&Field::scalar("price", ScalarType::Float))),
            vec!["(type) => Int"]
        );
        assert_eq!(
            rendered(&annotate(&Field::scalar("name", ScalarType::String))),
            vec!["(type) => String"]
        );
        assert_eq!(
            rendered(&annotate(&Field::scalar("at", ScalarType::DateTime))),
            vec!["(type) => Date"]
        );
        assert_eq!(
            rendered(&annotate(&Field::scalar("tags", ScalarType::String).list())),
            vec!["(type) => [String]"]
        );
    }

    #[test]
    fn test_json() {
        let annotation = annotate(&Field::scalar("meta", ScalarType::Json));
        assert_eq!(rendered(&annotation), vec!["(type) => GraphQLJSONObject"]);
    }

    #[test]
    fn test_list_relation() {
        let field = Field::relation("posts", "Post", "UserPosts").list();
        let annotation = annotate(&field);
        assert_eq!(
            annotation.params,
            vec![AnnotationParam::Deferred(TypeRef::list_of("Post"))]
        );
        assert_eq!(rendered(&annotation), vec!["(type) => [Post]"]);
    }

    #[test]
    fn test_enum_list_is_list_wrapped() {
        let field = Field::enumeration("roles", "Role").list();
        assert_eq!(rendered(&annotate(&field)), vec!["(type) => [Role]"]);
    }

    #[test]
    fn test_optional_appends_nullable() {
        let field = Field::relation("author", "User", "PostAuthor").optional();
        let annotation = annotate(&field);
        assert_eq!(annotation.params.len(), 2);
        assert_eq!(
            annotation.params[0],
            AnnotationParam::Deferred(TypeRef::named("User"))
        );

        let options = annotation.params[1].as_options().unwrap();
        assert_eq!(options.get("nullable"), Some(&OptionValue::Bool(true)));
    }

    #[test]
    fn test_embedded_object_has_only_nullable_when_optional() {
        assert!(annotate(&Field::object("address", "Address")).params.is_empty());
        assert_eq!(
            annotate(&Field::object("address", "Address").optional())
                .params
                .len(),
            1
        );
    }
}
