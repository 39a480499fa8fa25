use crate::document::Definition;
use crate::document::DefinitionId;
use crate::document::Document;
use crate::document::FieldPath;
use crate::document::ArgumentPath;
use crate::document::OperationKind;
use crate::test_fixtures::parse;

mod basics {
    use super::*;

    #[test]
    fn default_document_is_a_single_placeholder_query() {
        let doc = Document::default_document();
        assert!(doc.is_default_document());
        assert_eq!(doc.definitions.len(), 1);

        let op = doc.definitions[0].as_operation().unwrap();
        assert_eq!(op.kind, OperationKind::Query);
        assert_eq!(op.name.as_deref(), Some("MyQuery"));
        assert_eq!(op.selections.len(), 1);
        assert!(op.selections[0].is_field_named("__typename"));
    }

    #[test]
    fn parsed_document_is_not_the_default_document() {
        let doc = parse("query MyQuery { name }");
        assert!(!doc.is_default_document());
    }

    #[test]
    fn definitions_are_addressed_by_position() {
        let doc = parse(
            "query A { name }
             fragment F on Package { name }
             mutation B { publish(input: {}) { id } }",
        );

        assert_eq!(doc.find_definition("A"), Some(DefinitionId(0)));
        assert_eq!(doc.find_definition("F"), Some(DefinitionId(1)));
        assert_eq!(doc.find_definition("B"), Some(DefinitionId(2)));
        assert_eq!(doc.find_definition("C"), None);

        let op_ids: Vec<DefinitionId> = doc.operations().map(|(id, _)| id).collect();
        assert_eq!(op_ids, vec![DefinitionId(0), DefinitionId(2)]);
        let frag_ids: Vec<DefinitionId> = doc.fragments().map(|(id, _)| id).collect();
        assert_eq!(frag_ids, vec![DefinitionId(1)]);
    }

    #[test]
    fn kind_str_names_fragments_and_operation_kinds() {
        let doc = parse(
            "subscription S { packagePublished { id } }
             fragment F on Package { id }",
        );
        assert_eq!(doc.definitions[0].kind_str(), "subscription");
        assert_eq!(doc.definitions[1].kind_str(), "fragment");
        assert!(matches!(doc.definitions[1], Definition::Fragment(_)));
    }

    #[test]
    fn count_variable_uses_ignores_the_declaration() {
        let doc = parse(
            "query Q($first: Int, $unused: String) {
                packages(first: $first, filter: {and: {author: $first}}) { id }
                viewer @include(if: $first) { id }
            }",
        );
        let op = doc.definitions[0].as_operation().unwrap();
        assert_eq!(op.count_variable_uses("first"), 3);
        assert_eq!(op.count_variable_uses("unused"), 0);
    }
}

mod paths {
    use super::*;

    #[test]
    fn dotted_field_paths() {
        let path = FieldPath::parse_dotted("viewer.packages.name");
        assert_eq!(path.segments(), ["viewer", "packages", "name"]);
        assert_eq!(path.last(), Some("name"));
        assert_eq!(path.parent(), Some(FieldPath::new(["viewer", "packages"])));
        assert_eq!(path.to_string(), "viewer.packages.name");

        assert!(FieldPath::parse_dotted("").is_root());
        assert_eq!(FieldPath::root().parent(), None);
        assert_eq!(FieldPath::root().to_string(), "<root>");
    }

    #[test]
    fn argument_paths_descend_into_input_fields() {
        let arg_path = ArgumentPath::new(FieldPath::new(["packages"]), "filter");
        assert_eq!(arg_path.leaf_name(), "filter");
        assert_eq!(arg_path.parent(), None);

        let nested = arg_path.input_field("and").input_field("author");
        assert_eq!(nested.leaf_name(), "author");
        assert_eq!(nested.parent(), Some(arg_path.input_field("and")));
        assert_eq!(nested.to_string(), "packages(filter.and.author:)");
    }
}
