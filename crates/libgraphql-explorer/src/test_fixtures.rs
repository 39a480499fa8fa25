use crate::document::parse_document;
use crate::document::DefinitionId;
use crate::document::Document;
use crate::schema::Schema;
use crate::schema::SchemaBuilder;
use crate::types::Field;

/// A small package-registry schema shared by the tests in this crate.
pub(crate) const REGISTRY_SDL: &str = r#"
    scalar DateTime

    enum SortDirection {
        ASC
        DESC
    }

    interface Node {
        id: ID!
    }

    type Query {
        name: String
        homepage: String
        package(name: String!): Package
        packages(
            filter: PackageFilter,
            first: Int,
            orderBy: PackageOrder,
            sort: SortDirection = ASC,
        ): [Package!]!
        search(text: String!, limit: Int = 10, fuzzy: Boolean, boost: Float): [SearchResult!]!
        node(id: ID!): Node
        viewer: User
    }

    type Mutation {
        publish(input: PublishInput!): Package
    }

    type Subscription {
        packagePublished: Package
    }

    type Package implements Node {
        id: ID!
        name: String!
        homepage: String
        version: String
        downloads: Int
        legacyName: String @deprecated(reason: "Use `name`.")
        publishedAt: DateTime
        author: User
    }

    type User implements Node {
        id: ID!
        email: String
        name: String
        packages: [Package!]!
    }

    union SearchResult = Package | User

    input PackageFilter {
        nameContains: String
        author: String
        and: PackageFilter
    }

    input PackageOrder {
        field: String!
        direction: SortDirection!
    }

    input PublishInput {
        name: String!
        version: String!
        meta: PublishMeta!
        tags: [String!]
    }

    input PublishMeta {
        license: String!
        private: Boolean!
        downloads: Int
    }
"#;

pub(crate) fn registry_schema() -> Schema {
    SchemaBuilder::from_str(None, REGISTRY_SDL)
        .unwrap()
        .build()
        .unwrap()
}

pub(crate) fn parse(text: &str) -> Document {
    parse_document(text).unwrap()
}

pub(crate) fn field<'schema>(
    schema: &'schema Schema,
    type_name: &str,
    field_name: &str,
) -> &'schema Field {
    schema.field(type_name, field_name).unwrap()
}

pub(crate) const FIRST_DEF: DefinitionId = DefinitionId(0);
