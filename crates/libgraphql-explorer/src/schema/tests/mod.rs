mod introspection_tests;
mod schema_tests;
