pub mod defaults;
pub mod document;
pub mod edit;
mod explorer;
mod file_reader;
mod fragment_registry;
pub mod loc;
mod policy;
pub mod schema;
#[cfg(test)]
mod test_fixtures;
#[cfg(test)]
mod tests;
pub mod types;

pub use explorer::Explorer;
pub use fragment_registry::FragmentRegistry;
pub use policy::default_field_names;
pub use policy::DefaultExplorerPolicy;
pub use policy::ExplorerPolicy;
