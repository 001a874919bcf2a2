pub mod header;
pub mod projects;
pub mod sections;
