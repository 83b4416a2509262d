pub mod corpus;
pub mod document;
pub mod driver;
pub mod generator;
