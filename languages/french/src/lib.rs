pub mod loader;

pub use loader::FrenchPackLoader;

pub const LANGUAGE_CODE: &str = "fr";
