pub mod loader;

pub use loader::SpanishPackLoader;

pub const LANGUAGE_CODE: &str = "es";
