mod errors;
mod import_engine;
#[cfg(test)]
mod tests;

pub use errors::ImportError;
pub use import_engine::ImportEngine;
