// Public API exports
pub mod model;
pub mod normalize;
pub mod parser;
pub mod render;

// Re-export main types for convenience
pub use model::{Api, Function, Property, ReadonlyKeyword, Type, TypeKind};

pub use parser::{DumpFormat, DumpParser, ParseError, ParseOptions, ParserRegistry};

pub use render::{OrderMode, RenderOptions};
