use super::{DumpParser, KotlinBcvParser, ParseOptions, SwiftInterfaceParser};
use std::collections::HashMap;

/// Which dump grammar an input uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DumpFormat {
    /// Module-interface dump: brace-delimited declarations with full type annotations
    SwiftInterface,
    /// Binary-compatibility-validator dump: JVM descriptor syntax
    KotlinBcv,
}

/// Dispatch table mapping dump formats to their grammar parsers
pub struct ParserRegistry {
    map: HashMap<DumpFormat, Box<dyn DumpParser>>,
}

impl ParserRegistry {
    /// Create a registry with both grammar parsers configured by `options`
    pub fn new(options: ParseOptions) -> Self {
        let mut registry = Self { map: HashMap::new() };
        registry.register(DumpFormat::SwiftInterface, SwiftInterfaceParser::new(options));
        registry.register(DumpFormat::KotlinBcv, KotlinBcvParser::new(options));
        registry
    }

    /// Register a parser for a dump format, replacing any previous entry
    pub fn register(&mut self, format: DumpFormat, parser: impl DumpParser + 'static) {
        self.map.insert(format, Box::new(parser));
    }

    /// Select the parser for `format`
    pub fn select(&self, format: DumpFormat) -> Option<&dyn DumpParser> {
        self.map.get(&format).map(|parser| &**parser)
    }

    /// Number of registered parsers
    pub fn parser_count(&self) -> usize {
        self.map.len()
    }
}
