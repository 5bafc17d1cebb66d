mod blocks;
mod error;
mod kotlin_bcv;
mod registry;
mod swift_interface;

pub use error::ParseError;
pub use kotlin_bcv::KotlinBcvParser;
pub use registry::{DumpFormat, ParserRegistry};
pub use swift_interface::SwiftInterfaceParser;

use crate::model::Api;
use regex::Regex;

/// Core trait that both dump grammar parsers implement
pub trait DumpParser: Send + Sync {
    /// Parse one dump document into a populated API model
    ///
    /// Unrecognized lines and blocks are skipped; the only fatal error is an
    /// extension whose base type cannot be resolved.
    fn parse(&self, content: &str) -> Result<Api, ParseError>;
}

/// Configuration for a single parse invocation
#[derive(Debug, Clone, Copy, Default)]
pub struct ParseOptions {
    /// Retain only the last dotted component of type references
    pub strip_packages: bool,
    /// Rewrite binary-compatibility output into the declarative keyword style
    pub normalize: bool,
}

/// Rewrites `Pkg.Sub.Name` references to their last dotted component
pub(crate) struct PackageStripper {
    enabled: bool,
    qualified: Regex,
}

impl PackageStripper {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            qualified: Regex::new(r"(?:\w+\.)+(\w+)").unwrap(),
        }
    }

    pub fn apply(&self, text: &str) -> String {
        if !self.enabled {
            return text.to_string();
        }
        self.qualified.replace_all(text, "$1").into_owned()
    }
}
