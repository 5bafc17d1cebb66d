use std::cmp::Ordering;

/// A function or constructor extracted from a dump
#[derive(Debug, Clone)]
pub struct Function {
    /// Declared name; constructors report the constructor keyword
    pub name: String,
    /// Rendered text from the leading modifier through the parameter list
    pub signature: String,
    /// Rendered return type; constructors carry none
    pub return_type: Option<String>,
    pub is_static: bool,
    pub is_constructor: bool,
}

impl Function {
    /// Signature plus return type; this is the identity of a function
    pub fn full_signature(&self) -> String {
        match &self.return_type {
            Some(return_type) => format!("{} -> {}", self.signature, return_type),
            None => self.signature.clone(),
        }
    }
}

impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        self.full_signature() == other.full_signature()
    }
}

impl Eq for Function {}

impl Ord for Function {
    fn cmp(&self, other: &Self) -> Ordering {
        // static at the bottom
        match (self.is_static, other.is_static) {
            (true, false) => return Ordering::Greater,
            (false, true) => return Ordering::Less,
            _ => {}
        }
        // constructors first
        match (self.is_constructor, other.is_constructor) {
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            _ => {}
        }
        let own = self.full_signature();
        let others = other.full_signature();
        if self.is_constructor {
            // shortest constructor first, then lexical
            (own.len(), own.as_str()).cmp(&(others.len(), others.as_str()))
        } else {
            (self.name.as_str(), own.as_str()).cmp(&(other.name.as_str(), others.as_str()))
        }
    }
}

impl PartialOrd for Function {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A property extracted from a dump or reduced from accessor functions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    pub name: String,
    pub type_name: String,
    pub is_writable: bool,
    pub is_static: bool,
}

impl Property {
    /// Rendered entry line; the read-only keyword comes from the parse invocation
    pub fn render(&self, readonly_keyword: &str) -> String {
        let mut parts = Vec::new();
        if self.is_static {
            parts.push("static");
        }
        parts.push(if self.is_writable { "var" } else { readonly_keyword });
        let declaration = format!("{}: {}", self.name, self.type_name);
        parts.push(&declaration);
        parts.join(" ")
    }
}

impl Ord for Property {
    fn cmp(&self, other: &Self) -> Ordering {
        // static at the bottom, then by name
        (self.is_static, self.name.as_str(), self.type_name.as_str(), self.is_writable).cmp(&(
            other.is_static,
            other.name.as_str(),
            other.type_name.as_str(),
            other.is_writable,
        ))
    }
}

impl PartialOrd for Property {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
