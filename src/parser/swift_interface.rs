use super::blocks::{scan_items, Block, BlockItem};
use super::{DumpParser, PackageStripper, ParseError, ParseOptions};
use crate::model::{Api, Function, Property, Type, TypeKind};
use regex::Regex;

/// Parser for module-interface dumps
///
/// Walks top-level declaration blocks, recursing into nested type blocks with
/// a growing container path so nested declarations get `Outer.Inner.Leaf`
/// qualified names. Extension blocks merge into an already-parsed base type;
/// resolution is order-sensitive, so an extension preceding its base
/// declaration fails.
pub struct SwiftInterfaceParser {
    stripper: PackageStripper,
    grammar: Grammar,
}

/// Compiled line grammar for the module-interface format
struct Grammar {
    module_marker: Regex,
    class_header: Regex,
    struct_header: Regex,
    protocol_header: Regex,
    enum_header: Regex,
    extension_header: Regex,
    parent_list: Regex,
    property_line: Regex,
    property_block: Regex,
    function_line: Regex,
    internal_labels: Regex,
    case_line: Regex,
    one_line_extension: Regex,
}

impl Grammar {
    fn new() -> Self {
        Self {
            module_marker: Regex::new(r"@_exported import (\w+)").unwrap(),
            class_header: Regex::new(r"public class (\w+)").unwrap(),
            struct_header: Regex::new(r"public struct (\w+)").unwrap(),
            protocol_header: Regex::new(r"public protocol (\w+)").unwrap(),
            enum_header: Regex::new(r"public enum (\w+)").unwrap(),
            extension_header: Regex::new(r"extension ([\w.]+)").unwrap(),
            parent_list: Regex::new(r"^.+?: (.+?) \{$").unwrap(),
            property_line: Regex::new(
                r"(?:(?P<static>static) )?(?P<varlet>var|let) (?P<name>\w+): (?P<type>\S+)(?P<acc> \{\s*(?P<get>get)?\s*(?P<set>set)?\s*\})?\s*$",
            )
            .unwrap(),
            property_block: Regex::new(
                r"(?:(?P<static>static) )?(?P<varlet>var|let) (?P<name>\w+): (?P<type>\S+) \{$",
            )
            .unwrap(),
            function_line: Regex::new(
                r"(?P<sig>(?P<static>static )?(?:func (?P<name>[^\s(]+)|(?P<init>init))\s?\((?P<params>.*)\).*?)(?:-> (?P<ret>.+))?$",
            )
            .unwrap(),
            internal_labels: Regex::new(r"(\w+)\s\w+:").unwrap(),
            case_line: Regex::new(r"case (?P<rest>.+)$").unwrap(),
            one_line_extension: Regex::new(
                r"^\s*extension (?P<name>[\w.]+)(?:\s*:\s*(?P<parents>.+?))?\s*\{\}\s*$",
            )
            .unwrap(),
        }
    }
}

impl SwiftInterfaceParser {
    pub fn new(options: ParseOptions) -> Self {
        Self {
            stripper: PackageStripper::new(options.strip_packages),
            grammar: Grammar::new(),
        }
    }

    fn parse_block<'a>(&self, api: &mut Api, block: &Block<'a>, path: &[String]) -> Result<(), ParseError> {
        let header = block.header;
        if let Some(caps) = self.grammar.class_header.captures(header) {
            self.parse_declaration(api, block, TypeKind::Class, &caps[1], path)
        } else if let Some(caps) = self.grammar.struct_header.captures(header) {
            self.parse_declaration(api, block, TypeKind::Struct, &caps[1], path)
        } else if let Some(caps) = self.grammar.protocol_header.captures(header) {
            self.parse_declaration(api, block, TypeKind::Interface, &caps[1], path)
        } else if self.grammar.extension_header.is_match(header) {
            self.parse_extension(api, block, path)
        } else if let Some(caps) = self.grammar.enum_header.captures(header) {
            self.parse_declaration(api, block, TypeKind::Enum, &caps[1], path)
        } else {
            // unrecognized block, skipped
            Ok(())
        }
    }

    fn parse_declaration<'a>(
        &self,
        api: &mut Api,
        block: &Block<'a>,
        kind: TypeKind,
        name: &str,
        path: &[String],
    ) -> Result<(), ParseError> {
        let mut ty = Type::new(kind, name, qualify(path, name));
        ty.parents = self.parse_parents(block.header);
        let mut nested = Vec::new();
        self.scan_members(block.body, &mut ty, &mut nested);
        api.push(ty);

        if !nested.is_empty() {
            let child_path: Vec<String> = path.iter().cloned().chain([name.to_string()]).collect();
            for child in nested {
                self.parse_block(api, &child, &child_path)?;
            }
        }
        Ok(())
    }

    fn parse_extension<'a>(&self, api: &mut Api, block: &Block<'a>, path: &[String]) -> Result<(), ParseError> {
        let name = match self.grammar.extension_header.captures(block.header) {
            Some(caps) => caps[1].to_string(),
            None => return Ok(()),
        };

        // parse into a detached carrier, then merge into the resolved base
        let mut carrier = Type::new(TypeKind::Class, name.as_str(), name.as_str());
        carrier.parents = self.parse_parents(block.header);
        let mut nested = Vec::new();
        self.scan_members(block.body, &mut carrier, &mut nested);

        let child_path: Vec<String> = {
            let target = self.resolve_extension_target(api, &name, path)?;
            target.merge_parents(carrier.parents);
            target.merge_properties(carrier.properties);
            target.merge_functions(carrier.functions);
            target
                .fully_qualified_name
                .split('.')
                .map(str::to_string)
                .collect()
        };

        for child in nested {
            self.parse_block(api, &child, &child_path)?;
        }
        Ok(())
    }

    fn resolve_extension_target<'api>(
        &self,
        api: &'api mut Api,
        name: &str,
        path: &[String],
    ) -> Result<&'api mut Type, ParseError> {
        let mut candidates = vec![name.to_string()];
        if !path.is_empty() {
            candidates.push(format!("{}.{}", path.join("."), name));
        }
        api.find_extension_target_mut(&candidates, name)
            .ok_or_else(|| ParseError::UnresolvedExtension { name: name.to_string() })
    }

    fn scan_members<'a>(&self, body: &'a [&'a str], ty: &mut Type, nested: &mut Vec<Block<'a>>) {
        for item in scan_items(body) {
            match item {
                BlockItem::Line(line) => {
                    if let Some(property) = self.parse_property_line(line) {
                        ty.properties.push(property);
                    } else if let Some(function) = self.parse_function_line(line) {
                        ty.functions.push(function);
                    } else if ty.kind == TypeKind::Enum {
                        if let Some(caps) = self.grammar.case_line.captures(line) {
                            ty.cases.push(self.stripper.apply(caps["rest"].trim_end()));
                        }
                    }
                }
                BlockItem::Block(block) => {
                    // an accessor block is a property, everything else recurses
                    if let Some(property) = self.parse_property_block(&block) {
                        ty.properties.push(property);
                    } else {
                        nested.push(block);
                    }
                }
            }
        }
    }

    fn parse_property_line(&self, line: &str) -> Option<Property> {
        let caps = self.grammar.property_line.captures(line)?;
        let has_accessor = caps.name("acc").is_some();
        let has_get = caps.name("get").is_some();
        let has_set = caps.name("set").is_some();
        Some(Property {
            name: caps["name"].to_string(),
            type_name: self.stripper.apply(&caps["type"]),
            is_writable: &caps["varlet"] == "var" && (!has_accessor || !has_get || has_set),
            is_static: caps.name("static").is_some(),
        })
    }

    fn parse_property_block(&self, block: &Block) -> Option<Property> {
        let caps = self.grammar.property_block.captures(block.header.trim_end())?;
        let has_get = block.body.iter().any(|line| line.trim() == "get");
        let has_set = block.body.iter().any(|line| line.trim() == "set");
        Some(Property {
            name: caps["name"].to_string(),
            type_name: self.stripper.apply(&caps["type"]),
            is_writable: &caps["varlet"] == "var" && (!has_get || has_set),
            is_static: caps.name("static").is_some(),
        })
    }

    fn parse_function_line(&self, line: &str) -> Option<Function> {
        let caps = self.grammar.function_line.captures(line)?;
        let is_constructor = caps.name("init").is_some();
        let stripped = self.stripper.apply(caps["sig"].trim_end());
        Some(Function {
            name: caps
                .name("name")
                .map(|m| m.as_str())
                .unwrap_or("init")
                .to_string(),
            signature: self
                .grammar
                .internal_labels
                .replace_all(&stripped, "$1:")
                .into_owned(),
            return_type: caps
                .name("ret")
                .map(|m| self.stripper.apply(m.as_str().trim_end())),
            is_static: caps.name("static").is_some(),
            is_constructor,
        })
    }

    fn parse_parents(&self, header: &str) -> Vec<String> {
        match self.grammar.parent_list.captures(header.trim_end()) {
            Some(caps) => self.split_parents(&caps[1]),
            None => Vec::new(),
        }
    }

    fn split_parents(&self, list: &str) -> Vec<String> {
        list.split(',')
            .map(|parent| self.stripper.apply(parent.trim()))
            .collect()
    }
}

impl DumpParser for SwiftInterfaceParser {
    fn parse(&self, content: &str) -> Result<Api, ParseError> {
        let mut api = Api::new();
        let lines: Vec<&str> = content.lines().collect();

        // a re-exported-module marker seeds the root of the container path
        let root: Vec<String> = self
            .grammar
            .module_marker
            .captures(content)
            .map(|caps| vec![caps[1].to_string()])
            .unwrap_or_default();

        for item in scan_items(&lines) {
            if let BlockItem::Block(block) = item {
                self.parse_block(&mut api, &block, &root)?;
            }
        }

        // conformance-only one-liners carry no body to recurse into; they are
        // collected in an independent whole-document pass
        for line in &lines {
            if let Some(caps) = self.grammar.one_line_extension.captures(line) {
                let name = caps["name"].to_string();
                let parents = match caps.name("parents") {
                    Some(list) => self.split_parents(list.as_str()),
                    None => Vec::new(),
                };
                let target = self.resolve_extension_target(&mut api, &name, &root)?;
                target.merge_parents(parents);
            }
        }

        Ok(api)
    }
}

fn qualify(path: &[String], name: &str) -> String {
    if path.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", path.join("."), name)
    }
}
