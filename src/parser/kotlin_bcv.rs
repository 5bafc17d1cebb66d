use super::blocks::{scan_items, Block, BlockItem};
use super::{DumpParser, PackageStripper, ParseError, ParseOptions};
use crate::model::{Api, Function, Property, ReadonlyKeyword, Type, TypeKind};
use crate::normalize;
use regex::Regex;

/// Marker identifying an enum block in a binary-compatibility dump
const ENUM_BASE_MARKER: &str = " : java/lang/Enum";

/// Parser for binary-compatibility-validator dumps
///
/// Descriptor syntax does not carry optionality, so extracted types are
/// rendered without it.
pub struct KotlinBcvParser {
    options: ParseOptions,
    stripper: PackageStripper,
    grammar: Grammar,
}

/// Compiled line grammar for the binary-compatibility format
struct Grammar {
    class_header: Regex,
    parent_list: Regex,
    function_line: Regex,
    enum_constant: Regex,
    getter: Regex,
    descriptor: Regex,
    synthetic: Regex,
}

impl Grammar {
    fn new() -> Self {
        Self {
            class_header: Regex::new(r"public.+class (\S+)").unwrap(),
            parent_list: Regex::new(r"^.+?: (.+?) \{$").unwrap(),
            function_line: Regex::new(
                r"^\s*public (?P<sig>(?P<static>static )?.*?fun (?:(?P<init><init>)|(?P<name>\S+)) \((?P<params>.*)\))(?P<ret>.+)$",
            )
            .unwrap(),
            enum_constant: Regex::new(r"public static final field (?P<name>[A-Z0-9_]+)(?:\s|$)").unwrap(),
            getter: Regex::new(r"fun get[A-Z]\w* \(\)").unwrap(),
            descriptor: Regex::new(r"(?P<array>\[)?(?:(?P<prim>[ZBCSIJFDV])|L(?P<class>[^;]+);)").unwrap(),
            synthetic: Regex::new(r"synthetic ?").unwrap(),
        }
    }
}

impl KotlinBcvParser {
    pub fn new(options: ParseOptions) -> Self {
        Self {
            options,
            stripper: PackageStripper::new(options.strip_packages),
            grammar: Grammar::new(),
        }
    }

    fn parse_type(&self, block: &Block, kind: TypeKind) -> Option<Type> {
        let caps = self.grammar.class_header.captures(block.header)?;
        let fully_qualified_name = caps[1].replace('/', ".");
        let name = self.stripper.apply(&fully_qualified_name);
        let mut ty = Type::new(kind, name, fully_qualified_name);

        match kind {
            TypeKind::Enum => ty.cases = self.parse_enum_constants(block.body),
            _ => ty.parents = self.parse_parents(block.header),
        }
        ty.functions = self.parse_functions(block.body);
        self.extract_properties(&mut ty);
        Some(ty)
    }

    fn parse_parents(&self, header: &str) -> Vec<String> {
        match self.grammar.parent_list.captures(header.trim_end()) {
            Some(caps) => caps[1]
                .split(',')
                .map(|parent| self.stripper.apply(&parent.trim().replace('/', ".")))
                .collect(),
            None => Vec::new(),
        }
    }

    fn parse_functions(&self, body: &[&str]) -> Vec<Function> {
        let mut functions = Vec::new();
        for item in scan_items(body) {
            let BlockItem::Line(line) = item else {
                continue;
            };
            let Some(caps) = self.grammar.function_line.captures(line) else {
                continue;
            };
            let is_constructor = caps.name("init").is_some();
            let name = caps
                .name("name")
                .map(|m| m.as_str())
                .unwrap_or("init")
                .to_string();
            // auto-generated destructuring accessors are compiler artifacts
            if is_component_accessor(&name) {
                continue;
            }

            let sig = &caps["sig"];
            let params = &caps["params"];
            let mapped = self.map_descriptors(params).join(", ");
            let prefix = &sig[..sig.len() - params.len() - 1];
            // synthetic or not, it's part of the API
            let signature = self
                .grammar
                .synthetic
                .replace_all(&format!("{prefix}{mapped})"), "")
                .into_owned();

            functions.push(Function {
                name,
                signature,
                return_type: if is_constructor {
                    None
                } else {
                    Some(self.map_descriptors(&caps["ret"]).join(""))
                },
                is_static: caps.name("static").is_some(),
                is_constructor,
            });
        }
        functions
    }

    fn parse_enum_constants(&self, body: &[&str]) -> Vec<String> {
        body.iter()
            .filter_map(|line| self.grammar.enum_constant.captures(line))
            .map(|caps| caps["name"].to_string())
            .collect()
    }

    /// Reduce `getX`/`setX` accessor pairs into properties
    fn extract_properties(&self, ty: &mut Type) {
        let getters: Vec<Function> = ty
            .functions
            .iter()
            .filter(|f| self.grammar.getter.is_match(&f.signature))
            .cloned()
            .collect();

        for getter in getters {
            let Some(return_type) = getter.return_type.clone() else {
                continue;
            };
            let setter_name = getter.name.replacen("get", "set", 1);
            let setter_needle = format!("fun {setter_name} ({return_type})");
            let setter = ty
                .functions
                .iter()
                .find(|f| f.signature.contains(&setter_needle))
                .cloned();

            ty.functions.retain(|f| *f != getter);
            if let Some(setter) = &setter {
                ty.functions.retain(|f| f != setter);
            }

            ty.properties.push(Property {
                name: property_name(&getter.name["get".len()..]),
                type_name: return_type,
                is_writable: setter.is_some(),
                is_static: getter.is_static,
            });
        }
    }

    /// Map a descriptor string to rendered type names
    fn map_descriptors(&self, descriptors: &str) -> Vec<String> {
        self.grammar
            .descriptor
            .captures_iter(descriptors)
            .map(|caps| {
                let base = match caps.name("class") {
                    Some(path) => self.stripper.apply(&path.as_str().replace('/', ".")),
                    None => primitive_name(&caps["prim"]).to_string(),
                };
                if caps.name("array").is_some() {
                    format!("[{base}]")
                } else {
                    base
                }
            })
            .collect()
    }
}

impl DumpParser for KotlinBcvParser {
    fn parse(&self, content: &str) -> Result<Api, ParseError> {
        let mut api = Api::new();
        api.readonly_keyword = ReadonlyKeyword::Val;

        let lines: Vec<&str> = content.lines().collect();
        for item in scan_items(&lines) {
            let BlockItem::Block(block) = item else {
                continue;
            };
            let header = block.header;
            if header.contains(ENUM_BASE_MARKER) {
                if let Some(ty) = self.parse_type(&block, TypeKind::Enum) {
                    api.push(ty);
                }
            } else if self.grammar.class_header.is_match(header) {
                if let Some(ty) = self.parse_type(&block, TypeKind::Class) {
                    api.push(ty);
                }
            }
            // other headers are ignored
        }

        if self.options.normalize {
            normalize::normalize(&mut api);
        }
        Ok(api)
    }
}

fn primitive_name(descriptor: &str) -> &'static str {
    match descriptor {
        "Z" => "Boolean",
        "B" => "Byte",
        "C" => "Char",
        "S" => "Short",
        "I" => "Int",
        "J" => "Long",
        "F" => "Float",
        "D" => "Double",
        _ => "Void",
    }
}

/// `component1`, `component2`, ... from data-class destructuring
fn is_component_accessor(name: &str) -> bool {
    name.strip_prefix("component")
        .is_some_and(|suffix| !suffix.is_empty() && suffix.bytes().all(|b| b.is_ascii_digit()))
}

/// Getter name remainder to property name: `Name` → `name`, `FQDN` → `fqdn`
fn property_name(remainder: &str) -> String {
    if remainder == remainder.to_uppercase() {
        return remainder.to_lowercase();
    }
    let mut chars = remainder.chars();
    match chars.next() {
        Some(first) => format!("{}{}", first.to_lowercase(), chars.as_str()),
        None => String::new(),
    }
}
