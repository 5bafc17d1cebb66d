//! Deterministic, sorted textual rendering of a populated API model.
//!
//! Identical input and configuration always yield byte-identical output; the
//! whole point of the rendering is that two snapshots diff cleanly.

use crate::model::{Api, Type, TypeKind};
use std::cmp::Ordering;

/// How top-level declarations are ordered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderMode {
    /// Enums, then interfaces, then classes, then structs, each block sorted by name
    #[default]
    Grouped,
    /// All kinds merged and sorted by name
    Global,
    /// Sorted by package prefix, then kind rank, then name
    QualifiedPath,
}

/// Configuration for one render invocation
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    /// Display fully-qualified names instead of short names
    pub fully_qualified_names: bool,
    pub order: OrderMode,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            fully_qualified_names: true,
            order: OrderMode::Grouped,
        }
    }
}

impl Api {
    /// Canonical text for the whole extracted surface
    pub fn render(&self, options: &RenderOptions) -> String {
        order_types(self, options.order)
            .into_iter()
            .map(|ty| render_type(ty, self.readonly_keyword.as_str(), options))
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

fn order_types(api: &Api, mode: OrderMode) -> Vec<&Type> {
    match mode {
        OrderMode::Grouped => {
            let mut ordered = Vec::new();
            for collection in [&api.enums, &api.interfaces, &api.classes, &api.structs] {
                let mut block: Vec<&Type> = collection.iter().collect();
                block.sort_by(by_name);
                ordered.extend(block);
            }
            ordered
        }
        OrderMode::Global => {
            let mut ordered: Vec<&Type> = api.all_types().collect();
            ordered.sort_by(by_name);
            ordered
        }
        OrderMode::QualifiedPath => {
            let mut ordered: Vec<&Type> = api.all_types().collect();
            ordered.sort_by(|a, b| {
                (package_prefix(a), kind_rank(a.kind), a.name.as_str(), a.fully_qualified_name.as_str())
                    .cmp(&(package_prefix(b), kind_rank(b.kind), b.name.as_str(), b.fully_qualified_name.as_str()))
            });
            ordered
        }
    }
}

fn by_name(a: &&Type, b: &&Type) -> Ordering {
    (a.name.as_str(), a.fully_qualified_name.as_str())
        .cmp(&(b.name.as_str(), b.fully_qualified_name.as_str()))
}

fn kind_rank(kind: TypeKind) -> u8 {
    match kind {
        TypeKind::Enum => 0,
        TypeKind::Interface => 1,
        TypeKind::Class => 2,
        TypeKind::Struct => 3,
    }
}

/// Fully-qualified name with the leaf component removed
fn package_prefix(ty: &Type) -> &str {
    let fqn = ty.fully_qualified_name.as_str();
    match fqn.rfind('.') {
        Some(index) => &fqn[..index],
        None => "",
    }
}

fn render_type(ty: &Type, readonly_keyword: &str, options: &RenderOptions) -> String {
    let display_name = if options.fully_qualified_names {
        &ty.fully_qualified_name
    } else {
        &ty.name
    };
    let mut declaration = format!("{} {}", ty.kind.keyword(), display_name);
    if ty.has_parents() {
        declaration.push_str(&format!(" : {}", ty.parents.join(", ")));
    }

    let mut sections: Vec<Vec<String>> = Vec::new();
    if ty.kind == TypeKind::Enum {
        // declaration order, never resorted
        sections.push(ty.cases.iter().map(|case| format!("case {case}")).collect());
    }
    let mut properties = ty.properties.clone();
    properties.sort();
    sections.push(properties.iter().map(|p| p.render(readonly_keyword)).collect());
    let mut functions = ty.functions.clone();
    functions.sort();
    sections.push(functions.iter().map(|f| f.full_signature()).collect());

    let body = sections
        .into_iter()
        .filter(|section| !section.is_empty())
        .map(|section| {
            section
                .iter()
                .map(|entry| format!("    {entry}"))
                .collect::<Vec<_>>()
                .join("\n")
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    format!("{declaration} {{\n{body}\n}}")
}
