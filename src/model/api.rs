use super::{Type, TypeKind};

/// Keyword rendered for read-only properties
///
/// Scoped to one parse/render invocation so concurrent extractions stay
/// independent; never process-global.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReadonlyKeyword {
    #[default]
    Let,
    Val,
}

impl ReadonlyKeyword {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReadonlyKeyword::Let => "let",
            ReadonlyKeyword::Val => "val",
        }
    }
}

/// The extracted API surface of one dump
///
/// Accumulates during a single parse call and is read-only afterward.
#[derive(Debug, Clone, Default)]
pub struct Api {
    pub classes: Vec<Type>,
    pub structs: Vec<Type>,
    pub interfaces: Vec<Type>,
    pub enums: Vec<Type>,
    /// Read-only property keyword used at render time
    pub readonly_keyword: ReadonlyKeyword,
}

impl Api {
    pub fn new() -> Self {
        Self::default()
    }

    /// First type of `kind` matching either key, in document order
    pub fn lookup(&self, kind: TypeKind, name: Option<&str>, fully_qualified_name: Option<&str>) -> Option<&Type> {
        self.collection(kind).iter().find(|t| {
            name.is_some_and(|n| t.name == n)
                || fully_qualified_name.is_some_and(|f| t.fully_qualified_name == f)
        })
    }

    /// Route a freshly parsed type into its kind's collection
    pub fn push(&mut self, ty: Type) {
        self.collection_mut(ty.kind).push(ty);
    }

    pub fn all_types(&self) -> impl Iterator<Item = &Type> + '_ {
        self.enums
            .iter()
            .chain(self.interfaces.iter())
            .chain(self.classes.iter())
            .chain(self.structs.iter())
    }

    pub fn all_types_mut(&mut self) -> impl Iterator<Item = &mut Type> + '_ {
        self.enums
            .iter_mut()
            .chain(self.interfaces.iter_mut())
            .chain(self.classes.iter_mut())
            .chain(self.structs.iter_mut())
    }

    /// Extension target resolution: fully-qualified candidates first, then the
    /// short name, searching classes, interfaces, enums, structs in that order
    pub(crate) fn find_extension_target_mut(
        &mut self,
        fully_qualified_candidates: &[String],
        short_name: &str,
    ) -> Option<&mut Type> {
        const SEARCH_ORDER: [TypeKind; 4] = [
            TypeKind::Class,
            TypeKind::Interface,
            TypeKind::Enum,
            TypeKind::Struct,
        ];

        let mut found: Option<(TypeKind, usize)> = None;
        'candidates: for candidate in fully_qualified_candidates {
            for kind in SEARCH_ORDER {
                if let Some(index) = self
                    .collection(kind)
                    .iter()
                    .position(|t| t.fully_qualified_name == *candidate)
                {
                    found = Some((kind, index));
                    break 'candidates;
                }
            }
        }
        if found.is_none() {
            for kind in SEARCH_ORDER {
                if let Some(index) = self.collection(kind).iter().position(|t| t.name == short_name) {
                    found = Some((kind, index));
                    break;
                }
            }
        }

        found.map(move |(kind, index)| &mut self.collection_mut(kind)[index])
    }

    fn collection(&self, kind: TypeKind) -> &Vec<Type> {
        match kind {
            TypeKind::Class => &self.classes,
            TypeKind::Struct => &self.structs,
            TypeKind::Interface => &self.interfaces,
            TypeKind::Enum => &self.enums,
        }
    }

    fn collection_mut(&mut self, kind: TypeKind) -> &mut Vec<Type> {
        match kind {
            TypeKind::Class => &mut self.classes,
            TypeKind::Struct => &mut self.structs,
            TypeKind::Interface => &mut self.interfaces,
            TypeKind::Enum => &mut self.enums,
        }
    }
}
