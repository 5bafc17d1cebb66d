mod api;
mod member;
mod types;

pub use api::{Api, ReadonlyKeyword};
pub use member::{Function, Property};
pub use types::{Type, TypeKind};
