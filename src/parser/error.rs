use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Unable to find base type for extension `{name}`")]
    UnresolvedExtension { name: String },
}
