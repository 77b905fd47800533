use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AtelierError {
    #[error("Duplicate component name in catalog: {name}")]
    DuplicateComponent { name: String },

    #[error("Virtual component '{name}' references unknown host '{host}'")]
    UnknownHost { name: String, host: String },

    #[error("Virtual component '{name}' references virtual host '{host}'; hosts must own their source files")]
    VirtualHost { name: String, host: String },

    #[error("Component not found: {name}")]
    ComponentNotFound {
        name: String,
        suggestions: Vec<String>,
    },

    #[error("None of the requested components exist in the catalog")]
    EmptyResolution {
        /// Unknown requested name -> up to three close matches.
        suggestions: BTreeMap<String, Vec<String>>,
    },

    #[error("Catalog parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AtelierError>;
