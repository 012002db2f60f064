//! Overprint graphics state
//!
//! The second disk is painted under an ExtGState that turns overprint on or
//! off. With overprint off the magenta disk knocks out the cyan beneath it;
//! with overprint on (and mode 1) the cyan survives where magenta is zero.

use lopdf::{Dictionary, Object};

/// Overprint settings carried by the named graphics state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverprintConfig {
    /// `/OP`: overprint for painting operations
    pub overprint: bool,
    /// `/OPM`: 1 = nonzero overprint mode, 0 = full knockout of zero components
    pub overprint_mode: i64,
}

impl OverprintConfig {
    /// Build the `/ExtGState` dictionary registered in the page resources
    pub fn to_ext_gstate(&self) -> Dictionary {
        let mut dict = Dictionary::new();
        dict.set("Type", Object::Name(b"ExtGState".to_vec()));
        dict.set("OP", Object::Boolean(self.overprint));
        dict.set("OPM", Object::Integer(self.overprint_mode));
        dict
    }
}

/// Map the overprint switch to its graphics state values.
pub fn build_overprint_config(enabled: bool) -> OverprintConfig {
    OverprintConfig {
        overprint: enabled,
        overprint_mode: if enabled { 1 } else { 0 },
    }
}

/// A graphics state together with the resource name it is registered under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedGraphicsState {
    pub name: String,
    pub config: OverprintConfig,
}

impl NamedGraphicsState {
    pub fn new(name: impl Into<String>, config: OverprintConfig) -> Self {
        Self {
            name: name.into(),
            config,
        }
    }
}

/// Check that `name` can be written as a PDF name object without escaping.
pub fn is_valid_resource_name(name: &str) -> bool {
    !name.is_empty()
        && name.bytes().all(|b| {
            b.is_ascii_graphic()
                && !matches!(
                    b,
                    b'/' | b'%' | b'(' | b')' | b'<' | b'>' | b'[' | b']' | b'{' | b'}' | b'#'
                )
        })
}
