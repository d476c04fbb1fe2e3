//! Word (.docx) parsing module.

mod body;
mod docx_parser;
mod package;
mod styles;
mod xml;

pub use docx_parser::DocxParser;
pub use package::{ContentTypes, Package, Relationship};
pub use styles::{StyleDef, StyleSheet, StyleType};
