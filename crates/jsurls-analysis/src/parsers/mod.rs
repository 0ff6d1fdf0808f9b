//! Tree-sitter JavaScript parsing and node classification.

mod javascript;
mod shape;

pub use javascript::{
    base_identifier, field_text, method_call, named_children, node_text, parse_javascript,
    MethodCall,
};
pub use shape::{BinaryOp, NodeShape};
