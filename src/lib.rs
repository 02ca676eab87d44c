pub mod codegen;
pub mod ucd;
