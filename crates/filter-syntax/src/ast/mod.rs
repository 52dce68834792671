pub mod node;
pub mod operator;
