pub mod fault;
pub mod kind;
