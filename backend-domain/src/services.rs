// Domain services

pub mod assembler;

pub use assembler::*;
