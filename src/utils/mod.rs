// src/utils/mod.rs

pub mod body;
pub mod pagination;
