pub mod dto;
pub mod evaluation;
