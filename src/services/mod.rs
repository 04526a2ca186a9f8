pub mod evaluation_client;
pub mod presentation_shell;
pub mod prompt_builder;
pub mod text_extractor;
