pub mod config_validator;
pub mod credential_resolver;
pub mod option_list_builder;
