//! Domain services - Pure operations over domain types

mod config_template;
mod display_name;

pub use config_template::ConfigTemplate;
pub use display_name::spaced_name;
