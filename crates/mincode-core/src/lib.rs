pub mod analysis;
pub mod dict;
pub mod encoder;
pub mod layout;
pub mod settings;
