pub mod key_name_to_modifier;

pub use key_name_to_modifier::KeyNameToModifier;
