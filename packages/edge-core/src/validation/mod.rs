pub mod key;

pub use key::derive_object_key;
