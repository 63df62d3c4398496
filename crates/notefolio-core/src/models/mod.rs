pub mod block;
pub mod document;
pub mod image;
pub mod layout;
