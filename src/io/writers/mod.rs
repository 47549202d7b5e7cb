pub mod metadata;
pub mod webp;
