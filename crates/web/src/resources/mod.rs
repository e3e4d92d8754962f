//! [`Resource`](crate::resource::Resource) implementations, one per
//! controller. Pets are written only through the owners resource and have
//! no controller of their own.

pub mod authors;
pub mod owners;
pub mod posts;

pub use authors::Authors;
pub use owners::Owners;
pub use posts::Posts;
