pub mod store;
pub mod turn;

pub use store::History;
pub use turn::{Role, Turn};
