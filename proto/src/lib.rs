pub mod entity_type;
pub mod error;
pub mod global_id;
pub mod key;

pub use entity_type::*;
pub use error::*;
pub use global_id::*;
pub use key::*;
