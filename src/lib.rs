pub mod coerce;
pub mod config;
mod construct;
pub mod error;
pub mod node;
pub mod reference;
pub mod schema;
mod serialize;
pub mod setting;
pub mod storage;
pub mod value;

pub use config::HidePolicy;
pub use error::DocError;
pub use node::Node;
pub use reference::Reference;
pub use schema::Schema;
pub use setting::{Setting, Shape};
pub use value::{Child, Value};
