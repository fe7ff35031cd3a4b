//! Core value types: the variable tree and the message request.

mod message;
mod value;

pub use message::Message;
pub use value::Variable;
