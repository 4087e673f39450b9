/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust structs/enums with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

#[macro_use]
mod macros;

pub mod wire;

pub mod card_dispute;
pub mod declined_transaction;
pub mod document;
pub mod requests;
pub mod responses;
pub mod transaction;
pub mod transfers;

pub use card_dispute::*;
pub use declined_transaction::*;
pub use document::*;
pub use requests::*;
pub use responses::*;
pub use transaction::*;
pub use transfers::*;
pub use wire::*;
