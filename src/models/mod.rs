pub mod accident_card;
pub mod case_record;
pub mod conversation;
pub mod enums;
pub mod verdict;

pub use accident_card::*;
pub use case_record::*;
pub use conversation::*;
pub use verdict::*;
