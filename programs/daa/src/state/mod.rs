pub mod assembly;
pub mod association;
pub mod election;
pub mod member;
pub mod proposal;
pub mod treasury;
pub mod vote;

pub use assembly::*;
pub use association::*;
pub use election::*;
pub use member::*;
pub use proposal::*;
pub use treasury::*;
pub use vote::*;
