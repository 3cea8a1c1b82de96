pub mod artefact;
pub mod dimensions;
pub mod identifiable;
pub mod lifecycle;
pub mod loan;
pub mod movement;
pub mod physical_location;
pub mod reference;
pub mod requester;
pub mod requests;
pub mod shelf;
pub mod timestamp;

pub use artefact::*;
pub use dimensions::*;
pub use identifiable::*;
pub use lifecycle::*;
pub use loan::*;
pub use movement::*;
pub use physical_location::*;
pub use reference::*;
pub use requester::*;
pub use requests::*;
pub use shelf::*;
pub use timestamp::*;
