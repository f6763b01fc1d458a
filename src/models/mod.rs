pub mod analysis;
pub mod doctor;
pub mod medicine;

pub use analysis::*;
pub use doctor::*;
pub use medicine::*;
