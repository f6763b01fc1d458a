pub mod assembler;
pub mod confidence;
pub mod doctor;
pub mod medicines;
pub mod narrative;

pub use assembler::*;
pub use confidence::*;
pub use doctor::*;
pub use medicines::*;
pub use narrative::*;
