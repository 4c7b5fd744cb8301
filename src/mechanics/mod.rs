pub mod dice;
pub mod rules;
pub mod turn;

pub use dice::*;
pub use rules::*;
pub use turn::*;
