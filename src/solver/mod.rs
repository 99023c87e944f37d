/// Module for CFOP method solver.
pub mod cfop;
/// Module for LBL method.
pub mod lbl;
/// Module for Roux method.
pub mod roux;
/// Module for min2phase method.
pub mod min2phase;

pub use cfop::CFOPSolver;
pub use lbl::LBLSolver;
pub use min2phase::{Min2PhaseSolver, StreamingSolver};
