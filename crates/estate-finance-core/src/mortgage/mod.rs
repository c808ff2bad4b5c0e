pub mod bounds;
pub mod breakdown;

pub use bounds::MortgageBounds;
pub use breakdown::{
    calculate_mortgage, calculate_mortgage_with_bounds, compute_breakdown, MortgageBreakdown,
    MortgageInput,
};
