pub mod mortgage;
pub mod proximity;
