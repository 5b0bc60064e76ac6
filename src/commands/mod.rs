//! Command implementations

mod charge;
mod rent;
mod statement;
mod tariff;

pub use charge::charge;
pub use rent::rent;
pub use statement::statement;
pub use tariff::{tariff_init, tariff_list};
