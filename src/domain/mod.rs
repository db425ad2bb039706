mod currency;
mod expense;
mod ledger;
mod money;

pub use currency::*;
pub use expense::*;
pub use ledger::*;
pub use money::*;
