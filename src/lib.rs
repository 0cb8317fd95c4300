//! bizsim - simulation engines for six small business models
//!
//! Each engine is a pure function of validated parameters and an injected
//! random source, returning an immutable summary record: fixed-rate and
//! variable-rate deposit growth, a dice wagering game, hourly retail
//! customer arrivals, a poultry production process, and a periodic-review
//! inventory system. Presentation (formatting, tables, animation) lives
//! outside this crate; the engines return plain structured records.

pub mod deposit;
pub mod dice;
pub mod farm;
pub mod inventory;
pub mod output;
pub mod retail;
pub mod stats;
pub mod variates;

use thiserror::Error;

pub use deposit::{
    run_fixed_deposit, run_variable_deposit, FixedDepositParams, FixedDepositSummary,
    VariableDepositParams, VariableDepositSummary,
};
pub use dice::{run_dice_game, DiceGameParams, DiceGameSummary};
pub use farm::{run_farm, FarmParams, FarmSummary};
pub use inventory::{run_inventory, InventoryParams, InventorySummary};
pub use retail::{run_customer_arrivals, CustomerArrivalParams, CustomerArrivalSummary};

#[derive(Debug, Error)]
pub enum SimError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}
