//! Hourly customer arrivals and purchases for a small retail shop.
//!
//! Per hour, the customer count is uniform over 0..=4; each customer
//! buys a basket size drawn from a fixed categorical distribution.
//! Daily accounting nets revenue against variable and fixed costs.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::variates::{self, Categorical};
use crate::SimError;

const MAX_CUSTOMERS_PER_HOUR: i64 = 4;

/// Items bought per customer: 0 with 20%, 1 with 30%, 2 with 40%,
/// 3 with 10%.
fn purchase_table() -> Categorical<u32> {
    Categorical::new(&[(20, 0), (50, 1), (90, 2), (100, 3)])
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerArrivalParams {
    /// Days to simulate, 1..=365.
    pub days: usize,
    /// Opening hours per day, 1..=24.
    pub hours_per_day: usize,
    pub daily_fixed_cost: f64,
    /// Acquisition cost per item sold.
    pub unit_cost: f64,
    /// Sale price per item.
    pub unit_price: f64,
}

impl CustomerArrivalParams {
    pub fn validate(&self) -> Result<(), SimError> {
        if !(1..=365).contains(&self.days) {
            return Err(SimError::InvalidParameter(
                "days must be between 1 and 365".to_string(),
            ));
        }
        if !(1..=24).contains(&self.hours_per_day) {
            return Err(SimError::InvalidParameter(
                "hours_per_day must be between 1 and 24".to_string(),
            ));
        }
        for (name, value) in [
            ("daily_fixed_cost", self.daily_fixed_cost),
            ("unit_cost", self.unit_cost),
            ("unit_price", self.unit_price),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(SimError::InvalidParameter(format!(
                    "{name} must be non-negative"
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct HourlyRecord {
    pub hour: usize,
    pub customers: u32,
    pub items_sold: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct DailyCustomerRecord {
    pub day: usize,
    pub customers: u32,
    pub items_sold: u32,
    pub revenue: f64,
    pub variable_cost: f64,
    pub fixed_cost: f64,
    pub net_profit: f64,
    pub profitable: bool,
    pub hours: Vec<HourlyRecord>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CustomerArrivalSummary {
    pub total_customers: u64,
    pub total_items_sold: u64,
    pub total_revenue: f64,
    pub total_net_profit: f64,
    pub profitable_days: usize,
    pub average_daily_profit: f64,
    pub days: Vec<DailyCustomerRecord>,
}

pub fn run_customer_arrivals<R: Rng>(
    params: &CustomerArrivalParams,
    rng: &mut R,
) -> Result<CustomerArrivalSummary, SimError> {
    params.validate()?;

    let table = purchase_table();
    let mut days = Vec::with_capacity(params.days);
    let mut total_customers = 0_u64;
    let mut total_items_sold = 0_u64;
    let mut total_revenue = 0.0;
    let mut total_net_profit = 0.0;
    let mut profitable_days = 0_usize;

    for day in 1..=params.days {
        let mut day_customers = 0_u32;
        let mut day_items = 0_u32;
        let mut hours = Vec::with_capacity(params.hours_per_day);

        for hour in 1..=params.hours_per_day {
            let customers = variates::discrete_uniform(rng, 0, MAX_CUSTOMERS_PER_HOUR) as u32;
            let mut items_sold = 0_u32;
            for _ in 0..customers {
                items_sold += table.sample(rng);
            }
            day_customers += customers;
            day_items += items_sold;
            hours.push(HourlyRecord {
                hour,
                customers,
                items_sold,
            });
        }

        let revenue = day_items as f64 * params.unit_price;
        let variable_cost = day_items as f64 * params.unit_cost;
        let net_profit = revenue - variable_cost - params.daily_fixed_cost;
        let profitable = net_profit > 0.0;

        total_customers += u64::from(day_customers);
        total_items_sold += u64::from(day_items);
        total_revenue += revenue;
        total_net_profit += net_profit;
        if profitable {
            profitable_days += 1;
        }

        days.push(DailyCustomerRecord {
            day,
            customers: day_customers,
            items_sold: day_items,
            revenue,
            variable_cost,
            fixed_cost: params.daily_fixed_cost,
            net_profit,
            profitable,
            hours,
        });
    }

    Ok(CustomerArrivalSummary {
        total_customers,
        total_items_sold,
        total_revenue,
        total_net_profit,
        profitable_days,
        average_daily_profit: total_net_profit / params.days as f64,
        days,
    })
}
