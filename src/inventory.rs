//! Periodic-review inventory simulation with lost sales.
//!
//! The one engine in this crate with genuine cross-day state: on-hand
//! stock, the outstanding order quantity, and the lead-time countdown
//! thread through a strictly sequential day loop. Demand that cannot be
//! met is lost, never backlogged.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::variates;
use crate::SimError;

/// Mean of the exponential daily demand.
const DEMAND_MEAN: f64 = 100.0;
/// An order may be placed every this many days.
const REVIEW_PERIOD_DAYS: usize = 7;
const LEAD_TIME_MIN_DAYS: i64 = 1;
const LEAD_TIME_MAX_DAYS: i64 = 3;
/// Day whose cumulative unsatisfied demand is captured as a snapshot.
const UNSATISFIED_SNAPSHOT_DAY: usize = 27;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryParams {
    /// Days to simulate, 1..=365.
    pub days: usize,
    /// Warehouse capacity in units; the warehouse starts full.
    pub capacity: f64,
    /// Fixed cost per order placed.
    pub reorder_cost: f64,
    /// Holding cost per unit per day, charged on the opening level.
    pub holding_cost: f64,
    /// Acquisition cost per unit ordered.
    pub unit_cost: f64,
    /// Sale price per unit of satisfied demand.
    pub unit_price: f64,
}

impl InventoryParams {
    pub fn validate(&self) -> Result<(), SimError> {
        if !(1..=365).contains(&self.days) {
            return Err(SimError::InvalidParameter(
                "days must be between 1 and 365".to_string(),
            ));
        }
        if !self.capacity.is_finite() || self.capacity <= 0.0 {
            return Err(SimError::InvalidParameter(
                "capacity must be greater than zero".to_string(),
            ));
        }
        for (name, value) in [
            ("reorder_cost", self.reorder_cost),
            ("holding_cost", self.holding_cost),
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

/// Cross-day state threaded through the sequential day loop.
#[derive(Debug, Clone, Copy)]
struct InventoryState {
    on_hand: f64,
    outstanding_order: f64,
    lead_time_days: u32,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct DailyInventoryRecord {
    pub day: usize,
    /// Level after any order receipt, before demand; the holding cost
    /// base for the day.
    pub opening_inventory: f64,
    pub demand: f64,
    /// Order quantity still in transit at end of day.
    pub outstanding_order: f64,
    pub closing_inventory: f64,
    pub cumulative_unsatisfied_demand: f64,
    pub cumulative_total_cost: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct InventorySummary {
    pub total_income: f64,
    pub total_reorder_cost: f64,
    pub total_holding_cost: f64,
    pub total_acquisition_cost: f64,
    pub total_cost: f64,
    pub net_profit: f64,
    pub total_unsatisfied_demand: f64,
    /// Cumulative unsatisfied demand as of day 27; 0 when the run is
    /// shorter than that.
    pub unsatisfied_demand_day_27: f64,
    pub days: Vec<DailyInventoryRecord>,
}

pub fn run_inventory<R: Rng>(
    params: &InventoryParams,
    rng: &mut R,
) -> Result<InventorySummary, SimError> {
    params.validate()?;

    let mut state = InventoryState {
        on_hand: params.capacity,
        outstanding_order: 0.0,
        lead_time_days: 0,
    };

    let mut days = Vec::with_capacity(params.days);
    let mut income = 0.0;
    let mut reorder_cost = 0.0;
    let mut holding_cost = 0.0;
    let mut acquisition_cost = 0.0;
    let mut unsatisfied = 0.0;
    let mut day_27_snapshot = 0.0;

    for day in 1..=params.days {
        // 1. Receive a due order; overflow beyond capacity is lost.
        if state.lead_time_days == 0 && state.outstanding_order > 0.0 {
            state.on_hand = (state.on_hand + state.outstanding_order).min(params.capacity);
            state.outstanding_order = 0.0;
        }

        // 2. Sample demand.
        let demand = variates::exponential(rng, DEMAND_MEAN);

        // 3. Holding cost on the opening level, receipt included.
        let opening_inventory = state.on_hand;
        holding_cost += params.holding_cost * opening_inventory;

        // 4. Satisfy demand; shortfall is lost sales.
        if state.on_hand >= demand {
            income += demand * params.unit_price;
            state.on_hand -= demand;
        } else {
            income += state.on_hand * params.unit_price;
            unsatisfied += demand - state.on_hand;
            state.on_hand = 0.0;
        }

        // 5. Day-27 instrumentation.
        if day == UNSATISFIED_SNAPSHOT_DAY {
            day_27_snapshot = unsatisfied;
        }

        // 6. Review: order up to capacity, one order in flight at most.
        if day % REVIEW_PERIOD_DAYS == 0 && state.outstanding_order == 0.0 {
            let quantity = params.capacity - state.on_hand;
            if quantity > 0.0 {
                state.outstanding_order = quantity;
                state.lead_time_days =
                    variates::discrete_uniform(rng, LEAD_TIME_MIN_DAYS, LEAD_TIME_MAX_DAYS) as u32;
                reorder_cost += params.reorder_cost;
                acquisition_cost += quantity * params.unit_cost;
            }
        }

        // 7. Countdown ticks even on the day an order was just placed.
        if state.lead_time_days > 0 {
            state.lead_time_days -= 1;
        }

        days.push(DailyInventoryRecord {
            day,
            opening_inventory,
            demand,
            outstanding_order: state.outstanding_order,
            closing_inventory: state.on_hand,
            cumulative_unsatisfied_demand: unsatisfied,
            cumulative_total_cost: reorder_cost + holding_cost + acquisition_cost,
        });
    }

    let total_cost = reorder_cost + holding_cost + acquisition_cost;
    Ok(InventorySummary {
        total_income: income,
        total_reorder_cost: reorder_cost,
        total_holding_cost: holding_cost,
        total_acquisition_cost: acquisition_cost,
        total_cost,
        net_profit: income - total_cost,
        total_unsatisfied_demand: unsatisfied,
        unsatisfied_demand_day_27: day_27_snapshot,
        days,
    })
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn params(days: usize) -> InventoryParams {
        InventoryParams {
            days,
            capacity: 500.0,
            reorder_cost: 50.0,
            holding_cost: 0.1,
            unit_cost: 2.0,
            unit_price: 5.0,
        }
    }

    #[test]
    fn inventory_stays_within_bounds() {
        let mut rng = StdRng::seed_from_u64(127);
        let summary = run_inventory(&params(120), &mut rng).unwrap();
        assert_eq!(summary.days.len(), 120);
        for day in &summary.days {
            assert!(day.opening_inventory >= 0.0);
            assert!(day.opening_inventory <= 500.0);
            assert!(day.closing_inventory >= 0.0);
            assert!(day.closing_inventory <= 500.0);
            assert!(day.closing_inventory <= day.opening_inventory);
        }
    }

    #[test]
    fn running_totals_never_decrease() {
        let mut rng = StdRng::seed_from_u64(131);
        let summary = run_inventory(&params(120), &mut rng).unwrap();
        for pair in summary.days.windows(2) {
            assert!(
                pair[1].cumulative_unsatisfied_demand >= pair[0].cumulative_unsatisfied_demand
            );
            assert!(pair[1].cumulative_total_cost >= pair[0].cumulative_total_cost);
        }
    }

    #[test]
    fn orders_appear_only_on_review_days() {
        let mut rng = StdRng::seed_from_u64(137);
        let summary = run_inventory(&params(120), &mut rng).unwrap();
        let mut previous_outstanding = 0.0;
        for day in &summary.days {
            if day.outstanding_order > 0.0 && previous_outstanding == 0.0 {
                assert_eq!(day.day % 7, 0, "order placed outside a review day");
            }
            previous_outstanding = day.outstanding_order;
        }
    }

    #[test]
    fn day_27_snapshot_matches_record() {
        let mut rng = StdRng::seed_from_u64(139);
        let summary = run_inventory(&params(60), &mut rng).unwrap();
        let day_27 = &summary.days[26];
        assert_eq!(day_27.day, 27);
        assert_eq!(
            summary.unsatisfied_demand_day_27,
            day_27.cumulative_unsatisfied_demand
        );
    }

    #[test]
    fn short_runs_report_zero_snapshot() {
        let mut rng = StdRng::seed_from_u64(149);
        let summary = run_inventory(&params(20), &mut rng).unwrap();
        assert_eq!(summary.unsatisfied_demand_day_27, 0.0);
    }

    #[test]
    fn cost_components_reconcile() {
        let mut rng = StdRng::seed_from_u64(151);
        let summary = run_inventory(&params(90), &mut rng).unwrap();
        let components = summary.total_reorder_cost
            + summary.total_holding_cost
            + summary.total_acquisition_cost;
        assert!((summary.total_cost - components).abs() < 1e-9);
        assert!((summary.net_profit - (summary.total_income - summary.total_cost)).abs() < 1e-9);
        let last = summary.days.last().unwrap();
        assert!((last.cumulative_total_cost - summary.total_cost).abs() < 1e-9);
        assert!(
            (last.cumulative_unsatisfied_demand - summary.total_unsatisfied_demand).abs() < 1e-9
        );
    }

    #[test]
    fn run_is_reproducible_for_equal_seeds() {
        let a = run_inventory(&params(90), &mut StdRng::seed_from_u64(157)).unwrap();
        let b = run_inventory(&params(90), &mut StdRng::seed_from_u64(157)).unwrap();
        assert_eq!(a.total_income, b.total_income);
        assert_eq!(a.total_unsatisfied_demand, b.total_unsatisfied_demand);
    }

    #[test]
    fn rejects_nonpositive_capacity() {
        let mut bad = params(30);
        bad.capacity = 0.0;
        let mut rng = StdRng::seed_from_u64(163);
        assert!(matches!(
            run_inventory(&bad, &mut rng),
            Err(SimError::InvalidParameter(_))
        ));
    }
}
