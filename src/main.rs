use std::path::PathBuf;

use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;

use bizsim::output;
use bizsim::{
    run_customer_arrivals, run_dice_game, run_farm, run_fixed_deposit, run_inventory,
    run_variable_deposit, CustomerArrivalParams, DiceGameParams, FarmParams, FixedDepositParams,
    InventoryParams, VariableDepositParams,
};

#[derive(Debug, Parser)]
#[command(version, about = "Business model simulation engines")]
struct Cli {
    /// Output root; each run writes into a timestamped subdirectory
    #[arg(long, default_value = "output-bizsim")]
    output: PathBuf,

    /// Seed for the scenario's random source
    #[arg(long, default_value_t = 42)]
    seed: u64,

    #[command(subcommand)]
    scenario: Scenario,
}

#[derive(Debug, Subcommand)]
enum Scenario {
    /// Deterministic fixed-rate deposit projection
    FixedDeposit {
        #[arg(long, default_value_t = 1000.0)]
        capital: f64,
        /// Annual interest rate in percent
        #[arg(long, default_value_t = 5.0)]
        rate: f64,
        #[arg(long, default_value_t = 5.0)]
        years: f64,
    },
    /// Monte Carlo deposit growth under a randomized annual rate
    VariableDeposit {
        #[arg(long, default_value_t = 1000.0)]
        capital: f64,
        #[arg(long, default_value_t = 5.0)]
        years: f64,
        #[arg(long, default_value_t = 1000)]
        trials: usize,
    },
    /// Two-die wagering game from the house's perspective
    Dice {
        #[arg(long, default_value_t = 1000)]
        games: usize,
        /// Price the house charges per game
        #[arg(long, default_value_t = 5.0)]
        price: f64,
        /// House payout when the dice sum to seven
        #[arg(long, default_value_t = 30.0)]
        payout: f64,
    },
    /// Hourly retail customer arrivals and purchases
    Customers {
        #[arg(long, default_value_t = 30)]
        days: usize,
        #[arg(long, default_value_t = 8)]
        hours: usize,
        #[arg(long, default_value_t = 50.0)]
        fixed_cost: f64,
        #[arg(long, default_value_t = 2.0)]
        unit_cost: f64,
        #[arg(long, default_value_t = 5.0)]
        unit_price: f64,
    },
    /// Poultry production: eggs, hatching, chick survival
    Farm {
        #[arg(long, default_value_t = 30)]
        days: usize,
        #[arg(long, default_value_t = 0.5)]
        egg_price: f64,
        #[arg(long, default_value_t = 5.0)]
        chicken_price: f64,
    },
    /// Periodic-review inventory with lost sales
    Inventory {
        #[arg(long, default_value_t = 90)]
        days: usize,
        #[arg(long, default_value_t = 1000.0)]
        capacity: f64,
        #[arg(long, default_value_t = 50.0)]
        reorder_cost: f64,
        #[arg(long, default_value_t = 0.1)]
        holding_cost: f64,
        #[arg(long, default_value_t = 2.0)]
        unit_cost: f64,
        #[arg(long, default_value_t = 5.0)]
        unit_price: f64,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut rng = StdRng::seed_from_u64(cli.seed);

    // Run the engine first so an invalid invocation fails before any
    // run directory is created.
    let run_dir = match cli.scenario {
        Scenario::FixedDeposit {
            capital,
            rate,
            years,
        } => {
            let params = FixedDepositParams {
                capital,
                rate_percent: rate,
                years,
            };
            let summary = run_fixed_deposit(&params)?;
            let run_dir = output::create_run_dir(&cli.output)?;
            output::write_records_csv(&run_dir.join("schedule.csv"), &summary.schedule)?;
            output::write_summary_json(&run_dir.join("summary.json"), &summary)?;
            println!(
                "Final capital: {:.2} | gain: {:.2} | return: {:.2}%",
                summary.final_capital, summary.total_gain, summary.return_rate_percent
            );
            run_dir
        }
        Scenario::VariableDeposit {
            capital,
            years,
            trials,
        } => {
            let params = VariableDepositParams {
                capital,
                years,
                trials,
            };
            let summary = run_variable_deposit(&params, &mut rng)?;
            let run_dir = output::create_run_dir(&cli.output)?;
            output::write_trials_csv(&run_dir.join("trials.csv"), &summary.finals)?;
            output::write_summary_json(&run_dir.join("summary.json"), &summary)?;
            println!(
                "Mean: {:.2} | min: {:.2} | max: {:.2} | stddev: {:.2} | CV: {:.2}%",
                summary.mean_capital,
                summary.min_capital,
                summary.max_capital,
                summary.std_dev,
                summary.coefficient_of_variation
            );
            run_dir
        }
        Scenario::Dice {
            games,
            price,
            payout,
        } => {
            let params = DiceGameParams {
                games,
                entry_price: price,
                seven_payout: payout,
            };
            let summary = run_dice_game(&params, &mut rng)?;
            let run_dir = output::create_run_dir(&cli.output)?;
            output::write_records_csv(&run_dir.join("games.csv"), &summary.games)?;
            output::write_summary_json(&run_dir.join("summary.json"), &summary)?;
            println!(
                "House gain: {:.2} | house wins: {} ({:.2}%) | player wins: {} ({:.2}%)",
                summary.total_house_gain,
                summary.house_wins,
                summary.house_win_percent,
                summary.player_wins,
                summary.player_win_percent
            );
            run_dir
        }
        Scenario::Customers {
            days,
            hours,
            fixed_cost,
            unit_cost,
            unit_price,
        } => {
            let params = CustomerArrivalParams {
                days,
                hours_per_day: hours,
                daily_fixed_cost: fixed_cost,
                unit_cost,
                unit_price,
            };
            let summary = run_customer_arrivals(&params, &mut rng)?;
            let run_dir = output::create_run_dir(&cli.output)?;
            output::write_customer_days_csv(&run_dir.join("days.csv"), &summary.days)?;
            output::write_customer_hours_csv(&run_dir.join("hours.csv"), &summary.days)?;
            output::write_summary_json(&run_dir.join("summary.json"), &summary)?;
            println!(
                "Customers: {} | items: {} | net profit: {:.2} | profitable days: {}/{}",
                summary.total_customers,
                summary.total_items_sold,
                summary.total_net_profit,
                summary.profitable_days,
                days
            );
            run_dir
        }
        Scenario::Farm {
            days,
            egg_price,
            chicken_price,
        } => {
            let params = FarmParams {
                days,
                egg_price,
                chicken_price,
            };
            let summary = run_farm(&params, &mut rng)?;
            let run_dir = output::create_run_dir(&cli.output)?;
            output::write_records_csv(&run_dir.join("days.csv"), &summary.days)?;
            output::write_summary_json(&run_dir.join("summary.json"), &summary)?;
            println!(
                "Income: {:.2} | eggs sold: {} | chickens: {} | broken: {}",
                summary.total_income,
                summary.total_eggs_sold,
                summary.total_surviving_chickens,
                summary.total_broken_eggs
            );
            run_dir
        }
        Scenario::Inventory {
            days,
            capacity,
            reorder_cost,
            holding_cost,
            unit_cost,
            unit_price,
        } => {
            let params = InventoryParams {
                days,
                capacity,
                reorder_cost,
                holding_cost,
                unit_cost,
                unit_price,
            };
            let summary = run_inventory(&params, &mut rng)?;
            let run_dir = output::create_run_dir(&cli.output)?;
            output::write_records_csv(&run_dir.join("days.csv"), &summary.days)?;
            output::write_summary_json(&run_dir.join("summary.json"), &summary)?;
            println!(
                "Income: {:.2} | cost: {:.2} | net: {:.2} | unsatisfied demand: {:.2}",
                summary.total_income,
                summary.total_cost,
                summary.net_profit,
                summary.total_unsatisfied_demand
            );
            run_dir
        }
    };

    println!("Run directory: {}", run_dir.display());
    Ok(())
}
