//! Two-die wagering game from the house's perspective.
//!
//! Each game rolls two fair dice. A sum of seven means the player wins
//! and the house pays out; any other sum is a house win. Every game is
//! recorded; truncating the table for display is the caller's concern.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::variates;
use crate::SimError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiceGameParams {
    /// Number of games, 1..=10000.
    pub games: usize,
    /// Price the house charges per game.
    pub entry_price: f64,
    /// Amount the house pays when the dice sum to seven.
    pub seven_payout: f64,
}

impl DiceGameParams {
    pub fn validate(&self) -> Result<(), SimError> {
        if !(1..=10_000).contains(&self.games) {
            return Err(SimError::InvalidParameter(
                "games must be between 1 and 10000".to_string(),
            ));
        }
        if !self.entry_price.is_finite() || self.entry_price < 0.0 {
            return Err(SimError::InvalidParameter(
                "entry_price must be non-negative".to_string(),
            ));
        }
        if !self.seven_payout.is_finite() || self.seven_payout < 0.0 {
            return Err(SimError::InvalidParameter(
                "seven_payout must be non-negative".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Winner {
    House,
    Player,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct GameRecord {
    pub game: usize,
    pub die1: u8,
    pub die2: u8,
    pub sum: u8,
    pub winner: Winner,
    /// House net gain for this game; negative when the payout exceeds
    /// the entry price.
    pub house_gain: f64,
    pub cumulative_house_gain: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct DiceGameSummary {
    pub total_house_gain: f64,
    pub house_wins: usize,
    pub player_wins: usize,
    pub house_win_percent: f64,
    pub player_win_percent: f64,
    pub games: Vec<GameRecord>,
}

pub fn run_dice_game<R: Rng>(
    params: &DiceGameParams,
    rng: &mut R,
) -> Result<DiceGameSummary, SimError> {
    params.validate()?;

    let mut games = Vec::with_capacity(params.games);
    let mut cumulative = 0.0;
    let mut house_wins = 0_usize;
    let mut player_wins = 0_usize;

    for game in 1..=params.games {
        let die1 = variates::discrete_uniform(rng, 1, 6) as u8;
        let die2 = variates::discrete_uniform(rng, 1, 6) as u8;
        let sum = die1 + die2;

        let (winner, house_gain) = if sum == 7 {
            player_wins += 1;
            (Winner::Player, params.entry_price - params.seven_payout)
        } else {
            house_wins += 1;
            (Winner::House, params.entry_price)
        };
        cumulative += house_gain;

        games.push(GameRecord {
            game,
            die1,
            die2,
            sum,
            winner,
            house_gain,
            cumulative_house_gain: cumulative,
        });
    }

    let total = params.games as f64;
    Ok(DiceGameSummary {
        total_house_gain: cumulative,
        house_wins,
        player_wins,
        house_win_percent: house_wins as f64 / total * 100.0,
        player_win_percent: player_wins as f64 / total * 100.0,
        games,
    })
}
