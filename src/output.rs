//! Run artifact export: detail CSVs and JSON summaries written into a
//! collision-safe timestamped run directory.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use csv::Writer;
use serde::Serialize;

use crate::retail::DailyCustomerRecord;
use crate::SimError;

/// Creates `<root>/<timestamp>`, suffixing a counter if the directory
/// already exists.
pub fn create_run_dir(root: &Path) -> Result<PathBuf, SimError> {
    fs::create_dir_all(root)?;

    let timestamp = Utc::now().format("%Y-%m-%dT%H-%M-%SZ").to_string();
    let mut run_dir = root.join(&timestamp);
    let mut counter = 1_u32;

    while run_dir.exists() {
        run_dir = root.join(format!("{timestamp}-{counter:02}"));
        counter += 1;
    }

    fs::create_dir_all(&run_dir)?;
    Ok(run_dir)
}

/// Writes one CSV row per record; works for any flat record type.
pub fn write_records_csv<T: Serialize>(path: &Path, records: &[T]) -> Result<(), SimError> {
    let mut writer = Writer::from_path(path)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_summary_json<T: Serialize>(path: &Path, summary: &T) -> Result<(), SimError> {
    let data = serde_json::to_string_pretty(summary)?;
    fs::write(path, data)?;
    Ok(())
}

/// Variable-deposit trial sample, one row per trial.
pub fn write_trials_csv(path: &Path, finals: &[f64]) -> Result<(), SimError> {
    let mut writer = Writer::from_path(path)?;
    writer.write_record(["trial", "final_capital"])?;
    for (idx, value) in finals.iter().enumerate() {
        writer.write_record([(idx + 1).to_string(), fmt_f64(*value)])?;
    }
    writer.flush()?;
    Ok(())
}

/// Daily retail rows; the nested hourly detail goes to its own file.
pub fn write_customer_days_csv(
    path: &Path,
    days: &[DailyCustomerRecord],
) -> Result<(), SimError> {
    let mut writer = Writer::from_path(path)?;
    writer.write_record([
        "day",
        "customers",
        "items_sold",
        "revenue",
        "variable_cost",
        "fixed_cost",
        "net_profit",
        "profitable",
    ])?;
    for day in days {
        writer.write_record([
            day.day.to_string(),
            day.customers.to_string(),
            day.items_sold.to_string(),
            fmt_f64(day.revenue),
            fmt_f64(day.variable_cost),
            fmt_f64(day.fixed_cost),
            fmt_f64(day.net_profit),
            day.profitable.to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_customer_hours_csv(
    path: &Path,
    days: &[DailyCustomerRecord],
) -> Result<(), SimError> {
    let mut writer = Writer::from_path(path)?;
    writer.write_record(["day", "hour", "customers", "items_sold"])?;
    for day in days {
        for hour in &day.hours {
            writer.write_record([
                day.day.to_string(),
                hour.hour.to_string(),
                hour.customers.to_string(),
                hour.items_sold.to_string(),
            ])?;
        }
    }
    writer.flush()?;
    Ok(())
}

fn fmt_f64(value: f64) -> String {
    format!("{value:.10}")
}
