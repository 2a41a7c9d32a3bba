//! CSV export of simulated series for plotting tools and spreadsheets

use std::io::Write;

use crate::error::VixResult;
use crate::models::replay::EventReplay;
use crate::simulation::types::{EnsembleBands, SimulatedPath};

/// Writes `day,vix,vol` rows.
pub fn write_path_csv<W: Write>(path: &SimulatedPath, writer: W) -> VixResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["day", "vix", "vol"])?;
    for (day, (vix, vol)) in path.vix.iter().zip(path.vol.iter()).enumerate() {
        wtr.write_record(&[day.to_string(), vix.to_string(), vol.to_string()])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Writes `day_offset,vix` rows.
pub fn write_replay_csv<W: Write>(replay: &EventReplay, writer: W) -> VixResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["day_offset", "vix"])?;
    for (day, vix) in replay.day_offsets.iter().zip(replay.vix.iter()) {
        wtr.write_record(&[day.to_string(), vix.to_string()])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Writes one row per day: `day,vix_mean,vol_mean` followed by
/// `vix_qXX` / `vol_qXX` columns for every quantile level.
pub fn write_bands_csv<W: Write>(bands: &EnsembleBands, writer: W) -> VixResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    let mut header = vec!["day".to_string(), "vix_mean".to_string(), "vol_mean".to_string()];
    for q in &bands.quantile_levels {
        header.push(format!("vix_q{}", quantile_tag(*q)));
    }
    for q in &bands.quantile_levels {
        header.push(format!("vol_q{}", quantile_tag(*q)));
    }
    wtr.write_record(&header)?;

    for day in 0..bands.horizon() {
        let mut row = vec![
            day.to_string(),
            bands.vix_mean[day].to_string(),
            bands.vol_mean[day].to_string(),
        ];
        row.extend(bands.vix_quantiles.iter().map(|band| band[day].to_string()));
        row.extend(bands.vol_quantiles.iter().map(|band| band[day].to_string()));
        wtr.write_record(&row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// 0.05 -> "05", 0.5 -> "50", 0.975 -> "97.5"
fn quantile_tag(q: f64) -> String {
    let pct = q * 100.0;
    if (pct - pct.round()).abs() < 1e-9 {
        format!("{:02}", pct.round() as u32)
    } else {
        format!("{}", pct)
    }
}
