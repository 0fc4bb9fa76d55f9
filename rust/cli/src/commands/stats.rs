//! Statistics over JSONL game histories.

use std::collections::BTreeMap;
use std::io::Write;

use grind_engine::logger::GameRecord;

use crate::error::CliError;
use crate::ui;

/// Handle the stats command: aggregate a JSONL history file.
///
/// Reports game and win counts plus the best winning score. Corrupt lines
/// are skipped with a warning rather than failing the whole report.
pub fn handle_stats_command(
    input: &str,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let contents = std::fs::read_to_string(input)
        .map_err(|e| CliError::InvalidInput(format!("cannot read {}: {}", input, e)))?;

    let mut games = 0u64;
    let mut skipped = 0u64;
    let mut wins: BTreeMap<String, u64> = BTreeMap::new();
    let mut best: Option<(String, u32)> = None;

    for line in contents.lines().filter(|l| !l.trim().is_empty()) {
        let record: GameRecord = match serde_json::from_str(line) {
            Ok(record) => record,
            Err(_) => {
                skipped += 1;
                continue;
            }
        };
        games += 1;
        if let Some(name) = &record.winner_name {
            *wins.entry(name.clone()).or_insert(0) += 1;
            let score = record.winner_score.unwrap_or(0);
            if best.as_ref().map(|(_, s)| score > *s).unwrap_or(true) {
                best = Some((name.clone(), score));
            }
        }
    }

    if skipped > 0 {
        ui::display_warning(err, &format!("{} corrupt record(s) skipped", skipped))?;
    }

    writeln!(out, "Games: {}", games)?;
    writeln!(out, "Wins:")?;
    for (name, count) in &wins {
        writeln!(out, "  {}: {}", name, count)?;
    }
    if let Some((name, score)) = best {
        writeln!(out, "Best winning score: {} ({})", score, name)?;
    }
    Ok(())
}
