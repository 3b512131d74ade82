use std::fmt::Write;

use chrono::NaiveDate;

use crate::models::NormalizedStat;
use crate::shots::ShotPartition;
use crate::stats;

pub fn build_report(
    team: Option<&str>,
    generated_on: NaiveDate,
    stat: &NormalizedStat,
    shots: &ShotPartition,
) -> String {
    let mut output = String::new();
    let team_label = team.unwrap_or("all teams");

    let _ = writeln!(output, "# {} Season Report", stat.player_name);
    let _ = writeln!(output, "Generated for {} on {}", team_label, generated_on);
    let _ = writeln!(output);
    let _ = writeln!(output, "## Traditional Stats (per game)");

    for (label, value) in stats::stat_panel(stat) {
        let _ = writeln!(output, "- {}: {}", label, value);
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Shooting");

    match shots.accuracy() {
        None => {
            let _ = writeln!(output, "No recorded shots for this player.");
        }
        Some(accuracy) => {
            let _ = writeln!(output, "- Attempts: {}", shots.attempts());
            let _ = writeln!(output, "- Made: {}", shots.made.len());
            let _ = writeln!(output, "- Missed: {}", shots.missed.len());
            let _ = writeln!(output, "- Accuracy: {:.2}%", accuracy * 100.0);
        }
    }

    if shots.unrecognized > 0 {
        let _ = writeln!(output);
        let _ = writeln!(output, "## Data Quality");
        let _ = writeln!(
            output,
            "{} shot events had an unrecognized event type and were left out.",
            shots.unrecognized
        );
    }

    output
}
