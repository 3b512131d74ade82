use tracing::debug;

use crate::error::{Result, ShotChartError};
use crate::models::{NormalizedStat, PlayerSeasonStat};

/// Divides the seven counting totals by games played. Age and shooting
/// percentages are rates already and pass through.
pub fn normalize(stat: &PlayerSeasonStat) -> Result<NormalizedStat> {
    if stat.games_played == 0 {
        return Err(ShotChartError::DivisionByZero {
            player: stat.player_name.clone(),
        });
    }

    let games = f64::from(stat.games_played);
    let per_game = |total: f64| total / games;

    Ok(NormalizedStat {
        player_name: stat.player_name.clone(),
        age: stat.age,
        games_played: stat.games_played,
        field_goal_pct: stat.field_goal_pct,
        three_point_pct: stat.three_point_pct,
        minutes: per_game(stat.minutes),
        points: per_game(stat.points),
        rebounds: per_game(stat.rebounds),
        assists: per_game(stat.assists),
        steals: per_game(stat.steals),
        blocks: per_game(stat.blocks),
        turnovers: per_game(stat.turnovers),
    })
}

/// Label/value rows for the traditional stats panel, values at two decimals.
pub fn stat_panel(stat: &NormalizedStat) -> Vec<(&'static str, String)> {
    let rows = [
        ("Age", stat.age),
        ("Games Played", f64::from(stat.games_played)),
        ("Field Goal Percentage", stat.field_goal_pct),
        ("3 Point Percentage", stat.three_point_pct),
        ("Minutes Played", stat.minutes),
        ("Points", stat.points),
        ("Rebounds", stat.rebounds),
        ("Assists", stat.assists),
        ("Steals", stat.steals),
        ("Blocks", stat.blocks),
        ("Turnovers", stat.turnovers),
    ];

    debug!(player = %stat.player_name, "formatted stat panel");
    rows.into_iter()
        .map(|(label, value)| (label, format!("{value:.2}")))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_stat(games_played: u32) -> PlayerSeasonStat {
        PlayerSeasonStat {
            player_name: "X".to_string(),
            age: 25.0,
            games_played,
            field_goal_pct: 0.45,
            three_point_pct: 0.35,
            minutes: 300.0,
            points: 200.0,
            rebounds: 50.0,
            assists: 40.0,
            steals: 10.0,
            blocks: 5.0,
            turnovers: 20.0,
        }
    }

    #[test]
    fn counting_stats_become_per_game() {
        let normalized = normalize(&sample_stat(10)).unwrap();
        assert!((normalized.points - 20.0).abs() < 1e-9);
        assert!((normalized.minutes - 30.0).abs() < 1e-9);
        assert!((normalized.rebounds - 5.0).abs() < 1e-9);
        assert!((normalized.assists - 4.0).abs() < 1e-9);
        assert!((normalized.steals - 1.0).abs() < 1e-9);
        assert!((normalized.blocks - 0.5).abs() < 1e-9);
        assert!((normalized.turnovers - 2.0).abs() < 1e-9);
    }

    #[test]
    fn rates_pass_through_unchanged() {
        let stat = sample_stat(7);
        let normalized = normalize(&stat).unwrap();
        assert_eq!(normalized.age, stat.age);
        assert_eq!(normalized.field_goal_pct, stat.field_goal_pct);
        assert_eq!(normalized.three_point_pct, stat.three_point_pct);
        assert_eq!(normalized.games_played, 7);
        assert_eq!(normalized.points, stat.points / 7.0);
    }

    #[test]
    fn zero_games_is_an_error() {
        match normalize(&sample_stat(0)) {
            Err(ShotChartError::DivisionByZero { player }) => assert_eq!(player, "X"),
            other => panic!("expected DivisionByZero, got {other:?}"),
        }
    }

    #[test]
    fn panel_formats_two_decimals() {
        let panel = stat_panel(&normalize(&sample_stat(10)).unwrap());
        let lookup = |label: &str| {
            panel
                .iter()
                .find(|(l, _)| *l == label)
                .map(|(_, v)| v.as_str())
                .unwrap()
        };

        assert_eq!(panel.len(), 11);
        assert_eq!(panel[0].0, "Age");
        assert_eq!(lookup("Age"), "25.00");
        assert_eq!(lookup("Games Played"), "10.00");
        assert_eq!(lookup("Field Goal Percentage"), "0.45");
        assert_eq!(lookup("3 Point Percentage"), "0.35");
        assert_eq!(lookup("Points"), "20.00");
        assert_eq!(lookup("Minutes Played"), "30.00");
        assert_eq!(lookup("Rebounds"), "5.00");
        assert_eq!(lookup("Assists"), "4.00");
        assert_eq!(lookup("Steals"), "1.00");
        assert_eq!(lookup("Blocks"), "0.50");
        assert_eq!(lookup("Turnovers"), "2.00");
    }
}
