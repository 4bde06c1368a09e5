//! Built-in roster used when no roster file or database is configured

use crate::types::{Achievements, CareerStats, Player, PlayerId};

/// The ten-player demonstration roster, ordered by id
pub fn players() -> Vec<Player> {
    vec![
        Player::new(1, "Michael Jordan", "Chicago Bulls", "SG", "23", 1984, 2003),
        Player::new(2, "LeBron James", "Los Angeles Lakers", "SF", "23", 2003, 2023),
        Player::new(3, "Kobe Bryant", "Los Angeles Lakers", "SG", "24", 1996, 2016),
        Player::new(4, "Magic Johnson", "Los Angeles Lakers", "PG", "32", 1979, 1996),
        Player::new(5, "Larry Bird", "Boston Celtics", "SF", "33", 1979, 1992),
        Player::new(6, "Kareem Abdul-Jabbar", "Los Angeles Lakers", "C", "33", 1969, 1989),
        Player::new(7, "Wilt Chamberlain", "Philadelphia 76ers", "C", "13", 1959, 1973),
        Player::new(8, "Bill Russell", "Boston Celtics", "C", "6", 1956, 1969),
        Player::new(9, "Tim Duncan", "San Antonio Spurs", "PF", "21", 1997, 2016),
        Player::new(10, "Shaquille O'Neal", "Los Angeles Lakers", "C", "34", 1992, 2011),
    ]
}

fn line(ppg: f64, rpg: f64, apg: f64, spg: f64, bpg: f64, fgp: f64, tpp: f64, ftp: f64) -> CareerStats {
    CareerStats { ppg, rpg, apg, spg, bpg, fgp, tpp, ftp }
}

/// Career averages keyed by player id
pub fn career_stats() -> Vec<(PlayerId, CareerStats)> {
    vec![
        (1, line(30.1, 6.2, 5.3, 2.3, 0.8, 49.7, 32.7, 83.5)),
        (2, line(27.0, 7.4, 7.4, 1.6, 0.8, 50.4, 34.4, 73.4)),
        (3, line(25.0, 5.2, 4.7, 1.4, 0.5, 44.7, 32.9, 83.7)),
        (4, line(19.5, 7.2, 11.2, 1.9, 0.4, 52.0, 30.3, 84.8)),
        (5, line(24.3, 10.0, 6.3, 1.7, 0.8, 49.6, 37.6, 88.6)),
        (6, line(24.6, 11.2, 3.6, 0.9, 2.6, 55.9, 5.6, 72.1)),
        // Steals, blocks and threes were not tracked during these careers
        (7, line(30.1, 22.9, 4.4, 0.0, 0.0, 54.0, 0.0, 51.1)),
        (8, line(15.1, 22.5, 4.3, 0.0, 0.0, 44.0, 0.0, 56.1)),
        (9, line(19.0, 10.8, 3.0, 0.7, 2.2, 50.6, 17.9, 69.6)),
        (10, line(23.7, 10.9, 2.5, 0.6, 2.3, 58.2, 4.5, 52.7)),
    ]
}

fn awards(
    championships: u32,
    mvps: u32,
    all_star: u32,
    all_nba: u32,
    all_defense: u32,
    scoring_titles: u32,
    dpoy: u32,
) -> Achievements {
    Achievements { championships, mvps, all_star, all_nba, all_defense, scoring_titles, dpoy }
}

/// Award counts keyed by player id
pub fn achievements() -> Vec<(PlayerId, Achievements)> {
    vec![
        (1, awards(6, 5, 14, 11, 9, 10, 1)),
        (2, awards(4, 4, 19, 19, 6, 1, 0)),
        (3, awards(5, 1, 18, 15, 12, 2, 0)),
        (4, awards(5, 3, 12, 10, 0, 0, 0)),
        (5, awards(3, 3, 12, 10, 3, 0, 0)),
        (6, awards(6, 6, 19, 15, 11, 2, 0)),
        (7, awards(2, 4, 13, 10, 2, 7, 0)),
        (8, awards(11, 5, 12, 11, 1, 0, 0)),
        (9, awards(5, 2, 15, 15, 15, 0, 0)),
        (10, awards(4, 1, 15, 14, 3, 2, 0)),
    ]
}
