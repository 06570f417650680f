//! Plain-text views of the tracker state

use seatbook_core::range::{compress_codes, group_by_action_position};
use seatbook_core::{HandCode, PlayerRecord, RangeStore, Seat, Summary};

/// Join lines with a trailing newline
fn block(lines: Vec<String>) -> String {
    lines.into_iter().map(|line| line + "\n").collect()
}

/// One line per seat: number, occupancy, player name
pub fn seats(store: &RangeStore, seats: impl Iterator<Item = Seat>) -> String {
    block(
        seats
            .map(|seat| {
                let marker = if store.is_occupied(seat) { "*" } else { " " };
                let name = store
                    .get(seat)
                    .filter(|p| p.is_named())
                    .map(|p| p.name.as_str())
                    .unwrap_or("-");
                format!("{} Seat {:>2}  {}", marker, seat, name)
            })
            .collect(),
    )
}

/// Registered players with their seats
pub fn players(named: &[(Seat, &PlayerRecord)]) -> String {
    if named.is_empty() {
        return "No registered players\n".to_string();
    }
    block(
        named
            .iter()
            .map(|(seat, player)| {
                format!(
                    "Seat {:>2}  {} ({} ranges, {} memos)",
                    seat,
                    player.name,
                    player.actions.len(),
                    player.memos.len()
                )
            })
            .collect(),
    )
}

/// Full player view: name, range summary, compact ranges and memos
pub fn player(seat: Seat, record: &PlayerRecord, summary: &Summary) -> String {
    let name = if record.is_named() {
        record.name.as_str()
    } else {
        "(unregistered)"
    };
    let mut lines = vec![
        format!("Seat {}: {}", seat, name),
        String::new(),
        summary.to_string().trim_end().to_string(),
    ];

    let groups = group_by_action_position(&record.actions);
    if !groups.is_empty() {
        lines.push(String::new());
        lines.extend(groups.iter().map(|group| {
            let tokens = compress_codes(&group.hands);
            format!("{:<14} {}", group.label(), tokens.join(" "))
        }));
    }

    if !record.memos.is_empty() {
        lines.push(String::new());
        lines.push("Memos:".to_string());
        lines.extend(record.memos.iter().map(|memo| match memo.saved_at {
            Some(at) => format!("  [{}] {}", at.format("%Y-%m-%d %H:%M"), memo.text),
            None => format!("  {}", memo.text),
        }));
    }
    block(lines)
}

/// The 13x13 chart; selected cells show their code, others a dot
pub fn chart(selected: &[HandCode]) -> String {
    block(
        HandCode::grid()
            .chunks(13)
            .map(|row| {
                let line: String = row
                    .iter()
                    .map(|cell| {
                        if selected.contains(cell) {
                            format!("{:<4}", cell.to_string())
                        } else {
                            format!("{:<4}", ".")
                        }
                    })
                    .collect();
                line.trim_end().to_string()
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use seatbook_core::{Action, Position, RangeEntry};

    fn hands(codes: &[&str]) -> Vec<HandCode> {
        codes.iter().map(|c| c.parse().unwrap()).collect()
    }

    #[test]
    fn test_seats_view() {
        let mut store = RangeStore::new();
        store.occupy(1);
        store.update(1, |p| p.with_name("Ada"));
        store.upsert_default(2);

        let view = seats(&store, 1..=3);
        assert_eq!(view, "* Seat  1  Ada\n  Seat  2  -\n  Seat  3  -\n");
    }

    #[test]
    fn test_player_view_compacts_ranges() {
        let record = PlayerRecord::default()
            .with_name("Ben")
            .with_range(RangeEntry::new(
                Action::Open,
                Some(Position::Button),
                hands(&["AKs", "AQs", "AJs", "77"]),
            ));
        let summary = seatbook_core::summarize(&record.actions);
        let view = player(4, &record, &summary);

        assert!(view.starts_with("Seat 4: Ben\n"));
        assert!(view.contains("  Pairs: 77\n"));
        assert!(view.contains("OPEN BTN       77 AKs-AJs\n"));
        assert!(!view.contains("Memos:"));
    }

    #[test]
    fn test_player_view_lists_memos() {
        let record = PlayerRecord::default().with_name("Cy").with_memo("limps a lot");
        let summary = seatbook_core::summarize(&record.actions);
        let view = player(2, &record, &summary);

        assert!(view.contains("\nMemos:\n  ["));
        assert!(view.ends_with("] limps a lot\n"));
    }

    #[test]
    fn test_players_view() {
        assert_eq!(players(&[]), "No registered players\n");
        let ada = PlayerRecord::default().with_name("Ada");
        assert_eq!(players(&[(1, &ada)]), "Seat  1  Ada (0 ranges, 0 memos)\n");
    }

    #[test]
    fn test_chart_marks_selection() {
        let view = chart(&hands(&["AA", "AKo"]));
        let lines: Vec<&str> = view.lines().collect();
        assert_eq!(lines.len(), 13);
        assert!(lines[0].starts_with("AA  ."));
        assert!(lines[1].starts_with("AKo ."));
    }
}
