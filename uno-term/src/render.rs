use uno_engine::{snapshot::GameSnapshot, turn::PlayTurnResult};

pub fn render_table(snapshot: &GameSnapshot) -> String {
    let mut lines = Vec::new();

    lines.push(format!(
        "Active card: {}   (play goes {}, deck {}, discard {})",
        snapshot.discard_top,
        snapshot.direction.to_string().to_lowercase(),
        snapshot.deck_count,
        snapshot.discard_count,
    ));

    for player in &snapshot.players {
        let marker = if player.name == snapshot.active_player {
            ">"
        } else {
            " "
        };
        lines.push(format!(
            "{marker} {:<16} {} card(s)",
            player.name,
            player.cards.len()
        ));
    }

    lines.push(String::new());
    lines.push(format!("{}, your hand:", snapshot.active_player));
    for (index, card) in snapshot.active_hand().iter().enumerate() {
        let playable = if card.matches(&snapshot.discard_top) {
            "*"
        } else {
            " "
        };
        lines.push(format!("  #{:<2} {playable} {card}", index + 1));
    }

    lines.join("\n")
}

pub fn render_result(player: &str, result: &PlayTurnResult) -> String {
    let mut lines = match &result.result {
        Ok(effect) => vec![format!("{player} played ({effect}).")],
        Err(reason) => vec![format!("{player}: Invalid move, {reason}.")],
    };
    lines.extend(result.messages());
    lines.join("\n")
}
