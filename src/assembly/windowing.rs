use crate::history::turn::Turn;

/// Render a history window as one `"<Role>: <content>"` line per turn,
/// newline-joined, chronological. An empty window renders to the empty
/// string.
pub fn render_window(turns: &[Turn]) -> String {
    let lines: Vec<String> = turns
        .iter()
        .map(|turn| format!("{}: {}", turn.role.display_name(), turn.content))
        .collect();

    lines.join("\n")
}
