use anyhow::Context;
use scribe_core::{Activity, ChannelAccount};
use std::path::Path;

/// `scribe show <path> [--json]`
pub fn execute(path: &Path, json: bool) -> anyhow::Result<()> {
    let activities = scribe_transcript::load(path)
        .with_context(|| format!("loading {}", path.display()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&activities)?);
        return Ok(());
    }

    if activities.is_empty() {
        println!("(empty transcript)");
        return Ok(());
    }
    for (i, activity) in activities.iter().enumerate() {
        println!("{}", format_line(i, activity));
    }
    Ok(())
}

fn format_line(index: usize, activity: &Activity) -> String {
    let kind = activity.activity_type.as_deref().unwrap_or("?");
    let mut line = format!(
        "{index:>3}  {kind:<20} {} -> {}",
        party(&activity.from),
        party(&activity.recipient)
    );
    if let Some(text) = activity.text.as_deref().filter(|t| !t.is_empty()) {
        line.push_str(&format!("  {text:?}"));
    }
    line
}

fn party(account: &ChannelAccount) -> String {
    let who = account
        .name
        .as_deref()
        .or(account.id.as_deref())
        .unwrap_or("?");
    match account.role.as_deref() {
        Some(role) if !role.is_empty() => format!("{who} ({role})"),
        _ => who.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_shows_parties_and_text() {
        let a: Activity = serde_json::from_value(serde_json::json!({
            "type": "message",
            "text": "hello",
            "from": {"id": "u1", "name": "Ana", "role": "user"},
            "recipient": {"id": "b1", "role": "bot"}
        }))
        .unwrap();
        let line = format_line(2, &a);
        assert!(line.starts_with("  2  message"));
        assert!(line.contains("Ana (user) -> b1 (bot)"));
        assert!(line.ends_with("\"hello\""));
    }

    #[test]
    fn line_tolerates_missing_fields() {
        let line = format_line(0, &Activity::default());
        assert!(line.contains("? -> ?"));
    }

    #[test]
    fn execute_missing_file_errors() {
        let err = execute(Path::new("no/such.transcript"), false).unwrap_err();
        let root = err
            .downcast_ref::<scribe_transcript::TranscriptError>()
            .expect("typed error in chain");
        assert!(root.is_not_found());
    }
}
