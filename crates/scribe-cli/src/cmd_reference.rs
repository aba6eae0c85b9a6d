use anyhow::Context;
use scribe_core::{Activity, ConversationReference};
use std::path::Path;

/// `scribe reference <path> [--index N]`
pub fn execute(path: &Path, index: usize) -> anyhow::Result<()> {
    let activities = scribe_transcript::load(path)
        .with_context(|| format!("loading {}", path.display()))?;
    let reference = reference_at(&activities, index)?;
    println!("{}", serde_json::to_string_pretty(&reference)?);
    Ok(())
}

fn reference_at(activities: &[Activity], index: usize) -> anyhow::Result<ConversationReference> {
    let activity = activities.get(index).ok_or_else(|| {
        anyhow::anyhow!(
            "activity index {index} out of range (transcript has {})",
            activities.len()
        )
    })?;
    Ok(scribe_core::derive_reference(activity))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_turns() -> Vec<Activity> {
        serde_json::from_value(serde_json::json!([
            {"from": {"id": "u", "role": "user"}, "recipient": {"id": "b", "role": "bot"}},
            {"from": {"id": "b", "role": "BOT"}, "recipient": {"id": "u", "role": "user"}}
        ]))
        .unwrap()
    }

    #[test]
    fn picks_requested_activity() {
        let r = reference_at(&two_turns(), 1).unwrap();
        assert_eq!(r.bot.id.as_deref(), Some("b"));
        assert_eq!(r.user.id.as_deref(), Some("u"));
    }

    #[test]
    fn out_of_range_index_errors() {
        let err = reference_at(&two_turns(), 5).unwrap_err();
        assert!(err.to_string().contains("out of range (transcript has 2)"));
    }

    #[test]
    fn execute_reads_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("t.transcript");
        scribe_transcript::save(&path, &two_turns()).unwrap();
        execute(&path, 0).unwrap();
        assert!(execute(&path, 2).is_err());
    }
}
