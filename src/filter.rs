use crate::domain::SourceEvent;

/// Returns true when the event is an original post worth converting.
///
/// Retweets, replies (to a status or to a user) and manual `RT` posts are skipped.
pub fn should_process(event: &SourceEvent) -> bool {
    if event.is_retweet {
        return false;
    }
    if is_set(&event.in_reply_to_status_id)
        || is_set(&event.in_reply_to_user_id)
        || is_set(&event.in_reply_to_screen_name)
    {
        return false;
    }
    !event.text.starts_with("RT")
}

fn is_set(field: &Option<String>) -> bool {
    field.as_deref().is_some_and(|v| !v.is_empty())
}
