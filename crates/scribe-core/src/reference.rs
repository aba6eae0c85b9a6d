use crate::types::{Activity, ChannelAccount, ConversationAccount};
use serde::{Deserialize, Serialize};

/// Who is who in a conversation, plus the routing data needed to address it again.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConversationReference {
    pub user: ChannelAccount,
    pub bot: ChannelAccount,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversation: Option<ConversationAccount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_url: Option<String>,
}

/// Derive the conversation reference of an activity.
///
/// If the sender's role is "bot" (any case) the sender is the bot and the
/// recipient the user; otherwise the roles are swapped. A missing role
/// counts as "not bot". Routing fields are copied as-is.
pub fn derive_reference(activity: &Activity) -> ConversationReference {
    let (bot, user) = if activity.from.is_bot() {
        (&activity.from, &activity.recipient)
    } else {
        (&activity.recipient, &activity.from)
    };
    ConversationReference {
        user: user.clone(),
        bot: bot.clone(),
        conversation: activity.conversation.clone(),
        channel_id: activity.channel_id.clone(),
        service_url: activity.service_url.clone(),
    }
}

impl Activity {
    pub fn conversation_reference(&self) -> ConversationReference {
        derive_reference(self)
    }
}
