use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Well-known values of `ChannelAccount::role`.
pub mod role_types {
    pub const BOT: &str = "bot";
    pub const USER: &str = "user";
    pub const SKILL: &str = "skill";
}

/// Well-known values of `Activity::activity_type`.
pub mod activity_types {
    pub const MESSAGE: &str = "message";
    pub const CONVERSATION_UPDATE: &str = "conversationUpdate";
    pub const TYPING: &str = "typing";
    pub const END_OF_CONVERSATION: &str = "endOfConversation";
    pub const EVENT: &str = "event";
}

/// One side of a conversation: a user, a bot, or a skill.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChannelAccount {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aad_object_id: Option<String>,
    #[serde(flatten)]
    pub properties: Map<String, Value>,
}

impl ChannelAccount {
    /// True when `role` is "bot" under an ASCII case fold.
    ///
    /// The fold is locale-independent on purpose; a missing role is never a bot.
    pub fn is_bot(&self) -> bool {
        self.role
            .as_deref()
            .is_some_and(|r| r.eq_ignore_ascii_case(role_types::BOT))
    }
}

/// Conversation identity. Scribe never interprets it, only carries it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConversationAccount {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_group: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversation_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<String>,
    #[serde(flatten)]
    pub properties: Map<String, Value>,
}

/// A single recorded activity (one element of a `.transcript` JSON array).
///
/// Fields Scribe does not model land in `properties`, so loading and saving
/// a transcript keeps attachments, entities, channel data and so on intact.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    #[serde(
        rename = "type",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub activity_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_to_id: Option<String>,
    #[serde(default)]
    pub from: ChannelAccount,
    #[serde(default)]
    pub recipient: ChannelAccount,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversation: Option<ConversationAccount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_url: Option<String>,
    #[serde(flatten)]
    pub properties: Map<String, Value>,
}

impl Activity {
    /// Whether this activity was sent by the bot (a reply).
    pub fn is_reply(&self) -> bool {
        self.from.is_bot()
    }

    pub fn is_message(&self) -> bool {
        self.activity_type.as_deref() == Some(activity_types::MESSAGE)
    }
}
