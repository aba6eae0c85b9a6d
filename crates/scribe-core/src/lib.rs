pub mod reference;
pub mod types;

pub use reference::{derive_reference, ConversationReference};
pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn public_types_are_send_and_sync() {
        assert_send_sync::<Activity>();
        assert_send_sync::<ChannelAccount>();
        assert_send_sync::<ConversationAccount>();
        assert_send_sync::<ConversationReference>();
    }
}
