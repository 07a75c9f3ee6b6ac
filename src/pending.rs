use std::time::{Duration, Instant};
use teloxide::dispatching::dialogue::{Dialogue, InMemStorage, InMemStorageError};

/// What the next free-text message from an admin should be used for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdminAction {
    BroadcastUsers,
    BroadcastGroups,
    AddAdmin,
}

/// Per-chat admin dialogue. Admin input is only taken in private chats, so
/// the chat id is the operator's user id.
#[derive(Clone, Debug, Default)]
pub enum PendingState {
    #[default]
    Idle,
    Awaiting {
        action: AdminAction,
        since: Instant,
    },
}

pub type PendingStorage = InMemStorage<PendingState>;
pub type PendingDialogue = Dialogue<PendingState, PendingStorage>;

/// How long an `Awaiting` state stays live.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingTtl(pub Duration);

impl PendingState {
    pub fn awaiting(action: AdminAction) -> Self {
        PendingState::Awaiting {
            action,
            since: Instant::now(),
        }
    }

    /// The action this state is waiting on, unless it is idle or older than `ttl`.
    pub fn live_action(&self, ttl: PendingTtl) -> Option<AdminAction> {
        match self {
            PendingState::Awaiting { action, since } if since.elapsed() < ttl.0 => Some(*action),
            _ => None,
        }
    }

    fn is_stale(&self, ttl: PendingTtl) -> bool {
        matches!(self, PendingState::Awaiting { .. }) && self.live_action(ttl).is_none()
    }
}

/// Router filter: yields the live pending action for this chat. A stale one
/// is dropped from storage so it never intercepts a later message.
pub async fn live_action(
    dialogue: PendingDialogue,
    state: PendingState,
    ttl: PendingTtl,
) -> Option<AdminAction> {
    if state.is_stale(ttl) {
        log::info!("Pending admin action in chat {} expired", dialogue.chat_id());
        if let Err(e) = dialogue.exit().await {
            log::error!("Failed to clear expired dialogue: {}", e);
        }
        return None;
    }
    state.live_action(ttl)
}

/// Clears the chat's pending action. Returns `true` when one was waiting.
pub async fn cancel(dialogue: &PendingDialogue) -> Result<bool, InMemStorageError> {
    let waiting = matches!(dialogue.get().await?, Some(PendingState::Awaiting { .. }));
    dialogue.exit().await?;
    Ok(waiting)
}

#[cfg(test)]
mod tests {
    use super::*;
    use teloxide::types::ChatId;

    const TEN_MINUTES: PendingTtl = PendingTtl(Duration::from_secs(600));

    fn dialogue_for(storage: &std::sync::Arc<PendingStorage>, chat: i64) -> PendingDialogue {
        PendingDialogue::new(storage.clone(), ChatId(chat))
    }

    async fn state_of(dialogue: &PendingDialogue) -> PendingState {
        dialogue.get_or_default().await.unwrap()
    }

    #[test]
    fn test_idle_has_no_action() {
        assert_eq!(PendingState::Idle.live_action(TEN_MINUTES), None);
        assert!(!PendingState::Idle.is_stale(TEN_MINUTES));
    }

    #[test]
    fn test_fresh_state_is_live() {
        let state = PendingState::awaiting(AdminAction::AddAdmin);
        assert_eq!(state.live_action(TEN_MINUTES), Some(AdminAction::AddAdmin));
        assert!(!state.is_stale(TEN_MINUTES));
    }

    #[test]
    fn test_state_older_than_ttl_is_stale() {
        let state = PendingState::awaiting(AdminAction::BroadcastUsers);
        assert_eq!(state.live_action(PendingTtl(Duration::ZERO)), None);
        assert!(state.is_stale(PendingTtl(Duration::ZERO)));
    }

    #[tokio::test]
    async fn test_states_are_per_chat() {
        let storage = PendingStorage::new();
        let first = dialogue_for(&storage, 1);
        let second = dialogue_for(&storage, 2);

        first.update(PendingState::awaiting(AdminAction::BroadcastUsers)).await.unwrap();
        second.update(PendingState::awaiting(AdminAction::BroadcastGroups)).await.unwrap();

        assert_eq!(
            state_of(&first).await.live_action(TEN_MINUTES),
            Some(AdminAction::BroadcastUsers)
        );
        assert_eq!(
            state_of(&second).await.live_action(TEN_MINUTES),
            Some(AdminAction::BroadcastGroups)
        );
    }

    #[tokio::test]
    async fn test_later_prompt_replaces_earlier() {
        let storage = PendingStorage::new();
        let dialogue = dialogue_for(&storage, 42);

        dialogue.update(PendingState::awaiting(AdminAction::BroadcastUsers)).await.unwrap();
        dialogue.update(PendingState::awaiting(AdminAction::AddAdmin)).await.unwrap();

        assert_eq!(
            state_of(&dialogue).await.live_action(TEN_MINUTES),
            Some(AdminAction::AddAdmin)
        );
    }

    #[tokio::test]
    async fn test_live_action_passes_fresh_state_through() {
        let storage = PendingStorage::new();
        let dialogue = dialogue_for(&storage, 42);
        dialogue.update(PendingState::awaiting(AdminAction::AddAdmin)).await.unwrap();

        let state = state_of(&dialogue).await;
        let action = live_action(dialogue.clone(), state, TEN_MINUTES).await;

        assert_eq!(action, Some(AdminAction::AddAdmin));
        assert!(dialogue.get().await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_live_action_drops_expired_state() {
        let storage = PendingStorage::new();
        let dialogue = dialogue_for(&storage, 42);
        dialogue.update(PendingState::awaiting(AdminAction::BroadcastUsers)).await.unwrap();

        let state = state_of(&dialogue).await;
        let action = live_action(dialogue.clone(), state, PendingTtl(Duration::ZERO)).await;

        assert_eq!(action, None);
        assert!(dialogue.get().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_cancel() {
        let storage = PendingStorage::new();
        let dialogue = dialogue_for(&storage, 42);
        assert!(!cancel(&dialogue).await.unwrap());

        dialogue.update(PendingState::awaiting(AdminAction::AddAdmin)).await.unwrap();
        assert!(cancel(&dialogue).await.unwrap());
        assert_eq!(state_of(&dialogue).await.live_action(TEN_MINUTES), None);
        assert!(!cancel(&dialogue).await.unwrap());
    }
}
