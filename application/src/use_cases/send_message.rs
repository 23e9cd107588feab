//! Send message use case.
//!
//! Executes one chat round: append the user Turn, send the full log to the
//! completion gateway, and append the returned assistant Turn.
//!
//! On failure the log keeps the unanswered user Turn. The log is a
//! display/replay log, not a transactional structure, so no rollback is
//! performed.

use crate::ports::completion_gateway::{CompletionError, CompletionGateway};
use confab_domain::Session;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during a chat round.
#[derive(Error, Debug)]
pub enum SendMessageError {
    #[error(transparent)]
    Completion(#[from] CompletionError),

    #[error("Empty reply from model")]
    EmptyReply,
}

/// Use case for one user-input event.
///
/// One in-flight request at a time: the caller awaits the result before
/// dispatching the next input.
pub struct SendMessageUseCase {
    gateway: Arc<dyn CompletionGateway>,
}

impl SendMessageUseCase {
    pub fn new(gateway: Arc<dyn CompletionGateway>) -> Self {
        Self { gateway }
    }

    /// Execute one round and return the assistant's reply text.
    ///
    /// The snapshot sent to the gateway always ends with the new user Turn;
    /// the gateway never mutates history itself.
    pub async fn execute(
        &self,
        session: &mut Session,
        input: &str,
    ) -> Result<String, SendMessageError> {
        session.initialize();
        session.append_user(input);

        debug!(
            session = session.id(),
            turns = session.snapshot().len(),
            "Sending conversation to completion endpoint"
        );

        let reply = self
            .gateway
            .complete(session.model(), session.snapshot())
            .await?;

        if reply.is_empty() {
            return Err(SendMessageError::EmptyReply);
        }

        session.append_assistant(reply.clone());
        info!(
            session = session.id(),
            turns = session.snapshot().len(),
            "Chat round completed"
        );

        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::completion_gateway::ErrorKind;
    use async_trait::async_trait;
    use confab_domain::{Model, Role, Turn};
    use std::collections::VecDeque;
    use std::sync::Mutex;

    // ==================== Test Mocks ====================

    struct MockGateway {
        replies: Mutex<VecDeque<Result<String, CompletionError>>>,
        seen_turns: Mutex<Vec<Vec<Turn>>>,
    }

    impl MockGateway {
        fn new(replies: Vec<Result<String, CompletionError>>) -> Self {
            Self {
                replies: Mutex::new(VecDeque::from(replies)),
                seen_turns: Mutex::new(Vec::new()),
            }
        }

        fn seen_turns(&self) -> Vec<Vec<Turn>> {
            self.seen_turns.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl CompletionGateway for MockGateway {
        async fn complete(
            &self,
            _model: &Model,
            turns: &[Turn],
        ) -> Result<String, CompletionError> {
            self.seen_turns.lock().unwrap().push(turns.to_vec());
            self.replies
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| {
                    Err(CompletionError::new(ErrorKind::Transient, "No more replies"))
                })
        }
    }

    fn session() -> Session {
        Session::new("test-session", Model::default())
    }

    // ==================== Tests ====================

    #[tokio::test]
    async fn test_successful_round_appends_both_turns() {
        // Scenario: empty log, user submits "Hello", reply is "Hi there"
        let gateway = Arc::new(MockGateway::new(vec![Ok("Hi there".to_string())]));
        let use_case = SendMessageUseCase::new(gateway.clone());
        let mut session = session();

        let reply = use_case.execute(&mut session, "Hello").await.unwrap();

        assert_eq!(reply, "Hi there");
        assert_eq!(
            session.snapshot(),
            &[Turn::user("Hello"), Turn::assistant("Hi there")]
        );
        // The gateway saw exactly the new user turn
        assert_eq!(gateway.seen_turns(), vec![vec![Turn::user("Hello")]]);
    }

    #[tokio::test]
    async fn test_gateway_sees_snapshot_including_new_user_turn() {
        let gateway = Arc::new(MockGateway::new(vec![
            Ok("first reply".to_string()),
            Ok("second reply".to_string()),
        ]));
        let use_case = SendMessageUseCase::new(gateway.clone());
        let mut session = session();

        use_case.execute(&mut session, "one").await.unwrap();
        use_case.execute(&mut session, "two").await.unwrap();

        let seen = gateway.seen_turns();
        assert_eq!(seen[0], vec![Turn::user("one")]);
        assert_eq!(
            seen[1],
            vec![
                Turn::user("one"),
                Turn::assistant("first reply"),
                Turn::user("two"),
            ]
        );
    }

    #[tokio::test]
    async fn test_failure_leaves_unanswered_user_turn() {
        // Rate-limit failure: classified, no assistant turn appended
        let gateway = Arc::new(MockGateway::new(vec![Err(
            CompletionError::from_description("Error code: 429 - quota exceeded"),
        )]));
        let use_case = SendMessageUseCase::new(gateway);
        let mut session = session();

        let error = use_case.execute(&mut session, "Hello").await.unwrap_err();

        match error {
            SendMessageError::Completion(e) => assert_eq!(e.kind, ErrorKind::RateLimited),
            other => panic!("Expected Completion error, got {:?}", other),
        }
        assert_eq!(session.snapshot(), &[Turn::user("Hello")]);
    }

    #[tokio::test]
    async fn test_session_usable_after_failure() {
        let gateway = Arc::new(MockGateway::new(vec![
            Err(CompletionError::from_description("401 Unauthorized")),
            Ok("recovered".to_string()),
        ]));
        let use_case = SendMessageUseCase::new(gateway.clone());
        let mut session = session();

        let error = use_case.execute(&mut session, "first").await.unwrap_err();
        match error {
            SendMessageError::Completion(e) => {
                assert_eq!(e.kind, ErrorKind::InvalidCredential);
            }
            other => panic!("Expected Completion error, got {:?}", other),
        }

        let reply = use_case.execute(&mut session, "second").await.unwrap();
        assert_eq!(reply, "recovered");

        // The failed exchange's user turn stays in the log, unpaired
        assert_eq!(
            session.snapshot(),
            &[
                Turn::user("first"),
                Turn::user("second"),
                Turn::assistant("recovered"),
            ]
        );
    }

    #[tokio::test]
    async fn test_n_successful_rounds_yield_2n_alternating_turns() {
        let rounds = 4;
        let replies = (0..rounds)
            .map(|i| Ok(format!("reply {}", i)))
            .collect::<Vec<_>>();
        let gateway = Arc::new(MockGateway::new(replies));
        let use_case = SendMessageUseCase::new(gateway);
        let mut session = session();

        for i in 0..rounds {
            use_case
                .execute(&mut session, &format!("input {}", i))
                .await
                .unwrap();
        }

        let log = session.snapshot();
        assert_eq!(log.len(), 2 * rounds);
        for (i, turn) in log.iter().enumerate() {
            let expected = if i % 2 == 0 { Role::User } else { Role::Assistant };
            assert_eq!(turn.role, expected, "turn {} has wrong role", i);
        }
    }

    #[tokio::test]
    async fn test_empty_reply_is_error() {
        let gateway = Arc::new(MockGateway::new(vec![Ok(String::new())]));
        let use_case = SendMessageUseCase::new(gateway);
        let mut session = session();

        let result = use_case.execute(&mut session, "Hello").await;
        assert!(matches!(result, Err(SendMessageError::EmptyReply)));
    }
}
