use std::cell::{Cell, Ref, RefCell};
use tracing::{debug, info};

use super::transcript::TranscriptEntry;
use super::view::ChatView;
use crate::answer::Answerer;
use crate::error::FailureKind;

/// Result of a single [`ChatSession::submit`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Input was empty after trimming; nothing happened.
    Ignored,
    /// Another submit was still in flight; nothing happened.
    Rejected,
    /// A bot answer was added to the transcript.
    Answered,
    /// A bot error entry was added to the transcript.
    Failed(FailureKind),
}

/// Mediates between user input, a [`ChatView`] and the answering endpoint.
///
/// At most one question is in flight at a time. `submit` takes `&self` so a
/// second submit can be attempted while the first is suspended; it is
/// rejected without side effects. Interior state is never borrowed across
/// an await point.
pub struct ChatSession<A, V> {
    answerer: A,
    view: RefCell<V>,
    transcript: RefCell<Vec<TranscriptEntry>>,
    accepting_input: Cell<bool>,
}

impl<A: Answerer, V: ChatView> ChatSession<A, V> {
    pub fn new(answerer: A, view: V) -> Self {
        Self {
            answerer,
            view: RefCell::new(view),
            transcript: RefCell::new(Vec::new()),
            accepting_input: Cell::new(true),
        }
    }

    /// Sends `raw` as a question and renders the exchange.
    pub async fn submit(&self, raw: &str) -> SubmitOutcome {
        let question = raw.trim();
        if question.is_empty() {
            return SubmitOutcome::Ignored;
        }

        let Some(_lock) = InputLock::acquire(&self.accepting_input, &self.view) else {
            debug!("submit rejected: a question is already in flight");
            return SubmitOutcome::Rejected;
        };

        self.append(TranscriptEntry::user(question));
        {
            let mut view = self.view.borrow_mut();
            view.clear_input();
            view.set_input_enabled(false);
            view.show_typing();
        }

        let result = self.answerer.ask(question).await;
        self.view.borrow_mut().hide_typing();

        match result {
            Ok(payload) => match payload.into_answer() {
                Some(answer) => {
                    self.append(TranscriptEntry::bot(answer));
                    SubmitOutcome::Answered
                }
                None => {
                    debug!("answering endpoint replied without an answer");
                    self.fail(FailureKind::Application)
                }
            },
            Err(err) => {
                info!(error = %err, "question could not be answered");
                self.fail(FailureKind::from(&err))
            }
        }
    }

    /// Entries rendered so far, oldest first.
    pub fn transcript(&self) -> Ref<'_, [TranscriptEntry]> {
        Ref::map(self.transcript.borrow(), Vec::as_slice)
    }

    pub fn is_accepting_input(&self) -> bool {
        self.accepting_input.get()
    }

    pub fn view(&self) -> Ref<'_, V> {
        self.view.borrow()
    }

    pub const fn answerer(&self) -> &A {
        &self.answerer
    }

    fn fail(&self, kind: FailureKind) -> SubmitOutcome {
        self.append(TranscriptEntry::bot_error(kind.message()));
        SubmitOutcome::Failed(kind)
    }

    fn append(&self, entry: TranscriptEntry) {
        self.view.borrow_mut().render_entry(&entry);
        self.transcript.borrow_mut().push(entry);
    }
}

/// Holds the session's "input blocked" state for the duration of a submit.
///
/// Dropping the lock removes the typing indicator, re-enables and focuses
/// the input, and lets the next submit through, on every exit path.
struct InputLock<'a, V: ChatView> {
    accepting_input: &'a Cell<bool>,
    view: &'a RefCell<V>,
}

impl<'a, V: ChatView> InputLock<'a, V> {
    fn acquire(accepting_input: &'a Cell<bool>, view: &'a RefCell<V>) -> Option<Self> {
        if !accepting_input.replace(false) {
            return None;
        }
        Some(Self {
            accepting_input,
            view,
        })
    }
}

impl<V: ChatView> Drop for InputLock<'_, V> {
    fn drop(&mut self) {
        // try_borrow_mut: never panic inside drop while unwinding
        if let Ok(mut view) = self.view.try_borrow_mut() {
            view.hide_typing();
            view.set_input_enabled(true);
        }
        self.accepting_input.set(true);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::answer::AnswerResponse;
    use crate::chat::transcript::{EntryKind, Sender};
    use crate::error::{AskError, CONNECTION_ERROR_MESSAGE, GENERIC_ERROR_MESSAGE};
    use reqwest::StatusCode;
    use std::collections::VecDeque;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Event {
        Entry {
            sender: Sender,
            kind: EntryKind,
            text: String,
            typing_visible: bool,
        },
        TypingShown,
        TypingHidden,
        InputCleared,
        InputEnabled(bool),
    }

    #[derive(Default)]
    struct RecordingView {
        events: Vec<Event>,
        typing_visible: bool,
        input_enabled: bool,
        focused: bool,
    }

    impl ChatView for RecordingView {
        fn render_entry(&mut self, entry: &TranscriptEntry) {
            self.events.push(Event::Entry {
                sender: entry.sender(),
                kind: entry.kind(),
                text: entry.text().to_string(),
                typing_visible: self.typing_visible,
            });
        }

        fn show_typing(&mut self) {
            self.typing_visible = true;
            self.events.push(Event::TypingShown);
        }

        fn hide_typing(&mut self) {
            if self.typing_visible {
                self.typing_visible = false;
                self.events.push(Event::TypingHidden);
            }
        }

        fn clear_input(&mut self) {
            self.events.push(Event::InputCleared);
        }

        fn set_input_enabled(&mut self, enabled: bool) {
            self.input_enabled = enabled;
            self.focused = enabled;
            self.events.push(Event::InputEnabled(enabled));
        }
    }

    type Reply = Result<AnswerResponse, AskError>;

    /// Replays scripted replies and records every question it is asked.
    struct ScriptedAnswerer {
        replies: RefCell<VecDeque<Reply>>,
        questions: RefCell<Vec<String>>,
    }

    impl ScriptedAnswerer {
        fn with(replies: impl IntoIterator<Item = Reply>) -> Self {
            Self {
                replies: RefCell::new(replies.into_iter().collect()),
                questions: RefCell::new(Vec::new()),
            }
        }

        fn calls(&self) -> usize {
            self.questions.borrow().len()
        }
    }

    impl Answerer for ScriptedAnswerer {
        async fn ask(&self, question: &str) -> Reply {
            self.questions.borrow_mut().push(question.to_string());
            // Suspend once so concurrent submits can interleave.
            tokio::task::yield_now().await;
            self.replies
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Ok(AnswerResponse::default()))
        }
    }

    fn answer(text: &str) -> Reply {
        Ok(AnswerResponse {
            answer: Some(text.to_string()),
        })
    }

    fn server_error() -> Reply {
        Err(AskError::Status {
            status: StatusCode::INTERNAL_SERVER_ERROR,
        })
    }

    fn session(
        replies: impl IntoIterator<Item = Reply>,
    ) -> ChatSession<ScriptedAnswerer, RecordingView> {
        ChatSession::new(ScriptedAnswerer::with(replies), RecordingView::default())
    }

    fn entries(
        session: &ChatSession<ScriptedAnswerer, RecordingView>,
    ) -> Vec<(Sender, EntryKind, String)> {
        session
            .transcript()
            .iter()
            .map(|e| (e.sender(), e.kind(), e.text().to_string()))
            .collect()
    }

    #[tokio::test]
    async fn test_blank_input_is_ignored() {
        let session = session([]);

        for raw in ["", "   ", "\n\t  "] {
            assert_eq!(session.submit(raw).await, SubmitOutcome::Ignored);
        }

        assert!(session.transcript().is_empty());
        assert_eq!(session.answerer().calls(), 0);
        assert!(session.view().events.is_empty());
        assert!(session.is_accepting_input());
    }

    #[tokio::test]
    async fn test_answer_is_rendered_after_question() {
        let session = session([answer("$30")]);

        let outcome = session.submit("How much does a haircut cost?").await;

        assert_eq!(outcome, SubmitOutcome::Answered);
        assert_eq!(
            entries(&session),
            vec![
                (
                    Sender::User,
                    EntryKind::Normal,
                    "How much does a haircut cost?".to_string()
                ),
                (Sender::Bot, EntryKind::Normal, "$30".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_question_is_trimmed_before_sending() {
        let session = session([answer("ok")]);

        session.submit("  Can I cancel my appointment?\n").await;

        assert_eq!(
            session.answerer().questions.borrow().as_slice(),
            ["Can I cancel my appointment?"]
        );
        assert_eq!(
            session.transcript()[0].text(),
            "Can I cancel my appointment?"
        );
    }

    #[tokio::test]
    async fn test_transport_failure_renders_connection_message() {
        let session = session([server_error()]);

        let outcome = session.submit("test").await;

        assert_eq!(outcome, SubmitOutcome::Failed(FailureKind::Transport));
        assert_eq!(
            entries(&session),
            vec![
                (Sender::User, EntryKind::Normal, "test".to_string()),
                (
                    Sender::Bot,
                    EntryKind::Error,
                    CONNECTION_ERROR_MESSAGE.to_string()
                ),
            ]
        );
    }

    #[tokio::test]
    async fn test_missing_answer_renders_generic_message() {
        let session = session([Ok(AnswerResponse::default())]);

        let outcome = session.submit("test").await;

        assert_eq!(outcome, SubmitOutcome::Failed(FailureKind::Application));
        let transcript = session.transcript();
        assert_eq!(transcript.len(), 2);
        assert!(transcript[1].is_error());
        assert_eq!(transcript[1].text(), GENERIC_ERROR_MESSAGE);
    }

    #[tokio::test]
    async fn test_empty_answer_renders_generic_message() {
        let session = session([answer("")]);

        let outcome = session.submit("test").await;

        assert_eq!(outcome, SubmitOutcome::Failed(FailureKind::Application));
    }

    #[tokio::test]
    async fn test_lifecycle_event_order() {
        let session = session([answer("$30")]);

        session.submit("price?").await;

        let view = session.view();
        assert_eq!(
            view.events.as_slice(),
            [
                Event::Entry {
                    sender: Sender::User,
                    kind: EntryKind::Normal,
                    text: "price?".to_string(),
                    typing_visible: false,
                },
                Event::InputCleared,
                Event::InputEnabled(false),
                Event::TypingShown,
                Event::TypingHidden,
                Event::Entry {
                    sender: Sender::Bot,
                    kind: EntryKind::Normal,
                    text: "$30".to_string(),
                    typing_visible: false,
                },
                Event::InputEnabled(true),
            ]
        );
    }

    #[tokio::test]
    async fn test_typing_hidden_before_error_entry() {
        let session = session([server_error()]);

        session.submit("test").await;

        let view = session.view();
        assert!(!view.typing_visible);
        let shown = view.events.iter().filter(|e| **e == Event::TypingShown).count();
        let hidden = view.events.iter().filter(|e| **e == Event::TypingHidden).count();
        assert_eq!((shown, hidden), (1, 1));
        assert!(view.events.iter().all(|e| !matches!(
            e,
            Event::Entry {
                typing_visible: true,
                ..
            }
        )));
    }

    #[tokio::test]
    async fn test_input_restored_after_every_outcome() {
        let session = session([answer("a"), server_error(), Ok(AnswerResponse::default())]);

        for question in ["one", "two", "three"] {
            session.submit(question).await;
            assert!(session.is_accepting_input());
            let view = session.view();
            assert!(view.input_enabled);
            assert!(view.focused);
        }

        assert_eq!(session.transcript().len(), 6);
    }

    #[tokio::test]
    async fn test_concurrent_submit_is_rejected() {
        let session = session([answer("first")]);

        let (first, second) = tokio::join!(session.submit("one"), session.submit("two"));

        assert_eq!(first, SubmitOutcome::Answered);
        assert_eq!(second, SubmitOutcome::Rejected);
        assert_eq!(session.answerer().calls(), 1);
        assert_eq!(
            entries(&session),
            vec![
                (Sender::User, EntryKind::Normal, "one".to_string()),
                (Sender::Bot, EntryKind::Normal, "first".to_string()),
            ]
        );
        assert!(session.is_accepting_input());
    }

    #[tokio::test]
    async fn test_session_usable_after_failure() {
        let session = session([server_error(), answer("$30")]);

        session.submit("test").await;
        let outcome = session.submit("How much does a haircut cost?").await;

        assert_eq!(outcome, SubmitOutcome::Answered);
        assert_eq!(session.transcript().len(), 4);
        assert_eq!(session.transcript()[3].text(), "$30");
    }

    /// Collects formatted log output so tests can inspect it.
    #[derive(Clone, Default)]
    struct LogBuffer(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_failures_stay_below_default_log_level() {
        let logs = LogBuffer::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_writer(move || writer.clone())
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let session = session([server_error(), Ok(AnswerResponse::default())]);
        session.submit("test").await;
        session.submit("test").await;

        assert_eq!(session.transcript().len(), 4);
        assert!(logs.0.lock().unwrap().is_empty());
    }

    #[test]
    fn test_input_lock_is_exclusive_and_released_on_drop() {
        let flag = Cell::new(true);
        let view = RefCell::new(RecordingView::default());

        let lock = InputLock::acquire(&flag, &view).unwrap();
        assert!(!flag.get());
        assert!(InputLock::acquire(&flag, &view).is_none());

        drop(lock);
        assert!(flag.get());
        assert!(view.borrow().input_enabled);
        assert!(InputLock::acquire(&flag, &view).is_some());
    }
}
