//! Chat panel state and submit protocol.

use super::responder;
use super::timer::{PendingReply, ReplyTimer, TimerOutcome};

/// Who a transcript bubble came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    /// The shopper.
    User,
    /// The scripted responder.
    Bot,
}

/// One transcript bubble. Transient; the transcript is never persisted and
/// is lost on reload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    /// Who sent it.
    pub from: Sender,
    /// The bubble text.
    pub text: String,
}

/// How a form submission ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Whitespace-only input; nothing was appended and the responder was
    /// not invoked.
    Ignored,
    /// The bot reply was appended after the simulated delay.
    Replied,
    /// The reply timer was cancelled; only the user message was appended.
    Cancelled,
}

/// The chat widget: panel visibility plus the append-only transcript.
///
/// There is no guard against overlapping submissions; each one runs its own
/// delay and appends independently, serialized by the host's single-threaded
/// event loop.
#[derive(Debug)]
pub struct ChatWidget {
    open: bool,
    typing: bool,
    transcript: Vec<ChatMessage>,
    timer: ReplyTimer,
}

impl ChatWidget {
    /// A closed widget with an empty transcript.
    #[must_use]
    pub const fn new(timer: ReplyTimer) -> Self {
        Self {
            open: false,
            typing: false,
            transcript: Vec::new(),
            timer,
        }
    }

    /// Whether the panel is visible.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Whether the typing indicator is showing.
    #[must_use]
    pub const fn is_typing(&self) -> bool {
        self.typing
    }

    /// The transcript, oldest first. The host scrolls to the last entry
    /// after every append.
    #[must_use]
    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    /// Open the panel. Returns true when input focus should move into the
    /// message box.
    pub const fn open(&mut self) -> bool {
        self.open = true;
        true
    }

    /// Close the panel.
    pub const fn close(&mut self) {
        self.open = false;
    }

    /// The toggle control: flips visibility. Returns true when opening, so
    /// the host can move focus.
    pub const fn toggle(&mut self) -> bool {
        if self.open {
            self.close();
            false
        } else {
            self.open()
        }
    }

    /// Escape closes the panel from anywhere on the page.
    pub const fn handle_escape(&mut self) {
        self.close();
    }

    /// Submit the message box contents.
    ///
    /// Trimmed-empty input is ignored. Otherwise the user bubble is
    /// appended, the typing indicator shows across the simulated delay, and
    /// the resolved bot reply is appended once the delay elapses.
    pub async fn submit(&mut self, input: &str) -> SubmitOutcome {
        let (pending, _cancel) = self.timer.start();
        self.submit_via(input, pending).await
    }

    /// Submit with a host-started reply timer, so the host can keep the
    /// cancel handle.
    pub async fn submit_via(&mut self, input: &str, pending: PendingReply) -> SubmitOutcome {
        let message = input.trim().to_owned();
        if message.is_empty() {
            return SubmitOutcome::Ignored;
        }

        self.push(Sender::User, message.clone());
        self.typing = true;
        let outcome = pending.wait().await;
        self.typing = false;

        match outcome {
            TimerOutcome::Elapsed => {
                self.push(Sender::Bot, responder::resolve_reply(&message).to_owned());
                SubmitOutcome::Replied
            }
            TimerOutcome::Cancelled => SubmitOutcome::Cancelled,
        }
    }

    fn push(&mut self, from: Sender, text: String) {
        self.transcript.push(ChatMessage { from, text });
    }
}

impl Default for ChatWidget {
    fn default() -> Self {
        Self::new(ReplyTimer::default())
    }
}
