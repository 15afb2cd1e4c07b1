//! Event emitter for embedding callbacks in Props.

use flume::Sender;

/// Event emitter that can be embedded in Props and handed to effects.
///
/// Clone this handle to create callbacks in your Props that can trigger
/// events when invoked (e.g., by user interaction), or to let an effect
/// deliver a collaborator's reply back into the loop.
///
/// `Emitter` wraps an unbounded channel sender, making it cheap to clone
/// and safe to use from any thread.
///
/// # Example
///
/// ```rust
/// use gridit::{Emitter, Event};
///
/// let (emitter, events) = Emitter::channel();
///
/// let on_nice: Box<dyn Fn() + Send> = {
///     let emitter = emitter.clone();
///     Box::new(move || emitter.emit(Event::NiceButtonClicked))
/// };
/// on_nice();
///
/// assert_eq!(events.try_recv().ok(), Some(Event::NiceButtonClicked));
/// ```
pub struct Emitter<Event: Send>(pub(crate) Sender<Event>);

impl<Event: Send> Clone for Emitter<Event> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<Event: Send> Emitter<Event> {
    /// Create a new emitter from a channel sender.
    pub(crate) fn new(sender: Sender<Event>) -> Self {
        Self(sender)
    }

    /// Create an emitter together with the receiving end of its queue.
    ///
    /// The runtime builds its own channel; this is for hosts and tests that
    /// want to call [`MvuLogic::view`](crate::MvuLogic::view) directly.
    pub fn channel() -> (Self, flume::Receiver<Event>) {
        let (sender, receiver) = flume::unbounded();
        (Self::new(sender), receiver)
    }

    /// Emit an event.
    ///
    /// This queues the event for processing by the runtime. Once the runtime
    /// has shut down the event is dropped.
    pub fn emit(&self, event: Event) {
        self.0.send(event).ok();
    }
}
