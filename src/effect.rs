//! Deferred, asynchronous work that feeds events back into the loop.

use core::future::Future;

use futures::future::{join_all, BoxFuture, FutureExt};

use crate::Emitter;

type Job<Event> = Box<dyn FnOnce(Emitter<Event>) -> BoxFuture<'static, ()> + Send + 'static>;

/// Description of work to run after a model transition.
///
/// Effects are returned from [`MvuLogic::init`](crate::MvuLogic::init) and
/// [`MvuLogic::update`](crate::MvuLogic::update) alongside the new model. The
/// runtime hands each one to its [`Spawner`](crate::Spawner); any events the
/// work emits are queued behind the events already waiting.
///
/// # Example
///
/// ```rust
/// use gridit::{Effect, Event};
///
/// // Trigger a follow-up event
/// let effect = Effect::just(Event::ResetDownloadFlag);
///
/// // Combine multiple effects, started in list order
/// let effect = Effect::batch(vec![
///     Effect::just(Event::NiceButtonClicked),
///     Effect::just(Event::ResetDownloadFlag),
/// ]);
///
/// // No side effects
/// let effect: Effect<Event> = Effect::none();
/// ```
pub struct Effect<Event: Send>(Job<Event>);

impl<Event: Send + 'static> Effect<Event> {
    /// Create an empty effect.
    ///
    /// Prefer this when semantically indicating "no side effects".
    pub fn none() -> Self {
        Self(Box::new(|_: Emitter<Event>| {
            futures::future::ready(()).boxed()
        }))
    }

    /// Create an effect that emits a single event as soon as it runs.
    pub fn just(event: Event) -> Self {
        Self(Box::new(move |emitter: Emitter<Event>| {
            emitter.emit(event);
            futures::future::ready(()).boxed()
        }))
    }

    /// Create an effect from async work that reports back through the emitter.
    ///
    /// ```rust
    /// use gridit::{Effect, Event};
    ///
    /// let effect = Effect::future(|emitter| async move {
    ///     emitter.emit(Event::ImageLoaded("data:image/png;base64,AAAA".into()));
    /// });
    /// # let _ = effect;
    /// ```
    pub fn future<F, Fut>(work: F) -> Self
    where
        F: FnOnce(Emitter<Event>) -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        Self(Box::new(move |emitter: Emitter<Event>| work(emitter).boxed()))
    }

    /// Combine multiple effects into a single effect.
    ///
    /// Members are started in list order and then driven together, so a
    /// member waiting on a collaborator never holds up the ones after it.
    pub fn batch(effects: Vec<Effect<Event>>) -> Self {
        Self(Box::new(move |emitter: Emitter<Event>| {
            let futures: Vec<_> = effects
                .into_iter()
                .map(|effect| effect.execute(&emitter))
                .collect();
            join_all(futures).map(|_| ()).boxed()
        }))
    }

    /// Turn the effect into a future ready to be spawned.
    pub fn execute(self, emitter: &Emitter<Event>) -> BoxFuture<'static, ()> {
        (self.0)(emitter.clone())
    }
}
