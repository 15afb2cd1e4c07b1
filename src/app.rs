//! The grid tool wired into the MVU runtime.

use crate::dispatch::{Collaborators, Dispatcher};
use crate::{view, Config, Effect, EffectRequest, Emitter, Event, Model, MvuLogic, Props};

/// Application logic: the pure [`update`](crate::update::update) function
/// plus a [`Dispatcher`] that carries out the requests it returns.
#[derive(Clone)]
pub struct Gridit {
    dispatcher: Dispatcher,
}

impl Gridit {
    pub fn new(collaborators: Collaborators) -> Self {
        Self::with_dispatcher(Dispatcher::new(collaborators))
    }

    /// Downloads are saved under the configured file name.
    pub fn from_config(config: &Config, collaborators: Collaborators) -> Self {
        Self::with_dispatcher(Dispatcher::new(collaborators).with_file_name(config.download.file_name.clone()))
    }

    pub fn with_dispatcher(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }
}

impl MvuLogic<Event, Model, Props> for Gridit {
    /// Syncs the host document's language with the starting model.
    fn init(&self, model: Model) -> (Model, Effect<Event>) {
        let requests = vec![EffectRequest::PersistLanguageTag(model.language.code())];
        (model, self.dispatcher.dispatch(requests))
    }

    fn update(&self, event: Event, model: &Model) -> (Model, Effect<Event>) {
        let (next, requests) = crate::update::update(event, model);
        (next, self.dispatcher.dispatch(requests))
    }

    fn view(&self, model: &Model, emitter: &Emitter<Event>) -> Props {
        view::view(model, emitter)
    }
}
