//! Put a rectangular grid over an image, preview it and export it as PNG.
//!
//! The application is a Model-View-Update loop: [`update`] is a pure
//! function from an [`Event`] and the current [`Model`] to the next model and
//! a list of [`EffectRequest`]s; the [`Dispatcher`] hands those requests to
//! outside collaborators (file picker, grid rasterizer, download trigger,
//! host document, timer) and feeds their replies back in as events;
//! [`view`](view::view) turns each model into [`Props`] for a [`Renderer`].
//! [`MvuRuntime`] drives the loop one event at a time.
//!
//! ## Example
//!
//! ```rust
//! use gridit::{update, EffectRequest, Event, Model};
//!
//! let model = Model::default();
//! let (model, _) = update(Event::ImageLoaded("data:image/png;base64,AAAA".into()), &model);
//! let (model, _) = update(Event::ImageSizeLoaded { width: 200, height: 100 }, &model);
//! let (_, effects) = update(Event::DownloadClicked, &model);
//!
//! assert!(matches!(
//!     effects.last(),
//!     Some(EffectRequest::RequestGridRender(request)) if request.width == 200 && request.grid == 10
//! ));
//! ```
//!
//! Running the full loop on tokio with the native collaborators:
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use futures::future::BoxFuture;
//! use gridit::host::{DirectoryDownloader, DocumentLang, PathPicker, TokioTimer};
//! use gridit::raster::RasterGridRenderer;
//! use gridit::{Collaborators, Config, Gridit, MvuRuntime, Props, Renderer};
//!
//! struct StatusLine;
//!
//! impl Renderer<Props> for StatusLine {
//!     fn render(&mut self, props: Props) {
//!         println!("{} {}", props.status, props.nice_counter);
//!     }
//! }
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let config = Config::default();
//!     let collaborators = Collaborators {
//!         picker: Arc::new(PathPicker::new("photo.png")),
//!         renderer: Arc::new(RasterGridRenderer::new()),
//!         downloads: Arc::new(DirectoryDownloader::new(&config.download.directory)),
//!         document: Arc::new(DocumentLang::new()),
//!         timer: Arc::new(TokioTimer),
//!     };
//!
//!     let mut runtime = MvuRuntime::new(
//!         config.initial_model(),
//!         Gridit::from_config(&config, collaborators),
//!         StatusLine,
//!         |future: BoxFuture<'static, ()>| {
//!             tokio::spawn(future);
//!         },
//!     );
//!     runtime.run().await;
//! }
//! ```

mod app;
pub mod assets;
pub mod config;
pub mod data_url;
pub mod dispatch;
mod effect;
mod emitter;
pub mod error;
mod event;
pub mod geometry;
pub mod host;
pub mod i18n;
mod logic;
pub mod model;
pub mod raster;
mod renderer;
mod request;
mod runtime;
pub mod update;
pub mod view;

// Public re-exports
pub use app::Gridit;
pub use config::Config;
pub use dispatch::{Collaborators, Dispatcher};
pub use effect::Effect;
pub use emitter::Emitter;
pub use event::{Event, SelectedFile};
pub use i18n::{translate, Language, TextKey};
pub use logic::MvuLogic;
pub use model::{Dimensions, GridSettings, Model, SourceImage};
pub use renderer::Renderer;
pub use request::{DownloadRequest, EffectRequest, GridRenderRequest, DOWNLOAD_FLAG_RESET_DELAY, IMAGE_MIME_TYPES};
pub use runtime::{MvuRuntime, Spawner};
pub use update::update;
pub use view::{Overlay, Panel, Props};

// Test utilities (only available with 'testing' feature or during tests)
#[cfg(any(test, feature = "testing"))]
pub use renderer::TestRenderer;
#[cfg(any(test, feature = "testing"))]
pub use runtime::{create_test_spawner, TestMvuDriver, TestMvuRuntime, TestSpawner};
