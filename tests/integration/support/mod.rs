use std::sync::{Arc, Mutex};
use std::time::Duration;

use futures::future::{self, FutureExt};
use gridit::dispatch::{
    Collaborators, MockDocumentHost, MockDownloadTrigger, MockFilePicker, MockGridRenderer, MockTimer,
};
use gridit::error::{DownloadError, RenderError};
use gridit::{
    create_test_spawner, Dimensions, Event, GridRenderRequest, Gridit, Model, Props, SelectedFile, SourceImage,
    TestMvuDriver, TestMvuRuntime, TestRenderer, TestSpawner,
};

pub(crate) type GriditDriver = TestMvuDriver<Event, Model, Props, Gridit, TestRenderer<Props>, TestSpawner>;

type Recorded<T> = Arc<Mutex<Vec<T>>>;

/// A running app wired to mock collaborators that record every call.
pub(crate) struct IntegrationTest {
    pub(crate) driver: GriditDriver,
    pub(crate) renders: TestRenderer<Props>,
    picks: Recorded<Vec<String>>,
    render_requests: Recorded<GridRenderRequest>,
    downloads: Recorded<(String, Vec<u8>)>,
    document_langs: Recorded<String>,
    sleeps: Recorded<Duration>,
}

impl IntegrationTest {
    pub(crate) fn picks(&self) -> Vec<Vec<String>> {
        self.picks.lock().unwrap().clone()
    }

    pub(crate) fn render_requests(&self) -> Vec<GridRenderRequest> {
        self.render_requests.lock().unwrap().clone()
    }

    pub(crate) fn downloads(&self) -> Vec<(String, Vec<u8>)> {
        self.downloads.lock().unwrap().clone()
    }

    pub(crate) fn document_langs(&self) -> Vec<String> {
        self.document_langs.lock().unwrap().clone()
    }

    pub(crate) fn sleeps(&self) -> Vec<Duration> {
        self.sleeps.lock().unwrap().clone()
    }

    /// Invoke a callback on the latest props, then drain the queue.
    pub(crate) fn interact(&mut self, action: impl FnOnce(&Props)) {
        self.renders.with_last(action);
        self.driver.process_events();
    }

    pub(crate) fn emit(&mut self, event: Event) {
        self.driver.emit(event);
        self.driver.process_events();
    }
}

pub(crate) struct IntegrationTestBuilder {
    model: Model,
    picked_file: Option<SelectedFile>,
    rendered_url: Option<String>,
    download_fails: bool,
    file_name: Option<String>,
}

pub(crate) fn build_integration_test() -> IntegrationTestBuilder {
    IntegrationTestBuilder {
        model: Model::default(),
        picked_file: None,
        rendered_url: None,
        download_fails: false,
        file_name: None,
    }
}

impl IntegrationTestBuilder {
    pub(crate) fn given_a_loaded_image(mut self, url: &str, width: u32, height: u32) -> Self {
        self.model.image = Some(SourceImage {
            url: url.to_string(),
            dimensions: Some(Dimensions::new(width, height)),
        });
        self
    }

    pub(crate) fn given_the_user_picks(mut self, file: SelectedFile) -> Self {
        self.picked_file = Some(file);
        self
    }

    pub(crate) fn given_the_renderer_replies(mut self, data_url: &str) -> Self {
        self.rendered_url = Some(data_url.to_string());
        self
    }

    pub(crate) fn given_downloads_fail(mut self) -> Self {
        self.download_fails = true;
        self
    }

    pub(crate) fn given_a_download_file_name(mut self, file_name: &str) -> Self {
        self.file_name = Some(file_name.to_string());
        self
    }

    pub(crate) fn build(self) -> IntegrationTest {
        let picks: Recorded<Vec<String>> = Recorded::default();
        let render_requests: Recorded<GridRenderRequest> = Recorded::default();
        let downloads: Recorded<(String, Vec<u8>)> = Recorded::default();
        let document_langs: Recorded<String> = Recorded::default();
        let sleeps: Recorded<Duration> = Recorded::default();

        let mut picker = MockFilePicker::new();
        let recorded = picks.clone();
        let picked_file = self.picked_file;
        picker.expect_pick().returning(move |accept| {
            recorded.lock().unwrap().push(accept.to_vec());
            future::ready(picked_file.clone()).boxed()
        });

        let mut renderer = MockGridRenderer::new();
        let recorded = render_requests.clone();
        let rendered_url = self.rendered_url;
        renderer.expect_render().returning(move |request| {
            recorded.lock().unwrap().push(request);
            let reply = rendered_url
                .clone()
                .ok_or_else(|| RenderError::UnsupportedSource("no reply configured".to_string()));
            future::ready(reply).boxed()
        });

        let mut download_trigger = MockDownloadTrigger::new();
        let recorded = downloads.clone();
        let download_fails = self.download_fails;
        download_trigger.expect_download().returning(move |file_name, png| {
            recorded.lock().unwrap().push((file_name.to_string(), png));
            if download_fails {
                Err(DownloadError::Write {
                    path: file_name.into(),
                    source: std::io::Error::other("disk full"),
                })
            } else {
                Ok(())
            }
        });

        let mut document = MockDocumentHost::new();
        let recorded = document_langs.clone();
        document.expect_set_lang().returning(move |code| {
            recorded.lock().unwrap().push(code.to_string());
        });

        // Fires immediately, so delayed events queue up behind the step that
        // scheduled them.
        let mut timer = MockTimer::new();
        let recorded = sleeps.clone();
        timer.expect_sleep().returning(move |duration| {
            recorded.lock().unwrap().push(duration);
            future::ready(()).boxed()
        });

        let collaborators = Collaborators {
            picker: Arc::new(picker),
            renderer: Arc::new(renderer),
            downloads: Arc::new(download_trigger),
            document: Arc::new(document),
            timer: Arc::new(timer),
        };
        let mut dispatcher = gridit::Dispatcher::new(collaborators);
        if let Some(file_name) = self.file_name {
            dispatcher = dispatcher.with_file_name(file_name);
        }

        let renders = TestRenderer::new();
        let runtime = TestMvuRuntime::new(
            self.model,
            Gridit::with_dispatcher(dispatcher),
            renders.clone(),
            create_test_spawner(),
        );
        let driver = runtime.run();

        IntegrationTest {
            driver,
            renders,
            picks,
            render_requests,
            downloads,
            document_langs,
            sleeps,
        }
    }
}
