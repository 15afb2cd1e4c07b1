//! Model to Props.

use core::fmt::Write as _;

use crate::geometry::{GridGeometry, GridLine};
use crate::i18n::{translate, TextKey};
use crate::{Emitter, Event, GridSettings, Language, Model};

pub type Callback = Box<dyn Fn() + Send>;
pub type TextCallback = Box<dyn Fn(&str) + Send>;
pub type SizeCallback = Box<dyn Fn(u32, u32) + Send>;

/// Everything a renderer needs to draw one frame.
pub struct Props {
    pub language: Language,
    /// `lang` attribute for the rendered document.
    pub lang_code: &'static str,
    pub languages: Vec<LanguageOption>,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub labels: Labels,
    pub grid: GridSettings,
    /// Opacity as shown in the percentage box.
    pub opacity_percent: u32,
    pub source_panel: Panel,
    pub preview_panel: Panel,
    /// The download control is enabled once an image is loaded.
    pub can_download: bool,
    pub download_ready: bool,
    pub nice_button: String,
    pub nice_counter: String,
    pub status: &'static str,

    pub on_pick_image: Callback,
    /// Raised by the host once the source image has decoded.
    pub on_image_load: SizeCallback,
    pub on_grid_size_input: TextCallback,
    pub on_grid_color_input: TextCallback,
    pub on_grid_thickness_input: TextCallback,
    pub on_grid_opacity_input: TextCallback,
    pub on_grid_opacity_percent_input: TextCallback,
    pub on_nice: Callback,
    pub on_download: Callback,
    /// Takes a [`Language::slug`].
    pub on_language_select: TextCallback,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LanguageOption {
    pub language: Language,
    pub value: &'static str,
    pub label: &'static str,
    pub flag: &'static str,
    pub selected: bool,
}

/// Static control labels in the current language.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Labels {
    pub upload_image: &'static str,
    pub customize: &'static str,
    pub grid_size: &'static str,
    pub rectangles: &'static str,
    pub grid_color: &'static str,
    pub grid_thickness: &'static str,
    pub grid_opacity: &'static str,
    pub original_image: &'static str,
    pub gridded_image: &'static str,
    pub download: &'static str,
    pub language: &'static str,
    pub file_operations: &'static str,
    pub grid_parameters: &'static str,
    pub actions: &'static str,
}

impl Labels {
    pub fn for_language(language: Language) -> Self {
        let t = |key| translate(language, key);
        Self {
            upload_image: t(TextKey::UploadImage),
            customize: t(TextKey::CustomizeIt),
            grid_size: t(TextKey::GridSize),
            rectangles: t(TextKey::Rectangles),
            grid_color: t(TextKey::GridColor),
            grid_thickness: t(TextKey::GridThickness),
            grid_opacity: t(TextKey::GridOpacity),
            original_image: t(TextKey::OriginalImage),
            gridded_image: t(TextKey::GriddedImage),
            download: t(TextKey::DownloadGriddedImage),
            language: t(TextKey::LanguageLabel),
            file_operations: t(TextKey::FileOperations),
            grid_parameters: t(TextKey::GridParameters),
            actions: t(TextKey::Actions),
        }
    }
}

/// Content of one preview window.
#[derive(Clone, Debug, PartialEq)]
pub enum Panel {
    Placeholder {
        title: &'static str,
        subtitle: &'static str,
    },
    Image {
        url: String,
    },
    /// Shown while the image exists but its size is not yet known.
    Message(&'static str),
    Overlay(Overlay),
}

/// The source image with the grid drawn as vectors on top.
#[derive(Clone, Debug, PartialEq)]
pub struct Overlay {
    pub url: String,
    pub geometry: GridGeometry,
}

impl Overlay {
    /// The grid as an `<svg>` element sized to the image.
    pub fn to_svg(&self) -> String {
        let (width, height) = (self.geometry.width, self.geometry.height);
        let mut svg = format!(
            r#"<svg width="{width}" height="{height}" viewBox="0 0 {width} {height}" class="grid-overlay">"#
        );
        for line in self.geometry.lines() {
            push_line(&mut svg, line);
        }
        svg.push_str("</svg>");
        svg
    }
}

fn push_line(svg: &mut String, line: &GridLine) {
    // Writing into a String cannot fail.
    let _ = write!(
        svg,
        r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}" opacity="{}"/>"#,
        line.start.x,
        line.start.y,
        line.end.x,
        line.end.y,
        escape_attribute(&line.stroke.color),
        line.stroke.thickness,
        line.stroke.opacity,
    );
}

fn escape_attribute(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

pub fn view(model: &Model, emitter: &Emitter<Event>) -> Props {
    let language = model.language;
    let t = |key| translate(language, key);

    Props {
        language,
        lang_code: language.code(),
        languages: language_options(language),
        title: t(TextKey::AppTitle),
        subtitle: t(TextKey::AppSubtitle),
        labels: Labels::for_language(language),
        grid: model.grid.clone(),
        opacity_percent: (model.grid.opacity * 100.0).round() as u32,
        source_panel: source_panel(model),
        preview_panel: preview_panel(model),
        can_download: model.image.is_some(),
        download_ready: model.download_ready,
        nice_button: format!("{} ({})", t(TextKey::Nice), model.nice_count),
        nice_counter: format!("{}{} 🐸", t(TextKey::NiceCounter), model.nice_count),
        status: t(TextKey::StatusReady),

        on_pick_image: callback(emitter, Event::PickImage),
        on_image_load: {
            let emitter = emitter.clone();
            Box::new(move |width: u32, height: u32| emitter.emit(Event::ImageSizeLoaded { width, height }))
        },
        on_grid_size_input: text_callback(emitter, Event::GridSizeChanged),
        on_grid_color_input: text_callback(emitter, Event::GridColorChanged),
        on_grid_thickness_input: text_callback(emitter, Event::GridThicknessChanged),
        on_grid_opacity_input: text_callback(emitter, Event::GridOpacityChanged),
        on_grid_opacity_percent_input: text_callback(emitter, Event::GridOpacityPercentChanged),
        on_nice: callback(emitter, Event::NiceButtonClicked),
        on_download: callback(emitter, Event::DownloadClicked),
        on_language_select: {
            let emitter = emitter.clone();
            Box::new(move |value: &str| emitter.emit(Event::LanguageChanged(Language::from_slug(value))))
        },
    }
}

fn language_options(current: Language) -> Vec<LanguageOption> {
    Language::ALL
        .into_iter()
        .map(|language| LanguageOption {
            language,
            value: language.slug(),
            label: language.native_name(),
            flag: language.flag(),
            selected: language == current,
        })
        .collect()
}

fn source_panel(model: &Model) -> Panel {
    match &model.image {
        Some(image) => Panel::Image {
            url: image.url.clone(),
        },
        None => Panel::Placeholder {
            title: translate(model.language, TextKey::NoImageYet),
            subtitle: translate(model.language, TextKey::UploadPlaceholder),
        },
    }
}

fn preview_panel(model: &Model) -> Panel {
    match &model.image {
        Some(image) => match image.dimensions {
            Some(dimensions) => Panel::Overlay(Overlay {
                url: image.url.clone(),
                geometry: GridGeometry::compute(dimensions.width, dimensions.height, &model.grid),
            }),
            None => Panel::Message(translate(model.language, TextKey::NoImageYet)),
        },
        None => Panel::Placeholder {
            title: translate(model.language, TextKey::GriddedImage),
            subtitle: translate(model.language, TextKey::GridPreviewPlaceholder),
        },
    }
}

fn callback(emitter: &Emitter<Event>, event: Event) -> Callback {
    let emitter = emitter.clone();
    Box::new(move || emitter.emit(event.clone()))
}

fn text_callback(emitter: &Emitter<Event>, to_event: fn(String) -> Event) -> TextCallback {
    let emitter = emitter.clone();
    Box::new(move |text: &str| emitter.emit(to_event(text.to_string())))
}
