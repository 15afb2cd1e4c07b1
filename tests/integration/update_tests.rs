use gridit::update::{parse_grid_opacity, parse_grid_opacity_percent};
use gridit::{
    translate, update, Dimensions, DownloadRequest, EffectRequest, Event, GridRenderRequest, Language, Model,
    SelectedFile, SourceImage, TextKey, DOWNLOAD_FLAG_RESET_DELAY,
};

fn with_image(width: u32, height: u32) -> Model {
    Model {
        image: Some(SourceImage {
            url: "data:image/png;base64,AAAA".to_string(),
            dimensions: Some(Dimensions::new(width, height)),
        }),
        ..Model::default()
    }
}

fn apply(model: &Model, events: impl IntoIterator<Item = Event>) -> Model {
    events
        .into_iter()
        .fold(model.clone(), |model, event| update(event, &model).0)
}

#[test]
fn given_default_model_should_start_with_the_documented_defaults() {
    let model = Model::default();

    assert_eq!(model.language, Language::Spanish);
    assert_eq!(model.grid.size, 10);
    assert_eq!(model.grid.color, "#80ED99");
    assert_eq!(model.grid.thickness, 1);
    assert_eq!(model.grid.opacity, 1.0);
    assert_eq!(model.image, None);
    assert!(!model.download_ready);
    assert_eq!(model.nice_count, 0);
}

#[test]
fn given_a_sized_image_when_download_clicked_should_request_a_grid_render() {
    let (next, effects) = update(Event::DownloadClicked, &with_image(200, 100));

    assert_eq!(next, with_image(200, 100));
    assert_eq!(
        effects,
        vec![
            EffectRequest::LogDebug("DownloadClicked with valid image data. Width: 200, Height: 100".to_string()),
            EffectRequest::RequestGridRender(GridRenderRequest {
                url: "data:image/png;base64,AAAA".to_string(),
                width: 200,
                height: 100,
                grid: 10,
                color: "#80ED99".to_string(),
                thickness: 1,
                opacity: 1.0,
            }),
        ]
    );
}

#[test]
fn given_no_image_when_download_clicked_should_only_log() {
    let (next, effects) = update(Event::DownloadClicked, &Model::default());

    assert_eq!(next, Model::default());
    assert_eq!(
        effects,
        vec![EffectRequest::LogDebug("DownloadClicked but missing image data".to_string())]
    );
}

#[test]
fn given_an_unsized_image_when_download_clicked_should_not_render() {
    let model = apply(&Model::default(), [Event::ImageLoaded("data:image/png;base64,AAAA".to_string())]);

    let (_, effects) = update(Event::DownloadClicked, &model);

    assert!(effects
        .iter()
        .all(|effect| !matches!(effect, EffectRequest::RequestGridRender(_))));
}

#[test]
fn given_unparseable_grid_size_should_fall_back_to_ten() {
    let model = Model {
        grid: gridit::GridSettings {
            size: 25,
            ..Default::default()
        },
        ..Model::default()
    };

    let (next, effects) = update(Event::GridSizeChanged("abc".to_string()), &model);

    assert_eq!(next.grid.size, 10);
    assert!(effects.is_empty());
}

#[test]
fn given_out_of_range_numbers_should_clamp_to_the_allowed_ranges() {
    let model = apply(
        &Model::default(),
        [
            Event::GridSizeChanged("500".to_string()),
            Event::GridThicknessChanged("0".to_string()),
            Event::GridOpacityChanged("1.7".to_string()),
        ],
    );
    assert_eq!((model.grid.size, model.grid.thickness, model.grid.opacity), (50, 1, 1.0));

    let model = apply(
        &model,
        [
            Event::GridSizeChanged("-3".to_string()),
            Event::GridThicknessChanged("99".to_string()),
            Event::GridOpacityChanged("-0.2".to_string()),
        ],
    );
    assert_eq!((model.grid.size, model.grid.thickness, model.grid.opacity), (2, 10, 0.0));
}

#[test]
fn given_unparseable_thickness_and_opacity_should_use_their_fallbacks() {
    let model = apply(
        &Model::default(),
        [
            Event::GridThicknessChanged("thick".to_string()),
            Event::GridOpacityChanged("".to_string()),
        ],
    );

    assert_eq!(model.grid.thickness, 1);
    assert_eq!(model.grid.opacity, 0.5);
}

#[test]
fn given_non_finite_opacity_text_should_use_the_fallback() {
    assert_eq!(parse_grid_opacity("NaN"), 0.5);
    assert_eq!(parse_grid_opacity("inf"), 0.5);
    assert_eq!(parse_grid_opacity(" 0.25 "), 0.5);
    assert_eq!(parse_grid_opacity("0.25"), 0.25);
}

#[test]
fn given_padded_numbers_should_treat_them_as_malformed() {
    let model = apply(
        &Model::default(),
        [
            Event::GridSizeChanged(" 12".to_string()),
            Event::GridThicknessChanged("3 ".to_string()),
            Event::GridOpacityPercentChanged(" 80".to_string()),
        ],
    );

    assert_eq!((model.grid.size, model.grid.thickness, model.grid.opacity), (10, 1, 0.5));
}

#[test]
fn given_oversized_integers_should_clamp_to_the_range_ends() {
    let model = apply(
        &Model::default(),
        [
            Event::GridSizeChanged("99999999999999999999".to_string()),
            Event::GridThicknessChanged("99999999999999999999".to_string()),
            Event::GridOpacityPercentChanged("-99999999999999999999".to_string()),
        ],
    );

    assert_eq!((model.grid.size, model.grid.thickness, model.grid.opacity), (50, 10, 0.0));
}

#[test]
fn given_opacity_percentages_should_store_a_fraction() {
    assert_eq!(parse_grid_opacity_percent("40"), 0.4);
    assert_eq!(parse_grid_opacity_percent("140"), 1.0);
    assert_eq!(parse_grid_opacity_percent("oops"), 0.5);

    let model = apply(&Model::default(), [Event::GridOpacityPercentChanged("75".to_string())]);
    assert_eq!(model.grid.opacity, 0.75);
}

#[test]
fn given_any_color_text_should_store_it_verbatim() {
    let model = apply(&Model::default(), [Event::GridColorChanged("not a color".to_string())]);
    assert_eq!(model.grid.color, "not a color");
}

#[test]
fn given_a_gridded_image_should_raise_the_flag_and_schedule_its_reset() {
    let url = "data:image/png;base64,AAAA";

    let (next, effects) = update(Event::GriddedImageReady(url.to_string()), &with_image(4, 4));

    assert!(next.download_ready);
    assert_eq!(
        effects,
        vec![
            EffectRequest::RequestDownload(DownloadRequest::new(url)),
            EffectRequest::ScheduleDelayed {
                event: Box::new(Event::ResetDownloadFlag),
                delay: DOWNLOAD_FLAG_RESET_DELAY,
            },
        ]
    );
    assert_eq!(DOWNLOAD_FLAG_RESET_DELAY.as_millis(), 2000);

    let (reset, effects) = update(Event::ResetDownloadFlag, &next);
    assert!(!reset.download_ready);
    assert!(effects.is_empty());
}

#[test]
fn given_the_flag_is_already_down_when_reset_should_leave_state_unchanged() {
    let model = with_image(4, 4);

    let (next, effects) = update(Event::ResetDownloadFlag, &model);

    assert_eq!(next, model);
    assert!(effects.is_empty());
}

#[test]
fn given_a_language_change_should_switch_language_and_persist_its_tag() {
    let (next, effects) = update(Event::LanguageChanged(Language::Japanese), &Model::default());

    assert_eq!(next.language, Language::Japanese);
    assert_eq!(effects, vec![EffectRequest::PersistLanguageTag("ja")]);
    assert_eq!(translate(next.language, TextKey::AppTitle), "Gridit! 🐸");
    assert_eq!(translate(Language::from_index(9).unwrap(), TextKey::AppTitle), "Gridit! 🐸");
}

#[test]
fn given_a_new_image_should_forget_the_previous_dimensions() {
    let model = with_image(200, 100);

    let (next, _) = update(Event::ImageLoaded("data:image/jpeg;base64,/9j/".to_string()), &model);

    let image = next.image.unwrap();
    assert_eq!(image.url, "data:image/jpeg;base64,/9j/");
    assert_eq!(image.dimensions, None);
}

#[test]
fn given_no_image_when_size_reported_should_ignore_it() {
    let (next, effects) = update(
        Event::ImageSizeLoaded {
            width: 10,
            height: 10,
        },
        &Model::default(),
    );

    assert_eq!(next, Model::default());
    assert!(matches!(effects.as_slice(), [EffectRequest::LogDebug(_)]));
}

#[test]
fn given_the_image_source_events_should_request_picker_then_reader() {
    let (_, effects) = update(Event::PickImage, &Model::default());
    assert_eq!(
        effects,
        vec![EffectRequest::SelectImageFile {
            accept: vec!["image/*".to_string()]
        }]
    );

    let file = SelectedFile::new("photo.png", "image/png", vec![1, 2, 3]);
    let (next, effects) = update(Event::ImageSelected(file.clone()), &Model::default());
    assert_eq!(next, Model::default());
    assert_eq!(effects, vec![EffectRequest::ReadAsDataUrl(file)]);
}

#[test]
fn given_nice_clicks_should_count_them_and_saturate() {
    let model = apply(&Model::default(), [Event::NiceButtonClicked, Event::NiceButtonClicked]);
    assert_eq!(model.nice_count, 2);

    let maxed = Model {
        nice_count: u32::MAX,
        ..Model::default()
    };
    assert_eq!(update(Event::NiceButtonClicked, &maxed).0.nice_count, u32::MAX);
}

#[test]
fn given_any_event_should_never_touch_the_previous_snapshot() {
    let before = with_image(200, 100);
    let snapshot = before.clone();

    let _ = update(Event::GridSizeChanged("3".to_string()), &before);
    let _ = update(Event::GriddedImageReady("data:image/png;base64,AAAA".to_string()), &before);

    assert_eq!(before, snapshot);
}
