use std::time::Duration;

use gridit::{Event, Language, SelectedFile};

use super::build_integration_test;

const PNG_URL: &str = "data:image/png;base64,AQID";

#[test]
fn given_startup_should_write_the_initial_language_tag() {
    let test = build_integration_test().build();

    assert_eq!(test.renders.count(), 1);
    assert_eq!(test.document_langs(), vec!["es".to_string()]);
}

#[test]
fn given_pick_image_should_offer_images_and_load_the_picked_file() {
    let mut test = build_integration_test()
        .given_the_user_picks(SelectedFile::new("photo.png", "image/png", vec![1, 2, 3]))
        .build();

    test.interact(|props| (props.on_pick_image)());

    assert_eq!(test.picks(), vec![vec!["image/*".to_string()]]);
    assert_eq!(
        test.driver.model().source_url(),
        Some("data:image/png;base64,AQID")
    );
    assert_eq!(test.driver.model().dimensions(), None);
}

#[test]
fn given_a_dismissed_picker_should_not_change_the_image() {
    let mut test = build_integration_test().build();

    test.interact(|props| (props.on_pick_image)());

    assert_eq!(test.picks().len(), 1);
    assert_eq!(test.driver.model().image, None);
    // Initial render plus PickImage; no reply event followed.
    assert_eq!(test.renders.count(), 2);
}

#[test]
fn given_a_sized_image_when_download_clicked_should_send_the_render_request() {
    let mut test = build_integration_test()
        .given_a_loaded_image("data:image/png;base64,AAAA", 200, 100)
        .given_the_renderer_replies(PNG_URL)
        .build();

    test.interact(|props| (props.on_download)());

    let requests = test.render_requests();
    assert_eq!(requests.len(), 1);
    assert_eq!((requests[0].width, requests[0].height, requests[0].grid), (200, 100, 10));
    assert_eq!(requests[0].color, "#80ED99");
}

#[test]
fn given_a_rendered_image_should_download_it_then_reset_the_flag() {
    let mut test = build_integration_test()
        .given_a_loaded_image("data:image/png;base64,AAAA", 200, 100)
        .given_the_renderer_replies(PNG_URL)
        .build();

    test.interact(|props| (props.on_download)());

    assert_eq!(test.downloads(), vec![("gridded-image.png".to_string(), vec![1, 2, 3])]);
    assert_eq!(test.sleeps(), vec![Duration::from_millis(2000)]);
    test.renders.with_renders(|renders| {
        let flags: Vec<bool> = renders.iter().map(|props| props.download_ready).collect();
        // initial, DownloadClicked, GriddedImageReady, ResetDownloadFlag
        assert_eq!(flags, vec![false, false, true, false]);
    });
    assert!(!test.driver.model().download_ready);
}

#[test]
fn given_a_custom_file_name_should_download_under_that_name() {
    let mut test = build_integration_test()
        .given_a_loaded_image("data:image/png;base64,AAAA", 2, 2)
        .given_the_renderer_replies(PNG_URL)
        .given_a_download_file_name("poster-grid.png")
        .build();

    test.interact(|props| (props.on_download)());

    assert_eq!(test.downloads()[0].0, "poster-grid.png");
}

#[test]
fn given_a_failed_render_should_leave_the_flag_down() {
    let mut test = build_integration_test()
        .given_a_loaded_image("data:image/png;base64,AAAA", 200, 100)
        .build();

    test.interact(|props| (props.on_download)());

    assert_eq!(test.render_requests().len(), 1);
    assert!(test.downloads().is_empty());
    assert!(test.sleeps().is_empty());
    assert!(!test.driver.model().download_ready);
}

#[test]
fn given_a_malformed_data_url_should_refuse_to_download() {
    let mut test = build_integration_test().build();

    test.emit(Event::GriddedImageReady("data:text/plain;base64,AQID".to_string()));

    assert!(test.downloads().is_empty());
    // The flag still goes up and is reset on schedule.
    assert_eq!(test.sleeps(), vec![Duration::from_millis(2000)]);
    test.renders.with_renders(|renders| {
        assert!(renders[1].download_ready);
        assert!(!renders[2].download_ready);
    });
}

#[test]
fn given_a_failed_download_should_still_reset_the_flag() {
    let mut test = build_integration_test().given_downloads_fail().build();

    test.emit(Event::GriddedImageReady(PNG_URL.to_string()));

    assert_eq!(test.downloads().len(), 1);
    assert!(!test.driver.model().download_ready);
}

#[test]
fn given_a_language_change_should_update_the_document_tag() {
    let mut test = build_integration_test().build();

    test.interact(|props| (props.on_language_select)("japanese"));

    assert_eq!(test.document_langs(), vec!["es".to_string(), "ja".to_string()]);
    assert_eq!(test.driver.model().language, Language::Japanese);
    test.renders.with_last(|props| {
        assert_eq!(props.lang_code, "ja");
        assert_eq!(props.title, "Gridit! 🐸");
    });
}

#[test]
fn given_grid_edits_should_not_reach_any_collaborator() {
    let mut test = build_integration_test().build();

    test.interact(|props| (props.on_grid_size_input)("20"));
    test.interact(|props| (props.on_grid_color_input)("#ff0000"));
    test.interact(|props| (props.on_nice)());

    assert!(test.picks().is_empty());
    assert!(test.render_requests().is_empty());
    assert!(test.downloads().is_empty());
    assert_eq!(test.document_langs().len(), 1);
    assert_eq!(test.driver.model().grid.size, 20);
    assert_eq!(test.driver.model().nice_count, 1);
}
