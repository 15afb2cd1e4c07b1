use gridit::{Event, Panel, SelectedFile};

use super::build_integration_test;

#[test]
fn given_a_picked_image_should_preview_then_export_the_grid() {
    let mut test = build_integration_test()
        .given_the_user_picks(SelectedFile::new("photo.png", "image/png", vec![1, 2, 3]))
        .given_the_renderer_replies("data:image/png;base64,AAAA")
        .build();

    test.interact(|props| (props.on_pick_image)());
    test.renders.with_last(|props| {
        assert!(props.can_download);
        assert!(matches!(props.preview_panel, Panel::Message(_)));
    });

    test.interact(|props| (props.on_image_load)(300, 150));
    test.interact(|props| (props.on_grid_size_input)("3"));
    test.interact(|props| (props.on_grid_thickness_input)("2"));
    test.interact(|props| (props.on_grid_opacity_percent_input)("50"));
    test.renders.with_last(|props| {
        let Panel::Overlay(overlay) = &props.preview_panel else {
            panic!("expected the grid overlay");
        };
        let xs: Vec<f64> = overlay.geometry.vertical.iter().map(|line| line.offset()).collect();
        assert_eq!(xs, vec![0.0, 100.0, 200.0, 300.0]);
        assert_eq!(props.opacity_percent, 50);
    });

    test.interact(|props| (props.on_download)());

    let request = &test.render_requests()[0];
    assert_eq!(request.url, "data:image/png;base64,AQID");
    assert_eq!((request.width, request.height), (300, 150));
    assert_eq!((request.grid, request.thickness, request.opacity), (3, 2, 0.5));
    assert_eq!(test.downloads(), vec![("gridded-image.png".to_string(), vec![0, 0, 0])]);
    assert!(!test.driver.model().download_ready);
}

#[test]
fn given_every_interaction_should_render_once_per_event() {
    let mut test = build_integration_test().build();

    test.interact(|props| (props.on_nice)());
    test.interact(|props| (props.on_nice)());
    test.emit(Event::GridColorChanged("#000".to_string()));

    assert_eq!(test.renders.count(), 4);
    test.renders.with_renders(|renders| {
        let counts: Vec<&str> = renders.iter().map(|props| props.nice_counter.as_str()).collect();
        assert_eq!(
            counts,
            vec![
                "Contador de Buenísimo: 0 🐸",
                "Contador de Buenísimo: 1 🐸",
                "Contador de Buenísimo: 2 🐸",
                "Contador de Buenísimo: 2 🐸",
            ]
        );
    });
}

#[test]
fn given_a_second_upload_should_wait_for_the_new_size_before_exporting() {
    let mut test = build_integration_test()
        .given_a_loaded_image("data:image/png;base64,AAAA", 200, 100)
        .given_the_user_picks(SelectedFile::new("next.jpg", "image/jpeg", vec![0xff, 0xd8]))
        .given_the_renderer_replies("data:image/png;base64,AAAA")
        .build();

    test.interact(|props| (props.on_pick_image)());
    test.interact(|props| (props.on_download)());

    assert!(test.render_requests().is_empty());
    assert_eq!(test.driver.model().source_url(), Some("data:image/jpeg;base64,/9g="));
}
