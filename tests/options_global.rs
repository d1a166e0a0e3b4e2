use cv3::color::{ChannelCount, ColorExpr};
use cv3::options::{self, DrawDefaults, Font, LineType, Options, VideoDefaults};
use cv3::params::{resolve_draw, resolve_video, DrawRequest, VideoRequest};
use cv3::Cv3Error;

mod common;

// Kept as a single test: the global instance is shared across test threads.
#[test]
fn global_options_drive_parameter_defaults() {
    let _ = env_logger::builder().is_test(true).try_init();
    options::reset_options();

    let temp = tempfile::tempdir().expect("create temp dir");
    let config = common::write_config(temp.path(), "opts.yaml", common::VALID_YAML);
    options::load_options(&config).expect("load options");

    let loaded = options::options();
    assert!(!loaded.rgb);
    assert_eq!(loaded.color, ColorExpr::named("blue"));
    assert_eq!(loaded.font, Font::HersheyDuplex);
    assert_eq!(loaded.line_type, LineType::AntiAliased);

    let params = options::with_options(|o| {
        resolve_draw(&DrawRequest::default(), o, ChannelCount::Color)
    })
    .expect("resolve draw");
    // Blue in BGR order.
    assert_eq!(params.color, vec![255.0, 0.0, 0.0]);
    assert_eq!(params.thickness, 2);
    assert_eq!(params.scale, 0.75);

    options::set_rgb();
    options::set_draw(DrawDefaults {
        thickness: Some(-1),
        pt_radius: Some(0),
        ..Default::default()
    })
    .expect("filled thickness is valid");
    let params = options::with_options(|o| {
        resolve_draw(&DrawRequest::default(), o, ChannelCount::Color)
    })
    .expect("resolve draw");
    assert_eq!(params.color, vec![0.0, 0.0, 255.0]);
    assert_eq!(params.thickness, -1);

    let err = options::set_video(VideoDefaults {
        fps: Some(f64::INFINITY),
        ..Default::default()
    })
    .unwrap_err();
    assert!(matches!(err, Cv3Error::InvalidOption { field: "fps", .. }));
    let video = options::with_options(|o| resolve_video(&VideoRequest::default(), o));
    assert_eq!(video.fps, 25.0);
    assert_eq!(video.fourcc.as_str(), "XVID");

    // A broken file leaves the current options untouched.
    let broken = common::write_config(temp.path(), "broken.yaml", "thickness: [1, 2\n");
    assert!(matches!(
        options::load_options(&broken),
        Err(Cv3Error::ConfigYamlParse { .. })
    ));
    assert_eq!(options::options().thickness, -1);

    options::update(|o| o.thickness = -7);
    assert_eq!(options::options().thickness, -7);

    options::set_experimental(true);
    assert!(options::with_options(|o| o.require_experimental("warp")).is_ok());

    options::reset_options();
    assert_eq!(options::options(), Options::default());
}
