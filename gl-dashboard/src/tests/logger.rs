use crate::logger::level_label;

use log::Level;

#[test]
fn given_no_palette_when_labelling_level_then_plain_name() {
    assert_eq!(level_label(None, Level::Info), "INFO");
    assert_eq!(level_label(None, Level::Warn), "WARN");
}

#[test]
fn given_palette_when_labelling_level_then_name_is_kept() {
    let colors = fern::colors::ColoredLevelConfig::new();

    let label = level_label(Some(&colors), Level::Error);

    assert!(label.contains("ERROR"));
}
