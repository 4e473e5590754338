use autofilm_models::{
    Category, IMAGE_EXTENSIONS, METADATA_EXTENSIONS, SUBTITLE_EXTENSIONS, VIDEO_EXTENSIONS,
};

/// Categorizes a file by the end of its name, case-insensitively.
///
/// Tables are plain suffixes rather than whole extensions, so `Film.m2ts`
/// counts as video through `ts`. Checked in order: video, image, subtitle,
/// metadata.
pub fn classify(file_name: &str) -> Category {
    let name = file_name.to_ascii_lowercase();
    let matches = |table: &[&str]| table.iter().any(|suffix| name.ends_with(suffix));

    if matches(VIDEO_EXTENSIONS) {
        Category::Video
    } else if matches(IMAGE_EXTENSIONS) {
        Category::Image
    } else if matches(SUBTITLE_EXTENSIONS) {
        Category::Subtitle
    } else if matches(METADATA_EXTENSIONS) {
        Category::Metadata
    } else {
        Category::Ignored
    }
}
