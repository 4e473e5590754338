use autofilm_models::Category;
use std::path::{Path, PathBuf};

/// What gets written where. Library (flatten) mode only ever produces
/// pointer files, so the download toggles are cleared on construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPolicy {
    output_dir: PathBuf,
    flatten: bool,
    subtitle: bool,
    image: bool,
    metadata: bool,
    concurrency: Option<usize>,
}

impl OutputPolicy {
    pub fn new(
        output_dir: PathBuf,
        flatten: bool,
        subtitle: bool,
        image: bool,
        metadata: bool,
        concurrency: Option<usize>,
    ) -> Self {
        Self {
            output_dir,
            flatten,
            subtitle: subtitle && !flatten,
            image: image && !flatten,
            metadata: metadata && !flatten,
            concurrency: concurrency.filter(|n| *n > 0),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn flatten(&self) -> bool {
        self.flatten
    }

    pub fn include_subtitle(&self) -> bool {
        self.subtitle
    }

    pub fn include_image(&self) -> bool {
        self.image
    }

    pub fn include_metadata(&self) -> bool {
        self.metadata
    }

    /// `None` means unbounded
    pub fn concurrency(&self) -> Option<usize> {
        self.concurrency
    }

    /// Whether entries of this category produce a local file
    pub fn includes(&self, category: Category) -> bool {
        match category {
            Category::Video => true,
            Category::Subtitle => self.subtitle,
            Category::Image => self.image,
            Category::Metadata => self.metadata,
            Category::Ignored => false,
        }
    }
}
