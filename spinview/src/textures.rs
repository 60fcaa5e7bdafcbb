use crate::ViewerConfig;

/// Source URL for every frame of the ring, indexed from zero.
///
/// Files are numbered from one: frame `0` is `{base}/1.{ext}`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextureSet {
    urls: Vec<String>,
}

impl TextureSet {
    pub fn new(base_path: &str, extension: &str, frame_count: usize) -> Self {
        let base = base_path.trim_end_matches('/');
        let extension = extension.trim_start_matches('.');
        let urls = (0..frame_count)
            .map(|index| format!("{base}/{}.{extension}", index + 1))
            .collect();
        Self { urls }
    }

    pub fn from_config(config: &ViewerConfig) -> Self {
        Self::new(&config.base_path, &config.extension, config.frame_count)
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    pub fn url(&self, index: usize) -> Option<&str> {
        self.urls.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> + '_ {
        self.urls.iter().map(String::as_str).enumerate()
    }
}
