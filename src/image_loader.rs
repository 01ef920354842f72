//! egui image loader for remote (`http://` / `https://`) image URIs.
//!
//! The first request for a URI starts a background fetch; egui polls the
//! loader every frame and gets `Pending` until the decoded image is cached.
//! Failures are cached too, so a broken URL is fetched once per session.

use crate::config::Config;
use egui::load::{ImageLoadResult, ImageLoader, ImagePoll, LoadError, SizeHint};
use egui::{ColorImage, Context};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

#[derive(Clone)]
enum Entry {
    Pending,
    Ready(Arc<ColorImage>),
    Failed(String),
}

/// Fetches remote images with `ureq` and decodes them with the `image` crate
pub struct RemoteImageLoader {
    agent: ureq::Agent,
    max_size_bytes: u64,
    cache: Arc<Mutex<HashMap<String, Entry>>>,
}

impl RemoteImageLoader {
    pub const ID: &'static str = "profile_toggle::RemoteImageLoader";

    pub fn new(timeout: Duration, max_size_bytes: u64) -> Self {
        Self {
            agent: crate::http::agent(timeout),
            max_size_bytes,
            cache: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            Duration::from_secs(config.image_fetch_timeout_secs),
            config.image_max_size_bytes,
        )
    }

    /// Register this loader with an egui context
    pub fn install(self, ctx: &Context) {
        ctx.add_image_loader(Arc::new(self));
    }

    fn spawn_fetch(&self, ctx: &Context, uri: &str) {
        let agent = self.agent.clone();
        let max_size_bytes = self.max_size_bytes;
        let cache = Arc::clone(&self.cache);
        let ctx = ctx.clone();
        let uri_owned = uri.to_owned();

        let spawned = std::thread::Builder::new()
            .name("image-fetch".to_string())
            .spawn(move || {
                crate::debug_log!("IMAGE", "Fetching {}", uri_owned);
                let entry = match crate::http::fetch_bytes(&agent, &uri_owned, max_size_bytes)
                    .map_err(|e| format!("{e:#}"))
                    .and_then(|bytes| decode_image(&bytes))
                {
                    Ok(image) => {
                        crate::debug_info!(
                            "IMAGE",
                            "Loaded {} ({}x{})",
                            uri_owned,
                            image.size[0],
                            image.size[1]
                        );
                        Entry::Ready(Arc::new(image))
                    }
                    Err(e) => {
                        crate::debug_error!("IMAGE", "Failed to load {}: {}", uri_owned, e);
                        Entry::Failed(e)
                    }
                };
                cache.lock().insert(uri_owned, entry);
                ctx.request_repaint();
            });

        if let Err(e) = spawned {
            log::error!("Failed to spawn image fetch thread: {}", e);
            self.cache
                .lock()
                .insert(uri.to_owned(), Entry::Failed(e.to_string()));
        }
    }
}

/// Whether this loader handles `uri`
pub fn is_remote_uri(uri: &str) -> bool {
    uri.starts_with("https://") || uri.starts_with("http://")
}

/// Decode an encoded image (PNG, JPEG, ...) into an egui image
pub fn decode_image(bytes: &[u8]) -> Result<ColorImage, String> {
    let image = image::load_from_memory(bytes).map_err(|e| e.to_string())?;
    let rgba = image.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    Ok(ColorImage::from_rgba_unmultiplied(size, rgba.as_raw()))
}

impl ImageLoader for RemoteImageLoader {
    fn id(&self) -> &str {
        Self::ID
    }

    fn load(&self, ctx: &Context, uri: &str, _size_hint: SizeHint) -> ImageLoadResult {
        if !is_remote_uri(uri) {
            return Err(LoadError::NotSupported);
        }

        let cached = self.cache.lock().get(uri).cloned();
        match cached {
            Some(Entry::Pending) => Ok(ImagePoll::Pending { size: None }),
            Some(Entry::Ready(image)) => Ok(ImagePoll::Ready { image }),
            Some(Entry::Failed(e)) => Err(LoadError::Loading(e)),
            None => {
                self.cache.lock().insert(uri.to_owned(), Entry::Pending);
                self.spawn_fetch(ctx, uri);
                Ok(ImagePoll::Pending { size: None })
            }
        }
    }

    fn forget(&self, uri: &str) {
        self.cache.lock().remove(uri);
    }

    fn forget_all(&self) {
        self.cache.lock().clear();
    }

    fn byte_size(&self) -> usize {
        self.cache
            .lock()
            .values()
            .map(|entry| match entry {
                Entry::Ready(image) => image.pixels.len() * std::mem::size_of::<egui::Color32>(),
                Entry::Pending | Entry::Failed(_) => 0,
            })
            .sum()
    }

    fn has_pending(&self) -> bool {
        self.cache
            .lock()
            .values()
            .any(|entry| matches!(entry, Entry::Pending))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let buffer = image::RgbaImage::from_pixel(width, height, image::Rgba([255, 0, 0, 255]));
        let mut out = Cursor::new(Vec::new());
        buffer
            .write_to(&mut out, image::ImageFormat::Png)
            .expect("Failed to encode PNG");
        out.into_inner()
    }

    fn loader() -> RemoteImageLoader {
        RemoteImageLoader::new(Duration::from_secs(1), 1024)
    }

    #[test]
    fn test_is_remote_uri() {
        assert!(is_remote_uri("https://example.com/a.jpg"));
        assert!(is_remote_uri("http://example.com/a.jpg"));
        assert!(!is_remote_uri("file:///tmp/a.jpg"));
        assert!(!is_remote_uri("bytes://a.png"));
    }

    #[test]
    fn test_decode_png() {
        let image = decode_image(&png_bytes(3, 2)).expect("decode PNG");
        assert_eq!(image.size, [3, 2]);
        assert_eq!(image.pixels.len(), 6);
    }

    #[test]
    fn test_decode_garbage_fails() {
        assert!(decode_image(b"definitely not an image").is_err());
    }

    #[test]
    fn test_non_remote_uri_not_supported() {
        let ctx = Context::default();
        let result = loader().load(&ctx, "file:///tmp/a.png", SizeHint::default());
        assert!(matches!(result, Err(LoadError::NotSupported)));
    }

    #[test]
    fn test_cached_entries_are_served() {
        let ctx = Context::default();
        let loader = loader();
        let image = Arc::new(decode_image(&png_bytes(2, 2)).expect("decode PNG"));
        {
            let mut cache = loader.cache.lock();
            cache.insert("https://a.test/ok.png".into(), Entry::Ready(image));
            cache.insert("https://a.test/bad.png".into(), Entry::Failed("boom".into()));
        }

        let ok = loader.load(&ctx, "https://a.test/ok.png", SizeHint::default());
        assert!(matches!(ok, Ok(ImagePoll::Ready { .. })));

        let bad = loader.load(&ctx, "https://a.test/bad.png", SizeHint::default());
        assert!(matches!(bad, Err(LoadError::Loading(ref msg)) if msg == "boom"));

        assert_eq!(loader.byte_size(), 4 * std::mem::size_of::<egui::Color32>());
        assert!(!loader.has_pending());

        loader.forget("https://a.test/ok.png");
        assert_eq!(loader.byte_size(), 0);
        loader.forget_all();
        assert!(loader.cache.lock().is_empty());
    }
}
