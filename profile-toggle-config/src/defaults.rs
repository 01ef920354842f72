//! Default values used by `#[serde(default = ...)]` on [`crate::Config`].

pub fn window_title() -> String {
    "profile-toggle".to_string()
}

pub fn window_width() -> u32 {
    480
}

pub fn window_height() -> u32 {
    640
}

pub fn image_fetch_timeout_secs() -> u64 {
    10
}

pub fn image_max_size_bytes() -> u64 {
    4 * 1024 * 1024 // 4 MiB
}
