mod markdown;
mod video;

use std::path::Path;

use simplelog::{CombinedLogger, TermLogger, TerminalMode};

pub fn setup_log() {
    CombinedLogger::init(vec![TermLogger::new(
        log::LevelFilter::Debug,
        simplelog::Config::default(),
        TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )])
    .ok();
}

pub const POSTS_JSON: &str = r#"{
    "posts": [
        { "slug": "new-year", "title": "New Year", "date": "2024-01-01", "description": "First post" },
        { "slug": "spring", "title": "Spring", "date": "2024-03-01", "description": "Third post" },
        { "slug": "winter", "title": "Winter", "date": "2024-02-01", "description": "Second post" }
    ]
}"#;

fn file_name(path: &Path) -> &str {
    path.file_name().and_then(|name| name.to_str()).unwrap_or_default()
}

/// All three posts of [`POSTS_JSON`] exist
pub fn fs_read_file(path: &Path) -> anyhow::Result<String> {
    match file_name(path) {
        "posts.json" => Ok(POSTS_JSON.to_string()),
        "new-year.md" => Ok("# Happy new year\n\nSome **bold** words.".to_string()),
        "spring.md" => Ok("Spring is here.\n\nhttps://www.youtube.com/watch?v=dQw4w9WgXcQ".to_string()),
        "winter.md" => Ok("- snow\n- ice".to_string()),
        _ => Err(anyhow::anyhow!("No such file or directory")),
    }
}

/// Like [`fs_read_file`], but winter.md is missing
pub fn fs_read_file_missing_winter(path: &Path) -> anyhow::Result<String> {
    match file_name(path) {
        "winter.md" => Err(anyhow::anyhow!("No such file or directory")),
        _ => fs_read_file(path),
    }
}

pub fn fs_read_nothing(_path: &Path) -> anyhow::Result<String> {
    Err(anyhow::anyhow!("No such file or directory"))
}

/// Only images/cat.jpg exists
pub fn fs_read_asset(path: &Path) -> anyhow::Result<Vec<u8>> {
    if path.ends_with("images/cat.jpg") {
        Ok(CAT_JPG.to_vec())
    } else {
        Err(anyhow::anyhow!("No such file or directory"))
    }
}

pub const CAT_JPG: &[u8] = &[0xff, 0xd8, 0xff, 0xe0, 0x00, 0x10];
