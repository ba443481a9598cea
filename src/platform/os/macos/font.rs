//! macOS のシステムフォント候補

use anyhow::Result;
use std::path::PathBuf;

pub fn system_font_candidates() -> Result<Vec<PathBuf>> {
    Ok(vec![
        PathBuf::from("/System/Library/Fonts/Supplemental/Arial.ttf"),
        PathBuf::from("/Library/Fonts/Arial.ttf"),
        // .ttc は先頭のフェイスを使う
        PathBuf::from("/System/Library/Fonts/Helvetica.ttc"),
        PathBuf::from("/System/Library/Fonts/SFNS.ttf"),
    ])
}
