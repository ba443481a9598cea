//! Linux のシステムフォント候補
//!
//! ディストリごとに配置が違うので、
//! よく見かけるパスを順番に並べておく

use anyhow::Result;
use std::path::PathBuf;

pub fn system_font_candidates() -> Result<Vec<PathBuf>> {
    Ok(vec![
        // DejaVu (Debian / Ubuntu)
        PathBuf::from("/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf"),
        // DejaVu (Fedora / Arch)
        PathBuf::from("/usr/share/fonts/dejavu-sans-fonts/DejaVuSans.ttf"),
        PathBuf::from("/usr/share/fonts/TTF/DejaVuSans.ttf"),
        // Liberation
        PathBuf::from("/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf"),
        // Noto
        PathBuf::from("/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf"),
        // FreeFont
        PathBuf::from("/usr/share/fonts/truetype/freefont/FreeSans.ttf"),
    ])
}
