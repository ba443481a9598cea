//! Windows のシステムフォント候補

use anyhow::Result;
use std::path::PathBuf;

pub fn system_font_candidates() -> Result<Vec<PathBuf>> {
    Ok(vec![
        PathBuf::from(r"C:\Windows\Fonts\arial.ttf"),
        PathBuf::from(r"C:\Windows\Fonts\segoeui.ttf"),
        PathBuf::from(r"C:\Windows\Fonts\tahoma.ttf"),
        PathBuf::from(r"C:\Windows\Fonts\verdana.ttf"),
    ])
}
