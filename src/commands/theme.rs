//! Show or change the stored theme preference

use anyhow::Result;
use std::io::Write;

use crate::prefs::{Preferences, Theme};
use crate::Folio;

/// What to do with the theme preference
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeAction {
    Show,
    Toggle,
    Set(Theme),
}

pub fn run<W: Write>(folio: &Folio, action: ThemeAction, mut out: W) -> Result<()> {
    let path = folio.prefs_path();
    let mut prefs = Preferences::load(&path);

    let theme = match action {
        ThemeAction::Show => prefs.theme,
        ThemeAction::Toggle => prefs.toggle_theme(&path)?,
        ThemeAction::Set(theme) => {
            prefs.theme = theme;
            prefs.save(&path)?;
            theme
        }
    };

    writeln!(out, "{}", theme)?;
    Ok(())
}
