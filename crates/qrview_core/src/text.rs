//! User-facing strings. The page is German.

pub const URL_HINT: &str = "z.B. m0x2.de";
pub const TEXT_HINT: &str = "Geben Sie hier Ihren Text ein";
pub const EMPTY_PREVIEW: &str = "Geben Sie etwas ein, um einen QR-Code zu generieren.";

pub(crate) const DOWNLOAD_NEEDS_INPUT: &str =
    "Bitte geben Sie einen Wert ein, um einen QR-Code zu generieren und herunterzuladen.";
pub(crate) const COPY_NEEDS_INPUT: &str = "Bitte geben Sie zuerst einen Wert ein.";
pub(crate) const DOWNLOAD_NO_SYMBOL: &str =
    "QR-Code konnte nicht heruntergeladen werden. Stellen Sie sicher, dass ein QR-Code generiert wurde.";
pub(crate) const COPY_IMAGE_NO_SYMBOL: &str = "Es ist kein QR-Code zum Kopieren vorhanden.";
pub(crate) const IMAGE_CLIPBOARD_UNSUPPORTED: &str =
    "Ihr Browser unterstützt das Kopieren von Bildern nicht.";
pub(crate) const DOWNLOAD_FAILED: &str = "Der Download ist fehlgeschlagen.";
pub(crate) const COPY_TEXT_FAILED: &str = "Kopieren in die Zwischenablage fehlgeschlagen.";
pub(crate) const COPY_IMAGE_FAILED: &str = "Das Bild konnte nicht kopiert werden.";
pub(crate) const RENDER_FAILED: &str =
    "Für diesen Inhalt konnte kein QR-Code erzeugt werden. Kürzen Sie den Text oder vergrößern Sie das Bild.";
pub(crate) const TEXT_COPIED: &str = "Inhalt in die Zwischenablage kopiert.";
pub(crate) const IMAGE_COPIED: &str = "QR-Code-Bild in die Zwischenablage kopiert.";
pub(crate) const THEME_DARK: &str = "Dunkles Design aktiviert.";
pub(crate) const THEME_LIGHT: &str = "Helles Design aktiviert.";

pub(crate) fn downloaded(filename: &str) -> String {
    format!("QR-Code als {filename} heruntergeladen.")
}
