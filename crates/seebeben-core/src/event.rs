//! Datenstruktur für ein einzelnes Erdbeben-Ereignis aus dem USGS-Feed.
//!
//! Dieses Modul definiert den [`Event`], der die drei angezeigten Werte eines
//! GeoJSON-Features trägt: Titel, Zeitpunkt und Tsunami-Flag. Pro Abrufzyklus
//! existiert höchstens eine Instanz; sie wird ausschließlich vom Extraktor
//! konstruiert und nie persistiert.

use serde::{Deserialize, Serialize};

/// Ein einzelnes Erdbeben-Ereignis, extrahiert aus dem ersten Eintrag der
/// `features`-Liste einer USGS-Antwort.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Event {
    /// Menschenlesbare Beschreibung, z. B. "M 6.8 - Fiji".
    pub title: String,
    /// Ereigniszeitpunkt in Millisekunden seit der Unix-Epoche (UTC).
    pub occurred_at: i64,
    /// Tsunami-Flag: `0` = keine Warnung, `1` = Warnung ausgegeben, jeder
    /// andere Wert = Status unbekannt.
    pub tsunami_alert: i64,
}
