/// Encodage PNG, base64 et écriture fichier des identicons.
///
/// Les fonctions `render_*` enchaînent le pipeline complet de `ic-render`
/// avec l'encodeur.

pub mod error;
pub mod output;
pub mod png;

pub use error::ExportError;
pub use output::{render_base64, render_bytes, render_file};
pub use png::{decode_png, encode_png};
