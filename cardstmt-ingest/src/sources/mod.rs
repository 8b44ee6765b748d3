//! Concrete document sources.

#[cfg(feature = "pdf")]
pub mod pdf;
pub mod text;

#[cfg(feature = "pdf")]
pub use pdf::PdfSource;
pub use text::TextSource;
