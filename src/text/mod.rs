//! Pure text stages of the card pipeline.
//!
//! Each function is a stateless transformation applied in order:
//!
//! - [`sanitize`]: XML escaping of the raw text
//! - [`select_font_size`] / [`wrap_budget`]: pick a font tier and derive the
//!   per-line character budget from the sanitized length
//! - [`wrap`]: greedy wrapping, force-chunking oversized tokens
//! - [`truncate`]: cap the line count with an ellipsis
//!
//! All lengths are counted in `char`s of the sanitized text, since escaping
//! can expand the text. Cuts made by [`wrap`] and [`truncate`] never split an
//! entity reference such as `&amp;`.

mod escape;
mod tier;
mod truncate;
mod wrap;

pub use escape::sanitize;
pub(crate) use escape::entity_safe_cut;
pub use tier::{select_font_size, wrap_budget};
pub use truncate::{ELLIPSIS, truncate};
pub use wrap::wrap;
