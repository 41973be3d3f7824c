//! scalesheet — printable reference sheets of the major and minor scales.
//!
//! Produces two A4 SVG pages, one for the flat keys and one for the sharp
//! keys. Every row shows a major scale and its relative minor on a keyboard
//! octave and on treble and bass staves.
//!
//! # Example
//! ```no_run
//! use scalesheet::{build_page, render_page, Locale, PageKind};
//!
//! let page = build_page(PageKind::Flat).unwrap();
//! let rendered = render_page(&page, Locale::En.texts()).unwrap();
//! std::fs::write("scales_flat.svg", rendered.svg).unwrap();
//! ```

pub mod config;
pub mod error;
pub mod export;
pub mod key_signature;
pub mod locale;
pub mod renderer;
pub mod scale;
pub mod sheet;
pub mod tables;

pub use config::Config;
pub use error::{Error, Result};
pub use export::{run, run_with, write_page, ExternalTools, PostProcessor};
pub use key_signature::{accidentals_in_effect, Accidental, KeySignature};
pub use locale::{Locale, Texts};
pub use renderer::{compose_page, render_page, PageLayout, RenderedPage};
pub use scale::{build_scale, Quality, Scale};
pub use sheet::{all_pages, build_page, Page, PageKind, ScaleRow};
pub use tables::Clef;
