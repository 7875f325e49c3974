//! Items that are relevant throughout the codebase.

pub use color_eyre::eyre::{bail, eyre, ContextCompat, WrapErr};
pub use color_eyre::{Report, Result, Section, SectionExt};
pub use tracing::{debug, error, info, trace, warn};
