//! Terminal UI helpers for kubeversion.
//!
//! Consistent status output, error display, spinners and download
//! progress bars.

pub mod output;
pub mod printer;
pub mod spinner;
pub mod style;

pub use output::{Output, Verbosity};
pub use printer::Printer;
pub use spinner::{Progress, Spinner};
pub use style::{Style, configure_colors};
