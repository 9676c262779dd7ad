//! Moving-average smoothers for univariate series.
//!
//! Both smoothers are stateless over calls and perform no I/O.
//!
//! ```rust
//! use trendline_smooth::{ema, wma};
//!
//! let smoothed = ema(&[10.0, 20.0, 30.0], 0.5).unwrap();
//! assert_eq!(smoothed, vec![10.0, 15.0, 22.5]);
//!
//! let averaged = wma(&[10.0, 20.0, 30.0], &[1.0, 1.0, 1.0]).unwrap();
//! assert_eq!(averaged.len(), 1);
//! assert!((averaged[0] - 20.0).abs() < 1e-12);
//! ```

mod ema;
mod error;
mod wma;

pub use ema::{ema, ema_normalized};
pub use error::SmoothError;
pub use wma::wma;
