//! gizmos — passive option holders for server-rendered template widgets.
//!
//! A controller builds one holder per widget instance and hands it to the
//! template layer, which turns it into markup plus a client-side widget
//! initialization call. Holders carry values; they never render.
//!
//! ```
//! use gizmos::{DatePicker, StartView};
//!
//! let date_picker = DatePicker {
//!     display_text: "Date".to_string(),
//!     autoclose: true,
//!     format: "MM d, yyyy".to_string(),
//!     start_date: "2/15/2014".to_string(),
//!     start_view: StartView::Decade,
//!     today_button: true,
//!     initial: "February 15, 2014".to_string(),
//!     ..DatePicker::new("date1")
//! };
//! assert_eq!(date_picker.client_options()["startView"], "decade");
//! ```

pub use gizmo_core::{GizmoError, GizmoOptions, MarkupOptions, Result};
pub use gizmo_widgets::{DatePicker, MinViewMode, StartView};
