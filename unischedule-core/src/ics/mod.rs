//! ICS document generation.
//!
//! Output is a deliberate RFC 5545 subset: fixed property order, floating
//! local times, and only newline escaping in DESCRIPTION.

mod generate;

pub use generate::{CALSCALE, CalendarDocument, PRODID, VERSION, convert, render_event};
