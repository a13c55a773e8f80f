// (c) 2023 John A. Breaux
// This code is licensed under MIT license (see LICENSE.txt for details)

//! This crate prints regions of memory as hex and ASCII tables, stamped with
//! the file, function, and line that asked for them. It's meant for poking at
//! buffers while debugging, especially on small targets where all you've got
//! is a serial port.
//!
//! Set up an [Emitter] once with somewhere to send the output, then use
//! [hv_print!] or [hv_printn!] wherever you want to look at some bytes.

pub mod color;
pub mod emitter;
pub mod error;
pub mod layout;
pub mod sink;
pub mod site;

pub use emitter::Emitter;
pub use site::{CallSite, Request};

/// Renders a span through an [Emitter], labelled with the expression and call site
///
/// # Examples
/// ```rust
/// # use hexview::{prelude::*, sink::Capture};
/// # fn main() -> Result<()> {
/// let capture = Capture::default();
/// let hv = Emitter::new("demo", capture.clone());
/// let packet = vec![0xde, 0xad, 0xbe, 0xef];
/// hv_print!(hv, packet)?;
/// assert!(capture.text().contains("target  packet\r\n"));
/// # Ok(())
/// # }
/// ```
#[macro_export]
macro_rules! hv_print {
    ($hv:expr, $start:expr $(,)?) => {
        $hv.render(
            &$crate::site::Request::new(::std::stringify!($start), $crate::call_site!()),
            ::std::convert::AsRef::<[u8]>::as_ref(&$start),
        )
    };
}

/// Like [hv_print!], with a note printed below the span's length
///
/// # Examples
/// ```rust
/// # use hexview::{prelude::*, sink::Capture};
/// # fn main() -> Result<()> {
/// let capture = Capture::default();
/// let hv = Emitter::new("demo", capture.clone());
/// hv_printn!(hv, b"\x01\x02", "two bytes")?;
/// assert!(capture.text().contains("note    two bytes\r\n"));
/// # Ok(())
/// # }
/// ```
#[macro_export]
macro_rules! hv_printn {
    ($hv:expr, $start:expr, $note:expr $(,)?) => {
        $hv.render(
            &$crate::site::Request::new(::std::stringify!($start), $crate::call_site!())
                .note($note),
            ::std::convert::AsRef::<[u8]>::as_ref(&$start),
        )
    };
}

/// Common imports for hexview
pub mod prelude {
    pub use super::{call_site, hv_print, hv_printn};
    pub use crate::{
        color::{ByteClass, Color, ColorMapper},
        emitter::Emitter,
        error::{Error, Result},
        sink::Sink,
        site::{CallSite, Request},
    };
}
