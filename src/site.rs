// (c) 2023 John A. Breaux
// This code is licensed under MIT license (see LICENSE for details)

//! Describes who asked for a dump, and what they called it

/// Gets the name of the enclosing function
///
/// # Examples
/// ```rust
/// fn frobnicate() -> &'static str {
///     hexview::function!()
/// }
/// assert_eq!("frobnicate", frobnicate());
/// ```
#[macro_export]
macro_rules! function {
    () => {{
        fn f() {}
        fn type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let path = type_name_of(f);
        let path = path.strip_suffix("::f").unwrap_or(path);
        // Closures show up as `{{closure}}` segments, which say nothing useful
        path.rsplit("::")
            .find(|segment| *segment != "{{closure}}")
            .unwrap_or(path)
    }};
}

/// Creates a [CallSite] for the current file, function, and line
///
/// # Examples
/// ```rust
/// # use hexview::call_site;
/// fn here() -> hexview::CallSite<'static> {
///     call_site!()
/// }
/// let site = here();
/// assert_eq!("here", site.function);
/// assert!(site.file.ends_with(".rs"));
/// ```
#[macro_export]
macro_rules! call_site {
    () => {
        $crate::site::CallSite::new(::std::file!(), $crate::function!(), ::std::line!())
    };
}

/// The place in the source that requested a dump
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CallSite<'a> {
    /// Source file name
    pub file: &'a str,
    /// Enclosing function name
    pub function: &'a str,
    /// Line number
    pub line: u32,
}

impl<'a> CallSite<'a> {
    /// Constructs a CallSite from its parts
    pub fn new(file: &'a str, function: &'a str, line: u32) -> Self {
        CallSite {
            file,
            function,
            line,
        }
    }
}

/// Everything printed in a table's preamble, apart from the span itself
///
/// # Examples
/// ```rust
/// # use hexview::{CallSite, Request};
/// let request = Request::new("buf", CallSite::new("main.rs", "main", 12)).note("after decode");
/// assert_eq!(Some("after decode"), request.note);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Request<'a> {
    /// Label for the dumped span, usually the expression that produced it
    pub target: &'a str,
    /// Where the dump was requested
    pub site: CallSite<'a>,
    /// Free-form text, printed only when present
    pub note: Option<&'a str>,
}

impl<'a> Request<'a> {
    /// Constructs a Request with no note
    pub fn new(target: &'a str, site: CallSite<'a>) -> Self {
        Request {
            target,
            site,
            note: None,
        }
    }
    /// Attaches a note to the Request
    pub fn note(self, note: &'a str) -> Self {
        Request {
            note: Some(note),
            ..self
        }
    }
}
