//! Source locations.

use core::fmt;

/// A point in the source: file, enclosing function, line and column.
///
/// [`CallSite::UNKNOWN`] is the "unset" marker every invocation starts from.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CallSite {
    file: &'static str,
    function: &'static str,
    line: u32,
    column: u32,
}

impl CallSite {
    pub const UNKNOWN: CallSite = CallSite {
        file: "unknown",
        function: "unknown",
        line: u32::MAX,
        column: u32::MAX,
    };

    pub const fn new(file: &'static str, function: &'static str, line: u32, column: u32) -> Self {
        CallSite { file, function, line, column }
    }

    pub fn is_unknown(&self) -> bool {
        *self == CallSite::UNKNOWN
    }

    pub const fn file(&self) -> &'static str {
        self.file
    }

    pub const fn function(&self) -> &'static str {
        self.function
    }

    pub const fn line(&self) -> u32 {
        self.line
    }

    pub const fn column(&self) -> u32 {
        self.column
    }
}

impl Default for CallSite {
    fn default() -> Self {
        CallSite::UNKNOWN
    }
}

impl fmt::Debug for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unknown() {
            return f.write_str("CallSite(unknown)");
        }
        f.debug_struct("CallSite")
            .field("file", &self.file)
            .field("function", &self.function)
            .field("line", &self.line)
            .field("column", &self.column)
            .finish()
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unknown() {
            return f.write_str("<unknown>");
        }
        write!(f, "{} ({}:{}:{})", self.function, self.file, self.line, self.column)
    }
}

/// Strip the helper suffix the `call_site!` probe function leaves behind.
#[doc(hidden)]
pub fn __function_name(probe: &'static str) -> &'static str {
    let name = probe.strip_suffix("::__here").unwrap_or(probe);
    // closures show up as `{{closure}}` segments; report the enclosing fn
    let mut name = name;
    while let Some(outer) = name.strip_suffix("::{{closure}}") {
        name = outer;
    }
    name
}
