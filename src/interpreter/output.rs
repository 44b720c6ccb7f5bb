//! Destinations for the lines `print` produces.
//!
//! The command line host writes straight to stdout; tests and embedders
//! capture into a buffer and read it back.

/// Where printed lines go.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum PrintHandler {
    /// Writes each line to stdout.
    #[default]
    Stdout,
    /// Captures lines into a string, each terminated by `\n`.
    Buffer(String),
}

impl PrintHandler {
    /// Creates a handler that captures into an empty buffer.
    #[must_use]
    pub const fn buffer() -> Self {
        Self::Buffer(String::new())
    }

    /// Emits one line.
    pub fn println(&mut self, msg: &str) {
        match self {
            Self::Stdout => println!("{msg}"),
            Self::Buffer(buf) => {
                buf.push_str(msg);
                buf.push('\n');
            },
        }
    }

    /// Returns everything captured so far.
    ///
    /// Always empty for [`PrintHandler::Stdout`], which does not capture.
    ///
    /// # Example
    /// ```
    /// use dartish::interpreter::output::PrintHandler;
    ///
    /// let mut out = PrintHandler::buffer();
    /// out.println("x: 1");
    /// out.println("y: 2");
    ///
    /// assert_eq!(out.output(), "x: 1\ny: 2\n");
    /// ```
    #[must_use]
    pub fn output(&self) -> &str {
        match self {
            Self::Stdout => "",
            Self::Buffer(buf) => buf,
        }
    }

    /// Discards captured output. No-op for stdout.
    pub fn clear(&mut self) {
        if let Self::Buffer(buf) = self {
            buf.clear();
        }
    }
}
