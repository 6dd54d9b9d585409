//! Colored terminal output with secret redaction.
//!
//! Every message passes through the registered redactor before it reaches a
//! sink, so the portal API key can never appear in logs.

use std::io::Write;
use std::sync::{Arc, RwLock};
use termcolor::{BufferWriter, Color, ColorChoice, ColorSpec, WriteColor};

/// Rewrites messages before they are printed, masking registered secrets.
pub trait Redactor: Send + Sync {
    /// Return `message` with any secret material replaced.
    fn redact(&self, message: &str) -> String;
}

/// Redactor that masks an explicit list of secret strings.
#[derive(Default)]
pub struct SecretRedactor {
    secrets: RwLock<Vec<String>>,
}

impl SecretRedactor {
    /// Create an empty redactor
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a secret so it is masked in all subsequent output.
    ///
    /// Must be called before the secret is used anywhere else.
    pub fn register(&self, secret: &str) {
        if secret.is_empty() {
            return;
        }
        if let Ok(mut secrets) = self.secrets.write() {
            secrets.push(secret.to_string());
        }
    }
}

impl Redactor for SecretRedactor {
    fn redact(&self, message: &str) -> String {
        let secrets = match self.secrets.read() {
            Ok(secrets) => secrets,
            Err(_) => return "<redaction unavailable>".to_string(),
        };
        let mut out = message.to_string();
        for secret in secrets.iter() {
            out = out.replace(secret, "***");
        }
        out
    }
}

/// Output manager for consistent colored terminal output
pub struct OutputManager {
    bufwtr: BufferWriter,
    redactor: Arc<dyn Redactor>,
    quiet: bool,
}

impl Clone for OutputManager {
    fn clone(&self) -> Self {
        Self {
            bufwtr: BufferWriter::stdout(ColorChoice::Auto),
            redactor: Arc::clone(&self.redactor),
            quiet: self.quiet,
        }
    }
}

impl std::fmt::Debug for OutputManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OutputManager")
            .field("quiet", &self.quiet)
            .finish_non_exhaustive()
    }
}

impl OutputManager {
    /// Create a new output manager with the given redactor
    pub fn new(redactor: Arc<dyn Redactor>, quiet: bool) -> Self {
        Self {
            bufwtr: BufferWriter::stdout(ColorChoice::Auto),
            redactor,
            quiet,
        }
    }

    fn emit(&self, marker: &str, color: Color, bold: bool, message: &str) {
        if self.quiet {
            return;
        }
        let message = self.redactor.redact(message);
        let mut buffer = self.bufwtr.buffer();
        let _ = buffer.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(bold));
        let _ = write!(&mut buffer, "{marker}");
        let _ = buffer.reset();
        let _ = writeln!(&mut buffer, " {message}");
        let _ = self.bufwtr.print(&buffer);
    }

    /// Print an info message (normal output)
    pub fn info(&self, message: &str) {
        self.emit("ℹ", Color::Cyan, false, message);
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        self.emit("✓", Color::Green, true, message);
    }

    /// Print a warning message
    pub fn warn(&self, message: &str) {
        self.emit("⚠", Color::Yellow, true, message);
    }

    /// Print an error message (always shown, even in quiet mode)
    pub fn error(&self, message: &str) {
        let message = self.redactor.redact(message);
        let bufwtr = BufferWriter::stderr(ColorChoice::Auto);
        let mut buffer = bufwtr.buffer();

        if buffer
            .set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))
            .is_err()
            || write!(&mut buffer, "✗").is_err()
            || buffer.reset().is_err()
            || writeln!(&mut buffer, " {message}").is_err()
            || bufwtr.print(&buffer).is_err()
        {
            // Stderr failed - fallback to stdout as last resort
            println!("✗ {message}");
        }
    }

    /// Print a plain message (respects quiet mode)
    pub fn println(&self, message: &str) {
        if self.quiet {
            return;
        }
        let message = self.redactor.redact(message);
        let mut buffer = self.bufwtr.buffer();
        let _ = writeln!(&mut buffer, "{message}");
        let _ = self.bufwtr.print(&buffer);
    }

    /// Print indented text (for sub-items)
    pub fn indent(&self, message: &str) {
        if self.quiet {
            return;
        }
        let message = self.redactor.redact(message);
        let mut buffer = self.bufwtr.buffer();
        let _ = writeln!(&mut buffer, "    {message}");
        let _ = self.bufwtr.print(&buffer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redactor_masks_registered_secret() {
        let redactor = SecretRedactor::new();
        redactor.register("hunter2");
        assert_eq!(
            redactor.redact("Authorization: Bearer hunter2"),
            "Authorization: Bearer ***"
        );
    }

    #[test]
    fn redactor_masks_every_occurrence() {
        let redactor = SecretRedactor::new();
        redactor.register("tok");
        assert_eq!(redactor.redact("tok and tok again"), "*** and *** again");
    }

    #[test]
    fn redactor_ignores_empty_secret() {
        let redactor = SecretRedactor::new();
        redactor.register("");
        assert_eq!(redactor.redact("plain text"), "plain text");
    }

    #[test]
    fn unregistered_text_passes_through() {
        let redactor = SecretRedactor::new();
        redactor.register("secret");
        assert_eq!(redactor.redact("nothing to hide"), "nothing to hide");
    }
}
