/**
 * Passphrase Gate
 *
 * The workspace asks for a passphrase before showing anything. This is a
 * plain string comparison on the client. The API does not check it, so it
 * keeps casual visitors out and nothing more.
 */

/// Prompt shown when asking for the passphrase
pub const PROMPT: &str = "What's in your mind?";

/// Client-side passphrase check
///
/// Once passed, the gate stays open for the rest of the session.
///
/// # Example
///
/// ```rust
/// use codeshare::client::gate::PassphraseGate;
///
/// let mut gate = PassphraseGate::new(Some("codestory".to_string()));
/// assert!(!gate.attempt("guess"));
/// assert!(gate.attempt("codestory"));
/// assert!(gate.is_open());
/// ```
#[derive(Debug, Clone)]
pub struct PassphraseGate {
    secret: Option<String>,
    open: bool,
}

impl PassphraseGate {
    /// Create a gate; without a secret the gate starts open
    pub fn new(secret: Option<String>) -> Self {
        let open = secret.is_none();
        Self { secret, open }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Try a passphrase, returning whether the gate is now open
    ///
    /// A wrong attempt does not close an already open gate.
    pub fn attempt(&mut self, input: &str) -> bool {
        if !self.open {
            self.open = self.secret.as_deref() == Some(input);
            if !self.open {
                tracing::debug!("[Gate] Wrong passphrase");
            }
        }
        self.open
    }
}
