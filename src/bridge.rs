use std::fmt;

/// Name of the host object that owns the developer console.
pub const CONSOLE_OBJECT: &str = "CommandConsole";
pub const TOGGLE_METHOD: &str = "ToggleConsole";
pub const EXECUTE_METHOD: &str = "ExecuteCommand";

/// The two console operations the panel depends on.
pub trait ConsoleBridge {
    /// Show or hide the host console.
    fn toggle(&mut self);
    /// Run `command` in the host's own command grammar.
    fn execute(&mut self, command: &str);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvokeError {
    MissingMethod,
    Failed(String),
}

impl fmt::Display for InvokeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvokeError::MissingMethod => write!(f, "method not found"),
            InvokeError::Failed(msg) => write!(f, "invocation failed: {msg}"),
        }
    }
}

impl std::error::Error for InvokeError {}

/// A live object inside the host that can be called by method name.
pub trait HostObject {
    fn invoke(&self, method: &str, args: &[&str]) -> Result<(), InvokeError>;
}

/// Lookup of named host objects. Returns `None` while the object is not
/// loaded yet.
pub trait ConsoleHost {
    fn instance(&self, name: &str) -> Option<&dyn HostObject>;
}

/// Forwards console operations to the host's `CommandConsole` instance.
pub struct HostConsoleBridge<H> {
    host: H,
}

impl<H: ConsoleHost> HostConsoleBridge<H> {
    pub fn new(host: H) -> Self {
        Self { host }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    fn call(&self, method: &str, args: &[&str]) {
        let Some(console) = self.host.instance(CONSOLE_OBJECT) else {
            tracing::warn!(object = CONSOLE_OBJECT, method, "host console not available");
            return;
        };
        match console.invoke(method, args) {
            Ok(()) => tracing::info!(object = CONSOLE_OBJECT, method, ?args, "invoked host console"),
            Err(e) => tracing::warn!(object = CONSOLE_OBJECT, method, error = %e, "host console call failed"),
        }
    }
}

impl<H: ConsoleHost> ConsoleBridge for HostConsoleBridge<H> {
    fn toggle(&mut self) {
        self.call(TOGGLE_METHOD, &[]);
    }

    fn execute(&mut self, command: &str) {
        self.call(EXECUTE_METHOD, &[command]);
    }
}

/// Bridge that only records and logs what would have been sent.
#[derive(Debug, Default)]
pub struct LoggingBridge {
    pub console_visible: bool,
    pub history: Vec<String>,
}

impl ConsoleBridge for LoggingBridge {
    fn toggle(&mut self) {
        self.console_visible = !self.console_visible;
        tracing::info!(visible = self.console_visible, "console toggled");
    }

    fn execute(&mut self, command: &str) {
        tracing::info!(command, "execute");
        self.history.push(command.to_string());
    }
}
