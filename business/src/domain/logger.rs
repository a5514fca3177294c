/// Logging port injected into every use case.
///
/// Adapters live in the infrastructure layer; the domain only sees messages.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}
