/// A single record from the checkpoint log: the site tag and the
/// numeric value of the line's first key:value pair.
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    pub tag: String,
    pub value: f64,
}
