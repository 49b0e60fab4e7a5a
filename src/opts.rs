use smart_default::SmartDefault;

/// Decoding options for a [`ResultMessage`](crate::result::ResultMessage)
///
/// ```rs
/// let opts = Opts {
///     strict_varint: true,
///     ..Default::default()
/// };
/// let message = ResultMessage::new(payload).with_opts(opts);
/// ```
#[derive(Debug, Clone, SmartDefault)]
pub struct Opts {
    /// Reject VARINT and DECIMAL magnitudes wider than 64 bits instead of keeping
    /// their low 64 bits
    #[default(false)]
    pub strict_varint: bool,

    /// Upper bound on the capacity reserved from a row or element count read
    /// from the wire. Counts above it still decode; the vector just grows.
    #[default(4096)]
    pub preallocate_limit: usize,
}
