/// Result alias that carries the crate [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors reported by the animation engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Strip count or LEDs per strip is zero (or negative in the stored settings).
    ///
    /// The engine stays disabled until it is rebuilt with a valid topology.
    #[error("LED topology is not configured")]
    Unconfigured,
    /// Topology does not fit into the statically sized buffers.
    #[error("topology needs {required} LEDs on {strips} strips, capacity is {capacity}")]
    CapacityExceeded {
        required: usize,
        strips: usize,
        capacity: usize,
    },
    /// Pixel addressing went past the end of the buffer.
    #[error("pixel index {index} is out of bounds for {len} LEDs")]
    IndexOutOfBounds { index: usize, len: usize },
    /// Raw animation id outside of the known set.
    #[error("unknown animation id {0}")]
    InvalidAnimationId(u8),
}
