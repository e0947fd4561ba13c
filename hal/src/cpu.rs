//! CPU abstraction

/// CPU-specific operations
///
/// The early-boot kernel only needs to park the processor once its output is
/// done, so this trait stays small.
pub trait CpuHal {
    /// Halts the CPU until the next interrupt
    fn halt(&self);

    /// Halts forever.
    fn halt_loop(&self) -> ! {
        loop {
            self.halt();
        }
    }
}
