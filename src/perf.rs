use std::time::Instant;

/// 耗时统计 Guard：drop 时记录 elapsed_ms
///
/// 使用方式：
/// ```ignore
/// let _perf = inventory_export::perf::PerfGuard::new("process_raw");
/// // do work...
/// ```
pub struct PerfGuard {
    op: &'static str,
    start: Instant,
}

impl PerfGuard {
    pub fn new(op: &'static str) -> Self {
        Self {
            op,
            start: Instant::now(),
        }
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }
}

impl Drop for PerfGuard {
    fn drop(&mut self) {
        let elapsed_ms = self.elapsed_ms();
        tracing::info!(target: "perf", op = self.op, elapsed_ms, "done");
    }
}
