use std::thread;
use std::time::Duration;

/// Waits between chunks. Injected so the batch loop can be driven without
/// real wall-clock delays.
pub trait Pacer {
    fn pause(&mut self, duration: Duration);
}

/// Blocks the calling thread.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadPacer;

impl Pacer for ThreadPacer {
    fn pause(&mut self, duration: Duration) {
        if !duration.is_zero() {
            thread::sleep(duration);
        }
    }
}

impl<P: Pacer + ?Sized> Pacer for &mut P {
    fn pause(&mut self, duration: Duration) {
        (**self).pause(duration)
    }
}

/// Number of chunks needed to cover `len` items. Never emits a trailing empty chunk.
pub fn chunk_count(len: usize, chunk_size: usize) -> usize {
    len.div_ceil(chunk_size.max(1))
}
